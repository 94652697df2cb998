use super::error::*;
use super::fat_line::*;
use super::focus::*;
use super::super::portion::*;
use super::super::super::consts::*;
use super::super::super::coordinate::*;
use super::super::super::geo::*;

use log::{debug, trace};

///
/// A curve portion together with the sub-interval of the original [0,1] domain that it
/// represents
///
/// The tracked domain and the control points are only ever narrowed together, so the
/// control points always describe exactly the tracked sub-domain of the original curve.
///
#[derive(Clone)]
pub (super) struct CurveDomain<Point> {
    pub points: Vec<Point>,
    pub domain: Interval
}

impl<Point: Coordinate+Coordinate2D> CurveDomain<Point> {
    ///
    /// Creates a curve portion covering the domain `domain` of the original curve
    ///
    pub fn new(points: &[Point], domain: Interval) -> CurveDomain<Point> {
        CurveDomain {
            points: points.to_vec(),
            domain: domain
        }
    }

    ///
    /// Narrows this portion to a sub-interval of its local parameter space, updating
    /// the tracked domain and reparameterizing the control points as one step
    ///
    pub fn clip_to(&mut self, sub_interval: Interval) {
        self.domain = self.domain.map_onto(sub_interval);
        portion(&mut self.points, sub_interval);
    }

    ///
    /// True if this portion has collapsed to a single point
    ///
    pub fn is_point(&self) -> bool {
        is_constant(&self.points, SMALL_DISTANCE)
    }

    ///
    /// The point midway between the first and last control points (the portion's
    /// location when it is numerically a single point)
    ///
    pub fn middle(&self) -> Point {
        middle_point(&self.points[0], &self.points[self.points.len()-1])
    }
}

///
/// One of the two clipping strategies the subdivision driver can run
///
/// A strategy supplies the clip operation itself plus the early-exit predicates that
/// only apply to it, so the driver can stay a single routine.
///
pub (super) trait ClipStrategy {
    ///
    /// Clips the subject curve against the reference curve, returning the sub-interval
    /// of the subject's local domain that can still contain solutions, or `None` when
    /// no part of it can
    ///
    fn clip<Point: Coordinate+Coordinate2D>(reference: &[Point], subject: &[Point]) -> Result<Option<Interval>, ClipError>;

    /// Whether a pair of point-degenerate portions is itself a solution when the two
    /// points coincide (and a dead branch when they don't)
    const TEST_COINCIDENT_POINTS: bool;

    /// Whether the driver accepts the current sub-domains as a solution when further
    /// refinement would drop below the numeric precision floor
    const ACCEPT_ON_PRECISION_STALL: bool;
}

///
/// Strategy locating the points where the two curves cross
///
pub (super) struct IntersectionPoint;

///
/// Strategy locating the parameter pairs where the two curves' normals are collinear
///
pub (super) struct CollinearNormal;

impl ClipStrategy for IntersectionPoint {
    const TEST_COINCIDENT_POINTS: bool      = true;
    const ACCEPT_ON_PRECISION_STALL: bool   = false;

    fn clip<Point: Coordinate+Coordinate2D>(reference: &[Point], subject: &[Point]) -> Result<Option<Interval>, ClipError> {
        let fat_line = if is_constant(reference, SMALL_DISTANCE) {
            FatLine::orthogonal_to_chord(reference, subject)?
        } else {
            FatLine::from_curve(reference)?
        };

        fat_line.clip(subject)
    }
}

impl ClipStrategy for CollinearNormal {
    const TEST_COINCIDENT_POINTS: bool      = false;
    const ACCEPT_ON_PRECISION_STALL: bool   = true;

    fn clip<Point: Coordinate+Coordinate2D>(reference: &[Point], subject: &[Point]) -> Result<Option<Interval>, ClipError> {
        let focus = make_focus(reference)?;

        clip_by_focus(subject, &focus)
    }
}

///
/// The subdivision driver: repeatedly clips one curve against the other, alternating
/// their roles, until both tracked sub-domains converge to the requested precision
///
/// Each surviving (domain A, domain B) pair is appended to `doms_a`/`doms_b` in
/// lockstep. A clip that discards the whole domain ends the branch with no solution; a
/// clip that keeps more than `MIN_CLIPPED_SIZE_THRESHOLD` of it bisects the curve with
/// the wider domain at its midpoint and recurses once per half against the other,
/// unsplit curve. `budget` bounds the total number of driver calls per top-level
/// invocation and must be initialized to `MAX_RECURSION_CALLS` by the caller.
///
pub (super) fn iterate<Strategy, Point>(
    doms_a: &mut Vec<Interval>, doms_b: &mut Vec<Interval>,
    a: &[Point], b: &[Point],
    dom_a: Interval, dom_b: Interval,
    precision: f64, budget: &mut usize) -> Result<(), ClipError>
where
    Strategy:   ClipStrategy,
    Point:      Coordinate+Coordinate2D,
{
    if *budget == 0 {
        debug!("Recursion budget exhausted: abandoning branch A:{:?} B:{:?}", dom_a, dom_b);
        return Ok(());
    }
    *budget -= 1;

    let mut curve_a = CurveDomain::new(a, dom_a);
    let mut curve_b = CurveDomain::new(b, dom_b);

    // Two point-degenerate curves either coincide or miss before any clipping happens
    if Strategy::TEST_COINCIDENT_POINTS && curve_a.is_point() && curve_b.is_point() {
        if are_near(&curve_a.middle(), &curve_b.middle(), SMALL_DISTANCE) {
            doms_a.push(curve_a.domain);
            doms_b.push(curve_b.domain);
        }
        return Ok(());
    }

    let mut reference_is_a  = true;
    let mut iteration       = 0;

    loop {
        iteration += 1;
        if iteration >= MAX_ITERATION_COUNT {
            break;
        }
        if curve_a.domain.extent() < precision && curve_b.domain.extent() < precision {
            // Both sub-domains have converged
            break;
        }

        // Clip the subject curve against the current reference curve
        let clipped = {
            let (reference, subject) = if reference_is_a { (&curve_a, &curve_b) } else { (&curve_b, &curve_a) };
            Strategy::clip(&reference.points, &subject.points)?
        };

        let clipped = match clipped {
            Some(clipped)   => clipped,
            None            => {
                trace!("Clip discarded the whole domain: no solutions in branch A:{:?} B:{:?}", curve_a.domain, curve_b.domain);
                return Ok(());
            }
        };
        trace!("Clipped subject to [{}, {}] (iteration {})", clipped.min(), clipped.max(), iteration);

        let subject = if reference_is_a { &mut curve_b } else { &mut curve_a };
        subject.clip_to(clipped);

        if Strategy::ACCEPT_ON_PRECISION_STALL && iteration > 1 && subject.domain.extent() <= MAX_PRECISION {
            // Refining further would only lose floating-point precision
            break;
        }
        if Strategy::ACCEPT_ON_PRECISION_STALL && iteration > 1 && subject.is_point() {
            break;
        }

        if Strategy::TEST_COINCIDENT_POINTS && curve_a.is_point() && curve_b.is_point() {
            if are_near(&curve_a.middle(), &curve_b.middle(), SMALL_DISTANCE) {
                // The portions meet: accept the current sub-domains
                break;
            } else {
                return Ok(());
            }
        }

        if clipped.extent() > MIN_CLIPPED_SIZE_THRESHOLD {
            // The clip shrank the subject by less than 20%: convergence has stalled, so
            // bisect whichever curve has the wider domain and try each half against the
            // other curve
            trace!("Clip retained {} of the subject domain: bisecting", clipped.extent());

            let lower_half = Interval::new(0.0, 0.5);
            let upper_half = Interval::new(0.5 + MAX_PRECISION, 1.0);

            let (split, other, split_is_a) = if curve_a.domain.extent() > curve_b.domain.extent() {
                (&curve_a, &curve_b, true)
            } else {
                (&curve_b, &curve_a, false)
            };

            if Strategy::ACCEPT_ON_PRECISION_STALL && split.domain.extent()/2.0 < MAX_PRECISION {
                // The halves would be narrower than the precision floor
                break;
            }

            let mut first_half  = split.clone();
            let mut second_half = split.clone();
            first_half.clip_to(lower_half);
            second_half.clip_to(upper_half);

            if Strategy::ACCEPT_ON_PRECISION_STALL && (first_half.is_point() || second_half.is_point()) {
                break;
            }

            // The recursive calls write into the output slot matching the curve they
            // received as their first argument
            let (doms_split, doms_other) = if split_is_a { (doms_a, doms_b) } else { (doms_b, doms_a) };

            iterate::<Strategy, Point>(doms_split, doms_other, &first_half.points, &other.points, first_half.domain, other.domain, precision, budget)?;
            iterate::<Strategy, Point>(doms_split, doms_other, &second_half.points, &other.points, second_half.domain, other.domain, precision, budget)?;

            return Ok(());
        }

        // The roles alternate so each curve in turn is clipped against the other,
        // driving both domains down symmetrically
        reference_is_a = !reference_is_a;
    }

    doms_a.push(curve_a.domain);
    doms_b.push(curve_b.domain);

    Ok(())
}
