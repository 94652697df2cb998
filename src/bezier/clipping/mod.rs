//!
//! # Bezier clipping solvers
//!
//! The two solvers here share one subdivision driver and differ only in the clipping
//! strategy it runs: intersection points are found by clipping against fat lines,
//! collinear normals by clipping against the zero set of a focus-based distance
//! surface.
//!

mod error;
mod scan;
mod fat_line;
mod focus;
mod iterate;

pub use self::error::*;
pub use self::fat_line::*;
pub use self::focus::*;

use self::iterate::*;
use super::super::consts::*;
use super::super::coordinate::*;
use super::super::geo::*;

///
/// Runs the subdivision driver over the full domain of both curves and converts the
/// surviving sub-domain pairs into parameter pairs
///
fn get_solutions<Strategy, Point>(a: &[Point], b: &[Point], precision: f64) -> Result<Vec<(f64, f64)>, ClipError>
where
    Strategy:   ClipStrategy,
    Point:      Coordinate+Coordinate2D,
{
    let precision   = if precision < MAX_PRECISION { MAX_PRECISION } else { precision };

    let mut doms_a  = vec![];
    let mut doms_b  = vec![];
    let mut budget  = MAX_RECURSION_CALLS;

    iterate::<Strategy, Point>(&mut doms_a, &mut doms_b, a, b, Interval::UNIT, Interval::UNIT, precision, &mut budget)?;

    // Sub-domains are appended pairwise, so the two lists must stay in lockstep
    if doms_a.len() != doms_b.len() {
        return Err(ClipError::MismatchedDomains { found_a: doms_a.len(), found_b: doms_b.len() });
    }

    Ok(doms_a.iter()
        .zip(doms_b.iter())
        .map(|(dom_a, dom_b)| (dom_a.middle(), dom_b.middle()))
        .collect())
}

///
/// Finds the parameter pairs (t_a, t_b) at which two bezier curves cross, using the
/// Bezier clipping algorithm
///
/// Both curves need at least 2 control points. `precision` is the maximum sub-domain
/// width accepted for a solution, silently floored to `MAX_PRECISION`. The pairs are
/// returned in no particular order, and tangential or degenerate configurations can
/// produce near-duplicate pairs, which are not removed here.
///
pub fn find_intersections_bezier_clipping<Point: Coordinate+Coordinate2D>(a: &[Point], b: &[Point], precision: f64) -> Result<Vec<(f64, f64)>, ClipError> {
    if a.len() < 2 {
        return Err(ClipError::CurveTooShort { needed: 2, found: a.len() });
    }
    if b.len() < 2 {
        return Err(ClipError::CurveTooShort { needed: 2, found: b.len() });
    }

    get_solutions::<IntersectionPoint, Point>(a, b, precision)
}

///
/// Finds the parameter pairs (t_a, t_b) at which the normals of two bezier curves are
/// collinear (ie, where the curves share a common normal line), using the Bezier
/// clipping algorithm
///
/// Both curves need at least 3 control points, since building a focus requires a
/// hodograph with at least 2. `precision` is the maximum sub-domain width accepted for
/// a solution, silently floored to `MAX_PRECISION`.
///
pub fn find_collinear_normal<Point: Coordinate+Coordinate2D>(a: &[Point], b: &[Point], precision: f64) -> Result<Vec<(f64, f64)>, ClipError> {
    if a.len() < 3 {
        return Err(ClipError::CurveTooShort { needed: 3, found: a.len() });
    }
    if b.len() < 3 {
        return Err(ClipError::CurveTooShort { needed: 3, found: b.len() });
    }

    get_solutions::<CollinearNormal, Point>(a, b, precision)
}
