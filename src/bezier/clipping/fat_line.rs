use super::error::*;
use super::scan::*;
use super::super::portion::*;
use super::super::super::consts::*;
use super::super::super::coordinate::*;
use super::super::super::geo::*;
use super::super::super::line::*;

///
/// A 'fat line' is a line with a width: an orientation line plus a perpendicular
/// distance band guaranteed to contain an entire curve. It's the bound used by the
/// intersection-point clipping strategy described by Sederberg and Nishita.
///
pub struct FatLine {
    /// The normalized coefficients (a, b, c) of the central line ax+by+c=0, with a^2+b^2 = 1
    coeff: (f64, f64, f64),

    /// The signed distance from the central line to the lower edge of the band
    d_min: f64,

    /// The signed distance from the central line to the upper edge of the band
    d_max: f64
}

impl FatLine {
    ///
    /// Creates the fat line around `curve` whose central line is `line`
    ///
    /// The distance band is the range of the signed distances of the curve's control
    /// points from the line, always widened to include the line itself.
    ///
    pub fn new<P: Coordinate+Coordinate2D, L: Line<Point=P>>(line: &L, curve: &[P]) -> Result<FatLine, ClipError> {
        let (a, b, c) = line_coefficients_2d(line);

        if a == 0.0 && b == 0.0 {
            return Err(ClipError::ZeroLengthOrientationLine);
        }

        let mut d_min = 0.0;
        let mut d_max = 0.0;
        for point in curve.iter() {
            let distance = a*point.x() + b*point.y() + c;

            if distance < d_min { d_min = distance; }
            if distance > d_max { d_max = distance; }
        }

        Ok(FatLine {
            coeff:  (a, b, c),
            d_min:  d_min,
            d_max:  d_max
        })
    }

    ///
    /// Creates the fat line bounding a curve, picking the curve's own orientation line
    ///
    /// The line runs from the first control point to the control point furthest along
    /// the curve that is sufficiently distinct from it. The curve must not be a single
    /// point: constant curves are expected to have been diverted to
    /// `orthogonal_to_chord` before this is called.
    ///
    pub fn from_curve<P: Coordinate+Coordinate2D>(curve: &[P]) -> Result<FatLine, ClipError> {
        // Scan from the far end for a point distinct from the first (the tolerance here
        // must match the one is_constant uses, see SMALL_DISTANCE)
        let mut far = curve.len() - 1;
        while far > 0 && are_near(&curve[0], &curve[far], SMALL_DISTANCE) {
            far -= 1;
        }

        if far == 0 {
            return Err(ClipError::ZeroLengthOrientationLine);
        }

        FatLine::new(&(curve[0], curve[far]), curve)
    }

    ///
    /// Creates the fat line for a point-degenerate curve
    ///
    /// With no chord of its own to orient along, the line is placed through the
    /// curve's midpoint, orthogonal to the chord of the other curve in the clipping
    /// pair.
    ///
    pub fn orthogonal_to_chord<P: Coordinate+Coordinate2D>(curve: &[P], chord_curve: &[P]) -> Result<FatLine, ClipError> {
        if is_constant(chord_curve, SMALL_DISTANCE) {
            return Err(ClipError::ZeroLengthOrientationLine);
        }

        let middle      = middle_point(&curve[0], &curve[curve.len()-1]);
        let direction   = rot90(&(chord_curve[chord_curve.len()-1] - chord_curve[0]));

        FatLine::new(&(middle, middle + direction), curve)
    }

    ///
    /// The signed distances from the central line to the lower and upper edges of the
    /// band (the band always contains the line itself)
    ///
    #[inline]
    pub fn bounds(&self) -> (f64, f64) {
        (self.d_min, self.d_max)
    }

    ///
    /// The signed perpendicular distance between a point and the central line
    ///
    #[inline]
    pub fn distance<P: Coordinate2D>(&self, point: &P) -> f64 {
        let (a, b, c) = self.coeff;
        a*point.x() + b*point.y() + c
    }

    ///
    /// Clips a bezier curve against this fat line, returning the sub-interval of the
    /// curve's parameter domain that can still contain points inside the band
    ///
    /// The curve's control points are projected to (i/n, signed distance) pairs whose
    /// convex hull bounds the distance profile of the whole curve; the hull boundary
    /// is then scanned for the parts lying inside the band. `None` means no part of
    /// the domain survives.
    ///
    pub fn clip<P: Coordinate+Coordinate2D>(&self, curve: &[P]) -> Result<Option<Interval>, ClipError> {
        let degree      = (curve.len() - 1) as f64;
        let mut profile = curve.iter()
            .enumerate()
            .map(|(i, point)| P::from_components(&[(i as f64)/degree, self.distance(point)]))
            .collect::<Vec<_>>();

        convex_hull(&mut profile);

        scan_hull_against_band(&profile, self.d_min, self.d_max)
    }
}

///
/// Scans a convex hull boundary (closing edge included) for the parts lying inside a
/// horizontal band, accumulating the minimal and maximal x coordinates over in-band
/// vertices and band-edge crossings
///
fn scan_hull_against_band<P: Coordinate2D>(hull: &[P], bound_min: f64, bound_max: f64) -> Result<Option<Interval>, ClipError> {
    let mut range = ParameterRange::new();

    let mut prev_lower  = hull[0].y() < bound_min;
    let mut prev_higher = hull[0].y() > bound_max;
    if !prev_lower && !prev_higher {
        // First vertex starts inside the band
        range.include(hull[0].x());
    }

    for i in 1..hull.len() {
        let lower   = hull[i].y() < bound_min;
        let higher  = hull[i].y() > bound_max;

        if !lower && !higher {
            range.include(hull[i].x());
        }
        if lower != prev_lower {
            // This edge crosses the lower edge of the band
            range.include(horizontal_intercept(&hull[i-1], &hull[i], bound_min));
            prev_lower = lower;
        }
        if higher != prev_higher {
            // This edge crosses the upper edge of the band
            range.include(horizontal_intercept(&hull[i-1], &hull[i], bound_max));
            prev_higher = higher;
        }
    }

    // The closing edge from the last vertex back to the first can cross the band too
    let last    = hull.len() - 1;
    let lower   = hull[0].y() < bound_min;
    let higher  = hull[0].y() > bound_max;

    if lower != prev_lower {
        range.include(horizontal_intercept(&hull[last], &hull[0], bound_min));
    }
    if higher != prev_higher {
        range.include(horizontal_intercept(&hull[last], &hull[0], bound_max));
    }

    range.into_interval()
}
