use super::error::*;
use super::super::super::coordinate::*;
use super::super::super::geo::*;

///
/// Accumulates the minimal and maximal parameter values encountered while scanning a
/// distance-profile convex hull
///
pub (super) struct ParameterRange {
    t_min: f64,
    t_max: f64,
    found: bool
}

impl ParameterRange {
    ///
    /// Creates an accumulator that has seen no parameter values yet
    ///
    pub fn new() -> ParameterRange {
        ParameterRange {
            t_min: 1.0,
            t_max: 0.0,
            found: false
        }
    }

    ///
    /// Widens the range to include a parameter value
    ///
    #[inline]
    pub fn include(&mut self, t: f64) {
        if self.t_min > t { self.t_min = t; }
        if self.t_max < t { self.t_max = t; }
        self.found = true;
    }

    ///
    /// The surviving sub-interval: `None` when nothing was found, an error if the
    /// accumulated bounds are inverted (which would break the clipping invariant)
    ///
    pub fn into_interval(self) -> Result<Option<Interval>, ClipError> {
        if !self.found {
            Ok(None)
        } else if self.t_min > self.t_max {
            Err(ClipError::InvertedClipInterval { min: self.t_min, max: self.t_max })
        } else {
            Ok(Some(Interval::new(self.t_min, self.t_max)))
        }
    }
}

///
/// The x coordinate at which the line through p1 and p2 meets the horizontal line at
/// height y
///
/// Only called for segments known to cross that height, so p1 and p2 never share a y
/// coordinate.
///
#[inline]
pub (super) fn horizontal_intercept<P: Coordinate2D>(p1: &P, p2: &P, y: f64) -> f64 {
    let s = (y - p1.y()) / (p2.y() - p1.y());

    (p2.x() - p1.x())*s + p1.x()
}
