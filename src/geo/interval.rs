///
/// A closed range of curve parameter values
///
/// An interval always satisfies `min <= max`: operations that can produce no interval
/// at all (such as clipping) return an `Option<Interval>` rather than an inverted
/// sentinel value.
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Interval {
    min: f64,
    max: f64
}

impl Interval {
    /// The whole parameter domain of a curve
    pub const UNIT: Interval = Interval { min: 0.0, max: 1.0 };

    ///
    /// Creates a new interval from its bounds
    ///
    #[inline]
    pub fn new(min: f64, max: f64) -> Interval {
        debug_assert!(min <= max);

        Interval { min, max }
    }

    ///
    /// The lower bound of this interval
    ///
    #[inline]
    pub fn min(&self) -> f64 {
        self.min
    }

    ///
    /// The upper bound of this interval
    ///
    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    ///
    /// The width of this interval
    ///
    #[inline]
    pub fn extent(&self) -> f64 {
        self.max - self.min
    }

    ///
    /// The midpoint of this interval
    ///
    #[inline]
    pub fn middle(&self) -> f64 {
        (self.min + self.max) * 0.5
    }

    ///
    /// Maps a sub-interval expressed in [0,1] onto this interval
    ///
    /// This is how a curve portion's tracked domain is narrowed: clipping yields a
    /// sub-range of the portion's local parameter space, and mapping it onto the
    /// tracked domain re-expresses it in the original curve's parameter space.
    ///
    #[inline]
    pub fn map_onto(&self, sub: Interval) -> Interval {
        let length = self.extent();

        Interval {
            min: sub.min * length + self.min,
            max: sub.max * length + self.min
        }
    }
}
