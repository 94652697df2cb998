//!
//! # Basic geometric types used by the clipping algorithm
//!
//! `Interval` tracks the parameter sub-domain a curve portion represents, and
//! `convex_hull` reduces a point set to its convex hull boundary in place.
//!

mod interval;
mod convex_hull;

pub use self::interval::*;
pub use self::convex_hull::*;
