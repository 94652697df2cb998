//!
//! # Bezier clipping
//!
//! Finds the parameter pairs at which two planar Bezier curves of arbitrary degree
//! cross, or at which they share a collinear normal, using the Bezier clipping
//! algorithm (Sederberg, Nishita, 1990 - Curve intersection using Bezier clipping).
//!
//! Curves are represented as slices of control points. The two top-level operations
//! are [`find_intersections_bezier_clipping`] and [`find_collinear_normal`]; the
//! building blocks they are made of (convex hull, curve portioning, fat lines,
//! focus curves) are exported as well.
//!

pub mod consts;
pub mod coordinate;
pub mod numeric;
pub mod geo;
pub mod line;
pub mod bezier;

pub use self::coordinate::*;
pub use self::geo::*;
pub use self::bezier::{find_intersections_bezier_clipping, find_collinear_normal, ClipError};
