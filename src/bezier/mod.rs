//!
//! # Routines for bezier curves of arbitrary degree
//!
//! A curve here is just an ordered slice of control points: a degree-n curve has n+1
//! of them. The `clipping` module contains the curve/curve intersection and collinear
//! normal solvers; the other modules supply the curve manipulations they are built on.
//!

mod basis;
mod derivative;
mod portion;
mod clipping;

pub use self::basis::*;
pub use self::derivative::*;
pub use self::portion::*;
pub use self::clipping::*;
