use thiserror::Error;

///
/// Internal invariant violations the clipping solvers can report
///
/// These indicate a precondition breach or a broken invariant inside the algorithm,
/// not a malformed ordinary input: geometric degeneracies such as a curve portion
/// collapsing to a point or a clip discarding the whole domain are handled by the
/// algorithm itself and are never reported as errors.
///
#[derive(Copy, Clone, PartialEq, Debug, Error)]
pub enum ClipError {
    /// A curve was supplied with fewer control points than the operation requires
    #[error("the curve needs at least {needed} control points but has {found}")]
    CurveTooShort { needed: usize, found: usize },

    /// No orientation line could be constructed because the curve that was meant to
    /// supply its direction is a single point
    #[error("cannot construct an orientation line from a zero-length chord")]
    ZeroLengthOrientationLine,

    /// The 2x2 system blending a curve's end normals into a closed focus is singular
    #[error("cannot construct a closed focus: the blending system is singular")]
    SingularFocusSystem,

    /// A clipper produced an inverted (non-empty) parameter interval
    #[error("clipping produced the inverted interval [{min}, {max}]")]
    InvertedClipInterval { min: f64, max: f64 },

    /// The solver retained differing numbers of sub-domains for the two curves
    #[error("retained {found_a} sub-domains for the first curve but {found_b} for the second")]
    MismatchedDomains { found_a: usize, found_b: usize },
}
