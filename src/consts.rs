/// Distance below which two points are considered to be the same point
///
/// This is also the tolerance used to decide that a curve portion has collapsed to a
/// single point, and it must stay in sync with the tolerance used when picking an
/// orientation line (a portion that counts as constant must never be asked for one)
pub const SMALL_DISTANCE: f64 = 1e-5;

/// The finest sub-domain width the clipping iteration will try to resolve (requested
/// precisions smaller than this are floored to it)
pub const MAX_PRECISION: f64 = 1e-8;

/// A clip that retains more than this ratio of the subject's domain counts as stalled
/// and triggers a bisection step instead of further clipping
pub const MIN_CLIPPED_SIZE_THRESHOLD: f64 = 0.8;

/// Maximum number of clipping iterations performed by a single driver call
pub const MAX_ITERATION_COUNT: usize = 100;

/// Maximum number of driver calls (including recursive bisection calls) per top-level
/// invocation, guaranteeing termination under pathological floating-point behaviour
pub const MAX_RECURSION_CALLS: usize = 100;
