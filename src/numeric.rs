use super::coordinate::*;

///
/// Computes the binomial coefficient (n, k)
///
/// Evaluated multiplicatively, which is exact for the degrees a bezier curve has in
/// practice.
///
pub fn binomial(n: usize, k: usize) -> f64 {
    debug_assert!(k <= n);

    let k           = k.min(n-k);
    let mut result  = 1.0;

    for i in 0..k {
        result = result * ((n-i) as f64) / ((i+1) as f64);
    }

    result
}

///
/// Solves the 2x2 linear system `[p1 p2] * x = q` where the points are the columns
/// of the matrix
///
/// Returns `None` when the system does not have exactly one solution.
///
pub fn solve_2x2<P: Coordinate+Coordinate2D>(p1: &P, p2: &P, q: &P) -> Option<(f64, f64)> {
    let det = cross(p1, p2);

    if det == 0.0 {
        None
    } else {
        Some((cross(q, p2) / det, cross(p1, q) / det))
    }
}
