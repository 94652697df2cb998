use super::super::coordinate::*;

///
/// Returns the hodograph (derivative curve) of a bezier curve
///
/// The hodograph of a degree-n curve is the degree n-1 curve with control points
/// `n*(B[i+1]-B[i])`. A curve with a single control point has a single zero vector
/// as its hodograph.
///
pub fn derivative<P: Coordinate>(curve: &[P]) -> Vec<P> {
    if curve.len() <= 1 {
        return vec![P::origin(); curve.len()];
    }

    let degree = curve.len() - 1;

    (0..degree)
        .map(|i| (curve[i+1] - curve[i]) * (degree as f64))
        .collect()
}

///
/// Returns the hodograph of a bezier curve rotated by 90 degrees
///
/// The resulting curve N has N(t) orthogonal to the tangent of the source curve at t,
/// for every t.
///
pub fn normal_hodograph<P: Coordinate+Coordinate2D>(curve: &[P]) -> Vec<P> {
    derivative(curve)
        .iter()
        .map(|p| rot90(p))
        .collect()
}
