use super::super::coordinate::*;

///
/// Linearly interpolates between two points
///
#[inline]
pub fn lerp<P: Coordinate>(t: f64, p1: P, p2: P) -> P {
    p1*(1.0-t) + p2*t
}

///
/// Evaluates a bezier curve of arbitrary degree at a position using de Casteljau's
/// algorithm
///
/// The curve must have at least one control point.
///
pub fn de_casteljau<P: Coordinate>(t: f64, curve: &[P]) -> P {
    let mut points = curve.to_vec();

    for pass in 1..points.len() {
        for i in 0..(points.len()-pass) {
            points[i] = lerp(t, points[i], points[i+1]);
        }
    }

    points[0]
}
