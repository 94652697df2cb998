use super::basis::*;
use super::super::geo::*;
use super::super::coordinate::*;

///
/// Restricts a bezier curve in place to the parameter interval [0,t]
///
/// Performs the de Casteljau interpolation sweeps that subdivision at t would, keeping
/// the left-hand set of weights. The number of control points is unchanged.
///
pub fn left_portion<P: Coordinate>(t: f64, curve: &mut [P]) {
    let len = curve.len();

    for i in 1..len {
        for j in (i..len).rev() {
            curve[j] = lerp(t, curve[j-1], curve[j]);
        }
    }
}

///
/// Restricts a bezier curve in place to the parameter interval [t,1]
///
/// The mirror image of `left_portion`.
///
pub fn right_portion<P: Coordinate>(t: f64, curve: &mut [P]) {
    let len = curve.len();

    for i in 1..len {
        for j in 0..(len-i) {
            curve[j] = lerp(t, curve[j], curve[j+1]);
        }
    }
}

///
/// Restricts a bezier curve in place to a parameter sub-interval, preserving its degree
///
/// The interval is expressed in the curve's current parameter space. An interior
/// sub-interval is produced by composing a right restriction at the lower bound with a
/// left restriction at the cut point re-derived in the new local parameterization;
/// this two step composition is exact to floating precision.
///
pub fn portion<P: Coordinate>(curve: &mut [P], interval: Interval) {
    if interval.min() == 0.0 {
        if interval.max() == 1.0 {
            return;
        }
        left_portion(interval.max(), curve);
        return;
    }

    right_portion(interval.min(), curve);

    if interval.max() == 1.0 {
        return;
    }

    let t = interval.extent() / (1.0 - interval.min());
    left_portion(t, curve);
}

///
/// True if all of the curve's control points are within `tolerance` of each other, ie
/// the curve is numerically a single point
///
pub fn is_constant<P: Coordinate>(curve: &[P], tolerance: f64) -> bool {
    curve.iter().all(|point| are_near(point, &curve[0], tolerance))
}
