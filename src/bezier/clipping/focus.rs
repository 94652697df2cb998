use super::error::*;
use super::scan::*;
use super::super::derivative::*;
use super::super::super::coordinate::*;
use super::super::super::geo::*;
use super::super::super::numeric::*;

use itertools::Itertools;

///
/// Computes a closed focus curve for a bezier curve
///
/// A focus is a curve F such that for every t, the line through the source curve at t
/// perpendicular to its tangent also passes through F(t): it exists for any curve and
/// is what the collinear-normal clipping strategy measures distances against. The
/// focus is built as B(t) + c(t)*N(t), where N is the 90-degree-rotated hodograph and
/// c is the linear blend that makes the ends of the focus meet.
///
/// The curve must have at least 3 control points (its hodograph needs at least 2).
///
pub fn make_focus<P: Coordinate+Coordinate2D>(curve: &[P]) -> Result<Vec<P>, ClipError> {
    debug_assert!(curve.len() > 2);

    let degree      = curve.len() - 1;
    let mut focus   = normal_hodograph(curve);

    // Blend coefficients that close the focus: c0*N(0) - c1*N(1) = B(1) - B(0)
    let net_displacement    = curve[degree] - curve[0];
    let (c0, c1)            = solve_2x2(&focus[0], &(focus[degree-1] * -1.0), &net_displacement)
                                    .ok_or(ClipError::SingularFocusSystem)?;

    // Backward recurrence building the control points of B(t) + c(t)*N(t)
    let degree_inv = 1.0 / (degree as f64);

    focus.push(focus[degree-1]*c1 + curve[degree]);
    for i in (1..degree).rev() {
        let scaled  = focus[i] * (-c0);
        focus[i]    = (scaled + focus[i-1]*c1) * ((i as f64) * degree_inv) - scaled + curve[i];
    }
    focus[0] = focus[0]*c0 + curve[0];

    Ok(focus)
}

///
/// Projects the control net of the distance surface D(t,u) = <B'(t), B(t) - F(u)> onto
/// the (t, d) plane, where B is a bezier curve and F is a focus of another curve
///
/// D is expanded into Bernstein form of degree r = 2n-1 along t by binomial-coefficient
/// blossoming; for each t index only the minimal and maximal coefficients over all u
/// indices are kept, giving two boundary samples per index. D(t,u) is zero exactly when
/// the normal of B at t passes through the focus point F(u), so the zero set of this
/// profile locates the collinear normals.
///
/// See Sederberg, Nishita, 1990 - Curve intersection using Bezier clipping.
///
pub fn distance_control_points<P: Coordinate+Coordinate2D>(curve: &[P], focus: &[P]) -> Vec<P> {
    debug_assert!(curve.len() > 1);
    debug_assert!(!focus.is_empty());

    let n       = curve.len() - 1;
    let m       = focus.len() - 1;
    let r       = 2*n - 1;
    let r_inv   = 1.0 / (r as f64);

    // Differences between consecutive control points (the hodograph scale factor n is
    // folded into the blossoming coefficient below)
    let diffs = (0..n).map(|k| curve[k+1] - curve[k]).collect::<Vec<_>>();

    // Cache the dot products of the differences against the curve and the focus
    let dot_curve = diffs.iter()
        .map(|diff| curve.iter().map(|point| diff.dot(point)).collect::<Vec<_>>())
        .collect::<Vec<_>>();
    let dot_focus = diffs.iter()
        .map(|diff| focus.iter().map(|point| diff.dot(point)).collect::<Vec<_>>())
        .collect::<Vec<_>>();

    let mut profile = Vec::with_capacity(2*(r+1));
    let mut d       = vec![0.0; m+1];

    for i in 0..=r {
        for value in d.iter_mut() {
            *value = 0.0;
        }

        let k_first = i.max(n) - n;
        let k_last  = i.min(n-1);
        let scale   = (n as f64) / binomial(r, i);

        for k in k_first..=k_last {
            let l           = i - k;
            let coefficient = scale * binomial(n, l) * binomial(n-1, k);

            for j in 0..=m {
                d[j] += coefficient * (dot_curve[k][l] - dot_focus[k][j]);
            }
        }

        let (d_min, d_max)  = d.iter().cloned().minmax().into_option().unwrap_or((0.0, 0.0));
        let t               = (i as f64) * r_inv;

        profile.push(P::from_components(&[t, d_min]));
        profile.push(P::from_components(&[t, d_max]));
    }

    profile
}

///
/// Clips a bezier curve against the focus of another curve, returning the sub-interval
/// of the curve's parameter domain that can still contain collinear-normal points
///
/// The convex hull of the distance-surface boundary samples is scanned for
/// zero-crossings of the distance coordinate (closing edge included), plus any
/// vertices lying exactly on the axis. `None` means no part of the domain survives.
///
pub fn clip_by_focus<P: Coordinate+Coordinate2D>(curve: &[P], focus: &[P]) -> Result<Option<Interval>, ClipError> {
    let mut profile = distance_control_points(curve, focus);

    convex_hull(&mut profile);

    scan_hull_for_zero_crossings(&profile)
}

///
/// Scans a convex hull boundary (closing edge included) for sign changes of the y
/// coordinate, accumulating the minimal and maximal x coordinates over the crossings
/// and any vertices exactly on the axis
///
fn scan_hull_for_zero_crossings<P: Coordinate2D>(hull: &[P]) -> Result<Option<Interval>, ClipError> {
    let mut range = ParameterRange::new();

    let mut prev_below = hull[0].y() < 0.0;
    if hull[0].y() == 0.0 {
        // First vertex lies on the axis
        range.include(hull[0].x());
    }

    for i in 1..hull.len() {
        let below = hull[i].y() < 0.0;

        if hull[i].y() == 0.0 {
            range.include(hull[i].x());
        } else if below != prev_below {
            range.include(horizontal_intercept(&hull[i-1], &hull[i], 0.0));
            prev_below = below;
        }
    }

    // The closing edge from the last vertex back to the first can cross the axis too
    let below = hull[0].y() < 0.0;
    if below != prev_below {
        range.include(horizontal_intercept(&hull[hull.len()-1], &hull[0], 0.0));
    }

    range.into_interval()
}
