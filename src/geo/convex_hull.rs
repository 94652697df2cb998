use super::super::coordinate::*;

use std::cmp::Ordering;

///
/// Lexicographic order on points (by x, then by y)
///
#[inline]
fn lex_order<P: Coordinate2D>(p: &P, q: &P) -> Ordering {
    p.x().partial_cmp(&q.x()).unwrap_or(Ordering::Equal)
        .then(p.y().partial_cmp(&q.y()).unwrap_or(Ordering::Equal))
}

///
/// True if the oriented polyline p0, p1, p2 makes a right turn at p1
///
/// Collinear points and points that exactly backtrack are rejected, so duplicate or
/// exactly-opposite points never count as a turn.
///
#[inline]
fn is_a_right_turn<P: Coordinate+Coordinate2D>(p0: &P, p1: &P, p2: &P) -> bool {
    if p1.x() == p2.x() && p1.y() == p2.y() {
        return false;
    }

    let q1 = *p1 - *p0;
    let q2 = *p2 - *p0;

    if q1.x() == -q2.x() && q1.y() == -q2.y() {
        return false;
    }

    cross(&q1, &q2) < 0.0
}

///
/// Reduces a set of points in place to its convex hull boundary
///
/// Implemented as Andrew's monotone chain scan: the points are sorted
/// lexicographically (which already is the hull for fewer than 4 points), the upper
/// chain is built left to right with a strict right-turn test, then the remaining
/// points are sorted in the reverse order and the lower chain closes the boundary.
/// Interior points and collinear-redundant points are removed.
///
pub fn convex_hull<P: Coordinate+Coordinate2D>(points: &mut Vec<P>) {
    let num_points = points.len();
    if num_points < 2 {
        return;
    }

    points.sort_by(lex_order);
    if num_points < 4 {
        return;
    }

    // Upper chain
    let mut upper = 2;
    for i in 2..num_points {
        while upper > 1 && !is_a_right_turn(&points[upper-2], &points[upper-1], &points[i]) {
            upper -= 1;
        }
        points.swap(upper, i);
        upper += 1;
    }

    // Lower chain, scanning the remaining points from right to left
    points[upper..].sort_by(|p, q| lex_order(q, p));
    points.rotate_left(1);

    let mut lower   = upper;
    let chain_start = upper - 1;
    for i in lower..num_points {
        while lower > chain_start && !is_a_right_turn(&points[lower-2], &points[lower-1], &points[i]) {
            lower -= 1;
        }
        points.swap(lower, i);
        lower += 1;
    }

    points.truncate(lower);
}
