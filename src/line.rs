use super::coordinate::*;

///
/// Trait implemented by things that can represent a line
///
pub trait Line {
    /// The type of a point on this line
    type Point: Coordinate;

    ///
    /// Returns two points describing this line
    ///
    fn points(&self) -> (Self::Point, Self::Point);
}

impl<Point: Coordinate> Line for (Point, Point) {
    type Point = Point;

    #[inline]
    fn points(&self) -> (Point, Point) {
        *self
    }
}

///
/// For a two-dimensional line, computes the coefficients of the line equation
/// ax+by+c=0 (such that a^2+b^2 = 1)
///
/// This will return (0,0,0) for a line where the start and end point are the same.
///
pub fn line_coefficients_2d<P: Coordinate+Coordinate2D, L: Line<Point=P>>(line: &L) -> (f64, f64, f64) {
    let (from, to)  = line.points();

    let a           = to.y() - from.y();
    let b           = from.x() - to.x();
    let length      = f64::sqrt(a*a + b*b);

    if length == 0.0 {
        // This is a point rather than a line
        return (0.0, 0.0, 0.0);
    }

    // Normalise so that a^2+b^2 = 1, then derive c from the requirement that 'from' is on the line
    let (a, b)      = (a/length, b/length);
    let c           = -(a*from.x() + b*from.y());

    (a, b, c)
}
