use bezier_clipping::*;

///
/// True if the point is inside or on the polygon (which may wind in either direction)
///
fn inside_or_on(hull: &[Coord2], point: &Coord2) -> bool {
    let mut negative = false;
    let mut positive = false;

    for i in 0..hull.len() {
        let from    = hull[i];
        let to      = hull[(i+1) % hull.len()];
        let side    = cross(&(to-from), &(*point-from));

        if side < -1e-9 { negative = true; }
        if side > 1e-9  { positive = true; }
    }

    !(negative && positive)
}

fn contains(hull: &[Coord2], point: &Coord2) -> bool {
    hull.iter().any(|hull_point| hull_point == point)
}

#[test]
fn square_with_interior_point() {
    let mut points = vec![Coord2(0.0, 0.0), Coord2(2.0, 0.0), Coord2(2.0, 2.0), Coord2(0.0, 2.0), Coord2(1.0, 1.0)];
    let original   = points.clone();

    convex_hull(&mut points);
    println!("{:?}", points);

    assert!(points.len() == 4);
    assert!(contains(&points, &Coord2(0.0, 0.0)));
    assert!(contains(&points, &Coord2(2.0, 0.0)));
    assert!(contains(&points, &Coord2(2.0, 2.0)));
    assert!(contains(&points, &Coord2(0.0, 2.0)));
    assert!(!contains(&points, &Coord2(1.0, 1.0)));

    for point in original.iter() {
        assert!(inside_or_on(&points, point));
    }
}

#[test]
fn no_three_consecutive_hull_points_collinear() {
    let mut points = vec![
        Coord2(0.0, 0.0), Coord2(2.0, 0.0), Coord2(2.0, 2.0), Coord2(0.0, 2.0),
        Coord2(1.0, 0.0), Coord2(1.0, 2.0), Coord2(0.5, 0.5)
    ];

    convex_hull(&mut points);
    println!("{:?}", points);

    assert!(points.len() == 4);

    for i in 0..points.len() {
        let p0 = points[i];
        let p1 = points[(i+1) % points.len()];
        let p2 = points[(i+2) % points.len()];

        assert!(cross(&(p1-p0), &(p2-p0)).abs() > 1e-9);
    }
}

#[test]
fn fewer_than_four_points_are_sorted_only() {
    let mut points = vec![Coord2(2.0, 1.0), Coord2(0.0, 0.0), Coord2(1.0, 5.0)];

    convex_hull(&mut points);

    assert!(points == vec![Coord2(0.0, 0.0), Coord2(1.0, 5.0), Coord2(2.0, 1.0)]);
}

#[test]
fn collinear_points_reduce_to_extremes() {
    let mut points = vec![Coord2(0.0, 0.0), Coord2(1.0, 0.0), Coord2(2.0, 0.0), Coord2(3.0, 0.0)];

    convex_hull(&mut points);
    println!("{:?}", points);

    assert!(points.len() == 2);
    assert!(contains(&points, &Coord2(0.0, 0.0)));
    assert!(contains(&points, &Coord2(3.0, 0.0)));
}

#[test]
fn duplicate_points_do_not_corrupt_the_hull() {
    let mut points = vec![
        Coord2(0.0, 0.0), Coord2(2.0, 0.0), Coord2(2.0, 2.0), Coord2(0.0, 2.0),
        Coord2(0.0, 0.0), Coord2(2.0, 2.0), Coord2(1.0, 1.0)
    ];
    let original   = points.clone();

    convex_hull(&mut points);
    println!("{:?}", points);

    assert!(contains(&points, &Coord2(0.0, 0.0)));
    assert!(contains(&points, &Coord2(2.0, 0.0)));
    assert!(contains(&points, &Coord2(2.0, 2.0)));
    assert!(contains(&points, &Coord2(0.0, 2.0)));
    assert!(!contains(&points, &Coord2(1.0, 1.0)));

    for point in original.iter() {
        assert!(inside_or_on(&points, point));
    }
}

#[test]
fn single_point_and_empty_input_are_left_alone() {
    let mut no_points = Vec::<Coord2>::new();
    convex_hull(&mut no_points);
    assert!(no_points.is_empty());

    let mut one_point = vec![Coord2(1.0, 2.0)];
    convex_hull(&mut one_point);
    assert!(one_point == vec![Coord2(1.0, 2.0)]);
}
