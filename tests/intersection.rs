use bezier_clipping::*;
use bezier_clipping::bezier::*;

#[test]
fn crossing_diagonals_meet_in_the_middle() {
    let a = vec![Coord2(0.0, 0.0), Coord2(1.0, 1.0)];
    let b = vec![Coord2(0.0, 1.0), Coord2(1.0, 0.0)];

    let solutions = find_intersections_bezier_clipping(&a, &b, 1e-6).unwrap();
    println!("{:?}", solutions);

    assert!(solutions.len() == 1);

    let (t_a, t_b) = solutions[0];
    assert!((t_a - 0.5).abs() < 1e-4);
    assert!((t_b - 0.5).abs() < 1e-4);
}

#[test]
fn parallel_lines_never_meet() {
    let a = vec![Coord2(0.0, 0.0), Coord2(1.0, 0.0)];
    let b = vec![Coord2(0.0, 1.0), Coord2(1.0, 1.0)];

    let solutions = find_intersections_bezier_clipping(&a, &b, 1e-6).unwrap();

    assert!(solutions.is_empty());
}

#[test]
fn line_crossing_a_cubic() {
    let a = vec![Coord2(0.0, 0.0), Coord2(4.0, 4.0)];
    let b = vec![Coord2(0.0, 3.0), Coord2(1.0, 3.0), Coord2(3.0, -1.0), Coord2(4.0, 1.0)];

    let solutions = find_intersections_bezier_clipping(&a, &b, 1e-6).unwrap();
    println!("{:?}", solutions);

    assert!(solutions.len() == 1);

    // The parameter pair must land both curves on the same point
    let (t_a, t_b)  = solutions[0];
    let point_a     = de_casteljau(t_a, &a);
    let point_b     = de_casteljau(t_b, &b);
    println!("{:?} {:?}", point_a, point_b);

    assert!(point_a.distance_to(&point_b) < 1e-4);
}

#[test]
fn opposed_arches_cross_twice() {
    // Two symmetric quadratic arches: by symmetry the crossings sit at t = 1/2 -/+ sqrt(2)/4
    // on both curves
    let a = vec![Coord2(0.0, 0.0), Coord2(2.0, 4.0), Coord2(4.0, 0.0)];
    let b = vec![Coord2(0.0, 2.0), Coord2(2.0, -2.0), Coord2(4.0, 2.0)];

    let mut solutions = find_intersections_bezier_clipping(&a, &b, 1e-6).unwrap();
    println!("{:?}", solutions);

    assert!(solutions.len() == 2);

    solutions.sort_by(|(t1, _), (t2, _)| t1.partial_cmp(t2).unwrap());

    let expected = [0.5 - 2.0f64.sqrt()/4.0, 0.5 + 2.0f64.sqrt()/4.0];

    for ((t_a, t_b), expected_t) in solutions.iter().zip(expected.iter()) {
        assert!((t_a - expected_t).abs() < 1e-4);
        assert!((t_b - expected_t).abs() < 1e-4);

        let point_a = de_casteljau(*t_a, &a);
        let point_b = de_casteljau(*t_b, &b);
        assert!(point_a.distance_to(&point_b) < 1e-4);
    }
}

#[test]
fn disjoint_curves_produce_no_solutions() {
    let a = vec![Coord2(0.0, 0.0), Coord2(1.0, 2.0), Coord2(2.0, 0.0)];
    let b = vec![Coord2(0.0, 5.0), Coord2(1.0, 7.0), Coord2(2.0, 5.0)];

    let solutions = find_intersections_bezier_clipping(&a, &b, 1e-6).unwrap();

    assert!(solutions.is_empty());
}

#[test]
fn coincident_point_curves_count_as_one_intersection() {
    let a = vec![Coord2(1.0, 1.0), Coord2(1.0, 1.0)];
    let b = vec![Coord2(1.0, 1.0), Coord2(1.0, 1.0)];

    let solutions = find_intersections_bezier_clipping(&a, &b, 1e-6).unwrap();
    println!("{:?}", solutions);

    assert!(solutions.len() == 1);

    let (t_a, t_b) = solutions[0];
    assert!((t_a - 0.5).abs() < 1e-9);
    assert!((t_b - 0.5).abs() < 1e-9);
}

#[test]
fn separated_point_curves_produce_no_solutions() {
    let a = vec![Coord2(1.0, 1.0), Coord2(1.0, 1.0)];
    let b = vec![Coord2(2.0, 2.0), Coord2(2.0, 2.0)];

    let solutions = find_intersections_bezier_clipping(&a, &b, 1e-6).unwrap();

    assert!(solutions.is_empty());
}

#[test]
fn curves_need_at_least_two_control_points() {
    let a = vec![Coord2(1.0, 1.0)];
    let b = vec![Coord2(0.0, 0.0), Coord2(1.0, 1.0)];

    let failed = find_intersections_bezier_clipping(&a, &b, 1e-6);

    assert!(failed.err() == Some(ClipError::CurveTooShort { needed: 2, found: 1 }));
}

#[test]
fn finer_precision_refines_rather_than_multiplies_solutions() {
    // Tightening the precision must not invent extra crossings: every solution of the
    // fine run must be a refinement of one the coarse run already reported
    let a = vec![Coord2(0.0, 0.0), Coord2(2.0, 4.0), Coord2(4.0, 0.0)];
    let b = vec![Coord2(0.0, 2.0), Coord2(2.0, -2.0), Coord2(4.0, 2.0)];

    let coarse  = find_intersections_bezier_clipping(&a, &b, 1e-3).unwrap();
    let fine    = find_intersections_bezier_clipping(&a, &b, 1e-7).unwrap();
    println!("coarse: {:?}", coarse);
    println!("fine:   {:?}", fine);

    assert!(!coarse.is_empty());
    assert!(fine.len() <= coarse.len());

    for (fine_a, fine_b) in fine.iter() {
        assert!(coarse.iter().any(|(coarse_a, coarse_b)| {
            (fine_a - coarse_a).abs() < 1e-3 && (fine_b - coarse_b).abs() < 1e-3
        }));
    }
}

#[test]
fn requested_precision_is_floored() {
    // Asking for a precision below the numeric floor must behave like asking for the
    // floor itself rather than looping forever
    let a = vec![Coord2(0.0, 0.0), Coord2(1.0, 1.0)];
    let b = vec![Coord2(0.0, 1.0), Coord2(1.0, 0.0)];

    let solutions = find_intersections_bezier_clipping(&a, &b, 0.0).unwrap();

    assert!(solutions.len() == 1);
    assert!((solutions[0].0 - 0.5).abs() < 1e-4);
}
