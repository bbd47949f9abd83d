use dnc_trace::input::parse_points;
use dnc_trace::{run_closest_pair, Error, Point};

fn accepts_pair(pair: (Point, Point), a: (f64, f64), b: (f64, f64)) -> bool {
    let (a, b) = (Point::new(a.0, a.1), Point::new(b.0, b.1));
    (pair.0.almost_eq(&a) && pair.1.almost_eq(&b))
        || (pair.0.almost_eq(&b) && pair.1.almost_eq(&a))
}

#[test]
fn three_point_scenario() {
    let run = run_closest_pair(&[(0.0, 0.0), (3.0, 4.0), (1.0, 1.0)]).unwrap();
    assert!((run.distance - 1.41421356).abs() < 1e-6);
    assert!(accepts_pair(run.pair, (0.0, 0.0), (1.0, 1.0)));
}

#[test]
fn tied_distance_scenario_pins_the_distance() {
    // Both ((0,0),(1,0)) and ((0,0),(0,1)) achieve distance 1.0; the
    // tie-break convention decides which pair is reported, so the test
    // pins the distance and accepts any adjacent pair achieving it.
    let run = run_closest_pair(&[(0.0, 0.0), (5.0, 5.0), (1.0, 0.0), (0.0, 1.0)]).unwrap();
    assert_eq!(run.distance, 1.0);
    assert!(
        accepts_pair(run.pair, (0.0, 0.0), (1.0, 0.0))
            || accepts_pair(run.pair, (0.0, 0.0), (0.0, 1.0))
            || accepts_pair(run.pair, (1.0, 0.0), (0.0, 1.0))
    );
}

#[test]
fn two_points_exercise_base_case_only() {
    let run = run_closest_pair(&[(1.0, 2.0), (4.0, 6.0)]).unwrap();
    assert_eq!(run.distance, 5.0);
    assert_eq!(run.comparisons, 1);
    assert_eq!(
        run.trace.iter().filter(|l| l.contains("Base case")).count(),
        1
    );
    assert!(!run.trace.iter().any(|l| l.contains("Dividing")));
}

#[test]
fn three_points_exercise_base_case_only() {
    let run = run_closest_pair(&[(0.0, 0.0), (10.0, 0.0), (10.0, 1.0)]).unwrap();
    assert_eq!(run.distance, 1.0);
    assert_eq!(run.comparisons, 3);
    assert!(!run.trace.iter().any(|l| l.contains("Checking strip")));
}

#[test]
fn four_points_divide_and_merge() {
    let run = run_closest_pair(&[(0.0, 0.0), (5.0, 5.0), (1.0, 0.0), (0.0, 1.0)]).unwrap();
    assert!(run.trace.iter().any(|l| l.contains("Dividing 4 points at index 2")));
    assert!(run.trace.iter().any(|l| l.contains("Merging: min(")));
    assert!(run.trace.iter().any(|l| l.contains("Checking strip:")));
}

#[test]
fn closest_pair_across_the_split_line() {
    // The two nearest points land in different halves; the strip scan
    // must log the improvement.
    let run = run_closest_pair(&[
        (0.0, 0.0),
        (1.0, 10.0),
        (4.9, 5.0),
        (5.1, 5.0),
        (9.0, 20.0),
        (10.0, 0.0),
    ])
    .unwrap();
    assert!((run.distance - 0.2).abs() < 1e-9);
    assert!(accepts_pair(run.pair, (4.9, 5.0), (5.1, 5.0)));
    assert!(run.trace.iter().any(|l| l.contains("✓ New minimum found")));
}

#[test]
fn duplicate_points_yield_zero() {
    let run = run_closest_pair(&[(3.0, 3.0), (8.0, 1.0), (3.0, 3.0), (0.0, 9.0)]).unwrap();
    assert_eq!(run.distance, 0.0);
}

#[test]
fn insufficient_points_is_an_error() {
    assert_eq!(run_closest_pair(&[]), Err(Error::InsufficientPoints(0)));
    assert_eq!(
        run_closest_pair(&[(1.0, 1.0)]),
        Err(Error::InsufficientPoints(1))
    );
}

#[test]
fn non_finite_coordinate_is_an_error() {
    let result = run_closest_pair(&[(0.0, 0.0), (1.0, f64::INFINITY)]);
    assert!(matches!(
        result,
        Err(Error::NonFiniteCoordinate { index: 1, .. })
    ));
}

#[test]
fn parse_then_run_round_trip() {
    let points = parse_points("0 0  3 4  1 1").unwrap();
    let coords: Vec<(f64, f64)> = points.iter().map(|p| (p.x, p.y)).collect();
    let run = run_closest_pair(&coords).unwrap();
    assert!((run.distance - 2.0_f64.sqrt()).abs() < 1e-12);
}

#[test]
fn comparison_counter_is_run_scoped() {
    let coords = [(0.0, 0.0), (5.0, 5.0), (1.0, 0.0), (0.0, 1.0), (2.0, 2.0)];
    let first = run_closest_pair(&coords).unwrap();
    let second = run_closest_pair(&coords).unwrap();
    assert_eq!(first.comparisons, second.comparisons);
    assert!(first.comparisons > 0);
}

#[test]
fn larger_input_still_matches_brute_force() {
    // Deterministic pseudo-random layout, big enough to recurse a few
    // levels deep and hit the strip repeatedly.
    let coords: Vec<(f64, f64)> = (0..200u64)
        .map(|i| {
            let h = i.wrapping_mul(2654435761) % 10_007;
            let v = i.wrapping_mul(40503) % 9973;
            (h as f64 / 10.0, v as f64 / 10.0)
        })
        .collect();
    let run = run_closest_pair(&coords).unwrap();

    let points: Vec<Point> = coords.iter().map(|&(x, y)| Point::new(x, y)).collect();
    let mut expected = f64::INFINITY;
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            expected = expected.min(points[i].distance(&points[j]));
        }
    }
    assert!((run.distance - expected).abs() < 1e-9);
}
