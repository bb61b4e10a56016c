//___________________________________TESTS____________________________________

#[cfg(test)]
mod tests {
    use crate::numerical::spline_solver::*;
    use approx::assert_relative_eq;
    use rand::Rng;

    fn scenario_points() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(5.0, 2.0),
            Point::new(7.0, 1.0),
            Point::new(10.0, 0.0),
        ]
    }

    fn assert_natural_spline_properties(points: &[Point], segments: &[Segment]) {
        let mut sorted = points.to_vec();
        sorted.sort_by(|a, b| a.x.total_cmp(&b.x));
        assert_eq!(segments.len(), sorted.len() - 1);
        // interpolation at both ends of every segment
        for (i, seg) in segments.iter().enumerate() {
            assert_eq!(seg.lower, sorted[i].x);
            assert_eq!(seg.upper, sorted[i + 1].x);
            assert_relative_eq!(seg.value(sorted[i].x), sorted[i].y, epsilon = 1e-9);
            assert_relative_eq!(seg.value(sorted[i + 1].x), sorted[i + 1].y, epsilon = 1e-9);
        }
        // C2 continuity at interior knots
        for pair in segments.windows(2) {
            let knot = pair[0].upper;
            assert_eq!(knot, pair[1].lower);
            assert_relative_eq!(pair[0].value(knot), pair[1].value(knot), epsilon = 1e-9);
            assert_relative_eq!(
                pair[0].derivative(knot),
                pair[1].derivative(knot),
                epsilon = 1e-8
            );
            assert_relative_eq!(
                pair[0].second_derivative(knot),
                pair[1].second_derivative(knot),
                epsilon = 1e-8
            );
        }
        // natural boundary conditions
        let first = &segments[0];
        let last = &segments[segments.len() - 1];
        assert_relative_eq!(first.second_derivative(first.lower), 0.0, epsilon = 1e-9);
        assert_relative_eq!(last.second_derivative(last.upper), 0.0, epsilon = 1e-8);
    }

    #[test]
    fn test_natural_cubic_scenario() {
        let points = scenario_points();
        let segments = natural_cubic(&points).unwrap();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].coefficients[0], 0.0);
        assert_eq!(segments[0].value(0.0), 0.0);
        assert_natural_spline_properties(&points, &segments);
    }

    #[test]
    fn test_natural_cubic_ignores_input_order() {
        let mut shuffled = scenario_points();
        shuffled.reverse();
        shuffled.swap(0, 2);
        let from_sorted = natural_cubic(&scenario_points()).unwrap();
        let from_shuffled = natural_cubic(&shuffled).unwrap();
        assert_eq!(from_sorted, from_shuffled);
    }

    #[test]
    fn test_natural_cubic_reproduces_straight_line() {
        let points: Vec<Point> = [-2.0, 0.5, 1.0, 4.0, 6.5]
            .iter()
            .map(|&x| Point::new(x, 2.0 * x + 1.0))
            .collect();
        let segments = natural_cubic(&points).unwrap();
        for seg in &segments {
            assert_relative_eq!(seg.coefficients[1], 2.0, epsilon = 1e-12);
            assert_relative_eq!(seg.coefficients[2], 0.0, epsilon = 1e-12);
            assert_relative_eq!(seg.coefficients[3], 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_natural_cubic_random_point_sets() {
        let mut rng = rand::rng();
        for _ in 0..50 {
            let n = rng.random_range(3..12);
            let points: Vec<Point> = (0..n)
                .map(|i| {
                    Point::new(
                        i as f64 + rng.random_range(0.0..0.9),
                        rng.random_range(-10.0..10.0),
                    )
                })
                .collect();
            let segments = natural_cubic(&points).unwrap();
            assert_natural_spline_properties(&points, &segments);
        }
    }

    #[test]
    fn test_natural_cubic_too_few_points() {
        let points = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        match natural_cubic(&points) {
            Err(InterpolationError::DegenerateInput(_)) => {}
            other => panic!("expected DegenerateInput, got {:?}", other),
        }
        assert!(matches!(
            solve_natural_cubic(&[(0.0, 0.0), (1.0, 1.0)]),
            Err(InterpolationError::DegenerateInput(_))
        ));
    }

    #[test]
    fn test_natural_cubic_duplicate_abscissa() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 3.0),
            Point::new(2.0, 0.0),
        ];
        assert!(matches!(
            natural_cubic(&points),
            Err(InterpolationError::DegenerateInput(_))
        ));
    }

    #[test]
    fn test_non_finite_input_is_rejected() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(f64::NAN, 1.0),
            Point::new(2.0, 0.0),
        ];
        assert!(matches!(
            natural_cubic(&points),
            Err(InterpolationError::DegenerateInput(_))
        ));
        let points = vec![
            HermitePoint::new(0.0, 0.0, f64::INFINITY),
            HermitePoint::new(1.0, 0.0, 0.0),
        ];
        assert!(matches!(
            hermite(&points),
            Err(InterpolationError::DegenerateInput(_))
        ));
    }

    #[test]
    fn test_solve_natural_cubic_matches_segments() {
        let tuples = [(0.0, 0.0), (5.0, 2.0), (7.0, 1.0), (10.0, 0.0)];
        let coefs = solve_natural_cubic(&tuples).unwrap();
        let segments = natural_cubic(&scenario_points()).unwrap();
        let expected: Vec<[f64; 4]> = segments.iter().map(|s| s.coefficients).collect();
        assert_eq!(coefs, expected);
    }

    #[test]
    fn test_hermite_scenario() {
        let points = vec![
            HermitePoint::new(0.0, 0.0, 1.0),
            HermitePoint::new(5.0, 0.0, 0.0),
            HermitePoint::new(7.0, 1.0, 1.0),
        ];
        let segments = hermite(&points).unwrap();
        assert_eq!(segments.len(), 2);
        assert_relative_eq!(segments[0].value(0.0), 0.0, epsilon = 1e-12);
        assert_relative_eq!(segments[0].derivative(0.0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_hermite_matches_values_and_slopes_at_knots() {
        let points = vec![
            HermitePoint::new(7.0, 1.0, 1.0),
            HermitePoint::new(0.0, 0.0, 1.0),
            HermitePoint::new(5.0, 0.0, 0.0),
            HermitePoint::new(8.5, -2.0, 0.25),
        ];
        let segments = hermite(&points).unwrap();
        let mut sorted = points.clone();
        sorted.sort_by(|a, b| a.x.total_cmp(&b.x));
        for (i, seg) in segments.iter().enumerate() {
            let (p0, p1) = (sorted[i], sorted[i + 1]);
            assert_relative_eq!(seg.value(p0.x), p0.y, epsilon = 1e-10);
            assert_relative_eq!(seg.derivative(p0.x), p0.slope, epsilon = 1e-10);
            assert_relative_eq!(seg.value(p1.x), p1.y, epsilon = 1e-10);
            assert_relative_eq!(seg.derivative(p1.x), p1.slope, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_hermite_reproduces_cubic() {
        // f(x) = x^3 - 2x, f'(x) = 3x^2 - 2
        let f = |x: f64| x.powi(3) - 2.0 * x;
        let df = |x: f64| 3.0 * x * x - 2.0;
        let points: Vec<(f64, f64, f64)> = [-1.0, 0.5, 2.0]
            .iter()
            .map(|&x| (x, f(x), df(x)))
            .collect();
        let coefs = solve_hermite(&points).unwrap();
        let segments = hermite(
            &points
                .iter()
                .map(|&p| HermitePoint::from(p))
                .collect::<Vec<_>>(),
        )
        .unwrap();
        assert_eq!(coefs.len(), 2);
        for seg in &segments {
            let mid = 0.5 * (seg.lower + seg.upper);
            assert_relative_eq!(seg.value(mid), f(mid), epsilon = 1e-10);
            assert_relative_eq!(seg.coefficients[3], 1.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_hermite_too_few_points() {
        assert!(matches!(
            solve_hermite(&[(0.0, 1.0, 0.0)]),
            Err(InterpolationError::DegenerateInput(_))
        ));
        assert!(matches!(
            solve_hermite(&[(1.0, 1.0, 0.0), (1.0, 2.0, 0.0)]),
            Err(InterpolationError::DegenerateInput(_))
        ));
    }

    #[test]
    fn test_segment_contains() {
        let seg = Segment {
            lower: 1.0,
            upper: 2.0,
            coefficients: [0.0; 4],
        };
        assert!(seg.contains(1.0, false));
        assert!(!seg.contains(2.0, false));
        assert!(seg.contains(2.0, true));
        assert!(!seg.contains(0.5, true));
    }
}
