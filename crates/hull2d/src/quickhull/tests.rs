use super::*;
use crate::geom2::rand::{draw_cloud, draw_cloud_int, Cloud, CloudCfg, ReplayToken};
use crate::geom2::{check_hull, monotone_chain};

fn pi(x: i64, y: i64) -> Point<i64> {
    Point::new(x, y)
}

type Solver<T> = Box<dyn Fn(&mut Vec<Point<T>>)>;

fn boxed<T: Coord, F: Fn(&mut Vec<Point<T>>) + 'static>(f: F) -> Solver<T> {
    Box::new(f)
}

/// Every solver configuration exercised below.
fn all_solvers<T: Coord>() -> Vec<(String, Solver<T>)> {
    let mut out: Vec<(String, Solver<T>)> = Vec::new();
    for s in PartitionStrategy::ALL {
        out.push((format!("rec_{s}"), boxed(move |p| solve_with(p, s))));
        out.push((format!("iter_{s}"), boxed(move |p| solve_worklist(p, s))));
        for threads in [1, 2, 4] {
            let cfg = ParallelCfg {
                threads: Some(threads),
                strategy: s,
                split: SplitMethod::Bisection,
            };
            out.push((format!("par_{s}_T{threads}"), boxed(move |p| solve_parallel(p, cfg))));
        }
    }
    for threads in [2, 3, 8] {
        let cfg = SliceCfg {
            threads: Some(threads),
            eps: 0.0,
        };
        out.push((
            format!("slice_T{threads}"),
            boxed(move |p| solve_slice_parallel(p, cfg, |q: &mut Vec<Point<T>>| solve(q))),
        ));
    }
    out
}

#[test]
fn square_with_interior_points() {
    let input = vec![pi(0, 0), pi(1, 0), pi(1, 1), pi(0, 1), pi(0, 0), pi(1, 1)];
    for (name, solver) in all_solvers::<i64>() {
        let mut pts = input.clone();
        solver(&mut pts);
        assert_eq!(pts, vec![pi(0, 0), pi(1, 0), pi(1, 1), pi(0, 1)], "{name}");
    }
}

#[test]
fn square_with_center_point() {
    let input = vec![pi(0, 0), pi(4, 0), pi(4, 4), pi(0, 4), pi(2, 2)];
    for (name, solver) in all_solvers::<i64>() {
        let mut pts = input.clone();
        solver(&mut pts);
        assert_eq!(pts, vec![pi(0, 0), pi(4, 0), pi(4, 4), pi(0, 4)], "{name}");
    }
}

#[test]
fn collinear_apex_is_dropped() {
    let input = vec![pi(0, 0), pi(1, 0), pi(2, 0), pi(1, 1)];
    for (name, solver) in all_solvers::<i64>() {
        let mut pts = input.clone();
        solver(&mut pts);
        assert_eq!(pts, vec![pi(0, 0), pi(2, 0), pi(1, 1)], "{name}");
    }
}

#[test]
fn degenerate_inputs() {
    for (name, solver) in all_solvers::<i64>() {
        let mut empty: Vec<Point<i64>> = Vec::new();
        solver(&mut empty);
        assert!(empty.is_empty(), "{name}");

        let mut one = vec![pi(7, -3)];
        solver(&mut one);
        assert_eq!(one, vec![pi(7, -3)], "{name}");

        let mut two = vec![pi(5, 5), pi(-1, 2)];
        solver(&mut two);
        assert_eq!(two, vec![pi(-1, 2), pi(5, 5)], "{name}");

        let mut same = vec![pi(2, 2); 6];
        solver(&mut same);
        assert_eq!(same, vec![pi(2, 2)], "{name}");

        let mut line: Vec<_> = (0..20).map(|i| pi(3 * i - 10, 2 * i)).rev().collect();
        solver(&mut line);
        assert_eq!(line, vec![pi(-10, 0), pi(47, 38)], "{name}");
    }
}

#[test]
fn float_square_with_negative_zero() {
    let input = vec![
        Point::new(0.0, 0.0),
        Point::new(-0.0, 1.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(0.5, 0.5),
    ];
    let mut pts = input.clone();
    solve(&mut pts);
    assert_eq!(pts.len(), 4);
    assert_eq!(check_hull(&input, &pts, 0.0), Ok(()));
}

#[test]
fn solvers_agree_with_monotone_chain_on_integer_clouds() {
    for kind in [Cloud::Square, Cloud::Disk, Cloud::Circle] {
        for index in 0..4 {
            let cfg = CloudCfg {
                kind,
                n: 500,
                radius: 1000.0,
            };
            let input = draw_cloud_int(cfg, ReplayToken { seed: 11, index });
            let expected = monotone_chain(&input);
            for (name, solver) in all_solvers::<i64>() {
                let mut pts = input.clone();
                solver(&mut pts);
                assert_eq!(pts, expected, "{kind} #{index}: {name}");
            }
        }
    }
}

#[test]
fn solvers_agree_on_float_clouds() {
    for kind in [Cloud::Square, Cloud::Disk] {
        let cfg = CloudCfg {
            kind,
            n: 2000,
            radius: 1.0,
        };
        let input = draw_cloud(cfg, ReplayToken { seed: 3, index: 0 });
        let mut expected = input.clone();
        solve(&mut expected);
        assert_eq!(check_hull(&input, &expected, 1e-12), Ok(()), "{kind}");
        for (name, solver) in all_solvers::<f64>() {
            let mut pts = input.clone();
            solver(&mut pts);
            assert_eq!(pts, expected, "{kind}: {name}");
        }
    }
}

#[test]
fn solving_twice_changes_nothing() {
    let cfg = CloudCfg {
        kind: Cloud::Disk,
        n: 300,
        radius: 500.0,
    };
    let mut pts = draw_cloud_int(cfg, ReplayToken { seed: 5, index: 1 });
    solve(&mut pts);
    let once = pts.clone();
    for (name, solver) in all_solvers::<i64>() {
        let mut again = once.clone();
        solver(&mut again);
        assert_eq!(again, once, "{name}");
    }
}

#[test]
fn killer_chain_is_all_hull() {
    let cfg = CloudCfg {
        kind: Cloud::Killer,
        n: 24,
        radius: 1.0,
    };
    let input = draw_cloud(cfg, ReplayToken { seed: 0, index: 0 });
    let mut pts = input.clone();
    solve_worklist(&mut pts, PartitionStrategy::SingleScan);
    assert_eq!(pts.len(), 24);
    assert_eq!(check_hull(&input, &pts, 1e-9), Ok(()));
    let mut rec = input.clone();
    solve(&mut rec);
    assert_eq!(rec, pts);
}

#[test]
fn fan_out_depth_is_log2() {
    assert_eq!(parallel::fan_out_depth(0), 0);
    assert_eq!(parallel::fan_out_depth(1), 0);
    assert_eq!(parallel::fan_out_depth(2), 1);
    assert_eq!(parallel::fan_out_depth(7), 2);
    assert_eq!(parallel::fan_out_depth(8), 3);
    assert_eq!(ParallelCfg::default().with_threads(3).resolved_threads(), 3);
    assert!(ParallelCfg::default().resolved_threads() >= 1);
}

#[test]
fn directions_split_matches_bisection() {
    let input = draw_cloud_int(
        CloudCfg {
            kind: Cloud::Circle,
            n: 400,
            radius: 10_000.0,
        },
        ReplayToken { seed: 9, index: 2 },
    );
    let mut a = input.clone();
    solve_parallel(
        &mut a,
        ParallelCfg {
            threads: Some(4),
            split: SplitMethod::Directions,
            ..ParallelCfg::default()
        },
    );
    let mut b = input;
    solve_parallel(&mut b, ParallelCfg::default().with_threads(4));
    assert_eq!(a, b);
}

#[test]
fn remove_not_on_hull_keeps_order() {
    let mut pts = vec![pi(1, 1), Point::not_on_hull(), pi(3, 0), Point::not_on_hull(), pi(2, 9)];
    remove_not_on_hull(&mut pts);
    assert_eq!(pts, vec![pi(1, 1), pi(3, 0), pi(2, 9)]);
}
