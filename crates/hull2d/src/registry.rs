//! Named hull implementations for the harness and benches.
//!
//! Purpose
//! - An explicit, sorted table mapping a name to an `i64` and/or `f64` runner.
//! - Names may carry `:`-separated arguments, e.g. `qh_recpar_xp:T4` runs on
//!   four threads and `qh_hybrid_mc:P32` switches to the monotone chain once
//!   32 candidates remain. `T<n>` sets threads, `D<n>`/`P<n>` the hybrid
//!   switch depth/size; solvers ignore arguments they have no knob for.
//!
//! Code cross-refs: `quickhull`, `geom2::solve_monotone_chain`, `cli run`

use std::str::FromStr;

use crate::error::{HullError, Result};
use crate::geom2::{solve_monotone_chain, Coord, Point};
use crate::quickhull::{
    solve, solve_hybrid, solve_parallel, solve_slice_parallel, solve_with, solve_worklist,
    HybridCfg, ParallelCfg, PartitionStrategy, SliceCfg,
};

/// Arguments parsed from the name suffix.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImplArgs {
    /// `T<n>`, n > 0.
    pub threads: Option<usize>,
    /// `D<n>`: hybrid switch depth.
    pub depth: Option<usize>,
    /// `P<n>`: hybrid switch size.
    pub points: Option<usize>,
}

/// Runner signature for one coordinate type.
pub type RunFn<T> = fn(&mut Vec<Point<T>>, &ImplArgs);

/// One registry entry.
#[derive(Clone, Copy)]
pub struct HullImpl {
    pub name: &'static str,
    pub summary: &'static str,
    pub run_int: Option<RunFn<i64>>,
    pub run_double: Option<RunFn<f64>>,
}

impl HullImpl {
    /// Supported coordinate types, e.g. `"int, double"`.
    pub fn coords(&self) -> String {
        let mut out = Vec::new();
        if self.run_int.is_some() {
            out.push("int");
        }
        if self.run_double.is_some() {
            out.push("double");
        }
        out.join(", ")
    }

    pub fn run_int(&self, points: &mut Vec<Point<i64>>, args: &ImplArgs) -> Result<()> {
        let run = self.run_int.ok_or_else(|| HullError::UnsupportedCoord {
            name: self.name.to_string(),
            coord: "int",
        })?;
        run(points, args);
        Ok(())
    }

    pub fn run_double(&self, points: &mut Vec<Point<f64>>, args: &ImplArgs) -> Result<()> {
        let run = self.run_double.ok_or_else(|| HullError::UnsupportedCoord {
            name: self.name.to_string(),
            coord: "double",
        })?;
        run(points, args);
        Ok(())
    }
}

/// A parsed `name[:arg...]` selector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImplSpec {
    pub name: String,
    pub args: ImplArgs,
}

impl ImplSpec {
    /// Look up the named entry.
    pub fn resolve(&self) -> Result<&'static HullImpl> {
        find(&self.name)
    }
}

impl FromStr for ImplSpec {
    type Err = HullError;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split(':');
        let name = parts.next().unwrap_or_default();
        if name.is_empty() {
            return Err(HullError::UnknownImplementation {
                name: s.to_string(),
            });
        }
        let mut args = ImplArgs::default();
        for arg in parts {
            let invalid = || HullError::InvalidArgument {
                arg: arg.to_string(),
            };
            let mut chars = arg.chars();
            let key = chars.next();
            let value: usize = chars.as_str().parse().map_err(|_| invalid())?;
            match key {
                Some('T') if value > 0 => args.threads = Some(value),
                Some('D') => args.depth = Some(value),
                Some('P') => args.points = Some(value),
                _ => return Err(invalid()),
            }
        }
        Ok(Self {
            name: name.to_string(),
            args,
        })
    }
}

fn run_quickhull<T: Coord>(p: &mut Vec<Point<T>>, _: &ImplArgs) {
    solve(p)
}

fn run_rec_nxp<T: Coord>(p: &mut Vec<Point<T>>, _: &ImplArgs) {
    solve_with(p, PartitionStrategy::NoPartitionByX)
}

fn run_rec_xp<T: Coord>(p: &mut Vec<Point<T>>, _: &ImplArgs) {
    solve_with(p, PartitionStrategy::FirstPartitionByX)
}

fn run_rec_ss<T: Coord>(p: &mut Vec<Point<T>>, _: &ImplArgs) {
    solve_with(p, PartitionStrategy::SingleScan)
}

fn run_iter_xp<T: Coord>(p: &mut Vec<Point<T>>, _: &ImplArgs) {
    solve_worklist(p, PartitionStrategy::FirstPartitionByX)
}

fn run_iter_ss<T: Coord>(p: &mut Vec<Point<T>>, _: &ImplArgs) {
    solve_worklist(p, PartitionStrategy::SingleScan)
}

fn run_recpar_xp<T: Coord>(p: &mut Vec<Point<T>>, a: &ImplArgs) {
    let cfg = ParallelCfg {
        threads: a.threads,
        strategy: PartitionStrategy::FirstPartitionByX,
        ..ParallelCfg::default()
    };
    solve_parallel(p, cfg)
}

fn run_recpar_nxp<T: Coord>(p: &mut Vec<Point<T>>, a: &ImplArgs) {
    let cfg = ParallelCfg {
        threads: a.threads,
        strategy: PartitionStrategy::NoPartitionByX,
        ..ParallelCfg::default()
    };
    solve_parallel(p, cfg)
}

fn run_slicepar<T: Coord>(p: &mut Vec<Point<T>>, a: &ImplArgs) {
    let cfg = SliceCfg {
        threads: a.threads,
        ..SliceCfg::default()
    };
    solve_slice_parallel(p, cfg, |q: &mut Vec<Point<T>>| solve(q))
}

fn run_hybrid_mc<T: Coord>(p: &mut Vec<Point<T>>, a: &ImplArgs) {
    let cfg = HybridCfg {
        depth: a.depth,
        points: a.points.unwrap_or(0),
        ..HybridCfg::default()
    };
    solve_hybrid(p, cfg)
}

fn run_mc<T: Coord>(p: &mut Vec<Point<T>>, _: &ImplArgs) {
    solve_monotone_chain(p)
}

macro_rules! hull_impl {
    ($name:literal, $summary:literal, $run:ident) => {
        HullImpl {
            name: $name,
            summary: $summary,
            run_int: Some($run::<i64>),
            run_double: Some($run::<f64>),
        }
    };
}

/// Sorted by name.
static IMPLS: [HullImpl; 11] = [
    hull_impl!("mc", "Andrew's monotone chain (reference)", run_mc),
    hull_impl!("qh_hybrid_mc", "hybrid quickhull, monotone chain past D<n>/P<n>", run_hybrid_mc),
    hull_impl!("qh_iter_ss", "worklist quickhull, single-scan partition", run_iter_ss),
    hull_impl!("qh_iter_xp", "worklist quickhull, x-partition first", run_iter_xp),
    hull_impl!("qh_rec_nxp", "recursive quickhull, no x-partition", run_rec_nxp),
    hull_impl!("qh_rec_ss", "recursive quickhull, single-scan partition", run_rec_ss),
    hull_impl!("qh_rec_xp", "recursive quickhull, x-partition first", run_rec_xp),
    hull_impl!("qh_recpar_nxp", "parallel recursive quickhull, no x-partition", run_recpar_nxp),
    hull_impl!("qh_recpar_xp", "parallel recursive quickhull, x-partition first", run_recpar_xp),
    hull_impl!("qh_slicepar", "slice-parallel quickhull by extremal directions", run_slicepar),
    hull_impl!("quickhull", "recursive quickhull, default strategy", run_quickhull),
];

/// Every entry, sorted by name.
pub fn all() -> &'static [HullImpl] {
    &IMPLS
}

pub fn names() -> Vec<&'static str> {
    IMPLS.iter().map(|i| i.name).collect()
}

pub fn find(name: &str) -> Result<&'static HullImpl> {
    IMPLS
        .iter()
        .find(|i| i.name == name)
        .ok_or_else(|| HullError::UnknownImplementation {
            name: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::rand::{draw_cloud_int, Cloud, CloudCfg, ReplayToken};
    use crate::geom2::monotone_chain;

    #[test]
    fn table_is_sorted_and_unique() {
        let names = names();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(names, sorted);
        assert!(all().iter().all(|i| i.coords() == "int, double"));
    }

    #[test]
    fn parse_name_and_thread_argument() {
        let spec: ImplSpec = "qh_recpar_xp:T4".parse().unwrap();
        assert_eq!(spec.name, "qh_recpar_xp");
        assert_eq!(spec.args.threads, Some(4));
        assert_eq!(spec.resolve().unwrap().name, "qh_recpar_xp");

        let plain: ImplSpec = "mc".parse().unwrap();
        assert_eq!(plain.args, ImplArgs::default());

        assert_eq!(
            "qh_slicepar:T0".parse::<ImplSpec>(),
            Err(HullError::InvalidArgument { arg: "T0".into() })
        );
        assert_eq!(
            "qh_slicepar:X3".parse::<ImplSpec>(),
            Err(HullError::InvalidArgument { arg: "X3".into() })
        );
        assert!(":T2".parse::<ImplSpec>().is_err());
        assert_eq!(
            "mc:".parse::<ImplSpec>(),
            Err(HullError::InvalidArgument { arg: "".into() })
        );
    }

    #[test]
    fn parse_hybrid_arguments() {
        let spec: ImplSpec = "qh_hybrid_mc:D3:P16:T2".parse().unwrap();
        assert_eq!(
            spec.args,
            ImplArgs {
                threads: Some(2),
                depth: Some(3),
                points: Some(16),
            }
        );
        assert_eq!(spec.resolve().unwrap().name, "qh_hybrid_mc");
        assert_eq!("qh_hybrid_mc:D0".parse::<ImplSpec>().unwrap().args.depth, Some(0));
        assert_eq!(
            "qh_hybrid_mc:Px".parse::<ImplSpec>(),
            Err(HullError::InvalidArgument { arg: "Px".into() })
        );
    }

    #[test]
    fn hybrid_cutoffs_match_reference() {
        let input = draw_cloud_int(
            CloudCfg {
                kind: Cloud::Circle,
                n: 500,
                radius: 1000.0,
            },
            ReplayToken { seed: 5, index: 0 },
        );
        let expected = monotone_chain(&input);
        let imp = find("qh_hybrid_mc").unwrap();
        for suffix in ["", ":D1", ":D4", ":P1", ":P64", ":D2:P8"] {
            let spec: ImplSpec = format!("qh_hybrid_mc{suffix}").parse().unwrap();
            let mut pts = input.clone();
            imp.run_int(&mut pts, &spec.args).unwrap();
            assert_eq!(pts, expected, "{suffix}");
        }
    }

    #[test]
    fn unknown_name_is_an_error() {
        assert!(matches!(
            find("qh_magic"),
            Err(HullError::UnknownImplementation { name }) if name == "qh_magic"
        ));
    }

    #[test]
    fn every_entry_matches_reference() {
        let input = draw_cloud_int(
            CloudCfg {
                kind: Cloud::Disk,
                n: 400,
                radius: 300.0,
            },
            ReplayToken { seed: 21, index: 0 },
        );
        let expected = monotone_chain(&input);
        let args = ImplArgs {
            threads: Some(3),
            points: Some(8),
            ..ImplArgs::default()
        };
        for imp in all() {
            let mut pts = input.clone();
            imp.run_int(&mut pts, &args).unwrap();
            assert_eq!(pts, expected, "{}", imp.name);

            let mut fpts: Vec<Point<f64>> = input.iter().map(|&p| p.into()).collect();
            imp.run_double(&mut fpts, &args).unwrap();
            let back: Vec<Point<f64>> = expected.iter().map(|&p| p.into()).collect();
            assert_eq!(fpts, back, "{}", imp.name);
        }
    }
}
