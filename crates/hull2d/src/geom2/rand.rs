//! Random point clouds for tests, benches and `cli gen`.
//!
//! Purpose
//! - Small, deterministic generators covering the input shapes the Quickhull
//!   variants are benchmarked on: uniform square, uniform disk, points on a
//!   circle (every point is a hull vertex), and a "killer" chain that drives
//!   the recursion depth up.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! Code cross-refs: `Point`, `quickhull::solve`

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Point;

/// Shape of a generated cloud.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cloud {
    /// Uniform in `[-radius, radius]²`.
    Square,
    /// Uniform in the disk of the given radius (rejection sampling).
    Disk,
    /// Uniform angle on the circle of the given radius.
    Circle,
    /// Convex chain `(−sin a, −r(1−cos a))` with geometrically shrinking `a`
    /// of alternating sign; each apex search peels off one vertex.
    Killer,
}

impl Cloud {
    pub const ALL: [Cloud; 4] = [Cloud::Square, Cloud::Disk, Cloud::Circle, Cloud::Killer];
}

impl fmt::Display for Cloud {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Cloud::Square => "square",
            Cloud::Disk => "disk",
            Cloud::Circle => "circle",
            Cloud::Killer => "killer",
        };
        f.write_str(s)
    }
}

impl FromStr for Cloud {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cloud::ALL
            .into_iter()
            .find(|c| c.to_string() == s)
            .ok_or_else(|| format!("unknown cloud kind: {s}"))
    }
}

/// Generator configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub kind: Cloud,
    pub n: usize,
    pub radius: f64,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            kind: Cloud::Disk,
            n: 1000,
            radius: 100.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Ratio between consecutive killer-chain angles. Its magnitude is close to
/// the positive root of `x^4 + x^2 + x − 1 = 0`, which maximises depth.
const KILLER_FACTOR: f64 = -0.5698;
/// Smallest angle kept by the killer chain before it saturates.
const KILLER_MIN_ANGLE: f64 = 1e-150;

/// Draw a floating-point cloud.
pub fn draw_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point<f64>> {
    let mut rng = tok.to_std_rng();
    let r = cfg.radius.abs().max(f64::MIN_POSITIVE);
    match cfg.kind {
        Cloud::Square => (0..cfg.n)
            .map(|_| Point::new(rng.gen_range(-r..=r), rng.gen_range(-r..=r)))
            .collect(),
        Cloud::Disk => (0..cfg.n)
            .map(|_| loop {
                let x = rng.gen_range(-r..=r);
                let y = rng.gen_range(-r..=r);
                if x * x + y * y <= r * r {
                    break Point::new(x, y);
                }
            })
            .collect(),
        Cloud::Circle => (0..cfg.n)
            .map(|_| {
                let th = rng.gen::<f64>() * std::f64::consts::TAU;
                Point::new(th.cos() * r, th.sin() * r)
            })
            .collect(),
        Cloud::Killer => killer_chain(cfg.n, r),
    }
}

/// Draw an integer cloud by rounding a float cloud to the grid.
pub fn draw_cloud_int(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point<i64>> {
    draw_cloud(cfg, tok)
        .into_iter()
        .map(|p| Point::new(p.x.round() as i64, p.y.round() as i64))
        .collect()
}

fn killer_chain(n: usize, stretch: f64) -> Vec<Point<f64>> {
    let mut pts = Vec::with_capacity(n);
    let mut angle = std::f64::consts::FRAC_PI_2;
    while pts.len() < n && angle.abs() > KILLER_MIN_ANGLE {
        let y = if angle.abs() > 1e-2 {
            -stretch * (1.0 - angle.cos())
        } else {
            -stretch * angle * angle / 2.0
        };
        pts.push(Point::new(-angle.sin(), y));
        angle *= KILLER_FACTOR;
    }
    // Pad with copies of the last point (duplicates are part of the workload).
    if let Some(&last) = pts.last() {
        pts.resize(n, last);
    }
    pts
}
