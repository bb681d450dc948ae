use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use hull2d::geom2::check_hull;
use hull2d::geom2::rand::{draw_cloud, draw_cloud_int, Cloud, CloudCfg, ReplayToken};
use hull2d::registry::{self, ImplArgs, ImplSpec};
use hull2d::{validate_input, Coord, Point, MAX_INT_COORD};
use serde::Serialize;
use serde_json::json;
use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::{Duration, Instant};
use tracing_subscriber::fmt::SubscriberBuilder;

mod pointio;
mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Run and compare the hull2d convex hull solvers")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// List the registered implementations
    List,
    /// Compute the hull of a point file (stdin by default)
    Run(RunOpts),
    /// Write a generated point cloud in the input format
    Gen(GenOpts),
}

#[derive(Args, Clone, Debug)]
struct RunOpts {
    /// Implementation name, optionally with arguments (e.g. `qh_recpar_xp:T4`,
    /// `qh_hybrid_mc:P32`)
    implementation: String,
    /// Read and solve integer coordinates instead of doubles
    #[arg(short = 'i')]
    int: bool,
    #[arg(long)]
    input: Option<PathBuf>,
    /// Write the hull here (plus a provenance sidecar) instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,
    /// Thread count; overrides a `:T<n>` suffix
    #[arg(long)]
    threads: Option<usize>,
    /// Check the result (subset, convexity, containment, minimality)
    #[arg(long)]
    verify: bool,
    #[arg(long)]
    json: bool,
}

#[derive(Args, Clone, Debug)]
struct GenOpts {
    kind: Cloud,
    #[arg(short = 'n', default_value_t = 1000)]
    n: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value_t = 100.0)]
    radius: f64,
    /// Round coordinates to integers
    #[arg(short = 'i')]
    int: bool,
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::List => list(),
        Action::Run(opts) => run(opts),
        Action::Gen(opts) => generate(opts),
    }
}

fn list() -> Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "Available implementations:")?;
    for imp in registry::all() {
        writeln!(out, " - {} ({}): {}", imp.name, imp.coords(), imp.summary)?;
    }
    Ok(())
}

/// Hull plus what `run` reports about it.
#[derive(Debug)]
struct Outcome<T> {
    n_in: usize,
    hull: Vec<Point<T>>,
    compute: Duration,
}

fn run(opts: RunOpts) -> Result<()> {
    let started = Instant::now();
    let spec: ImplSpec = opts.implementation.parse()?;
    let imp = spec.resolve()?;
    let args = ImplArgs {
        threads: opts.threads.or(spec.args.threads),
        ..spec.args
    };
    tracing::info!(implementation = imp.name, args = ?args, int = opts.int, "run");
    let text = read_input(opts.input.as_deref())?;
    if opts.int {
        let outcome = execute::<i64, _>(&text, opts.verify.then_some(0.0), |p| {
            imp.run_int(p, &args)
        })?;
        emit(&opts, imp.name, "int", outcome, started)
    } else {
        let outcome = execute::<f64, _>(&text, opts.verify.then_some(1e-9), |p| {
            imp.run_double(p, &args)
        })?;
        emit(&opts, imp.name, "double", outcome, started)
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) => {
            std::fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))
        }
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("reading stdin")?;
            Ok(text)
        }
    }
}

/// Parse, validate, solve and optionally verify with tolerance `verify_tol`.
fn execute<T, F>(text: &str, verify_tol: Option<f64>, solver: F) -> Result<Outcome<T>>
where
    T: Coord + FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: FnOnce(&mut Vec<Point<T>>) -> hull2d::Result<()>,
{
    let mut points: Vec<Point<T>> = pointio::parse_points(text)?;
    validate_input(&points).context("invalid input")?;
    let n_in = points.len();
    let original = verify_tol.map(|_| points.clone());

    let t0 = Instant::now();
    solver(&mut points)?;
    let compute = t0.elapsed();

    if let (Some(original), Some(tol)) = (original, verify_tol) {
        check_hull(&original, &points, tol).context("hull verification failed")?;
        tracing::info!(n_in, n_out = points.len(), "verified");
    }
    Ok(Outcome {
        n_in,
        hull: points,
        compute,
    })
}

fn emit<T>(opts: &RunOpts, name: &str, coords: &str, outcome: Outcome<T>, started: Instant) -> Result<()>
where
    T: Coord + Display + Serialize,
{
    let mut out: Box<dyn Write> = match &opts.out {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    let elapsed = started.elapsed();
    let elapsed_ms = elapsed.as_secs_f64() * 1e3;
    let compute_ms = outcome.compute.as_secs_f64() * 1e3;
    if opts.json {
        let hull: Vec<[T; 2]> = outcome.hull.iter().map(|p| [p.x, p.y]).collect();
        let doc = json!({
            "implementation": name,
            "coords": coords,
            "n_in": outcome.n_in,
            "count": hull.len(),
            "hull": hull,
            "elapsed_ms": elapsed_ms,
            "compute_ms": compute_ms,
        });
        serde_json::to_writer_pretty(&mut out, &doc)?;
        writeln!(out)?;
    } else {
        pointio::write_points(&mut out, &outcome.hull)?;
    }
    out.flush()?;
    tracing::info!(elapsed_ms, compute_ms, n_in = outcome.n_in, n_out = outcome.hull.len(), "timing");

    if let Some(path) = &opts.out {
        let record = provenance::RunRecord {
            command: "run",
            params: json!({
                "implementation": opts.implementation,
                "coords": coords,
                "threads": opts.threads,
                "input": opts.input.as_ref().map(|p| p.to_string_lossy().into_owned()),
                "verify": opts.verify,
            }),
            stats: json!({
                "n_in": outcome.n_in,
                "n_out": outcome.hull.len(),
                "elapsed_ms": elapsed_ms,
                "compute_ms": compute_ms,
            }),
        };
        provenance::write_sidecar(path, record)?;
    }
    Ok(())
}

fn generate(opts: GenOpts) -> Result<()> {
    if opts.int && opts.radius.abs() > MAX_INT_COORD as f64 {
        bail!("integer clouds need |radius| <= {MAX_INT_COORD}");
    }
    let cfg = CloudCfg {
        kind: opts.kind,
        n: opts.n,
        radius: opts.radius,
    };
    let tok = ReplayToken {
        seed: opts.seed,
        index: 0,
    };
    tracing::info!(kind = %opts.kind, n = opts.n, seed = opts.seed, int = opts.int, "gen");

    let mut out: Box<dyn Write> = match &opts.out {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    if opts.int {
        pointio::write_input(&mut out, &draw_cloud_int(cfg, tok))?;
    } else {
        pointio::write_input(&mut out, &draw_cloud(cfg, tok))?;
    }
    out.flush()?;

    if let Some(path) = &opts.out {
        let record = provenance::RunRecord {
            command: "gen",
            params: json!({
                "kind": opts.kind.to_string(),
                "n": opts.n,
                "seed": opts.seed,
                "radius": opts.radius,
                "int": opts.int,
            }),
            stats: json!({}),
        };
        provenance::write_sidecar(path, record)?;
    }
    Ok(())
}
