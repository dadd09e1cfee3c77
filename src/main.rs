//! jsondiff-skmeans CLI
//!
//! Structural JSON diff and step-by-step spherical k-means from the command line.
//!
//! Usage:
//!     jsondiff-skmeans diff a.json b.json
//!     jsondiff-skmeans diff a.json b.json -l
//!     jsondiff-skmeans cluster --input points.json --k 3 --iterations 5

use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal, NormalError};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use jsondiff_skmeans::adapters::{load_json, load_vectors, AsciiPlot, JsonSnapshotPlot, TextReport};
use jsondiff_skmeans::core::{difference, flatten_differences, ClusterConfig, SphericalKMeans};
use jsondiff_skmeans::ports::{Plot, Report};

/// jsondiff-skmeans - structural JSON diff and iterative spherical k-means
#[derive(Parser)]
#[command(name = "jsondiff-skmeans")]
#[command(version)]
#[command(about = "Structural JSON diff and iterative spherical k-means", long_about = None)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the differences between two JSON files
    ///
    /// Default output is the merged document, where each difference is an
    /// object {"A_SIDE": <file_a value>, "B_SIDE": <file_b value>}.
    /// With -l, prints one line per differing leaf:
    /// breadcrumb, file_b value, file_a value (tab separated).
    Diff {
        /// First JSON file (A side)
        file_a: Option<String>,

        /// Second JSON file (B side)
        file_b: Option<String>,

        /// List differing leaves instead of printing the merged document
        #[arg(short, long)]
        list: bool,
    },

    /// Run spherical k-means one iteration at a time, plotting each step
    Cluster {
        /// JSON file holding an array of numeric arrays; synthetic data if omitted
        #[arg(short, long)]
        input: Option<String>,

        /// Number of clusters
        #[arg(short, long, default_value = "3")]
        k: usize,

        /// Upper bound on the number of clusters
        #[arg(long, default_value = "10")]
        max_k: usize,

        /// Record capacity; older records are overwritten past this
        #[arg(long, default_value = "500")]
        max_records: usize,

        /// Features per synthetic point (ignored with --input)
        #[arg(long, default_value = "2")]
        features: usize,

        /// Number of synthetic points (ignored with --input)
        #[arg(long, default_value = "200")]
        points: usize,

        /// Iterations to run
        #[arg(short = 'n', long, default_value = "5")]
        iterations: usize,

        /// RNG seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Write a JSON snapshot per step to this file (overwrites it)
        #[arg(long)]
        snapshot: Option<String>,

        /// Plot width in characters
        #[arg(long, default_value = "60")]
        width: usize,

        /// Plot height in characters
        #[arg(long, default_value = "24")]
        height: usize,
    },
}

fn expand_path(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

/// Write the long help of the `diff` subcommand
fn write_diff_usage<W: Write>(mut out: W) -> io::Result<()> {
    let mut cmd = Cli::command();
    match cmd.find_subcommand_mut("diff") {
        Some(diff) => diff.write_long_help(&mut out),
        None => cmd.write_long_help(&mut out),
    }
}

fn cmd_diff<W: Write>(
    file_a: Option<&str>,
    file_b: Option<&str>,
    list: bool,
    out: W,
) -> Result<(), Box<dyn Error>> {
    let (Some(file_a), Some(file_b)) = (file_a, file_b) else {
        // Fewer than two files: show usage, do no work
        write_diff_usage(out)?;
        return Ok(());
    };

    let a = load_json(&expand_path(file_a))?;
    let b = load_json(&expand_path(file_b))?;

    let diff = difference(&a, &b);
    info!(divergences = diff.divergence_count(), "diff computed");

    let mut report = TextReport::new(out);
    if list {
        report.rows(&flatten_differences(&diff))?;
    } else {
        report.tree(&diff)?;
    }
    Ok(())
}

/// Non-negative points scattered around `clusters` random directions
fn synthetic_points(
    count: usize,
    features: usize,
    clusters: usize,
    seed: Option<u64>,
) -> Result<Vec<Vec<f32>>, NormalError> {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s.wrapping_add(1)),
        None => StdRng::from_entropy(),
    };
    let noise = Normal::new(0.0f32, 0.15)?;

    let centres: Vec<Vec<f32>> = (0..clusters.max(1))
        .map(|_| (0..features).map(|_| rng.gen_range(0.0f32..1.0)).collect())
        .collect();

    Ok((0..count)
        .map(|i| {
            let centre = &centres[i % centres.len()];
            centre
                .iter()
                .map(|c| (c + noise.sample(&mut rng)).abs() + f32::EPSILON)
                .collect()
        })
        .collect())
}

#[allow(clippy::too_many_arguments)]
fn cmd_cluster(
    input: Option<&str>,
    k: usize,
    max_k: usize,
    max_records: usize,
    features: usize,
    points: usize,
    iterations: usize,
    seed: Option<u64>,
    snapshot: Option<&str>,
    width: usize,
    height: usize,
) -> Result<(), Box<dyn Error>> {
    let vectors = match input {
        Some(path) => load_vectors(&expand_path(path))?,
        None => synthetic_points(points, features, k, seed)?,
    };
    let num_features = vectors.first().map_or(features, Vec::len);

    let mut config = ClusterConfig::new(k, num_features)
        .with_max_k(max_k)
        .with_max_records(max_records);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    let mut km = SphericalKMeans::new(config)?;

    for (i, vector) in vectors.iter().enumerate() {
        if let Err(e) = km.add_record(vector) {
            warn!(record = i, error = %e, "skipping record");
        }
    }
    info!(records = km.len(), k = km.k(), "clusterer ready");

    let mut plot = AsciiPlot::new(io::stdout().lock(), width, height);
    let mut snapshots = match snapshot {
        Some(path) => Some(JsonSnapshotPlot::new(BufWriter::new(File::create(expand_path(path))?))),
        None => None,
    };

    println!("Initial state");
    plot.plot(&km.snapshot())?;
    if let Some(writer) = snapshots.as_mut() {
        writer.plot(&km.snapshot())?;
    }

    for step in 1..=iterations {
        let stats = km.iterate();
        println!();
        println!(
            "Iteration {} ({} reassigned, {} re-seeded)",
            step, stats.reassigned, stats.reseeded
        );
        plot.plot(&km.snapshot())?;
        if let Some(writer) = snapshots.as_mut() {
            writer.plot(&km.snapshot())?;
        }
    }
    Ok(())
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Diff { file_a, file_b, list } => cmd_diff(
            file_a.as_deref(),
            file_b.as_deref(),
            list,
            io::stdout().lock(),
        ),
        Commands::Cluster {
            input,
            k,
            max_k,
            max_records,
            features,
            points,
            iterations,
            seed,
            snapshot,
            width,
            height,
        } => cmd_cluster(
            input.as_deref(),
            k,
            max_k,
            max_records,
            features,
            points,
            iterations,
            seed,
            snapshot.as_deref(),
            width,
            height,
        ),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
