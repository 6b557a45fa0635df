//! Solve a seeded random linear system and report its solution set
//!
//! Usage:
//!     cargo run --bin solve_random --release -- --rows 20 --cols 20
//!     cargo run --bin solve_random -- --rows 3 --cols 5 --rank 2 --consistent --consistency-tol 1e-8

use anyhow::{Context, bail};
use clap::Parser;
use math_audio_gauss::blas_helpers::max_abs_residual;
use math_audio_gauss::{GaussConfig, GaussConfigBuilder, Solution, solve_with_config};
use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt::Write as FmtWrite;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "solve_random",
    about = "Solve a random dense linear system and print its complete solution set"
)]
struct Cli {
    /// Number of equations
    #[arg(long, default_value_t = 20)]
    rows: usize,

    /// Number of unknowns
    #[arg(long, default_value_t = 20)]
    cols: usize,

    /// Force the coefficient matrix to this rank (product of two random factors)
    #[arg(long)]
    rank: Option<usize>,

    /// Build the right-hand side as A·x0 so the system is always solvable
    #[arg(long)]
    consistent: bool,

    /// Lower bound of the random entries
    #[arg(long, default_value_t = 1.0)]
    low: f64,

    /// Upper bound of the random entries
    #[arg(long, default_value_t = 50.0)]
    high: f64,

    /// Random seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Pivot significance threshold
    #[arg(long)]
    pivot_tol: Option<f64>,

    /// Consistency threshold for leftover right-hand side entries
    #[arg(long)]
    consistency_tol: Option<f64>,

    /// JSON file with a solver configuration (command-line tolerances win)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize, low: f64, high: f64) -> Array2<f64> {
    Array2::from_shape_fn((rows, cols), |_| rng.random_range(low..high))
}

fn format_vector(v: &Array1<f64>) -> String {
    let mut buffer = String::new();
    for (idx, value) in v.iter().enumerate() {
        if idx > 0 {
            buffer.push_str(", ");
        }
        let _ = write!(&mut buffer, "{value:.6}");
    }
    format!("[{buffer}]")
}

fn build_config(args: &Cli) -> anyhow::Result<GaussConfig> {
    let base = match &args.config {
        Some(path) => GaussConfig::from_json_file(path)
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("loading {}", path.display()))?,
        None => GaussConfig::default(),
    };

    let mut builder = GaussConfigBuilder::new()
        .pivot_tolerance(base.pivot_tolerance)
        .consistency_tolerance(base.consistency_tolerance);
    if let Some(tol) = args.pivot_tol {
        builder = builder.pivot_tolerance(tol);
    }
    if let Some(tol) = args.consistency_tol {
        builder = builder.consistency_tolerance(tol);
    }
    Ok(builder.build()?)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Cli::parse();

    if !(args.low < args.high) {
        bail!("--low must be smaller than --high; got {} and {}", args.low, args.high);
    }
    let config = build_config(&args)?;

    let mut rng = StdRng::seed_from_u64(args.seed);
    let a = match args.rank {
        Some(rank) => {
            let left = random_matrix(&mut rng, args.rows, rank, args.low, args.high);
            let right = random_matrix(&mut rng, rank, args.cols, args.low, args.high);
            left.dot(&right)
        }
        None => random_matrix(&mut rng, args.rows, args.cols, args.low, args.high),
    };
    let b = if args.consistent {
        let x0 = Array1::from_shape_fn(args.cols, |_| rng.random_range(args.low..args.high));
        a.dot(&x0)
    } else {
        Array1::from_shape_fn(args.rows, |_| rng.random_range(args.low..args.high))
    };

    println!(
        "Solving {}x{} system (seed {}, rank {})",
        args.rows,
        args.cols,
        args.seed,
        args.rank
            .map_or_else(|| "full".to_string(), |r| r.to_string())
    );

    let space = match solve_with_config(&a, &b, &config)? {
        Solution::NoSolution => {
            println!("No solution: the system is inconsistent");
            return Ok(());
        }
        Solution::Space(space) => space,
    };

    let dof = space.degrees_of_freedom();
    println!("Unique: {}", space.is_unique());
    println!("Rank: {}", space.rank());
    println!("Degrees of freedom: {}", dof);
    if let Some(mask) = space.free_variable_mask() {
        println!("Free unknowns: {:?}", mask.free_indices());
    }

    let coefficients = Array1::from_shape_fn(dof, |i| 5.0 + i as f64);
    let x = space.evaluate(&coefficients)?;
    println!("x = {}", format_vector(&x));
    println!("max |A·x - b| = {:.3e}", max_abs_residual(&a, &x, &b));

    Ok(())
}
