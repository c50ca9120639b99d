use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use polyroots::{Analysis, Polynomial, Solver, SolverConfig};

/// Analyze a real polynomial: intercepts, extrema, monotonicity and concavity.
#[derive(Parser, Debug)]
#[command(name = "polyroots", version, about, long_about = None)]
struct Cli {
    /// Coefficients in ascending power order: a0 a1 ... an
    #[arg(required = true, allow_negative_numbers = true)]
    coeffs: Vec<f64>,

    /// TOML file with solver settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for the initial Newton-Raphson guesses
    #[arg(short, long)]
    seed: Option<u64>,

    /// Log filter (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cli.log_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = match &cli.config {
        Some(path) => SolverConfig::load(path)
            .with_context(|| format!("loading solver config from {}", path.display()))?,
        None => SolverConfig::default(),
    };
    tracing::debug!(?config, "solver config");

    let f = Polynomial::new(cli.coeffs).context("invalid coefficients")?;

    let analysis = match cli.seed {
        Some(seed) => Analysis::of(&f, &mut Solver::from_seed(config, seed)),
        None => Analysis::of(&f, &mut Solver::from_entropy(config)),
    }
    .with_context(|| format!("analyzing f(x) = {}", f))?;

    println!("{}", analysis);
    Ok(())
}
