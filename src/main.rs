//! Shikaku solver CLI.
//!
//! Loads a puzzle file, anneals it and prints the rendered grid.
//! Exits with status 2 when no solution was found within the budget.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use shikaku_anneal::puzzle::{load_puzzle, render};
use shikaku_anneal::sa::{CoolingSchedule, SaConfig, SaResult, SaRunner};
use shikaku_anneal::solver::{Assignment, ShikakuProblem};

#[derive(Parser)]
#[command(name = "shikaku")]
#[command(version)]
#[command(about = "Solve Shikaku puzzles by simulated annealing")]
struct Cli {
    /// Puzzle file: "width height" then one "row col value" line per clue
    puzzle: PathBuf,

    /// Random seed (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many iterations (0 = no limit)
    #[arg(long, default_value = "0")]
    max_iterations: usize,

    /// Stop after this many milliseconds
    #[arg(long)]
    time_limit_ms: Option<u64>,

    /// Initial temperature
    #[arg(long, default_value = "1000")]
    initial_temperature: f64,

    /// Cooling schedule: geometric[:alpha] or lundy-mees:beta
    #[arg(long, default_value = "geometric:0.95")]
    cooling: CoolingSchedule,

    /// Iterations per temperature level
    #[arg(long, default_value = "100")]
    iterations_per_temperature: usize,

    /// Number of independent replicas raced in parallel
    #[arg(long, default_value = "1")]
    replicas: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let puzzle = load_puzzle(&cli.puzzle)
        .with_context(|| format!("loading {}", cli.puzzle.display()))?;
    info!(
        width = puzzle.width(),
        height = puzzle.height(),
        clues = puzzle.clues().len(),
        "puzzle loaded"
    );

    let mut config = SaConfig::default()
        .with_initial_temperature(cli.initial_temperature)
        .with_cooling(cli.cooling)
        .with_iterations_per_temperature(cli.iterations_per_temperature)
        .with_max_iterations(cli.max_iterations);
    if let Some(ms) = cli.time_limit_ms {
        config = config.with_time_limit_ms(ms);
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let problem = ShikakuProblem::new(puzzle);
    let result = solve(&problem, &config, cli.replicas)?;

    if let Some(initial) = result.cost_history.first() {
        println!("Initial fitness: {initial}");
    }
    println!("Final fitness: {}", result.best_cost);
    println!("Iterations: {}", result.iterations);
    print!("{}", render(problem.puzzle(), &result.best));

    if result.converged {
        Ok(ExitCode::SUCCESS)
    } else {
        let b = problem.breakdown(&result.best);
        eprintln!(
            "no solution found: {} uncovered, {} over-covered, {} overlapping pairs, {} area mismatches, {} off-grid, {} unplaced clues",
            b.uncovered_cells,
            b.overcovered_cells,
            b.overlapping_pairs,
            b.area_mismatches,
            b.out_of_bounds,
            b.unassigned
        );
        Ok(ExitCode::from(2))
    }
}

#[cfg(feature = "parallel")]
fn solve(problem: &ShikakuProblem, config: &SaConfig, replicas: usize) -> Result<SaResult<Assignment>> {
    if replicas > 1 {
        return Ok(SaRunner::run_portfolio(problem, config, replicas)?);
    }
    Ok(SaRunner::run(problem, config)?)
}

#[cfg(not(feature = "parallel"))]
fn solve(problem: &ShikakuProblem, config: &SaConfig, replicas: usize) -> Result<SaResult<Assignment>> {
    if replicas > 1 {
        anyhow::bail!("--replicas needs the `parallel` feature");
    }
    Ok(SaRunner::run(problem, config)?)
}
