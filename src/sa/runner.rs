//! SA execution loop.

use super::config::SaConfig;
use super::types::SaProblem;
use crate::error::Result;
use crate::random::{create_rng, fresh_seed};
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

#[cfg(feature = "parallel")]
use crate::{error::Error, random::derive_seed};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult<S: Clone> {
    /// The best solution found.
    pub best: S,

    /// Penalty of the best solution.
    pub best_cost: usize,

    /// Whether a zero-penalty solution was reached.
    pub converged: bool,

    /// Whether cancelled externally.
    pub cancelled: bool,

    /// Whether the wall-clock limit ran out.
    pub timed_out: bool,

    /// Total number of iterations (neighbour evaluations).
    pub iterations: usize,

    /// Number of cooling steps applied.
    pub temperature_steps: usize,

    /// Temperature when the algorithm stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Best cost sampled at regular intervals for history tracking.
    pub cost_history: Vec<usize>,
}

/// Metropolis acceptance criterion.
///
/// Moves that do not worsen the penalty (`delta <= 0`) are always taken.
/// A worsening move is taken with probability `exp(-delta / temperature)`,
/// and never once the temperature has reached zero.
pub fn metropolis_accept<R: Rng>(delta: f64, temperature: f64, rng: &mut R) -> bool {
    if delta <= 0.0 {
        return true;
    }
    if temperature <= 0.0 {
        return false;
    }
    rng.random::<f64>() < (-delta / temperature).exp()
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA from a random initial solution.
    ///
    /// Returns once the penalty reaches zero or a budget from `config` is
    /// exhausted. Fails only on an invalid configuration.
    pub fn run<P: SaProblem>(problem: &P, config: &SaConfig) -> Result<SaResult<P::Solution>> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs SA with an optional cancellation token.
    ///
    /// The flag is polled once per temperature level.
    pub fn run_with_cancel<P: SaProblem>(
        problem: &P,
        config: &SaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SaResult<P::Solution>> {
        config.validate()?;
        let mut rng = create_rng(config.seed.unwrap_or_else(fresh_seed));
        let initial = problem.initial_solution(&mut rng);
        Ok(anneal(problem, initial, config, &mut rng, cancel.as_deref()))
    }

    /// Runs SA starting from `initial` instead of a random solution.
    pub fn run_from<P: SaProblem>(
        problem: &P,
        initial: P::Solution,
        config: &SaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SaResult<P::Solution>> {
        config.validate()?;
        let mut rng = create_rng(config.seed.unwrap_or_else(fresh_seed));
        Ok(anneal(problem, initial, config, &mut rng, cancel.as_deref()))
    }

    /// Races `replicas` independent runs on the rayon pool.
    ///
    /// Every replica starts from its own copy of one shared initial solution
    /// and draws from its own seeded generator. The first replica to reach
    /// zero penalty stops the others. The lowest-penalty result is returned.
    #[cfg(feature = "parallel")]
    pub fn run_portfolio<P: SaProblem>(
        problem: &P,
        config: &SaConfig,
        replicas: usize,
    ) -> Result<SaResult<P::Solution>> {
        config.validate()?;
        if replicas == 0 {
            return Err(Error::InvalidConfig("replicas must be positive".into()));
        }

        let base_seed = config.seed.unwrap_or_else(fresh_seed);
        let initial = problem.initial_solution(&mut create_rng(base_seed));
        let stop = AtomicBool::new(false);

        let results: Vec<SaResult<P::Solution>> = (0..replicas)
            .into_par_iter()
            .map(|replica| {
                let mut rng = create_rng(derive_seed(base_seed, replica as u64));
                let result = anneal(problem, initial.clone(), config, &mut rng, Some(&stop));
                if result.converged {
                    stop.store(true, Ordering::Relaxed);
                }
                result
            })
            .collect();

        results
            .into_iter()
            .min_by_key(|r| (r.best_cost, !r.converged, r.iterations))
            .ok_or_else(|| Error::InvalidConfig("portfolio produced no result".into()))
    }
}

/// The annealing loop proper.
///
/// Runs batches of `config.batch_size()` iterations, cooling after each
/// batch, until the current penalty is zero or a budget runs out.
fn anneal<P: SaProblem, R: Rng>(
    problem: &P,
    initial: P::Solution,
    config: &SaConfig,
    rng: &mut R,
    cancel: Option<&AtomicBool>,
) -> SaResult<P::Solution> {
    let start = Instant::now();
    let time_limit = config.time_limit_ms.map(Duration::from_millis);

    let mut current = initial;
    let mut current_cost = problem.cost(&current);
    let mut best = current.clone();
    let mut best_cost = current_cost;

    let mut temperature = config.initial_temperature;
    let mut total_iterations = 0usize;
    let mut temperature_steps = 0usize;
    let mut accepted_moves = 0usize;
    let mut improving_moves = 0usize;
    let mut cancelled = false;
    let mut timed_out = false;

    let batch = config.batch_size();
    let history_interval = 100.max(batch);
    let mut cost_history = vec![best_cost];

    'search: while current_cost != 0 {
        if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            cancelled = true;
            break;
        }
        if time_limit.is_some_and(|limit| start.elapsed() >= limit) {
            timed_out = true;
            break;
        }

        for _ in 0..batch {
            if config.max_iterations > 0 && total_iterations >= config.max_iterations {
                break 'search;
            }

            let neighbor = problem.neighbor(&current, rng);
            let neighbor_cost = problem.cost(&neighbor);
            let delta = neighbor_cost as f64 - current_cost as f64;
            total_iterations += 1;

            if delta < 0.0 {
                improving_moves += 1;
            }
            if metropolis_accept(delta, temperature, rng) {
                current = neighbor;
                current_cost = neighbor_cost;
                accepted_moves += 1;

                if current_cost < best_cost {
                    best = current.clone();
                    best_cost = current_cost;
                }
            }

            if total_iterations.is_multiple_of(history_interval) {
                cost_history.push(best_cost);
            }
            if current_cost == 0 {
                break 'search;
            }
        }

        temperature = config.cooling.cool(temperature);
        temperature_steps += 1;
        debug!(
            step = temperature_steps,
            temperature,
            current_cost,
            best_cost,
            "cooled"
        );
    }

    if cost_history.last() != Some(&best_cost) {
        cost_history.push(best_cost);
    }

    let converged = best_cost == 0;
    info!(
        converged,
        best_cost,
        iterations = total_iterations,
        temperature_steps,
        cancelled,
        timed_out,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "annealing finished"
    );

    SaResult {
        best,
        best_cost,
        converged,
        cancelled,
        timed_out,
        iterations: total_iterations,
        temperature_steps,
        final_temperature: temperature,
        accepted_moves,
        improving_moves,
        cost_history,
    }
}
