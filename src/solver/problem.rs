//! Shikaku as an annealing problem.

use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::warn;

use super::assignment::Assignment;
use super::fitness::{breakdown, fitness, FitnessBreakdown};
use super::neighbor::{bad_indices, neighbor, resample};
use crate::error::Result;
use crate::puzzle::{candidates, Puzzle, Rectangle};
use crate::sa::{SaConfig, SaProblem, SaResult, SaRunner};

/// A puzzle together with the candidate placements of every clue.
///
/// Candidate sets depend only on the fixed puzzle, so they are generated
/// once here rather than on every move.
///
/// # Examples
///
/// ```
/// use shikaku_anneal::puzzle::parse_puzzle;
/// use shikaku_anneal::sa::SaConfig;
/// use shikaku_anneal::solver::ShikakuProblem;
///
/// let puzzle = parse_puzzle("4 2\n0 0 4\n1 3 4\n").unwrap();
/// let problem = ShikakuProblem::new(puzzle);
/// let result = problem.solve(&SaConfig::default().with_seed(1)).unwrap();
/// assert!(result.converged);
/// assert_eq!(problem.fitness(&result.best), 0);
/// ```
#[derive(Debug, Clone)]
pub struct ShikakuProblem {
    puzzle: Puzzle,
    candidates: Vec<Vec<Rectangle>>,
}

impl ShikakuProblem {
    pub fn new(puzzle: Puzzle) -> Self {
        let sets: Vec<Vec<Rectangle>> = puzzle
            .clues()
            .iter()
            .map(|clue| candidates(puzzle.width(), puzzle.height(), clue))
            .collect();
        for (i, (clue, set)) in puzzle.clues().iter().zip(&sets).enumerate() {
            if set.is_empty() {
                warn!(
                    clue = i,
                    x = clue.x,
                    y = clue.y,
                    value = clue.value,
                    "clue has no placement inside the grid; puzzle is unsolvable"
                );
            }
        }
        Self {
            puzzle,
            candidates: sets,
        }
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Candidate placements of clue `index`; empty for an out-of-range index.
    pub fn candidates(&self, index: usize) -> &[Rectangle] {
        self.candidates.get(index).map(Vec::as_slice).unwrap_or_default()
    }

    /// Whether some clue can never be placed.
    pub fn has_unplaceable_clue(&self) -> bool {
        self.candidates.iter().any(Vec::is_empty)
    }

    /// Draws one candidate per clue; clues without candidates stay unassigned.
    pub fn random_assignment<R: Rng>(&self, rng: &mut R) -> Assignment {
        self.candidates
            .iter()
            .map(|set| set.choose(rng).copied())
            .collect()
    }

    pub fn fitness(&self, assignment: &Assignment) -> usize {
        fitness(&self.puzzle, assignment)
    }

    pub fn breakdown(&self, assignment: &Assignment) -> FitnessBreakdown {
        breakdown(&self.puzzle, assignment)
    }

    pub fn bad_indices(&self, assignment: &Assignment) -> Vec<usize> {
        bad_indices(&self.puzzle, assignment)
    }

    /// Neighbour of `assignment` with clue `index` redrawn.
    pub fn resample<R: Rng>(&self, assignment: &Assignment, index: usize, rng: &mut R) -> Assignment {
        resample(assignment, index, self.candidates(index), rng)
    }

    /// Anneals from a random assignment.
    pub fn solve(&self, config: &SaConfig) -> Result<SaResult<Assignment>> {
        SaRunner::run(self, config)
    }

    /// Anneals from the given assignment.
    pub fn solve_from(&self, initial: Assignment, config: &SaConfig) -> Result<SaResult<Assignment>> {
        SaRunner::run_from(self, initial, config, None)
    }
}

impl SaProblem for ShikakuProblem {
    type Solution = Assignment;

    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Assignment {
        self.random_assignment(rng)
    }

    fn cost(&self, assignment: &Assignment) -> usize {
        fitness(&self.puzzle, assignment)
    }

    fn neighbor<R: Rng>(&self, assignment: &Assignment, rng: &mut R) -> Assignment {
        neighbor(&self.puzzle, &self.candidates, assignment, rng)
    }
}
