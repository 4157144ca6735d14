//! Heuristic Shikaku solver.
//!
//! A Shikaku grid is solved by splitting it into rectangles, each holding
//! exactly one clue and having that clue's value as its area. This crate
//! searches for such a tiling by simulated annealing:
//!
//! - **Puzzle model** ([`puzzle`]): rectangles, clues, validated instances,
//!   candidate placements per clue, the text file format and a text renderer.
//! - **Local search** ([`solver`]): assignments (one rectangle per clue), the
//!   defect-counting penalty and the single-rectangle resampling move.
//! - **Simulated Annealing** ([`sa`]): a generic Metropolis driver over
//!   integer penalties with geometric or Lundy-Mees cooling, iteration and
//!   time budgets, cancellation and (with the `parallel` feature) racing
//!   replicas.
//!
//! # Example
//!
//! ```
//! use shikaku_anneal::puzzle::{parse_puzzle, render};
//! use shikaku_anneal::sa::SaConfig;
//! use shikaku_anneal::solver::ShikakuProblem;
//!
//! let puzzle = parse_puzzle("4 4\n0 0 4\n0 2 4\n2 0 4\n2 2 4\n")?;
//! let problem = ShikakuProblem::new(puzzle);
//! let result = problem.solve(&SaConfig::default().with_seed(42))?;
//! assert!(result.converged);
//! println!("{}", render(problem.puzzle(), &result.best));
//! # Ok::<(), shikaku_anneal::Error>(())
//! ```

pub mod error;
pub mod puzzle;
pub mod random;
pub mod sa;
pub mod solver;

pub use error::{Error, Result};
