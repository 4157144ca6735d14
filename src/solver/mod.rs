//! Shikaku local search: assignments, the penalty function, the
//! resampling move and the [`SaProblem`](crate::sa::SaProblem) binding.
//!
//! # Key Types
//!
//! - [`Assignment`]: one rectangle slot per clue
//! - [`ShikakuProblem`]: puzzle plus cached candidate sets, solvable with
//!   [`SaRunner`](crate::sa::SaRunner)
//! - [`FitnessBreakdown`]: defect counts behind a fitness value

mod assignment;
pub mod fitness;
pub mod neighbor;
mod problem;

pub use assignment::Assignment;
pub use fitness::{breakdown, fitness, FitnessBreakdown};
pub use neighbor::{bad_indices, neighbor, resample};
pub use problem::ShikakuProblem;
