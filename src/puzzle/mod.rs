//! Puzzle model: geometry, instances, candidate placements, file format
//! and text rendering.

pub mod candidates;
mod grid;
pub mod loader;
mod render;
mod types;

pub use candidates::candidates;
pub use grid::{Puzzle, MAX_CELLS};
pub use loader::{load_puzzle, parse_puzzle};
pub use render::render;
pub use types::{Clue, Rectangle};
