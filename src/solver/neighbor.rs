//! Single-rectangle resampling move.
//!
//! A move picks one clue and redraws its rectangle uniformly from that
//! clue's candidate set. Clues whose rectangle is locally broken (wrong
//! area, or sitting on an over-covered cell) are preferred; when none is,
//! any clue may be picked. Uncovered cells are not a local signal, so a
//! state whose only defect is a gap is escaped through the uniform branch.

use rand::seq::IndexedRandom;
use rand::Rng;

use super::assignment::Assignment;
use crate::puzzle::{Puzzle, Rectangle};

/// Indices of clues whose rectangle has the wrong area, leaves the grid,
/// or touches a cell covered more than once.
pub fn bad_indices(puzzle: &Puzzle, assignment: &Assignment) -> Vec<usize> {
    let (width, height) = (puzzle.width(), puzzle.height());
    let coverage = assignment.coverage(puzzle);
    assignment
        .iter()
        .enumerate()
        .filter_map(|(i, rect)| {
            let rect = rect?;
            if !rect.is_sized() || !rect.fits(width, height) {
                return Some(i);
            }
            rect.cells()
                .any(|(x, y)| coverage[y * width + x] > 1)
                .then_some(i)
        })
        .collect()
}

/// Returns a copy of `assignment` with clue `index` redrawn from `candidates`.
///
/// With no candidates the copy is returned untouched: the clue can never be
/// placed, and skipping the move is the only thing left to do.
pub fn resample<R: Rng>(
    assignment: &Assignment,
    index: usize,
    candidates: &[Rectangle],
    rng: &mut R,
) -> Assignment {
    let mut next = assignment.clone();
    if let Some(rect) = candidates.choose(rng) {
        next.set(index, *rect);
    }
    next
}

/// Proposes a neighbour of `assignment`, which is left unmodified.
///
/// `candidates[i]` is the candidate set of clue `i`.
pub fn neighbor<R: Rng>(
    puzzle: &Puzzle,
    candidates: &[Vec<Rectangle>],
    assignment: &Assignment,
    rng: &mut R,
) -> Assignment {
    if assignment.is_empty() {
        return assignment.clone();
    }
    let bad = bad_indices(puzzle, assignment);
    let index = match bad.choose(rng) {
        Some(&i) => i,
        None => rng.random_range(0..assignment.len()),
    };
    let options = candidates.get(index).map(Vec::as_slice).unwrap_or_default();
    resample(assignment, index, options, rng)
}
