//! Puzzle instance: grid bounds plus the ordered clue list.

use super::types::Clue;
use crate::error::{Error, Result};

/// Largest grid accepted, in cells.
pub const MAX_CELLS: usize = 1 << 24;

/// A validated Shikaku instance.
///
/// Bounds and clues are fixed once constructed; every solver component
/// reads them and none mutates them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Puzzle {
    width: usize,
    height: usize,
    clues: Vec<Clue>,
}

impl Puzzle {
    /// Builds a puzzle, rejecting empty or oversized grids (more than
    /// [`MAX_CELLS`] cells), out-of-bounds clues, zero-valued clues and two
    /// clues on the same cell.
    ///
    /// Solvability is not checked.
    ///
    /// # Examples
    ///
    /// ```
    /// use shikaku_anneal::puzzle::{Clue, Puzzle};
    ///
    /// let puzzle = Puzzle::new(2, 1, vec![Clue::new(0, 0, 2)]).unwrap();
    /// assert_eq!(puzzle.cell_count(), 2);
    /// assert!(Puzzle::new(2, 1, vec![Clue::new(2, 0, 2)]).is_err());
    /// ```
    pub fn new(width: usize, height: usize, clues: Vec<Clue>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidPuzzle(format!(
                "grid dimensions must be positive, got {width}x{height}"
            )));
        }
        let cells = width
            .checked_mul(height)
            .filter(|&cells| cells <= MAX_CELLS)
            .ok_or_else(|| {
                Error::InvalidPuzzle(format!(
                    "grid {width}x{height} exceeds the {MAX_CELLS}-cell limit"
                ))
            })?;
        let mut seen = vec![false; cells];
        for (i, clue) in clues.iter().enumerate() {
            if clue.x >= width || clue.y >= height {
                return Err(Error::InvalidPuzzle(format!(
                    "clue {i} at ({}, {}) lies outside the {width}x{height} grid",
                    clue.x, clue.y
                )));
            }
            if clue.value == 0 {
                return Err(Error::InvalidPuzzle(format!(
                    "clue {i} at ({}, {}) has value 0",
                    clue.x, clue.y
                )));
            }
            let cell = clue.y * width + clue.x;
            if seen[cell] {
                return Err(Error::InvalidPuzzle(format!(
                    "more than one clue at ({}, {})",
                    clue.x, clue.y
                )));
            }
            seen[cell] = true;
        }
        Ok(Self {
            width,
            height,
            clues,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }

    /// Never overflows: construction bounds it by [`MAX_CELLS`].
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Sum of all clue values. Equals [`cell_count`](Self::cell_count) on
    /// any solvable puzzle.
    pub fn clue_total(&self) -> usize {
        self.clues
            .iter()
            .fold(0usize, |total, c| total.saturating_add(c.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_puzzle() {
        let puzzle = Puzzle::new(
            4,
            4,
            vec![
                Clue::new(0, 0, 4),
                Clue::new(2, 0, 4),
                Clue::new(0, 2, 4),
                Clue::new(2, 2, 4),
            ],
        )
        .unwrap();
        assert_eq!(puzzle.width(), 4);
        assert_eq!(puzzle.height(), 4);
        assert_eq!(puzzle.clues().len(), 4);
        assert_eq!(puzzle.clue_total(), puzzle.cell_count());
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(matches!(
            Puzzle::new(0, 3, vec![]),
            Err(Error::InvalidPuzzle(_))
        ));
        assert!(Puzzle::new(3, 0, vec![]).is_err());
    }

    #[test]
    fn test_oversized_grid_rejected() {
        assert!(matches!(
            Puzzle::new(usize::MAX, 2, vec![]),
            Err(Error::InvalidPuzzle(_))
        ));
        assert!(Puzzle::new(MAX_CELLS + 1, 1, vec![]).is_err());
        assert!(Puzzle::new(1 << 12, 1 << 12, vec![]).is_ok());
    }

    #[test]
    fn test_clue_total_saturates() {
        let puzzle = Puzzle::new(2, 1, vec![Clue::new(0, 0, usize::MAX), Clue::new(1, 0, 5)]).unwrap();
        assert_eq!(puzzle.clue_total(), usize::MAX);
    }

    #[test]
    fn test_out_of_bounds_clue_rejected() {
        assert!(Puzzle::new(3, 3, vec![Clue::new(1, 3, 2)]).is_err());
    }

    #[test]
    fn test_zero_value_rejected() {
        assert!(Puzzle::new(3, 3, vec![Clue::new(1, 1, 0)]).is_err());
    }

    #[test]
    fn test_duplicate_cell_rejected() {
        let err = Puzzle::new(3, 3, vec![Clue::new(1, 1, 2), Clue::new(1, 1, 3)]).unwrap_err();
        assert!(err.to_string().contains("more than one clue"));
    }

    #[test]
    fn test_unsolvable_puzzle_is_still_valid_input() {
        // Area 3 never fits in a 2x2 grid; that is the solver's problem.
        assert!(Puzzle::new(2, 2, vec![Clue::new(0, 0, 3)]).is_ok());
    }
}
