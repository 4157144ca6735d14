//! Penalty function over a full assignment.
//!
//! Each unit of penalty is one structural defect:
//!
//! - a rectangle whose area differs from its clue value,
//! - a rectangle reaching outside the grid,
//! - a clue with no rectangle at all,
//! - a cell covered by no rectangle,
//! - a cell covered by more than one rectangle,
//! - an unordered pair of overlapping rectangles.
//!
//! The total is zero exactly when the assignment tiles the grid.

use super::assignment::Assignment;
use crate::puzzle::Puzzle;

/// Defect counts behind a fitness value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FitnessBreakdown {
    pub area_mismatches: usize,
    pub out_of_bounds: usize,
    pub unassigned: usize,
    pub uncovered_cells: usize,
    pub overcovered_cells: usize,
    pub overlapping_pairs: usize,
}

impl FitnessBreakdown {
    /// Sum of all defect counts.
    pub fn total(&self) -> usize {
        self.area_mismatches
            + self.out_of_bounds
            + self.unassigned
            + self.uncovered_cells
            + self.overcovered_cells
            + self.overlapping_pairs
    }

    pub fn is_solved(&self) -> bool {
        self.total() == 0
    }
}

/// Scores `assignment` against `puzzle`. Lower is better; 0 is a solution.
///
/// Cost is `O(cells * rects + rects^2)`.
///
/// # Examples
///
/// ```
/// use shikaku_anneal::puzzle::{Clue, Puzzle, Rectangle};
/// use shikaku_anneal::solver::{fitness, Assignment};
///
/// let puzzle = Puzzle::new(2, 1, vec![Clue::new(0, 0, 1), Clue::new(1, 0, 1)]).unwrap();
/// let solved = Assignment::new(vec![
///     Some(Rectangle::new(0, 0, 0, 0, 1)),
///     Some(Rectangle::new(1, 0, 1, 0, 1)),
/// ]);
/// assert_eq!(fitness(&puzzle, &solved), 0);
/// ```
pub fn fitness(puzzle: &Puzzle, assignment: &Assignment) -> usize {
    breakdown(puzzle, assignment).total()
}

/// Computes every defect count separately.
pub fn breakdown(puzzle: &Puzzle, assignment: &Assignment) -> FitnessBreakdown {
    let rects: Vec<_> = assignment.rectangles().collect();

    let area_mismatches = rects.iter().filter(|r| !r.is_sized()).count();
    let out_of_bounds = rects
        .iter()
        .filter(|r| !r.fits(puzzle.width(), puzzle.height()))
        .count();

    let mut uncovered_cells = 0;
    let mut overcovered_cells = 0;
    for count in assignment.coverage(puzzle) {
        match count {
            0 => uncovered_cells += 1,
            1 => {}
            _ => overcovered_cells += 1,
        }
    }

    let mut overlapping_pairs = 0;
    for (i, a) in rects.iter().enumerate() {
        overlapping_pairs += rects[i + 1..].iter().filter(|b| a.overlaps(b)).count();
    }

    FitnessBreakdown {
        area_mismatches,
        out_of_bounds,
        unassigned: assignment.unassigned(),
        uncovered_cells,
        overcovered_cells,
        overlapping_pairs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::{Clue, Rectangle};
    use proptest::prelude::*;

    fn quadrants() -> Puzzle {
        Puzzle::new(
            4,
            4,
            vec![
                Clue::new(0, 0, 4),
                Clue::new(2, 0, 4),
                Clue::new(0, 2, 4),
                Clue::new(2, 2, 4),
            ],
        )
        .unwrap()
    }

    fn quadrant_solution() -> Assignment {
        Assignment::new(vec![
            Some(Rectangle::new(0, 0, 1, 1, 4)),
            Some(Rectangle::new(2, 0, 3, 1, 4)),
            Some(Rectangle::new(0, 2, 1, 3, 4)),
            Some(Rectangle::new(2, 2, 3, 3, 4)),
        ])
    }

    #[test]
    fn test_valid_tiling_scores_zero() {
        let b = breakdown(&quadrants(), &quadrant_solution());
        assert_eq!(b, FitnessBreakdown::default());
        assert!(b.is_solved());
    }

    #[test]
    fn test_overlap_and_gap() {
        // Clue 1 takes a row that clashes with clue 0 and leaves (2..4, 1) bare.
        let mut a = quadrant_solution();
        a.set(1, Rectangle::new(0, 0, 3, 0, 4));
        let b = breakdown(&quadrants(), &a);
        assert_eq!(b.area_mismatches, 0);
        assert_eq!(b.uncovered_cells, 2);
        assert_eq!(b.overcovered_cells, 2);
        assert_eq!(b.overlapping_pairs, 1);
        assert_eq!(fitness(&quadrants(), &a), 5);
    }

    #[test]
    fn test_penalty_per_cell_not_per_pair() {
        // Three rectangles stacked on the same cells.
        let puzzle = Puzzle::new(
            3,
            1,
            vec![Clue::new(0, 0, 2), Clue::new(1, 0, 2), Clue::new(2, 0, 2)],
        )
        .unwrap();
        let r = Rectangle::new(0, 0, 1, 0, 2);
        let a = Assignment::new(vec![Some(r), Some(r), Some(r)]);
        let b = breakdown(&puzzle, &a);
        assert_eq!(b.overcovered_cells, 2);
        assert_eq!(b.overlapping_pairs, 3);
        assert_eq!(b.uncovered_cells, 1);
    }

    #[test]
    fn test_area_mismatch_counted() {
        let puzzle = Puzzle::new(2, 1, vec![Clue::new(0, 0, 2)]).unwrap();
        let a = Assignment::new(vec![Some(Rectangle::new(0, 0, 0, 0, 2))]);
        let b = breakdown(&puzzle, &a);
        assert_eq!(b.area_mismatches, 1);
        assert_eq!(b.uncovered_cells, 1);
        assert_eq!(b.total(), 2);
    }

    #[test]
    fn test_rectangle_outside_grid_is_penalized() {
        // Covers the only cell and has the right area, but half of it is off-grid.
        let puzzle = Puzzle::new(1, 1, vec![Clue::new(0, 0, 2)]).unwrap();
        let a = Assignment::new(vec![Some(Rectangle::new(0, 0, 1, 0, 2))]);
        let b = breakdown(&puzzle, &a);
        assert_eq!(b.out_of_bounds, 1);
        assert_eq!(b.uncovered_cells, 0);
        assert_eq!(fitness(&puzzle, &a), 1);
    }

    #[test]
    fn test_unassigned_clue_is_never_solved() {
        // Every cell covered, but clue 1 has no rectangle of its own.
        let puzzle = Puzzle::new(2, 1, vec![Clue::new(0, 0, 2), Clue::new(1, 0, 5)]).unwrap();
        let a = Assignment::new(vec![Some(Rectangle::new(0, 0, 1, 0, 2)), None]);
        let b = breakdown(&puzzle, &a);
        assert_eq!(b.unassigned, 1);
        assert_eq!(b.total(), 1);
    }

    #[test]
    fn test_empty_assignment_all_uncovered() {
        let puzzle = Puzzle::new(3, 2, vec![]).unwrap();
        assert_eq!(fitness(&puzzle, &Assignment::new(vec![])), 6);
    }

    fn arb_rect(width: usize, height: usize) -> impl Strategy<Value = Rectangle> {
        (0..width, 0..width, 0..height, 0..height, 1usize..10).prop_map(|(a, b, c, d, v)| {
            Rectangle::new(a.min(b), c.min(d), a.max(b), c.max(d), v)
        })
    }

    proptest! {
        #[test]
        fn prop_fitness_is_order_independent(
            rects in proptest::collection::vec(arb_rect(5, 4), 0..8),
            rotation in 0usize..8,
        ) {
            let puzzle = Puzzle::new(5, 4, vec![]).unwrap();
            let forward: Assignment = rects.iter().copied().map(Some).collect();
            let mut shuffled = rects.clone();
            shuffled.reverse();
            if !shuffled.is_empty() {
                let k = rotation % shuffled.len();
                shuffled.rotate_left(k);
            }
            let permuted: Assignment = shuffled.into_iter().map(Some).collect();
            prop_assert_eq!(fitness(&puzzle, &forward), fitness(&puzzle, &permuted));
        }

        #[test]
        fn prop_zero_iff_exact_cover(
            rects in proptest::collection::vec(arb_rect(3, 3), 1..6),
        ) {
            let puzzle = Puzzle::new(3, 3, vec![]).unwrap();
            let a: Assignment = rects.iter().copied().map(Some).collect();
            let coverage = a.coverage(&puzzle);
            let exact = coverage.iter().all(|&c| c == 1) && rects.iter().all(|r| r.is_sized());
            prop_assert_eq!(fitness(&puzzle, &a) == 0, exact);
        }
    }
}
