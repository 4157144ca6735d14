//! Full candidate solution: one rectangle slot per clue.

use crate::puzzle::{Puzzle, Rectangle};

/// One chosen rectangle per clue, indexed like [`Puzzle::clues`](crate::puzzle::Puzzle::clues).
///
/// A slot is `None` only when its clue has no in-bounds placement at all.
/// Cloning copies every rectangle by value, so a neighbour never shares
/// state with the assignment it was derived from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    rects: Vec<Option<Rectangle>>,
}

impl Assignment {
    pub fn new(rects: Vec<Option<Rectangle>>) -> Self {
        Self { rects }
    }

    /// Number of slots (equals the number of clues).
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Rectangle> {
        self.rects.get(index).and_then(Option::as_ref)
    }

    /// Replaces the rectangle of clue `index` wholesale.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn set(&mut self, index: usize, rect: Rectangle) {
        self.rects[index] = Some(rect);
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<&Rectangle>> + '_ {
        self.rects.iter().map(Option::as_ref)
    }

    /// Assigned rectangles only, in clue order.
    pub fn rectangles(&self) -> impl Iterator<Item = &Rectangle> + '_ {
        self.rects.iter().flatten()
    }

    pub fn as_slice(&self) -> &[Option<Rectangle>] {
        &self.rects
    }

    /// Number of clues left without a rectangle.
    pub fn unassigned(&self) -> usize {
        self.rects.iter().filter(|r| r.is_none()).count()
    }

    /// Per-cell count of covering rectangles, row-major over the puzzle grid.
    ///
    /// Only the in-grid part of a rectangle is counted; the part hanging
    /// outside is scored separately as an out-of-bounds defect.
    pub fn coverage(&self, puzzle: &Puzzle) -> Vec<u32> {
        let (width, height) = (puzzle.width(), puzzle.height());
        let mut counts = vec![0u32; puzzle.cell_count()];
        for rect in self.rectangles() {
            if rect.x1 >= width || rect.y1 >= height {
                continue;
            }
            for y in rect.y1..=rect.y2.min(height - 1) {
                for x in rect.x1..=rect.x2.min(width - 1) {
                    counts[y * width + x] += 1;
                }
            }
        }
        counts
    }
}

impl FromIterator<Option<Rectangle>> for Assignment {
    fn from_iter<T: IntoIterator<Item = Option<Rectangle>>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
