//! Geometric value types: clues and rectangles.

/// A numbered cell of the puzzle: the rectangle covering `(x, y)` must
/// have area `value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Clue {
    /// Column, `0 <= x < width`.
    pub x: usize,
    /// Row, `0 <= y < height`.
    pub y: usize,
    /// Required area, `>= 1`.
    pub value: usize,
}

impl Clue {
    pub fn new(x: usize, y: usize, value: usize) -> Self {
        Self { x, y, value }
    }
}

/// An axis-aligned rectangle with inclusive corners, tagged with the clue
/// value it has to satisfy.
///
/// Rectangles are plain values. An [`Assignment`](crate::solver::Assignment)
/// replaces them wholesale and never edits one in place.
///
/// # Examples
///
/// ```
/// use shikaku_anneal::puzzle::Rectangle;
///
/// let r = Rectangle::new(0, 0, 1, 2, 6);
/// assert_eq!(r.area(), 6);
/// assert!(r.contains(1, 2));
/// assert!(!r.overlaps(&Rectangle::new(2, 0, 3, 0, 2)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rectangle {
    pub x1: usize,
    pub y1: usize,
    pub x2: usize,
    pub y2: usize,
    /// Target area taken from the clue.
    pub value: usize,
}

impl Rectangle {
    /// Creates a rectangle from its top-left and bottom-right corners.
    ///
    /// Callers guarantee `x1 <= x2` and `y1 <= y2`.
    pub fn new(x1: usize, y1: usize, x2: usize, y2: usize, value: usize) -> Self {
        debug_assert!(x1 <= x2 && y1 <= y2, "malformed rectangle");
        Self { x1, y1, x2, y2, value }
    }

    pub fn width(&self) -> usize {
        self.x2 - self.x1 + 1
    }

    pub fn height(&self) -> usize {
        self.y2 - self.y1 + 1
    }

    /// Number of cells covered.
    pub fn area(&self) -> usize {
        self.width() * self.height()
    }

    /// Whether the covered area matches the clue value.
    pub fn is_sized(&self) -> bool {
        self.area() == self.value
    }

    /// True iff `x1 <= x <= x2` and `y1 <= y <= y2`.
    pub fn contains(&self, x: usize, y: usize) -> bool {
        self.x1 <= x && x <= self.x2 && self.y1 <= y && y <= self.y2
    }

    /// Separating-axis test on cell ranges.
    ///
    /// Rectangles that are merely adjacent do not overlap.
    pub fn overlaps(&self, other: &Rectangle) -> bool {
        !(self.x2 < other.x1 || self.x1 > other.x2 || self.y2 < other.y1 || self.y1 > other.y2)
    }

    /// Whether the rectangle lies inside `[0, width) x [0, height)`.
    pub fn fits(&self, width: usize, height: usize) -> bool {
        self.x2 < width && self.y2 < height
    }

    /// Iterates over covered cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (self.y1..=self.y2).flat_map(move |y| (self.x1..=self.x2).map(move |x| (x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area() {
        assert_eq!(Rectangle::new(0, 0, 0, 0, 1).area(), 1);
        assert_eq!(Rectangle::new(1, 2, 3, 2, 3).area(), 3);
        assert_eq!(Rectangle::new(0, 0, 3, 3, 16).area(), 16);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let r = Rectangle::new(1, 1, 2, 3, 6);
        assert!(r.contains(1, 1));
        assert!(r.contains(2, 3));
        assert!(!r.contains(0, 1));
        assert!(!r.contains(3, 3));
        assert!(!r.contains(1, 4));
    }

    #[test]
    fn test_overlap_shared_cells() {
        let a = Rectangle::new(0, 0, 1, 1, 4);
        let b = Rectangle::new(1, 1, 2, 2, 4);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(a.overlaps(&a));
    }

    #[test]
    fn test_adjacent_rectangles_do_not_overlap() {
        let left = Rectangle::new(0, 0, 1, 1, 4);
        let right = Rectangle::new(2, 0, 3, 1, 4);
        let below = Rectangle::new(0, 2, 1, 3, 4);
        assert!(!left.overlaps(&right));
        assert!(!left.overlaps(&below));
        assert!(!right.overlaps(&below));
    }

    #[test]
    fn test_cells_row_major() {
        let r = Rectangle::new(1, 0, 2, 1, 4);
        let cells: Vec<_> = r.cells().collect();
        assert_eq!(cells, vec![(1, 0), (2, 0), (1, 1), (2, 1)]);
        assert_eq!(cells.len(), r.area());
    }

    #[test]
    fn test_fits() {
        let r = Rectangle::new(2, 0, 3, 1, 4);
        assert!(r.fits(4, 2));
        assert!(!r.fits(3, 2));
        assert!(!r.fits(4, 1));
    }
}
