//! Candidate rectangle generation.
//!
//! For a clue `(x, y, v)` the candidates are every rectangle that covers
//! `(x, y)`, has area exactly `v` and fits in the grid. They are found by
//! walking the divisor pairs `w * h = v` and every offset of the clue cell
//! inside a `w x h` block.

use super::types::{Clue, Rectangle};

/// Enumerates all in-bounds placements for `clue` on a `width x height` grid.
///
/// Output order: ascending width, then ascending horizontal offset, then
/// ascending vertical offset. An empty vector means the clue cannot be
/// placed at all.
///
/// # Examples
///
/// ```
/// use shikaku_anneal::puzzle::{candidates, Clue};
///
/// // A 2 in the corner of a 2x2 grid: one horizontal, one vertical domino.
/// assert_eq!(candidates(2, 2, &Clue::new(0, 0, 2)).len(), 2);
/// // 3 cells never fit in a 2x2 grid.
/// assert!(candidates(2, 2, &Clue::new(0, 0, 3)).is_empty());
/// ```
pub fn candidates(width: usize, height: usize, clue: &Clue) -> Vec<Rectangle> {
    let v = clue.value;
    let mut out = Vec::new();
    if width.checked_mul(height).is_some_and(|cells| v > cells) {
        return out;
    }
    for w in 1..=v.min(width) {
        if v % w != 0 || v / w > height {
            continue;
        }
        let h = v / w;
        for dx in 0..w {
            let Some(x1) = clue.x.checked_sub(dx) else {
                break;
            };
            for dy in 0..h {
                let Some(y1) = clue.y.checked_sub(dy) else {
                    break;
                };
                let rect = Rectangle::new(x1, y1, x1 + w - 1, y1 + h - 1, v);
                if rect.fits(width, height) {
                    out.push(rect);
                }
            }
        }
    }
    out
}
