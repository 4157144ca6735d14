//! Read-only text rendering of an assignment.

use super::grid::Puzzle;
use crate::solver::Assignment;

const UNCOVERED: char = '.';
const OVERLAP: char = '#';

/// Renders one character per cell, one line per row.
///
/// Clue cells show their value (base 36 above 9, `+` above 35).
/// Other cells show the letter of the rectangle covering them, cycling
/// through `a..=z` by clue index, `.` when no rectangle covers them and
/// `#` when several do.
///
/// # Examples
///
/// ```
/// use shikaku_anneal::puzzle::{render, Clue, Puzzle, Rectangle};
/// use shikaku_anneal::solver::Assignment;
///
/// let puzzle = Puzzle::new(3, 1, vec![Clue::new(0, 0, 2)]).unwrap();
/// let assignment = Assignment::new(vec![Some(Rectangle::new(0, 0, 1, 0, 2))]);
/// assert_eq!(render(&puzzle, &assignment), "2a.\n");
/// ```
pub fn render(puzzle: &Puzzle, assignment: &Assignment) -> String {
    let (width, height) = (puzzle.width(), puzzle.height());
    let mut cells = vec![UNCOVERED; puzzle.cell_count()];
    let mut counts = vec![0usize; puzzle.cell_count()];

    for (i, rect) in assignment.iter().enumerate() {
        let Some(rect) = rect else { continue };
        let letter = char::from(b'a' + (i % 26) as u8);
        if rect.x1 >= width || rect.y1 >= height {
            continue;
        }
        for y in rect.y1..=rect.y2.min(height - 1) {
            for x in rect.x1..=rect.x2.min(width - 1) {
                let cell = y * width + x;
                counts[cell] += 1;
                cells[cell] = if counts[cell] > 1 { OVERLAP } else { letter };
            }
        }
    }

    for clue in puzzle.clues() {
        cells[clue.y * width + clue.x] = clue_glyph(clue.value);
    }

    let mut out = String::with_capacity((width + 1) * height);
    for row in cells.chunks(width) {
        out.extend(row);
        out.push('\n');
    }
    out
}

fn clue_glyph(value: usize) -> char {
    u32::try_from(value)
        .ok()
        .and_then(|v| char::from_digit(v, 36))
        .unwrap_or('+')
}
