//! Plain-text puzzle format.
//!
//! ```text
//! width height
//! row col value
//! row col value
//! ...
//! ```
//!
//! Clue lines list the row first. The loader transposes them so that
//! [`Clue::x`] is the column and [`Clue::y`] the row, matching the
//! candidate generator. Blank lines are ignored.

use std::fs;
use std::path::Path;

use super::grid::Puzzle;
use super::types::Clue;
use crate::error::{Error, Result};

/// Reads and parses a puzzle file.
pub fn load_puzzle(path: impl AsRef<Path>) -> Result<Puzzle> {
    let text = fs::read_to_string(path)?;
    parse_puzzle(&text)
}

/// Parses puzzle text and validates the result.
///
/// # Examples
///
/// ```
/// use shikaku_anneal::puzzle::parse_puzzle;
///
/// let puzzle = parse_puzzle("3 2\n0 2 2\n1 0 4\n").unwrap();
/// assert_eq!(puzzle.width(), 3);
/// // "0 2 2" is row 0, column 2.
/// assert_eq!((puzzle.clues()[0].x, puzzle.clues()[0].y), (2, 0));
/// ```
pub fn parse_puzzle(text: &str) -> Result<Puzzle> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let (line, header) = lines.next().ok_or(Error::Parse {
        line: 1,
        message: "missing 'width height' header".into(),
    })?;
    let [width, height] = parse_fields::<2>(line, header)?;

    let mut clues = Vec::new();
    for (line, content) in lines {
        let [row, col, value] = parse_fields::<3>(line, content)?;
        clues.push(Clue::new(col, row, value));
    }

    Puzzle::new(width, height, clues)
}

fn parse_fields<const N: usize>(line: usize, content: &str) -> Result<[usize; N]> {
    let mut out = [0usize; N];
    let mut fields = content.split_whitespace();
    for slot in out.iter_mut() {
        let field = fields.next().ok_or_else(|| Error::Parse {
            line,
            message: format!("expected {N} integers, got '{content}'"),
        })?;
        *slot = field.parse().map_err(|e| Error::Parse {
            line,
            message: format!("'{field}' is not a non-negative integer: {e}"),
        })?;
    }
    if fields.next().is_some() {
        return Err(Error::Parse {
            line,
            message: format!("expected {N} integers, got '{content}'"),
        });
    }
    Ok(out)
}
