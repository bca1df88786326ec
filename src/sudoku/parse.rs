#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! A parser for the textual puzzle format.
//!
//! A puzzle is nine lines of nine whitespace-separated tokens. Each token
//! is a single character: a digit `1`-`9` for a given clue, or `-` for an
//! unassigned cell. Blank lines and lines starting with `#` are skipped,
//! so puzzle files can carry a short header comment.
//!
//! ```text
//! 5 3 - - 7 - - - -
//! 6 - - 1 9 5 - - -
//! ...seven more rows...
//! ```
//!
//! Malformed input is rejected up front with a descriptive error rather
//! than being patched over; the solver itself assumes a well-formed grid.

use crate::sudoku::grid::{Coord, Grid, SIZE};
use itertools::Itertools;
use std::fmt;
use std::io::{self, BufRead};
use std::path::Path;

/// Errors produced while reading a puzzle description.
#[derive(Debug)]
pub enum ParseGridError {
    /// The underlying reader failed.
    Io(io::Error),
    /// The input did not contain exactly nine puzzle rows.
    RowCount(usize),
    /// A row did not contain exactly nine tokens.
    ColumnCount {
        /// Zero-based index of the offending row.
        row: usize,
        /// Number of tokens actually found.
        found: usize,
    },
    /// A token was neither a digit `1`-`9` nor `-`.
    InvalidToken {
        /// Zero-based row of the offending token.
        row: usize,
        /// Zero-based column of the offending token.
        col: usize,
        /// The token as it appeared in the input.
        token: String,
    },
}

impl fmt::Display for ParseGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read puzzle: {err}"),
            Self::RowCount(found) => {
                write!(f, "expected {SIZE} puzzle rows, found {found}")
            }
            Self::ColumnCount { row, found } => {
                write!(f, "expected {SIZE} cells in row {row}, found {found}")
            }
            Self::InvalidToken { row, col, token } => {
                write!(
                    f,
                    "invalid cell '{token}' at row {row}, column {col} (expected 1-9 or '-')"
                )
            }
        }
    }
}

impl std::error::Error for ParseGridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ParseGridError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Parses a puzzle from any buffered reader into a [`Grid`].
///
/// # Errors
///
/// Returns a [`ParseGridError`] if the reader fails or the input does not
/// describe exactly nine rows of nine valid tokens.
pub fn parse_grid<R: BufRead>(reader: R) -> Result<Grid, ParseGridError> {
    let mut data_rows = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        data_rows.push(trimmed.to_string());
    }

    if data_rows.len() != SIZE {
        return Err(ParseGridError::RowCount(data_rows.len()));
    }

    let mut grid = Grid::empty();
    for (row, line) in data_rows.iter().enumerate() {
        let tokens = line.split_whitespace().collect_vec();
        if tokens.len() != SIZE {
            return Err(ParseGridError::ColumnCount {
                row,
                found: tokens.len(),
            });
        }

        for (col, token) in tokens.iter().enumerate() {
            let mut chars = token.chars();
            match (chars.next(), chars.next()) {
                (Some('-'), None) => {}
                (Some(c @ '1'..='9'), None) => {
                    grid.assign(Coord::new(row, col), c as u8 - b'0');
                }
                _ => {
                    return Err(ParseGridError::InvalidToken {
                        row,
                        col,
                        token: (*token).to_string(),
                    });
                }
            }
        }
    }

    Ok(grid)
}

/// Parses a puzzle file specified by its path.
///
/// This is a convenience function that opens the file, wraps it in a
/// `BufReader`, and calls [`parse_grid`].
///
/// # Errors
///
/// Returns a [`ParseGridError`] if the file cannot be opened or its
/// content is malformed.
pub fn parse_grid_file<P: AsRef<Path>>(path: P) -> Result<Grid, ParseGridError> {
    let file = std::fs::File::open(path)?;
    parse_grid(io::BufReader::new(file))
}
