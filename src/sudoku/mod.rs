#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Solving standard 9x9 Sudoku puzzles by exhaustive backtracking search.

/// The `engine` module implements the recursive search and its safety checker.
pub mod engine;

/// The `grid` module defines cell values, coordinates, and the 9x9 grid.
pub mod grid;

/// The `parse` module reads puzzles from their textual representation.
pub mod parse;

/// The `peers` module computes the 20-cell dependency set of every coordinate.
pub mod peers;
