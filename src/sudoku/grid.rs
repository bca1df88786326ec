#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The 9x9 grid: cell values, coordinates, accessors, and rendering.
//!
//! The grid is the only mutable state in the solver. It is owned by the
//! caller, borrowed mutably by the search engine for the duration of a
//! solve, and handed back either solved or untouched. Nothing here knows
//! anything about searching; this module is storage, traversal order, and
//! presentation.

use bit_vec::BitVec;
use itertools::iproduct;
use std::fmt;

/// Number of rows (and columns) in the grid.
pub const SIZE: usize = 9;

/// Side length of one of the nine 3x3 boxes.
pub const BOX_SIZE: usize = 3;

/// Total number of cells.
pub const CELL_COUNT: usize = SIZE * SIZE;

/// The horizontal rule printed between rendered rows.
const RULE: &str = "|-----------------------------------|";

/// A classic 30-clue puzzle, useful as a fixture for tests and benchmarks.
/// `0` marks an unassigned cell.
pub const EXAMPLE_PUZZLE: [[u8; SIZE]; SIZE] = [
    [5, 3, 0, 0, 7, 0, 0, 0, 0],
    [6, 0, 0, 1, 9, 5, 0, 0, 0],
    [0, 9, 8, 0, 0, 0, 0, 6, 0],
    [8, 0, 0, 0, 6, 0, 0, 0, 3],
    [4, 0, 0, 8, 0, 3, 0, 0, 1],
    [7, 0, 0, 0, 2, 0, 0, 0, 6],
    [0, 6, 0, 0, 0, 0, 2, 8, 0],
    [0, 0, 0, 4, 1, 9, 0, 0, 5],
    [0, 0, 0, 0, 8, 0, 0, 7, 9],
];

/// The state of a single grid position: either empty or holding a digit 1-9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Cell {
    /// No digit has been placed here yet.
    #[default]
    Unassigned,
    /// A placed digit in `1..=9`.
    Digit(u8),
}

impl Cell {
    /// Wraps a digit as a cell value.
    ///
    /// # Panics
    ///
    /// If `digit` is not in `1..=9`.
    #[must_use]
    pub fn from_digit(digit: u8) -> Self {
        assert!((1..=9).contains(&digit), "digit out of range: {digit}");
        Self::Digit(digit)
    }

    /// Whether this cell holds a digit.
    #[must_use]
    pub const fn is_assigned(self) -> bool {
        matches!(self, Self::Digit(_))
    }

    /// Whether this cell is still empty.
    #[must_use]
    pub const fn is_unassigned(self) -> bool {
        !self.is_assigned()
    }

    /// The digit held by this cell, if any.
    #[must_use]
    pub const fn digit(self) -> Option<u8> {
        match self {
            Self::Digit(digit) => Some(digit),
            Self::Unassigned => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(digit) => write!(f, "{digit}"),
            Self::Unassigned => write!(f, "-"),
        }
    }
}

/// A cell coordinate, `row` and `col` both in `[0, 9)`.
///
/// The derived ordering is row-major (row first, then column), which is the
/// canonical scan order of the whole solver: it decides which unassigned
/// cell is picked next and therefore which of several solutions is found
/// first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Row index, `0..9` from the top.
    pub row: usize,
    /// Column index, `0..9` from the left.
    pub col: usize,
}

impl Coord {
    /// Creates a coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        debug_assert!(row < SIZE && col < SIZE);
        Self { row, col }
    }

    /// The flat row-major index in `[0, 81)`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.row * SIZE + self.col
    }

    /// The inverse of [`Coord::index`].
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::new(index / SIZE, index % SIZE)
    }

    /// The top-left corner of the 3x3 box containing this coordinate.
    #[must_use]
    pub const fn box_origin(self) -> (usize, usize) {
        (
            self.row / BOX_SIZE * BOX_SIZE,
            self.col / BOX_SIZE * BOX_SIZE,
        )
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A 9x9 grid of [`Cell`] values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid([[Cell; SIZE]; SIZE]);

impl Grid {
    /// An all-unassigned grid.
    #[must_use]
    pub const fn empty() -> Self {
        Self([[Cell::Unassigned; SIZE]; SIZE])
    }

    /// Builds a grid from a 9x9 array of clues, with `0` marking an
    /// unassigned cell.
    ///
    /// # Panics
    ///
    /// If any entry is greater than 9.
    #[must_use]
    pub fn from_clues(clues: [[u8; SIZE]; SIZE]) -> Self {
        let mut grid = Self::empty();
        for (row, clue_row) in clues.iter().enumerate() {
            for (col, &clue) in clue_row.iter().enumerate() {
                if clue != 0 {
                    grid.assign(Coord::new(row, col), clue);
                }
            }
        }
        grid
    }

    /// The value at `coord`.
    #[must_use]
    pub const fn get(&self, coord: Coord) -> Cell {
        self.0[coord.row][coord.col]
    }

    /// Places `digit` at `coord`, overwriting whatever was there.
    ///
    /// # Panics
    ///
    /// If `digit` is not in `1..=9`.
    pub fn assign(&mut self, coord: Coord, digit: u8) {
        self.0[coord.row][coord.col] = Cell::from_digit(digit);
    }

    /// Returns `coord` to the unassigned state.
    pub const fn clear(&mut self, coord: Coord) {
        self.0[coord.row][coord.col] = Cell::Unassigned;
    }

    /// Whether every cell holds a digit.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.0.iter().flatten().all(|cell| cell.is_assigned())
    }

    /// The first unassigned cell in row-major scan order, if any.
    #[must_use]
    pub fn first_unassigned(&self) -> Option<Coord> {
        iproduct!(0..SIZE, 0..SIZE)
            .map(|(row, col)| Coord::new(row, col))
            .find(|&coord| self.get(coord).is_unassigned())
    }

    /// Iterates over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        iproduct!(0..SIZE, 0..SIZE).map(|(row, col)| {
            let coord = Coord::new(row, col);
            (coord, self.get(coord))
        })
    }

    /// Whether the grid is a complete, rule-abiding solution: full, and
    /// every row, column, and 3x3 box holds each digit 1-9 exactly once.
    ///
    /// The search engine never calls this; a full grid built from safe
    /// assignments is consistent by construction. It exists so callers can
    /// independently check a claimed solution.
    #[must_use]
    pub fn is_valid_solution(&self) -> bool {
        let rows = (0..SIZE)
            .all(|row| self.unit_is_complete((0..SIZE).map(move |col| Coord::new(row, col))));
        let cols = (0..SIZE)
            .all(|col| self.unit_is_complete((0..SIZE).map(move |row| Coord::new(row, col))));
        let boxes = iproduct!(0..BOX_SIZE, 0..BOX_SIZE).all(|(band, stack)| {
            self.unit_is_complete(
                iproduct!(0..BOX_SIZE, 0..BOX_SIZE).map(move |(r, c)| {
                    Coord::new(band * BOX_SIZE + r, stack * BOX_SIZE + c)
                }),
            )
        });
        rows && cols && boxes
    }

    /// Whether the nine cells of one unit hold each digit exactly once.
    fn unit_is_complete(&self, unit: impl Iterator<Item = Coord>) -> bool {
        let mut seen = BitVec::from_elem(SIZE + 1, false);
        for coord in unit {
            match self.get(coord) {
                Cell::Digit(digit) => {
                    let digit = usize::from(digit);
                    if seen[digit] {
                        return false;
                    }
                    seen.set(digit, true);
                }
                Cell::Unassigned => return false,
            }
        }
        true
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<[[u8; SIZE]; SIZE]> for Grid {
    fn from(clues: [[u8; SIZE]; SIZE]) -> Self {
        Self::from_clues(clues)
    }
}

impl fmt::Display for Grid {
    /// Renders the bordered text form: a rule line, then each row as
    /// `| v | v | ... | v |` followed by another rule line, with `-` for
    /// unassigned cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        for row in &self.0 {
            write!(f, "|")?;
            for cell in row {
                write!(f, " {cell} |")?;
            }
            writeln!(f)?;
            writeln!(f, "{RULE}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_predicates() {
        assert!(Cell::Unassigned.is_unassigned());
        assert!(Cell::from_digit(5).is_assigned());
        assert_eq!(Cell::from_digit(5).digit(), Some(5));
        assert_eq!(Cell::Unassigned.digit(), None);
    }

    #[test]
    #[should_panic(expected = "digit out of range")]
    fn test_cell_rejects_out_of_range_digit() {
        let _ = Cell::from_digit(10);
    }

    #[test]
    fn test_coord_round_trips_through_flat_index() {
        for index in 0..CELL_COUNT {
            assert_eq!(Coord::from_index(index).index(), index);
        }
        assert_eq!(Coord::new(4, 7).index(), 43);
    }

    #[test]
    fn test_coord_order_is_row_major() {
        assert!(Coord::new(0, 8) < Coord::new(1, 0));
        assert!(Coord::new(3, 2) < Coord::new(3, 5));
    }

    #[test]
    fn test_box_origin() {
        assert_eq!(Coord::new(0, 0).box_origin(), (0, 0));
        assert_eq!(Coord::new(4, 7).box_origin(), (3, 6));
        assert_eq!(Coord::new(8, 2).box_origin(), (6, 0));
    }

    #[test]
    fn test_first_unassigned_scans_row_major() {
        let mut grid = Grid::empty();
        assert_eq!(grid.first_unassigned(), Some(Coord::new(0, 0)));

        for col in 0..SIZE {
            grid.assign(Coord::new(0, col), u8::try_from(col + 1).unwrap());
        }
        assert_eq!(grid.first_unassigned(), Some(Coord::new(1, 0)));

        grid.clear(Coord::new(0, 4));
        assert_eq!(grid.first_unassigned(), Some(Coord::new(0, 4)));
    }

    #[test]
    fn test_assign_and_clear() {
        let mut grid = Grid::empty();
        let coord = Coord::new(2, 3);
        grid.assign(coord, 7);
        assert_eq!(grid.get(coord), Cell::Digit(7));
        grid.clear(coord);
        assert_eq!(grid.get(coord), Cell::Unassigned);
    }

    #[test]
    fn test_from_clues_places_givens_only() {
        let grid = Grid::from_clues(EXAMPLE_PUZZLE);
        assert_eq!(grid.get(Coord::new(0, 0)), Cell::Digit(5));
        assert_eq!(grid.get(Coord::new(0, 2)), Cell::Unassigned);
        let givens = grid.cells().filter(|&(_, cell)| cell.is_assigned()).count();
        assert_eq!(givens, 30);
    }

    #[test]
    fn test_render_matches_reference_layout() {
        let rendered = Grid::empty().to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 2 * SIZE + 1);
        assert_eq!(lines[0], RULE);
        assert_eq!(lines[1], "| - | - | - | - | - | - | - | - | - |");
        assert!(lines.iter().step_by(2).all(|line| *line == RULE));
    }

    #[test]
    fn test_render_shows_digits() {
        let mut grid = Grid::empty();
        grid.assign(Coord::new(0, 0), 9);
        let first_row = grid.to_string().lines().nth(1).unwrap().to_string();
        assert_eq!(first_row, "| 9 | - | - | - | - | - | - | - | - |");
    }

    #[test]
    fn test_is_valid_solution_accepts_a_complete_grid() {
        // Shifted-rows construction: row r holds 1..9 rotated so that rows,
        // columns, and boxes all come out distinct.
        let mut grid = Grid::empty();
        for (row, col) in iproduct!(0..SIZE, 0..SIZE) {
            let digit = (row * BOX_SIZE + row / BOX_SIZE + col) % SIZE + 1;
            grid.assign(Coord::new(row, col), u8::try_from(digit).unwrap());
        }
        assert!(grid.is_full());
        assert!(grid.is_valid_solution());
    }

    #[test]
    fn test_is_valid_solution_rejects_duplicates_and_holes() {
        let mut grid = Grid::empty();
        for (row, col) in iproduct!(0..SIZE, 0..SIZE) {
            let digit = (row * BOX_SIZE + row / BOX_SIZE + col) % SIZE + 1;
            grid.assign(Coord::new(row, col), u8::try_from(digit).unwrap());
        }

        let mut holed = grid.clone();
        holed.clear(Coord::new(8, 8));
        assert!(!holed.is_valid_solution());

        let mut duplicated = grid.clone();
        let stolen = duplicated.get(Coord::new(0, 1));
        duplicated.assign(Coord::new(0, 0), stolen.digit().unwrap());
        assert!(!duplicated.is_valid_solution());
    }

    #[test]
    fn test_incomplete_grid_is_not_full() {
        let grid = Grid::from_clues(EXAMPLE_PUZZLE);
        assert!(!grid.is_full());
        assert!(!grid.is_valid_solution());
    }
}
