#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The backtracking search engine and its safety checker.
//!
//! The engine is a classical depth-first search with scoped undo. Each call
//! frame picks the first unassigned cell in row-major order, tries the
//! digits 1 through 9 in ascending order, and for each digit that passes
//! the safety check it assigns, recurses, and unassigns again if the
//! recursion fails. A full grid is the success condition: every assignment
//! along the way passed the safety check, so a full grid is consistent by
//! induction and no final validation pass is needed.
//!
//! The safety check is the only pruning. There is no unit propagation, no
//! naked-single detection, and no look-ahead of any kind; correctness (and
//! the search's performance profile) comes entirely from backtracking.
//! Exhausting all digits at a cell is not an error, it is the ordinary
//! signal to the previous frame to try its next digit. Recursion depth is
//! bounded by the 81 cells.

use crate::sudoku::grid::{Cell, Coord, Grid};
use crate::sudoku::peers::PeerTable;
use smallvec::SmallVec;

/// Counters describing one run of the search.
///
/// All counters reset at the start of every [`Backtracker::solve`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Tentative digit placements committed during the search.
    pub assignments: usize,
    /// Placements undone after the recursion below them failed.
    pub backtracks: usize,
    /// Peer-set safety checks performed.
    pub safety_checks: usize,
}

/// A backtracking solver over a mutably borrowed [`Grid`].
///
/// The solver owns no grid of its own. Callers keep ownership of the
/// puzzle; `solve` borrows it for the duration of the search and leaves it
/// either solved or exactly as it was handed in.
#[derive(Debug, Clone, Default)]
pub struct Backtracker {
    peers: PeerTable,
    stats: SearchStats,
}

impl Backtracker {
    /// Creates a solver, precomputing the peer table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            peers: PeerTable::new(),
            stats: SearchStats::default(),
        }
    }

    /// Attempts to solve the puzzle in place.
    ///
    /// On success the grid is full and consistent and `true` is returned.
    /// On failure the grid has been restored to its input state and `false`
    /// is returned; an unsolvable puzzle is an expected outcome, not an
    /// error. Re-running a failed solve on the same grid is pointless, the
    /// search is deterministic.
    pub fn solve(&mut self, grid: &mut Grid) -> bool {
        self.stats = SearchStats::default();
        self.search(grid)
    }

    /// One frame of the depth-first search.
    fn search(&mut self, grid: &mut Grid) -> bool {
        let Some(cell) = grid.first_unassigned() else {
            return true;
        };

        for digit in 1..=9 {
            self.stats.safety_checks += 1;
            if !self.is_safe(grid, cell, digit) {
                continue;
            }

            grid.assign(cell, digit);
            self.stats.assignments += 1;

            if self.search(grid) {
                return true;
            }

            grid.clear(cell);
            self.stats.backtracks += 1;
        }

        false
    }

    /// Whether placing `digit` at `coord` would clash with any peer.
    ///
    /// Returns `false` iff one of the 20 peers currently holds `digit`.
    /// The cell's own value is never inspected, so the check is meaningful
    /// for assigned and unassigned cells alike. The grid is not mutated.
    #[must_use]
    pub fn is_safe(&self, grid: &Grid, coord: Coord, digit: u8) -> bool {
        self.peers
            .peers(coord)
            .iter()
            .all(|&peer| grid.get(peer) != Cell::Digit(digit))
    }

    /// The digits that currently pass the safety check at `coord`, in
    /// ascending order. Diagnostic helper; the search itself never
    /// materializes candidate lists.
    #[must_use]
    pub fn candidates(&self, grid: &Grid, coord: Coord) -> SmallVec<[u8; 9]> {
        (1..=9)
            .filter(|&digit| self.is_safe(grid, coord, digit))
            .collect()
    }

    /// Counters from the most recent [`Backtracker::solve`] call.
    #[must_use]
    pub const fn stats(&self) -> SearchStats {
        self.stats
    }
}
