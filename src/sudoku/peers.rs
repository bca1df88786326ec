#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The peer model: for every cell, the 20 other cells that constrain it.
//!
//! A cell's value depends on its row (8 other cells), its column (8 other
//! cells), and its 3x3 box (4 cells not already counted by the row and
//! column). The union of the three groups, with the cell itself removed,
//! always has exactly 20 members. Peer sets are a pure function of the
//! coordinate, so they are computed once up front and reused for the whole
//! life of the solver instead of being rederived on every safety check.

use crate::sudoku::grid::{BOX_SIZE, CELL_COUNT, Coord, SIZE};
use itertools::iproduct;
use rustc_hash::FxHashSet;

/// Number of peers of every cell.
pub const PEER_COUNT: usize = 20;

/// Precomputed peer sets for all 81 coordinates.
///
/// Each set is stored sorted in row-major order, so lookups are
/// deterministic and iteration order is stable across runs.
#[derive(Debug, Clone)]
pub struct PeerTable(Box<[[Coord; PEER_COUNT]; CELL_COUNT]>);

impl PeerTable {
    /// Builds the table for all 81 cells.
    ///
    /// # Panics
    ///
    /// If a computed peer set does not have exactly 20 members. This is an
    /// internal invariant; it cannot be triggered by any input.
    #[must_use]
    pub fn new() -> Self {
        let mut table = Box::new([[Coord::new(0, 0); PEER_COUNT]; CELL_COUNT]);

        for (row, col) in iproduct!(0..SIZE, 0..SIZE) {
            let coord = Coord::new(row, col);
            let mut set = FxHashSet::default();

            for c in 0..SIZE {
                set.insert(Coord::new(row, c));
            }
            for r in 0..SIZE {
                set.insert(Coord::new(r, col));
            }
            let (box_row, box_col) = coord.box_origin();
            for (r, c) in iproduct!(box_row..box_row + BOX_SIZE, box_col..box_col + BOX_SIZE) {
                set.insert(Coord::new(r, c));
            }
            set.remove(&coord);

            let mut peers: Vec<Coord> = set.into_iter().collect();
            peers.sort_unstable();
            assert_eq!(
                peers.len(),
                PEER_COUNT,
                "peer set of {coord} must have exactly {PEER_COUNT} members"
            );

            for (slot, peer) in table[coord.index()].iter_mut().zip(peers) {
                *slot = peer;
            }
        }

        Self(table)
    }

    /// The 20 peers of `coord`, excluding `coord` itself.
    #[must_use]
    pub fn peers(&self, coord: Coord) -> &[Coord; PEER_COUNT] {
        &self.0[coord.index()]
    }
}

impl Default for PeerTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_cell_has_twenty_peers_excluding_itself() {
        let table = PeerTable::new();
        for (row, col) in iproduct!(0..SIZE, 0..SIZE) {
            let coord = Coord::new(row, col);
            let peers = table.peers(coord);

            assert_eq!(peers.len(), PEER_COUNT);
            assert!(!peers.contains(&coord));

            let distinct: FxHashSet<Coord> = peers.iter().copied().collect();
            assert_eq!(distinct.len(), PEER_COUNT);
        }
    }

    #[test]
    fn test_peer_relation_is_symmetric() {
        let table = PeerTable::new();
        for (row, col) in iproduct!(0..SIZE, 0..SIZE) {
            let coord = Coord::new(row, col);
            for &peer in table.peers(coord) {
                assert!(
                    table.peers(peer).contains(&coord),
                    "{coord} sees {peer} but not the reverse"
                );
            }
        }
    }

    #[test]
    fn test_every_peer_shares_a_unit() {
        let table = PeerTable::new();
        for (row, col) in iproduct!(0..SIZE, 0..SIZE) {
            let coord = Coord::new(row, col);
            for &peer in table.peers(coord) {
                let shares_unit = peer.row == coord.row
                    || peer.col == coord.col
                    || peer.box_origin() == coord.box_origin();
                assert!(shares_unit, "{peer} does not constrain {coord}");
            }
        }
    }

    #[test]
    fn test_corner_peer_set_is_exact() {
        let table = PeerTable::new();
        let mut expected: Vec<Coord> = Vec::new();
        expected.extend((1..SIZE).map(|c| Coord::new(0, c)));
        expected.extend((1..SIZE).map(|r| Coord::new(r, 0)));
        expected.extend([
            Coord::new(1, 1),
            Coord::new(1, 2),
            Coord::new(2, 1),
            Coord::new(2, 2),
        ]);
        expected.sort_unstable();

        assert_eq!(table.peers(Coord::new(0, 0)).as_slice(), expected.as_slice());
    }

    #[test]
    fn test_center_cell_box_only_peers() {
        let table = PeerTable::new();
        let peers = table.peers(Coord::new(4, 4));

        for coord in [
            Coord::new(3, 3),
            Coord::new(3, 5),
            Coord::new(5, 3),
            Coord::new(5, 5),
        ] {
            assert!(peers.contains(&coord));
        }
        assert!(!peers.contains(&Coord::new(3, 6)));
    }
}
