//! Core type definitions for the simulation.

use serde::{Deserialize, Serialize};

/// State of a single cell.
///
/// Every cell is exactly one of the two values at all times; no intermediate
/// state persists between generations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellState {
    Alive,
    #[default]
    Dead,
}

impl CellState {
    pub fn is_alive(&self) -> bool {
        matches!(self, CellState::Alive)
    }
}

/// 2D position on the grid
///
/// Components are signed so neighbor offsets can go negative before wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn offset(&self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// Apply toroidal wrapping for an N x N grid.
    ///
    /// Each component is mapped into `[0, size)`: index -1 wraps to N - 1 and
    /// index N wraps to 0, so opposite edges of the grid are identified.
    pub fn wrap(&self, size: usize) -> Self {
        let n = size as i32;
        Self {
            row: ((self.row % n) + n) % n,
            col: ((self.col % n) + n) % n,
        }
    }
}

/// Moore-neighborhood deltas: every cell has exactly 8 neighbors.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_wrap() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.wrap(10), Position::new(5, 5));

        let pos = Position::new(-1, -1);
        assert_eq!(pos.wrap(10), Position::new(9, 9));

        let pos = Position::new(10, 10);
        assert_eq!(pos.wrap(10), Position::new(0, 0));

        let pos = Position::new(-11, 21);
        assert_eq!(pos.wrap(10), Position::new(9, 1));
    }

    #[test]
    fn test_position_offset() {
        let pos = Position::new(0, 0);
        assert_eq!(pos.offset(-1, 1), Position::new(-1, 1));
    }

    #[test]
    fn test_neighbor_offsets_are_distinct() {
        for (i, a) in NEIGHBOR_OFFSETS.iter().enumerate() {
            assert_ne!(*a, (0, 0));
            for b in &NEIGHBOR_OFFSETS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_cell_state_default_is_dead() {
        assert!(!CellState::default().is_alive());
        assert!(CellState::Alive.is_alive());
    }
}
