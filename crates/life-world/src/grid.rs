//! 2D toroidal grid and seeding.

use crate::pattern::Pattern;
use life_core::{CellState, Error, Position, Result, NEIGHBOR_OFFSETS};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// A square N x N grid with toroidal boundaries.
///
/// Cells are stored row-major. A grid is created once per simulation run and
/// never resized afterwards; the engine rewrites its contents generation by
/// generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create an all-dead grid of the given dimension
    pub fn dead(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidDimension { size });
        }
        Ok(Self {
            size,
            cells: vec![CellState::Dead; size * size],
        })
    }

    /// Seed every cell independently: alive with the given probability.
    ///
    /// There is no spatial correlation between cells. The RNG is supplied by
    /// the caller so runs stay reproducible from a seed.
    pub fn random(size: usize, alive_probability: f64, rng: &mut ChaCha8Rng) -> Result<Self> {
        if !(0.0..=1.0).contains(&alive_probability) {
            return Err(Error::InvalidProbability {
                value: alive_probability,
            });
        }
        let mut grid = Self::dead(size)?;
        for cell in &mut grid.cells {
            if rng.gen_bool(alive_probability) {
                *cell = CellState::Alive;
            }
        }
        Ok(grid)
    }

    /// Grid dimension N
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get cell state at a position (with toroidal wrapping)
    pub fn get(&self, pos: Position) -> CellState {
        let index = self.pos_to_index(pos.wrap(self.size));
        self.cells[index]
    }

    /// Set cell state at a position (with toroidal wrapping)
    pub fn set(&mut self, pos: Position, state: CellState) {
        let index = self.pos_to_index(pos.wrap(self.size));
        self.cells[index] = state;
    }

    /// Count alive cells among the 8 toroidal neighbors of a position.
    ///
    /// On a 1x1 grid every offset wraps back onto the cell itself, so a cell
    /// is its own neighbor in all 8 directions.
    pub fn live_neighbors(&self, pos: Position) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(dr, dc)| self.get(pos.offset(dr, dc)).is_alive())
            .count() as u8
    }

    /// Total alive cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterator over all cells with positions, row-major
    pub fn iter(&self) -> impl Iterator<Item = (Position, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (self.index_to_pos(i), cell))
    }

    /// Stamp a pattern with its top-left corner at (row, col).
    ///
    /// All-or-nothing: bounds are checked before any cell is written, and
    /// stamping never wraps around the edges. Cells outside the stamped
    /// region are left untouched.
    pub fn stamp(&mut self, pattern: &Pattern, row: usize, col: usize) -> Result<()> {
        if row + pattern.rows() > self.size || col + pattern.cols() > self.size {
            return Err(Error::OutOfBounds {
                row,
                col,
                rows: pattern.rows(),
                cols: pattern.cols(),
                size: self.size,
            });
        }
        for r in 0..pattern.rows() {
            for c in 0..pattern.cols() {
                let pos = Position::new((row + r) as i32, (col + c) as i32);
                self.set(pos, pattern.get(r, c));
            }
        }
        Ok(())
    }

    /// Stamp the canonical glider with its top-left corner at (row, col)
    pub fn stamp_glider(&mut self, row: usize, col: usize) -> Result<()> {
        self.stamp(&crate::pattern::GLIDER, row, col)
    }

    fn pos_to_index(&self, pos: Position) -> usize {
        pos.row as usize * self.size + pos.col as usize
    }

    fn index_to_pos(&self, index: usize) -> Position {
        Position::new((index / self.size) as i32, (index % self.size) as i32)
    }
}
