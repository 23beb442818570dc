//! Simulation engine: advances the grid one generation at a time.

use crate::grid::Grid;
use crate::pattern::Pattern;
use life_core::{CellState, Error, Position, Result, Seeding, SimulationConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, instrument};

/// The B3/S23 rule, total over every state and neighbor count.
///
/// An alive cell survives with 2 or 3 alive neighbors and dies of under- or
/// overpopulation otherwise; a dead cell comes alive with exactly 3.
pub fn next_state(state: CellState, live_neighbors: u8) -> CellState {
    match (state, live_neighbors) {
        (CellState::Alive, 2 | 3) => CellState::Alive,
        (CellState::Dead, 3) => CellState::Alive,
        _ => CellState::Dead,
    }
}

/// Drives a single grid forward, one generation per `step`.
///
/// The engine owns the grid for the duration of the run; callers read it
/// between steps through [`Simulation::grid`]. Each step computes the next
/// generation entirely from the current one into a scratch buffer and swaps
/// it in, so a caller never observes a partially updated grid.
pub struct Simulation {
    grid: Grid,
    scratch: Grid,
    generation: u64,
}

impl Simulation {
    /// Build a simulation from configuration.
    ///
    /// Validates the configuration, seeds a ChaCha8 RNG from `config.seed`,
    /// and populates the grid per the configured seeding strategy.
    pub fn new(config: &SimulationConfig) -> Result<Self> {
        config.grid.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let grid = match &config.grid.seeding {
            Seeding::Random => {
                Grid::random(config.grid.size, config.grid.alive_probability, &mut rng)?
            }
            Seeding::Pattern { name, row, col } => {
                let pattern = Pattern::by_name(name).ok_or_else(|| Error::UnknownPattern {
                    name: name.clone(),
                })?;
                let mut grid = Grid::dead(config.grid.size)?;
                grid.stamp(pattern, *row, *col)?;
                grid
            }
        };

        debug!(
            size = config.grid.size,
            population = grid.population(),
            "seeded grid"
        );
        Ok(Self::from_grid(grid))
    }

    /// Wrap an existing grid; the generation counter starts at zero.
    pub fn from_grid(grid: Grid) -> Self {
        let scratch = grid.clone();
        Self {
            grid,
            scratch,
            generation: 0,
        }
    }

    /// Advance exactly one generation.
    ///
    /// Every next state is computed from the current generation's snapshot
    /// only, so no cell's updated state can influence another cell's
    /// computation within the same step.
    pub fn step(&mut self) {
        let size = self.grid.size() as i32;
        for row in 0..size {
            for col in 0..size {
                let pos = Position::new(row, col);
                let next = next_state(self.grid.get(pos), self.grid.live_neighbors(pos));
                self.scratch.set(pos, next);
            }
        }
        std::mem::swap(&mut self.grid, &mut self.scratch);
        self.generation += 1;
    }

    /// Advance the given number of generations.
    #[instrument(skip(self), fields(size = self.grid.size()))]
    pub fn run(&mut self, generations: u64) {
        for _ in 0..generations {
            self.step();
            if self.generation % 100 == 0 {
                info!(
                    generation = self.generation,
                    population = self.grid.population(),
                    "advanced"
                );
            }
        }
    }

    /// The current generation's grid, for rendering between steps
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of generations advanced so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Give the grid back to the caller
    pub fn into_grid(self) -> Grid {
        self.grid
    }
}
