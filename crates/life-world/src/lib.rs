//! Toroidal Game of Life world.
//!
//! This crate implements the simulation core: the wrapped 2D grid, the seed
//! pattern library, and the engine that advances the grid one generation at
//! a time. Rendering and the animation loop that drives repeated steps live
//! outside this crate and only read the grid between steps.

pub mod grid;
pub mod pattern;
pub mod simulation;

pub use grid::Grid;
pub use pattern::{Pattern, GLIDER, GOSPER_GLIDER_GUN};
pub use simulation::{next_state, Simulation};
