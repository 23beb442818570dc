//! Error types for the simulation.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid grid dimension: {size}")]
    InvalidDimension { size: usize },

    #[error("alive probability {value} is outside [0, 1]")]
    InvalidProbability { value: f64 },

    #[error("{rows}x{cols} pattern at ({row}, {col}) exceeds a {size}x{size} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
        size: usize,
    },

    #[error("unknown pattern: {name}")]
    UnknownPattern { name: String },
}
