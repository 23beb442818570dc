//! Configuration types for the simulation.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Smallest grid dimension the configuration accepts.
///
/// The glider needs a 3x3 placement region plus room to move before it runs
/// into its own wake across the wrapped edges.
pub const MIN_CONFIGURED_SIZE: usize = 9;

/// How the initial grid is populated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Seeding {
    /// Every cell drawn independently with the configured alive probability
    Random,
    /// All-dead grid with a named pattern stamped at (row, col)
    Pattern {
        name: String,
        row: usize,
        col: usize,
    },
}

/// Grid configuration parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Grid dimension N (the grid is N x N)
    pub size: usize,
    /// Probability that a randomly seeded cell starts alive (0.0 to 1.0)
    pub alive_probability: f64,
    /// Seeding strategy
    pub seeding: Seeding,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: 100,
            alive_probability: 0.2,
            seeding: Seeding::Random,
        }
    }
}

impl GridConfig {
    /// Check the configuration before any grid is built.
    ///
    /// Configuration errors are fatal: the caller must not proceed with a
    /// partially valid configuration.
    pub fn validate(&self) -> Result<()> {
        if self.size < MIN_CONFIGURED_SIZE {
            return Err(Error::InvalidDimension { size: self.size });
        }
        if !(0.0..=1.0).contains(&self.alive_probability) {
            return Err(Error::InvalidProbability {
                value: self.alive_probability,
            });
        }
        Ok(())
    }
}

/// Simulation run configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Random seed for reproducibility
    pub seed: u64,
    /// Number of generations to advance
    pub generations: u64,
    /// Grid configuration
    pub grid: GridConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            generations: 10,
            grid: GridConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configs() {
        let grid_config = GridConfig::default();
        assert_eq!(grid_config.size, 100);
        assert_eq!(grid_config.alive_probability, 0.2);
        assert_eq!(grid_config.seeding, Seeding::Random);
        assert!(grid_config.validate().is_ok());

        let sim_config = SimulationConfig::default();
        assert_eq!(sim_config.seed, 0);
        assert_eq!(sim_config.generations, 10);
    }

    #[test]
    fn test_undersized_grid_rejected() {
        let config = GridConfig {
            size: 8,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(Error::InvalidDimension { size: 8 })
        );
    }

    #[test]
    fn test_probability_out_of_range_rejected() {
        for value in [-0.1, 1.5] {
            let config = GridConfig {
                alive_probability: value,
                ..Default::default()
            };
            assert_eq!(
                config.validate(),
                Err(Error::InvalidProbability { value })
            );
        }
    }

    #[test]
    fn test_config_serialization() {
        let config = SimulationConfig {
            seed: 42,
            generations: 200,
            grid: GridConfig {
                size: 64,
                alive_probability: 0.35,
                seeding: Seeding::Pattern {
                    name: "glider".to_string(),
                    row: 1,
                    col: 1,
                },
            },
        };

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SimulationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
