// Backend abstraction for the TUI so we can swap different engines.

use anyhow::Result;
use pulsegrid_core::{Population, PopulationConfig};

/// Common interface for any engine that can drive the grid view.
pub trait GridBackend {
    /// Advance the simulation by one tick.
    fn step(&mut self);
    /// Number of neurons (cells in the grid).
    fn neurons(&self) -> usize;
    /// Observable byte triple for one neuron: (pulse_freshness, charge, pulse_timer).
    fn cell(&self, index: usize) -> (u8, u8, u8);
}

/// Implementation backed by a pulsegrid-core Population.
pub struct CoreBackend {
    population: Population,
}

impl CoreBackend {
    /// Full-size population, seeded from system entropy.
    pub fn new() -> Result<Self> {
        let population = Population::from_entropy(PopulationConfig::default())?;
        Ok(Self { population })
    }

    /// Explicit seed, for reproducible runs.
    pub fn with_seed(seed: u64) -> Result<Self> {
        let population = Population::new(PopulationConfig::default(), seed)?;
        Ok(Self { population })
    }
}

impl GridBackend for CoreBackend {
    fn step(&mut self) {
        self.population.tick();
    }

    fn neurons(&self) -> usize {
        self.population.len()
    }

    fn cell(&self, index: usize) -> (u8, u8, u8) {
        self.population.observe(index)
    }
}
