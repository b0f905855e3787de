//! Population store: allocation, randomized construction, and the
//! connectivity fix-up that keeps every target inside the basic range.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::PopulationConfig;
use crate::error::{GridError, GridResult};
use crate::neuron::Neuron;

pub struct Population {
    pub(crate) config: PopulationConfig,
    pub(crate) neurons: Vec<Neuron>,
}

impl Population {
    /// Build a population from an explicit seed. Identical seeds produce
    /// byte-identical populations, so simulation trajectories reproduce.
    pub fn new(config: PopulationConfig, seed: u64) -> GridResult<Self> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::from_rng(config, &mut rng)
    }

    /// Build a population seeded from the system entropy source. This is the
    /// default entry point for interactive runs; tests use `new`.
    pub fn from_entropy(config: PopulationConfig) -> GridResult<Self> {
        let mut rng = ChaCha8Rng::from_entropy();
        Self::from_rng(config, &mut rng)
    }

    fn from_rng<R: Rng>(config: PopulationConfig, rng: &mut R) -> GridResult<Self> {
        config.validate()?;

        let count = config.neuron_count as usize;
        let mut neurons = Vec::new();
        neurons
            .try_reserve_exact(count)
            .map_err(|_| GridError::Alloc)?;

        // Every byte of every field starts uniformly random, targets included,
        // to seed unpredictable initial dynamics.
        for _ in 0..count {
            neurons.push(Neuron::random(rng, config.target_count));
        }

        // Reduce raw target indices into the basic range. Plain modulo, so
        // low indices are slightly favored whenever the basic count does not
        // divide 2^32; that skew is part of the fixed wiring behavior.
        let basic = config.basic_count();
        for neuron in &mut neurons {
            for target in neuron.targets.iter_mut() {
                *target %= basic;
            }
        }

        let population = Self { config, neurons };
        // Checked once here; the tick loop carries no validation.
        assert!(
            population.targets_in_basic_range(),
            "target index outside the basic neuron range"
        );
        Ok(population)
    }

    pub fn config(&self) -> &PopulationConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.neurons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neurons.is_empty()
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn neurons_mut(&mut self) -> &mut [Neuron] {
        &mut self.neurons
    }

    /// Per-neuron observable state for a rendering or logging collaborator:
    /// `(pulse_freshness, charge, pulse_timer)`. Flat index only; any 2D
    /// layout is the consumer's concern.
    pub fn observe(&self, index: usize) -> (u8, u8, u8) {
        let n = &self.neurons[index];
        (n.pulse_freshness, n.charge, n.pulse_timer)
    }

    fn targets_in_basic_range(&self) -> bool {
        let basic = self.config.basic_count();
        self.neurons
            .iter()
            .all(|n| n.targets.iter().all(|&t| t < basic))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> PopulationConfig {
        PopulationConfig {
            neuron_count: 16,
            sensor_count: 4,
            pacemaker_count: 2,
            target_count: 2,
        }
    }

    #[test]
    fn test_construction_shape() {
        let pop = Population::new(small_config(), 1).unwrap();
        assert_eq!(pop.len(), 16);
        for n in pop.neurons() {
            assert_eq!(n.targets.len(), 2);
        }
    }

    #[test]
    fn test_connectivity_invariant() {
        let cfg = PopulationConfig {
            neuron_count: 512,
            sensor_count: 128,
            pacemaker_count: 16,
            target_count: 8,
        };
        let pop = Population::new(cfg, 42).unwrap();
        let basic = cfg.basic_count();
        for n in pop.neurons() {
            for &t in n.targets.iter() {
                assert!(t < basic);
            }
        }
    }

    #[test]
    fn test_same_seed_same_population() {
        let a = Population::new(small_config(), 7).unwrap();
        let b = Population::new(small_config(), 7).unwrap();
        assert_eq!(a.neurons(), b.neurons());
    }

    #[test]
    fn test_different_seed_different_population() {
        let a = Population::new(small_config(), 7).unwrap();
        let b = Population::new(small_config(), 8).unwrap();
        assert_ne!(a.neurons(), b.neurons());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let cfg = PopulationConfig {
            neuron_count: 4,
            sensor_count: 4,
            pacemaker_count: 2,
            target_count: 2,
        };
        match Population::new(cfg, 0) {
            Err(GridError::InvalidConfiguration(_)) => {}
            _ => panic!("expected an invalid-configuration error"),
        }
    }

    #[test]
    fn test_observe_reads_the_triple() {
        let mut pop = Population::new(small_config(), 3).unwrap();
        let n = &mut pop.neurons_mut()[5];
        n.pulse_freshness = 10;
        n.charge = 20;
        n.pulse_timer = 30;
        assert_eq!(pop.observe(5), (10, 20, 30));
    }
}
