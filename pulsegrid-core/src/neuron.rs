//! One neuron: five 8-bit saturating counters plus a fixed target list.
//!
//! All counters are unsigned 8-bit and never wrap; every update goes through
//! `saturating_add`/`saturating_sub`.

use rand::Rng;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Neuron {
    /// Accumulated input; when an excitatory hit pushes this to 255 the
    /// neuron gains a pulse and the charge resets to zero.
    pub charge: u8,

    /// Pending owed firings; while >0 the neuron fires until it reaches 0.
    pub pulse_counter: u8,

    /// Counts down each tick; the neuron may fire once it is at or below
    /// `input_strength`, then resets to 255.
    pub pulse_timer: u8,

    /// Firing-readiness threshold. For sensors this is also the remaining
    /// sensory drive and decays by one every tick.
    pub input_strength: u8,

    /// Set to 255 on firing, decays by 8 each tick. Observational only.
    pub pulse_freshness: u8,

    /// Indices of the neurons this one projects to when it fires.
    pub targets: Box<[u32]>,
}

impl Neuron {
    /// Fill every field with independent uniformly-random bytes. Target
    /// indices are raw at this point; the population applies the
    /// basic-range fix-up after all neurons exist.
    pub(crate) fn random<R: Rng>(rng: &mut R, target_count: u32) -> Self {
        Self {
            charge: rng.gen(),
            pulse_counter: rng.gen(),
            pulse_timer: rng.gen(),
            input_strength: rng.gen(),
            pulse_freshness: rng.gen(),
            targets: (0..target_count).map(|_| rng.gen::<u32>()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_saturating_add_laws() {
        let samples: &[u8] = &[0, 1, 2, 7, 100, 127, 128, 200, 253, 254, 255];
        for &a in samples {
            for &b in samples {
                let sum = a.saturating_add(b);
                assert_eq!(sum as u16, (a as u16 + b as u16).min(255));
            }
        }
    }

    #[test]
    fn test_saturating_sub_laws() {
        let samples: &[u8] = &[0, 1, 2, 7, 100, 127, 128, 200, 253, 254, 255];
        for &a in samples {
            for &b in samples {
                let diff = a.saturating_sub(b);
                let expected = if a < b { 0 } else { a - b };
                assert_eq!(diff, expected);
            }
        }
    }

    #[test]
    fn test_saturating_boundaries() {
        assert_eq!(255u8.saturating_add(1), 255);
        assert_eq!(254u8.saturating_add(2), 255);
        assert_eq!(0u8.saturating_sub(1), 0);
        assert_eq!(1u8.saturating_sub(8), 0);
    }
}
