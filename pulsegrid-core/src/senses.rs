//! Sensory-input seam: an external signal source may raise a sensor
//! neuron's `input_strength` each tick.

use crate::neuron::Neuron;

/// Called once per sensor neuron per tick, in index order, after the per-tick
/// drive decay and before the firing check. Writes to `input_strength` are
/// visible to the same tick's firing check.
pub trait SenseSource {
    fn replenish(&mut self, sensor_index: u32, neuron: &mut Neuron);
}

/// Default source: leaves sensors undriven.
pub struct NoSenses;

impl SenseSource for NoSenses {
    fn replenish(&mut self, _sensor_index: u32, _neuron: &mut Neuron) {}
}
