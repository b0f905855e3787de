//! Population shape: the four class ranges are derived from three counts.
//!
//! Whether a neuron is a sensor, pacemaker, excitor, or inhibitor is
//! determined by its position in the array; no field marks the class.
//! Derived counts:
//! - basic = neuron_count - sensor_count - pacemaker_count
//! - inhibitor = basic / 4 (rounded down)
//! - excitor = basic - inhibitor
//!
//! The four ranges tile [0, neuron_count) exactly: excitors first, then
//! inhibitors, pacemakers, and sensors at the tail. Only basic neurons
//! (excitors and inhibitors) may ever be the target of a connection.

use core::ops::Range;

use crate::error::{GridError, GridResult};

pub const DEFAULT_NEURON_COUNT: u32 = 1 << 14;
pub const DEFAULT_SENSOR_COUNT: u32 = 1 << 12;
pub const DEFAULT_PACEMAKER_COUNT: u32 = 1 << 8;
pub const DEFAULT_TARGET_COUNT: u32 = 1 << 6;

/// Behavioral class of a neuron, determined by its index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NeuronClass {
    Excitor,
    Inhibitor,
    Pacemaker,
    Sensor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PopulationConfig {
    pub neuron_count: u32,
    pub sensor_count: u32,
    pub pacemaker_count: u32,
    /// Outgoing connections per neuron.
    pub target_count: u32,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            neuron_count: DEFAULT_NEURON_COUNT,
            sensor_count: DEFAULT_SENSOR_COUNT,
            pacemaker_count: DEFAULT_PACEMAKER_COUNT,
            target_count: DEFAULT_TARGET_COUNT,
        }
    }
}

impl PopulationConfig {
    /// Excitors + inhibitors; the only valid connection targets.
    pub fn basic_count(&self) -> u32 {
        self.neuron_count - self.sensor_count - self.pacemaker_count
    }

    pub fn inhibitor_count(&self) -> u32 {
        self.basic_count() / 4
    }

    pub fn excitor_count(&self) -> u32 {
        self.basic_count() - self.inhibitor_count()
    }

    pub fn excitor_range(&self) -> Range<u32> {
        0..self.excitor_count()
    }

    pub fn inhibitor_range(&self) -> Range<u32> {
        self.excitor_count()..self.basic_count()
    }

    pub fn pacemaker_range(&self) -> Range<u32> {
        self.basic_count()..self.basic_count() + self.pacemaker_count
    }

    pub fn sensor_range(&self) -> Range<u32> {
        self.basic_count() + self.pacemaker_count..self.neuron_count
    }

    /// Class of the neuron at `index`. Callers must pass a valid index.
    pub fn class_of(&self, index: u32) -> NeuronClass {
        if index < self.excitor_count() {
            NeuronClass::Excitor
        } else if index < self.basic_count() {
            NeuronClass::Inhibitor
        } else if index < self.basic_count() + self.pacemaker_count {
            NeuronClass::Pacemaker
        } else {
            NeuronClass::Sensor
        }
    }

    /// Check that the counts form a valid shape: at least one basic neuron
    /// remains after reserving the sensor and pacemaker tail, and the four
    /// ranges add up to the neuron count.
    pub fn validate(&self) -> GridResult<()> {
        let reserved = self
            .sensor_count
            .checked_add(self.pacemaker_count)
            .ok_or(GridError::InvalidConfiguration("count overflow"))?;
        if reserved >= self.neuron_count {
            return Err(GridError::InvalidConfiguration(
                "sensor and pacemaker counts leave no basic neurons",
            ));
        }
        let total = self.excitor_count() + self.inhibitor_count() + self.pacemaker_count
            + self.sensor_count;
        if total != self.neuron_count {
            return Err(GridError::InvalidConfiguration(
                "neuron ranges should add up to the neuron count",
            ));
        }
        Ok(())
    }
}
