//! pulsegrid-core: fixed-size discrete-time spiking-neuron population

pub mod config;
pub mod error;
pub mod neuron;
pub mod population;
pub mod senses;
pub mod tick;

// Re-exports
pub use config::{NeuronClass, PopulationConfig};
pub use error::{GridError, GridResult};
pub use neuron::Neuron;
pub use population::Population;
pub use senses::{NoSenses, SenseSource};
