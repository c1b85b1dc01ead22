//! Soundshift - Stochastic Sound Change Simulation

pub mod changes;
pub mod core;
pub mod evolution;
pub mod orthography;
pub mod phonology;

pub use crate::core::{EvolutionConfig, EvolveError, Result};
pub use evolution::{evolve, EvolutionOutput, Evolver};
