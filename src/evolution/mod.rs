//! Generation-by-generation evolution of a word list
//!
//! Each generation picks one applicable sound change at random, applies its
//! rules to every word, and keeps the result only if some word changed.

pub mod diff;
pub mod driver;
pub mod output;
pub mod step;

pub use diff::{collapse_plateaus, count_differences};
pub use driver::{evolve, Evolver};
pub use output::{EvolutionOutput, GenerationRecord, StopReason};
pub use step::{select, step, Selection, StepOutcome};
