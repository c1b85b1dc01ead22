pub mod config;
pub mod error;
pub mod types;

pub use config::{EvolutionConfig, DEFAULT_ATTEMPTS_LIMIT};
pub use error::{EvolveError, Result};
pub use types::{Word, WordList};
