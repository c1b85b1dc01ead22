//! Evolution run configuration
//!
//! The numbers here bound how long a run may search for productive sound
//! changes before giving up.

use crate::core::error::{EvolveError, Result};

/// Default cap on step attempts per run.
///
/// A step that selects a change whose environments match nothing is a
/// no-op and does not count as a generation, so without this cap a word list
/// that only admits no-op changes would loop forever.
pub const DEFAULT_ATTEMPTS_LIMIT: u32 = 100;

/// Configuration for one evolution run
#[derive(Debug, Clone)]
pub struct EvolutionConfig {
    /// Number of word-list-changing generations to aim for
    ///
    /// The run stops early if the catalogue is exhausted or the attempts
    /// limit is hit, so the returned label count may be lower.
    pub generations: usize,

    /// Maximum number of step attempts (productive or not)
    ///
    /// The check happens after each attempt, so a run makes at most
    /// `attempts_limit + 1` attempts.
    pub attempts_limit: u32,

    /// Seed for the trial-order RNG
    ///
    /// `None` draws a fresh seed; the seed actually used is reported in the
    /// run output so the run can be replayed.
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            generations: 10,
            attempts_limit: DEFAULT_ATTEMPTS_LIMIT,
            seed: None,
        }
    }
}

impl EvolutionConfig {
    /// Create a config targeting the given number of generations
    pub fn new(generations: usize) -> Self {
        Self {
            generations,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_attempts_limit(mut self, attempts_limit: u32) -> Self {
        self.attempts_limit = attempts_limit;
        self
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.generations == 0 {
            return Err(EvolveError::InvalidConfig(
                "generations must be at least 1".into(),
            ));
        }

        if self.attempts_limit == 0 {
            return Err(EvolveError::InvalidConfig(
                "attempts_limit must be at least 1".into(),
            ));
        }

        Ok(())
    }
}
