//! Run output and serialization

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::types::WordList;

/// One point on the timeline: the label of the change that produced it and
/// the resulting (phonemic) word list
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRecord {
    pub label: String,
    pub words: WordList,
}

impl GenerationRecord {
    pub fn new(label: impl Into<String>, words: WordList) -> Self {
        Self {
            label: label.into(),
            words,
        }
    }
}

/// Why a run stopped
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopReason {
    /// Reached the requested number of generations
    Completed,
    /// No change in the catalogue had anything to act on
    Exhausted,
    /// Ran out of attempts before reaching the requested generations
    AttemptsExhausted,
}

/// Complete output of one evolution run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EvolutionOutput {
    /// Label of each accepted generation, oldest first
    pub labels: Vec<String>,
    /// Final words in display orthography
    pub words: WordList,
    /// Initial word list followed by one record per accepted generation
    pub history: Vec<GenerationRecord>,
    pub attempts: u64,
    pub stop_reason: StopReason,
    pub seed: u64,
}

impl EvolutionOutput {
    pub fn generations(&self) -> usize {
        self.labels.len()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn summary(&self) -> String {
        format!(
            "{} generations in {} attempts (seed {}, stopped: {:?})",
            self.generations(),
            self.attempts,
            self.seed,
            self.stop_reason,
        )
    }
}
