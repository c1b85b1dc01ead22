//! Sound-change generators
//!
//! Architecture: Trait + Data hybrid
//! - SoundChange trait is the interface the evolution step consumes
//! - ChangeSpec is the data-driven implementation, built in or loaded from TOML

pub mod catalog;
mod loader;

pub use catalog::{default_catalog, default_specs, ChangeSpec};
pub use loader::{catalog_from_toml_str, load_catalog};

use rand::RngCore;

use crate::core::types::Word;
use crate::phonology::rule::Rule;

/// Rules a change wants to apply this generation, plus a readable label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proposal {
    pub rules: Vec<Rule>,
    pub label: String,
}

impl Proposal {
    pub fn new(rules: Vec<Rule>, label: impl Into<String>) -> Self {
        Self {
            rules,
            label: label.into(),
        }
    }
}

/// A candidate sound change
pub trait SoundChange {
    fn name(&self) -> &str;

    /// Inspect the current words and propose rules, or `None` if the change
    /// has nothing to act on
    fn propose(&self, words: &[Word], rng: &mut dyn RngCore) -> Option<Proposal>;
}

/// The generator pool for one run
pub type Catalog = Vec<Box<dyn SoundChange>>;
