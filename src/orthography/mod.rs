//! Mapping between a display spelling and the phonemic working alphabet
//!
//! Rules are plain substring pairs applied in list order. Later rules see the
//! output of earlier ones, so a list whose forms overlap is not guaranteed to
//! round-trip.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::{EvolveError, Result};
use crate::core::types::{Word, WordList};

/// One spelling correspondence, e.g. `ch` <-> `tʃ`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrthographyRule {
    pub display: String,
    pub phonemic: String,
}

impl OrthographyRule {
    pub fn new(display: impl Into<String>, phonemic: impl Into<String>) -> Self {
        Self {
            display: display.into(),
            phonemic: phonemic.into(),
        }
    }
}

impl From<(&str, &str)> for OrthographyRule {
    fn from((display, phonemic): (&str, &str)) -> Self {
        Self::new(display, phonemic)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    ToPhonemic,
    ToDisplay,
}

/// Rewrite every word by applying each rule's global replacement in order
pub fn rewrite(words: &[Word], rules: &[OrthographyRule], direction: Direction) -> WordList {
    words
        .iter()
        .map(|word| rewrite_word(word, rules, direction))
        .collect()
}

fn rewrite_word(word: &str, rules: &[OrthographyRule], direction: Direction) -> Word {
    let mut word = word.to_string();
    for rule in rules {
        let (from, to) = match direction {
            Direction::ToPhonemic => (&rule.display, &rule.phonemic),
            Direction::ToDisplay => (&rule.phonemic, &rule.display),
        };
        word = word.replace(from.as_str(), to);
    }
    word
}

/// An ordered set of spelling rules
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Orthography {
    #[serde(default)]
    pub rules: Vec<OrthographyRule>,
}

impl Orthography {
    /// Rules are used as given, with plain `str::replace` semantics
    pub fn new(rules: Vec<OrthographyRule>) -> Self {
        Self { rules }
    }

    /// Parse a file of `[[rules]]` tables with `display` and `phonemic` keys.
    /// Rules with an empty form are rejected.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let orthography: Orthography = toml::from_str(content)?;
        orthography.validate()?;
        Ok(orthography)
    }

    /// Empty forms would insert text between every character
    fn validate(&self) -> Result<()> {
        for (i, rule) in self.rules.iter().enumerate() {
            if rule.display.is_empty() || rule.phonemic.is_empty() {
                return Err(EvolveError::InvalidData(format!(
                    "orthography rule {} has an empty form",
                    i
                )));
            }
        }
        Ok(())
    }

    pub fn to_phonemic(&self, words: &[Word]) -> WordList {
        rewrite(words, &self.rules, Direction::ToPhonemic)
    }

    pub fn to_display(&self, words: &[Word]) -> WordList {
        rewrite(words, &self.rules, Direction::ToDisplay)
    }
}

/// Load an orthography from a TOML file
pub fn load_orthography(path: &Path) -> Result<Orthography> {
    let content = fs::read_to_string(path)?;
    Orthography::from_toml_str(&content)
}
