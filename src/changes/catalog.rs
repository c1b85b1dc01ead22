//! Data-driven sound changes and the built-in catalogue

use rand::seq::SliceRandom;
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::changes::{Catalog, Proposal, SoundChange};
use crate::core::types::Word;
use crate::phonology::rule::Rule;

/// A named family of segment shifts sharing the same environments
///
/// Each proposal picks one shift whose target occurs somewhere in the word
/// list and emits one rule per environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSpec {
    pub name: String,
    /// (target, replacement) pairs
    pub shifts: Vec<(String, String)>,
    pub environments: Vec<String>,
}

impl ChangeSpec {
    pub fn new(name: &str, shifts: &[(&str, &str)], environments: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            shifts: shifts
                .iter()
                .map(|(t, r)| (t.to_string(), r.to_string()))
                .collect(),
            environments: environments.iter().map(|e| e.to_string()).collect(),
        }
    }

    fn label(&self, target: &str, replacement: &str) -> String {
        let replacement = if replacement.is_empty() { "∅" } else { replacement };
        format!(
            "{}: {} > {} / {}",
            self.name,
            target,
            replacement,
            self.environments.join(", ")
        )
    }
}

impl SoundChange for ChangeSpec {
    fn name(&self) -> &str {
        &self.name
    }

    fn propose(&self, words: &[Word], rng: &mut dyn RngCore) -> Option<Proposal> {
        let eligible: Vec<&(String, String)> = self
            .shifts
            .iter()
            .filter(|(target, _)| words.iter().any(|w| w.contains(target.as_str())))
            .collect();

        let (target, replacement) = *eligible.choose(rng)?;

        let rules = self
            .environments
            .iter()
            .map(|env| Rule::new(target.as_str(), replacement.as_str(), env.as_str()))
            .collect();

        Some(Proposal::new(rules, self.label(target, replacement)))
    }
}

/// Specs for the built-in catalogue
pub fn default_specs() -> Vec<ChangeSpec> {
    vec![
        ChangeSpec::new(
            "approximation",
            &[("β", "w"), ("v", "ʋ"), ("ɣ", "ɰ"), ("ʝ", "j")],
            &["(V)_(V)"],
        ),
        ChangeSpec::new(
            "sonorization",
            &[("p", "b"), ("t", "d"), ("k", "g"), ("f", "v"), ("s", "z")],
            &["(V)_(V)"],
        ),
        ChangeSpec::new(
            "deaffrication",
            &[("tʃ", "ʃ"), ("dʒ", "ʒ"), ("ts", "s"), ("dz", "z")],
            &["_"],
        ),
        ChangeSpec::new("lateral vocalization", &[("l", "w"), ("ɫ", "w")], &["_$"]),
        ChangeSpec::new(
            "spirantization",
            &[("b", "β"), ("d", "ð"), ("g", "ɣ")],
            &["(V)_(V)"],
        ),
        ChangeSpec::new(
            "debuccalization",
            &[("s", "h"), ("f", "h"), ("θ", "h")],
            &["_$"],
        ),
        ChangeSpec::new("palatal vocalization", &[("ʎ", "j"), ("ɲ", "j̃")], &["_"]),
        ChangeSpec::new(
            "affrication",
            &[("t", "ts"), ("k", "tʃ"), ("d", "dz"), ("g", "dʒ")],
            &["_i", "_e"],
        ),
        ChangeSpec::new(
            "degemination",
            &[
                ("pp", "p"),
                ("tt", "t"),
                ("kk", "k"),
                ("ss", "s"),
                ("ll", "l"),
                ("mm", "m"),
                ("nn", "n"),
            ],
            &["_"],
        ),
        ChangeSpec::new("approximant elision", &[("j", ""), ("w", "")], &["[V]_[V]"]),
        ChangeSpec::new("flapping", &[("t", "ɾ"), ("d", "ɾ")], &["(V)_(V)"]),
    ]
}

/// The built-in generator pool
pub fn default_catalog() -> Catalog {
    into_catalog(default_specs())
}

pub(crate) fn into_catalog(specs: Vec<ChangeSpec>) -> Catalog {
    specs
        .into_iter()
        .map(|spec| Box::new(spec) as Box<dyn SoundChange>)
        .collect()
}
