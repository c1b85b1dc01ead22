//! One generation: pick a sound change and apply it to every word

use rand::seq::SliceRandom;
use rand::RngCore;

use crate::changes::{Proposal, SoundChange};
use crate::core::error::Result;
use crate::core::types::{Word, WordList};
use crate::phonology::apply::apply_all;
use crate::phonology::category::CategoryResolver;
use crate::phonology::expand::expand_all;

/// Result of trying the pool in random order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Found(Proposal),
    Exhausted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// A change was selected and applied. The words may be unchanged if
    /// none of its environments matched.
    Applied { label: String, words: WordList },
    /// No change in the pool had anything to act on
    Exhausted,
}

/// Try every change in a uniformly shuffled order and return the first
/// proposal
pub fn select(pool: &[Box<dyn SoundChange>], words: &[Word], rng: &mut dyn RngCore) -> Selection {
    let mut order: Vec<usize> = (0..pool.len()).collect();
    order.shuffle(rng);

    for index in order {
        let change = &pool[index];
        if let Some(proposal) = change.propose(words, rng) {
            tracing::debug!(change = change.name(), label = %proposal.label, "selected sound change");
            return Selection::Found(proposal);
        }
    }

    Selection::Exhausted
}

/// Run one generation over `words`.
///
/// The selected change's rules are expanded and flattened in order, then
/// applied rule by rule to each word, every rule seeing the output of the one
/// before it.
pub fn step<R: CategoryResolver + ?Sized>(
    pool: &[Box<dyn SoundChange>],
    categories: &R,
    words: &[Word],
    rng: &mut dyn RngCore,
) -> Result<StepOutcome> {
    let proposal = match select(pool, words, rng) {
        Selection::Found(proposal) => proposal,
        Selection::Exhausted => return Ok(StepOutcome::Exhausted),
    };

    let rules = expand_all(&proposal.rules, categories)?;
    let words = words.iter().map(|word| apply_all(word, &rules)).collect();

    Ok(StepOutcome::Applied {
        label: proposal.label,
        words,
    })
}
