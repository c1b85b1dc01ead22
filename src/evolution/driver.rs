//! Main evolution loop

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::changes::{default_catalog, Catalog};
use crate::core::config::EvolutionConfig;
use crate::core::error::Result;
use crate::core::types::{Word, WordList};
use crate::evolution::diff::{collapse_plateaus, count_differences};
use crate::evolution::output::{EvolutionOutput, GenerationRecord, StopReason};
use crate::evolution::step::{step, StepOutcome};
use crate::orthography::{Orthography, OrthographyRule};
use crate::phonology::category::CategoryTable;

/// Everything one run needs: the change pool, category data, spelling rules,
/// limits and the RNG. Each run owns its own pool.
pub struct Evolver {
    catalog: Catalog,
    categories: CategoryTable,
    orthography: Orthography,
    config: EvolutionConfig,
    rng: ChaCha8Rng,
    seed: u64,
}

impl Evolver {
    pub fn new(catalog: Catalog, config: EvolutionConfig) -> Result<Self> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);

        Ok(Self {
            catalog,
            categories: CategoryTable::default(),
            orthography: Orthography::default(),
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        })
    }

    pub fn with_categories(mut self, categories: CategoryTable) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_orthography(mut self, orthography: Orthography) -> Self {
        self.orthography = orthography;
        self
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Evolve `words` (display spelling) until the target generation count
    /// is reached, the pool is exhausted, or attempts run out.
    ///
    /// Steps that change no word are discarded and do not count as
    /// generations. Early stops are not errors; an unknown category in a
    /// proposed rule is.
    pub fn run(mut self, words: &[Word]) -> Result<EvolutionOutput> {
        let generations = self.config.generations;
        let attempts_limit = self.config.attempts_limit;

        let mut words = self.orthography.to_phonemic(words);
        let mut labels: Vec<String> = Vec::new();
        let mut steps = vec![GenerationRecord::new("initial", words.clone())];
        let mut attempts = 0u64;
        let mut stop_reason = StopReason::Completed;

        tracing::debug!(seed = self.seed, generations, words = words.len(), "starting evolution");

        while labels.len() < generations {
            attempts += 1;

            match step(&self.catalog, &self.categories, &words, &mut self.rng)? {
                StepOutcome::Exhausted => {
                    tracing::info!(generation = labels.len(), "no applicable sound change left");
                    stop_reason = StopReason::Exhausted;
                    break;
                }
                StepOutcome::Applied {
                    label,
                    words: new_words,
                } => {
                    steps.push(GenerationRecord::new(label.clone(), new_words.clone()));

                    if count_differences(&new_words, &words) > 0 {
                        tracing::info!(
                            generation = labels.len() + 1,
                            label = %label,
                            before = ?words,
                            after = ?new_words,
                            "sound change applied"
                        );
                        words = new_words;
                        labels.push(label);
                    } else {
                        tracing::debug!(attempt = attempts, label = %label, "sound change matched nothing");
                    }
                }
            }

            if attempts_exhausted(attempts, attempts_limit) {
                if labels.len() < generations {
                    tracing::warn!(
                        attempts,
                        generations = labels.len(),
                        "attempts limit reached before target generations"
                    );
                    stop_reason = StopReason::AttemptsExhausted;
                }
                break;
            }
        }

        let history = collapse_plateaus(steps);
        let words = self.orthography.to_display(&words);

        Ok(EvolutionOutput {
            labels,
            words,
            history,
            attempts,
            stop_reason,
            seed: self.seed,
        })
    }
}

/// The limit check runs after each attempt, so `attempts_limit + 1` attempts
/// are allowed. The counter is wider than the limit so this holds at `u32::MAX`.
fn attempts_exhausted(attempts: u64, attempts_limit: u32) -> bool {
    attempts > u64::from(attempts_limit)
}

/// Evolve `words` for up to `generations` generations with the built-in
/// catalogue and categories, converting through `rewrite_rules` on the way in
/// and out. Returns the applied labels and the final words.
///
/// Rewrite pairs are plain global replacements and are not validated; a pair
/// with an empty form inserts its other form between every character.
/// Requesting more generations than the attempts limit can reach is not an
/// error: the run stops early and returns what it has.
pub fn evolve(
    words: &[Word],
    generations: usize,
    rewrite_rules: &[OrthographyRule],
) -> Result<(Vec<String>, WordList)> {
    let output = Evolver::new(default_catalog(), EvolutionConfig::new(generations))?
        .with_orthography(Orthography::new(rewrite_rules.to_vec()))
        .run(words)?;

    Ok((output.labels, output.words))
}
