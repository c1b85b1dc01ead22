//! Integration tests for the evolution loop
//!
//! These tests run complete evolutions through the public API:
//! - Early termination when no change applies
//! - Attempts limit with changes that never alter the words
//! - Seeded reproducibility with the built-in catalogue
//! - Loading catalogue, categories and orthography from TOML

use rand::RngCore;
use soundshift::changes::{
    catalog_from_toml_str, default_catalog, load_catalog, Catalog, Proposal, SoundChange,
};
use soundshift::core::{Word, WordList};
use soundshift::evolution::{count_differences, StopReason};
use soundshift::orthography::{load_orthography, Orthography, OrthographyRule};
use soundshift::phonology::{load_category_table, Category, CategoryResolver, CategoryTable, Rule};
use soundshift::{evolve, EvolutionConfig, Evolver};
use std::path::Path;

fn words(list: &[&str]) -> WordList {
    list.iter().map(|w| w.to_string()).collect()
}

/// A change that never finds anything to act on
struct Invalid;

impl SoundChange for Invalid {
    fn name(&self) -> &str {
        "invalid"
    }

    fn propose(&self, _words: &[Word], _rng: &mut dyn RngCore) -> Option<Proposal> {
        None
    }
}

/// A change that is always applicable but has no rules
struct EmptyRules;

impl SoundChange for EmptyRules {
    fn name(&self) -> &str {
        "noop"
    }

    fn propose(&self, _words: &[Word], _rng: &mut dyn RngCore) -> Option<Proposal> {
        Some(Proposal::new(Vec::new(), "noop"))
    }
}

/// Rules that can never match anything in these tests
struct NeverMatches;

impl SoundChange for NeverMatches {
    fn name(&self) -> &str {
        "never matches"
    }

    fn propose(&self, _words: &[Word], _rng: &mut dyn RngCore) -> Option<Proposal> {
        Some(Proposal::new(vec![Rule::new("q", "x", "q_q")], "q > x / q_q"))
    }
}

/// Test 1: every change invalid, run ends immediately with the input
#[test]
fn test_invalid_pool_returns_input_unchanged() {
    let catalog: Catalog = vec![Box::new(Invalid), Box::new(Invalid), Box::new(Invalid)];
    let output = Evolver::new(catalog, EvolutionConfig::new(3))
        .unwrap()
        .run(&words(&["kato"]))
        .unwrap();

    assert!(output.labels.is_empty());
    assert_eq!(output.words, words(&["kato"]));
    assert_eq!(output.stop_reason, StopReason::Exhausted);
}

/// Test 2: an always-valid change with no rules never advances the count
#[test]
fn test_empty_rule_set_terminates_on_attempts_limit() {
    let catalog: Catalog = vec![Box::new(EmptyRules)];
    let output = Evolver::new(catalog, EvolutionConfig::new(3).with_seed(11))
        .unwrap()
        .run(&words(&["kato", "mesa"]))
        .unwrap();

    assert!(output.labels.is_empty());
    assert_eq!(output.attempts, 101);
    assert_eq!(output.stop_reason, StopReason::AttemptsExhausted);
}

/// Test 3: no-op steps are discarded even when mixed with invalid changes
#[test]
fn test_non_matching_rules_are_discarded() {
    let catalog: Catalog = vec![Box::new(Invalid), Box::new(NeverMatches)];
    let output = Evolver::new(catalog, EvolutionConfig::new(2).with_attempts_limit(5).with_seed(2))
        .unwrap()
        .run(&words(&["apa"]))
        .unwrap();

    assert!(output.labels.is_empty());
    assert_eq!(output.attempts, 6);
    assert_eq!(output.history.len(), 1);
}

/// Test 4: same seed, same result
#[test]
fn test_seeded_runs_are_reproducible() {
    let input = words(&["kato", "mesa", "lupo", "patata", "gallo", "nitʃe"]);

    let run = |seed: u64| {
        Evolver::new(default_catalog(), EvolutionConfig::new(6).with_seed(seed))
            .unwrap()
            .run(&input)
            .unwrap()
    };

    let first = run(2024);
    let second = run(2024);

    assert_eq!(first.labels, second.labels);
    assert_eq!(first.words, second.words);
    assert_eq!(first.attempts, second.attempts);
    assert_eq!(first.seed, 2024);
}

/// Test 5: every accepted generation changes at least one word
#[test]
fn test_history_records_real_changes() {
    let input = words(&["kato", "mesa", "lupo", "patata", "gallo"]);
    let output = Evolver::new(default_catalog(), EvolutionConfig::new(8).with_seed(77))
        .unwrap()
        .run(&input)
        .unwrap();

    assert_eq!(output.history.len(), output.labels.len() + 1);
    assert_eq!(output.history[0].words, input);

    for (pair, label) in output.history.windows(2).zip(&output.labels) {
        assert!(count_differences(&pair[0].words, &pair[1].words) > 0);
        assert_eq!(&pair[1].label, label);
        assert_eq!(pair[1].words.len(), input.len());
    }

    let last = output.history.last().unwrap();
    assert_eq!(last.words, output.words);
}

/// Test 6: intervocalic voicing from a TOML catalogue over a two-vowel
/// inventory
#[test]
fn test_custom_catalog_chain() {
    let catalog = catalog_from_toml_str(
        r#"
[[changes]]
name = "voicing"
shifts = [["p", "b"]]
environments = ["(V)_(V)"]
"#,
    )
    .unwrap();

    let output = Evolver::new(catalog, EvolutionConfig::new(4).with_seed(5))
        .unwrap()
        .with_categories(CategoryTable::empty().with_members(Category::Vowel, ["a", "o"]))
        .run(&words(&["apa", "opo", "pa"]))
        .unwrap();

    assert_eq!(output.labels.len(), 1);
    assert_eq!(output.words, words(&["aba", "obo", "pa"]));
    // word-initial p has no vowel before it, so "pa" still carries a p and
    // the change stays valid; later attempts are no-ops until the limit
    assert_eq!(output.stop_reason, StopReason::AttemptsExhausted);
}

/// Test 7: the free function converts spelling both ways
#[test]
fn test_evolve_round_trips_spelling() {
    let rules = vec![OrthographyRule::new("ch", "tʃ")];
    let (labels, final_words) = evolve(&words(&["chico", "mucho"]), 2, &rules).unwrap();

    assert!(labels.len() <= 2);
    assert_eq!(final_words.len(), 2);
    // the phonemic form never leaks into the display output
    assert!(final_words.iter().all(|w| !w.contains("tʃ")));
}

/// Test 8: rewrite pairs are plain replacements, empty forms included;
/// only the TOML loader rejects them
#[test]
fn test_evolve_accepts_empty_spelling_rule() {
    let rules = vec![OrthographyRule::new("", "x")];
    let (labels, final_words) = evolve(&words(&["kato", "mesa"]), 2, &rules).unwrap();
    assert!(labels.len() <= 2);
    assert_eq!(final_words.len(), 2);

    let orthography = Orthography::new(rules);
    assert_eq!(orthography.to_phonemic(&words(&["ka"])), words(&["xkxax"]));

    let toml_str = "[[rules]]\ndisplay = \"\"\nphonemic = \"x\"\n";
    assert!(Orthography::from_toml_str(toml_str).is_err());
}

/// Test 9: asking for more generations than the attempts limit can reach
/// returns partial results instead of an error
#[test]
fn test_evolve_beyond_attempts_limit() {
    let (labels, final_words) = evolve(&words(&["kato", "mesa", "patata"]), 150, &[]).unwrap();
    assert!(labels.len() <= 101);
    assert_eq!(final_words.len(), 3);

    let catalog: Catalog = vec![Box::new(EmptyRules)];
    let output = Evolver::new(catalog, EvolutionConfig::new(150).with_seed(4))
        .unwrap()
        .run(&words(&["kato"]))
        .unwrap();
    assert!(output.labels.is_empty());
    assert_eq!(output.attempts, 101);
    assert_eq!(output.stop_reason, StopReason::AttemptsExhausted);
}

/// Test 10: the shipped data files load and drive a run together
#[test]
fn test_shipped_data_files() {
    let data_dir = Path::new("data");
    if !data_dir.exists() {
        return;
    }

    let catalog = load_catalog(&data_dir.join("catalog.toml")).unwrap();
    assert_eq!(catalog.len(), 4);

    let categories = load_category_table(&data_dir.join("categories.toml")).unwrap();
    assert_eq!(categories.members(Category::Vowel).len(), 8);

    let orthography = load_orthography(&data_dir.join("orthography.toml")).unwrap();
    assert_eq!(orthography.to_phonemic(&words(&["calle"])), words(&["caʎe"]));

    let output = Evolver::new(catalog, EvolutionConfig::new(3).with_seed(9))
        .unwrap()
        .with_categories(categories)
        .with_orthography(orthography)
        .run(&words(&["gatto", "calle", "noche", "pece"]))
        .unwrap();

    assert_eq!(output.words.len(), 4);
    assert!(output.labels.len() <= 3);
}
