//! Applying a literal rule to a single word

use crate::phonology::rule::Rule;

/// Apply a literal rule to `word`, returning the rewritten word.
///
/// - Environment starting with `^`: rewrite a leading `target` only.
/// - Environment ending with `$`: rewrite a trailing `target` only.
/// - Otherwise the environment is a context string: `_` is filled with the
///   target to build the search string and with the replacement to build the
///   substitute, then every non-overlapping occurrence is replaced left to
///   right.
///
/// The context beyond the anchor itself is not consulted for anchored rules.
/// A word that does not match comes back unchanged.
pub fn apply(word: &str, rule: &Rule) -> String {
    let environment = rule.environment.as_str();

    if environment.starts_with('^') {
        return match word.strip_prefix(rule.target.as_str()) {
            Some(rest) => format!("{}{}", rule.replacement, rest),
            None => word.to_string(),
        };
    }

    if environment.ends_with('$') {
        return match word.strip_suffix(rule.target.as_str()) {
            Some(rest) => format!("{}{}", rest, rule.replacement),
            None => word.to_string(),
        };
    }

    let search = environment.replace('_', &rule.target);
    if search.is_empty() {
        return word.to_string();
    }
    let substitute = environment.replace('_', &rule.replacement);

    word.replace(&search, &substitute)
}

/// Apply `rules` to `word` in order, each rule seeing the previous output
pub fn apply_all(word: &str, rules: &[Rule]) -> String {
    rules
        .iter()
        .fold(word.to_string(), |current, rule| apply(&current, rule))
}
