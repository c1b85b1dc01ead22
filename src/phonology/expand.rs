//! Placeholder expansion: one parameterized rule into literal rules
//!
//! Only one placeholder group is resolved per rule:
//! - `[C]`: every occurrence is replaced by the same member, one rule per
//!   member.
//! - `(C)`: exactly two occurrences, filled from every unordered pair of
//!   members (with repetition), each pair emitted in both orders.
//!
//! When both kinds appear, the bracket group wins and the parenthesis group
//! is left as-is. Identical pairs are emitted twice.

use crate::core::error::{EvolveError, Result};
use crate::phonology::category::CategoryResolver;
use crate::phonology::rule::Rule;

/// Expand `rule` into the list of rules obtained by resolving its
/// placeholder group. A rule without placeholders comes back unchanged.
pub fn expand<R: CategoryResolver + ?Sized>(rule: &Rule, resolver: &R) -> Result<Vec<Rule>> {
    let environment = rule.environment.as_str();

    if let Some(code) = placeholder_code(environment, '[', ']')? {
        let placeholder = format!("[{}]", code);
        let members = resolver.resolve(code)?;

        return Ok(members
            .iter()
            .map(|member| rule.with_environment(environment.replace(&placeholder, member)))
            .collect());
    }

    if let Some(code) = placeholder_code(environment, '(', ')')? {
        let placeholder = format!("({})", code);
        let members = resolver.resolve(code)?;

        let mut expanded = Vec::with_capacity(members.len() * (members.len() + 1));
        for (i, first) in members.iter().enumerate() {
            for second in &members[i..] {
                expanded.push(rule.with_environment(fill_pair(
                    environment,
                    &placeholder,
                    first,
                    second,
                )));
                expanded.push(rule.with_environment(fill_pair(
                    environment,
                    &placeholder,
                    second,
                    first,
                )));
            }
        }
        return Ok(expanded);
    }

    Ok(vec![rule.clone()])
}

/// Expand every rule and flatten, keeping each rule's expansions together
/// and in input order
pub fn expand_all<R: CategoryResolver + ?Sized>(rules: &[Rule], resolver: &R) -> Result<Vec<Rule>> {
    let mut literal = Vec::new();
    for rule in rules {
        literal.extend(expand(rule, resolver)?);
    }
    Ok(literal)
}

/// Code inside the first `open`..`close` group, if the environment has one
fn placeholder_code(environment: &str, open: char, close: char) -> Result<Option<&str>> {
    let Some(start) = environment.find(open) else {
        return Ok(None);
    };

    let rest = &environment[start + open.len_utf8()..];
    match rest.find(close) {
        Some(end) => Ok(Some(&rest[..end])),
        None => Err(EvolveError::UnclosedPlaceholder {
            environment: environment.to_string(),
        }),
    }
}

/// Fill the first occurrence of `placeholder` with `first`, then the next
/// remaining occurrence with `second`
fn fill_pair(environment: &str, placeholder: &str, first: &str, second: &str) -> String {
    environment
        .replacen(placeholder, first, 1)
        .replacen(placeholder, second, 1)
}
