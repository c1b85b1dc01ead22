//! Word-list comparison

use crate::evolution::output::GenerationRecord;

/// Number of positions where the two lists differ, compared only up to the
/// shorter length
pub fn count_differences<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    a.iter().zip(b).filter(|(x, y)| x != y).count()
}

/// Drop every step whose word list is unchanged from the last kept step.
/// The first step is always kept.
pub fn collapse_plateaus(steps: Vec<GenerationRecord>) -> Vec<GenerationRecord> {
    let mut kept: Vec<GenerationRecord> = Vec::with_capacity(steps.len());

    for step in steps {
        let changed = match kept.last() {
            Some(last) => count_differences(&last.words, &step.words) > 0,
            None => true,
        };
        if changed {
            kept.push(step);
        }
    }

    kept
}
