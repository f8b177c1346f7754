use super::types::Match;
use std::collections::HashMap;
use std::hash::Hash;

/// `2 * matches / total`, or 1.0 when there is nothing to compare.
pub(crate) fn similarity(matches: usize, total: usize) -> f64 {
    if total == 0 {
        return 1.0;
    }
    2.0 * matches as f64 / total as f64
}

pub(crate) fn block_matches(blocks: &[Match]) -> usize {
    blocks.iter().map(|m| m.size).sum()
}

pub(crate) fn element_counts<T: Eq + Hash + Clone>(seq: &[T]) -> HashMap<T, usize> {
    let mut counts = HashMap::new();
    for elt in seq {
        *counts.entry(elt.clone()).or_insert(0) += 1;
    }
    counts
}

/// Size of the multiset intersection of `a` and the elements counted in `b_counts`.
pub(crate) fn multiset_matches<T: Eq + Hash>(a: &[T], b_counts: &HashMap<T, usize>) -> usize {
    let mut available: HashMap<&T, usize> = HashMap::new();
    let mut matches = 0;
    for elt in a {
        let left = available
            .entry(elt)
            .or_insert_with(|| b_counts.get(elt).copied().unwrap_or(0));
        if *left > 0 {
            *left -= 1;
            matches += 1;
        }
    }
    matches
}
