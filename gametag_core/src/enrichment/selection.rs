//! Priority-based candidate selection

use crate::types::Entry;
use std::cmp::Ordering;
use std::collections::HashSet;

/// Pick the `top_k` entries with the highest priority
///
/// Ties keep their input order. The returned order is only meaningful for
/// selection; callers must not use it to reorder their collection.
pub fn select_candidates(entries: &[Entry], top_k: usize) -> Vec<&Entry> {
    let mut ranked: Vec<&Entry> = entries.iter().collect();
    // sort_by is stable
    ranked.sort_by(|a, b| {
        b.priority()
            .partial_cmp(&a.priority())
            .unwrap_or(Ordering::Equal)
    });
    ranked.truncate(top_k);
    ranked
}

/// Distinct identifiers of `candidates`, first occurrence wins
///
/// Candidates sharing an id are not looked up independently. They collapse
/// into one store key and one provider lookup, and the merge applies that
/// single result to every entry carrying the id.
pub fn candidate_ids(candidates: &[&Entry]) -> Vec<String> {
    let mut seen = HashSet::new();
    candidates
        .iter()
        .filter(|entry| seen.insert(entry.id.as_str()))
        .map(|entry| entry.id.clone())
        .collect()
}
