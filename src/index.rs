//! Completion index construction and lookup.
//!
//! The index trades memory for repeat-query speed: every leading substring of
//! every vocabulary word becomes a key whose value is the final, ranked
//! answer. Lookups are a single hash probe, no scanning and no per-query
//! sorting.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **KEY_COMPLETE**: for every vocabulary word `w` and every length
//!    `1..=len(w)` (in characters), `w[0..len]` is a key.
//! 2. **LIST_RANKED**: every list is a subsequence of the vocabulary, so the
//!    frequency-descending, word-ascending order carries over untouched.
//! 3. **LIST_BOUNDED**: no list exceeds the limit the index was built with.

use std::collections::HashMap;

use log::debug;

use crate::types::{CompletionIndex, CompletionResult};

/// Build the prefix index for a ranked vocabulary.
///
/// The vocabulary must already be ordered by frequency descending, ties by
/// word ascending (the `parse` contract). Build walks each word once and
/// registers every character-boundary prefix; because words arrive in rank
/// order, each key's list fills in rank order and is simply capped at
/// `limit` - no secondary sort ever runs.
///
/// An empty vocabulary yields an empty index, so every lookup misses. A
/// `limit` of zero still registers every key, with empty lists: the prefix
/// matches, it just has nothing to offer.
pub fn build_index(vocabulary: &[String], limit: usize) -> CompletionIndex {
    let mut entries: HashMap<String, Vec<String>> = HashMap::new();

    for word in vocabulary {
        for end in prefix_boundaries(word) {
            let list = entries.entry(word[..end].to_string()).or_default();
            if list.len() < limit {
                list.push(word.clone());
            }
        }
    }

    debug!(
        "built completion index: {} keys from {} words, limit {}",
        entries.len(),
        vocabulary.len(),
        limit
    );

    CompletionIndex { entries, limit }
}

/// Probe the index with one prefix.
///
/// Exact string match: a present key means at least one vocabulary word
/// starts with the prefix, an absent key means none does (the prefix is
/// longer than every candidate, or simply never occurs).
pub fn lookup(index: &CompletionIndex, prefix: &str) -> CompletionResult {
    match index.entries.get(prefix) {
        Some(words) => CompletionResult::Matched(words.clone()),
        None => CompletionResult::NoMatch,
    }
}

/// Byte offsets ending each character prefix of `word`, shortest first.
///
/// Offsets fall on `char` boundaries, so slicing the word with them is always
/// valid. Empty for an empty word.
fn prefix_boundaries(word: &str) -> impl Iterator<Item = usize> + '_ {
    word.char_indices()
        .map(|(at, _)| at)
        .skip(1)
        .chain((!word.is_empty()).then_some(word.len()))
}
