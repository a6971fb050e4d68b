// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a completion run.
//!
//! These types define how a parsed vocabulary, the prefix index, and the
//! per-prefix results fit together.
//!
//! | Rust Type          | Purpose                                      |
//! |--------------------|----------------------------------------------|
//! | `VocabEntry`       | One word with its popularity weight          |
//! | `ParsedInput`      | Ordered vocabulary plus prefix query list    |
//! | `CompletionIndex`  | prefix string → ranked top-K completion list |
//! | `CompletionResult` | Per-prefix outcome: matched list or miss     |
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **ParsedInput**: `vocabulary` is sorted by frequency descending, ties
//!   broken by word ascending (byte-wise). The index builder relies on this
//!   order and never re-sorts - feeding it an unranked vocabulary produces a
//!   well-formed index over garbage rankings.
//!
//! - **CompletionIndex**: every value list is a subsequence of the vocabulary
//!   and holds at most `limit` words. Immutable after construction.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One vocabulary record: a word and its popularity weight.
///
/// Built transiently while parsing; only the ranked word order survives into
/// the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabEntry {
    pub word: String,
    pub frequency: u64,
}

impl VocabEntry {
    pub fn new(word: impl Into<String>, frequency: u64) -> Self {
        VocabEntry {
            word: word.into(),
            frequency,
        }
    }
}

/// What the parser hands to the completion engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedInput {
    /// Distinct words, sorted by frequency descending then word ascending.
    pub vocabulary: Vec<String>,
    /// Query prefixes in input order, duplicates preserved.
    pub prefixes: Vec<String>,
}

/// Prefix index: every leading substring of every vocabulary word maps to its
/// ranked completion list, truncated to `limit`.
///
/// Keys exist for every prefix length from 1 up to the word's own length
/// (counted in characters), so membership alone answers "does anything start
/// with this?". Built once per vocabulary and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionIndex {
    pub entries: HashMap<String, Vec<String>>,
    /// The K this index was built with. No list exceeds it.
    pub limit: usize,
}

/// Outcome of one prefix lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CompletionResult {
    /// At least one vocabulary word starts with the prefix. The list holds at
    /// most K words in rank order; it is empty when the index was built with
    /// a limit of zero.
    Matched(Vec<String>),
    /// No vocabulary word starts with the prefix.
    NoMatch,
}

impl CompletionResult {
    /// The completed words, empty for a miss.
    pub fn words(&self) -> &[String] {
        match self {
            CompletionResult::Matched(words) => words,
            CompletionResult::NoMatch => &[],
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, CompletionResult::Matched(_))
    }
}
