//! Input parsing and validation.
//!
//! Raw input is a line-oriented record:
//!
//! ```text
//! N
//! word_1 freq_1
//! ...
//! word_N freq_N
//! M
//! prefix_1
//! ...
//! prefix_M
//! ```
//!
//! Validation is fail-fast: the first violation wins and aborts the parse
//! with a typed error. Nothing partial escapes - callers get the whole
//! `ParsedInput` or a `ParseError`.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **VOCAB_RANKED**: the returned vocabulary is sorted by frequency
//!    descending, ties broken by word ascending (byte-wise ordinal order).
//!    `build_index` depends on this and never re-sorts.
//! 2. **VOCAB_DISTINCT**: every word appears exactly once. A duplicated word
//!    line makes the distinct count fall short of the declared N, which is
//!    rejected as `InconsistentData`.
//! 3. **PREFIX_ORDER**: prefixes come back verbatim, in input order, with
//!    duplicates preserved.

use std::collections::BTreeMap;
use std::fmt;

use log::debug;

use crate::types::{ParsedInput, VocabEntry};

/// Error type for parse failures.
///
/// Three kinds, split by who got it wrong: the caller handed us nothing
/// (`InvalidInput`), a single line has the wrong shape (`MalformedFormat`),
/// or the declared counts disagree with the lines actually present
/// (`InconsistentData`). All are terminal; the parser never recovers or
/// accumulates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input was empty.
    InvalidInput,
    /// A line did not match its expected shape or numeric type.
    MalformedFormat { line: usize, found: String },
    /// A declared cardinality disagrees with the data actually present.
    InconsistentData { expected: usize, found: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidInput => {
                write!(f, "input is empty")
            }
            ParseError::MalformedFormat { line, found } => {
                write!(f, "malformed record at line {}: {:?}", line, found)
            }
            ParseError::InconsistentData { expected, found } => {
                write!(f, "counts disagree: expected {}, found {}", expected, found)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse a raw input record into a ranked vocabulary and a prefix list.
///
/// Checks run in a fixed order, first violation wins:
///
/// 1. non-empty input (`InvalidInput`)
/// 2. line 1 is an integer N > 0 (`MalformedFormat`)
/// 3. at least N + 2 lines present (`InconsistentData`)
/// 4. N well-formed `word freq` lines (`MalformedFormat`)
/// 5. N distinct words (`InconsistentData`)
/// 6. line N + 2 is an integer M > 0 (`MalformedFormat`)
/// 7. exactly N + M + 2 lines in total (`InconsistentData`)
///
/// The remaining M lines are taken verbatim as prefixes.
pub fn parse(raw: &str) -> Result<ParsedInput, ParseError> {
    if raw.is_empty() {
        return Err(ParseError::InvalidInput);
    }

    let lines: Vec<&str> = raw.lines().collect();
    let word_count = positive_count(&lines, 0)?;

    // The header promises word_count records plus the prefix-count line.
    // Subtract-side comparison so an absurd declared count cannot overflow.
    if lines.len().saturating_sub(2) < word_count {
        return Err(ParseError::InconsistentData {
            expected: word_count.saturating_add(2),
            found: lines.len(),
        });
    }

    // Keyed by word: a later duplicate overwrites the earlier frequency, and
    // the distinct-count check below then rejects the record, since exactly
    // word_count lines were consumed.
    let mut frequencies: BTreeMap<String, u64> = BTreeMap::new();
    for (offset, text) in lines[1..=word_count].iter().enumerate() {
        let entry = vocab_entry(text, offset + 2)?;
        frequencies.insert(entry.word, entry.frequency);
    }
    if frequencies.len() != word_count {
        return Err(ParseError::InconsistentData {
            expected: word_count,
            found: frequencies.len(),
        });
    }

    let prefix_count = positive_count(&lines, word_count + 1)?;
    if lines.len() - word_count - 2 != prefix_count {
        return Err(ParseError::InconsistentData {
            expected: word_count.saturating_add(prefix_count).saturating_add(2),
            found: lines.len(),
        });
    }

    let prefixes: Vec<String> = lines[word_count + 2..]
        .iter()
        .map(|text| text.to_string())
        .collect();

    let entries: Vec<VocabEntry> = frequencies
        .into_iter()
        .map(|(word, frequency)| VocabEntry { word, frequency })
        .collect();

    debug!(
        "parsed {} vocabulary words, {} prefixes",
        entries.len(),
        prefixes.len()
    );

    Ok(ParsedInput {
        vocabulary: rank(entries),
        prefixes,
    })
}

/// Order vocabulary entries by frequency descending, ties by word ascending,
/// and keep only the words.
///
/// This ordering is the published contract the index builder relies on.
pub fn rank(mut entries: Vec<VocabEntry>) -> Vec<String> {
    entries.sort_by(|a, b| {
        b.frequency
            .cmp(&a.frequency)
            .then_with(|| a.word.cmp(&b.word))
    });
    entries.into_iter().map(|entry| entry.word).collect()
}

/// Check the vocabulary ordering contract.
///
/// For every adjacent pair: strictly higher frequency, or equal frequency and
/// word not greater. This is the invariant `rank` establishes.
pub fn is_ranked(entries: &[VocabEntry]) -> bool {
    entries.windows(2).all(|pair| {
        pair[0].frequency > pair[1].frequency
            || (pair[0].frequency == pair[1].frequency && pair[0].word <= pair[1].word)
    })
}

/// Parse a count header line, which must hold a positive integer.
fn positive_count(lines: &[&str], at: usize) -> Result<usize, ParseError> {
    let text = lines[at];
    match text.trim().parse::<usize>() {
        Ok(count) if count > 0 => Ok(count),
        _ => Err(ParseError::MalformedFormat {
            line: at + 1,
            found: text.to_string(),
        }),
    }
}

/// Parse one `word freq` vocabulary line: exactly two tokens, the second a
/// non-negative integer.
fn vocab_entry(text: &str, line: usize) -> Result<VocabEntry, ParseError> {
    let malformed = || ParseError::MalformedFormat {
        line,
        found: text.to_string(),
    };

    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(malformed());
    }
    let frequency = tokens[1].parse::<u64>().map_err(|_| malformed())?;

    Ok(VocabEntry {
        word: tokens[0].to_string(),
        frequency,
    })
}
