//! Ranked prefix completion over a weighted vocabulary.
//!
//! This crate parses a line-oriented record of weighted words and query
//! prefixes, builds a prefix index, and answers "top-K completions of P" per
//! prefix - ordered by popularity descending, ties broken alphabetically.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  parse.rs   │────▶│  index.rs    │────▶│ complete.rs  │
//! │ (validate,  │     │ (build_index,│     │ (complete,   │
//! │  rank)      │     │  lookup)     │     │ render_plain)│
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        │                   │                    │
//!        └───────────────────┴────────────────────┘
//!                            ▼
//!                        types.rs
//!        (VocabEntry, ParsedInput, CompletionIndex,
//!                     CompletionResult)
//! ```
//!
//! The parser emits the vocabulary already ranked (frequency descending, word
//! ascending on ties); the index builder leans on that order and never sorts
//! again. Both stages are pure, single-pass transformations - errors are
//! typed values, no state survives a call.
//!
//! # Usage
//!
//! ```
//! use typeahead::{complete, parse, CompletionResult};
//!
//! let raw = "2\nrust 20\nruby 10\n1\nru\n";
//! let input = parse(raw).unwrap();
//! let results = complete(&input.vocabulary, &input.prefixes, 10);
//!
//! assert_eq!(
//!     results,
//!     vec![CompletionResult::Matched(vec![
//!         "rust".to_string(),
//!         "ruby".to_string(),
//!     ])]
//! );
//! ```

// Module declarations
mod complete;
mod index;
mod parse;
mod types;

// Re-exports for public API
pub use complete::{complete, render_plain, DEFAULT_LIMIT};
pub use index::{build_index, lookup};
pub use parse::{is_ranked, parse, rank, ParseError};
pub use types::{CompletionIndex, CompletionResult, ParsedInput, VocabEntry};
