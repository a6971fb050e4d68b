//! The completion run: index once, then look up every prefix in order.

use crate::index::{build_index, lookup};
use crate::types::CompletionResult;

/// Completions returned per prefix when the caller does not choose a limit.
pub const DEFAULT_LIMIT: usize = 10;

/// Complete every prefix against a ranked vocabulary.
///
/// Builds the prefix index once, then answers each query by exact probe in
/// input order; a repeated prefix gets its own, identical result at each
/// occurrence. The index lives for this call only and is dropped on return.
///
/// Pure with respect to output: results come back as values, rendering and
/// sinks are the caller's business.
pub fn complete(
    vocabulary: &[String],
    prefixes: &[String],
    limit: usize,
) -> Vec<CompletionResult> {
    let index = build_index(vocabulary, limit);
    prefixes
        .iter()
        .map(|prefix| lookup(&index, prefix))
        .collect()
}

/// Render results the way the interactive tool prints them: each matched
/// word on its own line, a blank line closing every matched block, nothing
/// at all for a miss.
pub fn render_plain(results: &[CompletionResult]) -> String {
    let mut out = String::new();
    for result in results {
        if let CompletionResult::Matched(words) = result {
            for word in words {
                out.push_str(word);
                out.push('\n');
            }
            out.push('\n');
        }
    }
    out
}
