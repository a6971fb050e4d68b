//! Structural checks on the built index.

use typeahead::build_index;

use super::common::{oracle, strings, KANA_RANKED};

#[test]
fn key_count_matches_the_distinct_prefix_count() {
    // Counted by hand over the fixture vocabulary: 24 distinct leading
    // substrings across all five words.
    let index = build_index(&strings(&KANA_RANKED), 10);
    assert_eq!(index.entries.len(), 24);
}

#[test]
fn every_list_is_a_prefix_filtered_subsequence_of_the_vocabulary() {
    let vocabulary = strings(&KANA_RANKED);
    let index = build_index(&vocabulary, 10);

    for (prefix, list) in &index.entries {
        assert_eq!(
            list,
            &oracle(&vocabulary, prefix, 10),
            "list for {:?} disagrees with the linear scan",
            prefix
        );
    }
}

#[test]
fn limit_bounds_every_list() {
    let vocabulary = strings(&KANA_RANKED);
    for limit in 0..4 {
        let index = build_index(&vocabulary, limit);
        assert!(index.entries.values().all(|list| list.len() <= limit));
    }
}

#[test]
fn single_word_vocabulary_indexes_each_prefix_length_once() {
    let index = build_index(&strings(&["sakura"]), 3);
    assert_eq!(index.entries.len(), 6);
    for prefix in ["s", "sa", "sak", "saku", "sakur", "sakura"] {
        assert_eq!(index.entries[prefix], strings(&["sakura"]));
    }
}
