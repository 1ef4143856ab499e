// Copyright (c) 2025 Lei Words Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Operation-level and property-based tests for the Kui Word Trie.


use test_case::test_case;

use crate::data_structures::kui_trie::KuiTrie;

fn trie_from(words: &[&str]) -> KuiTrie {
    let mut trie = KuiTrie::new();
    for word in words {
        trie.add_word(word);
    }
    trie
}

#[test]
fn test_inserted_words_are_found() {
    let words = ["cat", "dog", "catdog", "dogcat", "catdogcat"];
    let trie = trie_from(&words);

    for word in words {
        assert!(trie.check_word_in_tree(word), "missing: {word}");
    }
}

#[test]
fn test_lookup_rejects_prefixes_and_extensions() {
    let trie = trie_from(&["cat", "catdog"]);

    // Interior path nodes are not words.
    assert!(!trie.check_word_in_tree("ca"));
    assert!(!trie.check_word_in_tree("catd"));
    // Paths past a terminal without an edge are not words either.
    assert!(!trie.check_word_in_tree("catdogs"));
    assert!(!trie.check_word_in_tree("dog"));
}

#[test]
fn test_empty_trie_has_no_members() {
    let trie = KuiTrie::new();

    assert!(trie.is_empty());
    assert!(!trie.check_word_in_tree("cat"));
    assert!(!trie.check_word_in_tree(""));
}

#[test]
fn test_empty_word_marks_root_terminal() {
    let mut trie = KuiTrie::new();
    trie.add_word("");

    assert!(!trie.is_empty());
    assert!(trie.check_word_in_tree(""));
    assert_eq!(trie.word_count(), 1);
    // The empty word still is not a concatenation of anything.
    assert!(!trie.is_concatenated(""));
}

#[test]
fn test_list_prefixes_orders_shortest_to_longest() {
    let trie = trie_from(&["a", "ab", "abc"]);

    assert_eq!(trie.list_prefixes("abcd"), vec!["a", "ab", "abc"]);
    // The word itself is reported when it is a complete trie word.
    assert_eq!(trie.list_prefixes("abc"), vec!["a", "ab", "abc"]);
}

#[test]
fn test_list_prefixes_stops_at_first_missing_edge() {
    let trie = trie_from(&["do", "dog"]);

    // After "do" the only edge is 'g'; the walk stops at 'd' and never
    // examines the rest of the input.
    assert_eq!(trie.list_prefixes("dodge"), vec!["do"]);
}

#[test]
fn test_list_prefixes_empty_without_matching_words() {
    let trie = trie_from(&["dog"]);

    assert!(trie.list_prefixes("cat").is_empty());
    assert!(trie.list_prefixes("").is_empty());
}

#[test]
fn test_list_prefixes_never_reports_empty_prefix() {
    let mut trie = KuiTrie::new();
    trie.add_word("");
    trie.add_word("ab");

    // A terminal root does not contribute the empty prefix.
    assert_eq!(trie.list_prefixes("ab"), vec!["ab"]);
}

#[test_case("catdog", true ; "two part join")]
#[test_case("dogcat", true ; "reversed two part join")]
#[test_case("catdogcat", true ; "three part join")]
#[test_case("cat", false ; "plain word")]
#[test_case("catdox", false ; "unknown tail")]
#[test_case("doge", false ; "extension of a word")]
#[test_case("", false ; "empty string")]
fn test_decomposition(word: &str, expected: bool) {
    let trie = trie_from(&["cat", "dog", "catdog", "dogcat", "catdogcat"]);

    assert_eq!(trie.is_concatenated(word), expected);
}

#[test]
fn test_whole_word_self_match_is_not_concatenation() {
    let trie = trie_from(&["solo"]);

    assert!(!trie.is_concatenated("solo"));
}

#[test]
fn test_repeated_word_is_concatenated() {
    let trie = trie_from(&["go", "gogo"]);

    assert!(trie.is_concatenated("gogo"));
}

#[test]
fn test_recursion_result_reflects_last_prefix_branch() {
    // "abbcc" decomposes as a+bb+cc, and the "a" branch finds that split.
    // The prefix loop then still runs the "ab" branch, whose suffix "bcc"
    // has no decomposition, and the last recursive result wins. Only a
    // direct two-part match ends the loop early.
    let trie = trie_from(&["a", "ab", "bb", "cc"]);

    assert!(trie.is_concatenated("abb"));
    assert!(!trie.is_concatenated("abbcc"));
}

#[test]
fn test_find_longest_ranks_by_length_then_insertion_order() {
    let trie = trie_from(&["cat", "dog", "catdog", "dogcat", "catdogcat"]);

    assert_eq!(
        trie.find_longest_concatenated_word(1),
        Some(vec!["catdogcat".to_string()])
    );
    // Within the six-character bucket, "catdog" was inserted before "dogcat".
    assert_eq!(
        trie.find_longest_concatenated_word(3),
        Some(vec![
            "catdogcat".to_string(),
            "catdog".to_string(),
            "dogcat".to_string(),
        ])
    );
}

#[test]
fn test_find_longest_is_all_or_nothing() {
    let trie = trie_from(&["a", "b", "ab"]);

    // Only "ab" qualifies; asking for two yields nothing rather than a
    // partial list.
    assert_eq!(
        trie.find_longest_concatenated_word(1),
        Some(vec!["ab".to_string()])
    );
    assert_eq!(trie.find_longest_concatenated_word(2), None);
}

#[test]
fn test_find_longest_zero_needs_no_candidates() {
    let empty = KuiTrie::new();
    let populated = trie_from(&["cat", "dog", "catdog"]);

    assert_eq!(empty.find_longest_concatenated_word(0), Some(vec![]));
    assert_eq!(populated.find_longest_concatenated_word(0), Some(vec![]));
}

#[test]
fn test_find_longest_on_empty_trie() {
    let trie = KuiTrie::new();

    assert_eq!(trie.find_longest_concatenated_word(1), None);
}

#[test]
fn test_total_counts_acceptance_list() {
    let trie = trie_from(&["cat", "dog", "catdog", "dogcat", "catdogcat"]);

    assert_eq!(trie.total_concatenated_words(), 3);
}

#[test]
fn test_duplicate_insertion_keeps_lookups_and_double_counts_totals() {
    let trie = trie_from(&["cat", "catcat", "catcat"]);

    assert!(trie.check_word_in_tree("catcat"));
    assert!(trie.is_concatenated("catcat"));
    // The registry keeps both entries, so counting sees the word twice.
    assert_eq!(trie.word_count(), 3);
    assert_eq!(trie.total_concatenated_words(), 2);
}

#[test]
fn test_ranking_uses_character_count_not_byte_length() {
    // "aaa" is three characters of three bytes; "éé" is two characters of
    // four bytes. Ranking by characters puts "aaa" first.
    let trie = trie_from(&["a", "aaa", "é", "éé"]);

    assert_eq!(
        trie.find_longest_concatenated_word(2),
        Some(vec!["aaa".to_string(), "éé".to_string()])
    );
}

#[test]
fn test_multibyte_words_decompose() {
    let trie = trie_from(&["über", "see", "übersee"]);

    assert!(trie.is_concatenated("übersee"));
    assert_eq!(
        trie.find_longest_concatenated_word(1),
        Some(vec!["übersee".to_string()])
    );
}
