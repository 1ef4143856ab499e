//! Benchmarking support for the Lei Words analyzer.
//!
//! This module contains helpers for the criterion benches: deterministic
//! synthetic word lists, with or without built-in concatenations, so runs
//! are reproducible without a random number generator.

/// Alphabet used for synthetic words.
const ALPHABET: &[u8] = b"abcd";

/// Builds a deterministic list of `count` distinct base words.
///
/// Each word is the digit expansion of its index over the small alphabet,
/// so word lengths grow logarithmically with the list size.
pub fn synthetic_word_list(count: usize) -> Vec<String> {
    (0..count).map(word_for_index).collect()
}

/// Builds a word list where roughly a third of the entries are joins of two
/// base words, giving the decomposition and ranking benchmarks real matches
/// to find.
pub fn synthetic_word_list_with_joins(count: usize) -> Vec<String> {
    let mut words = synthetic_word_list(count);

    let joins: Vec<String> = words
        .iter()
        .zip(words.iter().rev())
        .take(count / 3)
        .map(|(a, b)| format!("{a}{b}"))
        .collect();
    words.extend(joins);

    words
}

fn word_for_index(index: usize) -> String {
    let mut value = index;
    let mut word = String::new();

    loop {
        word.push(ALPHABET[value % ALPHABET.len()] as char);
        value /= ALPHABET.len();
        if value == 0 {
            break;
        }
    }

    word
}
