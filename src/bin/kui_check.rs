use lei_words_lib::data_structures::kui_trie::KuiTrie;

/// Run a basic check of trie insertion and membership.
fn check_trie_basic() -> bool {
    let mut trie = KuiTrie::new();

    // Insert and check
    trie.add_word("cat");
    trie.add_word("dog");

    let has_cat = trie.check_word_in_tree("cat");
    let has_dog = trie.check_word_in_tree("dog");
    let has_cow = trie.check_word_in_tree("cow");

    has_cat && has_dog && !has_cow && trie.word_count() == 2
}

/// Check the decomposition test over the canonical five-word list.
fn check_decomposition() -> bool {
    let mut trie = KuiTrie::new();
    for word in ["cat", "dog", "catdog", "dogcat", "catdogcat"] {
        trie.add_word(word);
    }

    // Joined words decompose
    if !trie.is_concatenated("catdog") || !trie.is_concatenated("dogcat") {
        return false;
    }
    if !trie.is_concatenated("catdogcat") {
        return false;
    }

    // Base words and unknown words do not
    if trie.is_concatenated("cat") || trie.is_concatenated("dog") {
        return false;
    }
    if trie.is_concatenated("doge") || trie.is_concatenated("catdox") {
        return false;
    }

    !trie.is_concatenated("")
}

/// Check ranking order and the all-or-nothing contract.
fn check_ranking() -> bool {
    let mut trie = KuiTrie::new();
    for word in ["cat", "dog", "catdog", "dogcat", "catdogcat"] {
        trie.add_word(word);
    }

    let top_two = trie.find_longest_concatenated_word(2);
    if top_two != Some(vec!["catdogcat".to_string(), "catdog".to_string()]) {
        println!("Unexpected ranking: {top_two:?}");
        return false;
    }

    if trie.total_concatenated_words() != 3 {
        return false;
    }

    // Asking for more than exist yields nothing, not a partial list
    if trie.find_longest_concatenated_word(4).is_some() {
        return false;
    }

    trie.find_longest_concatenated_word(0) == Some(Vec::new())
}

/// Check that multi-byte words decompose and rank by character count.
fn check_multibyte() -> bool {
    let mut trie = KuiTrie::new();
    for word in ["über", "see", "übersee"] {
        trie.add_word(word);
    }

    if !trie.is_concatenated("übersee") {
        return false;
    }

    trie.find_longest_concatenated_word(1) == Some(vec!["übersee".to_string()])
}

/// Main function to run the KuiTrie verification suite.
/// Reports success/failure for each check with appropriate output formatting.
fn main() {
    println!("Running Kui Trie Verification Checks");
    println!("====================================\n");

    let mut passed = 0;
    let mut failed = 0;

    // Check 1: Basic operations
    if check_trie_basic() {
        println!("✅ Basic operations: PASSED");
        passed += 1;
    } else {
        println!("❌ Basic operations: FAILED");
        failed += 1;
    }

    // Check 2: Decomposition
    if check_decomposition() {
        println!("✅ Decomposition: PASSED");
        passed += 1;
    } else {
        println!("❌ Decomposition: FAILED");
        failed += 1;
    }

    // Check 3: Ranking
    if check_ranking() {
        println!("✅ Ranking: PASSED");
        passed += 1;
    } else {
        println!("❌ Ranking: FAILED");
        failed += 1;
    }

    // Check 4: Multi-byte words
    if check_multibyte() {
        println!("✅ Multi-byte words: PASSED");
        passed += 1;
    } else {
        println!("❌ Multi-byte words: FAILED");
        failed += 1;
    }

    println!("\nCheck Results: {} passed, {} failed", passed, failed);
    if failed == 0 {
        println!("All checks passed! KuiTrie implementation is verified.");
    } else {
        println!("Some checks failed! Please check the implementation.");
        std::process::exit(1);
    }
}
