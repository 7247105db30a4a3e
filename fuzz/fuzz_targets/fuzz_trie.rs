#![no_main]

use autocomplete::index::WordTrie;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (Vec<&str>, &str)| {
    // Any inserted line must be found again by querying it verbatim
    let (lines, query) = input;
    let mut trie = WordTrie::with_max_matches(usize::MAX);
    for (i, line) in lines.iter().enumerate() {
        trie.insert(line, "fuzz.txt", i as u32 + 1);
    }

    for (i, line) in lines.iter().enumerate() {
        if autocomplete::utils::split_words(line).is_empty() {
            continue;
        }
        let hits = trie.search(line);
        assert!(hits.iter().any(|hit| hit.line == i as u32 + 1));
    }

    let _ = trie.search(query);
});
