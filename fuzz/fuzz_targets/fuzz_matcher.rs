#![no_main]

use autocomplete::query::{StringMatcher, Typo};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (&str, &str)| {
    // Classification must never panic and must be mirrored when the
    // arguments are swapped
    let (a, b) = input;
    let matcher = StringMatcher::new();
    let forward = matcher.classify(a, b);
    let backward = matcher.classify(b, a);

    match forward {
        Typo::Insertion { index } => assert_eq!(backward, Typo::Deletion { index }),
        Typo::Deletion { index } => assert_eq!(backward, Typo::Insertion { index }),
        Typo::Match | Typo::Invalid => assert_eq!(backward, forward),
        Typo::Substitution { index } => assert_eq!(backward, Typo::Substitution { index }),
    }

    let _ = matcher.score(a, b);
    let _ = autocomplete::utils::normalize_text(a);
});
