use regex::Regex;
use std::sync::LazyLock;

/// Anything that is neither a word character nor whitespace
static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("valid punctuation pattern"));

/// Normalize text for indexing and querying.
///
/// Lowercases, strips punctuation, collapses runs of whitespace into a
/// single space and trims both ends. Never fails: any input yields a
/// (possibly empty) normalized string.
pub fn normalize_text(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = PUNCTUATION.replace_all(&lowered, "");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize text and split it into words
pub fn split_words(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    PUNCTUATION
        .replace_all(&lowered, "")
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}
