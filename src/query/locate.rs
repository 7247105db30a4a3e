use crate::query::matcher::{StringMatcher, Typo};
use crate::utils::normalize_text;

/// Region of a raw line that lines up with a prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSpan {
    /// Byte offset of the first matched word
    pub start: usize,
    /// Byte offset just past the last matched word
    pub end: usize,
    /// The matched words, normalized
    pub words: Vec<String>,
}

/// A whitespace-delimited token of a raw line
struct Token {
    start: usize,
    end: usize,
    word: String,
}

/// Split a raw line into tokens whose normalized form is non-empty
fn tokenize(line: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut start = None;

    for (i, ch) in line.char_indices() {
        match (ch.is_whitespace(), start) {
            (true, Some(from)) => {
                push_token(line, from, i, &mut tokens);
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }
    if let Some(from) = start {
        push_token(line, from, line.len(), &mut tokens);
    }

    tokens
}

fn push_token(line: &str, start: usize, end: usize, tokens: &mut Vec<Token>) {
    let word = normalize_text(&line[start..end]);
    if !word.is_empty() {
        tokens.push(Token { start, end, word });
    }
}

/// Find the first window of `line` that matches `prompt_words` with at most one edit.
///
/// Every aligned (line word, prompt word) pair must be identical or one
/// edit apart, and only one pair in the whole window may be an edit.
pub fn find_match_span(
    line: &str,
    prompt_words: &[String],
    matcher: &StringMatcher,
) -> Option<MatchSpan> {
    if prompt_words.is_empty() {
        return None;
    }

    let tokens = tokenize(line);
    if tokens.len() < prompt_words.len() {
        return None;
    }

    tokens
        .windows(prompt_words.len())
        .find(|window| window_matches(window, prompt_words, matcher))
        .map(|window| MatchSpan {
            start: window[0].start,
            end: window[window.len() - 1].end,
            words: window.iter().map(|t| t.word.clone()).collect(),
        })
}

fn window_matches(window: &[Token], prompt_words: &[String], matcher: &StringMatcher) -> bool {
    let mut typo_used = false;

    for (token, prompt_word) in window.iter().zip(prompt_words) {
        let typo = matcher.classify(&token.word, prompt_word);
        if typo.is_edit() {
            if typo_used {
                return false;
            }
            typo_used = true;
        } else if typo != Typo::Match {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::split_words;

    fn span(line: &str, prompt: &str) -> Option<(usize, usize)> {
        find_match_span(line, &split_words(prompt), &StringMatcher::new()).map(|s| (s.start, s.end))
    }

    #[test]
    fn test_exact_span() {
        let line = "how to learn python";
        assert_eq!(span(line, "how to"), Some((0, 6)));
        assert_eq!(span(line, "learn python"), Some((7, 19)));
    }

    #[test]
    fn test_span_with_one_typo() {
        assert_eq!(span("how to learn python", "to lern"), Some((4, 12)));
    }

    #[test]
    fn test_one_edit_across_whole_window() {
        // Two words each one edit away is two edits in total
        assert_eq!(span("how to learn python", "hoe to lern"), None);
    }

    #[test]
    fn test_first_window_wins() {
        let line = "go to bed, then go to work";
        assert_eq!(span(line, "go to"), Some((0, 5)));
    }

    #[test]
    fn test_case_and_punctuation_in_line() {
        let line = "  Hello, World! again";
        let found = find_match_span(line, &split_words("hello world"), &StringMatcher::new()).unwrap();
        assert_eq!(&line[found.start..found.end], "Hello, World!");
        assert_eq!(found.words, vec!["hello", "world"]);
    }

    #[test]
    fn test_punctuation_only_tokens_are_skipped() {
        let line = "alpha - beta";
        assert_eq!(span(line, "alpha beta"), Some((0, 12)));
    }

    #[test]
    fn test_no_span() {
        assert_eq!(span("short", "much longer prompt"), None);
        assert_eq!(span("how to learn", "unrelated"), None);
        assert_eq!(span("how to learn", ""), None);
        assert_eq!(span("", "anything"), None);
    }

    #[test]
    fn test_multibyte_offsets() {
        let line = "le café noir";
        let found = find_match_span(line, &split_words("cafe noir"), &StringMatcher::new()).unwrap();
        assert_eq!(&line[found.start..], "café noir");
    }
}
