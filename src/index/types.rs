use serde::{Deserialize, Serialize};

/// Default number of results returned by a trie search
pub const DEFAULT_MAX_MATCHES: usize = 5;

/// Interned identifier for an indexed file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(pub u32);

/// A (file, line) location produced by a trie search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchHit<'a> {
    pub file: &'a str,
    pub line: u32,
}

/// A single completion suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoCompleteData {
    /// Source line from the start of the matched span to end of line
    pub completed_sentence: String,
    /// File the line was read from
    pub source_text: String,
    /// 1-based line number within `source_text`
    pub offset: u32,
    pub score: i32,
    /// Byte length of the matched prefix of `completed_sentence`
    #[serde(default)]
    pub match_len: usize,
}

impl AutoCompleteData {
    /// `completed_sentence` split into the matched prefix and the rest
    pub fn split_match(&self) -> (&str, &str) {
        let end = self.match_len.min(self.completed_sentence.len());
        match self.completed_sentence.split_at_checked(end) {
            Some(parts) => parts,
            None => ("", self.completed_sentence.as_str()),
        }
    }
}

/// How a search picks among children that are one edit away from a query word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChildSelection {
    /// Take the first candidate in insertion order
    #[default]
    FirstMatch,
    /// Take the highest-scoring candidate; ties go to the earliest inserted
    BestScore,
}

/// Construction-time settings for a [`WordTrie`](crate::index::WordTrie)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    pub max_matches: usize,
    pub child_selection: ChildSelection,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            max_matches: DEFAULT_MAX_MATCHES,
            child_selection: ChildSelection::default(),
        }
    }
}

/// Shape of a built trie
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrieStats {
    /// Nodes below the root
    pub node_count: usize,
    /// Distinct words that can start a query
    pub root_words: usize,
    pub file_count: usize,
    /// Calls to `insert`, including blank lines
    pub lines_inserted: usize,
    /// Longest indexed suffix, in words
    pub max_depth: usize,
}
