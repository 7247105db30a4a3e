//! Suffix-indexed word trie
//!
//! Every suffix of every inserted line is stored as a chain of word
//! nodes, and each node on the chain records the (file, line) where
//! that suffix occurs. A query can therefore start anywhere inside a
//! previously seen line.
//!
//! Search walks the query word by word. An exact child is always
//! preferred; otherwise a child one edit away is accepted if the next
//! query word continues from it (or the word is the last one). Location
//! sets are intersected as the walk proceeds.

use crate::index::node::TrieNode;
use crate::index::types::{ChildSelection, FileId, IndexConfig, SearchHit, TrieStats};
use crate::query::matcher::StringMatcher;
use crate::utils::split_words;
use ahash::{AHashMap, AHashSet};
use std::cmp::Reverse;
use tracing::debug;

pub struct WordTrie {
    root: TrieNode,
    max_matches: usize,
    child_selection: ChildSelection,
    matcher: StringMatcher,
    files: Vec<String>,
    file_ids: AHashMap<String, FileId>,
    lines_inserted: usize,
    max_depth: usize,
}

impl Default for WordTrie {
    fn default() -> Self {
        Self::new(IndexConfig::default(), StringMatcher::default())
    }
}

impl WordTrie {
    pub fn new(config: IndexConfig, matcher: StringMatcher) -> Self {
        Self {
            root: TrieNode::root(),
            max_matches: config.max_matches,
            child_selection: config.child_selection,
            matcher,
            files: Vec::new(),
            file_ids: AHashMap::new(),
            lines_inserted: 0,
            max_depth: 0,
        }
    }

    /// Create an empty trie that returns at most `max_matches` hits per search
    pub fn with_max_matches(max_matches: usize) -> Self {
        Self::new(
            IndexConfig {
                max_matches,
                ..IndexConfig::default()
            },
            StringMatcher::default(),
        )
    }

    pub fn max_matches(&self) -> usize {
        self.max_matches
    }

    pub fn matcher(&self) -> &StringMatcher {
        &self.matcher
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.child_count() == 0
    }

    /// Path registered for an interned file id
    pub fn file_path(&self, id: FileId) -> Option<&str> {
        self.files.get(id.0 as usize).map(String::as_str)
    }

    fn intern_file(&mut self, file: &str) -> FileId {
        if let Some(&id) = self.file_ids.get(file) {
            return id;
        }
        let id = FileId(self.files.len() as u32);
        self.files.push(file.to_owned());
        self.file_ids.insert(file.to_owned(), id);
        id
    }

    /// Index `sentence` as found at `line` of `file`
    pub fn insert(&mut self, sentence: &str, file: &str, line: u32) {
        self.lines_inserted += 1;

        let words = split_words(sentence);
        if words.is_empty() {
            return;
        }

        let file_id = self.intern_file(file);
        self.max_depth = self.max_depth.max(words.len());

        for start in 0..words.len() {
            self.insert_suffix(&words[start..], file_id, line);
        }
    }

    fn insert_suffix(&mut self, words: &[String], file: FileId, line: u32) {
        let mut node = &mut self.root;
        for word in words {
            node = node.child_or_insert(word);
            node.add_location(file, line);
        }
    }

    /// Find the locations of lines containing `query`, tolerating one edit per word.
    ///
    /// Returns at most `max_matches` hits. An empty result means no match;
    /// it is never an error.
    pub fn search(&self, query: &str) -> Vec<SearchHit<'_>> {
        let words = split_words(query);
        let mut node = &self.root;
        let mut surviving: Option<Vec<(FileId, u32)>> = None;

        for (i, word) in words.iter().enumerate() {
            node = match node.child(word) {
                Some(child) => child,
                None => match self.typo_child(node, word, words.get(i + 1)) {
                    Some(child) => {
                        debug!(query_word = %word, indexed_word = ?child.word(), "accepted typo");
                        child
                    }
                    None => return Vec::new(),
                },
            };

            let current = match surviving.take() {
                None => unique_locations(node),
                Some(mut current) => {
                    let here: AHashSet<(FileId, u32)> = node.locations().collect();
                    current.retain(|loc| here.contains(loc));
                    current
                }
            };

            if current.is_empty() {
                return Vec::new();
            }
            surviving = Some(current);
        }

        surviving
            .unwrap_or_default()
            .into_iter()
            .take(self.max_matches)
            .filter_map(|(file, line)| {
                self.file_path(file).map(|file| SearchHit { file, line })
            })
            .collect()
    }

    /// Pick a child one edit away from `word` that the walk can continue through
    fn typo_child<'a>(
        &self,
        node: &'a TrieNode,
        word: &str,
        next: Option<&String>,
    ) -> Option<&'a TrieNode> {
        let mut candidates = node.children().filter(|child| {
            let Some(child_word) = child.word() else {
                return false;
            };
            self.matcher.classify(word, child_word).is_edit()
                && next.is_none_or(|next| child.has_child(next))
        });

        match self.child_selection {
            ChildSelection::FirstMatch => candidates.next(),
            ChildSelection::BestScore => candidates.min_by_key(|child| {
                Reverse(self.matcher.score(word, child.word().unwrap_or_default()))
            }),
        }
    }

    pub fn stats(&self) -> TrieStats {
        let mut node_count = 0;
        let mut stack: Vec<&TrieNode> = self.root.children().collect();
        while let Some(node) = stack.pop() {
            node_count += 1;
            stack.extend(node.children());
        }

        TrieStats {
            node_count,
            root_words: self.root.child_count(),
            file_count: self.files.len(),
            lines_inserted: self.lines_inserted,
            max_depth: self.max_depth,
        }
    }
}

/// Locations at `node` in recorded order, duplicates removed
fn unique_locations(node: &TrieNode) -> Vec<(FileId, u32)> {
    let mut seen = AHashSet::new();
    node.locations().filter(|loc| seen.insert(*loc)).collect()
}
