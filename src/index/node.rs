use crate::index::types::FileId;
use ahash::AHashMap;

/// One word at a fixed depth of a suffix chain.
///
/// Children keep insertion order so that scans over them are
/// reproducible. Reads never create nodes; only [`TrieNode::child_or_insert`]
/// grows the tree.
#[derive(Debug, Default)]
pub struct TrieNode {
    word: Option<String>,
    children: Vec<TrieNode>,
    slots: AHashMap<String, usize>,
    locations: AHashMap<FileId, Vec<u32>>,
    /// Files in the order they were first recorded at this node
    file_order: Vec<FileId>,
}

impl TrieNode {
    pub fn root() -> Self {
        Self::default()
    }

    fn with_word(word: &str) -> Self {
        Self {
            word: Some(word.to_owned()),
            ..Self::default()
        }
    }

    /// The word this node represents; `None` for the root
    pub fn word(&self) -> Option<&str> {
        self.word.as_deref()
    }

    /// Exact child lookup
    pub fn child(&self, word: &str) -> Option<&TrieNode> {
        self.slots.get(word).map(|&slot| &self.children[slot])
    }

    pub fn has_child(&self, word: &str) -> bool {
        self.slots.contains_key(word)
    }

    /// Get the child for `word`, creating it if absent
    pub fn child_or_insert(&mut self, word: &str) -> &mut TrieNode {
        let slot = match self.slots.get(word) {
            Some(&slot) => slot,
            None => {
                let slot = self.children.len();
                self.children.push(TrieNode::with_word(word));
                self.slots.insert(word.to_owned(), slot);
                slot
            }
        };
        &mut self.children[slot]
    }

    /// Children in insertion order
    pub fn children(&self) -> impl Iterator<Item = &TrieNode> {
        self.children.iter()
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Record that the suffix ending here occurs at `line` of `file`
    pub fn add_location(&mut self, file: FileId, line: u32) {
        match self.locations.get_mut(&file) {
            Some(lines) => lines.push(line),
            None => {
                self.locations.insert(file, vec![line]);
                self.file_order.push(file);
            }
        }
    }

    /// Lines recorded for `file`, in insertion order
    pub fn lines(&self, file: FileId) -> &[u32] {
        self.locations.get(&file).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every (file, line) pair recorded here, grouped by file in first-seen order
    pub fn locations(&self) -> impl Iterator<Item = (FileId, u32)> + '_ {
        self.file_order
            .iter()
            .flat_map(move |&file| self.lines(file).iter().map(move |&line| (file, line)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_does_not_create() {
        let root = TrieNode::root();
        assert!(root.child("missing").is_none());
        assert!(!root.has_child("missing"));
        assert_eq!(root.child_count(), 0);
    }

    #[test]
    fn test_child_or_insert_reuses_existing() {
        let mut root = TrieNode::root();
        root.child_or_insert("how").add_location(FileId(0), 1);
        root.child_or_insert("how").add_location(FileId(0), 2);
        assert_eq!(root.child_count(), 1);
        assert_eq!(root.child("how").unwrap().lines(FileId(0)), &[1, 2]);
        assert_eq!(root.child("how").unwrap().word(), Some("how"));
        assert_eq!(root.word(), None);
    }

    #[test]
    fn test_children_keep_insertion_order() {
        let mut root = TrieNode::root();
        for w in ["zeta", "alpha", "mid"] {
            root.child_or_insert(w);
        }
        let words: Vec<_> = root.children().filter_map(TrieNode::word).collect();
        assert_eq!(words, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_locations_grouped_by_first_seen_file() {
        let mut node = TrieNode::root();
        node.add_location(FileId(2), 7);
        node.add_location(FileId(1), 3);
        node.add_location(FileId(2), 9);
        let locs: Vec<_> = node.locations().collect();
        assert_eq!(locs, vec![(FileId(2), 7), (FileId(2), 9), (FileId(1), 3)]);
        assert!(node.lines(FileId(5)).is_empty());
    }
}
