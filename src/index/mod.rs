pub mod build;
pub mod corpus;
pub mod node;
pub mod stats;
pub mod trie;
pub mod types;

pub use build::{BuildReport, build_trie};
pub use corpus::{Corpus, CorpusLine, DirectoryCorpus, DirectoryOptions, LineSource, MemoryCorpus};
pub use node::TrieNode;
pub use trie::WordTrie;
pub use types::*;
