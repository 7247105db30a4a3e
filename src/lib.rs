//! # autocomplete - Typo-Tolerant Sentence Completion
//!
//! Indexes a directory of text files so that a partial, possibly
//! misspelled word sequence can be completed with the rest of the
//! matching line(s).
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`index`] - Suffix-indexed word trie and the corpus it is built from
//! - [`query`] - Single-edit matching, span location and the completion coordinator
//! - [`repl`] - Interactive accumulating-prompt session
//! - [`output`] - Suggestion formatting (colored text or JSON)
//! - [`utils`] - Normalization, configuration and file helpers
//!
//! ## Quick Start
//!
//! ```no_run
//! use autocomplete::index::{DirectoryCorpus, DirectoryOptions, IndexConfig};
//! use autocomplete::query::CompletionCoordinator;
//! use std::path::Path;
//!
//! let corpus = DirectoryCorpus::open(Path::new("Dataset"), DirectoryOptions::default()).unwrap();
//! let coordinator = CompletionCoordinator::build(corpus, IndexConfig::default()).unwrap();
//!
//! for suggestion in coordinator.get_suggestions("how to lern") {
//!     println!("{} ({}:{})", suggestion.completed_sentence, suggestion.source_text, suggestion.offset);
//! }
//! ```
//!
//! ## How matching works
//!
//! Every suffix of every line is inserted into the trie, so completions
//! can begin mid-sentence. A search walks the prompt word by word,
//! accepting an indexed word one substitution, insertion or deletion
//! away when no exact word exists, and intersects the (file, line)
//! locations of each step. Candidate lines are then re-read and the
//! window matching the prompt (at most one edit in total) is scored.

pub mod index;
pub mod logging;
pub mod output;
pub mod query;
pub mod repl;
pub mod utils;
