//! Completion coordinator
//!
//! Builds the trie from a corpus, then turns raw (file, line) hits into
//! suggestions: each hit's line is fetched back from the source, the
//! part of the line that lines up with the prompt is located, and the
//! suggestion is everything from there to the end of the line.

use crate::index::build::{BuildReport, build_trie};
use crate::index::corpus::{Corpus, LineSource};
use crate::index::trie::WordTrie;
use crate::index::types::{AutoCompleteData, IndexConfig};
use crate::query::locate::find_match_span;
use crate::query::matcher::StringMatcher;
use crate::utils::split_words;
use anyhow::Result;
use tracing::{debug, warn};

pub struct CompletionCoordinator<S> {
    source: S,
    config: IndexConfig,
    trie: WordTrie,
    report: BuildReport,
}

impl<S: Corpus + LineSource> CompletionCoordinator<S> {
    /// Index every line of `source`; the coordinator is usable once this returns
    pub fn build(source: S, config: IndexConfig) -> Result<Self> {
        Self::build_with_progress(source, config, true)
    }

    /// Like [`build`](Self::build), optionally showing a progress spinner
    pub fn build_with_progress(source: S, config: IndexConfig, silent: bool) -> Result<Self> {
        let mut trie = WordTrie::new(config.clone(), StringMatcher::default());
        let report = build_trie(&source, &mut trie, silent)?;
        Ok(Self {
            source,
            config,
            trie,
            report,
        })
    }

    /// Discard the index and build it again from the source
    pub fn rebuild(&mut self) -> Result<&BuildReport> {
        let mut trie = WordTrie::new(self.config.clone(), StringMatcher::default());
        self.report = build_trie(&self.source, &mut trie, true)?;
        self.trie = trie;
        Ok(&self.report)
    }

    pub fn trie(&self) -> &WordTrie {
        &self.trie
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn report(&self) -> &BuildReport {
        &self.report
    }

    /// Completion suggestions for `prompt`, in the order the trie found them
    pub fn get_suggestions(&self, prompt: &str) -> Vec<AutoCompleteData> {
        let prompt_words = split_words(prompt);
        if prompt_words.is_empty() {
            return Vec::new();
        }

        let normalized_prompt = prompt_words.join(" ");
        let matcher = self.trie.matcher();
        let hits = self.trie.search(prompt);
        debug!(prompt = %normalized_prompt, hits = hits.len(), "trie search");

        hits.into_iter()
            .filter_map(|hit| {
                let Some(line) = self.source.line(hit.file, hit.line) else {
                    warn!(file = hit.file, line = hit.line, "Indexed line is no longer readable");
                    return None;
                };

                let span = find_match_span(&line, &prompt_words, matcher)?;
                let matched = span.words.join(" ");

                Some(AutoCompleteData {
                    completed_sentence: line[span.start..].to_string(),
                    source_text: hit.file.to_string(),
                    offset: hit.line,
                    score: matcher.score(&matched, &normalized_prompt),
                    match_len: span.end - span.start,
                })
            })
            .collect()
    }
}
