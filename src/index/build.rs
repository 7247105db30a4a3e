use crate::index::corpus::{Corpus, CorpusSummary};
use crate::index::trie::WordTrie;
use crate::utils::progress::spinner;
use anyhow::{Context, Result};
use std::time::{Duration, Instant};
use tracing::info;

/// Lines between spinner message updates
const PROGRESS_INTERVAL: usize = 10_000;

/// Outcome of populating a trie from a corpus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub files: usize,
    pub lines: usize,
    pub skipped: usize,
    pub elapsed: Duration,
}

impl BuildReport {
    fn new(summary: CorpusSummary, elapsed: Duration) -> Self {
        Self {
            files: summary.files,
            lines: summary.lines,
            skipped: summary.skipped,
            elapsed,
        }
    }
}

/// Insert every line of `corpus` into `trie`
pub fn build_trie<C>(corpus: &C, trie: &mut WordTrie, silent: bool) -> Result<BuildReport>
where
    C: Corpus + ?Sized,
{
    let started = Instant::now();
    let progress = spinner("Indexing lines...", silent);

    let mut seen = 0usize;
    let summary = corpus
        .visit(&mut |line| {
            trie.insert(line.text, line.file, line.line);
            seen += 1;
            if seen % PROGRESS_INTERVAL == 0 {
                if let Some(ref pb) = progress {
                    pb.set_message(format!("Indexed {} lines", seen));
                }
            }
        })
        .context("Failed to read corpus")?;

    let report = BuildReport::new(summary, started.elapsed());

    if let Some(pb) = progress {
        pb.finish_with_message(format!(
            "Indexed {} lines from {} files",
            report.lines, report.files
        ));
    }

    info!(
        files = report.files,
        lines = report.lines,
        skipped = report.skipped,
        elapsed_ms = report.elapsed.as_millis() as u64,
        "Index built"
    );

    Ok(report)
}
