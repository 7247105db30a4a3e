//! Corpus collaborators
//!
//! [`Corpus`] feeds raw lines into the index at build time and
//! [`LineSource`] fetches a single line back at query time. Both are
//! traits so the coordinator can run over a directory tree or over
//! in-memory text.

use crate::utils::{decode_text, is_binary, line_starts};
use anyhow::{Context, Result, bail};
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use lru::LruCache;
use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::SystemTime;
use tracing::warn;

/// One raw line of the corpus
#[derive(Debug, Clone, Copy)]
pub struct CorpusLine<'a> {
    pub file: &'a str,
    /// 1-based
    pub line: u32,
    /// Line text with surrounding whitespace trimmed, otherwise untouched
    pub text: &'a str,
}

/// Counts gathered while visiting a corpus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CorpusSummary {
    pub files: usize,
    pub lines: usize,
    /// Files that could not be read or were not text
    pub skipped: usize,
}

/// Source of lines to index
pub trait Corpus {
    /// Call `sink` once per line, file by file, in traversal order
    fn visit(&self, sink: &mut dyn FnMut(CorpusLine<'_>)) -> Result<CorpusSummary>;
}

/// Random access to a single line of an indexed file
pub trait LineSource {
    /// Trimmed text of `line` (1-based) in `file`, if it exists
    fn line(&self, file: &str, line: u32) -> Option<String>;
}

/// Options for walking a dataset directory
#[derive(Debug, Clone)]
pub struct DirectoryOptions {
    /// Glob patterns matched against paths relative to the root
    pub exclude: Vec<String>,
    pub max_file_size: u64,
    /// Number of files kept in memory for line lookups
    pub line_cache_size: usize,
}

impl Default for DirectoryOptions {
    fn default() -> Self {
        Self {
            exclude: Vec::new(),
            max_file_size: 10 * 1024 * 1024,
            line_cache_size: 64,
        }
    }
}

/// Decoded file text plus the byte offset of every line
struct FileLines {
    text: String,
    starts: Vec<usize>,
    /// Size and modification time the text was read at
    len: u64,
    modified: Option<SystemTime>,
}

impl FileLines {
    fn new(text: String, len: u64, modified: Option<SystemTime>) -> Self {
        let starts = line_starts(&text);
        Self {
            text,
            starts,
            len,
            modified,
        }
    }

    fn is_current(&self, metadata: &fs::Metadata) -> bool {
        self.len == metadata.len() && self.modified == metadata.modified().ok()
    }

    fn line(&self, line: u32) -> Option<&str> {
        let index = (line as usize).checked_sub(1)?;
        let start = *self.starts.get(index)?;
        let end = self
            .starts
            .get(index + 1)
            .copied()
            .unwrap_or(self.text.len());
        Some(self.text[start..end].trim())
    }
}

/// Every file under a root directory, walked depth-first
pub struct DirectoryCorpus {
    root: PathBuf,
    exclude: GlobSet,
    max_file_size: u64,
    cache: Mutex<LruCache<String, Arc<FileLines>>>,
}

impl DirectoryCorpus {
    pub fn open(root: &Path, options: DirectoryOptions) -> Result<Self> {
        if !root.is_dir() {
            bail!("Dataset directory not found: {}", root.display());
        }

        let mut builder = GlobSetBuilder::new();
        for pattern in &options.exclude {
            let glob = Glob::new(pattern)
                .with_context(|| format!("Invalid exclude pattern: {}", pattern))?;
            builder.add(glob);
        }
        let exclude = builder.build().context("Failed to build exclude patterns")?;

        let capacity = NonZeroUsize::new(options.line_cache_size).unwrap_or(NonZeroUsize::MIN);

        Ok(Self {
            root: root.to_path_buf(),
            exclude,
            max_file_size: options.max_file_size,
            cache: Mutex::new(LruCache::new(capacity)),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Files to index, in depth-first order
    pub fn files(&self) -> Vec<PathBuf> {
        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(|entry| entry.file_name() != ".git")
            .build();

        walker
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    warn!(error = %err, "Skipping unreadable directory entry");
                    None
                }
            })
            .filter(|entry| entry.file_type().is_some_and(|t| t.is_file()))
            .map(|entry| entry.into_path())
            .filter(|path| {
                let rel = path.strip_prefix(&self.root).unwrap_or(path);
                !self.exclude.is_match(rel)
            })
            .collect()
    }

    /// Read and decode a file, or `None` if it should not be indexed
    fn read_text(&self, path: &Path) -> Option<String> {
        let content = match fs::read(path) {
            Ok(content) => content,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "Failed to read file");
                return None;
            }
        };

        if content.len() as u64 > self.max_file_size {
            warn!(path = %path.display(), size = content.len(), "Skipping oversized file");
            return None;
        }

        if is_binary(&content) {
            warn!(path = %path.display(), "Skipping binary file");
            return None;
        }

        Some(decode_text(content))
    }

    /// Lines of `file`, from the cache unless the file changed since it was read
    fn load(&self, file: &str) -> Option<Arc<FileLines>> {
        let metadata = match fs::metadata(file) {
            Ok(metadata) => metadata,
            Err(err) => {
                warn!(path = %file, error = %err, "Failed to stat file");
                return None;
            }
        };

        if let Ok(mut cache) = self.cache.lock() {
            match cache.get(file) {
                Some(lines) if lines.is_current(&metadata) => return Some(Arc::clone(lines)),
                Some(_) => {
                    cache.pop(file);
                }
                None => {}
            }
        }

        let content = match fs::read(file) {
            Ok(content) => content,
            Err(err) => {
                warn!(path = %file, error = %err, "Failed to re-read file");
                return None;
            }
        };
        let lines = Arc::new(FileLines::new(
            decode_text(content),
            metadata.len(),
            metadata.modified().ok(),
        ));

        if let Ok(mut cache) = self.cache.lock() {
            cache.put(file.to_owned(), Arc::clone(&lines));
        }
        Some(lines)
    }
}

impl Corpus for DirectoryCorpus {
    fn visit(&self, sink: &mut dyn FnMut(CorpusLine<'_>)) -> Result<CorpusSummary> {
        let mut summary = CorpusSummary::default();

        for path in self.files() {
            let Some(text) = self.read_text(&path) else {
                summary.skipped += 1;
                continue;
            };

            let file = path.to_string_lossy();
            for (index, line) in text.lines().enumerate() {
                sink(CorpusLine {
                    file: &file,
                    line: index as u32 + 1,
                    text: line.trim(),
                });
                summary.lines += 1;
            }
            summary.files += 1;
        }

        Ok(summary)
    }
}

impl LineSource for DirectoryCorpus {
    fn line(&self, file: &str, line: u32) -> Option<String> {
        let lines = self.load(file)?;
        lines.line(line).map(str::to_owned)
    }
}

/// Text held in memory, one entry per named file
#[derive(Debug, Clone, Default)]
pub struct MemoryCorpus {
    files: Vec<(String, Vec<String>)>,
}

impl MemoryCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file; `content` is split into lines
    pub fn add_file(&mut self, name: impl Into<String>, content: &str) -> &mut Self {
        let lines = content.lines().map(str::to_owned).collect();
        self.files.push((name.into(), lines));
        self
    }

    pub fn with_file(mut self, name: impl Into<String>, content: &str) -> Self {
        self.add_file(name, content);
        self
    }
}

impl Corpus for MemoryCorpus {
    fn visit(&self, sink: &mut dyn FnMut(CorpusLine<'_>)) -> Result<CorpusSummary> {
        let mut summary = CorpusSummary::default();
        for (name, lines) in &self.files {
            for (index, text) in lines.iter().enumerate() {
                sink(CorpusLine {
                    file: name,
                    line: index as u32 + 1,
                    text: text.trim(),
                });
                summary.lines += 1;
            }
            summary.files += 1;
        }
        Ok(summary)
    }
}

impl LineSource for MemoryCorpus {
    fn line(&self, file: &str, line: u32) -> Option<String> {
        let (_, lines) = self.files.iter().find(|(name, _)| name == file)?;
        let index = (line as usize).checked_sub(1)?;
        lines.get(index).map(|text| text.trim().to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(corpus: &dyn Corpus) -> (Vec<(String, u32, String)>, CorpusSummary) {
        let mut lines = Vec::new();
        let summary = corpus
            .visit(&mut |l| lines.push((l.file.to_string(), l.line, l.text.to_string())))
            .unwrap();
        (lines, summary)
    }

    #[test]
    fn test_memory_corpus_visit() {
        let corpus = MemoryCorpus::new()
            .with_file("a.txt", "  first line \nsecond")
            .with_file("b.txt", "only");
        let (lines, summary) = collect(&corpus);
        assert_eq!(
            lines,
            vec![
                ("a.txt".to_string(), 1, "first line".to_string()),
                ("a.txt".to_string(), 2, "second".to_string()),
                ("b.txt".to_string(), 1, "only".to_string()),
            ]
        );
        assert_eq!(summary, CorpusSummary { files: 2, lines: 3, skipped: 0 });
    }

    #[test]
    fn test_memory_line_lookup() {
        let corpus = MemoryCorpus::new().with_file("a.txt", "one\n  two  \n");
        assert_eq!(corpus.line("a.txt", 2).as_deref(), Some("two"));
        assert_eq!(corpus.line("a.txt", 0), None);
        assert_eq!(corpus.line("a.txt", 3), None);
        assert_eq!(corpus.line("missing.txt", 1), None);
    }

    #[test]
    fn test_file_lines() {
        let lines = FileLines::new("alpha\r\n beta \n\ngamma".to_string(), 0, None);
        assert_eq!(lines.line(1), Some("alpha"));
        assert_eq!(lines.line(2), Some("beta"));
        assert_eq!(lines.line(3), Some(""));
        assert_eq!(lines.line(4), Some("gamma"));
        assert_eq!(lines.line(5), None);
        assert_eq!(lines.line(0), None);
    }

    #[test]
    fn test_directory_corpus_walk_and_lookup() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("sub")).unwrap();
        fs::write(root.join("b.txt"), "bravo line\n").unwrap();
        fs::write(root.join("a.txt"), "alpha one\nalpha two\n").unwrap();
        fs::write(root.join("sub").join("c.txt"), "charlie\n").unwrap();
        fs::write(root.join("blob.bin"), [0u8; 32]).unwrap();
        fs::write(root.join("notes.skip"), "skipped\n").unwrap();

        let options = DirectoryOptions {
            exclude: vec!["*.skip".to_string()],
            ..DirectoryOptions::default()
        };
        let corpus = DirectoryCorpus::open(root, options).unwrap();
        let (lines, summary) = collect(&corpus);

        let texts: Vec<_> = lines.iter().map(|(_, _, t)| t.as_str()).collect();
        assert_eq!(texts, vec!["alpha one", "alpha two", "bravo line", "charlie"]);
        assert_eq!(summary, CorpusSummary { files: 3, lines: 4, skipped: 1 });

        let (file, line, _) = &lines[1];
        assert_eq!(corpus.line(file, *line).as_deref(), Some("alpha two"));
        // Second lookup is served from the cache
        assert_eq!(corpus.line(file, 1).as_deref(), Some("alpha one"));
    }

    #[test]
    fn test_text_with_control_bytes_is_indexed() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("a.txt"), "hi\x0cyo\n").unwrap();
        fs::write(root.join("b.txt"), "go\tfar\x1b\n").unwrap();

        let corpus = DirectoryCorpus::open(root, DirectoryOptions::default()).unwrap();
        let (lines, summary) = collect(&corpus);
        assert_eq!(summary, CorpusSummary { files: 2, lines: 2, skipped: 0 });
        assert_eq!(lines[0].2, "hi\x0cyo");
    }

    #[test]
    fn test_cached_lines_reload_after_change() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        fs::write(&path, "the quick fox\n").unwrap();

        let corpus = DirectoryCorpus::open(dir.path(), DirectoryOptions::default()).unwrap();
        let file = path.to_string_lossy();
        assert_eq!(corpus.line(&file, 1).as_deref(), Some("the quick fox"));

        fs::write(&path, "something else entirely\n").unwrap();
        assert_eq!(corpus.line(&file, 1).as_deref(), Some("something else entirely"));

        fs::remove_file(&path).unwrap();
        assert_eq!(corpus.line(&file, 1), None);
    }

    #[test]
    fn test_directory_corpus_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(DirectoryCorpus::open(&missing, DirectoryOptions::default()).is_err());
    }

    #[test]
    fn test_invalid_exclude_pattern() {
        let dir = tempfile::tempdir().unwrap();
        let options = DirectoryOptions {
            exclude: vec!["[".to_string()],
            ..DirectoryOptions::default()
        };
        assert!(DirectoryCorpus::open(dir.path(), options).is_err());
    }
}
