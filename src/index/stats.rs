use crate::index::build::BuildReport;
use crate::index::trie::WordTrie;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

/// Display index statistics
pub fn show_stats<W: Write>(
    out: &mut W,
    root: &Path,
    trie: &WordTrie,
    report: &BuildReport,
) -> io::Result<()> {
    let stats = trie.stats();

    writeln!(out, "Index Statistics")?;
    writeln!(out, "================")?;
    writeln!(out)?;
    writeln!(out, "Dataset path:     {}", root.display())?;
    writeln!(out, "Files indexed:    {}", report.files)?;
    writeln!(out, "Files skipped:    {}", report.skipped)?;
    writeln!(out, "Lines read:       {}", report.lines)?;
    writeln!(out, "Build time:       {}", format_duration(report.elapsed))?;

    writeln!(out)?;
    writeln!(out, "Trie nodes:       {}", stats.node_count)?;
    writeln!(out, "Starting words:   {}", stats.root_words)?;
    writeln!(out, "Longest line:     {} words", stats.max_depth)?;
    writeln!(out, "Max matches:      {}", trie.max_matches())?;

    Ok(())
}

fn format_duration(elapsed: Duration) -> String {
    let millis = elapsed.as_millis();
    if millis >= 1000 {
        format!("{:.2}s", elapsed.as_secs_f64())
    } else {
        format!("{}ms", millis)
    }
}
