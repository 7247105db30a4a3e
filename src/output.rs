//! Output formatting for completion suggestions

use crate::index::types::AutoCompleteData;
use std::io::{self, Write};
use termcolor::{Color, ColorSpec, WriteColor};

/// Print a numbered list of suggestions
pub fn print_suggestions<W: WriteColor>(out: &mut W, suggestions: &[AutoCompleteData]) -> io::Result<()> {
    if suggestions.is_empty() {
        writeln!(out)?;
        writeln!(out, "No suggestions available.")?;
        return Ok(());
    }

    writeln!(out)?;
    out.set_color(ColorSpec::new().set_bold(true))?;
    writeln!(out, "Auto-complete suggestions:")?;
    out.reset()?;

    for (i, suggestion) in suggestions.iter().enumerate() {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(out, "{}.", i + 1)?;
        out.reset()?;
        let (matched, rest) = suggestion.split_match();
        write!(out, " ")?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true))?;
        write!(out, "{}", matched)?;
        out.reset()?;
        write!(out, "{}", rest)?;

        // Source location and score, dimmed
        out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_dimmed(true))?;
        write!(out, "  ({}:{}", suggestion.source_text, suggestion.offset)?;
        out.reset()?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_dimmed(true))?;
        write!(out, " score {}", suggestion.score)?;
        out.reset()?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_dimmed(true))?;
        writeln!(out, ")")?;
        out.reset()?;
    }

    Ok(())
}

/// Print suggestions as a JSON array
pub fn print_json<W: Write>(out: &mut W, suggestions: &[AutoCompleteData]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, suggestions)?;
    writeln!(out)
}
