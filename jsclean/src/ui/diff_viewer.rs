//! Unified diff output for `--diff`.
//!
//! Shows exactly which lines were dropped (red) and which were rewritten
//! (a red/green pair).

use std::io::{self, Write};

use diffy::{create_patch, Line as DiffLine};

use crate::ui::output_format::{styled, Style};

/// Writes a unified diff between `original` and `cleaned` to `writer`.
pub fn print_diff<W: Write>(
    original: &str,
    cleaned: &str,
    writer: &mut W,
    supports_color: bool,
) -> io::Result<()> {
    let patch = create_patch(original, cleaned);
    let header = |text: &str| styled(text, Style::DiffHeader, supports_color);

    writeln!(writer, "{}", header("--- Diff View ---"))?;

    if patch.hunks().is_empty() {
        writeln!(writer, "No changes detected.")?;
    }

    for hunk in patch.hunks() {
        let old = hunk.old_range();
        let new = hunk.new_range();
        writeln!(
            writer,
            "{}",
            header(&format!("@@ -{},{} +{},{} @@", old.start(), old.len(), new.start(), new.len()))
        )?;

        for line_change in hunk.lines() {
            let (prefix, text, style) = match line_change {
                DiffLine::Delete(s) => ("-", *s, Some(Style::DiffRemoved)),
                DiffLine::Insert(s) => ("+", *s, Some(Style::DiffAdded)),
                DiffLine::Context(s) => (" ", *s, None),
            };
            let body = format!("{}{}", prefix, text.trim_end_matches('\n'));
            match style {
                Some(style) => writeln!(writer, "{}", styled(&body, style, supports_color))?,
                None => writeln!(writer, "{}", body)?,
            }
        }
    }

    writeln!(writer, "{}", header("--- End Diff ---"))?;
    Ok(())
}
