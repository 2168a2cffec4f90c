use std::io::Write;

use crate::error::Result;
use crate::letter_index::LetterIndex;
use crate::menu::Menu;

/// Writes a blank line followed by the menu title.
pub fn render_header<W: Write>(out: &mut W, menu: &Menu) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", menu.title())?;
    Ok(())
}

/// Writes one `<letter>. <name> - <description>` line per entry, with the
/// name left-justified to `column_width`.
pub fn render_entries<W: Write>(
    out: &mut W,
    index: &LetterIndex,
    column_width: usize,
) -> Result<()> {
    for (letter, entry) in index.iter() {
        writeln!(
            out,
            "{letter}. {:<column_width$} - {}",
            entry.name, entry.description
        )?;
    }

    Ok(())
}

/// Writes the header and entries of `menu`.
pub fn render_menu<W: Write>(out: &mut W, menu: &Menu) -> Result<()> {
    render_header(out, menu)?;
    render_entries(out, menu.index(), menu.column_width())
}
