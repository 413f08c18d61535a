use std::io;

use unicode_width::UnicodeWidthChar;

use crate::record::Record;
use crate::traits::Surface;

pub const WAITING_LABEL: &str = "Waiting input...";
pub const FINISHED_LABEL: &str = "Finished";

/// Column multiple that tabs advance to when rows are laid out.
pub const TAB_WIDTH: usize = 8;

/// Returns the status line shown above the listing.
pub fn status_label(finished: bool) -> &'static str {
    if finished {
        FINISHED_LABEL
    } else {
        WAITING_LABEL
    }
}

/// Lays out the listing as the rows of a `cols` x `rows` grid.
///
/// Row 0 carries the status label and each following row one record, formatted as
/// `<size><tab><label>`. Records that do not fit below the status line are left out
/// and every row is clipped to `cols` characters after tab expansion.
///
/// # Examples
///
/// ```
/// use ferris_dusort::record::Record;
/// use ferris_dusort::render::format_rows;
///
/// let (record, _) = Record::from_fields("1.0M", "fileB");
/// let rows = format_rows([&record], true, 80, 24);
/// assert_eq!(rows, ["Finished", "1.0M    fileB"]);
///
/// let rows = format_rows(Vec::<&Record>::new(), false, 10, 1);
/// assert_eq!(rows, ["Waiting in"]);
/// ```
pub fn format_rows<'a, I>(entries: I, finished: bool, cols: usize, rows: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut lines = Vec::with_capacity(rows);
    if rows == 0 {
        return lines;
    }

    lines.push(layout_row(status_label(finished), cols));
    lines.extend(
        entries
            .into_iter()
            .take(rows - 1)
            .map(|record| layout_row(&record.to_string(), cols)),
    );
    lines
}

/// Expands tabs, masks other control characters and clips the result to `cols`
/// terminal columns.
///
/// Widths come from the Unicode East Asian Width tables, so a double-width glyph
/// counts as two columns and is dropped whole when only one column is left.
fn layout_row(text: &str, cols: usize) -> String {
    let mut row = String::with_capacity(cols.min(text.len() + TAB_WIDTH));
    let mut width = 0;

    for c in text.chars() {
        if width >= cols {
            break;
        }
        if c == '\t' {
            let stop = (width / TAB_WIDTH + 1) * TAB_WIDTH;
            while width < stop.min(cols) {
                row.push(' ');
                width += 1;
            }
            continue;
        }

        let (glyph, glyph_width) = if c.is_control() {
            ('?', 1)
        } else {
            (c, c.width().unwrap_or(0))
        };
        if width + glyph_width > cols {
            break;
        }
        row.push(glyph);
        width += glyph_width;
    }
    row
}

/// Repaints `surface` with the given records, then flushes.
///
/// Every row is overwritten in place and only the rows below the last one drawn
/// are blanked, so the screen is never cleared as a whole between frames.
/// Drawing reads nothing but its arguments and the surface size, so painting the
/// same records twice yields the same grid.
pub fn draw<'a, S, I>(surface: &mut S, entries: I, finished: bool) -> io::Result<()>
where
    S: Surface + ?Sized,
    I: IntoIterator<Item = &'a Record>,
{
    let (cols, rows) = surface.size();
    let lines = format_rows(entries, finished, cols as usize, rows as usize);

    for (row, line) in lines.iter().enumerate() {
        surface.put_line(row as u16, line)?;
    }
    if lines.len() < rows as usize {
        surface.clear_from(lines.len() as u16)?;
    }
    surface.flush()
}
