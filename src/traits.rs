use std::io;

/// A bounded grid of text rows that the listing is painted onto.
///
/// The terminal implements this with crossterm; tests use an in-memory grid.
/// Callers are expected to clip rows to [`Surface::size`] before handing them over.
///
/// # Examples
///
/// ```
/// use ferris_dusort::traits::Surface;
/// use std::io;
///
/// struct Lines {
///     rows: Vec<String>,
/// }
///
/// impl Surface for Lines {
///     fn size(&self) -> (u16, u16) {
///         (80, 24)
///     }
///
///     fn clear_from(&mut self, row: u16) -> io::Result<()> {
///         self.rows.truncate(row as usize);
///         Ok(())
///     }
///
///     fn put_line(&mut self, row: u16, text: &str) -> io::Result<()> {
///         let row = row as usize;
///         if self.rows.len() <= row {
///             self.rows.resize(row + 1, String::new());
///         }
///         self.rows[row] = text.to_string();
///         Ok(())
///     }
///
///     fn flush(&mut self) -> io::Result<()> {
///         Ok(())
///     }
/// }
///
/// let mut lines = Lines { rows: Vec::new() };
/// lines.put_line(0, "Waiting input...").unwrap();
/// lines.put_line(1, "4.0K\tsrc").unwrap();
/// lines.put_line(0, "Finished").unwrap();
/// lines.clear_from(1).unwrap();
/// assert_eq!(lines.rows, ["Finished"]);
/// ```
pub trait Surface {
    /// Returns the grid dimensions as `(columns, rows)`.
    fn size(&self) -> (u16, u16);

    /// Blanks `row` and every row below it.
    fn clear_from(&mut self, row: u16) -> io::Result<()>;

    /// Replaces the contents of `row` with `text`, blanking whatever followed it.
    fn put_line(&mut self, row: u16, text: &str) -> io::Result<()>;

    /// Makes everything written since the last flush visible.
    fn flush(&mut self) -> io::Result<()>;
}
