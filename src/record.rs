use std::fmt;

use crate::errors::{LineError, SizeError};
use crate::size::parse_size;

/// One ranked entry: a name, the size text it arrived with, and that size in bytes.
///
/// `display_size` is kept verbatim so the listing shows exactly what the upstream
/// tool printed. `magnitude` is the only thing ordering looks at.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub label: String,
    pub display_size: String,
    pub magnitude: f64,
}

impl Record {
    /// Builds a record from a size field and a label.
    ///
    /// A record is produced even when the size does not parse: its magnitude is
    /// then zero and the parse error is handed back for the caller to report.
    ///
    /// # Examples
    ///
    /// ```
    /// use ferris_dusort::record::Record;
    ///
    /// let (record, err) = Record::from_fields("4.0K", "src");
    /// assert_eq!(record.magnitude, 4096.0);
    /// assert!(err.is_none());
    ///
    /// let (record, err) = Record::from_fields("abcK", "broken");
    /// assert_eq!(record.magnitude, 0.0);
    /// assert_eq!(record.display_size, "abcK");
    /// assert!(err.is_some());
    /// ```
    pub fn from_fields(size: &str, label: &str) -> (Record, Option<SizeError>) {
        let (magnitude, error) = match parse_size(size) {
            Ok(magnitude) => (magnitude, None),
            Err(e) => (0.0, Some(e)),
        };
        let record = Record {
            label: label.to_string(),
            display_size: size.to_string(),
            magnitude,
        };
        (record, error)
    }
}

impl fmt::Display for Record {
    /// Formats the record the way it is listed: `<size><tab><label>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.display_size, self.label)
    }
}

/// Splits one input line into a record.
///
/// The line is split at the first `delimiter`; everything after it is the label,
/// so names that themselves contain the delimiter survive intact. A trailing
/// `\r` is dropped.
///
/// # Errors
///
/// Returns a [`LineError`] for blank lines and lines without the delimiter. A
/// size that fails to parse is not an error here; it comes back alongside the record.
///
/// # Examples
///
/// ```
/// use ferris_dusort::record::parse_line;
///
/// let (record, _) = parse_line("1.0M\tdocs", '\t').unwrap();
/// assert_eq!(record.label, "docs");
/// assert_eq!(record.to_string(), "1.0M\tdocs");
///
/// assert!(parse_line("no delimiter here", '\t').is_err());
/// ```
pub fn parse_line(line: &str, delimiter: char) -> Result<(Record, Option<SizeError>), LineError> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.trim().is_empty() {
        return Err(LineError::Empty);
    }

    let (size, label) = line
        .split_once(delimiter)
        .ok_or_else(|| LineError::MissingDelimiter {
            delimiter,
            line: line.to_string(),
        })?;

    Ok(Record::from_fields(size, label))
}
