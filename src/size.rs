use crate::errors::SizeError;

/// Unit suffixes understood by [`parse_size`], in ascending order.
///
/// The suffix at index `i` scales the number by `1024^(i + 1)`, so `K` is 1024
/// and `Y` is 1024^8. Suffixes are case-sensitive, as `du -h` prints them.
pub const UNIT_SUFFIXES: &[u8; 8] = b"KMGTPEZY";

/// Returns the multiplier for a unit suffix, or `None` if `unit` is not one.
///
/// # Examples
///
/// ```
/// use ferris_dusort::size::unit_multiplier;
/// assert_eq!(unit_multiplier('K'), Some(1024.0));
/// assert_eq!(unit_multiplier('M'), Some(1024.0 * 1024.0));
/// assert_eq!(unit_multiplier('k'), None);
/// ```
pub fn unit_multiplier(unit: char) -> Option<f64> {
    if !unit.is_ascii() {
        return None;
    }
    UNIT_SUFFIXES
        .iter()
        .position(|&u| u == unit as u8)
        .map(|i| 1024_f64.powi(i as i32 + 1))
}

/// Parses a human-readable size such as `4.0K`, `1.5G` or `512` into bytes.
///
/// Leading spaces are stripped. If the last character is a unit suffix the rest is
/// parsed as a float and scaled; otherwise the whole string is a plain byte count.
///
/// # Errors
///
/// * [`SizeError::Empty`] if nothing remains after stripping leading spaces
/// * [`SizeError::Invalid`] if the numeric part is not a float, including a lone unit letter
/// * [`SizeError::NotANumber`] if the numeric part is NaN
///
/// # Examples
///
/// ```
/// use ferris_dusort::size::parse_size;
/// assert_eq!(parse_size("1K"), Ok(1024.0));
/// assert_eq!(parse_size(" 512"), Ok(512.0));
/// assert!(parse_size("K").is_err());
/// ```
pub fn parse_size(text: &str) -> Result<f64, SizeError> {
    let trimmed = text.trim_start_matches(' ');
    let last = trimmed.chars().next_back().ok_or(SizeError::Empty)?;

    let (number, multiplier) = match unit_multiplier(last) {
        Some(multiplier) => (&trimmed[..trimmed.len() - last.len_utf8()], multiplier),
        None => (trimmed, 1.0),
    };

    let value: f64 = number.parse().map_err(|source| SizeError::Invalid {
        text: text.to_string(),
        source,
    })?;
    if value.is_nan() {
        return Err(SizeError::NotANumber(text.to_string()));
    }

    Ok(value * multiplier)
}
