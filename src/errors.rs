use std::io;
use std::num::ParseFloatError;
use std::path::PathBuf;
use thiserror::Error;

/// Error produced when the size field of a line cannot be turned into a magnitude.
///
/// These are per-record faults: the record is still listed, with a magnitude of zero.
///
/// # Examples
/// ```
/// use ferris_dusort::size::parse_size;
/// use ferris_dusort::errors::SizeError;
///
/// assert_eq!(parse_size("   "), Err(SizeError::Empty));
/// assert!(matches!(parse_size("abcK"), Err(SizeError::Invalid { .. })));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SizeError {
    /// Nothing was left once leading spaces were stripped.
    #[error("empty size field")]
    Empty,

    /// The numeric part did not parse as a float.
    #[error("invalid size {text:?}: {source}")]
    Invalid {
        text: String,
        #[source]
        source: ParseFloatError,
    },

    /// The numeric part parsed as NaN, which has no place in a ranking.
    #[error("size {0:?} is not a number")]
    NotANumber(String),
}

/// Error for an input line that cannot be split into a size and a name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("empty line")]
    Empty,

    #[error("missing delimiter {delimiter:?} in line {line:?}")]
    MissingDelimiter { delimiter: char, line: String },
}

/// Error type representing environment and setup failures.
///
/// Unlike [`SizeError`] and [`LineError`], these abort the program: they are
/// reported once by `main` and the process exits with a non-zero status.
#[derive(Debug, Error)]
pub enum ViewerError {
    /// Standard input is an interactive terminal rather than a pipe or file.
    #[error("stdin is not a pipe. please use `du -sh /path/to/dir/* | ferris-dusort`")]
    NotPiped,

    /// Raw mode or the alternate screen could not be set up.
    #[error("failed to initialize terminal: {0}")]
    Terminal(#[source] io::Error),

    /// The configured log file could not be opened.
    #[error("could not open log file {}: {source}", .path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Represents underlying I/O errors, such as failing to poll terminal events.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
