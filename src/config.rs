use crate::args::Args;
use crate::errors::ViewerError;
use std::error::Error;
use std::fs::OpenOptions;
use std::path::PathBuf;

/// Configuration structure containing runtime settings.
///
/// # Fields
///
/// * `delimiter` - Character separating the size field from the name field of each input line
/// * `log_file` - Optional file receiving diagnostics, since stderr shares the screen with the listing
/// * `verbose` - Bool to raise the default log level from `warn` to `debug`
///
#[derive(Clone, Debug)]
pub struct Config {
    pub delimiter: char,
    pub log_file: Option<PathBuf>,
    pub verbose: bool,
}

impl Config {
    /// Builds a new Config instance from provided command line arguments.
    ///
    /// # Parameters
    ///
    /// * `args` - Reference to Args structure containing command line arguments
    ///
    /// # Returns
    ///
    /// * `Result<Config, Box<dyn Error>>` - New Config instance or error if construction fails
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// * The delimiter is a line break, which would leave every line without a name field
    ///
    pub fn build(args: &Args) -> Result<Config, Box<dyn Error>> {
        if args.delimiter == '\n' || args.delimiter == '\r' {
            return Err("the delimiter cannot be a line break".into());
        }

        Ok(Config {
            delimiter: args.delimiter,
            log_file: args.log_file.clone(),
            verbose: args.verbose,
        })
    }

    /// Installs the `env_logger` backend for the `log` macros.
    ///
    /// `RUST_LOG` takes precedence when set. Otherwise only warnings and errors are
    /// emitted, or everything down to `debug` in verbose mode. When a log file was
    /// configured it is opened in append mode and receives all output.
    pub fn init_logging(&self) -> Result<(), ViewerError> {
        let default_level = if self.verbose { "debug" } else { "warn" };
        let mut builder =
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level));

        match &self.log_file {
            Some(path) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|source| ViewerError::LogFile {
                        path: path.clone(),
                        source,
                    })?;
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            None => {
                builder.target(env_logger::Target::Stderr);
            }
        }

        builder.init();
        Ok(())
    }
}
