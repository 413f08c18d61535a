use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// (optional) Character separating the size from the name, defaults to a tab
    #[arg(short = 'd', long = "delimiter", default_value_t = '\t')]
    pub delimiter: char,

    /// (optional) Path to a file receiving diagnostics instead of stderr
    #[arg(short = 'l', long = "log-file")]
    pub log_file: Option<PathBuf>,

    #[arg(short, long)]
    pub verbose: bool,
}
