use std::process;

use clap::Parser;
use ferris_dusort::args::Args;
use ferris_dusort::config::Config;

fn main() {
    let args = Args::parse();

    // bind arguments to a Config struct
    let config = Config::build(&args).unwrap_or_else(|err| {
        eprintln!("Could not parse arguments: {err}");
        process::exit(1);
    });

    if let Err(e) = config.init_logging() {
        eprintln!("Fatal Error: {e}");
        process::exit(1);
    }

    // begin program using Config
    if let Err(e) = ferris_dusort::run(config) {
        eprintln!("Fatal Error: {e}");
        process::exit(1);
    }
}
