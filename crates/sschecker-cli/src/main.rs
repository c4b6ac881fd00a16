//! sschecker CLI - samplesheet validation.

mod check;
mod cli;
mod logging;

use clap::Parser;
use cli::Cli;
use logging::LogConfig;

fn main() {
    let cli = Cli::parse();
    logging::init_logging(&LogConfig::from_verbosity(cli.verbose));

    if let Err(e) = check::run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
