use clap::Parser;
use urlsift_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Initialize logging as early as possible; stdout stays clean for results.
    logging::init(cli.verbose);

    if let Err(err) = cli.run() {
        eprintln!("urlsift error: {:#}", err);
        std::process::exit(1);
    }
}
