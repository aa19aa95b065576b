// Author: Dustin Pilgrim
// License: MIT

mod cli;
mod config;
mod logging;
mod paths;
mod session;

use clap::Parser;

use crate::cli::Args;

fn main() {
    let args = Args::parse();

    let log_path = args
        .log_file
        .clone()
        .unwrap_or_else(|| paths::default_log_path("regionsnap.log"));

    if let Err(e) = logging::init_logging(&log_path, args.verbose) {
        // logging should never block normal usage
        eprintln!("regionsnap: failed to init logging: {e}");
    }

    if let Err(e) = session::run(args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
