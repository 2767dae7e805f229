//! perm-tot binary: argument handling and exit codes.

use clap::Parser;

use perm_tot::cli::Args;
use perm_tot::{exit_codes, logging, pipeline};

fn main() {
    logging::init();

    let args = Args::parse();

    let result = args.validate().and_then(|()| pipeline::run(&args));
    if let Err(err) = result {
        eprintln!("Error: {err}");
        if err.shows_help() {
            eprintln!();
            eprintln!("{}", Args::help_text());
        }
        std::process::exit(exit_codes::FAILURE);
    }

    std::process::exit(exit_codes::OK);
}
