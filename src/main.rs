use clap::Parser;
use std::process;

fn main() {
    let args = jsmerge::cli::Args::parse();

    if let Err(e) = jsmerge::cli::run_bundle(&args) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
