//! Rolegate binary entry point.

use std::process::ExitCode;

use clap::Parser;

use rolegate::app::{run, AppArgs};

fn main() -> ExitCode {
    let args = AppArgs::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
