//! Binary entrypoint for the `repute` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    match repute::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
