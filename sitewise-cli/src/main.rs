//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use std::process::ExitCode;

use sitewise_cli::{CliError, run};

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr"
)]
fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("sitewise: {err}");
            ExitCode::FAILURE
        }
    }
}
