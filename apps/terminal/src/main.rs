//! # Bono Order Form Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load configuration from the environment
//! 3. Create the session (one order)
//! 4. Read commands until `quit` or end of input
//!
//! The actual setup is in lib.rs so it can be driven from tests.

use std::process::ExitCode;

fn main() -> ExitCode {
    match bono_terminal_lib::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
