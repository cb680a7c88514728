//! docman - Document citation assembler

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = docman::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
