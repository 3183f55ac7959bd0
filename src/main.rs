// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::process::ExitCode;

use restsites::errors::RestSitesError;

fn main() -> ExitCode {
    match restsites::run() {
        Ok(()) => ExitCode::SUCCESS,
        // clap prints usage (or --help/--version) and picks the exit status
        Err(RestSitesError::Argument(e)) => e.exit(),
        // Undecodable input is not a crash: say so, write nothing.
        Err(e @ RestSitesError::Decode(_)) => {
            eprintln!("{}", e);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
