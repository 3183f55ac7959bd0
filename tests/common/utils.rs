// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use restsites::{
    config::RestSitesConfig,
    errors::RestSitesError,
    runner::run_with,
    scan::{MatchResult, Scanner},
    seq::fasta::parse_fasta_str,
};

#[allow(dead_code)]
pub fn scan_str(fasta: &str) -> MatchResult {
    let scanner = Scanner::new(false).expect("static patterns compile");
    scanner.scan(&parse_fasta_str(fasta))
}

#[allow(dead_code)]
pub fn write_file(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("writing test input");
    path
}

// Runs the pipeline as if from the command line ("restsites" is prepended), with the given
// config, and returns the result along with whatever went to standard output.
#[allow(dead_code)]
pub fn run_capture<S: Into<OsString> + Clone>(
    args: &[S],
    config: &RestSitesConfig,
) -> (Result<(), RestSitesError>, String) {
    run_capture_with(args, || Ok(config.clone()))
}

// Same, but the config comes from `config_loader` (called only once arguments are valid).
#[allow(dead_code)]
pub fn run_capture_with<S, F>(args: &[S], config_loader: F) -> (Result<(), RestSitesError>, String)
where
    S: Into<OsString> + Clone,
    F: FnOnce() -> Result<RestSitesConfig, RestSitesError>,
{
    let mut argv: Vec<OsString> = vec![OsString::from("restsites")];
    argv.extend(args.iter().cloned().map(Into::into));
    let mut out: Vec<u8> = Vec::new();
    let res = run_with(argv, config_loader, &mut out);
    (res, String::from_utf8(out).expect("stdout is utf-8"))
}
