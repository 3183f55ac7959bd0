// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{fmt, io};

#[derive(Debug)]
pub enum RestSitesError {
    Argument(clap::Error),
    Decode(String),
    Io(io::Error),
    Config(String),
    Pattern(regex::Error),
}

// These allow conversion to RestSitesError, so that '?' works throughout the pipeline.

impl From<io::Error> for RestSitesError {
    fn from(e: io::Error) -> Self {
        RestSitesError::Io(e)
    }
}

impl From<clap::Error> for RestSitesError {
    fn from(e: clap::Error) -> Self {
        RestSitesError::Argument(e)
    }
}

impl From<regex::Error> for RestSitesError {
    fn from(e: regex::Error) -> Self {
        RestSitesError::Pattern(e)
    }
}

impl fmt::Display for RestSitesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestSitesError::Argument(e) => write!(f, "Argument error: {}", e),
            RestSitesError::Decode(path) => {
                write!(f, "Could not decode {} as text; no report written.", path)
            }
            RestSitesError::Io(e) => write!(f, "I/O error: {}", e),
            RestSitesError::Config(msg) => write!(f, "Config error: {}", msg),
            RestSitesError::Pattern(e) => write!(f, "Pattern error: {}", e),
        }
    }
}

impl std::error::Error for RestSitesError {}
