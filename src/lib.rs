pub mod config;
pub mod errors;
pub mod motif;
pub mod report;
pub mod runner;
pub mod scan;
pub mod seq;

use crate::errors::RestSitesError;

pub fn run() -> Result<(), RestSitesError> {
    runner::run()
}
