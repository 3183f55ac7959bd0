// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{
    ffi::OsString,
    fs::File,
    io::{stdout, BufWriter, Write},
    path::PathBuf,
    time::Instant,
};

use clap::Parser;
use log::info;

use crate::config::{load_config, RestSitesConfig};
use crate::errors::RestSitesError;
use crate::motif::MOTIFS;
use crate::report::{write_enzyme_table, write_report, PositionOrigin, ReportOptions};
use crate::scan::{ProgressLine, Scanner};
use crate::seq::fasta::read_fasta_file;

/// Find PpuMI, MspA1I and MslI restriction sites in a FastA file
#[derive(Debug, Parser)]
#[command(version, about, long_about = None) ]
struct Cli {
    /// FastA file with one or more DNA sequences
    #[arg(required_unless_present = "list_enzymes")]
    infile: Option<PathBuf>,

    /// Output file (default: standard output)
    #[arg(short = 'o', long = "outfile")]
    outfile: Option<PathBuf>,

    /// Report 1-based positions (overrides position_origin in .restsitesconfig)
    #[arg(long = "one-based")]
    one_based: bool,

    /// Do not match lower-case (soft-masked) bases
    #[arg(long = "case-sensitive")]
    case_sensitive: bool,

    /// Show per-record progress on stderr
    #[arg(short, long)]
    progress: bool,

    /// Print the enzyme table and exit successfully
    #[arg(short = 'l', long = "list-enzymes")]
    list_enzymes: bool,
}

// Command-line flags win over the config file.
struct Settings {
    origin: PositionOrigin,
    case_sensitive: bool,
}

impl Settings {
    fn merge(cli: &Cli, config: &RestSitesConfig) -> Result<Self, RestSitesError> {
        let origin = if cli.one_based {
            PositionOrigin::One
        } else {
            config.origin()?
        };
        Ok(Settings {
            origin,
            case_sensitive: cli.case_sensitive || config.case_sensitive,
        })
    }
}

pub fn run() -> Result<(), RestSitesError> {
    env_logger::init();
    info!("Starting log");

    let stdout = stdout();
    let mut handle = stdout.lock();
    run_with(std::env::args_os(), load_config, &mut handle)
}

/// Runs the whole pipeline: read records, scan them, write the report to `--outfile` or else to
/// `stdout`. Arguments are checked before `config_loader` is called; nothing is written if the input
/// cannot be read or decoded.
pub fn run_with<I, T, F, W>(
    args: I,
    config_loader: F,
    stdout: &mut W,
) -> Result<(), RestSitesError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    F: FnOnce() -> Result<RestSitesConfig, RestSitesError>,
    W: Write,
{
    let start_time = Instant::now();
    let cli = Cli::try_parse_from(args)?;

    let infile = match (&cli.infile, cli.list_enzymes) {
        (Some(path), false) => path,
        // No infile means --list-enzymes was given (required_unless_present)
        _ => {
            write_enzyme_table(stdout)?;
            return Ok(());
        }
    };

    let config = config_loader()?;
    let settings = Settings::merge(&cli, &config)?;

    let seq_file = read_fasta_file(infile)?;
    info!("Read {} record(s) from {}", seq_file.len(), infile.display());

    let scanner = Scanner::new(settings.case_sensitive)?;
    let result = if cli.progress {
        scanner.scan_with(&seq_file, &mut ProgressLine::stderr())
    } else {
        scanner.scan(&seq_file)
    };
    for motif in MOTIFS.iter() {
        info!("{}: {} site(s)", motif.name, result.sites_for(motif.name));
    }

    match &cli.outfile {
        Some(path) => {
            let opts = ReportOptions {
                origin: settings.origin,
                separator: None,
            };
            let mut out = BufWriter::new(File::create(path)?);
            write_report(&result, &mut out, &opts)?;
            out.flush()?;
            info!("Wrote {} site(s) to {}", result.total_sites(), path.display());
        }
        None => {
            let opts = ReportOptions {
                origin: settings.origin,
                separator: config.separator.clone(),
            };
            write_report(&result, stdout, &opts)?;
            stdout.flush()?;
        }
    }

    info!("Done in {:.3} seconds", start_time.elapsed().as_secs_f64());
    Ok(())
}
