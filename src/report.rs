// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::io::{self, Write};

use itertools::Itertools;

use crate::motif::MOTIFS;
use crate::scan::MatchResult;

pub const NOT_FOUND: &str = "Restriction sites not found";
pub const DEFAULT_SEPARATOR: &str = "------------------";

const INDENT: &str = "    ";

// Positions leave the scanner as 0-based match start + cut offset. Biologists count from 1; the
// shift, if any, is applied here and nowhere else.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PositionOrigin {
    #[default]
    Zero,
    One,
}

impl PositionOrigin {
    fn shift(self) -> usize {
        match self {
            PositionOrigin::Zero => 0,
            PositionOrigin::One => 1,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ReportOptions {
    pub origin: PositionOrigin,
    /// Decorative line before and after the report (not used for the "not found" notice)
    pub separator: Option<String>,
}

/// Writes one block per record: the header, one indented "<motif>: <positions>" line per motif
/// with sites, then a blank line. An empty result yields the "not found" notice alone.
pub fn write_report<W: Write>(
    result: &MatchResult,
    out: &mut W,
    opts: &ReportOptions,
) -> io::Result<()> {
    if result.is_empty() {
        writeln!(out, "{}", NOT_FOUND)?;
        return Ok(());
    }

    if let Some(sep) = &opts.separator {
        writeln!(out, "{}", sep)?;
    }
    let shift = opts.origin.shift();
    for record in result.records() {
        writeln!(out, "{}", record.header)?;
        for ms in &record.motifs {
            let positions = ms.positions.iter().map(|p| p + shift).join(", ");
            writeln!(out, "{}{}: {}", INDENT, ms.motif, positions)?;
        }
        writeln!(out)?;
    }
    if let Some(sep) = &opts.separator {
        writeln!(out, "{}", sep)?;
    }

    Ok(())
}

pub fn write_enzyme_table<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "{:<8} {:<12} {:<38} {:>6}  {}",
        "enzyme", "recognition", "pattern", "offset", "palindromic"
    )?;
    for motif in MOTIFS.iter() {
        writeln!(
            out,
            "{:<8} {:<12} {:<38} {:>6}  {}",
            motif.name,
            motif.recognition,
            motif.pattern,
            motif.cut_offset,
            if motif.is_palindromic() { "yes" } else { "no" }
        )?;
    }
    Ok(())
}
