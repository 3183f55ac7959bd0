// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::io::{stderr, Stderr, Write};

use log::debug;
use regex::{Regex, RegexBuilder};

use crate::errors::RestSitesError;
use crate::motif::{Motif, MOTIFS};
use crate::seq::file::SeqFile;

// Cut positions of one motif in one record, in scan order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotifSites {
    pub motif: &'static str,
    pub positions: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSites {
    pub header: String,
    pub motifs: Vec<MotifSites>,
}

impl RecordSites {
    pub fn positions(&self, motif: &str) -> Option<&[usize]> {
        self.motifs
            .iter()
            .find(|ms| ms.motif == motif)
            .map(|ms| ms.positions.as_slice())
    }
}

/// Record header -> motif name -> cut positions, both levels in insertion order. Only records and
/// motifs with at least one site are present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResult {
    records: Vec<RecordSites>,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[RecordSites] {
        &self.records
    }

    pub fn get(&self, header: &str) -> Option<&RecordSites> {
        self.records.iter().find(|rs| rs.header == header)
    }

    pub fn positions(&self, header: &str, motif: &str) -> Option<&[usize]> {
        self.get(header).and_then(|rs| rs.positions(motif))
    }

    /// Appends a position under (header, motif), creating either level first if needed.
    pub fn push(&mut self, header: &str, motif: &'static str, position: usize) {
        // Records arrive in scan order, so the one we want is almost always the last.
        let rec_idx = match self.records.iter().rposition(|rs| rs.header == header) {
            Some(idx) => idx,
            None => {
                self.records.push(RecordSites {
                    header: header.to_string(),
                    motifs: Vec::new(),
                });
                self.records.len() - 1
            }
        };
        let motifs = &mut self.records[rec_idx].motifs;
        let motif_idx = match motifs.iter().position(|ms| ms.motif == motif) {
            Some(idx) => idx,
            None => {
                motifs.push(MotifSites {
                    motif,
                    positions: Vec::new(),
                });
                motifs.len() - 1
            }
        };
        motifs[motif_idx].positions.push(position);
    }

    pub fn total_sites(&self) -> usize {
        self.records
            .iter()
            .flat_map(|rs| rs.motifs.iter())
            .map(|ms| ms.positions.len())
            .sum()
    }

    pub fn sites_for(&self, motif: &str) -> usize {
        self.records
            .iter()
            .filter_map(|rs| rs.positions(motif))
            .map(|p| p.len())
            .sum()
    }
}

/// Watches a scan from the side. Observers only ever see copies of what the scanner computed, so
/// they cannot change order or results.
pub trait ScanObserver {
    fn record_started(&mut self, _index: usize, _total: usize, _header: &str) {}
    fn record_finished(&mut self, _index: usize, _total: usize, _header: &str, _nb_sites: usize) {}
}

pub struct NoProgress;

impl ScanObserver for NoProgress {}

// One line per finished record, e.g. "[2/5] chr22: 14 sites".
pub struct ProgressLine<W: Write> {
    out: W,
}

impl<W: Write> ProgressLine<W> {
    pub fn new(out: W) -> Self {
        ProgressLine { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl ProgressLine<Stderr> {
    pub fn stderr() -> Self {
        ProgressLine::new(stderr())
    }
}

impl<W: Write> ScanObserver for ProgressLine<W> {
    fn record_finished(&mut self, index: usize, total: usize, header: &str, nb_sites: usize) {
        // Progress is cosmetic: a failed write must not abort the scan.
        writeln!(self.out, "[{}/{}] {}: {} sites", index + 1, total, header, nb_sites).ok();
    }
}

pub struct CompiledMotif {
    pub motif: &'static Motif,
    regex: Regex,
}

impl CompiledMotif {
    pub fn new(motif: &'static Motif, case_sensitive: bool) -> Result<Self, RestSitesError> {
        let regex = RegexBuilder::new(motif.pattern)
            .case_insensitive(!case_sensitive)
            .build()?;
        Ok(CompiledMotif { motif, regex })
    }

    /// Cut positions (match start + cut offset) of every leftmost, non-overlapping match, from
    /// left to right. Positions count characters, not bytes.
    pub fn cut_positions(&self, sequence: &str) -> Vec<usize> {
        let ascii = sequence.is_ascii();
        // (byte, char) offsets of the previous match start; matches come in increasing order
        let mut byte_pos = 0;
        let mut char_pos = 0;
        let mut positions = Vec::new();

        for m in self.regex.find_iter(sequence) {
            let start = if ascii {
                m.start()
            } else {
                char_pos += sequence[byte_pos..m.start()].chars().count();
                byte_pos = m.start();
                char_pos
            };
            positions.push(start + self.motif.cut_offset);
        }
        positions
    }
}

pub struct Scanner {
    motifs: Vec<CompiledMotif>,
}

impl Scanner {
    /// Compiles the three enzymes of `MOTIFS`, in table order.
    pub fn new(case_sensitive: bool) -> Result<Self, RestSitesError> {
        let motifs = MOTIFS
            .iter()
            .map(|m| CompiledMotif::new(m, case_sensitive))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Scanner { motifs })
    }

    pub fn motifs(&self) -> &[CompiledMotif] {
        &self.motifs
    }

    pub fn scan(&self, seq_file: &SeqFile) -> MatchResult {
        self.scan_with(seq_file, &mut NoProgress)
    }

    pub fn scan_with(&self, seq_file: &SeqFile, observer: &mut dyn ScanObserver) -> MatchResult {
        let mut result = MatchResult::new();
        let total = seq_file.len();

        for (index, record) in seq_file.iter().enumerate() {
            observer.record_started(index, total, &record.header);
            let mut nb_sites = 0;
            for cm in &self.motifs {
                let positions = cm.cut_positions(&record.sequence);
                debug!(
                    "{}: {} {} site(s)",
                    record.header,
                    positions.len(),
                    cm.motif.name
                );
                nb_sites += positions.len();
                for pos in positions {
                    result.push(&record.header, cm.motif.name, pos);
                }
            }
            observer.record_finished(index, total, &record.header, nb_sites);
        }

        result
    }
}
