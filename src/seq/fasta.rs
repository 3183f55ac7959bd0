// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::debug;

use crate::errors::RestSitesError;
use crate::seq::file::SeqFile;
use crate::seq::record::SeqRecord;

const RECORD_DELIMITER: char = '>';

pub fn read_fasta_file<P: AsRef<Path>>(path: P) -> Result<SeqFile, RestSitesError> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let text = String::from_utf8(bytes)
        .map_err(|_| RestSitesError::Decode(path.display().to_string()))?;
    Ok(parse_fasta_str(&text))
}

/// Splits FastA text into records.
///
/// Whatever precedes the first '>' is ignored (UCSC downloads, for instance, may carry a banner
/// line). The first line of each block is the header, the remaining lines are joined without
/// their line breaks. A block with no sequence lines yields an empty sequence. If a header occurs
/// more than once, the record keeps its first position and takes the last sequence.
pub fn parse_fasta_str(text: &str) -> SeqFile {
    let mut result: SeqFile = Vec::new();
    let mut hdr2idx: HashMap<String, usize> = HashMap::new();

    for block in text.split(RECORD_DELIMITER).skip(1) {
        let mut lines = block.lines();
        let Some(header) = lines.next() else {
            continue; // empty fragment, e.g. ">>"
        };
        let sequence: String = lines.collect();
        match hdr2idx.get(header) {
            Some(&idx) => {
                debug!("Duplicate header '{}': keeping last sequence", header);
                result[idx].sequence = sequence;
            }
            None => {
                hdr2idx.insert(header.to_string(), result.len());
                result.push(SeqRecord {
                    header: header.to_string(),
                    sequence,
                });
            }
        }
    }
    result
}
