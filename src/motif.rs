// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

// Restriction enzymes and their recognition sites. Everything here is static: the expanded
// patterns and cut offsets are written out by hand, and `expand_recognition()` only serves to
// check them against the IUPAC notation.

use std::fmt;

/// Marks the cut position inside a recognition string.
pub const CUT_MARKER: char = '^';

// IUPAC ambiguity codes used by the recognition strings below. Plain bases (ACGT) stand for
// themselves.
pub static IUPAC_DNA: &[(char, &str)] = &[
    ('K', "GT"),
    ('M', "AC"),
    ('N', "ACGT"),
    ('R', "AG"),
    ('W', "AT"),
    ('Y', "CT"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Motif {
    /// Enzyme name
    pub name: &'static str,
    /// IUPAC recognition string, with the cut marked by '^'
    pub recognition: &'static str,
    /// Exact-match regular expression equivalent to `recognition`
    pub pattern: &'static str,
    /// Added to a 0-based match start to get the reported position: the 1-based index, within
    /// the site, of the first base after the cut (e.g. 3 for the second G of RG^GWCCY)
    pub cut_offset: usize,
}

pub static MOTIFS: [Motif; 3] = [
    Motif {
        name: "PpuMI",
        recognition: "RG^GWCCY",
        pattern: "[AG]GG[AT]CC[CT]",
        cut_offset: 3,
    },
    Motif {
        name: "MspA1I",
        recognition: "CMG^CKG",
        pattern: "C[AC]GC[GT]G",
        cut_offset: 4,
    },
    Motif {
        name: "MslI",
        recognition: "CAYNN^NNRTG",
        pattern: "CA[CT][ACGT][ACGT][ACGT][ACGT][AG]TG",
        cut_offset: 6,
    },
];

impl Motif {
    /// Recognition string without the cut marker.
    pub fn site(&self) -> String {
        self.recognition.chars().filter(|&c| c != CUT_MARKER).collect()
    }

    /// True IFF the recognition site reads the same on both strands, i.e. it is its own reverse
    /// complement (IUPAC-wise).
    pub fn is_palindromic(&self) -> bool {
        let site = self.site();
        site == reverse_complement(&site)
    }
}

impl fmt::Display for Motif {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.recognition)
    }
}

pub fn motif_by_name(name: &str) -> Option<&'static Motif> {
    MOTIFS.iter().find(|m| m.name == name)
}

fn complement(code: char) -> char {
    match code {
        'A' => 'T',
        'C' => 'G',
        'G' => 'C',
        'T' => 'A',
        'K' => 'M',
        'M' => 'K',
        'R' => 'Y',
        'Y' => 'R',
        // W, S and N are their own complements
        other => other,
    }
}

pub fn reverse_complement(site: &str) -> String {
    site.chars().rev().map(complement).collect()
}

/// Turns an IUPAC recognition string into an exact-match pattern and a cut offset.
///
/// The offset is one more than the number of bases before the cut marker, i.e. the 1-based index
/// of the base following the cut ("RG^GWCCY" gives 3).
///
/// Returns None if the string contains a symbol outside ACGT and `IUPAC_DNA`, or does not contain
/// exactly one cut marker.
pub fn expand_recognition(recognition: &str) -> Option<(String, usize)> {
    let mut pattern = String::new();
    let mut cut_offset: Option<usize> = None;
    let mut nb_bases = 0;

    for c in recognition.chars() {
        match c {
            CUT_MARKER => {
                if cut_offset.is_some() {
                    return None;
                }
                cut_offset = Some(nb_bases + 1);
                continue;
            }
            'A' | 'C' | 'G' | 'T' => pattern.push(c),
            _ => {
                let (_, bases) = IUPAC_DNA.iter().find(|(code, _)| *code == c)?;
                pattern.push('[');
                pattern.push_str(bases);
                pattern.push(']');
            }
        }
        nb_bases += 1;
    }

    cut_offset.map(|offset| (pattern, offset))
}
