// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use crate::seq::record::SeqRecord;

// For our purposes, a sequence file is just a Vec of sequence records, in file order. Headers are
// unique: the parser keeps the first position of a header and the last sequence seen for it.
//

pub type SeqFile = Vec<SeqRecord>;
