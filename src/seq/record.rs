// A named nucleotide sequence, as read from one '>' block of a FastA file. The header is the whole
// first line of the block; the sequence is every following line, concatenated.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeqRecord {
    pub header: String,
    pub sequence: String,
}
