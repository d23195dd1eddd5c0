use thiserror::Error;

/// Errors raised while reading from a reference sequence.
#[derive(Error, Debug)]
pub enum ReferenceError {
    #[error("Contig not found in reference: {0}")]
    UnknownContig(String),

    #[error("Invalid range {start}..{end} on {contig} (length {length})")]
    InvalidRange {
        contig: String,
        start: usize,
        end: usize,
        length: usize,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors raised when call fields break a value invariant.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CallError {
    /// Positions are 1-based.
    #[error("Call position must be at least 1, got {0}")]
    InvalidPosition(u32),

    #[error("Call reference allele is empty")]
    EmptyReference,

    /// A genotype entry points past the end of the allele list.
    #[error("Genotype index {index} out of range for {alleles} allele(s)")]
    InvalidGenotype { index: u32, alleles: usize },
}
