//! Error type shared by every component of the library.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Quality symbol below the Phred+33 offset.
    #[error("Invalid quality symbol {symbol:?} (0x{code:02X}): below Phred+33 offset")]
    InvalidEncoding { symbol: char, code: u8 },

    /// Phred score that has no printable Phred+33 symbol.
    #[error("Invalid Phred score {score}: must be in 0..={max}")]
    InvalidScore { score: u8, max: u8 },

    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("Read {read_index} has length {found}, expected {expected} like the first read")]
    InconsistentReadLength {
        read_index: usize,
        expected: usize,
        found: usize,
    },

    #[error("Empty input: {0}")]
    EmptyInput(&'static str),

    #[error("Malformed FASTQ record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("Invalid nucleotide {base:?}")]
    InvalidNucleotide { base: char },

    #[error("Error reading \"{file}\": {source}")]
    FileIo {
        file: String,
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
