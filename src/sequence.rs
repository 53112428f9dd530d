//! Nucleotide alphabet and strand transforms.

use log::warn;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nucleotide {
    A,
    C,
    G,
    T,
    N,
}

impl Nucleotide {
    pub fn complement(self) -> Self {
        match self {
            Nucleotide::A => Nucleotide::T,
            Nucleotide::T => Nucleotide::A,
            Nucleotide::C => Nucleotide::G,
            Nucleotide::G => Nucleotide::C,
            Nucleotide::N => Nucleotide::N,
        }
    }

    pub fn as_byte(self) -> u8 {
        match self {
            Nucleotide::A => b'A',
            Nucleotide::C => b'C',
            Nucleotide::G => b'G',
            Nucleotide::T => b'T',
            Nucleotide::N => b'N',
        }
    }

    pub fn is_gc(self) -> bool {
        matches!(self, Nucleotide::C | Nucleotide::G)
    }
}

/// Case-insensitive; anything outside {A,C,G,T,N} is rejected.
impl TryFrom<u8> for Nucleotide {
    type Error = Error;

    fn try_from(base: u8) -> Result<Self> {
        match base.to_ascii_uppercase() {
            b'A' => Ok(Nucleotide::A),
            b'C' => Ok(Nucleotide::C),
            b'G' => Ok(Nucleotide::G),
            b'T' => Ok(Nucleotide::T),
            b'N' => Ok(Nucleotide::N),
            _ => Err(Error::InvalidNucleotide { base: base as char }),
        }
    }
}

fn complement_base(base: u8) -> Option<u8> {
    match Nucleotide::try_from(base) {
        Ok(n) => Some(n.complement().as_byte()),
        Err(e) => {
            warn!("skipping base: {e}");
            None
        }
    }
}

/// Reverse complement of a DNA sequence.
///
/// The input is uppercased and each base is complemented (A↔T, C↔G, N↔N), then the
/// result is read 3'→5'. Bases outside the alphabet are dropped with a warning, so the
/// output can be shorter than the input.
///
/// ```
/// use dna_sequencing::reverse_complement;
///
/// assert_eq!(reverse_complement(b"aaCGt"), b"ACGTT");
/// ```
pub fn reverse_complement(seq: &[u8]) -> Vec<u8> {
    seq.iter().rev().filter_map(|&b| complement_base(b)).collect()
}

/// Complement of a DNA sequence in its original order.
///
/// Same alphabet handling as [`reverse_complement`], without the reversal.
pub fn complement(seq: &[u8]) -> Vec<u8> {
    seq.iter().filter_map(|&b| complement_base(b)).collect()
}
