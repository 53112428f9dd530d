//! Phred+33 quality codec.
//!
//! A quality symbol is the byte `score + 33`. Scores run from 0 (`!`) to 93 (`~`),
//! which keeps every encoded symbol inside printable ASCII.

use crate::error::{Error, Result};

/// ASCII offset of the Phred+33 encoding.
pub const PHRED_OFFSET: u8 = 33;

/// Highest score with a printable Phred+33 symbol.
pub const MAX_PHRED: u8 = 93;

/// Decodes one quality symbol into its Phred score.
///
/// ```
/// use dna_sequencing::quality::decode;
///
/// assert_eq!(decode(b'I').unwrap(), 40);
/// assert!(decode(b' ').is_err());
/// ```
pub fn decode(symbol: u8) -> Result<u8> {
    symbol
        .checked_sub(PHRED_OFFSET)
        .ok_or(Error::InvalidEncoding {
            symbol: symbol as char,
            code: symbol,
        })
}

/// Encodes a Phred score as its quality symbol.
///
/// Scores above [`MAX_PHRED`] fail with [`Error::InvalidScore`]: they would land past
/// `~`, outside printable ASCII. [`decode`] is looser and maps any byte from `!` up.
pub fn encode(score: u8) -> Result<u8> {
    if score > MAX_PHRED {
        return Err(Error::InvalidScore {
            score,
            max: MAX_PHRED,
        });
    }
    Ok(score + PHRED_OFFSET)
}

/// Decodes a whole quality string, failing on the first bad symbol.
pub fn decode_all(qual: &[u8]) -> Result<Vec<u8>> {
    qual.iter().map(|&q| decode(q)).collect()
}

/// Encodes a slice of scores into a quality string.
pub fn encode_all(scores: &[u8]) -> Result<Vec<u8>> {
    scores.iter().map(|&s| encode(s)).collect()
}
