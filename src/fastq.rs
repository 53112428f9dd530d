//! Four-line FASTQ reader.
//!
//! Each record is read as identifier, sequence, separator and quality lines. Only the
//! sequence and quality are kept. Parsing stops at end of input, at an empty sequence
//! line, or at a record cut short by the end of the file; everything read before the
//! stop is returned.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, warn};

use crate::error::{Error, Result};

/// Parsed reads with their quality strings, index-aligned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FastqReads {
    pub sequences: Vec<Vec<u8>>,
    pub qualities: Vec<Vec<u8>>,
}

impl FastqReads {
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ReaderOptions {
    /// Reject records whose separator does not start with `+` or whose quality
    /// length differs from the sequence length.
    pub strict: bool,
}

struct LineReader<R> {
    inner: R,
    buf: Vec<u8>,
    line: usize,
}

fn trim_end(line: &[u8]) -> &[u8] {
    let end = line
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(0, |i| i + 1);
    &line[..end]
}

impl<R: BufRead> LineReader<R> {
    /// Next line with trailing whitespace removed, or `None` at end of input.
    fn next_line(&mut self) -> Result<Option<&[u8]>> {
        self.buf.clear();
        if self.inner.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        self.line += 1;
        Ok(Some(trim_end(&self.buf)))
    }
}

enum Record {
    Complete { sequence: Vec<u8>, quality: Vec<u8> },
    End,
}

fn read_record<R: BufRead>(lines: &mut LineReader<R>, options: ReaderOptions) -> Result<Record> {
    if lines.next_line()?.is_none() {
        return Ok(Record::End);
    }

    let sequence = match lines.next_line()? {
        Some(line) if !line.is_empty() => line.to_ascii_uppercase(),
        _ => return Ok(Record::End),
    };

    let separator_ok = match lines.next_line()? {
        Some(line) => line.starts_with(b"+"),
        None => {
            warn!("Dropping record truncated before separator at line {}", lines.line);
            return Ok(Record::End);
        }
    };
    let separator_line = lines.line;

    let quality = match lines.next_line()? {
        Some(line) => line.to_vec(),
        None => {
            warn!("Dropping record truncated before quality at line {}", lines.line);
            return Ok(Record::End);
        }
    };

    if options.strict {
        if !separator_ok {
            return Err(Error::MalformedRecord {
                line: separator_line,
                reason: "separator line does not start with '+'".to_string(),
            });
        }
        if quality.len() != sequence.len() {
            return Err(Error::MalformedRecord {
                line: lines.line,
                reason: format!(
                    "quality length ({}) != sequence length ({})",
                    quality.len(),
                    sequence.len()
                ),
            });
        }
    }

    Ok(Record::Complete { sequence, quality })
}

/// Parses FASTQ from a buffered reader with default (lenient) options.
pub fn parse<R: BufRead>(reader: R) -> Result<FastqReads> {
    parse_with_options(reader, ReaderOptions::default())
}

pub fn parse_with_options<R: BufRead>(reader: R, options: ReaderOptions) -> Result<FastqReads> {
    let mut lines = LineReader {
        inner: reader,
        buf: Vec::with_capacity(256),
        line: 0,
    };
    let mut reads = FastqReads::default();

    while let Record::Complete { sequence, quality } = read_record(&mut lines, options)? {
        reads.sequences.push(sequence);
        reads.qualities.push(quality);
    }

    debug!("Parsed {} records from {} lines", reads.len(), lines.line);
    Ok(reads)
}

/// Opens and parses a FASTQ file. The file is closed before returning.
pub fn parse_path(path: impl AsRef<Path>, options: ReaderOptions) -> Result<FastqReads> {
    let path = path.as_ref();
    let file_err = |source| Error::FileIo {
        file: path.display().to_string(),
        source,
    };
    let file = File::open(path).map_err(file_err)?;

    parse_with_options(BufReader::with_capacity(1 << 20, file), options).map_err(|e| match e {
        Error::Io(source) => file_err(source),
        e => e,
    })
}
