//! Per-position aggregation over a batch of reads.

use crate::error::{Error, Result};
use crate::quality;
use crate::sequence::Nucleotide;

/// Number of histogram buckets; scores at or above this are not binned.
pub const HISTOGRAM_BUCKETS: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct GcByPosition {
    /// Fraction of G/C bases at each position, in `0.0..=1.0`.
    pub gc_fraction: Vec<f64>,
    /// Number of reads contributing to each position.
    pub total_count: Vec<u64>,
}

impl GcByPosition {
    /// GC content at each position as a percentage.
    pub fn gc_percent(&self) -> Vec<f64> {
        self.gc_fraction.iter().map(|f| f * 100.0).collect()
    }

    /// Common read length of the batch.
    pub fn read_len(&self) -> usize {
        self.gc_fraction.len()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QualityHistogram {
    /// Count of each score in `0..HISTOGRAM_BUCKETS`. Empty when there was no input.
    pub bucket_counts: Vec<u64>,
    /// Every decoded score, in input order, including those too high to bin.
    pub all_scores: Vec<u8>,
}

impl QualityHistogram {
    /// Scores that were decoded but fell outside the histogram range.
    pub fn unbinned(&self) -> usize {
        self.all_scores.len() - self.bucket_counts.iter().sum::<u64>() as usize
    }
}

/// GC content at each position of a batch of equal-length reads.
///
/// Fails with [`Error::EmptyInput`] on an empty batch and with
/// [`Error::InconsistentReadLength`] if any read differs in length from the first.
/// Lengths are checked before anything is counted.
///
/// ```
/// use dna_sequencing::gc_by_position;
///
/// let gc = gc_by_position(&[b"ACGT", b"ACGA"]).unwrap();
/// assert_eq!(gc.gc_fraction, vec![0.0, 1.0, 1.0, 0.5]);
/// assert_eq!(gc.total_count, vec![2, 2, 2, 2]);
/// ```
pub fn gc_by_position<S: AsRef<[u8]>>(reads: &[S]) -> Result<GcByPosition> {
    let first = reads
        .first()
        .ok_or(Error::EmptyInput("GC by position needs at least one read"))?;
    let len = first.as_ref().len();

    if let Some((read_index, read)) = reads
        .iter()
        .enumerate()
        .find(|(_, r)| r.as_ref().len() != len)
    {
        return Err(Error::InconsistentReadLength {
            read_index,
            expected: len,
            found: read.as_ref().len(),
        });
    }

    let mut gc = vec![0u64; len];
    let mut totals = vec![0u64; len];
    for read in reads {
        for (i, base) in read.as_ref().iter().enumerate() {
            if Nucleotide::try_from(*base).is_ok_and(Nucleotide::is_gc) {
                gc[i] += 1;
            }
            totals[i] += 1;
        }
    }

    let gc_fraction = gc
        .iter()
        .zip(&totals)
        .map(|(&g, &t)| if t > 0 { g as f64 / t as f64 } else { 0.0 })
        .collect();

    Ok(GcByPosition {
        gc_fraction,
        total_count: totals,
    })
}

/// Histogram of Phred scores over a batch of quality strings.
///
/// An empty batch gives empty results rather than an error. Scores of
/// [`HISTOGRAM_BUCKETS`] or more are kept in `all_scores` only.
pub fn quality_histogram<S: AsRef<[u8]>>(qualities: &[S]) -> Result<QualityHistogram> {
    if qualities.is_empty() {
        return Ok(QualityHistogram::default());
    }

    let mut hist = QualityHistogram {
        bucket_counts: vec![0; HISTOGRAM_BUCKETS],
        all_scores: Vec::with_capacity(qualities.iter().map(|q| q.as_ref().len()).sum()),
    };
    for qual in qualities {
        for &symbol in qual.as_ref() {
            let score = quality::decode(symbol)?;
            if let Some(bucket) = hist.bucket_counts.get_mut(score as usize) {
                *bucket += 1;
            }
            hist.all_scores.push(score);
        }
    }

    Ok(hist)
}
