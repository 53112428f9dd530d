// lib.rs - library entry point

//! Short-read DNA sequencing toolkit.
//!
//! Parses FASTQ reads, searches reference text for exact or mismatch-tolerant
//! occurrences of a read, and aggregates GC content and Phred quality scores by
//! read position. The numeric tables can be rendered as TSV with [`report`].

pub mod error;
pub mod fastq;
pub mod matcher;
pub mod quality;
pub mod report;
pub mod sequence;
pub mod stats;

pub use error::{Error, Result};
pub use fastq::{parse, parse_path, parse_with_options, FastqReads, ReaderOptions};
pub use matcher::{match_exact, match_with_mismatches, match_with_mismatches_parallel};
pub use sequence::{complement, reverse_complement, Nucleotide};
pub use stats::{gc_by_position, quality_histogram, GcByPosition, QualityHistogram};
