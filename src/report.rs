//! Plain-text rendering of the aggregation tables.
//!
//! Every table is tab-separated with a header row, ready for a plotting tool.

use std::io::Write;

use crate::error::Result;
use crate::stats::{GcByPosition, QualityHistogram};

pub fn write_quality_histogram(writer: &mut dyn Write, hist: &QualityHistogram) -> Result<()> {
    writeln!(writer, "score\tcount")?;
    for (score, count) in hist.bucket_counts.iter().enumerate() {
        writeln!(writer, "{score}\t{count}")?;
    }
    Ok(())
}

pub fn write_gc_by_position(writer: &mut dyn Write, gc: &GcByPosition) -> Result<()> {
    writeln!(writer, "position\tgc_fraction\tgc_percent\ttotal")?;
    for (pos, (fraction, total)) in gc.gc_fraction.iter().zip(&gc.total_count).enumerate() {
        writeln!(writer, "{pos}\t{fraction:.4}\t{:.2}\t{total}", fraction * 100.0)?;
    }
    Ok(())
}

/// One line per hit: the read index and the 0-based offset in the reference.
pub fn write_matches(writer: &mut dyn Write, read_index: usize, positions: &[usize]) -> Result<()> {
    for pos in positions {
        writeln!(writer, "{read_index}\t{pos}")?;
    }
    Ok(())
}
