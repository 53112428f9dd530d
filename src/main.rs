use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dna_sequencing::{
    complement, fastq, gc_by_position, match_with_mismatches_parallel, quality_histogram, report,
    reverse_complement, ReaderOptions,
};
use log::{info, LevelFilter};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "dna-seq")]
#[command(about = "FASTQ quality control, read search and strand utilities")]
struct Args {
    #[arg(short = 'v', long, global = true, default_value = "false", help = "Verbose output showing progress")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Quality histogram and GC content by position
    Qc {
        #[arg(short = 'i', long, help = "Input FASTQ file")]
        input: PathBuf,

        #[arg(short = 's', long, default_value = "false", help = "Reject malformed records instead of reading them leniently")]
        strict: bool,

        #[arg(long, help = "Write the quality histogram here instead of stdout")]
        histogram: Option<PathBuf>,

        #[arg(long, help = "Write GC content by position here instead of stdout")]
        gc: Option<PathBuf>,
    },

    /// Align every read against a reference text
    Search {
        #[arg(short = 'i', long, help = "Input FASTQ file")]
        input: PathBuf,

        #[arg(short = 'r', long, help = "Reference as a plain text file of bases")]
        reference: PathBuf,

        #[arg(short = 'k', long, default_value = "0", help = "Maximum mismatches per alignment")]
        max_mismatches: usize,

        #[arg(short = 't', long, default_value = "4", help = "Number of threads")]
        threads: usize,
    },

    /// Reverse complement a sequence
    Revcomp {
        sequence: String,

        #[arg(short = 'c', long, default_value = "false", help = "Complement without reversing")]
        complement_only: bool,
    },
}

fn create_writer(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

fn read_reference(path: &Path) -> Result<Vec<u8>> {
    let raw = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(raw
        .into_iter()
        .filter(|b| !b.is_ascii_whitespace())
        .map(|b| b.to_ascii_uppercase())
        .collect())
}

fn run_qc(input: &Path, strict: bool, histogram: Option<&Path>, gc: Option<&Path>) -> Result<()> {
    let reads = fastq::parse_path(input, ReaderOptions { strict })?;
    info!("Read {} records from {}", reads.len(), input.display());

    let hist = quality_histogram(&reads.qualities)?;
    info!("{} quality scores, {} above the histogram range", hist.all_scores.len(), hist.unbinned());
    let mut writer = create_writer(histogram)?;
    report::write_quality_histogram(&mut writer, &hist)?;
    writer.flush()?;

    let gc_table = gc_by_position(&reads.sequences)
        .context("GC content by position needs reads of one common length")?;
    let mut writer = create_writer(gc)?;
    report::write_gc_by_position(&mut writer, &gc_table)?;
    writer.flush()?;

    Ok(())
}

fn run_search(input: &Path, reference: &Path, max_mismatches: usize, threads: usize) -> Result<()> {
    let reads = fastq::parse_path(input, ReaderOptions::default())?;
    let text = read_reference(reference)?;
    info!(
        "Searching {} reads against {} bases with up to {} mismatches",
        reads.len(),
        text.len(),
        max_mismatches
    );

    let mut writer = create_writer(None)?;
    writeln!(writer, "read\tposition")?;
    let mut hit_reads = 0;
    for (i, read) in reads.sequences.iter().enumerate() {
        let positions = match_with_mismatches_parallel(read, &text, max_mismatches, threads)?;
        if !positions.is_empty() {
            hit_reads += 1;
        }
        report::write_matches(&mut writer, i, &positions)?;
    }
    writer.flush()?;

    info!("{} of {} reads aligned", hit_reads, reads.len());
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(if args.verbose { LevelFilter::Debug } else { LevelFilter::Warn })
        .parse_default_env()
        .init();

    match args.command {
        Command::Qc { input, strict, histogram, gc } => {
            run_qc(&input, strict, histogram.as_deref(), gc.as_deref())
        }
        Command::Search { input, reference, max_mismatches, threads } => {
            run_search(&input, &reference, max_mismatches, threads)
        }
        Command::Revcomp { sequence, complement_only } => {
            let out = if complement_only {
                complement(sequence.as_bytes())
            } else {
                reverse_complement(sequence.as_bytes())
            };
            println!("{}", String::from_utf8_lossy(&out));
            Ok(())
        }
    }
}
