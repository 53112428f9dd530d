use std::io::Cursor;

use dna_sequencing::{
    gc_by_position, match_exact, match_with_mismatches, parse, quality_histogram, report,
    reverse_complement, Error,
};
use pretty_assertions::assert_eq;

#[test]
fn test_match_examples() {
    assert_eq!(match_exact(b"AG", b"AGCTTAGATAG").unwrap(), vec![0, 5, 8]);

    let approx = match_with_mismatches(b"AG", b"AGCTTAGATAG", 1).unwrap();
    for i in [0, 5, 8] {
        assert!(approx.contains(&i));
    }
    assert!(!approx.contains(&2));
    assert!(!approx.contains(&3));
}

#[test]
fn test_gc_example() {
    let gc = gc_by_position(&["ACGT", "ACGA"]).unwrap();
    assert_eq!(gc.gc_fraction, vec![0.0, 1.0, 1.0, 0.5]);
    assert_eq!(gc.total_count, vec![2, 2, 2, 2]);
}

#[test]
fn test_gc_mismatched_lengths() {
    assert!(matches!(
        gc_by_position(&["ACGT", "ACGTA"]),
        Err(Error::InconsistentReadLength { .. })
    ));
}

#[test]
fn test_qc_from_fastq() {
    let input = "@a\nGGCC\n+\nIIII\n@b\nGATC\n+\n!!+5\n";
    let reads = parse(Cursor::new(input)).unwrap();

    let hist = quality_histogram(&reads.qualities).unwrap();
    assert_eq!(hist.all_scores, vec![40, 40, 40, 40, 0, 0, 10, 20]);
    assert_eq!(hist.bucket_counts[40], 4);
    assert_eq!(hist.bucket_counts[0], 2);

    let gc = gc_by_position(&reads.sequences).unwrap();
    assert_eq!(gc.gc_percent(), vec![100.0, 50.0, 50.0, 100.0]);

    let mut out = Vec::new();
    report::write_gc_by_position(&mut out, &gc).unwrap();
    assert!(String::from_utf8(out).unwrap().starts_with("position\t"));
}

#[test]
fn test_align_reads_on_both_strands() {
    let reference = b"TTTTGATTACATTTTT";
    let reads = parse(Cursor::new("@fwd\nGATTACA\n+\nIIIIIII\n@rev\nTGTAATC\n+\nIIIIIII\n")).unwrap();

    assert_eq!(match_exact(&reads.sequences[0], reference).unwrap(), vec![4]);
    assert!(match_exact(&reads.sequences[1], reference).unwrap().is_empty());
    let rc = reverse_complement(&reads.sequences[1]);
    assert_eq!(match_exact(&rc, reference).unwrap(), vec![4]);
}
