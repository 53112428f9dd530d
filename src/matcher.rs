//! Brute-force exact and mismatch-bounded pattern search.
//!
//! Every start position of the text is tried in turn, so positions come back in
//! ascending order. Cost is `O((n - m + 1) * m)` for a text of length `n` and a
//! pattern of length `m`.

use std::thread;

use crossbeam_channel::bounded;
use log::debug;

use crate::error::{Error, Result};

/// Start positions searched by one worker in [`match_with_mismatches_parallel`].
const WINDOW_STARTS: usize = 1 << 16;

fn check_pattern(pattern: &[u8]) -> Result<()> {
    if pattern.is_empty() {
        return Err(Error::InvalidArgument("pattern must not be empty"));
    }
    Ok(())
}

/// Number of mismatches between `pattern` and `window`, giving up once `max` is exceeded.
fn mismatches_within(pattern: &[u8], window: &[u8], max: usize) -> Option<usize> {
    let mut mismatches = 0;
    for (p, t) in pattern.iter().zip(window) {
        if p != t {
            mismatches += 1;
            if mismatches > max {
                return None;
            }
        }
    }
    Some(mismatches)
}

/// All offsets where `pattern` occurs exactly in `text`.
///
/// ```
/// use dna_sequencing::match_exact;
///
/// assert_eq!(match_exact(b"AG", b"AGCTTAGATAG").unwrap(), vec![0, 5, 8]);
/// ```
pub fn match_exact(pattern: &[u8], text: &[u8]) -> Result<Vec<usize>> {
    check_pattern(pattern)?;
    Ok(text
        .windows(pattern.len())
        .enumerate()
        .filter(|(_, w)| *w == pattern)
        .map(|(i, _)| i)
        .collect())
}

/// All offsets where `pattern` occurs in `text` with at most `max_mismatches`
/// differing characters.
pub fn match_with_mismatches(
    pattern: &[u8],
    text: &[u8],
    max_mismatches: usize,
) -> Result<Vec<usize>> {
    check_pattern(pattern)?;
    Ok(scan(pattern, text, max_mismatches, 0))
}

fn scan(pattern: &[u8], text: &[u8], max_mismatches: usize, offset: usize) -> Vec<usize> {
    text.windows(pattern.len())
        .enumerate()
        .filter(|(_, w)| mismatches_within(pattern, w, max_mismatches).is_some())
        .map(|(i, _)| i + offset)
        .collect()
}

/// Same result as [`match_with_mismatches`], with the text split across `threads`
/// workers.
///
/// The text is cut into windows of consecutive start positions. Each window is
/// extended by `pattern.len() - 1` bytes so that matches straddling a cut are still
/// seen by exactly one worker.
pub fn match_with_mismatches_parallel(
    pattern: &[u8],
    text: &[u8],
    max_mismatches: usize,
    threads: usize,
) -> Result<Vec<usize>> {
    check_pattern(pattern)?;
    if threads == 0 {
        return Err(Error::InvalidArgument("number of threads must be greater than zero"));
    }
    if text.len() < pattern.len() {
        return Ok(Vec::new());
    }

    Ok(search_windows(pattern, text, max_mismatches, threads, WINDOW_STARTS))
}

/// Worker pool behind [`match_with_mismatches_parallel`]; each job covers
/// `window_starts` consecutive start positions.
fn search_windows(
    pattern: &[u8],
    text: &[u8],
    max_mismatches: usize,
    threads: usize,
    window_starts: usize,
) -> Vec<usize> {
    let starts = text.len() - pattern.len() + 1;
    if threads == 1 || starts <= window_starts {
        return scan(pattern, text, max_mismatches, 0);
    }

    let (window_tx, window_rx) = bounded::<(usize, usize)>(threads * 2);
    let (hits_tx, hits_rx) = bounded::<(usize, Vec<usize>)>(threads * 2);
    let windows = starts.div_ceil(window_starts);
    debug!("Searching {starts} start positions in {windows} windows on {threads} threads");

    let mut chunks = thread::scope(|s| {
        for _ in 0..threads {
            let rx = window_rx.clone();
            let tx = hits_tx.clone();
            s.spawn(move || {
                while let Ok((begin, end)) = rx.recv() {
                    let slice = &text[begin..end + pattern.len() - 1];
                    if tx.send((begin, scan(pattern, slice, max_mismatches, begin))).is_err() {
                        break;
                    }
                }
            });
        }
        drop(window_rx);
        drop(hits_tx);

        let collector = s.spawn(move || hits_rx.iter().collect::<Vec<_>>());

        for begin in (0..starts).step_by(window_starts) {
            let end = (begin + window_starts).min(starts);
            if window_tx.send((begin, end)).is_err() {
                break;
            }
        }
        drop(window_tx);

        collector.join().expect("match collector thread panicked")
    });

    chunks.sort_unstable_by_key(|(begin, _)| *begin);
    chunks.into_iter().flat_map(|(_, hits)| hits).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::{prop_assert, prop_assert_eq, proptest};

    #[test]
    fn test_empty_pattern_rejected() {
        assert!(matches!(match_exact(b"", b"ACGT"), Err(Error::InvalidArgument(_))));
        assert!(matches!(
            match_with_mismatches(b"", b"ACGT", 1),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_pattern_longer_than_text() {
        assert!(match_exact(b"ACGTA", b"ACGT").unwrap().is_empty());
        assert!(match_with_mismatches(b"ACGTA", b"ACGT", 5).unwrap().is_empty());
    }

    #[test]
    fn test_one_mismatch() {
        // windows: AG GC CT TT TA AG GA AT TA AG
        assert_eq!(
            match_with_mismatches(b"AG", b"AGCTTAGATAG", 1).unwrap(),
            vec![0, 1, 4, 5, 6, 7, 8, 9]
        );
    }

    #[test]
    fn test_parallel_rejects_zero_threads() {
        assert!(match_with_mismatches_parallel(b"A", b"AAAA", 0, 0).is_err());
    }

    #[test]
    fn test_parallel_across_window_boundaries() {
        let text: Vec<u8> = b"ACGTTGCA".iter().copied().cycle().take(3 * WINDOW_STARTS + 7).collect();
        let serial = match_with_mismatches(b"TTGCAAC", &text, 1).unwrap();
        let parallel = match_with_mismatches_parallel(b"TTGCAAC", &text, 1, 4).unwrap();
        assert!(!serial.is_empty());
        assert_eq!(serial, parallel);
    }

    proptest! {
        #[test]
        fn prop_exact_is_sound_and_complete(p in "[ACGT]{1,4}", t in "[ACGT]{0,40}") {
            let (p, t) = (p.as_bytes(), t.as_bytes());
            let hits = match_exact(p, t).unwrap();
            for i in 0..(t.len() + 1).saturating_sub(p.len()) {
                prop_assert_eq!(hits.contains(&i), &t[i..i + p.len()] == p);
            }
            prop_assert!(hits.windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        fn prop_exact_subset_of_mismatches(p in "[ACGT]{1,5}", t in "[ACGT]{0,40}", k in 0usize..4) {
            let (p, t) = (p.as_bytes(), t.as_bytes());
            let exact = match_exact(p, t).unwrap();
            let approx = match_with_mismatches(p, t, k).unwrap();
            prop_assert!(exact.iter().all(|i| approx.contains(i)));
            prop_assert_eq!(match_with_mismatches(p, t, 0).unwrap(), exact);
        }

        #[test]
        fn prop_parallel_equals_serial(p in "[ACGT]{1,3}", t in "[ACGT]{0,200}", k in 0usize..2, threads in 1usize..4) {
            let (p, t) = (p.as_bytes(), t.as_bytes());
            prop_assert_eq!(
                match_with_mismatches_parallel(p, t, k, threads).unwrap(),
                match_with_mismatches(p, t, k).unwrap()
            );
        }

        #[test]
        fn prop_small_windows_equal_serial(
            p in "[ACG]{1,4}",
            t in "[ACG]{4,120}",
            k in 0usize..3,
            threads in 2usize..5,
            window_starts in 1usize..8,
        ) {
            let (p, t) = (p.as_bytes(), t.as_bytes());
            prop_assert_eq!(
                search_windows(p, t, k, threads, window_starts),
                match_with_mismatches(p, t, k).unwrap()
            );
        }
    }

    #[test]
    fn test_small_windows_every_position() {
        // 999 start positions cut into 333 windows of 3
        let text = [b'A'; 1000];
        let hits = search_windows(b"AA", &text, 0, 4, 3);
        assert_eq!(hits, (0..999).collect::<Vec<_>>());
    }
}
