//! End-to-end query scenarios on small, hand-checked texts.

use super::common::{build_index, naive_occurrences, sorted_occurrences, DNA_FIXTURE};
use fmdex::FmIndex;

#[test]
fn banana_occurrences_and_suffixes() {
    let index = FmIndex::new("banana").unwrap();

    assert_eq!(sorted_occurrences(&index, b"ana"), vec![1, 3]);
    assert_eq!(sorted_occurrences(&index, b"a"), vec![1, 3, 5]);
    assert!(index.has_suffix(b"na"));
    assert!(!index.has_suffix(b"ban"));
}

#[test]
fn mississippi_occurrences() {
    let index = FmIndex::new("mississippi").unwrap();

    assert_eq!(sorted_occurrences(&index, b"ss"), vec![2, 5]);
    assert_eq!(sorted_occurrences(&index, b"issi"), vec![1, 4]);
    assert_eq!(sorted_occurrences(&index, b"mississippi"), vec![0]);
    assert!(!index.has_substring(b"xyz"));
    assert!(index.occurrences(b"xyz").is_empty());
}

#[test]
fn suffix_checks_use_the_real_end() {
    let index = FmIndex::new("mississippi").unwrap();

    assert!(index.has_suffix(b"i"));
    assert!(index.has_suffix(b"ppi"));
    assert!(index.has_suffix(b"mississippi"));
    // occurs, but not at the end
    assert!(!index.has_suffix(b"issi"));
    assert!(!index.has_suffix(b"ss"));
    // does not occur at all
    assert!(!index.has_suffix(b"xppi"));
}

#[test]
fn pattern_longer_than_text() {
    let index = FmIndex::new("abc").unwrap();
    assert!(!index.has_substring(b"abcd"));
    assert_eq!(index.count_matches(b"abcabc"), 0);
}

#[test]
fn empty_pattern_matches_every_row() {
    let index = FmIndex::new("abc").unwrap();
    assert_eq!(index.range(b""), 0..4);
    assert_eq!(sorted_occurrences(&index, b""), vec![0, 1, 2, 3]);
    assert!(index.has_suffix(b""));
}

#[test]
fn unknown_symbols_never_match() {
    let index = FmIndex::new("banana").unwrap();
    for pattern in [&b"c"[..], b"anc", b"zz", b"\xff", b"#a"] {
        assert!(index.range(pattern).is_empty(), "{:?}", pattern);
        assert!(!index.has_substring(pattern));
        assert!(!index.has_suffix(pattern));
    }
}

#[test]
fn fixture_matches_linear_scan_for_every_short_pattern() {
    let text = DNA_FIXTURE.as_bytes();
    for (checkpoint, sampling) in [(1, 1), (50, 50), (7, 3), (64, 32)] {
        let index = build_index(text, checkpoint, sampling);
        for a in b"ACGT" {
            for b in b"ACGT" {
                for c in b"ACGT" {
                    let pattern = [*a, *b, *c];
                    assert_eq!(
                        sorted_occurrences(&index, &pattern),
                        naive_occurrences(text, &pattern),
                        "pattern {:?} intervals ({}, {})",
                        String::from_utf8_lossy(&pattern),
                        checkpoint,
                        sampling
                    );
                }
            }
        }
    }
}

#[test]
fn homopolymer_run() {
    let text = vec![b'a'; 200];
    let index = build_index(&text, 16, 16);
    assert_eq!(index.count_matches(b"aaaa"), 197);
    assert_eq!(sorted_occurrences(&index, b"a"), (0..200).collect::<Vec<_>>());
    assert!(index.has_suffix(&text));
}
