//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation. It holds the
//! slow, obviously-correct oracles the index is checked against.

#![doc(hidden)]

/// Sort every suffix directly. O(n² log n) worst case.
pub fn naive_suffix_array(text: &[u8]) -> Vec<usize> {
    let mut positions: Vec<usize> = (0..text.len()).collect();
    positions.sort_by(|&i, &j| text[i..].cmp(&text[j..]));
    positions
}

/// Every start offset of `pattern` in `text`, by linear scan.
///
/// The empty pattern occurs at every offset `0..=text.len()`, matching the
/// index, which counts the position of the sentinel too.
pub fn naive_occurrences(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    if pattern.is_empty() {
        return (0..=text.len()).collect();
    }
    if pattern.len() > text.len() {
        return Vec::new();
    }
    text.windows(pattern.len())
        .enumerate()
        .filter(|(_, window)| *window == pattern)
        .map(|(offset, _)| offset)
        .collect()
}

/// Append `sentinel` to a copy of `text`.
pub fn terminated(text: &[u8], sentinel: u8) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len() + 1);
    out.extend_from_slice(text);
    out.push(sentinel);
    out
}
