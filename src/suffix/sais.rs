// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! SA-IS: Suffix Array by Induced Sorting
//!
//! Linear-time O(n) suffix array construction. The input must already end with
//! a unique minimal sentinel; [`FmIndex`](crate::FmIndex) guarantees that before
//! calling any builder.
//!
//! # Algorithm Overview
//!
//! ```text
//! Input: "banana$"
//!
//! Step 1: Classify suffixes
//! ┌───┬───┬───┬───┬───┬───┬───┐
//! │ b │ a │ n │ a │ n │ a │ $ │
//! ├───┼───┼───┼───┼───┼───┼───┤
//! │ L │ S │ L │ S │ L │ L │ S │   (S = smaller than next, L = larger)
//! └───┴───┴───┴───┴───┴───┴───┘
//!
//! Step 2: LMS (Leftmost S-type) positions: 1, 3, 6
//!
//! Step 3: Induced sorting
//!         - Place LMS suffixes at bucket tails
//!         - Induce L-type positions (left-to-right)
//!         - Induce S-type positions (right-to-left)
//!
//! Step 4: If LMS substrings are not unique, recurse on the reduced string
//!
//! Step 5: Induce the final suffix array from the sorted LMS order
//!
//! Output: [6, 5, 3, 1, 0, 4, 2]
//! ```
//!
//! # References
//!
//! - Nong, Zhang, Chan (2009): "Linear Suffix Array Construction by Almost Pure Induced-Sorting"
//! - <https://doi.org/10.1109/DCC.2009.42>

use super::SuffixArrayBuilder;

/// Suffix type classification.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum SuffixType {
    /// S-type: suffix is lexicographically smaller than the next suffix
    S,
    /// L-type: suffix is lexicographically larger than the next suffix
    L,
}

/// Default suffix-array collaborator: SA-IS over the raw byte alphabet.
#[derive(Debug, Clone, Copy, Default)]
pub struct SaisBuilder;

impl SuffixArrayBuilder for SaisBuilder {
    fn suffix_array(&self, text: &[u8]) -> Vec<usize> {
        sais(text, 256)
    }
}

/// Induced sorting over any integer alphabet `0..alphabet_size`.
///
/// The byte level and every recursion level share this routine; the reduced
/// strings use LMS names as symbols.
fn sais<T>(text: &[T], alphabet_size: usize) -> Vec<usize>
where
    T: Copy + Ord + Into<usize>,
{
    let n = text.len();
    match n {
        0 => return Vec::new(),
        1 => return vec![0],
        2 => return if text[0] <= text[1] { vec![0, 1] } else { vec![1, 0] },
        _ => {}
    }

    let types = classify_suffixes(text);
    let lms_positions: Vec<usize> = (1..n).filter(|&i| is_lms(&types, i)).collect();

    if lms_positions.is_empty() {
        // Monotone input without a terminator: only reachable in a reduced string
        let mut sa: Vec<usize> = (0..n).collect();
        sa.sort_by(|&a, &b| text[a..].cmp(&text[b..]));
        return sa;
    }

    let bucket_sizes = compute_bucket_sizes(text, alphabet_size);

    // First pass: LMS order is arbitrary, induction sorts the LMS substrings
    let sa = induce(text, &types, &bucket_sizes, &lms_positions);

    // Name LMS substrings in sorted order
    let mut name = 0usize;
    let mut prev_pos: Option<usize> = None;
    let mut lms_names = vec![0usize; n];

    for &pos in &sa {
        if !is_lms(&types, pos) {
            continue;
        }

        if let Some(prev) = prev_pos {
            if !lms_substrings_equal(text, &types, prev, pos) {
                name += 1;
            }
        }

        lms_names[pos] = name;
        prev_pos = Some(pos);
    }

    let unique_count = name + 1;
    let reduced: Vec<usize> = lms_positions.iter().map(|&pos| lms_names[pos]).collect();

    let sorted_lms_indices = if unique_count < lms_positions.len() {
        sais(&reduced, unique_count)
    } else {
        // All unique: the names themselves give the order
        let mut order: Vec<usize> = (0..reduced.len()).collect();
        order.sort_by_key(|&i| reduced[i]);
        order
    };

    let sorted_lms: Vec<usize> = sorted_lms_indices
        .iter()
        .map(|&i| lms_positions[i])
        .collect();

    induce(text, &types, &bucket_sizes, &sorted_lms)
}

/// Place LMS suffixes at bucket tails, then induce L-type and S-type suffixes.
fn induce<T>(text: &[T], types: &[SuffixType], bucket_sizes: &[usize], lms: &[usize]) -> Vec<usize>
where
    T: Copy + Into<usize>,
{
    let n = text.len();
    let mut sa = vec![usize::MAX; n];

    let mut tails = compute_bucket_tails(bucket_sizes);
    for &pos in lms.iter().rev() {
        let c: usize = text[pos].into();
        tails[c] -= 1;
        sa[tails[c]] = pos;
    }

    let mut heads = compute_bucket_heads(bucket_sizes);
    for i in 0..n {
        if sa[i] == usize::MAX || sa[i] == 0 {
            continue;
        }
        let j = sa[i] - 1;
        if types[j] == SuffixType::L {
            let c: usize = text[j].into();
            sa[heads[c]] = j;
            heads[c] += 1;
        }
    }

    let mut tails = compute_bucket_tails(bucket_sizes);
    for i in (0..n).rev() {
        if sa[i] == usize::MAX || sa[i] == 0 {
            continue;
        }
        let j = sa[i] - 1;
        if types[j] == SuffixType::S {
            let c: usize = text[j].into();
            tails[c] -= 1;
            sa[tails[c]] = j;
        }
    }

    sa
}

/// Classify each suffix as S-type or L-type. The last position is always S.
fn classify_suffixes<T: Ord>(text: &[T]) -> Vec<SuffixType> {
    let n = text.len();
    let mut types = vec![SuffixType::S; n];

    for i in (0..n - 1).rev() {
        types[i] = if text[i] > text[i + 1] {
            SuffixType::L
        } else if text[i] < text[i + 1] {
            SuffixType::S
        } else {
            types[i + 1]
        };
    }

    types
}

#[inline]
fn is_lms(types: &[SuffixType], i: usize) -> bool {
    i > 0 && i < types.len() && types[i] == SuffixType::S && types[i - 1] == SuffixType::L
}

fn compute_bucket_sizes<T: Copy + Into<usize>>(text: &[T], alphabet_size: usize) -> Vec<usize> {
    let mut sizes = vec![0; alphabet_size];
    for &c in text {
        sizes[c.into()] += 1;
    }
    sizes
}

fn compute_bucket_heads(sizes: &[usize]) -> Vec<usize> {
    let mut heads = vec![0; sizes.len()];
    let mut sum = 0;
    for (i, &size) in sizes.iter().enumerate() {
        heads[i] = sum;
        sum += size;
    }
    heads
}

fn compute_bucket_tails(sizes: &[usize]) -> Vec<usize> {
    let mut tails = vec![0; sizes.len()];
    let mut sum = 0;
    for (i, &size) in sizes.iter().enumerate() {
        sum += size;
        tails[i] = sum;
    }
    tails
}

/// Compare two LMS substrings (up to and including the next LMS position).
fn lms_substrings_equal<T: Ord>(text: &[T], types: &[SuffixType], i: usize, j: usize) -> bool {
    if i == j {
        return true;
    }

    let n = text.len();
    let mut k = 0;

    loop {
        let pi = i + k;
        let pj = j + k;

        if pi >= n || pj >= n {
            return pi >= n && pj >= n;
        }

        if text[pi] != text[pj] || types[pi] != types[pj] {
            return false;
        }

        if k > 0 {
            let lms_i = is_lms(types, pi);
            let lms_j = is_lms(types, pj);
            if lms_i && lms_j {
                return true;
            }
            if lms_i != lms_j {
                return false;
            }
        }

        k += 1;
    }
}
