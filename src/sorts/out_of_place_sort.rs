//! `out_of_place_sort` is an out-of-place single-threaded counting sort of keyed pairs by one
//! digit. It is the classic academic building block of an LSD radix sort: prefix sums of the
//! per-digit counts give the start of each bucket in the destination, and elements are copied in
//! the order they are read, so each pass is stable.
//!
//! ### Standard out_of_place_sort
//!
//! A very simple out-of-place counting sort. The only notable optimization is to process data in
//! chunks to take some advantage of multiple execution ports in each CPU core.
//!
//! ### out_of_place_sort_with_counts
//!
//! As the name suggests, this variant is the same as the standard out_of_place_sort except that
//! as it sorts into the output array, it also counts the digits of the next pass.
//!
//! ### lr_out_of_place_sort
//!
//! This variant uses two sets of cursors, one writing each bucket from its start and one writing
//! it from its end. It remains stable as it reads the input from the right for every value placed
//! from the right side of each output bucket.
//!
//! This helps when there are many identical digits, as two identical digits in a row would
//! otherwise serialize on the same cursor.
//!
//! ## Characteristics
//!
//!  * out-of-place
//!  * single-threaded
//!  * stable
//!  * lsd-first

use crate::digits::Digits;
use crate::enumerate::Keyed;
use crate::utils::*;

#[inline]
pub fn out_of_place_sort(
    src_bucket: &[Keyed],
    dst_bucket: &mut [Keyed],
    counts: &[usize],
    digits: &Digits,
    pass: usize,
) {
    if src_bucket.len() < 2 {
        dst_bucket.copy_from_slice(src_bucket);
        return;
    }

    let mut prefix_sums = get_prefix_sums(counts);

    let chunks = src_bucket.chunks_exact(8);
    let rem = chunks.remainder();

    chunks.into_iter().for_each(|chunk| {
        let a = digits.digit(chunk[0].key, pass);
        let b = digits.digit(chunk[1].key, pass);
        let c = digits.digit(chunk[2].key, pass);
        let d = digits.digit(chunk[3].key, pass);
        let e = digits.digit(chunk[4].key, pass);
        let f = digits.digit(chunk[5].key, pass);
        let g = digits.digit(chunk[6].key, pass);
        let h = digits.digit(chunk[7].key, pass);

        dst_bucket[prefix_sums[a]] = chunk[0];
        prefix_sums[a] += 1;
        dst_bucket[prefix_sums[b]] = chunk[1];
        prefix_sums[b] += 1;
        dst_bucket[prefix_sums[c]] = chunk[2];
        prefix_sums[c] += 1;
        dst_bucket[prefix_sums[d]] = chunk[3];
        prefix_sums[d] += 1;
        dst_bucket[prefix_sums[e]] = chunk[4];
        prefix_sums[e] += 1;
        dst_bucket[prefix_sums[f]] = chunk[5];
        prefix_sums[f] += 1;
        dst_bucket[prefix_sums[g]] = chunk[6];
        prefix_sums[g] += 1;
        dst_bucket[prefix_sums[h]] = chunk[7];
        prefix_sums[h] += 1;
    });

    rem.iter().for_each(|val| {
        let b = digits.digit(val.key, pass);
        dst_bucket[prefix_sums[b]] = *val;
        prefix_sums[b] += 1;
    });
}

/// Same as `out_of_place_sort`, also returning the counts for `pass + 1`.
#[inline]
pub fn out_of_place_sort_with_counts(
    src_bucket: &[Keyed],
    dst_bucket: &mut [Keyed],
    counts: &[usize],
    digits: &Digits,
    pass: usize,
) -> Vec<usize> {
    let next_pass = pass + 1;
    let next_buckets = digits.buckets(next_pass);

    if src_bucket.is_empty() {
        return vec![0usize; next_buckets];
    }

    let mut prefix_sums = get_prefix_sums(counts);
    let mut next_counts_0 = vec![0usize; next_buckets];
    let mut next_counts_1 = vec![0usize; next_buckets];

    let chunks = src_bucket.chunks_exact(4);
    let rem = chunks.remainder();

    chunks.into_iter().for_each(|chunk| {
        let b0 = digits.digit(chunk[0].key, pass);
        let bn0 = digits.digit(chunk[0].key, next_pass);
        let b1 = digits.digit(chunk[1].key, pass);
        let bn1 = digits.digit(chunk[1].key, next_pass);
        let b2 = digits.digit(chunk[2].key, pass);
        let bn2 = digits.digit(chunk[2].key, next_pass);
        let b3 = digits.digit(chunk[3].key, pass);
        let bn3 = digits.digit(chunk[3].key, next_pass);

        dst_bucket[prefix_sums[b0]] = chunk[0];
        prefix_sums[b0] += 1;
        next_counts_0[bn0] += 1;
        dst_bucket[prefix_sums[b1]] = chunk[1];
        prefix_sums[b1] += 1;
        next_counts_1[bn1] += 1;
        dst_bucket[prefix_sums[b2]] = chunk[2];
        prefix_sums[b2] += 1;
        next_counts_0[bn2] += 1;
        dst_bucket[prefix_sums[b3]] = chunk[3];
        prefix_sums[b3] += 1;
        next_counts_1[bn3] += 1;
    });

    rem.iter().for_each(|val| {
        let b = digits.digit(val.key, pass);
        let bn = digits.digit(val.key, next_pass);
        dst_bucket[prefix_sums[b]] = *val;
        prefix_sums[b] += 1;
        next_counts_0[bn] += 1;
    });

    for (c0, c1) in next_counts_0.iter_mut().zip(next_counts_1.iter()) {
        *c0 += c1;
    }

    next_counts_0
}

#[inline]
pub fn lr_out_of_place_sort(
    src_bucket: &[Keyed],
    dst_bucket: &mut [Keyed],
    counts: &[usize],
    digits: &Digits,
    pass: usize,
) {
    if src_bucket.len() < 2 {
        dst_bucket.copy_from_slice(src_bucket);
        return;
    }

    let mut offsets = get_prefix_sums(counts);
    let mut ends: Vec<usize> = offsets
        .iter()
        .zip(counts.iter())
        .map(|(o, c)| o + c.saturating_sub(1))
        .collect();

    let mut left = 0;
    let mut right = src_bucket.len() - 1;
    let pre = src_bucket.len() % 8;

    for _ in 0..pre {
        let b = digits.digit(src_bucket[right].key, pass);

        dst_bucket[ends[b]] = src_bucket[right];
        ends[b] = ends[b].wrapping_sub(1);
        right = right.saturating_sub(1);
    }

    if pre == src_bucket.len() {
        return;
    }

    let end = (src_bucket.len() - pre) / 2;

    while left < end {
        let bl_0 = digits.digit(src_bucket[left].key, pass);
        let bl_1 = digits.digit(src_bucket[left + 1].key, pass);
        let bl_2 = digits.digit(src_bucket[left + 2].key, pass);
        let bl_3 = digits.digit(src_bucket[left + 3].key, pass);
        let br_0 = digits.digit(src_bucket[right].key, pass);
        let br_1 = digits.digit(src_bucket[right - 1].key, pass);
        let br_2 = digits.digit(src_bucket[right - 2].key, pass);
        let br_3 = digits.digit(src_bucket[right - 3].key, pass);

        dst_bucket[offsets[bl_0]] = src_bucket[left];
        offsets[bl_0] = offsets[bl_0].wrapping_add(1);
        dst_bucket[ends[br_0]] = src_bucket[right];
        ends[br_0] = ends[br_0].wrapping_sub(1);
        dst_bucket[offsets[bl_1]] = src_bucket[left + 1];
        offsets[bl_1] = offsets[bl_1].wrapping_add(1);
        dst_bucket[ends[br_1]] = src_bucket[right - 1];
        ends[br_1] = ends[br_1].wrapping_sub(1);
        dst_bucket[offsets[bl_2]] = src_bucket[left + 2];
        offsets[bl_2] = offsets[bl_2].wrapping_add(1);
        dst_bucket[ends[br_2]] = src_bucket[right - 2];
        ends[br_2] = ends[br_2].wrapping_sub(1);
        dst_bucket[offsets[bl_3]] = src_bucket[left + 3];
        offsets[bl_3] = offsets[bl_3].wrapping_add(1);
        dst_bucket[ends[br_3]] = src_bucket[right - 3];
        ends[br_3] = ends[br_3].wrapping_sub(1);

        left += 4;
        right -= 4;
    }
}
