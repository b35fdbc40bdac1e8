//! `lsb_sort` is the single-threaded Least-Significant Digit first radix sort. Each pass is a
//! stable counting sort by one digit, ping-ponging between the working buffer and a single
//! scratch buffer.
//!
//! ## Characteristics
//!
//!  * out-of-place
//!  * single-threaded
//!  * stable
//!  * lsd-first
//!
//! ## Optimizations
//!
//!  * Passes in which every element shares the same digit are skipped.
//!  * The standard variant counts the next pass while sorting the current one.
//!  * The `lr` variant writes each bucket from both ends, which suits skewed digit distributions.

use crate::digits::Digits;
use crate::enumerate::Keyed;
use crate::sorts::out_of_place_sort::{
    lr_out_of_place_sort, out_of_place_sort, out_of_place_sort_with_counts,
};
use crate::utils::*;

pub fn lsb_sort_adapter(lr: bool, bucket: &mut [Keyed], digits: &Digits) {
    if bucket.len() < 2 {
        return;
    }

    let mut tmp_bucket = vec![Keyed::default(); bucket.len()];
    let passes = digits.passes();
    let mut invert = false;
    let mut next_counts: Option<Vec<usize>> = None;

    for pass in 0..passes {
        let counts = match next_counts.take() {
            Some(counts) => counts,
            None if invert => get_counts(&tmp_bucket, digits, pass),
            None => get_counts(bucket, digits, pass),
        };

        if is_homogenous_bucket(&counts) {
            continue;
        }

        #[cfg(feature = "work_profiles")]
        println!("({}) LSB lr={}", pass, lr);

        let should_count = !lr && pass + 1 < passes;

        match (invert, should_count) {
            (true, true) => {
                next_counts = Some(out_of_place_sort_with_counts(
                    &tmp_bucket,
                    bucket,
                    &counts,
                    digits,
                    pass,
                ))
            }
            (true, false) if lr => {
                lr_out_of_place_sort(&tmp_bucket, bucket, &counts, digits, pass)
            }
            (true, false) => out_of_place_sort(&tmp_bucket, bucket, &counts, digits, pass),
            (false, true) => {
                next_counts = Some(out_of_place_sort_with_counts(
                    bucket,
                    &mut tmp_bucket,
                    &counts,
                    digits,
                    pass,
                ))
            }
            (false, false) if lr => {
                lr_out_of_place_sort(bucket, &mut tmp_bucket, &counts, digits, pass)
            }
            (false, false) => out_of_place_sort(bucket, &mut tmp_bucket, &counts, digits, pass),
        };

        invert = !invert;
    }

    if invert {
        bucket.copy_from_slice(&tmp_bucket);
    }
}
