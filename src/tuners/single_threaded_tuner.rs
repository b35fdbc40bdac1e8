//! `SingleThreadedTuner` is a tuner which only uses single-threaded algorithms.
//!
//! Typically this will be expected to be used in conjunction with
//! `radix_sort_builder(key).with_parallel(false)` for fully single-threaded operation.
//!
//! SingleThreadedTuner algorithm choice is:
//!  * single-threaded only
//!  * aware of basic count distributions

use crate::tuner::{Algorithm, Tuner, TuningParams};

pub struct SingleThreadedTuner;
impl Tuner for SingleThreadedTuner {
    #[inline]
    fn pick_algorithm(&self, p: &TuningParams, counts: &[usize]) -> Algorithm {
        if p.input_len <= 128 {
            return Algorithm::Comparative;
        }

        if p.input_len >= 5_000 && is_skewed(p, counts) {
            Algorithm::LrLsb
        } else {
            Algorithm::Lsb
        }
    }
}

/// True when one bucket holds at least twice its fair share of the input.
#[inline]
pub(crate) fn is_skewed(p: &TuningParams, counts: &[usize]) -> bool {
    let distribution_threshold = (p.input_len / counts.len().max(1)).max(1) * 2;

    counts.iter().any(|c| *c >= distribution_threshold)
}
