//! `StandardTuner` represents the default tuning of algorithm choices offered by keyed-radix.
//!
//! StandardTuner algorithm choice is:
//!  * multi-threaded
//!  * aware of basic count distributions

use crate::tuner::{Algorithm, Tuner, TuningParams};
use crate::tuners::single_threaded_tuner::is_skewed;

pub struct StandardTuner;
impl Tuner for StandardTuner {
    #[inline]
    fn pick_algorithm(&self, p: &TuningParams, counts: &[usize]) -> Algorithm {
        if p.input_len <= 128 {
            return Algorithm::Comparative;
        }

        // Every tile carries a full set of counters, so tiles only pay off when each tile
        // holds more elements than there are buckets.
        if p.threads > 1 && p.input_len >= 200_000 && p.radix.saturating_mul(p.threads) <= p.input_len
        {
            return Algorithm::MtLsb;
        }

        if p.input_len >= 5_000 && is_skewed(p, counts) {
            Algorithm::LrLsb
        } else {
            Algorithm::Lsb
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(threads: usize, input_len: usize, radix: usize) -> TuningParams {
        TuningParams {
            threads,
            input_len,
            passes: 4,
            radix,
        }
    }

    #[test]
    pub fn test_picks_mt_lsb_for_large_inputs() {
        let counts = vec![1_000usize; 256];
        assert_eq!(
            StandardTuner.pick_algorithm(&params(8, 256_000, 256), &counts),
            Algorithm::MtLsb
        );
    }

    #[test]
    pub fn test_single_thread_never_picks_mt_lsb() {
        let counts = vec![1_000usize; 256];
        assert_eq!(
            StandardTuner.pick_algorithm(&params(1, 256_000, 256), &counts),
            Algorithm::Lsb
        );
    }

    #[test]
    pub fn test_huge_radix_stays_single_threaded() {
        let counts = vec![1usize; 1 << 20];
        assert_eq!(
            StandardTuner.pick_algorithm(&params(8, 1 << 20, 1 << 20), &counts),
            Algorithm::Lsb
        );
    }
}
