use crate::digits::Digits;
use crate::enumerate::Keyed;
use crate::sorts::*;
use crate::tuner::{Algorithm, Tuner, TuningParams};
use crate::utils::*;
#[cfg(feature = "multi-threaded")]
use rayon::current_num_threads;
#[cfg(feature = "multi-threaded")]
use std::cmp::max;

pub struct Sorter<'a> {
    multi_threaded: bool,
    pub(crate) tuner: &'a (dyn Tuner + Send + Sync),
}

impl<'a> Sorter<'a> {
    pub fn new(multi_threaded: bool, tuner: &'a (dyn Tuner + Send + Sync)) -> Self {
        Self {
            multi_threaded,
            tuner,
        }
    }

    #[inline]
    fn threads(&self) -> usize {
        #[cfg(feature = "multi-threaded")]
        let threads = if self.multi_threaded {
            current_num_threads()
        } else {
            1
        };

        #[cfg(not(feature = "multi-threaded"))]
        let threads = {
            let _ = self.multi_threaded;
            1
        };

        threads
    }

    #[inline]
    fn run_sort(&self, bucket: &mut [Keyed], digits: &Digits, algorithm: Algorithm, threads: usize) {
        #[cfg(not(feature = "multi-threaded"))]
        let _ = threads;

        match algorithm {
            Algorithm::Comparative => comparative_sort(bucket),
            Algorithm::Lsb => lsb_sort_adapter(false, bucket, digits),
            Algorithm::LrLsb => lsb_sort_adapter(true, bucket, digits),
            #[cfg(feature = "multi-threaded")]
            Algorithm::MtLsb => {
                let tile_size = max(30_000, cdiv(bucket.len(), threads));
                mt_lsb_sort_adapter(bucket, digits, tile_size)
            }
        }
    }

    /// Sort keyed pairs ascending by key, keeping the relative order of equal keys.
    pub fn sort_keyed(&self, bucket: &mut [Keyed], digits: &Digits) {
        if bucket.len() <= 1 || digits.passes() == 0 {
            return;
        }

        // The tuner sees the first pass that actually moves anything.
        let counts = (0..digits.passes())
            .map(|pass| get_counts(bucket, digits, pass))
            .find(|counts| !is_homogenous_bucket(counts));

        let counts = match counts {
            Some(counts) => counts,
            // Every key is identical
            None => return,
        };

        let threads = self.threads();
        let tp = TuningParams {
            threads,
            input_len: bucket.len(),
            passes: digits.passes(),
            radix: digits.radix(),
        };

        let algorithm = self.tuner.pick_algorithm(&tp, &counts);

        #[cfg(feature = "work_profiles")]
        println!("(-) SORT {:?} len={} passes={}", algorithm, tp.input_len, tp.passes);

        self.run_sort(bucket, digits, algorithm, threads);
    }
}
