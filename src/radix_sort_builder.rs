use crate::digits::{check_radix, Digits, DEFAULT_RADIX};
use crate::enumerate::{enumerate_keys, enumerate_rebased_keys};
use crate::permute::apply_order;
use crate::sorter::Sorter;
use crate::tuner::Tuner;
#[cfg(feature = "multi-threaded")]
use crate::tuners::StandardTuner;
use crate::tuners::SingleThreadedTuner;
use crate::{EnumKey, SortError};
use std::marker::PhantomData;

pub struct RadixSortBuilder<'a, T, K, F> {
    data: &'a mut [T],
    key: F,
    radix: usize,
    digit_width: Option<usize>,
    rebase: bool,
    multi_threaded: bool,
    tuner: &'a (dyn Tuner + Send + Sync),
    _key: PhantomData<fn() -> K>,
}

impl<'a, T, K, F> RadixSortBuilder<'a, T, K, F>
where
    T: Send + Sync,
    K: EnumKey,
    F: Fn(&T) -> K + Sync,
{
    pub(crate) fn new(data: &'a mut [T], key: F) -> Self {
        #[cfg(feature = "multi-threaded")]
        let (multi_threaded, tuner): (bool, &'a (dyn Tuner + Send + Sync)) = (true, &StandardTuner);

        #[cfg(not(feature = "multi-threaded"))]
        let (multi_threaded, tuner): (bool, &'a (dyn Tuner + Send + Sync)) =
            (false, &SingleThreadedTuner);

        Self {
            data,
            key,
            radix: DEFAULT_RADIX,
            digit_width: None,
            rebase: false,
            multi_threaded,
            tuner,
            _key: PhantomData,
        }
    }

    /// Number of buckets per pass. Must be at least 2; checked when sorting.
    pub fn with_radix(mut self, radix: usize) -> Self {
        self.radix = radix;

        self
    }

    /// Use exactly `digits` passes instead of deriving them from the largest key. Sorting fails
    /// if any key needs more digits than this.
    pub fn with_digit_width(mut self, digits: usize) -> Self {
        self.digit_width = Some(digits);

        self
    }

    /// Shift every key down by the smallest key before sorting. This allows negative keys and
    /// makes the number of passes depend only on the spread of the keys.
    pub fn with_rebase(mut self) -> Self {
        self.rebase = true;

        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.multi_threaded = parallel && cfg!(feature = "multi-threaded");

        self
    }

    pub fn with_single_threaded_tuner(mut self) -> Self {
        self.tuner = &SingleThreadedTuner;

        self
    }

    pub fn with_tuner(mut self, tuner: &'a (dyn Tuner + Send + Sync)) -> Self {
        self.tuner = tuner;

        self
    }

    pub fn sort(self) -> Result<(), SortError> {
        check_radix(self.radix)?;

        // By definition, this is already sorted
        if self.data.len() <= 1 {
            return Ok(());
        }

        let enumerated = if self.rebase {
            enumerate_rebased_keys(self.data, &self.key, self.multi_threaded)?
        } else {
            enumerate_keys(self.data, &self.key, self.multi_threaded)?
        };

        let digits = match self.digit_width {
            Some(width) => Digits::with_width(self.radix, width, enumerated.max_key)?,
            None => Digits::for_max_key(self.radix, enumerated.max_key)?,
        };

        if enumerated.already_sorted || digits.passes() == 0 {
            return Ok(());
        }

        let mut keyed = enumerated.keyed;
        let sorter = Sorter::new(self.multi_threaded, self.tuner);
        sorter.sort_keyed(&mut keyed, &digits);

        apply_order(self.data, &keyed);

        Ok(())
    }
}
