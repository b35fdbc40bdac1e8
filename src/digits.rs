//! `Digits` describes how keys are split into digits for each pass of an LSD radix sort.
//!
//! A key `k` has digit `(k / radix^p) mod radix` at pass `p`, pass 0 being the least significant.
//! When the radix is a power of two this is a shift and a mask instead of a division.
//!
//! The number of passes is either derived from the largest key, or given explicitly as a digit
//! width. Each pass also carries the number of buckets it really needs: no digit at pass `p` can
//! be larger than `max_key / radix^p`, so the top pass of a sort with a small maximum key does not
//! allocate `radix` counters.

use crate::SortError;

pub const DEFAULT_RADIX: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digits {
    radix: u64,
    bits: Option<u32>,
    divisors: Vec<u64>,
    buckets: Vec<usize>,
}

#[inline]
pub fn check_radix(radix: usize) -> Result<(), SortError> {
    if radix < 2 {
        return Err(SortError::InvalidRadix { radix });
    }

    Ok(())
}

/// Number of digits needed to write `key` in `radix`. Zero needs none.
#[inline]
pub fn digit_count(radix: u64, mut key: u64) -> usize {
    let mut digits = 0;
    while key > 0 {
        digits += 1;
        key /= radix;
    }

    digits
}

impl Digits {
    pub fn for_max_key(radix: usize, max_key: u64) -> Result<Self, SortError> {
        check_radix(radix)?;

        let passes = digit_count(radix as u64, max_key);
        Ok(Self::build(radix as u64, passes, max_key))
    }

    pub fn with_width(radix: usize, width: usize, max_key: u64) -> Result<Self, SortError> {
        check_radix(radix)?;

        let needed = digit_count(radix as u64, max_key);
        if needed > width {
            return Err(SortError::KeyExceedsDigitWidth {
                key: max_key,
                digits: width,
                radix,
            });
        }

        // Digits above what a u64 can hold are zero for every key.
        let passes = width.min(digit_count(radix as u64, u64::MAX));
        Ok(Self::build(radix as u64, passes, max_key))
    }

    fn build(radix: u64, passes: usize, max_key: u64) -> Self {
        let bits = if radix.is_power_of_two() {
            Some(radix.trailing_zeros())
        } else {
            None
        };

        let mut divisors = Vec::with_capacity(passes);
        let mut buckets = Vec::with_capacity(passes);
        let mut divisor = 1u64;

        for p in 0..passes {
            if p > 0 {
                // radix^p <= u64::MAX for every pass below digit_count(radix, u64::MAX)
                divisor = divisor.saturating_mul(radix);
            }

            divisors.push(divisor);
            buckets.push(radix.min((max_key / divisor).saturating_add(1)) as usize);
        }

        Self {
            radix,
            bits,
            divisors,
            buckets,
        }
    }

    #[inline]
    pub fn passes(&self) -> usize {
        self.divisors.len()
    }

    #[inline]
    pub fn radix(&self) -> usize {
        self.radix as usize
    }

    /// Number of buckets pass `pass` distributes into.
    #[inline]
    pub fn buckets(&self, pass: usize) -> usize {
        self.buckets[pass]
    }

    #[inline]
    pub fn digit(&self, key: u64, pass: usize) -> usize {
        match self.bits {
            Some(bits) => ((key >> (bits * pass as u32)) & (self.radix - 1)) as usize,
            None => ((key / self.divisors[pass]) % self.radix) as usize,
        }
    }
}
