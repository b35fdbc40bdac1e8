//! # keyed-radix
//!
//! keyed-radix is a stable LSD radix sort for elements of any type that can be cheaply
//! enumerated, that is, mapped to a non-negative integer key.
//!
//! ## Usage
//!
//! Slices of integers can be sorted directly with `my_vec.radix_sort()`. Anything else is sorted
//! with a key function returning one of the integer types implementing `EnumKey`:
//!
//! ```
//! use keyed_radix::RadixSort;
//!
//! let mut fruit = vec!["apple", "kiwi", "fig", "plum"];
//! fruit.radix_sort_by_key(|s| s.len()).unwrap();
//!
//! assert_eq!(fruit, vec!["fig", "kiwi", "plum", "apple"]);
//! ```
//!
//! To get a new sorted `Vec` instead, use `keyed_radix::sort` or `keyed_radix::sort_with_radix`:
//!
//! ```
//! let sorted = keyed_radix::sort_with_radix(vec![300u32, 1, 200, 2, 100], |v| *v, 10).unwrap();
//!
//! assert_eq!(sorted, vec![1, 2, 100, 200, 300]);
//! ```
//!
//! ## Behaviour
//!
//!  * The sort is stable: elements with equal keys keep their input order.
//!  * The key function is called exactly once per element.
//!  * The radix (number of buckets per pass) defaults to 256 and must be at least 2.
//!  * The number of passes is the number of digits of the largest key in that radix, unless a
//!    digit width is given with `RadixSortBuilder::with_digit_width`.
//!  * Negative keys are rejected, unless the sort is rebased with
//!    `RadixSortBuilder::with_rebase`, which shifts every key down by the smallest key.
//!  * All errors are reported before any element is moved.
//!
//! ## Configuration
//!
//! ```
//! use keyed_radix::RadixSort;
//!
//! let mut temperatures = vec![12i32, -4, 7, -15, 0];
//!
//! temperatures
//!     .radix_sort_builder(|t| *t)
//!     .with_radix(16)
//!     .with_rebase()
//!     .with_parallel(false)
//!     .with_single_threaded_tuner()
//!     .sort()
//!     .unwrap();
//!
//! assert_eq!(temperatures, vec![-15, -4, 0, 7, 12]);
//! ```
//!
//! ## License
//!
//! Licensed under either of
//!
//! * Apache License, Version 2.0, ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

mod digits;
mod enum_key;
mod enum_key_impl;
mod enumerate;
mod error;
mod permute;
mod radix_sort_builder;
mod sorter;
mod sorts;
pub mod tuner;
mod tuners;
mod utils;


pub use digits::DEFAULT_RADIX;
pub use enum_key::EnumKey;
pub use error::{ErrorKind, SortError};
pub use radix_sort_builder::RadixSortBuilder;
#[cfg(feature = "multi-threaded")]
pub use tuners::StandardTuner;
pub use tuners::SingleThreadedTuner;

pub trait RadixSort<T> {
    /// Sort elements that are their own keys.
    fn radix_sort(&mut self) -> Result<(), SortError>
    where
        T: EnumKey;

    /// Sort by the key `key` assigns to each element, keeping the order of equal keys.
    fn radix_sort_by_key<K, F>(&mut self, key: F) -> Result<(), SortError>
    where
        K: EnumKey,
        F: Fn(&T) -> K + Sync;

    /// Configure a sort by `key` before running it with `RadixSortBuilder::sort`.
    fn radix_sort_builder<K, F>(&mut self, key: F) -> RadixSortBuilder<'_, T, K, F>
    where
        K: EnumKey,
        F: Fn(&T) -> K + Sync;
}

impl<T> RadixSort<T> for [T]
where
    T: Send + Sync,
{
    fn radix_sort(&mut self) -> Result<(), SortError>
    where
        T: EnumKey,
    {
        self.radix_sort_builder(|v: &T| *v).sort()
    }

    fn radix_sort_by_key<K, F>(&mut self, key: F) -> Result<(), SortError>
    where
        K: EnumKey,
        F: Fn(&T) -> K + Sync,
    {
        self.radix_sort_builder(key).sort()
    }

    fn radix_sort_builder<K, F>(&mut self, key: F) -> RadixSortBuilder<'_, T, K, F>
    where
        K: EnumKey,
        F: Fn(&T) -> K + Sync,
    {
        RadixSortBuilder::new(self, key)
    }
}

impl<T> RadixSort<T> for Vec<T>
where
    T: Send + Sync,
{
    fn radix_sort(&mut self) -> Result<(), SortError>
    where
        T: EnumKey,
    {
        self.as_mut_slice().radix_sort()
    }

    fn radix_sort_by_key<K, F>(&mut self, key: F) -> Result<(), SortError>
    where
        K: EnumKey,
        F: Fn(&T) -> K + Sync,
    {
        self.as_mut_slice().radix_sort_by_key(key)
    }

    fn radix_sort_builder<K, F>(&mut self, key: F) -> RadixSortBuilder<'_, T, K, F>
    where
        K: EnumKey,
        F: Fn(&T) -> K + Sync,
    {
        RadixSortBuilder::new(self.as_mut_slice(), key)
    }
}

/// Return `elements` sorted by `key` with the default radix of 256.
pub fn sort<T, K, F>(elements: Vec<T>, key: F) -> Result<Vec<T>, SortError>
where
    T: Send + Sync,
    K: EnumKey,
    F: Fn(&T) -> K + Sync,
{
    sort_with_radix(elements, key, DEFAULT_RADIX)
}

/// Return `elements` sorted by `key`, distributing into `radix` buckets per pass.
pub fn sort_with_radix<T, K, F>(
    mut elements: Vec<T>,
    key: F,
    radix: usize,
) -> Result<Vec<T>, SortError>
where
    T: Send + Sync,
    K: EnumKey,
    F: Fn(&T) -> K + Sync,
{
    elements.radix_sort_builder(key).with_radix(radix).sort()?;

    Ok(elements)
}
