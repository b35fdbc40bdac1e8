//! Key enumeration. The key function is called exactly once per element and its result is cached
//! next to the element's input position, so every later pass only moves small `Copy` pairs.

use crate::{EnumKey, SortError};
#[cfg(feature = "multi-threaded")]
use rayon::prelude::*;

#[cfg(feature = "multi-threaded")]
const PAR_ENUMERATE_THRESHOLD: usize = 100_000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Keyed {
    pub key: u64,
    pub index: usize,
}

#[derive(Debug)]
pub struct Enumerated {
    pub keyed: Vec<Keyed>,
    pub max_key: u64,
    pub already_sorted: bool,
}

#[inline]
fn to_ordinal(index: usize, key: i128) -> Result<u64, SortError> {
    if key < 0 {
        Err(SortError::NegativeKey { index, key })
    } else if key > u64::MAX as i128 {
        Err(SortError::KeyOutOfRange { index, key })
    } else {
        Ok(key as u64)
    }
}

fn wide_keys<T, K, F>(data: &[T], key: &F, parallel: bool) -> Vec<i128>
where
    T: Sync,
    K: EnumKey,
    F: Fn(&T) -> K + Sync,
{
    if use_parallel(parallel, data.len()) {
        #[cfg(feature = "multi-threaded")]
        return data.par_iter().map(|v| key(v).to_wide()).collect();
    }

    data.iter().map(|v| key(v).to_wide()).collect()
}

#[inline]
fn use_parallel(parallel: bool, len: usize) -> bool {
    #[cfg(feature = "multi-threaded")]
    let enabled = parallel && len >= PAR_ENUMERATE_THRESHOLD;

    #[cfg(not(feature = "multi-threaded"))]
    let enabled = {
        let _ = (parallel, len);
        false
    };

    enabled
}

fn summarize(keyed: Vec<Keyed>) -> Enumerated {
    let mut max_key = 0;
    let mut already_sorted = true;
    let mut last = 0;

    for k in keyed.iter() {
        if k.key < last {
            already_sorted = false;
        }

        last = k.key;
        max_key = max_key.max(k.key);
    }

    Enumerated {
        keyed,
        max_key,
        already_sorted,
    }
}

/// Compute the validated key of every element. Negative keys are rejected.
pub fn enumerate_keys<T, K, F>(data: &[T], key: &F, parallel: bool) -> Result<Enumerated, SortError>
where
    T: Sync,
    K: EnumKey,
    F: Fn(&T) -> K + Sync,
{
    #[cfg(feature = "work_profiles")]
    println!("(-) ENUMERATE {}", data.len());

    #[cfg(feature = "multi-threaded")]
    {
        if use_parallel(parallel, data.len()) {
            return par_enumerate_keys(data, key);
        }
    }

    let keyed = data
        .iter()
        .enumerate()
        .map(|(index, v)| {
            Ok(Keyed {
                key: to_ordinal(index, key(v).to_wide())?,
                index,
            })
        })
        .collect::<Result<Vec<Keyed>, SortError>>()?;

    Ok(summarize(keyed))
}

#[cfg(feature = "multi-threaded")]
fn par_enumerate_keys<T, K, F>(data: &[T], key: &F) -> Result<Enumerated, SortError>
where
    T: Sync,
    K: EnumKey,
    F: Fn(&T) -> K + Sync,
{
    let wide = wide_keys(data, key, true);

    // The first bad key in input order is reported, as in the sequential path.
    if let Some(index) = wide
        .par_iter()
        .position_first(|w| *w < 0 || *w > u64::MAX as i128)
    {
        to_ordinal(index, wide[index])?;
    }

    let keyed = wide
        .into_par_iter()
        .enumerate()
        .map(|(index, w)| Keyed {
            key: w as u64,
            index,
        })
        .collect();

    Ok(summarize(keyed))
}

/// Compute every key shifted down by the minimum key, so negative keys are accepted and the
/// number of passes depends on the range of keys rather than their magnitude.
pub fn enumerate_rebased_keys<T, K, F>(
    data: &[T],
    key: &F,
    parallel: bool,
) -> Result<Enumerated, SortError>
where
    T: Sync,
    K: EnumKey,
    F: Fn(&T) -> K + Sync,
{
    #[cfg(feature = "work_profiles")]
    println!("(-) ENUMERATE_REBASED {}", data.len());

    let wide = wide_keys(data, key, parallel);
    let (min, max) = match (wide.iter().min(), wide.iter().max()) {
        (Some(min), Some(max)) => (*min, *max),
        _ => {
            return Ok(Enumerated {
                keyed: Vec::new(),
                max_key: 0,
                already_sorted: true,
            })
        }
    };

    if max - min > u64::MAX as i128 {
        return Err(SortError::KeyRangeOverflow { min, max });
    }

    let keyed = wide
        .into_iter()
        .enumerate()
        .map(|(index, w)| Keyed {
            key: (w - min) as u64,
            index,
        })
        .collect();

    Ok(summarize(keyed))
}
