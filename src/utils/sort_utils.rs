use crate::digits::Digits;
use crate::enumerate::Keyed;
#[cfg(feature = "multi-threaded")]
use rayon::prelude::*;

#[inline]
pub fn get_prefix_sums(counts: &[usize]) -> Vec<usize> {
    let mut sums = Vec::with_capacity(counts.len());

    let mut running_total = 0;
    for c in counts.iter() {
        sums.push(running_total);
        running_total += c;
    }

    sums
}

#[inline]
pub fn get_counts(bucket: &[Keyed], digits: &Digits, pass: usize) -> Vec<usize> {
    #[cfg(feature = "work_profiles")]
    println!("({}) COUNT", pass);

    let buckets = digits.buckets(pass);
    let mut counts_1 = vec![0usize; buckets];
    let mut counts_2 = vec![0usize; buckets];
    let mut counts_3 = vec![0usize; buckets];
    let mut counts_4 = vec![0usize; buckets];
    let chunks = bucket.chunks_exact(4);
    let rem = chunks.remainder();

    chunks.into_iter().for_each(|chunk| {
        let a = digits.digit(chunk[0].key, pass);
        let b = digits.digit(chunk[1].key, pass);
        let c = digits.digit(chunk[2].key, pass);
        let d = digits.digit(chunk[3].key, pass);

        counts_1[a] += 1;
        counts_2[b] += 1;
        counts_3[c] += 1;
        counts_4[d] += 1;
    });

    rem.iter().for_each(|v| {
        let b = digits.digit(v.key, pass);
        counts_1[b] += 1;
    });

    for i in 0..buckets {
        counts_1[i] += counts_2[i];
        counts_1[i] += counts_3[i];
        counts_1[i] += counts_4[i];
    }

    counts_1
}

#[inline]
pub const fn cdiv(a: usize, b: usize) -> usize {
    (a + b - 1) / b
}

#[inline]
pub fn get_tile_counts(
    bucket: &[Keyed],
    tile_size: usize,
    digits: &Digits,
    pass: usize,
) -> Vec<Vec<usize>> {
    #[cfg(feature = "work_profiles")]
    println!("({}) TILE_COUNT", pass);

    #[cfg(feature = "multi-threaded")]
    let tiles: Vec<Vec<usize>> = bucket
        .par_chunks(tile_size)
        .map(|chunk| get_counts(chunk, digits, pass))
        .collect();

    #[cfg(not(feature = "multi-threaded"))]
    let tiles: Vec<Vec<usize>> = bucket
        .chunks(tile_size)
        .map(|chunk| get_counts(chunk, digits, pass))
        .collect();

    tiles
}

#[inline]
pub fn aggregate_tile_counts(tile_counts: &[Vec<usize>]) -> Vec<usize> {
    let mut out = tile_counts[0].clone();
    for tile in tile_counts.iter().skip(1) {
        for (o, c) in out.iter_mut().zip(tile.iter()) {
            *o += c;
        }
    }

    out
}

/// True when every element falls into the same bucket, i.e. sorting by this digit is a no-op.
#[inline]
pub fn is_homogenous_bucket(counts: &[usize]) -> bool {
    let mut seen = false;
    for c in counts {
        if *c > 0 {
            if seen {
                return false;
            } else {
                seen = true;
            }
        }
    }

    true
}
