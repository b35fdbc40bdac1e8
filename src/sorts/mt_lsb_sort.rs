//! `mt_lsb_sort` is a multi-threaded Least-Significant Digit first radix sort. Multi-threading
//! is achieved by splitting the data into tiles, counting those tiles independently and
//! using the per-tile counts to generate offsets in the output array for each thread
//! to write to for each digit.
//!
//! The output array is split by tile-counts ordered by digit then by tile, and those output array
//! chunks are distributed to each thread. As they are distributed in the order in which the tiles
//! appear in the input, equal digits keep their relative order and the output remains stable
//! just like a typical single-threaded LSD sort.
//!
//! ## Characteristics
//!
//!  * out-of-place
//!  * multi-threaded
//!  * stable
//!  * lsd-first
//!
//! ## Performance
//!
//! It gracefully degrades into a single-threaded LSD radix sort when the tiles are reduced to 1
//! with only a little overhead.

use crate::digits::Digits;
use crate::enumerate::Keyed;
use crate::utils::*;
use arbitrary_chunks::ArbitraryChunks;
use rayon::prelude::*;

pub fn mt_lsb_sort(
    src_bucket: &[Keyed],
    dst_bucket: &mut [Keyed],
    tile_counts: &[Vec<usize>],
    tile_size: usize,
    digits: &Digits,
    pass: usize,
) {
    let tiles = tile_counts.len();
    let buckets = digits.buckets(pass);
    let mut minor_counts = Vec::with_capacity(buckets * tiles);

    for b in 0..buckets {
        for tile in tile_counts.iter() {
            minor_counts.push(tile[b]);
        }
    }

    let mut collated_chunks: Vec<Vec<&mut [Keyed]>> = Vec::with_capacity(tiles);
    collated_chunks.resize_with(tiles, || Vec::with_capacity(buckets));

    for (i, chunk) in dst_bucket.arbitrary_chunks_mut(&minor_counts).enumerate() {
        collated_chunks[i % tiles].push(chunk);
    }

    collated_chunks
        .into_par_iter()
        .zip(src_bucket.par_chunks(tile_size))
        .for_each(|(mut tile_buckets, tile)| {
            let mut offsets = vec![0usize; tile_buckets.len()];
            let chunks = tile.chunks_exact(4);
            let rem = chunks.remainder();

            chunks.into_iter().for_each(|chunk| {
                let a = digits.digit(chunk[0].key, pass);
                let b = digits.digit(chunk[1].key, pass);
                let c = digits.digit(chunk[2].key, pass);
                let d = digits.digit(chunk[3].key, pass);

                tile_buckets[a][offsets[a]] = chunk[0];
                offsets[a] += 1;
                tile_buckets[b][offsets[b]] = chunk[1];
                offsets[b] += 1;
                tile_buckets[c][offsets[c]] = chunk[2];
                offsets[c] += 1;
                tile_buckets[d][offsets[d]] = chunk[3];
                offsets[d] += 1;
            });

            rem.iter().for_each(|val| {
                let b = digits.digit(val.key, pass);
                tile_buckets[b][offsets[b]] = *val;
                offsets[b] += 1;
            });
        });
}

pub fn mt_lsb_sort_adapter(bucket: &mut [Keyed], digits: &Digits, tile_size: usize) {
    if bucket.len() < 2 {
        return;
    }

    let mut tmp_bucket = vec![Keyed::default(); bucket.len()];
    let mut invert = false;

    for pass in 0..digits.passes() {
        let tile_counts = if invert {
            get_tile_counts(&tmp_bucket, tile_size, digits, pass)
        } else {
            get_tile_counts(bucket, tile_size, digits, pass)
        };

        if is_homogenous_bucket(&aggregate_tile_counts(&tile_counts)) {
            continue;
        }

        #[cfg(feature = "work_profiles")]
        println!("({}) MT_LSB tiles={}", pass, tile_counts.len());

        if invert {
            mt_lsb_sort(&tmp_bucket, bucket, &tile_counts, tile_size, digits, pass)
        } else {
            mt_lsb_sort(bucket, &mut tmp_bucket, &tile_counts, tile_size, digits, pass)
        };

        invert = !invert;
    }

    if invert {
        bucket
            .par_chunks_mut(tile_size)
            .zip(tmp_bucket.par_chunks(tile_size))
            .for_each(|(chunk, tmp_chunk)| {
                chunk.copy_from_slice(tmp_chunk);
            });
    }
}
