use crate::digits::Digits;
use crate::enumerate::Keyed;
use crate::tuner::{Algorithm, Tuner, TuningParams};
use crate::RadixSort;
use block_pseudorand::block_rand;

pub struct SingleAlgoTuner {
    pub(crate) algo: Algorithm,
}

impl Tuner for SingleAlgoTuner {
    #[inline]
    fn pick_algorithm(&self, _p: &TuningParams, _counts: &[usize]) -> Algorithm {
        self.algo
    }
}

pub fn gen_keys(n: usize, shift: u32) -> Vec<u64> {
    let mut inputs: Vec<u64> = block_rand(n);

    inputs[0..(n / 2)].iter_mut().for_each(|v| *v >>= shift);
    inputs[(n / 2)..n].iter_mut().for_each(|v| *v <<= shift);

    inputs
}

pub fn to_keyed(keys: &[u64]) -> Vec<Keyed> {
    keys.iter()
        .enumerate()
        .map(|(index, &key)| Keyed { key, index })
        .collect()
}

pub fn gen_input_set(shift: u32) -> Vec<Vec<u64>> {
    let n = 400_000;
    let half = n / 2;
    let inputs = gen_keys(n, shift);

    // Middle values are used for the case where shift is provided
    let mut out = vec![
        vec![],
        inputs[..1].to_vec(),
        inputs[(half - 5)..(half + 5)].to_vec(),
        inputs[(half - 50)..(half + 50)].to_vec(),
        inputs[(half - 2_500)..(half + 2_500)].to_vec(),
        inputs[(half - 25_000)..(half + 25_000)].to_vec(),
        inputs[(half - 100_000)..(half + 100_000)].to_vec(),
        inputs,
    ];

    out.reverse();

    out
}

/// Sort `keys` as keyed pairs and check against the standard library's stable sort, which pins
/// down order and stability at once.
pub fn validate_keyed_sort<F>(keys: Vec<u64>, radix: usize, sort_fn: &F)
where
    F: Fn(&mut [Keyed], &Digits),
{
    let mut inputs = to_keyed(&keys);
    let max_key = keys.iter().copied().max().unwrap_or(0);
    let digits = Digits::for_max_key(radix, max_key).unwrap();

    let mut expected = inputs.clone();
    expected.sort_by_key(|k| k.key);

    sort_fn(&mut inputs, &digits);

    assert_eq!(inputs, expected);
}

pub fn keyed_comparison_suite<F>(radix: usize, sort_fn: F)
where
    F: Fn(&mut [Keyed], &Digits),
{
    for shift in [0, 16, 32, 56] {
        for s in gen_input_set(shift) {
            validate_keyed_sort(s, radix, &sort_fn);
        }
    }

    // Few distinct keys, so nearly everything is a tie
    let dupes: Vec<u64> = gen_keys(100_000, 0).iter().map(|v| v % 17).collect();
    validate_keyed_sort(dupes, radix, &sort_fn);
    validate_keyed_sort(vec![7; 1_000], radix, &sort_fn);
    validate_keyed_sort((0..5_000).rev().collect(), radix, &sort_fn);
    validate_keyed_sort(vec![u64::MAX, 0, u64::MAX - 1, 1], radix, &sort_fn);
}

/// Sort tagged keys end to end with a fixed algorithm and compare to a stable sort.
pub fn sort_single_algorithm(keys: &[u64], radix: usize, algo: Algorithm) {
    let mut inputs: Vec<(u64, usize)> = keys.iter().copied().zip(0..).collect();
    let mut expected = inputs.clone();
    expected.sort_by_key(|v| v.0);

    inputs
        .radix_sort_builder(|v: &(u64, usize)| v.0)
        .with_radix(radix)
        .with_tuner(&SingleAlgoTuner { algo })
        .sort()
        .unwrap();

    assert_eq!(inputs, expected);
}
