use keyed_radix::{sort_with_radix, ErrorKind, RadixSort};
use proptest::prelude::*;

/// Elements carry their input position so stability can be checked after sorting.
fn tag(keys: &[u32]) -> Vec<(u32, usize)> {
    keys.iter().copied().zip(0..).collect()
}

fn radix_strategy() -> impl Strategy<Value = usize> {
    prop_oneof![2usize..=17, Just(256usize), Just(1000usize), Just(1usize << 16)]
}

proptest! {
    #[test]
    fn permutation_order_and_stability(
        keys in prop::collection::vec(0u32..5_000, 0..600),
        radix in radix_strategy(),
    ) {
        let inputs = tag(&keys);
        let sorted = sort_with_radix(inputs.clone(), |v| v.0, radix).unwrap();

        // Ties broken by input position pins down permutation, order and stability together.
        let mut expected = inputs;
        expected.sort_by_key(|v| v.0);
        prop_assert_eq!(&sorted, &expected);

        for w in sorted.windows(2) {
            prop_assert!(w[0].0 <= w[1].0);
            if w[0].0 == w[1].0 {
                prop_assert!(w[0].1 < w[1].1);
            }
        }
    }

    #[test]
    fn idempotent(keys in prop::collection::vec(any::<u64>(), 0..400), radix in radix_strategy()) {
        let once = sort_with_radix(keys, |v| *v, radix).unwrap();
        let twice = sort_with_radix(once.clone(), |v| *v, radix).unwrap();

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn parallel_and_single_threaded_agree(keys in prop::collection::vec(any::<u16>(), 0..2_000)) {
        let mut a = tag(&keys.iter().map(|k| *k as u32).collect::<Vec<u32>>());
        let mut b = a.clone();

        a.radix_sort_builder(|v| v.0).sort().unwrap();
        b.radix_sort_builder(|v| v.0)
            .with_parallel(false)
            .with_single_threaded_tuner()
            .sort()
            .unwrap();

        prop_assert_eq!(a, b);
    }

    #[test]
    fn rebase_matches_std(keys in prop::collection::vec(any::<i32>(), 0..500), radix in radix_strategy()) {
        let mut sorted = keys.clone();
        sorted.radix_sort_builder(|v| *v).with_radix(radix).with_rebase().sort().unwrap();

        let mut expected = keys;
        expected.sort();
        prop_assert_eq!(sorted, expected);
    }

    #[test]
    fn negative_keys_are_rejected(
        mut keys in prop::collection::vec(0i64..1_000, 2..100),
        at in any::<prop::sample::Index>(),
        neg in i64::MIN..0,
    ) {
        let index = at.index(keys.len());
        keys[index] = neg;
        let before = keys.clone();

        let err = keys.radix_sort().unwrap_err();

        prop_assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        prop_assert_eq!(keys, before);
    }

    #[test]
    fn radix_below_two_is_rejected(keys in prop::collection::vec(any::<u8>(), 0..50), radix in 0usize..2) {
        let err = sort_with_radix(keys, |v| *v, radix).unwrap_err();

        prop_assert!(err.is_invalid_argument());
    }
}
