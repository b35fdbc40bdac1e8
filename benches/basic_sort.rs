
use bench_utils::bench_common;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use keyed_radix::RadixSort;

fn basic_sort_set(c: &mut Criterion, suffix: &str, shift: u32) {
    let tests: Vec<(&str, Box<dyn Fn(Vec<u64>)>)> = vec![
        (
            "keyed_radix",
            Box::new(|mut input| {
                input.radix_sort().unwrap();
                black_box(input);
            }),
        ),
        (
            "keyed_radix_single_threaded",
            Box::new(|mut input| {
                input
                    .radix_sort_builder(|v| *v)
                    .with_parallel(false)
                    .with_single_threaded_tuner()
                    .sort()
                    .unwrap();
                black_box(input);
            }),
        ),
        (
            "keyed_radix_radix_65536",
            Box::new(|mut input| {
                input
                    .radix_sort_builder(|v| *v)
                    .with_radix(1 << 16)
                    .sort()
                    .unwrap();
                black_box(input);
            }),
        ),
        (
            "std_stable",
            Box::new(|mut input| {
                input.sort();
                black_box(input);
            }),
        ),
    ];

    bench_common(c, shift, &("basic_sort_".to_owned() + suffix), tests);
}

fn basic_sort(c: &mut Criterion) {
    basic_sort_set(c, "u64_full", 0);
    basic_sort_set(c, "u64_shifted", 32);
}

fn tagged_sort(c: &mut Criterion) {
    let tests: Vec<(&str, Box<dyn Fn(Vec<u64>)>)> = vec![
        (
            "keyed_radix_strings_by_len",
            Box::new(|input| {
                let mut strings: Vec<String> = input.iter().map(|v| format!("{:x}", v)).collect();
                strings.radix_sort_by_key(|s| s.len()).unwrap();
                black_box(strings);
            }),
        ),
        (
            "std_strings_by_len",
            Box::new(|input| {
                let mut strings: Vec<String> = input.iter().map(|v| format!("{:x}", v)).collect();
                strings.sort_by_key(|s| s.len());
                black_box(strings);
            }),
        ),
    ];

    bench_common(c, 8, "tagged_sort", tests);
}

criterion_group!(benches, basic_sort, tagged_sort);
criterion_main!(benches);
