use std::env;

use lazy_static::lazy_static;
use rand::prelude::SliceRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use searchsort::{
    bubble_sort, heap_sort, insertion_sort, merge_sort, quick_sort, radix_sort, selection_sort,
};

lazy_static! {
    static ref SEED: u64 = env_u64("SEED", 12345);
    static ref NUM_RUNS: usize = env_usize("NUM_RUNS", 4);
    static ref MAX_ELEMENTS: usize = env_usize("MAX_ELEMENTS", 2048);
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name).ok().and_then(|s| s.parse().ok()).unwrap_or(default)
}

fn env_usize(name: &str, default: usize) -> usize {
    env::var(name).ok().and_then(|s| s.parse().ok()).unwrap_or(default)
}

fn all_sorts() -> Vec<(&'static str, fn(&mut [i64]))> {
    vec![
        ("bubble", bubble_sort::<i64> as fn(&mut [i64])),
        ("insertion", insertion_sort::<i64>),
        ("selection", selection_sort::<i64>),
        ("quick", quick_sort::<i64>),
        ("merge", merge_sort::<i64>),
        ("heap", heap_sort::<i64>),
        ("radix", radix_sort),
    ]
}

fn verify_sorted(name: &str, arr: &[i64]) {
    for i in 1..arr.len() {
        assert!(
            arr[i - 1] <= arr[i],
            "{name}: not sorted at {i}: {} > {}. Seed: {}",
            arr[i - 1],
            arr[i],
            *SEED
        );
    }
}

fn verify_permutation(name: &str, before: &[i64], after: &[i64]) {
    let mut expected = before.to_vec();
    expected.sort_unstable();
    let mut actual = after.to_vec();
    actual.sort_unstable();
    assert_eq!(
        expected, actual,
        "{name}: element multiset changed. Seed: {}",
        *SEED
    );
}

#[test]
fn empty_and_single_element() {
    for (name, sort) in all_sorts() {
        let mut empty: Vec<i64> = vec![];
        sort(&mut empty[..]);
        assert!(empty.is_empty(), "{name}: empty input grew");

        let mut single = vec![7];
        sort(&mut single[..]);
        assert_eq!(single, vec![7], "{name}: single element changed");
    }
}

#[test]
fn all_duplicates() {
    for (name, sort) in all_sorts() {
        let mut arr = vec![42; 257];
        sort(&mut arr[..]);
        assert_eq!(arr, vec![42; 257], "{name}: duplicate run changed");
    }
}

#[test]
fn already_sorted_is_unchanged() {
    let reference: Vec<i64> = (-500..500).collect();
    for (name, sort) in all_sorts() {
        let mut arr = reference.clone();
        sort(&mut arr[..]);
        assert_eq!(arr, reference, "{name}: sorted input was reordered");
    }
}

#[test]
fn reverse_sorted() {
    let reference: Vec<i64> = (-500..500).collect();
    for (name, sort) in all_sorts() {
        let mut arr: Vec<i64> = reference.iter().rev().copied().collect();
        sort(&mut arr[..]);
        assert_eq!(arr, reference, "{name}: reverse input not sorted");
    }
}

#[test]
fn radix_handles_negative_values() {
    let mut arr = vec![-3, 5, -1, 2];
    radix_sort(&mut arr[..]);
    assert_eq!(arr, vec![-3, -1, 2, 5]);
}

#[test]
fn seeded_random_runs() {
    let mut rng = StdRng::seed_from_u64(*SEED);
    for run in 0..*NUM_RUNS {
        let n = rng.gen_range(0..*MAX_ELEMENTS);
        let mut shuffle_rng = StdRng::seed_from_u64(*SEED + run as u64);
        let input: Vec<i64> = (0..n)
            .map(|_| shuffle_rng.gen_range(i64::MIN..i64::MAX))
            .collect();
        for (name, sort) in all_sorts() {
            let mut arr = input.clone();
            sort(&mut arr[..]);
            verify_sorted(name, &arr);
            verify_permutation(name, &input, &arr);
        }
    }
}

#[test]
fn shuffled_range_contains_every_element() {
    let mut arr: Vec<i64> = (1..=1024).collect();
    arr.shuffle(&mut StdRng::seed_from_u64(*SEED));
    for (name, sort) in all_sorts() {
        let mut run = arr.clone();
        sort(&mut run[..]);
        let expected: Vec<i64> = (1..=1024).collect();
        assert_eq!(run, expected, "{name}: shuffled range mangled. Seed: {}", *SEED);
    }
}

// key-only ordering makes stability observable through the tags
#[derive(Clone, Copy, Debug)]
struct Tagged {
    key: i64,
    tag: usize,
}

impl PartialEq for Tagged {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Tagged {}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tagged {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

fn tagged_input(seed: u64) -> Vec<Tagged> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..512)
        .map(|tag| Tagged {
            key: rng.gen_range(0..8),
            tag,
        })
        .collect()
}

fn verify_stable(name: &str, arr: &[Tagged]) {
    for i in 1..arr.len() {
        if arr[i - 1].key == arr[i].key {
            assert!(
                arr[i - 1].tag < arr[i].tag,
                "{name}: equal keys reordered. Seed: {}",
                *SEED
            );
        }
    }
}

#[test]
fn insertion_is_stable() {
    let mut arr = tagged_input(*SEED);
    insertion_sort(&mut arr[..]);
    verify_stable("insertion", &arr);
}

#[test]
fn merge_is_stable() {
    let mut arr = tagged_input(*SEED);
    merge_sort(&mut arr[..]);
    verify_stable("merge", &arr);
}
