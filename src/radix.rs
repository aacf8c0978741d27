use log::debug;

use crate::algorithm::{Complexity, Descriptor, SortAlgorithm};
use crate::config::RADIX_BASE;

pub struct RadixSort;

impl SortAlgorithm for RadixSort {
    fn sort(&self, data: &mut [i64]) {
        radix_sort(data);
    }

    fn descriptor(&self) -> Descriptor {
        Descriptor {
            name: "Radix Sort",
            complexity: Complexity::ONk,
        }
    }
}

/// Least-significant-digit radix sort, base 10.
///
/// Keys are mapped through the order-preserving bias `x as u64 ^ (1 << 63)`
/// before digit extraction, so negative inputs sort correctly and the
/// division/modulo below never see a negative operand. The bias is undone
/// on write-back.
pub fn radix_sort(arr: &mut [i64]) {
    if arr.len() <= 1 {
        return;
    }
    const SIGN_BIAS: u64 = 1 << 63;
    let mut keys: Vec<u64> = arr.iter().map(|&v| (v as u64) ^ SIGN_BIAS).collect();
    let mut scratch = vec![0u64; keys.len()];
    let max = keys.iter().copied().max().unwrap_or(0);

    let mut divisor: u64 = 1;
    loop {
        let mut counts = [0usize; RADIX_BASE as usize];
        for &key in &keys {
            counts[((key / divisor) % RADIX_BASE) as usize] += 1;
        }
        // exclusive prefix sums: counts[d] becomes the first slot of digit d
        let mut next = 0;
        for count in counts.iter_mut() {
            let occupied = *count;
            *count = next;
            next += occupied;
        }
        for &key in &keys {
            let digit = ((key / divisor) % RADIX_BASE) as usize;
            scratch[counts[digit]] = key;
            counts[digit] += 1;
        }
        std::mem::swap(&mut keys, &mut scratch);
        debug!("digit pass done, divisor={divisor}");
        if max / divisor < RADIX_BASE {
            break;
        }
        divisor *= RADIX_BASE;
    }

    for (slot, &key) in arr.iter_mut().zip(keys.iter()) {
        *slot = (key ^ SIGN_BIAS) as i64;
    }
}

#[cfg(test)]
mod tests {
    use super::radix_sort;

    #[test]
    fn sorts_negative_values() {
        let mut arr = vec![-3, 5, -1, 2];
        radix_sort(&mut arr);
        assert_eq!(arr, vec![-3, -1, 2, 5]);
    }

    #[test]
    fn sorts_extreme_values() {
        let mut arr = vec![i64::MAX, 0, i64::MIN, -1, 1, i64::MIN + 1];
        radix_sort(&mut arr);
        assert_eq!(arr, vec![i64::MIN, i64::MIN + 1, -1, 0, 1, i64::MAX]);
    }
}
