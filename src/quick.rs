use crate::algorithm::{Complexity, Descriptor, SortAlgorithm};

pub struct QuickSort;

impl SortAlgorithm for QuickSort {
    fn sort(&self, data: &mut [i64]) {
        quick_sort(data);
    }

    fn descriptor(&self) -> Descriptor {
        Descriptor {
            name: "Quick Sort",
            complexity: Complexity::ONLogNAverage,
        }
    }
}

/// Lomuto partition around the last element, recursing on both sides.
///
/// The fixed pivot choice degrades already-sorted (and adversarial) input
/// to the quadratic worst case -- a known limitation of this variant.
pub fn quick_sort<T: Ord>(arr: &mut [T]) {
    if arr.len() <= 1 {
        return;
    }
    let pivot = partition(arr);
    let (left, right) = arr.split_at_mut(pivot);
    quick_sort(left);
    quick_sort(&mut right[1..]);
}

fn partition<T: Ord>(arr: &mut [T]) -> usize {
    let last = arr.len() - 1;
    let mut store = 0;
    for j in 0..last {
        if arr[j] <= arr[last] {
            arr.swap(store, j);
            store += 1;
        }
    }
    arr.swap(store, last);
    store
}
