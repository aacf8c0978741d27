use crate::algorithm::{Complexity, Descriptor, SortAlgorithm};

pub struct MergeSort;

impl SortAlgorithm for MergeSort {
    fn sort(&self, data: &mut [i64]) {
        merge_sort(data);
    }

    fn descriptor(&self) -> Descriptor {
        Descriptor {
            name: "Merge Sort",
            complexity: Complexity::ONLogN,
        }
    }
}

/// Top-down merge sort. Stable; each merge step uses O(n) auxiliary space.
pub fn merge_sort<T: Ord + Clone>(arr: &mut [T]) {
    if arr.len() <= 1 {
        return;
    }
    let mid = arr.len() / 2;
    {
        let (left, right) = arr.split_at_mut(mid);
        merge_sort(left);
        merge_sort(right);
    }
    merge(arr, mid);
}

fn merge<T: Ord + Clone>(arr: &mut [T], mid: usize) {
    let left = arr[..mid].to_vec();
    let right = arr[mid..].to_vec();
    let mut i = 0;
    let mut j = 0;
    for slot in arr.iter_mut() {
        // `<=` keeps equal elements in their left-half order
        if i < left.len() && (j >= right.len() || left[i] <= right[j]) {
            *slot = left[i].clone();
            i += 1;
        } else {
            *slot = right[j].clone();
            j += 1;
        }
    }
}
