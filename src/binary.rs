use std::cmp::Ordering;

use crate::algorithm::{Complexity, Descriptor, SearchAlgorithm};

pub struct BinarySearch;

impl SearchAlgorithm for BinarySearch {
    fn search(&self, data: &[i64], target: i64) -> Option<usize> {
        binary_search(data, target)
    }

    fn descriptor(&self) -> Descriptor {
        Descriptor {
            name: "Binary Search",
            complexity: Complexity::OLogN,
        }
    }

    fn requires_sorted(&self) -> bool {
        true
    }
}

/// Halving search over an ascending slice. With duplicates any matching
/// index may be returned (midpoint convergence, not necessarily the lowest).
pub fn binary_search(data: &[i64], target: i64) -> Option<usize> {
    let mut low = 0;
    let mut high = data.len();
    while low < high {
        let mid = low + (high - low) / 2;
        match data[mid].cmp(&target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }
    None
}
