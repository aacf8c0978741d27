use crate::algorithm::{Complexity, Descriptor, SortAlgorithm};

pub struct BubbleSort;

impl SortAlgorithm for BubbleSort {
    fn sort(&self, data: &mut [i64]) {
        bubble_sort(data);
    }

    fn descriptor(&self) -> Descriptor {
        Descriptor {
            name: "Bubble Sort",
            complexity: Complexity::ON2,
        }
    }
}

/// Adjacent-swap passes until a full pass makes no swap.
pub fn bubble_sort<T: Ord>(arr: &mut [T]) {
    let n = arr.len();
    for pass in 0..n {
        let mut swapped = false;
        for j in 0..n - 1 - pass {
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}
