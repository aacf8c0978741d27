use crate::algorithm::{Complexity, Descriptor, SortAlgorithm};

pub struct SelectionSort;

impl SortAlgorithm for SelectionSort {
    fn sort(&self, data: &mut [i64]) {
        selection_sort(data);
    }

    fn descriptor(&self) -> Descriptor {
        Descriptor {
            name: "Selection Sort",
            complexity: Complexity::ON2,
        }
    }
}

/// Repeatedly swaps the minimum of the unsorted suffix to its front.
/// Not stable: the swap can carry an element past its equals.
pub fn selection_sort<T: Ord>(arr: &mut [T]) {
    let n = arr.len();
    for i in 0..n {
        let mut min = i;
        for j in i + 1..n {
            if arr[j] < arr[min] {
                min = j;
            }
        }
        if min != i {
            arr.swap(i, min);
        }
    }
}
