use crate::algorithm::{Complexity, Descriptor, SortAlgorithm};

pub struct InsertionSort;

impl SortAlgorithm for InsertionSort {
    fn sort(&self, data: &mut [i64]) {
        insertion_sort(data);
    }

    fn descriptor(&self) -> Descriptor {
        Descriptor {
            name: "Insertion Sort",
            complexity: Complexity::ON2,
        }
    }
}

/// Shifts each element left past strictly larger predecessors. Stable,
/// and close to linear on nearly-sorted input.
pub fn insertion_sort<T: Ord>(arr: &mut [T]) {
    for i in 1..arr.len() {
        let mut j = i;
        while j > 0 && arr[j - 1] > arr[j] {
            arr.swap(j - 1, j);
            j -= 1;
        }
    }
}
