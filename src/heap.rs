use crate::algorithm::{Complexity, Descriptor, SortAlgorithm};

pub struct HeapSort;

impl SortAlgorithm for HeapSort {
    fn sort(&self, data: &mut [i64]) {
        heap_sort(data);
    }

    fn descriptor(&self) -> Descriptor {
        Descriptor {
            name: "Heap Sort",
            complexity: Complexity::ONLogN,
        }
    }
}

/// Builds a max-heap, then repeatedly swaps the root behind the shrinking
/// heap prefix. Not stable.
pub fn heap_sort<T: Ord>(arr: &mut [T]) {
    let n = arr.len();
    for root in (0..n / 2).rev() {
        sift_down(arr, root);
    }
    for end in (1..n).rev() {
        arr.swap(0, end);
        sift_down(&mut arr[..end], 0);
    }
}

fn sift_down<T: Ord>(heap: &mut [T], mut root: usize) {
    loop {
        let left = 2 * root + 1;
        if left >= heap.len() {
            return;
        }
        let mut child = left;
        let right = left + 1;
        if right < heap.len() && heap[right] > heap[left] {
            child = right;
        }
        if heap[child] <= heap[root] {
            return;
        }
        heap.swap(root, child);
        root = child;
    }
}
