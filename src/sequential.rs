use crate::algorithm::{Complexity, Descriptor, SearchAlgorithm};

pub struct SequentialSearch;

impl SearchAlgorithm for SequentialSearch {
    fn search(&self, data: &[i64], target: i64) -> Option<usize> {
        sequential_search(data, target)
    }

    fn descriptor(&self) -> Descriptor {
        Descriptor {
            name: "Sequential Search",
            complexity: Complexity::ON,
        }
    }
}

/// Left-to-right scan; returns the lowest matching index. No ordering
/// precondition.
pub fn sequential_search(data: &[i64], target: i64) -> Option<usize> {
    data.iter().position(|&value| value == target)
}
