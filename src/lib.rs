pub mod algorithm;
pub mod catalog;
pub mod engine;
pub mod input;
pub mod report;

mod binary;
mod bubble;
mod config;
mod heap;
mod insertion;
mod merge;
mod quick;
mod radix;
mod selection;
mod sequential;

pub use algorithm::{Complexity, Descriptor, SearchAlgorithm, SortAlgorithm};
pub use binary::{binary_search, BinarySearch};
pub use bubble::{bubble_sort, BubbleSort};
pub use catalog::{lookup, CatalogEntry, Selection, DESCRIPTORS, SEARCHES, SORTS};
pub use engine::{measure, run_search, run_sort, PresortPolicy};
pub use heap::{heap_sort, HeapSort};
pub use input::{parse_tokens, read_file, InputError};
pub use insertion::{insertion_sort, InsertionSort};
pub use merge::{merge_sort, MergeSort};
pub use quick::{quick_sort, QuickSort};
pub use radix::{radix_sort, RadixSort};
pub use report::{format_elapsed, ExecutionReport, Outcome};
pub use selection::{selection_sort, SelectionSort};
pub use sequential::{sequential_search, SequentialSearch};
