use once_cell::sync::Lazy;

use crate::algorithm::{Descriptor, SearchAlgorithm, SortAlgorithm};
use crate::binary::BinarySearch;
use crate::bubble::BubbleSort;
use crate::heap::HeapSort;
use crate::insertion::InsertionSort;
use crate::merge::MergeSort;
use crate::quick::QuickSort;
use crate::radix::RadixSort;
use crate::selection::SelectionSort;
use crate::sequential::SequentialSearch;

/// One user-facing choice: an algorithm kind, or backing out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Selection {
    SequentialSearch,
    BinarySearch,
    BubbleSort,
    HeapSort,
    InsertionSort,
    QuickSort,
    MergeSort,
    SelectionSort,
    RadixSort,
    Cancel,
}

/// Search algorithms in menu order.
pub const SEARCHES: [Selection; 2] = [Selection::SequentialSearch, Selection::BinarySearch];

/// Sort algorithms in menu order.
pub const SORTS: [Selection; 7] = [
    Selection::BubbleSort,
    Selection::HeapSort,
    Selection::InsertionSort,
    Selection::QuickSort,
    Selection::MergeSort,
    Selection::SelectionSort,
    Selection::RadixSort,
];

// the algorithms are stateless, so one shared instance per kind is enough
static SEQUENTIAL_SEARCH: SequentialSearch = SequentialSearch;
static BINARY_SEARCH: BinarySearch = BinarySearch;
static BUBBLE_SORT: BubbleSort = BubbleSort;
static HEAP_SORT: HeapSort = HeapSort;
static INSERTION_SORT: InsertionSort = InsertionSort;
static QUICK_SORT: QuickSort = QuickSort;
static MERGE_SORT: MergeSort = MergeSort;
static SELECTION_SORT: SelectionSort = SelectionSort;
static RADIX_SORT: RadixSort = RadixSort;

#[derive(Clone, Copy)]
pub enum CatalogEntry {
    Search(&'static (dyn SearchAlgorithm + Sync)),
    Sort(&'static (dyn SortAlgorithm + Sync)),
}

impl CatalogEntry {
    pub fn descriptor(&self) -> Descriptor {
        match self {
            Self::Search(algorithm) => algorithm.descriptor(),
            Self::Sort(algorithm) => algorithm.descriptor(),
        }
    }
}

/// Maps a selection to its shared algorithm instance. `Cancel` maps to
/// `None` -- "nothing selected", never a default algorithm.
pub fn lookup(selection: Selection) -> Option<CatalogEntry> {
    match selection {
        Selection::SequentialSearch => Some(CatalogEntry::Search(&SEQUENTIAL_SEARCH)),
        Selection::BinarySearch => Some(CatalogEntry::Search(&BINARY_SEARCH)),
        Selection::BubbleSort => Some(CatalogEntry::Sort(&BUBBLE_SORT)),
        Selection::HeapSort => Some(CatalogEntry::Sort(&HEAP_SORT)),
        Selection::InsertionSort => Some(CatalogEntry::Sort(&INSERTION_SORT)),
        Selection::QuickSort => Some(CatalogEntry::Sort(&QUICK_SORT)),
        Selection::MergeSort => Some(CatalogEntry::Sort(&MERGE_SORT)),
        Selection::SelectionSort => Some(CatalogEntry::Sort(&SELECTION_SORT)),
        Selection::RadixSort => Some(CatalogEntry::Sort(&RADIX_SORT)),
        Selection::Cancel => None,
    }
}

/// Read-only (selection, descriptor) table, built once at first use.
pub static DESCRIPTORS: Lazy<Vec<(Selection, Descriptor)>> = Lazy::new(|| {
    SEARCHES
        .iter()
        .chain(SORTS.iter())
        .filter_map(|&selection| lookup(selection).map(|entry| (selection, entry.descriptor())))
        .collect()
});
