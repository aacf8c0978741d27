use std::fmt;

/// Textbook time-complexity classes for the algorithm catalog.
///
/// The label is a static declaration attached to each variant, not a
/// measurement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Complexity {
    OLogN,
    ON,
    ONLogN,
    /// O(n log n) on average with a quadratic worst case (fixed-pivot quicksort).
    ONLogNAverage,
    ON2,
    /// O(n·k), k being the digit count of the largest key (radix sort).
    ONk,
}

impl Complexity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OLogN => "O(log n)",
            Self::ON => "O(n)",
            Self::ONLogN => "O(n log n)",
            Self::ONLogNAverage => "O(n log n) average, O(n²) worst",
            Self::ON2 => "O(n²)",
            Self::ONk => "O(n·k)",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable (display name, complexity label) pair identifying a variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Descriptor {
    pub name: &'static str,
    pub complexity: Complexity,
}

/// In-place ascending sort over a slice of signed integers.
///
/// Implementations reorder `data` to non-decreasing order; afterwards the
/// slice holds the same values with the same multiplicities. No reference
/// to `data` is kept once `sort` returns.
pub trait SortAlgorithm {
    fn sort(&self, data: &mut [i64]);
    fn descriptor(&self) -> Descriptor;
}

/// Index lookup of a target value in a slice of signed integers.
///
/// Returns the zero-based index of one occurrence of `target`, or `None`
/// when absent -- including on an empty slice.
pub trait SearchAlgorithm {
    fn search(&self, data: &[i64], target: i64) -> Option<usize>;
    fn descriptor(&self) -> Descriptor;
    /// Whether `data` must be sorted ascending before `search` is called.
    fn requires_sorted(&self) -> bool {
        false
    }
}
