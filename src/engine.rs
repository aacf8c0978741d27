use std::time::{Duration, Instant};

use log::{debug, info};

use crate::catalog::{lookup, CatalogEntry, Selection};
use crate::report::{ExecutionReport, Outcome};

/// Whether pre-sorting for a search that needs ordered input may touch the
/// caller's sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PresortPolicy {
    /// Sort a private copy; the caller's sequence stays untouched. The
    /// reported index refers to ascending order.
    #[default]
    CopySorted,
    /// Sort the caller's sequence in place as a visible side effect.
    InPlace,
}

/// Captures a monotonic clock reading immediately before and after exactly
/// one invocation of `f`.
pub fn measure<R>(f: impl FnOnce() -> R) -> (R, Duration) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}

/// Runs the selected sort over `data` and reports the reordered sequence.
/// `None` when nothing runnable was selected (`Cancel`, or a search token).
pub fn run_sort(selection: Selection, data: &mut Vec<i64>) -> Option<ExecutionReport> {
    let Some(CatalogEntry::Sort(algorithm)) = lookup(selection) else {
        return None;
    };
    let descriptor = algorithm.descriptor();
    info!("{} over {} elements", descriptor.name, data.len());
    let ((), elapsed) = measure(|| algorithm.sort(data));
    debug!("sorted: {:?}", data);
    Some(ExecutionReport::new(
        Outcome::Sorted(data.clone()),
        elapsed,
        descriptor,
    ))
}

/// Runs the selected search for `target` over `data`. Pre-sorting for
/// algorithms that need ordered input follows `presort` and happens outside
/// the timed region. `None` when nothing runnable was selected.
pub fn run_search(
    selection: Selection,
    data: &mut Vec<i64>,
    target: i64,
    presort: PresortPolicy,
) -> Option<ExecutionReport> {
    let Some(CatalogEntry::Search(algorithm)) = lookup(selection) else {
        return None;
    };
    let descriptor = algorithm.descriptor();
    info!(
        "{} for {} over {} elements",
        descriptor.name,
        target,
        data.len()
    );
    let (found, elapsed) = if algorithm.requires_sorted() {
        match presort {
            PresortPolicy::CopySorted => {
                let mut ordered = data.clone();
                ordered.sort_unstable();
                measure(|| algorithm.search(&ordered, target))
            }
            PresortPolicy::InPlace => {
                data.sort_unstable();
                measure(|| algorithm.search(data, target))
            }
        }
    } else {
        measure(|| algorithm.search(data, target))
    };
    let outcome = match found {
        Some(index) => Outcome::Found(index),
        None => Outcome::NotFound,
    };
    Some(ExecutionReport::new(outcome, elapsed, descriptor))
}
