use std::fmt;
use std::time::Duration;

use crate::algorithm::Descriptor;

/// What one algorithm run produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Found(usize),
    NotFound,
    Sorted(Vec<i64>),
}

/// Immutable result of one run: outcome, wall-clock elapsed time, and the
/// variant's declared complexity. Rendering is a pure `Display` impl.
#[derive(Clone, Debug)]
pub struct ExecutionReport {
    pub outcome: Outcome,
    pub elapsed: Duration,
    pub descriptor: Descriptor,
}

impl ExecutionReport {
    pub fn new(outcome: Outcome, elapsed: Duration, descriptor: Descriptor) -> Self {
        Self {
            outcome,
            elapsed,
            descriptor,
        }
    }
}

impl fmt::Display for ExecutionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Outcome::Found(index) => writeln!(f, "Key found at index {index}.")?,
            Outcome::NotFound => writeln!(f, "Key not found.")?,
            Outcome::Sorted(sequence) => writeln!(f, "Sorted result: {sequence:?}")?,
        }
        writeln!(f, "Empirical time: {}", format_elapsed(self.elapsed))?;
        write!(f, "Theoretical time: {}", self.descriptor.complexity)
    }
}

/// Scales a duration to ns/µs/ms/s for display.
pub fn format_elapsed(elapsed: Duration) -> String {
    let nanos = elapsed.as_nanos();
    if nanos < 1_000 {
        format!("{nanos}ns")
    } else if nanos < 1_000_000 {
        format!("{:.2}µs", nanos as f64 / 1_000.0)
    } else if nanos < 1_000_000_000 {
        format!("{:.2}ms", nanos as f64 / 1_000_000.0)
    } else {
        format!("{:.2}s", elapsed.as_secs_f64())
    }
}
