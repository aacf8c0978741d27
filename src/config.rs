/// Digit base for the radix sort passes.
pub const RADIX_BASE: u64 = 10;

const _: () = {
    assert!(RADIX_BASE >= 2, "RADIX_BASE must be at least 2");
};
