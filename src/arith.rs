use thiserror::Error;

/// The sum of two operands is not representable in `i64`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("integer overflow computing {a} + {b}")]
pub struct OverflowError {
    pub a: i64,
    pub b: i64,
}

/// Add two integers.
///
/// Overflow is reported as an error instead of relying on native signed
/// arithmetic, which panics in debug builds and wraps in release builds.
/// This keeps the contract identical in both profiles.
///
/// Pure computation only; any diagnostic printing is the caller's
/// responsibility.
pub fn add_integers(a: i64, b: i64) -> Result<i64, OverflowError> {
    a.checked_add(b).ok_or(OverflowError { a, b })
}
