use crate::arith::{self, OverflowError};

/// Stateless wrapper exposing the addition primitive as a method.
///
/// Zero-sized; construction never fails and nothing is stored between calls.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        log::debug!("calculator created");
        Calculator
    }

    /// Log the call and delegate to [`arith::add_integers`], returning its
    /// result unmodified.
    pub fn add(&self, a: i64, b: i64) -> Result<i64, OverflowError> {
        log::info!("delegating add({a}, {b}) to the arithmetic primitive");
        arith::add_integers(a, b)
    }
}
