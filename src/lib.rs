#![doc = include_str!("../README.md")]

pub mod arith;
pub mod calculator;

pub use arith::{OverflowError, add_integers};
pub use calculator::Calculator;
