//! fr_core — Fraction value type with validated construction and GCD reduction.
//!
//! This crate is **I/O-free** and allocation-free. It defines:
//! - `Fraction`: an immutable (numerator, denominator) pair, neither zero
//! - `gcd`: recursive Euclid over absolute values
//! - `FractionError`: closed error set for construction and arithmetic
//!
//! Addition and subtraction only accept operands with equal denominators;
//! no common denominator is computed. Every arithmetic result is reduced.
//!
//! Serialization derives are gated behind the `serde` feature.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod errors {
    use core::fmt;

    /// Closed error set for fraction construction and arithmetic.
    #[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
    pub enum FractionError {
        /// A zero numerator or denominator would be stored.
        InvalidFraction,
        /// Addition/subtraction operands disagree on the denominator.
        IncompatibleDenominator { left: i64, right: i64 },
        /// An intermediate or reduced value does not fit in `i64`.
        Overflow,
    }

    impl fmt::Display for FractionError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                FractionError::InvalidFraction => {
                    write!(f, "invalid fraction: numerator and denominator must be non-zero")
                }
                FractionError::IncompatibleDenominator { left, right } => {
                    write!(f, "incompatible denominators: {left} != {right}")
                }
                FractionError::Overflow => write!(f, "arithmetic overflow"),
            }
        }
    }

    #[cfg(feature = "std")]
    impl std::error::Error for FractionError {}
}

pub mod fraction;

pub use errors::FractionError;
pub use fraction::{gcd, Fraction};
