//! Error Types for Dew Point Estimation
//!
//! The integer path is exact C-style arithmetic on `i16`/`i32`. Anything that
//! would be undefined or implementation-defined behaviour in C (signed
//! overflow, narrowing casts, out-of-bounds table reads) is reported here
//! instead.
//!
//! Errors are `Copy` and carry no heap data, so they can be returned from
//! interrupt context and stored in fixed-size queues.
//!
//! ```rust
//! use dewcheck_core::{DewPointEstimator, EstimateError, FixedPointEstimator, Reading};
//!
//! let reading = Reading::new(100.0, 20.0);
//! match FixedPointEstimator::default().estimate(&reading) {
//!     Ok(estimate) => println!("{estimate}"),
//!     Err(EstimateError::IndexOutOfBounds { index }) => {
//!         // Saturated air has no table row; dew point equals air temperature
//!         assert_eq!(index, 100);
//!     }
//!     Err(other) => panic!("unexpected: {other}"),
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for estimator operations
pub type EstimateResult<T> = Result<T, EstimateError>;

/// Step of an estimator at which a failure occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// `ln(RH/100)` term
    Log,
    /// `B·t / (C + t)` term
    Ratio,
    /// `y = log + ratio`
    Sum,
    /// `C·y / (B - y)`
    DewPoint,
}

impl Stage {
    /// Short lowercase name used in messages
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Log => "log",
            Self::Ratio => "ratio",
            Self::Sum => "sum",
            Self::DewPoint => "dew point",
        }
    }
}

impl core::fmt::Display for Stage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Estimation errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum EstimateError {
    /// Input is NaN or infinite
    #[error("Invalid input: not a finite number")]
    InvalidInput,

    /// Input cannot be represented as a Q8.8 `i16`
    #[error("Value {value} outside Q8 range [{min}, {max}]")]
    OutOfRange {
        /// The offending input
        value: f64,
        /// Smallest representable input
        min: f64,
        /// Largest representable input
        max: f64,
    },

    /// Scaled humidity selects a row the log table does not have
    #[error("Log table index {index} out of bounds")]
    IndexOutOfBounds {
        /// `h / 256` as computed from the Q8 humidity
        index: i32,
    },

    /// Integer arithmetic left the `i32` range, or the result left `i16`
    #[error("Integer overflow in {stage} stage")]
    Overflow {
        /// Where the overflow happened
        stage: Stage,
    },

    /// A divisor evaluated to zero
    #[error("Division by zero in {stage} stage")]
    DivisionByZero {
        /// Where the division happened
        stage: Stage,
    },

    /// Float path produced NaN or infinity
    #[error("Non-finite result in {stage} stage")]
    NonFinite {
        /// First stage whose result was not finite
        stage: Stage,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for EstimateError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidInput =>
                defmt::write!(fmt, "Invalid input"),
            Self::OutOfRange { value, min, max } =>
                defmt::write!(fmt, "Value {} outside [{}, {}]", value, min, max),
            Self::IndexOutOfBounds { index } =>
                defmt::write!(fmt, "Table index {} out of bounds", index),
            Self::Overflow { stage } =>
                defmt::write!(fmt, "Overflow in {}", stage.as_str()),
            Self::DivisionByZero { stage } =>
                defmt::write!(fmt, "Division by zero in {}", stage.as_str()),
            Self::NonFinite { stage } =>
                defmt::write!(fmt, "Non-finite in {}", stage.as_str()),
        }
    }
}
