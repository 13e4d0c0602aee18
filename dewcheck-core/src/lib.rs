//! Fixed-point dew point estimation for edge devices
//!
//! Computes the Magnus-Tetens dew point two ways and exposes every
//! intermediate term so the precision lost to Q8 scaling can be inspected:
//!
//! - **Fixed-point**: a 100-entry `ln(RH/100) × 256` table and 16/32-bit
//!   integer arithmetic. No FPU, no `ln()`.
//! - **Reference**: single-precision Magnus-Tetens with a double `ln()`.
//!
//! Key constraints:
//! - `no_std` without the `std` feature
//! - No heap allocation
//! - Integer path uses only truncating i16/i32 arithmetic
//!
//! ```no_run
//! use dewcheck_core::{DewPointEstimator, FixedPointEstimator, ReferenceEstimator, Reading};
//!
//! let reading = Reading::default(); // 32.09 %RH, 22.91 °C
//!
//! let fixed = FixedPointEstimator::default().estimate(&reading)?;
//! let reference = ReferenceEstimator::default().estimate(&reading)?;
//!
//! println!("{fixed}\n{reference}");
//! # Ok::<(), dewcheck_core::EstimateError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

pub mod comparison;
pub mod constants;
pub mod errors;
pub mod fixed_point;
pub mod lookup;
pub mod reference;
pub mod tables;
pub mod traits;

// Public API
pub use comparison::{ComparisonReport, PrecisionComparison, TermDelta};
pub use errors::{EstimateError, EstimateResult, Stage};
pub use fixed_point::{FixedPointEstimate, FixedPointEstimator};
pub use lookup::{LogTable, LookupError, PackedLogTable, LOG_TABLE, PACKED_LOG_TABLE};
pub use reference::{ReferenceEstimate, ReferenceEstimator};
pub use tables::{TableError, TableLayout};
pub use traits::{DewPointEstimate, DewPointEstimator, Reading, Term};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
