//! Constants for dewcheck
//!
//! Every numeric value used by the estimators lives here, grouped by domain:
//! - **Physics**: Magnus-Tetens coefficients and the reference reading
//! - **Scaling**: Q8 fixed-point layout, table geometry and tolerances
//!
//! The fixed-point coefficients are stored as already-truncated raw bits.
//! Unit tests in each submodule pin them to their floating-point source.

/// Magnus-Tetens coefficients and the default reading.
pub mod physics;

/// Q8 fixed-point layout, lookup table geometry and comparison tolerances.
pub mod scaling;

pub use physics::{
    MAGNUS_B, MAGNUS_C, MAGNUS_B_Q8, MAGNUS_C_Q8,
    DEFAULT_HUMIDITY_PCT, DEFAULT_TEMPERATURE_C,
};

pub use scaling::{
    Q8_SCALE, Q8_SCALE_F32, Q8_SCALE_F64, Q8_FRACTIONAL_BITS,
    LOG_TABLE_LEN, LOG_ZERO_SENTINEL,
    TERM_TOLERANCE_LSB, DEW_POINT_TOLERANCE_LSB,
};
