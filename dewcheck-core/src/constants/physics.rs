//! Physical Constants for dewcheck
//!
//! Magnus-Tetens coefficients in both float and Q8 form, plus the reading
//! the comparison runs against when nothing else is supplied.

// ===== MAGNUS-TETENS COEFFICIENTS =====

/// Magnus coefficient `b` (dimensionless).
///
/// Slope term of the saturation vapour pressure fit over water.
///
/// Source: Bolton (1980), Monthly Weather Review 108, eq. 10
pub const MAGNUS_B: f32 = 17.67;

/// Magnus coefficient `c` (°C).
///
/// Offset term of the saturation vapour pressure fit over water.
///
/// Source: Bolton (1980), Monthly Weather Review 108, eq. 10
pub const MAGNUS_C: f32 = 243.5;

/// `MAGNUS_B` in Q8, truncated: `trunc(17.67 × 256)`.
pub const MAGNUS_B_Q8: i32 = 4523;

/// `MAGNUS_C` in Q8, truncated: `trunc(243.5 × 256)`.
pub const MAGNUS_C_Q8: i32 = 62336;

// ===== REFERENCE READING =====

/// Relative humidity of the reference reading (%).
pub const DEFAULT_HUMIDITY_PCT: f64 = 32.09;

/// Air temperature of the reference reading (°C).
pub const DEFAULT_TEMPERATURE_C: f64 = 22.91;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn q8_coefficients_match_truncated_floats() {
        assert_eq!((17.67_f64 * 256.0) as i32, MAGNUS_B_Q8);
        assert_eq!((243.5_f64 * 256.0) as i32, MAGNUS_C_Q8);
    }

    #[test]
    fn float_coefficients_round_trip_to_q8() {
        // 17.67 is not exact in binary; the Q8 value drops the fraction
        assert!((MAGNUS_B * 256.0 - MAGNUS_B_Q8 as f32) < 1.0);
        assert_eq!(MAGNUS_C * 256.0, MAGNUS_C_Q8 as f32);
    }
}
