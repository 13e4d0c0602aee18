//! Fixed-Point Scaling Constants
//!
//! Values are stored as `value × 256` ("Q8"). Sixteen-bit quantities
//! (humidity, temperature, dew point) are Q8.8, intermediate sums and
//! products are carried in `i32`.

// ===== Q8 LAYOUT =====

/// Number of fractional bits in a Q8 value.
pub const Q8_FRACTIONAL_BITS: u32 = 8;

/// Integer scale factor, `1 << Q8_FRACTIONAL_BITS`.
pub const Q8_SCALE: i32 = 1 << Q8_FRACTIONAL_BITS;

/// Scale factor as `f32`, for converting raw bits back to a value.
pub const Q8_SCALE_F32: f32 = 256.0;

/// Scale factor as `f64`, used when quantizing inputs.
///
/// Inputs are scaled in double precision before truncation so that the
/// resulting bits match a C compiler evaluating `(int16_t)(32.09 * 256)`.
pub const Q8_SCALE_F64: f64 = 256.0;

// ===== LOG TABLE GEOMETRY =====

/// Number of entries in the logarithm table (integer humidity 0..=99 %).
pub const LOG_TABLE_LEN: usize = 100;

/// Stand-in for `ln(0) × 256 = -inf` at table index 0.
///
/// One above `i16::MIN` so that negating it cannot overflow.
pub const LOG_ZERO_SENTINEL: i16 = -32767;

/// Packed table value at index 0 (`2047 >> 3`).
pub const PACKED_ZERO_SENTINEL: u8 = (2047 >> 3) as u8;

// ===== COMPARISON TOLERANCES =====

/// Allowed disagreement between a fixed and a float term, in Q8 LSBs.
///
/// `y` inherits < 1 LSB from the table row and < 1 LSB from the ratio
/// division, plus the truncated `B` coefficient. Holds for integer humidity;
/// the table has no rows between whole percents.
pub const TERM_TOLERANCE_LSB: f32 = 3.0;

/// Allowed disagreement between the two dew points, in Q8 LSBs.
///
/// The last division multiplies the error in `y` by `B·C / (B - y)²`, about
/// 14 for indoor readings, then truncates once more.
pub const DEW_POINT_TOLERANCE_LSB: f32 = 32.0;
