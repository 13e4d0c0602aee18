//! Pre-Computed Logarithm Tables for the Fixed-Point Dew Point
//!
//! ## Motivation
//!
//! The Magnus-Tetens dew point needs `ln(RH/100)`. On a Cortex-M0 or an AVR a
//! software `ln()` costs thousands of cycles and drags in the float runtime.
//! Relative humidity sensors report integer percent resolution at best, so a
//! 100-row table covers every value the sensor can distinguish.
//!
//! ## Physics Background
//!
//! ```text
//! γ(T,RH) = ln(RH/100) + (b × T)/(c + T)
//! Td      = (c × γ)/(b - γ)
//!
//! Where:
//! - T  = temperature (°C)
//! - RH = relative humidity (%)
//! - b  = 17.67, c = 243.5 (Bolton 1980)
//! ```
//!
//! `ln(RH/100)` is always ≤ 0, so every table entry is negative.
//!
//! ## Table Layout
//!
//! ### Wide table (`LOG_TABLE`, 200 bytes)
//! Row `i` holds `trunc(ln(i/100) × 256)` as `i16`. Row 0 would be `-inf`
//! and holds [`LOG_ZERO_SENTINEL`] instead.
//!
//! ### Packed table (`PACKED_LOG_TABLE`, 100 bytes)
//! Stores the magnitude in a `u8`. Rows whose magnitude does not fit are
//! right-shifted, and the shift is recovered from the row number:
//!
//! ```text
//! Rows    | Magnitude   | Stored as
//! --------|-------------|----------
//! 0..=1   | ≥ 1024      | >> 3
//! 2..=13  | 512..1023   | >> 2
//! 14..=36 | 256..511    | >> 1
//! 37..=99 | < 256       | as is
//! ```
//!
//! The low bits shifted out are lost, so rows below 37 decode up to 7 LSBs
//! short of the wide table.
//!
//! Both tables are regenerated by [`crate::tables::write_log_table`].

use crate::constants::scaling::{LOG_TABLE_LEN, Q8_SCALE_F32};

/// Result type for lookup operations
pub type LookupResult<T> = Result<T, LookupError>;

/// Errors that can occur during lookup operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupError {
    /// Requested row is past the end of the table
    IndexOutOfBounds {
        /// Requested row
        index: usize,
        /// Number of rows in the table
        len: usize,
    },
}

impl core::fmt::Display for LookupError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {} out of bounds for table of {} rows", index, len)
            }
        }
    }
}

/// Natural logarithm table in Q8
///
/// Indexed by integer relative humidity, `0..=99`.
#[derive(Debug, Clone, Copy)]
pub struct LogTable {
    values: &'static [i16; LOG_TABLE_LEN],
}

impl LogTable {
    /// Standard wide table
    pub const STANDARD: Self = Self::new(&LOG_TABLE);

    /// Wrap a pre-computed table
    pub const fn new(values: &'static [i16; LOG_TABLE_LEN]) -> Self {
        Self { values }
    }

    /// Raw Q8 value at `index`
    #[inline]
    pub fn get(&self, index: usize) -> LookupResult<i16> {
        self.values
            .get(index)
            .copied()
            .ok_or(LookupError::IndexOutOfBounds { index, len: LOG_TABLE_LEN })
    }

    /// Table value at `index` converted back to `ln(index/100)`
    pub fn ln(&self, index: usize) -> LookupResult<f32> {
        self.get(index).map(|raw| raw as f32 / Q8_SCALE_F32)
    }

    /// Number of rows
    pub const fn len(&self) -> usize {
        LOG_TABLE_LEN
    }

    /// Whether the table has no rows (never)
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Backing slice
    pub fn as_slice(&self) -> &'static [i16] {
        self.values
    }
}

impl Default for LogTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Natural logarithm table packed into one byte per row
#[derive(Debug, Clone, Copy)]
pub struct PackedLogTable {
    values: &'static [u8; LOG_TABLE_LEN],
}

/// Last row of each shifted band and the shift applied to it.
///
/// Rows after the last band are stored unshifted.
const PACKED_SHIFT_BANDS: [(usize, u32); 3] = [(1, 3), (13, 2), (36, 1)];

impl PackedLogTable {
    /// Standard packed table
    pub const STANDARD: Self = Self::new(&PACKED_LOG_TABLE);

    /// Wrap a pre-computed packed table
    pub const fn new(values: &'static [u8; LOG_TABLE_LEN]) -> Self {
        Self { values }
    }

    /// Right shift that was applied when row `index` was packed
    pub fn shift_for(index: usize) -> u32 {
        PACKED_SHIFT_BANDS
            .iter()
            .find(|(last, _)| index <= *last)
            .map_or(0, |(_, shift)| *shift)
    }

    /// Stored byte at `index`
    pub fn raw(&self, index: usize) -> LookupResult<u8> {
        self.values
            .get(index)
            .copied()
            .ok_or(LookupError::IndexOutOfBounds { index, len: LOG_TABLE_LEN })
    }

    /// Decode row `index` to a negative Q8 logarithm
    ///
    /// Row 0 decodes to `-(255 << 3)`, the packed stand-in for `-inf`.
    pub fn unpack(&self, index: usize) -> LookupResult<i16> {
        let raw = self.raw(index)?;
        let magnitude = (raw as i16) << Self::shift_for(index);
        Ok(-magnitude)
    }
}

impl Default for PackedLogTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// `trunc(ln(i/100) × 256)` for i = 0..=99, row 0 is the `-inf` sentinel
#[rustfmt::skip]
pub const LOG_TABLE: [i16; LOG_TABLE_LEN] = [
    // 0-9 %
    -32767, -1178, -1001, -897, -824, -766, -720, -680, -646, -616,
    // 10-19 %
    -589, -565, -542, -522, -503, -485, -469, -453, -438, -425,
    // 20-29 %
    -412, -399, -387, -376, -365, -354, -344, -335, -325, -316,
    // 30-39 %
    -308, -299, -291, -283, -276, -268, -261, -254, -247, -241,
    // 40-49 %
    -234, -228, -222, -216, -210, -204, -198, -193, -187, -182,
    // 50-59 %
    -177, -172, -167, -162, -157, -153, -148, -143, -139, -135,
    // 60-69 %
    -130, -126, -122, -118, -114, -110, -106, -102, -98, -94,
    // 70-79 %
    -91, -87, -84, -80, -77, -73, -70, -66, -63, -60,
    // 80-89 %
    -57, -53, -50, -47, -44, -41, -38, -35, -32, -29,
    // 90-99 %
    -26, -24, -21, -18, -15, -13, -10, -7, -5, -2,
];

/// Magnitudes of [`LOG_TABLE`] packed into bytes, see [`PackedLogTable`]
#[rustfmt::skip]
pub const PACKED_LOG_TABLE: [u8; LOG_TABLE_LEN] = [
    // 0-9 %
    255, 147, 250, 224, 206, 191, 180, 170, 161, 154,
    // 10-19 %
    147, 141, 135, 130, 251, 242, 234, 226, 219, 212,
    // 20-29 %
    206, 199, 193, 188, 182, 177, 172, 167, 162, 158,
    // 30-39 %
    154, 149, 145, 141, 138, 134, 130, 254, 247, 241,
    // 40-49 %
    234, 228, 222, 216, 210, 204, 198, 193, 187, 182,
    // 50-59 %
    177, 172, 167, 162, 157, 153, 148, 143, 139, 135,
    // 60-69 %
    130, 126, 122, 118, 114, 110, 106, 102, 98, 94,
    // 70-79 %
    91, 87, 84, 80, 77, 73, 70, 66, 63, 60,
    // 80-89 %
    57, 53, 50, 47, 44, 41, 38, 35, 32, 29,
    // 90-99 %
    26, 24, 21, 18, 15, 13, 10, 7, 5, 2,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::scaling::{LOG_ZERO_SENTINEL, PACKED_ZERO_SENTINEL};

    #[test]
    fn table_has_one_row_per_percent() {
        assert_eq!(LOG_TABLE.len(), 100);
        assert_eq!(LogTable::STANDARD.len(), 100);
        assert!(!LogTable::STANDARD.is_empty());
        assert_eq!(LOG_TABLE[0], LOG_ZERO_SENTINEL);
        assert_eq!(PACKED_LOG_TABLE[0], PACKED_ZERO_SENTINEL);
    }

    #[test]
    fn table_is_strictly_increasing() {
        for pair in LOG_TABLE.windows(2) {
            assert!(pair[0] < pair[1], "{} !< {}", pair[0], pair[1]);
        }
        assert!(LOG_TABLE.iter().all(|&v| v < 0));
    }

    #[test]
    fn exact_rows() {
        let table = LogTable::STANDARD;
        assert_eq!(table.get(1).unwrap(), -1178);
        assert_eq!(table.get(32).unwrap(), -291);
        assert_eq!(table.get(50).unwrap(), -177);
        assert_eq!(table.get(99).unwrap(), -2);
    }

    #[test]
    fn ln_converts_back_to_float() {
        let ln = LogTable::STANDARD.ln(50).unwrap();
        // ln(0.5) = -0.6931, truncated in Q8
        assert!((ln - (-0.693_147)).abs() < 1.0 / 256.0);
    }

    #[test]
    fn out_of_bounds_is_reported() {
        assert_eq!(
            LogTable::STANDARD.get(100),
            Err(LookupError::IndexOutOfBounds { index: 100, len: 100 })
        );
        assert!(PackedLogTable::STANDARD.unpack(100).is_err());
    }

    #[test]
    fn packed_shift_bands() {
        assert_eq!(PackedLogTable::shift_for(0), 3);
        assert_eq!(PackedLogTable::shift_for(1), 3);
        assert_eq!(PackedLogTable::shift_for(2), 2);
        assert_eq!(PackedLogTable::shift_for(13), 2);
        assert_eq!(PackedLogTable::shift_for(14), 1);
        assert_eq!(PackedLogTable::shift_for(36), 1);
        assert_eq!(PackedLogTable::shift_for(37), 0);
        assert_eq!(PackedLogTable::shift_for(99), 0);
    }

    #[test]
    fn packed_decodes_close_to_wide() {
        let packed = PackedLogTable::STANDARD;
        for index in 1..LOG_TABLE_LEN {
            let wide = LOG_TABLE[index];
            let narrow = packed.unpack(index).unwrap();
            let lost = (wide - narrow).abs();
            let step = 1 << PackedLogTable::shift_for(index);
            assert!(lost < step, "row {}: wide {} packed {}", index, wide, narrow);
        }
        assert_eq!(packed.unpack(0).unwrap(), -2040);
    }

    #[test]
    fn unshifted_rows_decode_exactly() {
        let packed = PackedLogTable::STANDARD;
        for index in 37..LOG_TABLE_LEN {
            assert_eq!(packed.unpack(index).unwrap(), LOG_TABLE[index]);
        }
    }
}
