//! Logarithm table generation and verification
//!
//! Recomputes the rows of [`LOG_TABLE`](crate::lookup::LOG_TABLE) and
//! [`PACKED_LOG_TABLE`](crate::lookup::PACKED_LOG_TABLE) from `ln()` and
//! emits them as Rust source. The stored tables are checked against this
//! module in tests, and `dewcheck table` prints the generated source.
//!
//! Rows are computed in double precision and truncated toward zero:
//!
//! ```text
//! wide[i]   = trunc(ln(i/100) × 256)          i16, row 0 = -32767
//! packed[i] = -wide[i] >> shift(i)            u8,  row 0 = 2047 >> 3
//! ```

use core::fmt;

use thiserror_no_std::Error;

use crate::{
    constants::scaling::{LOG_TABLE_LEN, LOG_ZERO_SENTINEL, PACKED_ZERO_SENTINEL, Q8_SCALE_F64},
    lookup::{LogTable, PackedLogTable},
};

/// Which table to emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableLayout {
    /// One `i16` per row
    #[default]
    Wide,
    /// One `u8` per row, large magnitudes shifted right
    Packed,
}

impl TableLayout {
    /// Name used in generated identifiers and headers
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wide => "WIDE",
            Self::Packed => "PACKED",
        }
    }
}

/// A stored table disagrees with the generator
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// Stored row differs from the recomputed value
    #[error("Row {index}: stored {stored}, expected {expected}")]
    Mismatch {
        /// Row number
        index: usize,
        /// Value in the table
        stored: i32,
        /// Value from `ln()`
        expected: i32,
    },

    /// Row is not greater than the one before it
    #[error("Row {index} does not increase")]
    NotIncreasing {
        /// Row number
        index: usize,
    },
}

/// `trunc(ln(index/100) × 256)`, or the sentinel for row 0
pub fn log_q8(index: usize) -> i16 {
    if index == 0 {
        return LOG_ZERO_SENTINEL;
    }
    let ln = libm::log(index as f64 / 100.0);
    (ln * Q8_SCALE_F64) as i16
}

/// Packed byte for `index` and the right shift applied to it
pub fn packed_q8(index: usize) -> (u8, u32) {
    if index == 0 {
        return (PACKED_ZERO_SENTINEL, PackedLogTable::shift_for(0));
    }

    let magnitude = -i32::from(log_q8(index));
    let shift = match magnitude {
        m if m >= 1024 => 3,
        m if m >= 512 => 2,
        m if m >= 256 => 1,
        _ => 0,
    };
    ((magnitude >> shift) as u8, shift)
}

/// Check every row of `table` against [`log_q8`] and the ordering invariant
pub fn verify_log_table(table: &LogTable) -> Result<(), TableError> {
    let values = table.as_slice();
    for (index, &stored) in values.iter().enumerate() {
        let expected = log_q8(index);
        if stored != expected {
            return Err(TableError::Mismatch {
                index,
                stored: i32::from(stored),
                expected: i32::from(expected),
            });
        }
        if index > 0 && stored <= values[index - 1] {
            return Err(TableError::NotIncreasing { index });
        }
    }
    Ok(())
}

/// Check every byte of `table` against [`packed_q8`]
pub fn verify_packed_table(table: &PackedLogTable) -> Result<(), TableError> {
    for index in 0..LOG_TABLE_LEN {
        let (expected, shift) = packed_q8(index);
        let stored = table.raw(index).map_err(|_| TableError::Mismatch {
            index,
            stored: -1,
            expected: i32::from(expected),
        })?;
        if stored != expected || shift != PackedLogTable::shift_for(index) {
            return Err(TableError::Mismatch {
                index,
                stored: i32::from(stored),
                expected: i32::from(expected),
            });
        }
    }
    Ok(())
}

/// Write the table as a Rust `const` item
pub fn write_log_table<W: fmt::Write>(out: &mut W, layout: TableLayout) -> fmt::Result {
    writeln!(out, "// Auto-generated lookup table for dewcheck")?;
    writeln!(out, "// Layout: {}", layout.name())?;
    writeln!(out, "// Rows: trunc(ln(i/100) * 256), i = 0..{}", LOG_TABLE_LEN - 1)?;
    writeln!(out)?;

    match layout {
        TableLayout::Wide => {
            writeln!(out, "/// Log table rows for {} layout", layout.name())?;
            write!(out, "pub const LOG_TABLE_{}: [i16; {}] = [", layout.name(), LOG_TABLE_LEN)?;
            for index in 0..LOG_TABLE_LEN {
                if index % 10 == 0 {
                    write!(out, "\n    // {}-{} %\n    ", index, index + 9)?;
                } else {
                    write!(out, " ")?;
                }
                write!(out, "{},", log_q8(index))?;
            }
        }
        TableLayout::Packed => {
            writeln!(out, "/// Log table magnitudes for {} layout", layout.name())?;
            write!(out, "pub const LOG_TABLE_{}: [u8; {}] = [", layout.name(), LOG_TABLE_LEN)?;
            for index in 0..LOG_TABLE_LEN {
                let (value, shift) = packed_q8(index);
                write!(out, "\n    {},", value)?;
                if shift > 0 {
                    write!(out, " // << {} if i == {}", shift, index)?;
                }
            }
        }
    }

    writeln!(out, "\n];")
}
