//! Fixed-Point Dew Point Estimator
//!
//! ## Arithmetic
//!
//! Every value is an integer scaled by 256 (Q8). Inputs are `i16` (Q8.8),
//! intermediates `i32`:
//!
//! ```text
//! h  = trunc(RH × 256)             i16
//! t  = trunc(T  × 256)             i16
//! y1 = LOG_TABLE[h / 256]          ln(RH/100) in Q8
//! y2 = B × t / (C + t)             Q8 × Q8 / Q8 = Q8
//! y  = y1 + y2
//! dp = C × y / (B - y)             narrowed to i16
//! ```
//!
//! All divisions truncate toward zero, the same as C. The result is
//! bit-identical to a 32-bit MCU running the equivalent C code.
//!
//! ## Precision
//!
//! Three truncations feed the dew point: the table row, `y2`, and the final
//! quotient. The first two each lose under one LSB of `y`; the last
//! division scales that error by `B·C / (B - y)²`, so the dew point typically
//! lands within 1/8 °C of the float reference for whole-percent humidity.
//!
//! ## Range
//!
//! `B × t` and `C × y` are checked in `i32`. With the standard coefficients
//! every reading from -40 °C to +60 °C and 1 % to 99 % RH fits. Inputs
//! outside the table (RH ≥ 100 % or RH ≤ -1 %) are reported rather than
//! read past the end.

use fixed::types::{I16F16, I24F8, I8F8};

use crate::{
    constants::{
        physics::{MAGNUS_B_Q8, MAGNUS_C_Q8},
        scaling::{Q8_SCALE, Q8_SCALE_F64},
    },
    errors::{EstimateError, EstimateResult, Stage},
    lookup::LogTable,
    traits::{DewPointEstimate, DewPointEstimator, Reading, Term},
};

/// Integer Magnus-Tetens estimator
#[derive(Debug, Clone, Copy)]
pub struct FixedPointEstimator {
    table: LogTable,
    b_q8: i32,
    c_q8: i32,
}

impl Default for FixedPointEstimator {
    fn default() -> Self {
        Self::new(LogTable::STANDARD)
    }
}

impl FixedPointEstimator {
    /// Estimator over `table` with the standard Magnus coefficients
    pub const fn new(table: LogTable) -> Self {
        Self {
            table,
            b_q8: MAGNUS_B_Q8,
            c_q8: MAGNUS_C_Q8,
        }
    }

    /// Replace the Q8 Magnus coefficients
    pub const fn with_coefficients(mut self, b_q8: i32, c_q8: i32) -> Self {
        self.b_q8 = b_q8;
        self.c_q8 = c_q8;
        self
    }

    /// Q8 coefficients `(B, C)`
    pub const fn coefficients(&self) -> (i32, i32) {
        (self.b_q8, self.c_q8)
    }

    /// Scale by 256 and truncate toward zero into a Q8.8 `i16`
    pub fn quantize(value: f64) -> EstimateResult<i16> {
        if !value.is_finite() {
            return Err(EstimateError::InvalidInput);
        }

        let scaled = libm::trunc(value * Q8_SCALE_F64);
        if scaled < i16::MIN as f64 || scaled > i16::MAX as f64 {
            return Err(EstimateError::OutOfRange {
                value,
                min: i16::MIN as f64 / Q8_SCALE_F64,
                max: i16::MAX as f64 / Q8_SCALE_F64,
            });
        }

        Ok(scaled as i16)
    }
}

/// `numerator / denominator`, truncating, with the failure attributed to `stage`
fn checked_quotient(numerator: i32, denominator: i32, stage: Stage) -> EstimateResult<i32> {
    if denominator == 0 {
        return Err(EstimateError::DivisionByZero { stage });
    }
    numerator
        .checked_div(denominator)
        .ok_or(EstimateError::Overflow { stage })
}

impl DewPointEstimator for FixedPointEstimator {
    type Estimate = FixedPointEstimate;

    fn estimate(&self, reading: &Reading) -> EstimateResult<FixedPointEstimate> {
        if !reading.is_finite() {
            return Err(EstimateError::InvalidInput);
        }

        let humidity_q8 = Self::quantize(reading.humidity_pct)?;
        let temperature_q8 = Self::quantize(reading.temperature_c)?;

        // Row is the Q8 humidity divided back down by the scale
        let index = i32::from(humidity_q8) / Q8_SCALE;
        let table_index =
            usize::try_from(index).map_err(|_| EstimateError::IndexOutOfBounds { index })?;
        let y1 = self
            .table
            .get(table_index)
            .map(i32::from)
            .map_err(|_| EstimateError::IndexOutOfBounds { index })?;

        if table_index == 0 {
            log_warn!(
                "RH {}% selects the ln(0) sentinel row",
                reading.humidity_pct
            );
        }

        let t = i32::from(temperature_q8);
        let b_times_t = self
            .b_q8
            .checked_mul(t)
            .ok_or(EstimateError::Overflow { stage: Stage::Ratio })?;
        let c_plus_t = self
            .c_q8
            .checked_add(t)
            .ok_or(EstimateError::Overflow { stage: Stage::Ratio })?;
        let y2 = checked_quotient(b_times_t, c_plus_t, Stage::Ratio)?;

        let y = y1
            .checked_add(y2)
            .ok_or(EstimateError::Overflow { stage: Stage::Sum })?;

        let c_times_y = self
            .c_q8
            .checked_mul(y)
            .ok_or(EstimateError::Overflow { stage: Stage::DewPoint })?;
        let b_minus_y = self
            .b_q8
            .checked_sub(y)
            .ok_or(EstimateError::Overflow { stage: Stage::DewPoint })?;
        let dp = checked_quotient(c_times_y, b_minus_y, Stage::DewPoint)?;
        let dew_point_q8 =
            i16::try_from(dp).map_err(|_| EstimateError::Overflow { stage: Stage::DewPoint })?;

        let estimate = FixedPointEstimate {
            humidity_q8,
            temperature_q8,
            table_index,
            b_times_t,
            c_plus_t,
            y1,
            y2,
            y,
            dew_point_q8,
        };

        log_debug!(
            "fixed: h={} t={} row={} y1={} y2={} y={} dp={}",
            humidity_q8, temperature_q8, table_index, y1, y2, y, dew_point_q8
        );

        Ok(estimate)
    }
}

/// Raw intermediates of one fixed-point run
///
/// Fields hold integer bits. Q8 unless noted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FixedPointEstimate {
    /// Humidity, Q8.8
    pub humidity_q8: i16,
    /// Temperature, Q8.8
    pub temperature_q8: i16,
    /// Log table row that was read
    pub table_index: usize,
    /// `B × t`, Q16
    pub b_times_t: i32,
    /// `C + t`
    pub c_plus_t: i32,
    /// `ln(RH/100)` from the table
    pub y1: i32,
    /// `B × t / (C + t)`
    pub y2: i32,
    /// `y1 + y2`
    pub y: i32,
    /// Dew point, Q8.8
    pub dew_point_q8: i16,
}

impl FixedPointEstimate {
    /// Dew point as a Q8.8 fixed-point number
    pub fn dew_point(&self) -> I8F8 {
        I8F8::from_bits(self.dew_point_q8)
    }

    /// `B × t` as Q16.16
    pub fn b_times_t(&self) -> I16F16 {
        I16F16::from_bits(self.b_times_t)
    }

    /// `C + t` as Q24.8
    pub fn c_plus_t(&self) -> I24F8 {
        I24F8::from_bits(self.c_plus_t)
    }

    /// Table logarithm as Q24.8
    pub fn log(&self) -> I24F8 {
        I24F8::from_bits(self.y1)
    }

    /// Ratio term as Q24.8
    pub fn ratio(&self) -> I24F8 {
        I24F8::from_bits(self.y2)
    }

    /// `γ` as Q24.8
    pub fn gamma(&self) -> I24F8 {
        I24F8::from_bits(self.y)
    }
}

/// Widen a Q24.8 value through `f32`, matching `(float)raw / 256`
fn q24(value: I24F8) -> f64 {
    f64::from(value.to_num::<f32>())
}

impl DewPointEstimate for FixedPointEstimate {
    type Terms = [Term; 7];

    fn dew_point_c(&self) -> f32 {
        self.dew_point().to_num::<f32>()
    }

    fn terms(&self) -> [Term; 7] {
        [
            Term::new("log", q24(self.log())),
            Term::new("B * t", f64::from(self.b_times_t().to_num::<f32>())),
            Term::new("C + t", q24(self.c_plus_t())),
            Term::new("y1", q24(self.log())),
            Term::new("y2", q24(self.ratio())),
            Term::new("y", q24(self.gamma())),
            Term::new("dp", f64::from(self.dew_point_c())),
        ]
    }
}

impl core::fmt::Display for FixedPointEstimate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        crate::traits::write_terms(self, f)
    }
}
