//! Floating-Point Magnus-Tetens Reference
//!
//! The yardstick for the fixed-point estimator. Arithmetic is single
//! precision except the logarithm, which is taken in double precision and
//! folded back:
//!
//! ```text
//! log = ln((RH / 100) as f64)
//! γ   = (log + (b × T / (c + T)) as f64) as f32
//! Td  = c × γ / (b - γ)
//! ```
//!
//! This is what a C compiler produces for `float` operands passed to
//! `log()`, so the printed digits line up with a desktop run of the same
//! experiment. `libm` supplies `log` so the module also builds without `std`.

use crate::{
    constants::physics::{MAGNUS_B, MAGNUS_C},
    errors::{EstimateError, EstimateResult, Stage},
    traits::{DewPointEstimate, DewPointEstimator, Reading, Term},
};

/// Single-precision Magnus-Tetens estimator
#[derive(Debug, Clone, Copy)]
pub struct ReferenceEstimator {
    b: f32,
    c: f32,
}

impl Default for ReferenceEstimator {
    fn default() -> Self {
        Self { b: MAGNUS_B, c: MAGNUS_C }
    }
}

impl ReferenceEstimator {
    /// Estimator with custom coefficients
    pub const fn with_coefficients(b: f32, c: f32) -> Self {
        Self { b, c }
    }

    /// Coefficients `(b, c)`
    pub const fn coefficients(&self) -> (f32, f32) {
        (self.b, self.c)
    }
}

fn finite_f32(value: f32, stage: Stage) -> EstimateResult<f32> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EstimateError::NonFinite { stage })
    }
}

impl DewPointEstimator for ReferenceEstimator {
    type Estimate = ReferenceEstimate;

    fn estimate(&self, reading: &Reading) -> EstimateResult<ReferenceEstimate> {
        if !reading.is_finite() {
            return Err(EstimateError::InvalidInput);
        }

        let humidity = reading.humidity_pct as f32;
        let temperature = reading.temperature_c as f32;

        let log = libm::log(f64::from(humidity / 100.0));
        if !log.is_finite() {
            return Err(EstimateError::NonFinite { stage: Stage::Log });
        }

        let b_times_t = finite_f32(self.b * temperature, Stage::Ratio)?;
        let c_plus_t = finite_f32(self.c + temperature, Stage::Ratio)?;
        let ratio = finite_f32(b_times_t / c_plus_t, Stage::Ratio)?;
        let gamma = finite_f32((log + f64::from(ratio)) as f32, Stage::Sum)?;
        let dew_point = finite_f32(self.c * gamma / (self.b - gamma), Stage::DewPoint)?;

        log_debug!(
            "reference: log={} ratio={} gamma={} dp={}",
            log, ratio, gamma, dew_point
        );

        Ok(ReferenceEstimate {
            log,
            b_times_t,
            c_plus_t,
            ratio,
            gamma,
            dew_point,
        })
    }
}

/// Intermediates of one floating-point run
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ReferenceEstimate {
    /// `ln(RH/100)`, double precision
    pub log: f64,
    /// `b × T`
    pub b_times_t: f32,
    /// `c + T`
    pub c_plus_t: f32,
    /// `b × T / (c + T)`
    pub ratio: f32,
    /// `γ = log + ratio`
    pub gamma: f32,
    /// Dew point (°C)
    pub dew_point: f32,
}

impl DewPointEstimate for ReferenceEstimate {
    type Terms = [Term; 5];

    fn dew_point_c(&self) -> f32 {
        self.dew_point
    }

    fn terms(&self) -> [Term; 5] {
        [
            Term::new("log", self.log),
            Term::new("Bf * tf", f64::from(self.b_times_t)),
            Term::new("Cf + tf", f64::from(self.c_plus_t)),
            Term::new("yf", f64::from(self.gamma)),
            Term::new("dpf", f64::from(self.dew_point)),
        ]
    }
}

impl core::fmt::Display for ReferenceEstimate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        crate::traits::write_terms(self, f)
    }
}
