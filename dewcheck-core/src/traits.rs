//! Core traits for dew point estimators
//!
//! Both estimators take the same [`Reading`] and expose their intermediate
//! values as labelled [`Term`]s, which is all the report needs.

use core::fmt;

use crate::constants::physics::{DEFAULT_HUMIDITY_PCT, DEFAULT_TEMPERATURE_C};
use crate::errors::EstimateResult;

/// Humidity and temperature pair fed to an estimator
///
/// Kept in `f64`: the integer path quantizes from double precision and the
/// float path narrows to `f32` itself.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reading {
    /// Relative humidity (%)
    pub humidity_pct: f64,
    /// Air temperature (°C)
    pub temperature_c: f64,
}

impl Reading {
    /// Create a reading
    pub const fn new(humidity_pct: f64, temperature_c: f64) -> Self {
        Self { humidity_pct, temperature_c }
    }

    /// Both values are finite numbers
    pub fn is_finite(&self) -> bool {
        self.humidity_pct.is_finite() && self.temperature_c.is_finite()
    }
}

impl Default for Reading {
    /// 32.09 %RH at 22.91 °C
    fn default() -> Self {
        Self::new(DEFAULT_HUMIDITY_PCT, DEFAULT_TEMPERATURE_C)
    }
}

/// One labelled intermediate value
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Term {
    /// Label printed before `=`
    pub label: &'static str,
    /// Value, widened to `f64` for printing
    pub value: f64,
}

impl Term {
    /// Create a term
    pub const fn new(label: &'static str, value: f64) -> Self {
        Self { label, value }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={:.6}", self.label, self.value)
    }
}

/// Result of one estimator run
pub trait DewPointEstimate {
    /// Fixed-size list of terms
    type Terms: AsRef<[Term]>;

    /// Dew point in °C
    fn dew_point_c(&self) -> f32;

    /// Intermediate values in print order
    fn terms(&self) -> Self::Terms;
}

/// Computes a dew point from a [`Reading`]
pub trait DewPointEstimator {
    /// What a successful run produces
    type Estimate: DewPointEstimate;

    /// Run the estimator
    fn estimate(&self, reading: &Reading) -> EstimateResult<Self::Estimate>;
}

/// Write every term on its own line, `label=value` with six decimals
pub fn write_terms<E: DewPointEstimate + ?Sized>(
    estimate: &E,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    for term in estimate.terms().as_ref() {
        writeln!(f, "{}", term)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_reading_is_the_reference_point() {
        let reading = Reading::default();
        assert_eq!(reading.humidity_pct, 32.09);
        assert_eq!(reading.temperature_c, 22.91);
        assert!(reading.is_finite());
    }

    #[test]
    fn non_finite_readings() {
        assert!(!Reading::new(f64::NAN, 20.0).is_finite());
        assert!(!Reading::new(50.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn term_format() {
        assert_eq!(Term::new("y", 97.0 / 256.0).to_string(), "y=0.378906");
        assert_eq!(Term::new("dp", 1366.0 / 256.0).to_string(), "dp=5.335938");
        assert_eq!(Term::new("log", -291.0 / 256.0).to_string(), "log=-1.136719");
    }
}
