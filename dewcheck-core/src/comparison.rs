//! Side-by-side comparison of the two estimators
//!
//! [`ComparisonReport`] renders the text the experiment prints: the
//! fixed-point block, a blank line, the reference block, and optionally a
//! third block of per-term deltas.
//!
//! ```text
//! log=-1.136719        <- fixed-point terms
//! ...
//! dp=5.335938
//!
//! log=-1.136626        <- reference terms
//! ...
//! dpf=5.393547
//! ```

use core::fmt;

use crate::{
    constants::scaling::{DEW_POINT_TOLERANCE_LSB, Q8_SCALE_F32, TERM_TOLERANCE_LSB},
    errors::EstimateResult,
    fixed_point::{FixedPointEstimate, FixedPointEstimator},
    reference::{ReferenceEstimate, ReferenceEstimator},
    traits::{DewPointEstimate, DewPointEstimator, Reading},
};

/// One quantity computed by both estimators
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TermDelta {
    /// Name of the quantity
    pub label: &'static str,
    /// Fixed-point value, converted from Q8
    pub fixed: f64,
    /// Reference value
    pub reference: f64,
    /// Allowed `|fixed - reference|` in Q8 LSBs
    pub tolerance_lsb: f32,
}

impl TermDelta {
    /// `fixed - reference`
    pub fn delta(&self) -> f64 {
        self.fixed - self.reference
    }

    /// `|fixed - reference|` in units of 1/256
    pub fn delta_lsb(&self) -> f32 {
        (libm::fabs(self.delta()) * f64::from(Q8_SCALE_F32)) as f32
    }

    /// Disagreement is within quantization error
    pub fn within_tolerance(&self) -> bool {
        self.delta_lsb() <= self.tolerance_lsb
    }
}

/// Both estimates for the same reading
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PrecisionComparison {
    /// Input both estimators ran on
    pub reading: Reading,
    /// Integer path
    pub fixed: FixedPointEstimate,
    /// Float path
    pub reference: ReferenceEstimate,
}

impl PrecisionComparison {
    /// Pair two estimates of `reading`
    pub fn new(reading: Reading, fixed: FixedPointEstimate, reference: ReferenceEstimate) -> Self {
        Self { reading, fixed, reference }
    }

    /// Run both standard estimators
    pub fn run(reading: &Reading) -> EstimateResult<Self> {
        Self::run_with(&FixedPointEstimator::default(), &ReferenceEstimator::default(), reading)
    }

    /// Run the given estimators
    pub fn run_with(
        fixed: &FixedPointEstimator,
        reference: &ReferenceEstimator,
        reading: &Reading,
    ) -> EstimateResult<Self> {
        let fixed = fixed.estimate(reading)?;
        let reference = reference.estimate(reading)?;
        Ok(Self::new(*reading, fixed, reference))
    }

    /// Shared quantities: table log, ratio, `γ`, dew point
    pub fn deltas(&self) -> [TermDelta; 4] {
        let q8 = |raw: i32| f64::from(raw as f32 / Q8_SCALE_F32);
        [
            TermDelta {
                label: "log",
                fixed: q8(self.fixed.y1),
                reference: self.reference.log,
                tolerance_lsb: TERM_TOLERANCE_LSB,
            },
            TermDelta {
                label: "ratio",
                fixed: q8(self.fixed.y2),
                reference: f64::from(self.reference.ratio),
                tolerance_lsb: TERM_TOLERANCE_LSB,
            },
            TermDelta {
                label: "y",
                fixed: q8(self.fixed.y),
                reference: f64::from(self.reference.gamma),
                tolerance_lsb: TERM_TOLERANCE_LSB,
            },
            TermDelta {
                label: "dp",
                fixed: f64::from(self.fixed.dew_point_c()),
                reference: f64::from(self.reference.dew_point_c()),
                tolerance_lsb: DEW_POINT_TOLERANCE_LSB,
            },
        ]
    }

    /// Every shared quantity agrees within quantization error
    pub fn within_tolerance(&self) -> bool {
        let ok = self.deltas().iter().all(TermDelta::within_tolerance);
        if !ok {
            log_debug!(
                "RH {}% T {}: fixed and reference disagree beyond tolerance",
                self.reading.humidity_pct, self.reading.temperature_c
            );
        }
        ok
    }

    /// Dew point disagreement in °C
    pub fn dew_point_error_c(&self) -> f32 {
        self.fixed.dew_point_c() - self.reference.dew_point_c()
    }

    /// Text report, optionally with the delta block
    pub fn report(&self, show_deltas: bool) -> ComparisonReport<'_> {
        ComparisonReport { comparison: self, show_deltas }
    }
}

/// Printable form of a [`PrecisionComparison`]
#[derive(Debug, Clone, Copy)]
pub struct ComparisonReport<'a> {
    comparison: &'a PrecisionComparison,
    show_deltas: bool,
}

impl fmt::Display for ComparisonReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.comparison.fixed)?;
        writeln!(f)?;
        write!(f, "{}", self.comparison.reference)?;

        if self.show_deltas {
            writeln!(f)?;
            for delta in self.comparison.deltas() {
                writeln!(f, "{}_delta={:.6}", delta.label, delta.delta())?;
            }
            writeln!(f, "within_tolerance={}", self.comparison.within_tolerance())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED: &str = "log=-1.136719\n\
                            B * t=404.706909\n\
                            C + t=266.406250\n\
                            y1=-1.136719\n\
                            y2=1.515625\n\
                            y=0.378906\n\
                            dp=5.335938\n\
                            \n\
                            log=-1.136626\n\
                            Bf * tf=404.819702\n\
                            Cf + tf=266.410004\n\
                            yf=0.382911\n\
                            dpf=5.393547\n";

    #[test]
    fn reference_reading_report() {
        let cmp = PrecisionComparison::run(&Reading::default()).unwrap();
        assert_eq!(cmp.report(false).to_string(), EXPECTED);
    }

    #[test]
    fn report_is_deterministic() {
        let first = PrecisionComparison::run(&Reading::default()).unwrap();
        for _ in 0..10 {
            let again = PrecisionComparison::run(&Reading::default()).unwrap();
            assert_eq!(again, first);
            assert_eq!(again.report(true).to_string(), first.report(true).to_string());
        }
    }

    #[test]
    fn reference_reading_is_within_tolerance() {
        let cmp = PrecisionComparison::run(&Reading::default()).unwrap();
        for delta in cmp.deltas() {
            assert!(delta.within_tolerance(), "{}: {} LSB", delta.label, delta.delta_lsb());
        }
        // 1366/256 vs 5.393547
        assert!((cmp.dew_point_error_c() + 0.0576).abs() < 1e-3);
    }

    #[test]
    fn delta_block() {
        let cmp = PrecisionComparison::run(&Reading::default()).unwrap();
        let text = cmp.report(true).to_string();
        let tail: Vec<&str> = text.lines().skip(14).collect();

        assert_eq!(tail.len(), 5);
        assert!(tail[0].starts_with("log_delta=-0.0000"));
        assert!(tail[3].starts_with("dp_delta=-0.057"));
        assert_eq!(tail[4], "within_tolerance=true");
    }

    #[test]
    fn fractional_humidity_exceeds_log_tolerance() {
        // Row 32 stands in for everything from 32.00 to 32.99 %
        let cmp = PrecisionComparison::run(&Reading::new(32.95, 22.91)).unwrap();
        let log = cmp.deltas()[0];
        assert!(!log.within_tolerance());
        assert!(!cmp.within_tolerance());
    }
}
