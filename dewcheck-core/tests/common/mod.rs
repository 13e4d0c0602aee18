//! Shared fixtures for dewcheck integration tests
//!
//! Named readings covering the climates the estimator is expected to handle,
//! plus the text the reference reading must print.

#![allow(dead_code)]

use dewcheck_core::Reading;

/// Byte-exact output for the default reading
pub const REFERENCE_OUTPUT: &str = "log=-1.136719
B * t=404.706909
C + t=266.406250
y1=-1.136719
y2=1.515625
y=0.378906
dp=5.335938

log=-1.136626
Bf * tf=404.819702
Cf + tf=266.410004
yf=0.382911
dpf=5.393547
";

/// A reading with a short description
pub struct Scenario {
    pub name: &'static str,
    pub reading: Reading,
}

impl Scenario {
    const fn new(name: &'static str, humidity_pct: f64, temperature_c: f64) -> Self {
        Self {
            name,
            reading: Reading::new(humidity_pct, temperature_c),
        }
    }
}

/// Whole-percent readings spanning arctic to tropical conditions
pub const SCENARIOS: [Scenario; 8] = [
    Scenario::new("office", 45.0, 22.0),
    Scenario::new("winter indoor", 20.0, 19.0),
    Scenario::new("bathroom", 95.0, 26.0),
    Scenario::new("arctic", 70.0, -35.0),
    Scenario::new("frost", 90.0, -2.0),
    Scenario::new("desert", 5.0, 45.0),
    Scenario::new("tropical", 85.0, 32.0),
    Scenario::new("greenhouse", 99.0, 30.0),
];

/// Assert `|actual - expected| <= tolerance` with a readable message
macro_rules! assert_within_tolerance {
    ($actual:expr, $expected:expr, $tolerance:expr) => {{
        let actual = $actual;
        let expected = $expected;
        let diff = (actual - expected).abs();
        assert!(
            diff <= $tolerance,
            "{} differs from {} by {} (tolerance {})",
            actual, expected, diff, $tolerance
        );
    }};
}
