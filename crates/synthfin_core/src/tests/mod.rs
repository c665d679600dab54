//! Integration tests for the synthfin generator
//!
//! Tests are organized by topic:
//! - `resolver` - Platform catalog lookup and default fallback
//! - `simulators` - Formula families and the metric table
//! - `generation` - Table shape, randomness and platform scaling
//! - `event_pass` - Historical adjustments applied to generated tables
//! - `summary` - Summary statistics and CSV encoding

mod event_pass;
mod simulators;

use crate::noise::NoiseSource;

/// Noise stub returning a fixed factor and counting draws.
///
/// Like any `NoiseSource`, a zero standard deviation yields exactly 1.0.
#[derive(Debug, Default)]
pub(crate) struct FixedNoise {
    pub factor: f64,
    pub draws: usize,
}

impl FixedNoise {
    pub fn new(factor: f64) -> Self {
        Self { factor, draws: 0 }
    }
}

impl NoiseSource for FixedNoise {
    fn factor(&mut self, std_dev: f64) -> f64 {
        self.draws += 1;
        if std_dev == 0.0 { 1.0 } else { self.factor }
    }
}

pub(crate) fn assert_close(actual: f64, expected: f64) {
    let tolerance = 1e-9 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}
