//! Multiplicative noise sources for the metric simulators

use rand::{Rng, SeedableRng, distr::Distribution, rngs::SmallRng};

/// Source of per-year multiplicative perturbations centred on 1.0.
///
/// Each call consumes one draw. Implementations must return exactly 1.0
/// when `std_dev` is zero.
pub trait NoiseSource {
    fn factor(&mut self, std_dev: f64) -> f64;
}

impl<N: NoiseSource + ?Sized> NoiseSource for &mut N {
    fn factor(&mut self, std_dev: f64) -> f64 {
        (**self).factor(std_dev)
    }
}

/// Noise suppressed: every factor is 1.0
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNoise;

impl NoiseSource for NoNoise {
    fn factor(&mut self, _std_dev: f64) -> f64 {
        1.0
    }
}

/// Gaussian noise with mean 1 drawn from an owned random generator
#[derive(Debug, Clone)]
pub struct GaussianNoise<R> {
    rng: R,
}

impl<R: Rng> GaussianNoise<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl GaussianNoise<SmallRng> {
    /// Reproducible noise from a fixed seed
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// Noise seeded from operating system entropy
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(SmallRng::from_os_rng())
    }
}

impl<R: Rng> NoiseSource for GaussianNoise<R> {
    fn factor(&mut self, std_dev: f64) -> f64 {
        if std_dev <= 0.0 {
            return 1.0;
        }
        // Normal::new only rejects non-finite std_dev
        rand_distr::Normal::new(1.0, std_dev)
            .map(|d| d.sample(&mut self.rng))
            .unwrap_or(1.0)
    }
}
