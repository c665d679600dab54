//! The parameterized growth-plus-noise metric simulator
//!
//! Every metric is `base × trajectory factor × noise`, where the base is read
//! from the platform config, the trajectory is one of four formula families,
//! and noise is one independent draw per year. Simulators never read each
//! other's output.

use crate::model::{Column, PlatformConfig, RateSchedule};
use crate::noise::NoiseSource;

/// Where a metric's seed value comes from
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BaseAmount {
    /// Fraction of the platform revenue base, in million units
    Revenue(f64),
    /// Fraction of the platform user base
    Users(f64),
    /// A fixed constant independent of the platform
    Fixed(f64),
}

impl BaseAmount {
    #[must_use]
    pub fn resolve(&self, config: &PlatformConfig) -> f64 {
        match self {
            BaseAmount::Revenue(fraction) => config.revenue_millions() * fraction,
            BaseAmount::Users(fraction) => config.users_base * fraction,
            BaseAmount::Fixed(value) => *value,
        }
    }
}

/// Which platform growth schedule a year-conditional metric follows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformRate {
    Users,
    Revenue,
}

impl PlatformRate {
    #[must_use]
    pub fn schedule<'a>(&self, config: &'a PlatformConfig) -> &'a RateSchedule {
        match self {
            PlatformRate::Users => &config.user_growth,
            PlatformRate::Revenue => &config.revenue_growth,
        }
    }
}

/// Constant boost applied when the platform carries a specialty tag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryBoost {
    pub tag: &'static str,
    pub present: f64,
    pub absent: f64,
}

impl CategoryBoost {
    #[must_use]
    pub fn multiplier(&self, config: &PlatformConfig) -> f64 {
        if config.has_specialty(self.tag) {
            self.present
        } else {
            self.absent
        }
    }
}

/// Deterministic shape of a metric over time
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trajectory {
    /// `1 + rate × i`, where `i` is the zero-based year index
    Linear { rate: f64 },
    /// `1 + rate(year) × i`, with the rate read from a platform schedule for
    /// the calendar year. A schedule whose rate falls at its threshold makes
    /// the series step down there.
    YearConditional { source: PlatformRate },
    /// Linear growth times a multiplier in hand-picked spike years and an
    /// optional specialty boost.
    YearSpike {
        rate: f64,
        spike_years: &'static [i32],
        spike: f64,
        category: Option<CategoryBoost>,
    },
    /// Flat until `threshold`, then `1 + rate × (year - threshold)`
    PostThreshold { threshold: i32, rate: f64 },
}

impl Trajectory {
    /// Noise-free growth factors, one per year
    #[must_use]
    pub fn factors(&self, years: &[i32], config: &PlatformConfig) -> Vec<f64> {
        match *self {
            Trajectory::Linear { rate } => (0..years.len())
                .map(|i| linear_growth(rate, i))
                .collect(),
            Trajectory::YearConditional { source } => {
                let schedule = source.schedule(config);
                years
                    .iter()
                    .enumerate()
                    .map(|(i, &year)| linear_growth(schedule.rate_for(year), i))
                    .collect()
            }
            Trajectory::YearSpike {
                rate,
                spike_years,
                spike,
                category,
            } => {
                let boost = category.map_or(1.0, |c| c.multiplier(config));
                years
                    .iter()
                    .enumerate()
                    .map(|(i, year)| {
                        let year_multiplier = if spike_years.contains(year) {
                            spike
                        } else {
                            1.0
                        };
                        linear_growth(rate, i) * year_multiplier * boost
                    })
                    .collect()
            }
            Trajectory::PostThreshold { threshold, rate } => years
                .iter()
                .map(|&year| {
                    if year >= threshold {
                        1.0 + rate * f64::from(year - threshold)
                    } else {
                        1.0
                    }
                })
                .collect(),
        }
    }
}

#[inline]
fn linear_growth(rate: f64, index: usize) -> f64 {
    1.0 + rate * index as f64
}

/// Full description of one simulated column
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricSpec {
    pub column: Column,
    pub base: BaseAmount,
    pub trajectory: Trajectory,
    /// Standard deviation of the mean-1 Gaussian noise; zero disables noise
    pub noise_std_dev: f64,
}

impl MetricSpec {
    /// Simulate one value per year, same length and order as `years`.
    ///
    /// Consumes exactly one noise draw per year.
    pub fn simulate<N: NoiseSource + ?Sized>(
        &self,
        years: &[i32],
        config: &PlatformConfig,
        noise: &mut N,
    ) -> Vec<f64> {
        let base = self.base.resolve(config);
        self.trajectory
            .factors(years, config)
            .into_iter()
            .map(|factor| base * factor * noise.factor(self.noise_std_dev))
            .collect()
    }
}
