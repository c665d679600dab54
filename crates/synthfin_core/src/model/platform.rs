//! Per-platform configuration

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

fn default_platform_type() -> String {
    "social_media".to_string()
}

fn default_user_growth() -> RateSchedule {
    RateSchedule::constant(0.08)
}

fn default_revenue_growth() -> RateSchedule {
    RateSchedule::constant(0.20)
}

/// A per-step growth rate that may switch value at a threshold year.
///
/// Years before `threshold` use `before`, the threshold year and later use
/// `after`. Without a threshold the schedule is constant at `before`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateSchedule {
    pub before: f64,
    #[serde(default)]
    pub after: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<i32>,
}

impl RateSchedule {
    #[must_use]
    pub const fn constant(rate: f64) -> Self {
        Self {
            before: rate,
            after: rate,
            threshold: None,
        }
    }

    #[must_use]
    pub const fn switching(before: f64, threshold: i32, after: f64) -> Self {
        Self {
            before,
            after,
            threshold: Some(threshold),
        }
    }

    #[must_use]
    pub fn rate_for(&self, year: i32) -> f64 {
        match self.threshold {
            Some(threshold) if year >= threshold => self.after,
            _ => self.before,
        }
    }

    /// True if no rate in the schedule is negative
    #[must_use]
    pub fn is_non_negative(&self) -> bool {
        self.before >= 0.0 && (self.threshold.is_none() || self.after >= 0.0)
    }
}

/// Configuration for one platform, resolved once per run.
///
/// `revenue_base` is expressed in billions; the simulators work in
/// million units (see [`PlatformConfig::revenue_millions`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformConfig {
    pub name: String,
    pub users_base: f64,
    pub revenue_base: f64,
    #[serde(default = "default_platform_type")]
    pub platform_type: String,
    #[serde(default)]
    pub specialties: BTreeSet<String>,
    #[serde(default = "default_user_growth")]
    pub user_growth: RateSchedule,
    #[serde(default = "default_revenue_growth")]
    pub revenue_growth: RateSchedule,
    /// Strategic notes shown in the insight report
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<String>,
}

impl PlatformConfig {
    /// Create a config with default growth schedules and no tags
    pub fn new(name: impl Into<String>, users_base: f64, revenue_base: f64) -> Self {
        Self {
            name: name.into(),
            users_base,
            revenue_base,
            platform_type: default_platform_type(),
            specialties: BTreeSet::new(),
            user_growth: default_user_growth(),
            revenue_growth: default_revenue_growth(),
            recommendations: Vec::new(),
        }
    }

    #[must_use]
    pub fn platform_type(mut self, platform_type: impl Into<String>) -> Self {
        self.platform_type = platform_type.into();
        self
    }

    #[must_use]
    pub fn specialties<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.specialties = tags.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn user_growth(mut self, schedule: RateSchedule) -> Self {
        self.user_growth = schedule;
        self
    }

    #[must_use]
    pub fn revenue_growth(mut self, schedule: RateSchedule) -> Self {
        self.revenue_growth = schedule;
        self
    }

    #[must_use]
    pub fn recommendations<I, S>(mut self, notes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.recommendations = notes.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn has_specialty(&self, tag: &str) -> bool {
        self.specialties.contains(tag)
    }

    /// Seed revenue in million units
    #[must_use]
    pub fn revenue_millions(&self) -> f64 {
        self.revenue_base * 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_schedule_switches_at_threshold() {
        let schedule = RateSchedule::switching(0.12, 2018, 0.05);
        assert_eq!(schedule.rate_for(2017), 0.12);
        assert_eq!(schedule.rate_for(2018), 0.05);
        assert_eq!(schedule.rate_for(2025), 0.05);
    }

    #[test]
    fn test_constant_schedule() {
        let schedule = RateSchedule::constant(0.10);
        assert_eq!(schedule.rate_for(1990), 0.10);
        assert_eq!(schedule.rate_for(2090), 0.10);
        assert!(schedule.is_non_negative());
    }

    #[test]
    fn test_builder_methods() {
        let config = PlatformConfig::new("Threads", 1.0e8, 2.0)
            .platform_type("microblog")
            .specialties(["ai", "advertising"])
            .user_growth(RateSchedule::constant(0.3));

        assert_eq!(config.platform_type, "microblog");
        assert!(config.has_specialty("ai"));
        assert!(!config.has_specialty("vr"));
        assert_eq!(config.revenue_millions(), 2000.0);
        assert_eq!(config.user_growth.rate_for(2020), 0.3);
        assert_eq!(config.revenue_growth.rate_for(2020), 0.20);
    }
}
