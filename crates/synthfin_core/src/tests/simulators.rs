//! Tests for the metric simulators
//!
//! These tests verify that:
//! - Each formula family produces the expected noise-free shape
//! - Trends are non-decreasing for non-negative growth rates, apart from
//!   the single step where a schedule rate falls at its threshold
//! - Spike years and specialty boosts multiply the trend
//! - The metric table covers every column exactly once

use super::{FixedNoise, assert_close};
use crate::config::{BUILTIN_PLATFORMS, resolve};
use crate::metrics::{METRIC_SPECS, spec_for};
use crate::model::{Column, PlatformConfig, RateSchedule, YearRange};
use crate::noise::{GaussianNoise, NoNoise};
use crate::simulator::{BaseAmount, MetricSpec, PlatformRate, Trajectory};

fn default_years() -> Vec<i32> {
    YearRange::DEFAULT.to_vec()
}

fn is_non_decreasing(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[1] >= w[0])
}

/// Split `values` where the year's schedule switches rate
fn schedule_segments<'a>(
    values: &'a [f64],
    years: &[i32],
    schedule: &RateSchedule,
) -> Vec<&'a [f64]> {
    match schedule.threshold {
        Some(threshold) => {
            let split = years.iter().position(|&y| y >= threshold).unwrap_or(years.len());
            let (before, after) = values.split_at(split);
            vec![before, after]
        }
        None => vec![values],
    }
}

#[test]
fn test_metric_table_covers_every_column_in_order() {
    assert_eq!(METRIC_SPECS.len(), Column::ALL.len());
    for (spec, column) in METRIC_SPECS.iter().zip(Column::ALL) {
        assert_eq!(spec.column, column);
        assert_eq!(spec_for(column).column, column);
    }
}

#[test]
fn test_noise_amplitudes_in_expected_band() {
    for spec in &METRIC_SPECS {
        match spec.column {
            // Usage metrics are noise-free
            Column::ActiveUsers | Column::DailyUsers => assert_eq!(spec.noise_std_dev, 0.0),
            _ => assert!(
                (0.05..=0.18).contains(&spec.noise_std_dev),
                "{}: {}",
                spec.column,
                spec.noise_std_dev
            ),
        }
    }
}

#[test]
fn test_linear_family() {
    let config = resolve("Facebook");
    let spec = spec_for(Column::AdRevenue);
    let values = spec.simulate(&default_years(), &config, &mut NoNoise);

    let base = 85_000.0 * 0.98;
    assert_eq!(values.len(), 16);
    for (i, value) in values.iter().enumerate() {
        assert_close(*value, base * (1.0 + 0.22 * i as f64));
    }
}

#[test]
fn test_year_conditional_constant_schedule_matches_linear() {
    let config = resolve("WhatsApp");
    let values = spec_for(Column::ActiveUsers).simulate(&default_years(), &config, &mut NoNoise);

    for (i, value) in values.iter().enumerate() {
        assert_close(*value, 2.0e9 * (1.0 + 0.10 * i as f64));
    }
}

#[test]
fn test_year_conditional_switches_rate_at_threshold() {
    let config = resolve("Facebook");
    let years = default_years();
    let values = spec_for(Column::ActiveUsers).simulate(&years, &config, &mut NoNoise);

    // 2010..=2017 use 0.12, 2018 onwards 0.05, both applied to the full index
    let idx_2017 = 7;
    assert_close(values[idx_2017], 2.0e9 * (1.0 + 0.12 * 7.0));
    assert_close(values[idx_2017 + 1], 2.8e9);
    assert_close(values[15], 3.5e9);

    // One step down at the threshold, then steady growth again
    assert!(values[idx_2017 + 1] < values[idx_2017]);
    let steps: Vec<f64> = values.windows(2).map(|w| w[1] - w[0]).collect();
    assert_close(steps[0], 2.0e9 * 0.12);
    assert_close(steps[14], 2.0e9 * 0.05);
}

#[test]
fn test_instagram_users_follow_calendar_rate() {
    let config = resolve("Instagram");
    let values = spec_for(Column::ActiveUsers).simulate(&default_years(), &config, &mut NoNoise);

    assert_close(values[9], config.users_base * (1.0 + 0.25 * 9.0));
    assert_close(values[10], config.users_base * (1.0 + 0.15 * 10.0));
    assert_close(values[15], config.users_base * (1.0 + 0.15 * 15.0));
}

#[test]
fn test_year_conditional_revenue_uses_platform_rate() {
    let years = [2010, 2011, 2012];
    for (name, rate) in [("Facebook", 0.25), ("WhatsApp", 0.40), ("Instagram", 0.35), ("x", 0.20)] {
        let config = resolve(name);
        let values = spec_for(Column::TotalRevenue).simulate(&years, &config, &mut NoNoise);
        assert_close(values[2], config.revenue_millions() * (1.0 + 2.0 * rate));
    }
}

#[test]
fn test_post_threshold_family() {
    let config = resolve("Instagram");
    let years = default_years();
    let margin = spec_for(Column::ProfitMargin).simulate(&years, &config, &mut NoNoise);

    // Flat until 2015
    for value in &margin[..5] {
        assert_close(*value, 0.35);
    }
    assert_close(margin[5], 0.35);
    assert_close(margin[10], 0.35 * 1.05);

    let cac = spec_for(Column::AcquisitionCost).simulate(&years, &config, &mut NoNoise);
    assert_close(cac[15], 5.0 * (1.0 + 0.03 * 10.0));

    let ltv = spec_for(Column::LifetimeValue).simulate(&years, &config, &mut NoNoise);
    assert_close(ltv[15], 50.0 * 1.5);

    let profit = spec_for(Column::NetProfit).simulate(&years, &config, &mut NoNoise);
    assert_close(profit[0], 45_000.0 * 0.35);
    assert_close(profit[15], 45_000.0 * 0.35 * 1.2);
}

#[test]
fn test_spike_years_and_specialty_boost() {
    let years = default_years();
    let vr = spec_for(Column::VrInvestment);

    // Facebook carries the "vr" tag, WhatsApp doesn't
    let facebook = resolve("Facebook");
    let whatsapp = resolve("WhatsApp");
    let fb = vr.simulate(&years, &facebook, &mut NoNoise);
    let wa = vr.simulate(&years, &whatsapp, &mut NoNoise);

    assert_close(fb[0], 85_000.0 * 0.05 * 2.0);
    assert_close(wa[0], 5_000.0 * 0.05 * 0.8);

    // 2016 is a VR spike year (index 6)
    assert_close(fb[6], 85_000.0 * 0.05 * (1.0 + 0.20 * 6.0) * 2.0 * 2.0);
    assert_close(fb[7], 85_000.0 * 0.05 * (1.0 + 0.20 * 7.0) * 2.0);
}

#[test]
fn test_ai_boost_requires_tag() {
    let years = [2013];
    let plain = PlatformConfig::new("Plain", 1.0, 10.0);
    let tagged = plain.clone().specialties(["ai"]);
    let spec = spec_for(Column::AiInvestment);

    let a = spec.simulate(&years, &plain, &mut NoNoise)[0];
    let b = spec.simulate(&years, &tagged, &mut NoNoise)[0];
    assert_close(a, 10_000.0 * 0.08);
    assert_close(b, 10_000.0 * 0.08 * 1.5);
}

#[test]
fn test_trends_non_decreasing_without_noise() {
    let years = default_years();
    for name in BUILTIN_PLATFORMS.into_iter().chain(["unknown"]) {
        let config = resolve(name);
        for spec in &METRIC_SPECS {
            let factors = spec.trajectory.factors(&years, &config);
            // Spike multipliers sit on top of the trend; strip them out
            let trend: Vec<f64> = match spec.trajectory {
                Trajectory::YearSpike {
                    spike_years, spike, ..
                } => years
                    .iter()
                    .zip(&factors)
                    .map(|(y, f)| if spike_years.contains(y) { f / spike } else { *f })
                    .collect(),
                _ => factors,
            };
            // A falling schedule rate steps down once at its threshold
            let segments = match spec.trajectory {
                Trajectory::YearConditional { source } => {
                    schedule_segments(&trend, &years, source.schedule(&config))
                }
                _ => vec![trend.as_slice()],
            };
            for segment in segments {
                assert!(
                    is_non_decreasing(segment),
                    "{name} {} not non-decreasing: {trend:?}",
                    spec.column
                );
            }
        }
    }
}

#[test]
fn test_non_spike_metrics_monotonic_end_to_end() {
    let years = default_years();
    let config = resolve("WhatsApp");
    assert!(config.user_growth.is_non_negative());

    for spec in METRIC_SPECS
        .iter()
        .filter(|s| !matches!(s.trajectory, Trajectory::YearSpike { .. }))
    {
        let values = spec.simulate(&years, &config, &mut NoNoise);
        assert!(is_non_decreasing(&values), "{}", spec.column);
    }
}

#[test]
fn test_one_noise_draw_per_year() {
    let years = default_years();
    let config = resolve("Instagram");
    let mut noise = FixedNoise::new(1.1);

    let values = spec_for(Column::Staff).simulate(&years, &config, &mut noise);

    assert_eq!(noise.draws, years.len());
    assert_close(values[0], 45_000.0 * 0.20 * 1.1);
}

#[test]
fn test_noise_shape_matches_mean_and_spread() {
    // Same mean/variance contract, not identical numbers
    let config = resolve("Facebook");
    let spec = MetricSpec {
        column: Column::Marketing,
        base: BaseAmount::Fixed(100.0),
        trajectory: Trajectory::Linear { rate: 0.0 },
        noise_std_dev: 0.11,
    };
    let years: Vec<i32> = (0..20_000).collect();
    let mut noise = GaussianNoise::seeded(99);
    let values = spec.simulate(&years, &config, &mut noise);

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let sd = (values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n).sqrt();
    assert!((mean - 100.0).abs() < 0.5, "mean {mean}");
    assert!((sd - 11.0).abs() < 0.5, "sd {sd}");
}

#[test]
fn test_custom_schedule_drives_users() {
    let config = PlatformConfig::new("Custom", 1_000.0, 1.0)
        .user_growth(RateSchedule::switching(0.5, 2012, 0.0));
    let spec = MetricSpec {
        column: Column::ActiveUsers,
        base: BaseAmount::Users(1.0),
        trajectory: Trajectory::YearConditional {
            source: PlatformRate::Users,
        },
        noise_std_dev: 0.0,
    };

    // 0.5 per index before 2012, nothing from 2012 on
    let values = spec.simulate(&[2010, 2011, 2012, 2013], &config, &mut NoNoise);
    assert_eq!(values, vec![1_000.0, 1_500.0, 1_000.0, 1_000.0]);
}
