//! The fixed table of metric simulators, one per column

use crate::model::Column;
use crate::simulator::{BaseAmount, CategoryBoost, MetricSpec, PlatformRate, Trajectory};

/// Year from which margin-style metrics start improving
pub const IMPROVEMENT_THRESHOLD: i32 = 2015;

const fn linear(column: Column, fraction: f64, rate: f64, noise_std_dev: f64) -> MetricSpec {
    MetricSpec {
        column,
        base: BaseAmount::Revenue(fraction),
        trajectory: Trajectory::Linear { rate },
        noise_std_dev,
    }
}

const fn post_threshold(column: Column, base: BaseAmount, rate: f64, noise_std_dev: f64) -> MetricSpec {
    MetricSpec {
        column,
        base,
        trajectory: Trajectory::PostThreshold {
            threshold: IMPROVEMENT_THRESHOLD,
            rate,
        },
        noise_std_dev,
    }
}

/// Simulators in generation order. Each consumes one noise draw per year,
/// so the order determines which draws each column receives.
pub static METRIC_SPECS: [MetricSpec; 19] = [
    // Users
    MetricSpec {
        column: Column::ActiveUsers,
        base: BaseAmount::Users(1.0),
        trajectory: Trajectory::YearConditional {
            source: PlatformRate::Users,
        },
        noise_std_dev: 0.0,
    },
    // 65% of active users are daily users
    MetricSpec {
        column: Column::DailyUsers,
        base: BaseAmount::Users(0.65),
        trajectory: Trajectory::Linear { rate: 0.07 },
        noise_std_dev: 0.0,
    },
    // Revenue
    MetricSpec {
        column: Column::TotalRevenue,
        base: BaseAmount::Revenue(1.0),
        trajectory: Trajectory::YearConditional {
            source: PlatformRate::Revenue,
        },
        noise_std_dev: 0.10,
    },
    linear(Column::AdRevenue, 0.98, 0.22, 0.12),
    linear(Column::OtherRevenue, 0.02, 0.30, 0.15),
    // Expenses
    linear(Column::TotalExpenses, 0.65, 0.20, 0.08),
    linear(Column::Infrastructure, 0.20, 0.15, 0.07),
    linear(Column::Research, 0.15, 0.18, 0.09),
    linear(Column::Marketing, 0.10, 0.12, 0.11),
    linear(Column::Staff, 0.20, 0.10, 0.06),
    // Financial indicators
    post_threshold(Column::NetProfit, BaseAmount::Revenue(0.35), 0.02, 0.12),
    post_threshold(Column::ProfitMargin, BaseAmount::Fixed(0.35), 0.01, 0.05),
    post_threshold(Column::AcquisitionCost, BaseAmount::Fixed(5.0), 0.03, 0.08),
    post_threshold(Column::LifetimeValue, BaseAmount::Fixed(50.0), 0.05, 0.07),
    // Investments
    MetricSpec {
        column: Column::AiInvestment,
        base: BaseAmount::Revenue(0.08),
        trajectory: Trajectory::YearSpike {
            rate: 0.25,
            spike_years: &[2014, 2018, 2021, 2024],
            spike: 1.8,
            category: Some(CategoryBoost {
                tag: "ai",
                present: 1.5,
                absent: 1.0,
            }),
        },
        noise_std_dev: 0.15,
    },
    MetricSpec {
        column: Column::VrInvestment,
        base: BaseAmount::Revenue(0.05),
        trajectory: Trajectory::YearSpike {
            rate: 0.20,
            spike_years: &[2016, 2020, 2023],
            spike: 2.0,
            category: Some(CategoryBoost {
                tag: "vr",
                present: 2.0,
                absent: 0.8,
            }),
        },
        noise_std_dev: 0.18,
    },
    MetricSpec {
        column: Column::SecurityInvestment,
        base: BaseAmount::Revenue(0.04),
        trajectory: Trajectory::YearSpike {
            rate: 0.15,
            spike_years: &[2018, 2019, 2021, 2023],
            spike: 1.7,
            category: None,
        },
        noise_std_dev: 0.12,
    },
    MetricSpec {
        column: Column::GrowthInvestment,
        base: BaseAmount::Revenue(0.07),
        trajectory: Trajectory::YearSpike {
            rate: 0.18,
            spike_years: &[2012, 2014, 2017, 2020, 2023],
            spike: 1.6,
            category: None,
        },
        noise_std_dev: 0.14,
    },
    MetricSpec {
        column: Column::ContentInvestment,
        base: BaseAmount::Revenue(0.06),
        trajectory: Trajectory::YearSpike {
            rate: 0.16,
            spike_years: &[2015, 2018, 2021, 2024],
            spike: 1.5,
            category: Some(CategoryBoost {
                tag: "content",
                present: 1.4,
                absent: 1.0,
            }),
        },
        noise_std_dev: 0.13,
    },
];

/// The simulator for a column
#[must_use]
pub fn spec_for(column: Column) -> &'static MetricSpec {
    // METRIC_SPECS is laid out in Column::ALL order
    &METRIC_SPECS[column as usize]
}
