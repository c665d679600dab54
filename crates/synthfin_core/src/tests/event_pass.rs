//! Tests for the historical event pass
//!
//! These tests verify that:
//! - Matching years are multiplied exactly as the rule table says
//! - Overlapping rules compound in listed order
//! - Years outside every rule are untouched
//! - The pass is not idempotent

use super::assert_close;
use crate::events::{Adjustment, YearPredicate, apply_adjustments, apply_events, historical_adjustments};
use crate::generator::SeriesGenerator;
use crate::model::{Column, YearRange};
use crate::noise::{GaussianNoise, NoNoise};

#[test]
fn test_2018_row_matches_raw_times_multipliers() {
    let generator = SeriesGenerator::for_platform("Facebook", YearRange::DEFAULT);
    let raw = generator.generate_raw(&mut GaussianNoise::seeded(7));
    let adjusted = generator.generate(&mut GaussianNoise::seeded(7));

    let before = raw.record(2018).unwrap();
    let after = adjusted.record(2018).unwrap();

    assert_close(after.active_users, before.active_users * 0.97);
    assert_close(after.security_investment, before.security_investment * 1.8);
    // Columns without a 2018 rule are untouched
    assert_eq!(after.total_revenue, before.total_revenue);
    assert_eq!(after.vr_investment, before.vr_investment);
}

#[test]
fn test_2012_total_revenue_compounds() {
    let generator =
        SeriesGenerator::for_platform("Instagram", YearRange::new(2012, 2012).unwrap());
    let raw = generator.generate_raw(&mut NoNoise);
    let adjusted = generator.generate(&mut NoNoise);

    assert_close(
        adjusted.records()[0].total_revenue,
        raw.records()[0].total_revenue * 1.20 * 1.25,
    );
    assert_close(
        adjusted.records()[0].growth_investment,
        raw.records()[0].growth_investment * 1.50,
    );
}

#[test]
fn test_years_outside_every_rule_are_untouched() {
    let range = YearRange::new(2000, 2009).unwrap();
    let generator = SeriesGenerator::for_platform("WhatsApp", range);

    let raw = generator.generate_raw(&mut GaussianNoise::seeded(3));
    let adjusted = generator.generate(&mut GaussianNoise::seeded(3));
    assert_eq!(raw, adjusted);

    // Years between events: 2014, 2016, 2017, 2019, 2024, 2025
    let generator = SeriesGenerator::for_platform("WhatsApp", YearRange::DEFAULT);
    let raw = generator.generate_raw(&mut NoNoise);
    let adjusted = generator.generate(&mut NoNoise);
    for year in [2014, 2016, 2017, 2019, 2024, 2025] {
        assert_eq!(raw.record(year), adjusted.record(year), "{year}");
    }
}

#[test]
fn test_rule_count_and_order() {
    let rules = historical_adjustments();
    assert_eq!(rules.len(), 15);
    assert_eq!(
        rules[0],
        Adjustment {
            when: YearPredicate::Range(2010, 2012),
            column: Column::TotalRevenue,
            multiplier: 1.20,
        }
    );
    assert_eq!(rules[2].when, YearPredicate::Exact(2012));
    assert_eq!(rules[14].column, Column::SecurityInvestment);
}

#[test]
fn test_applying_twice_compounds() {
    let generator = SeriesGenerator::for_platform("Facebook", YearRange::DEFAULT);
    let once = generator.generate(&mut NoNoise);
    let mut twice = once.clone();
    apply_events(twice.records_mut());

    let a = once.record(2020).unwrap();
    let b = twice.record(2020).unwrap();
    assert_close(b.daily_users, a.daily_users * 1.15);
    assert_close(b.ad_revenue, a.ad_revenue * 0.92);
    assert_ne!(once, twice);
}

#[test]
fn test_custom_rules_and_empty_input() {
    let generator = SeriesGenerator::for_platform("Facebook", YearRange::new(2030, 2031).unwrap());
    let raw = generator.generate_raw(&mut NoNoise);
    let mut table = raw.clone();

    let rules = [
        Adjustment {
            when: YearPredicate::Exact(2031),
            column: Column::Marketing,
            multiplier: 2.0,
        },
        Adjustment {
            when: YearPredicate::Range(2030, 2031),
            column: Column::Marketing,
            multiplier: 0.5,
        },
    ];
    apply_adjustments(table.records_mut(), &rules);

    assert_close(table.records()[0].marketing, raw.records()[0].marketing * 0.5);
    assert_close(table.records()[1].marketing, raw.records()[1].marketing);

    apply_adjustments(&mut [], &rules);
    apply_adjustments(table.records_mut(), &[]);
    assert_close(table.records()[1].marketing, raw.records()[1].marketing);
}
