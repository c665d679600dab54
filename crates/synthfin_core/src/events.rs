//! Historical event adjustments
//!
//! A post-simulation pass that multiplies selected columns in selected years
//! to encode known narrative effects. The pass is plain arithmetic over a
//! populated table and has no failure modes. It is not idempotent: running it
//! twice compounds every multiplier.

use crate::model::{Column, YearRecord};

/// Which years a rule fires in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearPredicate {
    Exact(i32),
    /// Inclusive on both ends
    Range(i32, i32),
}

impl YearPredicate {
    #[must_use]
    pub const fn matches(&self, year: i32) -> bool {
        match *self {
            YearPredicate::Exact(y) => year == y,
            YearPredicate::Range(start, end) => year >= start && year <= end,
        }
    }
}

/// One `(years, column, multiplier)` rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjustment {
    pub when: YearPredicate,
    pub column: Column,
    pub multiplier: f64,
}

/// A named group of adjustments sharing one trigger
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoricalEvent {
    pub label: &'static str,
    pub when: YearPredicate,
    pub effects: &'static [(Column, f64)],
}

impl HistoricalEvent {
    pub fn adjustments(&self) -> impl Iterator<Item = Adjustment> + '_ {
        self.effects.iter().map(|&(column, multiplier)| Adjustment {
            when: self.when,
            column,
            multiplier,
        })
    }
}

pub static HISTORICAL_EVENTS: [HistoricalEvent; 8] = [
    HistoricalEvent {
        label: "Early growth",
        when: YearPredicate::Range(2010, 2012),
        effects: &[(Column::TotalRevenue, 1.20), (Column::ActiveUsers, 1.15)],
    },
    HistoricalEvent {
        label: "IPO",
        when: YearPredicate::Exact(2012),
        effects: &[(Column::TotalRevenue, 1.25), (Column::GrowthInvestment, 1.50)],
    },
    HistoricalEvent {
        label: "Instagram acquisition",
        when: YearPredicate::Exact(2013),
        effects: &[(Column::ActiveUsers, 1.10)],
    },
    HistoricalEvent {
        label: "WhatsApp acquisition",
        when: YearPredicate::Exact(2015),
        effects: &[(Column::ActiveUsers, 1.15)],
    },
    HistoricalEvent {
        label: "Cambridge Analytica scandal",
        when: YearPredicate::Exact(2018),
        effects: &[
            (Column::ActiveUsers, 0.97),
            (Column::SecurityInvestment, 1.80),
        ],
    },
    HistoricalEvent {
        label: "COVID-19 pandemic",
        when: YearPredicate::Exact(2020),
        effects: &[
            (Column::ActiveUsers, 1.12),
            (Column::DailyUsers, 1.15),
            (Column::AdRevenue, 0.92),
        ],
    },
    HistoricalEvent {
        label: "Rebrand to Meta",
        when: YearPredicate::Exact(2021),
        effects: &[(Column::VrInvestment, 1.50), (Column::AiInvestment, 1.30)],
    },
    HistoricalEvent {
        label: "Regulatory pressure",
        when: YearPredicate::Range(2022, 2023),
        effects: &[
            (Column::TotalExpenses, 1.10),
            (Column::SecurityInvestment, 1.20),
        ],
    },
];

/// The historical event table flattened into rules, in listed order
#[must_use]
pub fn historical_adjustments() -> Vec<Adjustment> {
    HISTORICAL_EVENTS
        .iter()
        .flat_map(|event| event.adjustments())
        .collect()
}

/// Apply `rules` to every record whose year they match, in listed order.
///
/// Rules touching the same column in the same year compound.
pub fn apply_adjustments(records: &mut [YearRecord], rules: &[Adjustment]) {
    for record in records.iter_mut() {
        let year = record.year;
        for rule in rules.iter().filter(|rule| rule.when.matches(year)) {
            record.scale(rule.column, rule.multiplier);
        }
    }
}

/// Apply the historical event table in place
pub fn apply_events(records: &mut [YearRecord]) {
    apply_adjustments(records, &historical_adjustments());
}

/// Events that fire at least once within `[start, end]`
pub fn events_between(start: i32, end: i32) -> impl Iterator<Item = &'static HistoricalEvent> {
    HISTORICAL_EVENTS
        .iter()
        .filter(move |event| (start..=end).any(|year| event.when.matches(year)))
}
