//! Aggregate descriptive statistics over a generated table.

use serde::{Deserialize, Serialize};

use crate::model::{Column, FinancialTable};

/// Arithmetic mean, `None` for an empty slice
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// `last / first - 1`, `None` if empty or the first value is zero
#[must_use]
pub fn endpoint_growth(values: &[f64]) -> Option<f64> {
    let first = *values.first()?;
    let last = *values.last()?;
    if first == 0.0 {
        return None;
    }
    Some(last / first - 1.0)
}

/// `numerator / denominator`, `None` if either is missing or the denominator is zero
#[must_use]
pub fn ratio(numerator: Option<f64>, denominator: Option<f64>) -> Option<f64> {
    match (numerator, denominator) {
        (Some(n), Some(d)) if d != 0.0 => Some(n / d),
        _ => None,
    }
}

/// Summary statistics used by the insight report.
///
/// Growth rates and shares are fractions (0.25 = 25%). Every statistic is
/// `None` for an empty table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub platform: String,
    pub platform_type: String,
    pub specialties: Vec<String>,
    pub start_year: i32,
    pub end_year: i32,

    pub avg_revenue: Option<f64>,
    pub avg_expenses: Option<f64>,
    pub avg_net_profit: Option<f64>,
    pub avg_active_users: Option<f64>,

    pub revenue_growth: Option<f64>,
    pub user_growth: Option<f64>,

    /// Mean ad revenue over mean total revenue
    pub ad_share: Option<f64>,
    /// Mean R&D over mean total expenses
    pub research_share: Option<f64>,
    /// Mean infrastructure over mean total expenses
    pub infrastructure_share: Option<f64>,

    pub avg_profit_margin: Option<f64>,
    pub avg_acquisition_cost: Option<f64>,
    pub avg_lifetime_value: Option<f64>,
    pub ltv_cac_ratio: Option<f64>,
}

impl FinancialSummary {
    #[must_use]
    pub fn from_table(table: &FinancialTable) -> Self {
        let avg = |column: Column| mean(&table.column(column));
        let growth = |column: Column| endpoint_growth(&table.column(column));

        let avg_revenue = avg(Column::TotalRevenue);
        let avg_expenses = avg(Column::TotalExpenses);
        let avg_acquisition_cost = avg(Column::AcquisitionCost);
        let avg_lifetime_value = avg(Column::LifetimeValue);

        let platform = table.platform();
        Self {
            platform: platform.name.clone(),
            platform_type: platform.platform_type.clone(),
            specialties: platform.specialties.iter().cloned().collect(),
            start_year: table.range().start(),
            end_year: table.range().end(),

            avg_revenue,
            avg_expenses,
            avg_net_profit: avg(Column::NetProfit),
            avg_active_users: avg(Column::ActiveUsers),

            revenue_growth: growth(Column::TotalRevenue),
            user_growth: growth(Column::ActiveUsers),

            ad_share: ratio(avg(Column::AdRevenue), avg_revenue),
            research_share: ratio(avg(Column::Research), avg_expenses),
            infrastructure_share: ratio(avg(Column::Infrastructure), avg_expenses),

            avg_profit_margin: avg(Column::ProfitMargin),
            avg_acquisition_cost,
            avg_lifetime_value,
            ltv_cac_ratio: ratio(avg_lifetime_value, avg_acquisition_cost),
        }
    }
}
