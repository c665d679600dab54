//! One row of the generated table

use std::fmt;

use serde::{Deserialize, Serialize};

/// Header of the year column in exported tables
pub const YEAR_HEADER: &str = "Annee";

/// The metric columns of a [`YearRecord`], in export order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Column {
    ActiveUsers,
    DailyUsers,
    TotalRevenue,
    AdRevenue,
    OtherRevenue,
    TotalExpenses,
    Infrastructure,
    Research,
    Marketing,
    Staff,
    NetProfit,
    ProfitMargin,
    AcquisitionCost,
    LifetimeValue,
    AiInvestment,
    VrInvestment,
    SecurityInvestment,
    GrowthInvestment,
    ContentInvestment,
}

impl Column {
    pub const ALL: [Column; 19] = [
        Column::ActiveUsers,
        Column::DailyUsers,
        Column::TotalRevenue,
        Column::AdRevenue,
        Column::OtherRevenue,
        Column::TotalExpenses,
        Column::Infrastructure,
        Column::Research,
        Column::Marketing,
        Column::Staff,
        Column::NetProfit,
        Column::ProfitMargin,
        Column::AcquisitionCost,
        Column::LifetimeValue,
        Column::AiInvestment,
        Column::VrInvestment,
        Column::SecurityInvestment,
        Column::GrowthInvestment,
        Column::ContentInvestment,
    ];

    /// Expense breakdown columns (components of total expenses)
    pub const EXPENSE_BREAKDOWN: [Column; 4] = [
        Column::Infrastructure,
        Column::Research,
        Column::Marketing,
        Column::Staff,
    ];

    /// Revenue breakdown columns (components of total revenue)
    pub const REVENUE_BREAKDOWN: [Column; 2] = [Column::AdRevenue, Column::OtherRevenue];

    pub const INVESTMENTS: [Column; 5] = [
        Column::AiInvestment,
        Column::VrInvestment,
        Column::SecurityInvestment,
        Column::GrowthInvestment,
        Column::ContentInvestment,
    ];

    /// Header name used in exported tables
    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            Column::ActiveUsers => "Utilisateurs_Actifs",
            Column::DailyUsers => "Utilisateurs_Quotidiens",
            Column::TotalRevenue => "Revenus_Totaux",
            Column::AdRevenue => "Revenus_Publicite",
            Column::OtherRevenue => "Revenus_Autres",
            Column::TotalExpenses => "Depenses_Totales",
            Column::Infrastructure => "Infrastructure",
            Column::Research => "R_D",
            Column::Marketing => "Marketing",
            Column::Staff => "Personnel",
            Column::NetProfit => "Profit_Net",
            Column::ProfitMargin => "Marge_Profit",
            Column::AcquisitionCost => "Cout_Acquisition_Utilisateur",
            Column::LifetimeValue => "Vie_Utilisateur",
            Column::AiInvestment => "Investissement_IA",
            Column::VrInvestment => "Investissement_VR",
            Column::SecurityInvestment => "Investissement_Securite",
            Column::GrowthInvestment => "Investissement_Croissance",
            Column::ContentInvestment => "Investissement_Contenu",
        }
    }

    /// Human-readable label for charts and reports
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Column::ActiveUsers => "Active Users",
            Column::DailyUsers => "Daily Users",
            Column::TotalRevenue => "Total Revenue",
            Column::AdRevenue => "Ad Revenue",
            Column::OtherRevenue => "Other Revenue",
            Column::TotalExpenses => "Total Expenses",
            Column::Infrastructure => "Infrastructure",
            Column::Research => "R&D",
            Column::Marketing => "Marketing",
            Column::Staff => "Staff",
            Column::NetProfit => "Net Profit",
            Column::ProfitMargin => "Profit Margin",
            Column::AcquisitionCost => "Acquisition Cost (CAC)",
            Column::LifetimeValue => "Lifetime Value (LTV)",
            Column::AiInvestment => "AI",
            Column::VrInvestment => "VR",
            Column::SecurityInvestment => "Security",
            Column::GrowthInvestment => "Growth",
            Column::ContentInvestment => "Content",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// All metrics for a single calendar year.
///
/// Currency columns are in million units, user columns are head counts,
/// `profit_margin` is a fraction, `acquisition_cost` and `lifetime_value`
/// are per-user currency amounts.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct YearRecord {
    #[serde(rename = "Annee")]
    pub year: i32,
    #[serde(rename = "Utilisateurs_Actifs")]
    pub active_users: f64,
    #[serde(rename = "Utilisateurs_Quotidiens")]
    pub daily_users: f64,
    #[serde(rename = "Revenus_Totaux")]
    pub total_revenue: f64,
    #[serde(rename = "Revenus_Publicite")]
    pub ad_revenue: f64,
    #[serde(rename = "Revenus_Autres")]
    pub other_revenue: f64,
    #[serde(rename = "Depenses_Totales")]
    pub total_expenses: f64,
    #[serde(rename = "Infrastructure")]
    pub infrastructure: f64,
    #[serde(rename = "R_D")]
    pub research: f64,
    #[serde(rename = "Marketing")]
    pub marketing: f64,
    #[serde(rename = "Personnel")]
    pub staff: f64,
    #[serde(rename = "Profit_Net")]
    pub net_profit: f64,
    #[serde(rename = "Marge_Profit")]
    pub profit_margin: f64,
    #[serde(rename = "Cout_Acquisition_Utilisateur")]
    pub acquisition_cost: f64,
    #[serde(rename = "Vie_Utilisateur")]
    pub lifetime_value: f64,
    #[serde(rename = "Investissement_IA")]
    pub ai_investment: f64,
    #[serde(rename = "Investissement_VR")]
    pub vr_investment: f64,
    #[serde(rename = "Investissement_Securite")]
    pub security_investment: f64,
    #[serde(rename = "Investissement_Croissance")]
    pub growth_investment: f64,
    #[serde(rename = "Investissement_Contenu")]
    pub content_investment: f64,
}

impl YearRecord {
    /// A record with every metric at zero
    #[must_use]
    pub fn new(year: i32) -> Self {
        Self {
            year,
            ..Default::default()
        }
    }

    fn slot(&mut self, column: Column) -> &mut f64 {
        match column {
            Column::ActiveUsers => &mut self.active_users,
            Column::DailyUsers => &mut self.daily_users,
            Column::TotalRevenue => &mut self.total_revenue,
            Column::AdRevenue => &mut self.ad_revenue,
            Column::OtherRevenue => &mut self.other_revenue,
            Column::TotalExpenses => &mut self.total_expenses,
            Column::Infrastructure => &mut self.infrastructure,
            Column::Research => &mut self.research,
            Column::Marketing => &mut self.marketing,
            Column::Staff => &mut self.staff,
            Column::NetProfit => &mut self.net_profit,
            Column::ProfitMargin => &mut self.profit_margin,
            Column::AcquisitionCost => &mut self.acquisition_cost,
            Column::LifetimeValue => &mut self.lifetime_value,
            Column::AiInvestment => &mut self.ai_investment,
            Column::VrInvestment => &mut self.vr_investment,
            Column::SecurityInvestment => &mut self.security_investment,
            Column::GrowthInvestment => &mut self.growth_investment,
            Column::ContentInvestment => &mut self.content_investment,
        }
    }

    #[must_use]
    pub fn get(&self, column: Column) -> f64 {
        match column {
            Column::ActiveUsers => self.active_users,
            Column::DailyUsers => self.daily_users,
            Column::TotalRevenue => self.total_revenue,
            Column::AdRevenue => self.ad_revenue,
            Column::OtherRevenue => self.other_revenue,
            Column::TotalExpenses => self.total_expenses,
            Column::Infrastructure => self.infrastructure,
            Column::Research => self.research,
            Column::Marketing => self.marketing,
            Column::Staff => self.staff,
            Column::NetProfit => self.net_profit,
            Column::ProfitMargin => self.profit_margin,
            Column::AcquisitionCost => self.acquisition_cost,
            Column::LifetimeValue => self.lifetime_value,
            Column::AiInvestment => self.ai_investment,
            Column::VrInvestment => self.vr_investment,
            Column::SecurityInvestment => self.security_investment,
            Column::GrowthInvestment => self.growth_investment,
            Column::ContentInvestment => self.content_investment,
        }
    }

    pub fn set(&mut self, column: Column, value: f64) {
        *self.slot(column) = value;
    }

    /// Multiply one column in place
    pub fn scale(&mut self, column: Column, factor: f64) {
        *self.slot(column) *= factor;
    }

    /// Metric values in [`Column::ALL`] order
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        Column::ALL.into_iter().map(|column| self.get(column))
    }
}
