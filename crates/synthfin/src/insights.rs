//! Plain-text insight report printed after generation

use std::fmt::Write;

use synthfin_core::events::{YearPredicate, events_between};
use synthfin_core::{FinancialSummary, FinancialTable};

use crate::util::format::{format_millions, format_optional, format_percentage, format_users};

/// Recommendations shown for every platform, after the platform-specific ones
pub const GENERAL_RECOMMENDATIONS: [&str; 4] = [
    "Invest in generative AI to improve the user experience",
    "Develop augmented and virtual reality for the metaverse",
    "Strengthen data protection and privacy",
    "Explore new emerging markets",
];

const RULE: &str = "============================================================";

fn when_label(when: YearPredicate) -> String {
    match when {
        YearPredicate::Exact(year) => year.to_string(),
        YearPredicate::Range(start, end) => format!("{start}-{end}"),
    }
}

fn format_dollars(value: f64) -> String {
    format!("{value:.2} $")
}

fn format_ratio(value: f64) -> String {
    format!("{value:.2}")
}

/// Render the seven-section report for a generated table.
pub fn render_insights(table: &FinancialTable, summary: &FinancialSummary) -> String {
    let mut out = String::new();
    // Writing into a String can't fail
    let _ = write_insights(&mut out, table, summary);
    out
}

fn write_insights(
    out: &mut String,
    table: &FinancialTable,
    summary: &FinancialSummary,
) -> std::fmt::Result {
    let period = format!("{}-{}", summary.start_year, summary.end_year);

    writeln!(out, "{RULE}")?;
    writeln!(out, "FINANCIAL INSIGHTS - {}", summary.platform)?;
    writeln!(out, "{RULE}")?;

    writeln!(out, "\n1. GENERAL STATISTICS")?;
    writeln!(
        out,
        "Average annual revenue: {}",
        format_optional(summary.avg_revenue, format_millions)
    )?;
    writeln!(
        out,
        "Average annual expenses: {}",
        format_optional(summary.avg_expenses, format_millions)
    )?;
    writeln!(
        out,
        "Average net profit: {}",
        format_optional(summary.avg_net_profit, format_millions)
    )?;
    writeln!(
        out,
        "Average active users: {}",
        format_optional(summary.avg_active_users, format_users)
    )?;

    writeln!(out, "\n2. GROWTH RATES")?;
    writeln!(
        out,
        "Revenue growth ({period}): {}",
        format_optional(summary.revenue_growth, format_percentage)
    )?;
    writeln!(
        out,
        "User growth ({period}): {}",
        format_optional(summary.user_growth, format_percentage)
    )?;

    writeln!(out, "\n3. FINANCIAL STRUCTURE")?;
    writeln!(
        out,
        "Advertising share of revenue: {}",
        format_optional(summary.ad_share, format_percentage)
    )?;
    writeln!(
        out,
        "R&D share of expenses: {}",
        format_optional(summary.research_share, format_percentage)
    )?;
    writeln!(
        out,
        "Infrastructure share of expenses: {}",
        format_optional(summary.infrastructure_share, format_percentage)
    )?;

    writeln!(out, "\n4. PERFORMANCE INDICATORS")?;
    writeln!(
        out,
        "Average profit margin: {}",
        format_optional(summary.avg_profit_margin, format_percentage)
    )?;
    writeln!(
        out,
        "Average user acquisition cost: {}",
        format_optional(summary.avg_acquisition_cost, format_dollars)
    )?;
    writeln!(
        out,
        "Average user lifetime value: {}",
        format_optional(summary.avg_lifetime_value, format_dollars)
    )?;
    writeln!(
        out,
        "LTV/CAC ratio: {}",
        format_optional(summary.ltv_cac_ratio, format_ratio)
    )?;

    writeln!(out, "\n5. {} PROFILE", summary.platform.to_uppercase())?;
    writeln!(out, "Platform type: {}", summary.platform_type)?;
    writeln!(out, "Specialties: {}", summary.specialties.join(", "))?;

    writeln!(out, "\n6. NOTABLE EVENTS")?;
    let mut any_event = false;
    for event in events_between(summary.start_year, summary.end_year) {
        writeln!(out, "* {}: {}", when_label(event.when), event.label)?;
        any_event = true;
    }
    if !any_event {
        writeln!(out, "* None in {period}")?;
    }

    writeln!(out, "\n7. STRATEGIC RECOMMENDATIONS")?;
    for note in table
        .platform()
        .recommendations
        .iter()
        .map(String::as_str)
        .chain(GENERAL_RECOMMENDATIONS)
    {
        writeln!(out, "* {note}")?;
    }

    Ok(())
}

/// First `rows` rows of the key columns, for a quick look at the data
pub fn render_preview(table: &FinancialTable, rows: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>6} {:>18} {:>16} {:>16} {:>16}",
        "Year", "Active users", "Revenue", "Expenses", "Net profit"
    );
    for record in table.records().iter().take(rows) {
        let _ = writeln!(
            out,
            "{:>6} {:>18.0} {:>16.2} {:>16.2} {:>16.2}",
            record.year,
            record.active_users,
            record.total_revenue,
            record.total_expenses,
            record.net_profit
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use synthfin_core::{NoNoise, SeriesGenerator, YearRange};

    fn report(name: &str, range: YearRange) -> String {
        let table = SeriesGenerator::for_platform(name, range).generate(&mut NoNoise);
        let summary = FinancialSummary::from_table(&table);
        render_insights(&table, &summary)
    }

    #[test]
    fn test_all_sections_present() {
        let text = report("Facebook", YearRange::DEFAULT);
        for heading in [
            "1. GENERAL STATISTICS",
            "2. GROWTH RATES",
            "3. FINANCIAL STRUCTURE",
            "4. PERFORMANCE INDICATORS",
            "5. FACEBOOK PROFILE",
            "6. NOTABLE EVENTS",
            "7. STRATEGIC RECOMMENDATIONS",
        ] {
            assert!(text.contains(heading), "missing {heading}");
        }
        assert!(text.contains("Revenue growth (2010-2025): "));
        assert!(text.contains("Platform type: social_media"));
    }

    #[test]
    fn test_events_follow_the_range() {
        let text = report("Instagram", YearRange::new(2017, 2019).unwrap());
        assert!(text.contains("* 2018: Cambridge Analytica scandal"));
        assert!(!text.contains("IPO"));

        let text = report("Instagram", YearRange::DEFAULT);
        assert!(text.contains("* 2010-2012: Early growth"));
        assert!(text.contains("* 2022-2023: Regulatory pressure"));

        let text = report("Instagram", YearRange::new(1990, 1995).unwrap());
        assert!(text.contains("* None in 1990-1995"));
    }

    #[test]
    fn test_recommendations_platform_first() {
        let text = report("WhatsApp", YearRange::DEFAULT);
        let specific = text
            .find("Accelerate monetization through the business API")
            .unwrap();
        let general = text.find(GENERAL_RECOMMENDATIONS[0]).unwrap();
        assert!(specific < general);

        // The default entry only gets the general list
        let text = report("Unknown", YearRange::DEFAULT);
        let section = text.split("7. STRATEGIC RECOMMENDATIONS").nth(1).unwrap();
        assert_eq!(section.lines().filter(|l| l.starts_with("* ")).count(), 4);
    }

    #[test]
    fn test_preview_rows() {
        let table = SeriesGenerator::for_platform("Facebook", YearRange::DEFAULT).generate_seeded(3);
        let preview = render_preview(&table, 5);
        assert_eq!(preview.lines().count(), 6);
        assert!(preview.lines().nth(1).unwrap().trim_start().starts_with("2010"));
    }
}
