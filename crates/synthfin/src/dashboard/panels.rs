//! Renderers for the eight dashboard panels

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    prelude::*,
    symbols,
    widgets::{Axis, Bar, BarChart, BarGroup, Chart, Dataset, GraphType, LegendPosition},
};
use synthfin_core::{Column, FinancialTable};

use crate::util::format::{
    format_compact_millions, format_compact_users, format_percentage,
};
use crate::util::styles::{HELP_COLOR, panel_block, series_color, value_style};

/// One labelled line on a chart
struct Series {
    label: &'static str,
    points: Vec<(f64, f64)>,
}

impl Series {
    fn of(table: &FinancialTable, column: Column) -> Self {
        Self {
            label: column.label(),
            points: table.points(column),
        }
    }
}

/// Value range covering every point plus 10% headroom, always including zero
fn y_bounds(series: &[Series]) -> [f64; 2] {
    let values = series.iter().flat_map(|s| s.points.iter().map(|(_, y)| *y));
    let (min, max) = values.fold((0.0_f64, 0.0_f64), |(lo, hi), y| (lo.min(y), hi.max(y)));
    let padding = (max - min).abs().max(1e-9) * 0.1;
    [if min < 0.0 { min - padding } else { 0.0 }, max + padding]
}

/// Year axis bounds; a single year gets half a year either side
fn x_bounds(table: &FinancialTable) -> [f64; 2] {
    let range = table.range();
    let (start, end) = (f64::from(range.start()), f64::from(range.end()));
    if start == end {
        [start - 0.5, end + 0.5]
    } else {
        [start, end]
    }
}

/// Bar height for an amount; negative amounts render as empty bars
fn bar_value(value: f64) -> u64 {
    value.max(0.0).round() as u64
}

/// Legend line listing `labels` in their series colors
fn legend<'a>(labels: impl IntoIterator<Item = &'a str>) -> Line<'a> {
    let mut spans = vec![Span::raw(" ")];
    for (i, label) in labels.into_iter().enumerate() {
        spans.push(Span::styled("■ ", Style::default().fg(series_color(i))));
        spans.push(Span::raw(label));
        spans.push(Span::raw("  "));
    }
    Line::from(spans)
}

fn render_line_chart(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    table: &FinancialTable,
    series: &[Series],
    format_y: fn(f64) -> String,
) {
    let datasets: Vec<Dataset> = series
        .iter()
        .enumerate()
        .map(|(i, s)| {
            Dataset::default()
                .name(s.label)
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(series_color(i)))
                .data(&s.points)
        })
        .collect();

    let [x_min, x_max] = x_bounds(table);
    let [y_min, y_max] = y_bounds(series);

    let x_axis = Axis::default()
        .style(Style::default().fg(HELP_COLOR))
        .bounds([x_min, x_max])
        .labels(vec![
            Span::raw(format!("{:.0}", x_min.ceil())),
            Span::raw(format!("{:.0}", x_max.floor())),
        ]);

    let y_axis = Axis::default()
        .style(Style::default().fg(HELP_COLOR))
        .bounds([y_min, y_max])
        .labels(vec![
            Span::raw(format_y(y_min)),
            Span::raw(format_y((y_min + y_max) / 2.0)),
            Span::raw(format_y(y_max)),
        ]);

    let chart = Chart::new(datasets)
        .block(panel_block(title))
        .x_axis(x_axis)
        .y_axis(y_axis)
        .legend_position(Some(LegendPosition::TopLeft))
        .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)));

    frame.render_widget(chart, area);
}

/// Grouped bars, one group per (sampled) year and one bar per column
fn render_grouped_bars(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    table: &FinancialTable,
    columns: &[Column],
) {
    let inner_width = area.width.saturating_sub(2) as usize;
    // Each group is one column per bar plus a one-column gap
    let group_width = columns.len() + 1;
    let fits = (inner_width / group_width).max(1);
    let step = table.len().div_ceil(fits).max(1);

    let mut chart = BarChart::default()
        .block(panel_block(title).title_bottom(legend(columns.iter().map(|c| c.label()))))
        .bar_width(1)
        .bar_gap(0)
        .group_gap(1);

    for record in table.records().iter().step_by(step) {
        let bars: Vec<Bar> = columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                Bar::default()
                    .value(bar_value(record.get(*column)))
                    .text_value(String::new())
                    .style(Style::default().fg(series_color(i)))
            })
            .collect();
        chart = chart.data(
            BarGroup::default()
                .label(Line::from(format!("{:02}", record.year.rem_euclid(100))))
                .bars(&bars),
        );
    }

    frame.render_widget(chart, area);
}

/// Width for `count` single bars sharing `area`, between 1 and 7 columns
fn single_bar_width(area: Rect, count: usize) -> u16 {
    let inner_width = area.width.saturating_sub(2) as usize;
    let per_bar = inner_width / count.max(1);
    per_bar.saturating_sub(1).clamp(1, 7) as u16
}

pub fn revenue_vs_expenses(frame: &mut Frame, area: Rect, table: &FinancialTable) {
    let series = [
        Series::of(table, Column::TotalRevenue),
        Series::of(table, Column::TotalExpenses),
    ];
    render_line_chart(
        frame,
        area,
        "Revenue vs expenses (M$)",
        table,
        &series,
        format_compact_millions,
    );
}

pub fn revenue_structure(frame: &mut Frame, area: Rect, table: &FinancialTable) {
    render_grouped_bars(
        frame,
        area,
        "Revenue structure (M$)",
        table,
        &Column::REVENUE_BREAKDOWN,
    );
}

pub fn expense_structure(frame: &mut Frame, area: Rect, table: &FinancialTable) {
    render_grouped_bars(
        frame,
        area,
        "Expense structure (M$)",
        table,
        &Column::EXPENSE_BREAKDOWN,
    );
}

pub fn strategic_investments(frame: &mut Frame, area: Rect, table: &FinancialTable) {
    let series: Vec<Series> = Column::INVESTMENTS
        .iter()
        .map(|column| Series::of(table, *column))
        .collect();
    render_line_chart(
        frame,
        area,
        "Strategic investments (M$)",
        table,
        &series,
        format_compact_millions,
    );
}

pub fn users(frame: &mut Frame, area: Rect, table: &FinancialTable) {
    let series = [
        Series::of(table, Column::ActiveUsers),
        Series::of(table, Column::DailyUsers),
    ];
    render_line_chart(
        frame,
        area,
        "Users and engagement",
        table,
        &series,
        format_compact_users,
    );
}

pub fn performance(frame: &mut Frame, area: Rect, table: &FinancialTable) {
    let series = [
        Series::of(table, Column::AcquisitionCost),
        Series::of(table, Column::LifetimeValue),
    ];
    render_line_chart(
        frame,
        area,
        "Performance indicators ($ per user)",
        table,
        &series,
        |v| format!("{v:.0}"),
    );
}

/// Net profit bars labelled with the year's profit margin
pub fn profitability(frame: &mut Frame, area: Rect, table: &FinancialTable) {
    let bar_width = single_bar_width(area, table.len());
    let bars: Vec<Bar> = table
        .records()
        .iter()
        .map(|record| {
            let style = value_style(record.net_profit);
            Bar::default()
                .value(bar_value(record.net_profit))
                .label(Line::from(format!("{:02}", record.year.rem_euclid(100))))
                .text_value(format_percentage(record.profit_margin))
                .style(style)
                .value_style(style.reversed())
        })
        .collect();

    let margins = table.column(Column::ProfitMargin);
    let subtitle = match (margins.first(), margins.last()) {
        (Some(first), Some(last)) => format!(
            " margin {} to {} ",
            format_percentage(*first),
            format_percentage(*last)
        ),
        _ => String::new(),
    };

    let chart = BarChart::default()
        .block(panel_block("Profitability: net profit (M$)").title_bottom(Line::from(subtitle).fg(HELP_COLOR)))
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1);

    frame.render_widget(chart, area);
}

/// Period totals per investment sector
pub fn sector_totals(frame: &mut Frame, area: Rect, table: &FinancialTable) {
    let bar_width = single_bar_width(area, Column::INVESTMENTS.len()).max(3);
    let bars: Vec<Bar> = Column::INVESTMENTS
        .iter()
        .enumerate()
        .map(|(i, column)| {
            let total: f64 = table.column(*column).iter().sum();
            let style = Style::default().fg(series_color(i));
            Bar::default()
                .value(bar_value(total))
                .label(Line::from(short_label(*column)))
                .text_value(format_compact_millions(total))
                .style(style)
                .value_style(style.reversed())
        })
        .collect();

    let chart = BarChart::default()
        .block(panel_block("Investment totals by sector (M$)"))
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1);

    frame.render_widget(chart, area);
}

fn short_label(column: Column) -> &'static str {
    match column {
        Column::AiInvestment => "AI",
        Column::VrInvestment => "VR",
        Column::SecurityInvestment => "Security",
        Column::GrowthInvestment => "Growth",
        Column::ContentInvestment => "Content",
        other => other.label(),
    }
}
