//! The generated row-per-year table

use std::io::{self, Write};

use super::platform::PlatformConfig;
use super::record::{Column, YEAR_HEADER, YearRecord};
use super::years::YearRange;

/// Ordered yearly records plus the configuration that produced them.
///
/// Records are ascending by year with no gaps, one per year of `range`.
#[derive(Debug, Clone, PartialEq)]
pub struct FinancialTable {
    platform: PlatformConfig,
    range: YearRange,
    records: Vec<YearRecord>,
}

impl FinancialTable {
    pub(crate) fn new(platform: PlatformConfig, range: YearRange, records: Vec<YearRecord>) -> Self {
        debug_assert_eq!(records.len(), range.len());
        Self {
            platform,
            range,
            records,
        }
    }

    #[must_use]
    pub fn platform(&self) -> &PlatformConfig {
        &self.platform
    }

    #[must_use]
    pub fn range(&self) -> YearRange {
        self.range
    }

    #[must_use]
    pub fn records(&self) -> &[YearRecord] {
        &self.records
    }

    /// Mutable access for adjustment passes
    pub fn records_mut(&mut self) -> &mut [YearRecord] {
        &mut self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<&YearRecord> {
        self.records.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&YearRecord> {
        self.records.last()
    }

    /// Record for a given calendar year
    #[must_use]
    pub fn record(&self, year: i32) -> Option<&YearRecord> {
        if !self.range.contains(year) {
            return None;
        }
        self.records.get((year - self.range.start()) as usize)
    }

    #[must_use]
    pub fn years(&self) -> Vec<i32> {
        self.records.iter().map(|r| r.year).collect()
    }

    /// All values of one column, in year order
    #[must_use]
    pub fn column(&self, column: Column) -> Vec<f64> {
        self.records.iter().map(|r| r.get(column)).collect()
    }

    /// `(year, value)` points for one column, for charting
    #[must_use]
    pub fn points(&self, column: Column) -> Vec<(f64, f64)> {
        self.records
            .iter()
            .map(|r| (f64::from(r.year), r.get(column)))
            .collect()
    }

    /// Write the table as comma-separated text: a header row then one row per year.
    pub fn write_csv<W: Write>(&self, mut writer: W) -> io::Result<()> {
        write!(writer, "{YEAR_HEADER}")?;
        for column in Column::ALL {
            write!(writer, ",{}", column.header())?;
        }
        writeln!(writer)?;

        for record in &self.records {
            write!(writer, "{}", record.year)?;
            for value in record.values() {
                write!(writer, ",{value}")?;
            }
            writeln!(writer)?;
        }
        writer.flush()
    }

    #[must_use]
    pub fn to_csv_string(&self) -> String {
        let mut buffer = Vec::new();
        // Writing into a Vec can't fail
        let _ = self.write_csv(&mut buffer);
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

/// File name used when exporting a table for `platform` over `range`
#[must_use]
pub fn csv_file_name(platform: &str, range: YearRange) -> String {
    let stem: String = platform
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' { c } else { '_' })
        .collect();
    format!(
        "{stem}_financial_data_{}_{}.csv",
        range.start(),
        range.end()
    )
}
