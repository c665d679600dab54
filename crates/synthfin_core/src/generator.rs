//! Table generation: simulate every column, then apply historical events

use crate::config::resolve;
use crate::events::apply_events;
use crate::metrics::METRIC_SPECS;
use crate::model::{FinancialTable, PlatformConfig, YearRange, YearRecord};
use crate::noise::{GaussianNoise, NoiseSource};

/// Generates the yearly table for one platform over one year range
#[derive(Debug, Clone)]
pub struct SeriesGenerator {
    config: PlatformConfig,
    range: YearRange,
}

impl SeriesGenerator {
    pub fn new(config: PlatformConfig, range: YearRange) -> Self {
        Self { config, range }
    }

    /// Resolve `name` against the built-in catalog (unknown names use the default entry)
    pub fn for_platform(name: &str, range: YearRange) -> Self {
        Self::new(resolve(name), range)
    }

    #[must_use]
    pub fn config(&self) -> &PlatformConfig {
        &self.config
    }

    #[must_use]
    pub fn range(&self) -> YearRange {
        self.range
    }

    /// Simulated table before the historical event pass
    pub fn generate_raw<N: NoiseSource + ?Sized>(&self, noise: &mut N) -> FinancialTable {
        let years = self.range.to_vec();
        let mut records: Vec<YearRecord> = years.iter().map(|&y| YearRecord::new(y)).collect();

        for spec in &METRIC_SPECS {
            let values = spec.simulate(&years, &self.config, noise);
            for (record, value) in records.iter_mut().zip(values) {
                record.set(spec.column, value);
            }
        }

        FinancialTable::new(self.config.clone(), self.range, records)
    }

    /// Simulated table with historical events applied
    pub fn generate<N: NoiseSource + ?Sized>(&self, noise: &mut N) -> FinancialTable {
        let mut table = self.generate_raw(noise);
        apply_events(table.records_mut());
        table
    }

    /// Reproducible generation from a fixed seed
    #[must_use]
    pub fn generate_seeded(&self, seed: u64) -> FinancialTable {
        self.generate(&mut GaussianNoise::seeded(seed))
    }

    /// Generation seeded from operating system entropy
    #[must_use]
    pub fn generate_random(&self) -> FinancialTable {
        self.generate(&mut GaussianNoise::from_entropy())
    }
}
