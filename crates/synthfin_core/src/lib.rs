//! Synthetic platform financials
//!
//! This crate generates a plausible multi-year financial and usage time series
//! for a named platform. It provides:
//! - A platform catalog with a total resolver (unknown names use a default entry)
//! - One parameterized growth-plus-noise simulator instantiated for 19 metrics
//! - A table-driven pass of historical event adjustments
//! - Summary statistics and CSV encoding of the resulting table
//!
//! ```ignore
//! use synthfin_core::{SeriesGenerator, YearRange};
//!
//! let table = SeriesGenerator::for_platform("Instagram", YearRange::DEFAULT)
//!     .generate_seeded(42);
//! assert_eq!(table.len(), 16);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod error;
pub mod events;
pub mod generator;
pub mod metrics;
pub mod noise;
pub mod simulator;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use analysis::FinancialSummary;
pub use config::{PlatformCatalog, resolve};
pub use generator::SeriesGenerator;
pub use model::{Column, FinancialTable, PlatformConfig, RateSchedule, YearRange, YearRecord};
pub use noise::{GaussianNoise, NoNoise, NoiseSource};
