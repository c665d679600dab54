//! Descriptive statistics over generated tables

mod summary;

pub use summary::{FinancialSummary, endpoint_growth, mean, ratio};
