//! Synthetic platform financials: command-line front end
//!
//! This crate wraps `synthfin_core` with everything a run needs around the
//! generator:
//! - YAML run configuration that extends the platform catalog
//! - An interactive numbered platform prompt
//! - CSV export to disk
//! - A plain-text insight report
//! - A terminal chart dashboard
//! - File logging with size-based rotation

// ============================================================================
// Run modules
// ============================================================================

pub mod config;
pub mod export;
pub mod insights;
pub mod prompt;

// ============================================================================
// Terminal UI
// ============================================================================

pub mod dashboard;

// ============================================================================
// Support modules
// ============================================================================

pub mod logging;
pub mod util;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::{ConfigError, RunConfig};
pub use dashboard::Dashboard;
pub use export::{ExportError, export_csv};
pub use insights::{render_insights, render_preview};
pub use logging::init_logging;
pub use prompt::{Selection, parse_selection, prompt_selection};
