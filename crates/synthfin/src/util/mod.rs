//! Shared helpers for formatting, styling and file output

pub mod format;
pub mod io;
pub mod styles;
