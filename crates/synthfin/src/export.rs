//! CSV export of generated tables

use std::fs;
use std::path::{Path, PathBuf};

use synthfin_core::FinancialTable;
use synthfin_core::model::csv_file_name;

use crate::util::io::atomic_write;

/// Error types for export operations
#[derive(Debug)]
pub enum ExportError {
    Io(String),
    Encode(String),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::Io(msg) => write!(f, "IO error: {}", msg),
            ExportError::Encode(msg) => write!(f, "Encoding error: {}", msg),
        }
    }
}

impl std::error::Error for ExportError {}

/// Encode `table` as CSV bytes
pub fn encode_csv(table: &FinancialTable) -> Result<Vec<u8>, ExportError> {
    let mut buffer = Vec::new();
    table
        .write_csv(&mut buffer)
        .map_err(|e| ExportError::Encode(format!("Failed to encode table: {}", e)))?;
    Ok(buffer)
}

/// Write `table` into `output_dir` under its standard file name.
///
/// The directory is created if needed. Returns the written path.
pub fn export_csv(table: &FinancialTable, output_dir: &Path) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(output_dir).map_err(|e| {
        ExportError::Io(format!(
            "Failed to create output directory {}: {}",
            output_dir.display(),
            e
        ))
    })?;

    let path = output_dir.join(csv_file_name(&table.platform().name, table.range()));
    let content = encode_csv(table)?;

    atomic_write(&path, &content)
        .map_err(|e| ExportError::Io(format!("Failed to write {}: {}", path.display(), e)))?;

    tracing::info!(path = %path.display(), rows = table.len(), "exported table");
    Ok(path)
}
