use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::error::{AppError, Result};

pub const REPORT_SUFFIX: &str = "_enhancement_report.md";

/// Report path next to the output table: `<stem>_enhancement_report.md`
pub fn report_path_for(output: &Path) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    output.with_file_name(format!("{}{}", stem, REPORT_SUFFIX))
}

/// Write text to a file, creating parent directories
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    fs::write(path, content)
        .map_err(|e| AppError::IoError(format!("Failed to write {}: {}", path.display(), e)))
}

/// Write a value as pretty-printed JSON
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    write_text(path, &json)
}

fn ensure_dir(path: &Path) -> Result<()> {
    if !path.as_os_str().is_empty() && !path.exists() {
        fs::create_dir_all(path).map_err(|e| {
            AppError::IoError(format!("Failed to create {}: {}", path.display(), e))
        })?;
    }
    Ok(())
}
