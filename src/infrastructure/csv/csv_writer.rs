// ============================================================
// CSV WRITER
// ============================================================
// Serialize enterprise tables back to delimited text

use std::fs;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;

use crate::domain::enterprise::EnterpriseTable;
use crate::domain::error::{AppError, Result};

/// CSV writer, UTF-8 output
pub struct CsvTableWriter {
    delimiter: u8,
}

impl Default for CsvTableWriter {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvTableWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Write a table to any sink
    pub fn write<W: Write>(&self, table: &EnterpriseTable, sink: W) -> Result<()> {
        let mut writer = WriterBuilder::new()
            .delimiter(self.delimiter)
            .flexible(false)
            .from_writer(sink);

        writer.write_record(table.headers())?;
        for row in table.rows() {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Write a table to a file, creating parent directories
    pub fn write_file(&self, table: &EnterpriseTable, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::IoError(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }

        let file = fs::File::create(path).map_err(|e| {
            AppError::IoError(format!("Failed to create {}: {}", path.display(), e))
        })?;
        self.write(table, file)
    }

    /// Render a table as a string
    pub fn write_to_string(&self, table: &EnterpriseTable) -> Result<String> {
        let mut buffer = Vec::new();
        self.write(table, &mut buffer)?;
        String::from_utf8(buffer)
            .map_err(|e| AppError::Internal(format!("CSV output is not UTF-8: {}", e)))
    }
}
