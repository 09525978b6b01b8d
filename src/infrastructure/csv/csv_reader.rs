// ============================================================
// CSV READER
// ============================================================
// Read enterprise tables with encoding and delimiter detection

use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use encoding_rs::GB18030;
use tracing::{debug, warn};

use crate::domain::enterprise::EnterpriseTable;
use crate::domain::error::{AppError, Result};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// A parsed table plus the delimiter it was written with
#[derive(Debug, Clone)]
pub struct CsvDocument {
    pub table: EnterpriseTable,
    pub delimiter: u8,
}

/// CSV reader; cells are kept exactly as written
#[derive(Debug, Clone, Default)]
pub struct CsvTableReader {
    /// Fixed delimiter, or `None` to detect from content
    delimiter: Option<u8>,
}

impl CsvTableReader {
    /// Create a reader that detects the delimiter
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Read and parse a CSV file
    pub fn read_file(&self, path: &Path) -> Result<CsvDocument> {
        let bytes = fs::read(path).map_err(|e| {
            AppError::IoError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let content = decode_bytes(&bytes);
        self.parse_content(&content)
    }

    /// Parse CSV content from string
    pub fn parse_content(&self, content: &str) -> Result<CsvDocument> {
        let delimiter = self
            .delimiter
            .unwrap_or_else(|| Self::detect_delimiter(content));

        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .trim(Trim::None)
            .flexible(true) // Allow rows with different lengths
            .from_reader(content.as_bytes());

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| AppError::ParseError(format!("Failed to read CSV headers: {}", e)))?
            .iter()
            .map(|h| h.to_string())
            .collect();

        if headers.iter().all(|h| h.trim().is_empty()) {
            return Err(AppError::ParseError(
                "CSV input has no header row".to_string(),
            ));
        }

        let mut rows = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                AppError::ParseError(format!("Failed to parse CSV row {}: {}", index + 1, e))
            })?;
            if record.len() > headers.len() {
                return Err(AppError::ParseError(format!(
                    "CSV row {}: expected {} fields, saw {}",
                    index + 1,
                    headers.len(),
                    record.len()
                )));
            }
            if record.len() < headers.len() {
                debug!(
                    row = index + 1,
                    expected = headers.len(),
                    got = record.len(),
                    "Short row padded to header width"
                );
            }
            rows.push(record.iter().map(|c| c.to_string()).collect());
        }

        Ok(CsvDocument {
            table: EnterpriseTable::new(headers, rows),
            delimiter,
        })
    }

    /// Detect delimiter from content (comma, semicolon, tab, pipe)
    pub fn detect_delimiter(content: &str) -> u8 {
        let candidates = [b',', b';', b'\t', b'|'];
        let sample_lines: Vec<_> = content.lines().take(10).collect();

        let mut best_delimiter = b',';
        let mut best_score = 0.0f32;

        if sample_lines.is_empty() {
            return best_delimiter;
        }

        for &delimiter in &candidates {
            let field_counts: Vec<usize> = sample_lines
                .iter()
                .map(|line| line.chars().filter(|&c| c == delimiter as char).count())
                .collect();

            // Score by consistency (low standard deviation) and frequency
            let avg = field_counts.iter().sum::<usize>() as f32 / field_counts.len() as f32;
            let variance = field_counts
                .iter()
                .map(|&x| (x as f32 - avg).powi(2))
                .sum::<f32>()
                / field_counts.len() as f32;

            let score = avg / (1.0 + variance.sqrt());

            if score > best_score {
                best_score = score;
                best_delimiter = delimiter;
            }
        }

        best_delimiter
    }
}

/// Decode file bytes: UTF-8 first, then GB18030, then lossy UTF-8
pub fn decode_bytes(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    if let Ok(content) = std::str::from_utf8(bytes) {
        return content.to_string();
    }

    let (decoded, had_errors) = GB18030.decode_without_bom_handling(bytes);
    if !had_errors {
        debug!("Input decoded as GB18030");
        return decoded.into_owned();
    }

    warn!("Input is neither UTF-8 nor GB18030; replacing invalid bytes");
    String::from_utf8_lossy(bytes).into_owned()
}
