// ============================================================
// DATA ENHANCER USE CASE
// ============================================================
// Classify each record, fill missing fields from benchmarks and
// keep the before/after bookkeeping

use std::path::Path;
use std::time::Instant;

use tracing::{debug, info, warn};

use super::benchmark_estimator::{
    estimate_employees, estimate_financial_ratios, estimate_profit, BenchmarkEstimator,
};
use super::industry_classifier::IndustryClassifier;
use crate::domain::enterprise::{
    BenchmarkGroup, EnhanceableField, EnhancementLog, EnhancerConfig, EnterpriseTable, FieldFill,
    FinancialRatios, Record,
};
use crate::domain::error::{AppError, Result};
use crate::infrastructure::csv::{CsvTableReader, CsvTableWriter};

/// Only input format the enhancer reads
pub const SUPPORTED_EXTENSION: &str = "csv";

/// Fills a record needs, given its benchmark group
///
/// A field is filled only when it is absent and revenue is present.
pub fn plan_fills(record: &Record, group: &BenchmarkGroup) -> Vec<FieldFill> {
    let Some(revenue) = record.revenue else {
        return Vec::new();
    };

    EnhanceableField::ALL
        .iter()
        .filter(|field| record.get(**field).is_none())
        .map(|&field| {
            let value = match field {
                EnhanceableField::EmployeeCount => estimate_employees(revenue, group) as f64,
                EnhanceableField::NetProfit => estimate_profit(revenue, group),
            };
            FieldFill {
                row: record.index,
                field,
                value,
            }
        })
        .collect()
}

/// Check that a path names a supported input file
pub fn ensure_supported_input(path: &Path) -> Result<()> {
    let supported = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(SUPPORTED_EXTENSION));

    if supported {
        Ok(())
    } else {
        Err(AppError::UnsupportedFormat(format!(
            "{} (only .{} input is supported)",
            path.display(),
            SUPPORTED_EXTENSION
        )))
    }
}

/// Data enhancement use case
pub struct DataEnhancer {
    config: EnhancerConfig,
    classifier: IndustryClassifier,
    estimator: BenchmarkEstimator,
}

impl DataEnhancer {
    /// Create an enhancer from a validated configuration
    pub fn new(config: EnhancerConfig) -> Result<Self> {
        config.validate().map_err(|e| {
            AppError::ValidationError(format!("Invalid enhancer config: {}", e))
        })?;

        Ok(Self {
            classifier: IndustryClassifier::from_config(&config),
            estimator: BenchmarkEstimator::from_config(&config),
            config,
        })
    }

    pub fn config(&self) -> &EnhancerConfig {
        &self.config
    }

    pub fn classifier(&self) -> &IndustryClassifier {
        &self.classifier
    }

    fn group_for(&self, record: &Record) -> Result<&BenchmarkGroup> {
        let name = self
            .classifier
            .classify_optional(record.industry_type.as_deref());
        self.estimator.group(name).ok_or_else(|| {
            AppError::Internal(format!("No benchmark for group '{}'", name))
        })
    }

    /// Fills for one record, using its classified group
    pub fn plan_record(&self, record: &Record) -> Result<Vec<FieldFill>> {
        let group = self.group_for(record)?;
        let fills = plan_fills(record, group);
        debug!(
            row = record.index,
            group = %group.name,
            fills = fills.len(),
            "Planned record fills"
        );
        Ok(fills)
    }

    /// Fill every record in place and return what was written
    pub fn enhance_records(&self, records: &mut [Record]) -> Result<Vec<FieldFill>> {
        let mut applied = Vec::new();
        for record in records.iter_mut() {
            let fills = self.plan_record(record)?;
            for fill in &fills {
                record.apply(fill);
            }
            applied.extend(fills);
        }
        Ok(applied)
    }

    /// Ratios for a record from its figures and its group's benchmarks
    pub fn financial_ratios(&self, record: &Record) -> Result<FinancialRatios> {
        let group = self.group_for(record)?;
        Ok(estimate_financial_ratios(
            record.total_assets,
            record.net_profit,
            record.revenue,
            group,
        ))
    }

    /// Fill missing cells of a table and log the before/after counts
    pub fn enhance_table(&self, table: &mut EnterpriseTable) -> Result<EnhancementLog> {
        let policy = &self.config.missing_markers;

        let records = table.records(policy);
        let mut fills = Vec::new();
        for record in &records {
            for fill in self.plan_record(record)? {
                // present-but-unparsable cells are data, not gaps
                if table.is_cell_missing(fill.row, fill.field.column_name(), policy) {
                    fills.push(fill);
                } else {
                    warn!(
                        row = fill.row,
                        column = fill.field.column_name(),
                        "Skipping fill over non-numeric value"
                    );
                }
            }
        }

        // an absent target column is added only when a fill lands in it,
        // and is counted as fully missing before the pass
        for fill in &fills {
            table.ensure_column(fill.field.column_name());
        }
        let mut log = EnhancementLog::new(table.missing_counts(policy), table.len());

        for fill in &fills {
            table.apply_fill(fill)?;
            log.record_fill(fill.field);
        }

        log.finish(table.missing_counts(policy));

        info!(
            records = log.total_records,
            fills = fills.len(),
            fields_enhanced = log.improvement_summary.fields_enhanced,
            "Table enhanced"
        );

        Ok(log)
    }

    /// Read a CSV file, enhance it and write the result to `output`
    pub fn enhance_csv_file(&self, input: &Path, output: &Path) -> Result<EnhancementLog> {
        let start = Instant::now();

        ensure_supported_input(input)?;

        let mut document = CsvTableReader::new().read_file(input)?;
        info!(
            input = %input.display(),
            rows = document.table.len(),
            columns = document.table.headers().len(),
            "Loaded input table"
        );

        let log = self.enhance_table(&mut document.table)?;

        CsvTableWriter::new()
            .with_delimiter(document.delimiter)
            .write_file(&document.table, output)?;

        info!(
            output = %output.display(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Wrote enhanced table"
        );

        Ok(log)
    }
}

impl std::fmt::Debug for DataEnhancer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataEnhancer")
            .field("default_group", &self.config.default_group)
            .field("groups", &self.config.benchmarks.len())
            .field("rules", &self.config.rules.len())
            .finish()
    }
}
