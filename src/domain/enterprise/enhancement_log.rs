// ============================================================
// ENHANCEMENT LOG
// ============================================================
// Before/after bookkeeping for one enhancement run

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::EnhanceableField;

/// Missing-value count for one column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMissing {
    pub field: String,
    pub count: usize,
}

impl FieldMissing {
    pub fn new(field: &str, count: usize) -> Self {
        Self {
            field: field.to_string(),
            count,
        }
    }
}

/// Derived run summary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImprovementSummary {
    /// Number of fields filled in at least one row
    pub fields_enhanced: usize,

    /// Columns with missing values before minus columns with missing values after
    pub missing_reduction: i64,
}

/// Record of what an enhancement run changed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnhancementLog {
    /// Columns with missing values before the pass, in column order
    pub original_missing: Vec<FieldMissing>,

    /// Fields filled at least once, in order of first fill
    pub enhanced_fields: Vec<String>,

    /// Field name to the method used to fill it
    pub enhancement_methods: BTreeMap<String, String>,

    /// Field name to number of rows filled
    pub fill_counts: BTreeMap<String, usize>,

    /// Columns with missing values after the pass, in column order
    pub final_missing: Vec<FieldMissing>,

    pub total_records: usize,

    pub improvement_summary: ImprovementSummary,
}

impl EnhancementLog {
    /// Start a log from the pre-pass missing counts
    pub fn new(original_missing: Vec<FieldMissing>, total_records: usize) -> Self {
        Self {
            original_missing,
            total_records,
            ..Default::default()
        }
    }

    /// Note that `field` was filled in one row
    pub fn record_fill(&mut self, field: EnhanceableField) {
        let name = field.column_name().to_string();
        if !self.enhanced_fields.contains(&name) {
            self.enhanced_fields.push(name.clone());
            self.enhancement_methods
                .insert(name.clone(), field.method_description().to_string());
        }
        *self.fill_counts.entry(name).or_insert(0) += 1;
    }

    /// Close the log with the post-pass missing counts
    pub fn finish(&mut self, final_missing: Vec<FieldMissing>) {
        self.final_missing = final_missing;
        self.improvement_summary = ImprovementSummary {
            fields_enhanced: self.enhanced_fields.len(),
            missing_reduction: self.original_missing.len() as i64
                - self.final_missing.len() as i64,
        };
    }

    pub fn original_missing_for(&self, field: &str) -> usize {
        Self::count_for(&self.original_missing, field)
    }

    pub fn final_missing_for(&self, field: &str) -> usize {
        Self::count_for(&self.final_missing, field)
    }

    pub fn is_enhanced(&self, field: &str) -> bool {
        self.enhanced_fields.iter().any(|f| f == field)
    }

    fn count_for(counts: &[FieldMissing], field: &str) -> usize {
        counts
            .iter()
            .find(|m| m.field == field)
            .map(|m| m.count)
            .unwrap_or(0)
    }
}
