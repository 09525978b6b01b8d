// ============================================================
// ENHANCEMENT REPORT GENERATOR
// ============================================================
// Render an EnhancementLog as a fixed-structure Markdown report

use std::fmt::Write;
use std::path::Path;

use crate::domain::enterprise::{EnhancementLog, FieldMissing};
use crate::domain::error::Result;
use crate::infrastructure::storage;

const UNKNOWN_METHOD: &str = "unknown method";

const DISCLAIMER: &str = "\
## Usage Notes
1. Enhanced data is for algorithm testing and learning only
2. It is not a basis for real investment decisions
3. Cross-check against public sources before relying on it
";

/// Share of records, or `None` when there are no records
pub fn missing_percentage(count: usize, total_records: usize) -> Option<f64> {
    (total_records > 0).then(|| count as f64 / total_records as f64 * 100.0)
}

pub struct ReportGenerator;

impl ReportGenerator {
    /// Render the report text
    pub fn render(log: &EnhancementLog) -> String {
        let mut report = String::from("# Data Enhancement Report\n\n## Original Data\n");

        if log.total_records == 0 {
            report.push_str("Total records: 0 (no records)\n");
        } else {
            let _ = writeln!(report, "Total records: {}", log.total_records);
        }

        report.push_str("\n### Missing Fields (before enhancement)\n");
        Self::push_missing(&mut report, &log.original_missing, log.total_records);

        report.push_str("\n## Enhancement Results\n\n### Enhanced Fields\n");
        if log.enhanced_fields.is_empty() {
            report.push_str("- none\n");
        }
        for field in &log.enhanced_fields {
            let method = log
                .enhancement_methods
                .get(field)
                .map(String::as_str)
                .unwrap_or(UNKNOWN_METHOD);
            let _ = writeln!(report, "- {}: {}", field, method);
        }

        report.push_str("\n### Missing Fields (after enhancement)\n");
        Self::push_missing(&mut report, &log.final_missing, log.total_records);

        let summary = &log.improvement_summary;
        let _ = write!(
            report,
            "\n## Improvement Summary\n\
             - Fields enhanced: {}\n\
             - Completeness improvement: {} field groups\n\
             - Data usability: significantly improved\n\n",
            summary.fields_enhanced, summary.missing_reduction
        );

        report.push_str(DISCLAIMER);
        report
    }

    /// Render and write the report to `path`
    pub fn write(log: &EnhancementLog, path: &Path) -> Result<()> {
        storage::write_text(path, &Self::render(log))
    }

    fn push_missing(report: &mut String, counts: &[FieldMissing], total_records: usize) {
        if counts.is_empty() {
            report.push_str("- none\n");
            return;
        }

        for missing in counts {
            match missing_percentage(missing.count, total_records) {
                Some(pct) => {
                    let _ = writeln!(
                        report,
                        "- {}: {} missing ({:.1}%)",
                        missing.field, missing.count, pct
                    );
                }
                None => {
                    let _ = writeln!(report, "- {}: {} missing", missing.field, missing.count);
                }
            }
        }
    }
}
