// ============================================================
// ENTERPRISE DOMAIN LAYER
// ============================================================
// Core types and value objects for enterprise data enhancement
// No I/O

mod benchmark;
mod enhancement_log;
mod enhancer_config;
mod financial_ratios;
mod missing_value;
pub mod record;
mod table;

pub use benchmark::{BenchmarkGroup, BenchmarkTable, DEFAULT_GROUP};
pub use enhancement_log::{EnhancementLog, FieldMissing, ImprovementSummary};
pub use enhancer_config::{default_industry_rules, EnhancerConfig, IndustryRule};
pub use financial_ratios::FinancialRatios;
pub use missing_value::{MissingValuePolicy, DEFAULT_MISSING_MARKERS};
pub use record::{EnhanceableField, FieldFill, Record};
pub use table::EnterpriseTable;
