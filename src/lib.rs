pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

mod app;

pub use app::run;
pub use application::{BenchmarkEstimator, DataEnhancer, IndustryClassifier, ReportGenerator};
pub use domain::enterprise::{
    BenchmarkGroup, BenchmarkTable, EnhanceableField, EnhancementLog, EnhancerConfig,
    EnterpriseTable, FinancialRatios, IndustryRule, Record,
};
pub use domain::error::{AppError, Result};
