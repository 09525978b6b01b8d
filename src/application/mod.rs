pub mod use_cases;

pub use use_cases::benchmark_estimator::BenchmarkEstimator;
pub use use_cases::data_enhancer::DataEnhancer;
pub use use_cases::industry_classifier::IndustryClassifier;
pub use use_cases::report_generator::ReportGenerator;
