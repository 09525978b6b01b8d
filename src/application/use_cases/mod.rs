pub mod benchmark_estimator;
pub mod data_enhancer;
pub mod industry_classifier;
pub mod report_generator;
