use serde::{Deserialize, Serialize};

/// Ratios derived for one enterprise
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialRatios {
    /// Return on equity
    pub roe: f64,

    /// Return on assets
    pub roa: f64,

    /// Always the benchmark's debt ratio
    pub debt_ratio: f64,

    /// Revenue / total assets
    pub total_asset_turnover: f64,
}
