// ============================================================
// BENCHMARK ESTIMATOR
// ============================================================
// Pure estimates of missing fields from industry benchmark ratios

use tracing::warn;

use crate::domain::enterprise::{BenchmarkGroup, BenchmarkTable, EnhancerConfig, FinancialRatios};

/// Smallest head count ever estimated
pub const MIN_EMPLOYEES: u64 = 10;

/// Revenue unit the employee ratio is expressed in
pub const REVENUE_UNIT: f64 = 1_000_000.0;

/// Estimate head count from revenue, never below [`MIN_EMPLOYEES`]
pub fn estimate_employees(revenue: f64, group: &BenchmarkGroup) -> u64 {
    let estimate = (revenue / REVENUE_UNIT * group.employees_per_million).round();
    if estimate.is_finite() && estimate > MIN_EMPLOYEES as f64 {
        estimate as u64
    } else {
        MIN_EMPLOYEES
    }
}

/// Estimate net profit from revenue and the group's profit margin
pub fn estimate_profit(revenue: f64, group: &BenchmarkGroup) -> f64 {
    revenue * group.profit_margin
}

/// Derive ratios from whatever figures are present, using benchmarks for the rest
///
/// Zero counts as absent, so none of the divisions can hit a zero denominator.
pub fn estimate_financial_ratios(
    total_assets: Option<f64>,
    net_profit: Option<f64>,
    revenue: Option<f64>,
    group: &BenchmarkGroup,
) -> FinancialRatios {
    let present = |v: Option<f64>| v.filter(|x| *x != 0.0);
    let assets = present(total_assets);
    let profit = present(net_profit);
    let revenue = present(revenue);

    let roe = match (profit, assets) {
        (Some(profit), Some(assets)) => {
            // net assets = total assets * (1 - debt ratio)
            let net_assets = assets * (1.0 - group.debt_ratio);
            if net_assets > 0.0 {
                profit / net_assets
            } else {
                group.roe
            }
        }
        _ => group.roe,
    };

    let roa = match (profit, assets) {
        (Some(profit), Some(assets)) => profit / assets,
        _ => group.roa,
    };

    let total_asset_turnover = match (revenue, assets) {
        (Some(revenue), Some(assets)) => revenue / assets,
        _ => 1.0,
    };

    FinancialRatios {
        roe,
        roa,
        debt_ratio: group.debt_ratio,
        total_asset_turnover,
    }
}

/// Estimator bound to a benchmark table
#[derive(Debug, Clone)]
pub struct BenchmarkEstimator {
    benchmarks: BenchmarkTable,
    default_group: String,
}

impl BenchmarkEstimator {
    pub fn new(benchmarks: BenchmarkTable, default_group: String) -> Self {
        Self {
            benchmarks,
            default_group,
        }
    }

    pub fn from_config(config: &EnhancerConfig) -> Self {
        Self::new(config.benchmarks.clone(), config.default_group.clone())
    }

    /// Benchmark for a group name, falling back to the default group
    ///
    /// Returns `None` only if the default group itself is missing, which a
    /// validated config rules out.
    pub fn group(&self, name: &str) -> Option<&BenchmarkGroup> {
        if !self.benchmarks.contains(name) {
            warn!(group = name, fallback = %self.default_group, "Unknown benchmark group");
        }
        self.benchmarks.get_or_default(name, &self.default_group)
    }

    pub fn estimate_employees(&self, revenue: f64, group_name: &str) -> Option<u64> {
        self.group(group_name)
            .map(|group| estimate_employees(revenue, group))
    }

    pub fn estimate_profit(&self, revenue: f64, group_name: &str) -> Option<f64> {
        self.group(group_name).map(|group| estimate_profit(revenue, group))
    }

    pub fn estimate_financial_ratios(
        &self,
        total_assets: Option<f64>,
        net_profit: Option<f64>,
        revenue: Option<f64>,
        group_name: &str,
    ) -> Option<FinancialRatios> {
        self.group(group_name)
            .map(|group| estimate_financial_ratios(total_assets, net_profit, revenue, group))
    }
}

impl Default for BenchmarkEstimator {
    fn default() -> Self {
        Self::from_config(&EnhancerConfig::default())
    }
}
