// ============================================================
// INDUSTRY BENCHMARKS
// ============================================================
// Per-industry ratios used to estimate missing enterprise fields

use serde::{Deserialize, Serialize};

/// Name of the group used when a label matches no rule
pub const DEFAULT_GROUP: &str = "retail_trade";

/// Fixed financial ratios for one industry group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkGroup {
    /// Stable identifier referenced by classification rules
    pub name: String,

    /// Human-readable label
    pub label: String,

    /// Return on equity
    pub roe: f64,

    /// Return on assets
    pub roa: f64,

    /// Liabilities / total assets, in [0, 1)
    pub debt_ratio: f64,

    /// Employees per one million units of revenue
    pub employees_per_million: f64,

    /// Net profit / revenue
    pub profit_margin: f64,
}

impl BenchmarkGroup {
    pub fn new(
        name: &str,
        label: &str,
        roe: f64,
        roa: f64,
        debt_ratio: f64,
        employees_per_million: f64,
        profit_margin: f64,
    ) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            roe,
            roa,
            debt_ratio,
            employees_per_million,
            profit_margin,
        }
    }

    /// Check the ratios are usable for estimation
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("benchmark group name must not be empty".to_string());
        }
        let ratios = [
            ("roe", self.roe),
            ("roa", self.roa),
            ("debt_ratio", self.debt_ratio),
            ("employees_per_million", self.employees_per_million),
            ("profit_margin", self.profit_margin),
        ];
        for (field, value) in ratios {
            if !value.is_finite() {
                return Err(format!("{}.{} must be finite", self.name, field));
            }
        }
        if !(0.0..1.0).contains(&self.debt_ratio) {
            return Err(format!(
                "{}.debt_ratio must be in [0, 1), got {}",
                self.name, self.debt_ratio
            ));
        }
        if self.employees_per_million < 0.0 {
            return Err(format!(
                "{}.employees_per_million must be >= 0, got {}",
                self.name, self.employees_per_million
            ));
        }
        Ok(())
    }
}

/// Ordered set of benchmark groups
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BenchmarkTable {
    groups: Vec<BenchmarkGroup>,
}

impl BenchmarkTable {
    pub fn new(groups: Vec<BenchmarkGroup>) -> Self {
        Self { groups }
    }

    /// Look up a group by name
    pub fn get(&self, name: &str) -> Option<&BenchmarkGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Look up a group by name, falling back to `default_group`
    pub fn get_or_default(&self, name: &str, default_group: &str) -> Option<&BenchmarkGroup> {
        self.get(name).or_else(|| self.get(default_group))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn groups(&self) -> &[BenchmarkGroup] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Default for BenchmarkTable {
    fn default() -> Self {
        Self::new(vec![
            BenchmarkGroup::new(DEFAULT_GROUP, "商贸零售", 0.12, 0.08, 0.45, 25.0, 0.08),
            BenchmarkGroup::new("manufacturing", "制造业", 0.15, 0.10, 0.55, 15.0, 0.12),
            BenchmarkGroup::new("finance", "金融业", 0.18, 0.06, 0.85, 8.0, 0.25),
            BenchmarkGroup::new("technology", "科技企业", 0.20, 0.12, 0.35, 12.0, 0.18),
            BenchmarkGroup::new("transportation", "交通运输", 0.10, 0.05, 0.60, 20.0, 0.06),
        ])
    }
}
