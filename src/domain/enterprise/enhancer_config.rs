// ============================================================
// ENHANCER CONFIGURATION
// ============================================================
// Benchmarks, classification rules and missing-value markers,
// injected into the enhancer instead of living in globals

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{BenchmarkTable, MissingValuePolicy, DEFAULT_GROUP};

/// Keyword rule mapping an industry label to a benchmark group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryRule {
    /// Target benchmark group name
    pub group: String,

    /// Substrings that select this group (matched against the lower-cased label)
    pub keywords: Vec<String>,
}

impl IndustryRule {
    pub fn new(group: &str, keywords: &[&str]) -> Self {
        Self {
            group: group.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    /// True if any keyword occurs in the (already lower-cased) label
    pub fn matches(&self, label: &str) -> bool {
        self.keywords
            .iter()
            .filter(|k| !k.is_empty())
            .any(|k| label.contains(k.to_lowercase().as_str()))
    }
}

/// Default ordered rule list; first match wins
pub fn default_industry_rules() -> Vec<IndustryRule> {
    vec![
        IndustryRule::new(DEFAULT_GROUP, &["零售", "商贸", "retail", "trade"]),
        IndustryRule::new(
            "manufacturing",
            &["制造", "机械", "化工", "manufactur", "machinery", "chemical"],
        ),
        IndustryRule::new("finance", &["金融", "证券", "银行", "financ", "securities", "bank"]),
        IndustryRule::new("technology", &["科技", "软件", "互联网", "tech", "software", "internet"]),
        IndustryRule::new(
            "transportation",
            &["运输", "航运", "物流", "transport", "shipping", "logistics"],
        ),
    ]
}

/// Configuration for the data enhancer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnhancerConfig {
    /// Group used for unrecognized labels and unknown group names
    pub default_group: String,

    /// Benchmark ratios per industry group
    pub benchmarks: BenchmarkTable,

    /// Ordered classification rules
    pub rules: Vec<IndustryRule>,

    /// Cell strings read as missing
    pub missing_markers: MissingValuePolicy,
}

impl Default for EnhancerConfig {
    fn default() -> Self {
        Self {
            default_group: DEFAULT_GROUP.to_string(),
            benchmarks: BenchmarkTable::default(),
            rules: default_industry_rules(),
            missing_markers: MissingValuePolicy::default(),
        }
    }
}

impl EnhancerConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.benchmarks.is_empty() {
            return Err("benchmarks must contain at least one group".to_string());
        }

        let mut seen = HashSet::new();
        for group in self.benchmarks.groups() {
            group.validate()?;
            if !seen.insert(group.name.as_str()) {
                return Err(format!("duplicate benchmark group '{}'", group.name));
            }
        }

        if !self.benchmarks.contains(&self.default_group) {
            return Err(format!(
                "default_group '{}' is not a benchmark group",
                self.default_group
            ));
        }

        for rule in &self.rules {
            if !self.benchmarks.contains(&rule.group) {
                return Err(format!(
                    "rule targets unknown benchmark group '{}'",
                    rule.group
                ));
            }
        }

        Ok(())
    }
}
