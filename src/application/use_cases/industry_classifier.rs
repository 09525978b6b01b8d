// ============================================================
// INDUSTRY CLASSIFIER
// ============================================================
// Map free-text industry labels onto benchmark groups

use crate::domain::enterprise::{EnhancerConfig, IndustryRule};

/// Keyword classifier; first matching rule wins
#[derive(Debug, Clone)]
pub struct IndustryClassifier {
    rules: Vec<IndustryRule>,
    default_group: String,
}

impl IndustryClassifier {
    pub fn new(rules: Vec<IndustryRule>, default_group: String) -> Self {
        Self {
            rules,
            default_group,
        }
    }

    pub fn from_config(config: &EnhancerConfig) -> Self {
        Self::new(config.rules.clone(), config.default_group.clone())
    }

    /// Benchmark group name for a label; unrecognized labels get the default group
    pub fn classify(&self, label: &str) -> &str {
        let normalized = label.trim().to_lowercase();
        if normalized.is_empty() {
            return &self.default_group;
        }

        self.rules
            .iter()
            .find(|rule| rule.matches(&normalized))
            .map(|rule| rule.group.as_str())
            .unwrap_or(self.default_group.as_str())
    }

    /// Same as [`classify`](Self::classify) for an absent label
    pub fn classify_optional(&self, label: Option<&str>) -> &str {
        self.classify(label.unwrap_or(""))
    }

    pub fn default_group(&self) -> &str {
        &self.default_group
    }
}

impl Default for IndustryClassifier {
    fn default() -> Self {
        Self::from_config(&EnhancerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chinese_labels() {
        let classifier = IndustryClassifier::default();
        assert_eq!(classifier.classify("软件开发"), "technology");
        assert_eq!(classifier.classify("汽车制造"), "manufacturing");
        assert_eq!(classifier.classify("商业银行"), "finance");
        assert_eq!(classifier.classify("国际航运"), "transportation");
        assert_eq!(classifier.classify("连锁零售"), "retail_trade");
    }

    #[test]
    fn test_english_labels_ignore_case() {
        let classifier = IndustryClassifier::default();
        assert_eq!(classifier.classify("Enterprise SOFTWARE"), "technology");
        assert_eq!(classifier.classify("Investment Banking"), "finance");
        assert_eq!(classifier.classify("Logistics"), "transportation");
    }

    #[test]
    fn test_first_rule_wins() {
        let classifier = IndustryClassifier::default();
        // contains both 零售 (retail) and 科技 (technology)
        assert_eq!(classifier.classify("零售科技"), "retail_trade");
    }

    #[test]
    fn test_unrecognized_and_empty_use_default() {
        let classifier = IndustryClassifier::default();
        assert_eq!(classifier.classify("农业种植"), "retail_trade");
        assert_eq!(classifier.classify(""), "retail_trade");
        assert_eq!(classifier.classify("   "), "retail_trade");
        assert_eq!(classifier.classify_optional(None), "retail_trade");
    }

    #[test]
    fn test_classification_is_deterministic() {
        let classifier = IndustryClassifier::default();
        let first = classifier.classify("证券经纪").to_string();
        for _ in 0..10 {
            assert_eq!(classifier.classify("证券经纪"), first);
        }
    }

    #[test]
    fn test_custom_rules() {
        let classifier = IndustryClassifier::new(
            vec![IndustryRule::new("finance", &["矿"])],
            "manufacturing".to_string(),
        );
        assert_eq!(classifier.classify("煤矿开采"), "finance");
        assert_eq!(classifier.classify("软件"), "manufacturing");
        assert_eq!(classifier.default_group(), "manufacturing");
    }
}
