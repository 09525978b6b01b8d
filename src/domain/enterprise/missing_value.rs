// ============================================================
// MISSING VALUE POLICY
// ============================================================
// Decides which raw cell strings count as "no value"

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Tokens read as missing in addition to blank cells
pub const DEFAULT_MISSING_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Set of cell strings treated as missing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct MissingValuePolicy {
    markers: HashSet<String>,
}

impl MissingValuePolicy {
    pub fn new<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            markers: markers
                .into_iter()
                .map(|m| m.into().trim().to_string())
                .collect(),
        }
    }

    /// Blank cells are always missing; other cells are compared trimmed
    pub fn is_missing(&self, cell: &str) -> bool {
        let trimmed = cell.trim();
        trimmed.is_empty() || self.markers.contains(trimmed)
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

impl Default for MissingValuePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MISSING_MARKERS.iter().copied())
    }
}

impl From<Vec<String>> for MissingValuePolicy {
    fn from(markers: Vec<String>) -> Self {
        Self::new(markers)
    }
}

impl From<MissingValuePolicy> for Vec<String> {
    fn from(policy: MissingValuePolicy) -> Self {
        let mut markers: Vec<String> = policy.markers.into_iter().collect();
        markers.sort();
        markers
    }
}
