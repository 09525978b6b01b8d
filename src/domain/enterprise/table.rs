// ============================================================
// ENTERPRISE TABLE
// ============================================================
// Raw header + cell grid; keeps untouched cells byte-for-byte

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::record::{
    parse_number, EMPLOYEE_COUNT, INDUSTRY_TYPE, NET_PROFIT, REVENUE, TOTAL_ASSETS,
};
use super::{FieldFill, FieldMissing, MissingValuePolicy, Record};
use crate::domain::error::{AppError, Result};

/// Tabular enterprise data as read from disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnterpriseTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl EnterpriseTable {
    /// Build a table; short rows are padded to the header width
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();

        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column, ignoring surrounding whitespace in headers
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h.trim() == name)
    }

    /// Position of a column, appending an empty one if absent
    pub fn ensure_column(&mut self, name: &str) -> usize {
        if let Some(idx) = self.column_index(name) {
            return idx;
        }

        self.headers.push(name.to_string());
        for row in &mut self.rows {
            row.push(String::new());
        }
        self.headers.len() - 1
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map(|c| c.as_str())
    }

    /// True if the named column is absent or the cell is missing
    pub fn is_cell_missing(&self, row: usize, column: &str, policy: &MissingValuePolicy) -> bool {
        match self.column_index(column) {
            Some(col) => self.cell(row, col).map_or(true, |c| policy.is_missing(c)),
            None => true,
        }
    }

    /// Missing counts for every column with at least one missing cell
    pub fn missing_counts(&self, policy: &MissingValuePolicy) -> Vec<FieldMissing> {
        self.headers
            .iter()
            .enumerate()
            .filter_map(|(col, header)| {
                let count = self
                    .rows
                    .iter()
                    .filter(|row| policy.is_missing(&row[col]))
                    .count();
                (count > 0).then(|| FieldMissing::new(header.trim(), count))
            })
            .collect()
    }

    /// Typed view of every row
    pub fn records(&self, policy: &MissingValuePolicy) -> Vec<Record> {
        let industry_col = self.column_index(INDUSTRY_TYPE);
        let revenue_col = self.column_index(REVENUE);
        let employee_col = self.column_index(EMPLOYEE_COUNT);
        let profit_col = self.column_index(NET_PROFIT);
        let assets_col = self.column_index(TOTAL_ASSETS);

        self.rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let text = |col: Option<usize>| {
                    col.map(|c| row[c].as_str())
                        .filter(|cell| !policy.is_missing(cell))
                };
                let number = |col: Option<usize>, name: &str| {
                    text(col).and_then(|cell| {
                        let parsed = parse_number(cell);
                        if parsed.is_none() {
                            warn!(row = index, column = name, value = cell, "Unparsable numeric cell ignored");
                        }
                        parsed
                    })
                };

                Record {
                    index,
                    industry_type: text(industry_col).map(|s| s.trim().to_string()),
                    revenue: number(revenue_col, REVENUE),
                    employee_count: number(employee_col, EMPLOYEE_COUNT),
                    net_profit: number(profit_col, NET_PROFIT),
                    total_assets: number(assets_col, TOTAL_ASSETS),
                }
            })
            .collect()
    }

    /// Write one fill into its cell, creating the column if needed
    pub fn apply_fill(&mut self, fill: &FieldFill) -> Result<()> {
        if fill.row >= self.rows.len() {
            return Err(AppError::ValidationError(format!(
                "fill targets row {} but table has {} rows",
                fill.row,
                self.rows.len()
            )));
        }

        let col = self.ensure_column(fill.field.column_name());
        self.rows[fill.row][col] = fill.field.format_value(fill.value);
        Ok(())
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::enterprise::EnhanceableField;

    fn table(headers: &[&str], rows: &[&[&str]]) -> EnterpriseTable {
        EnterpriseTable::new(
            headers.iter().map(|h| h.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_short_rows_are_padded() {
        let t = table(&["a", "b", "c"], &[&["1"]]);
        assert_eq!(t.rows()[0], vec!["1", "", ""]);
    }

    #[test]
    fn test_missing_counts_in_column_order() {
        let t = table(
            &["name", "revenue", "net_profit"],
            &[&["A", "", "NaN"], &["B", "100", ""], &["C", "200", "5"]],
        );
        let counts = t.missing_counts(&MissingValuePolicy::default());
        assert_eq!(
            counts,
            vec![FieldMissing::new("revenue", 1), FieldMissing::new("net_profit", 2)]
        );
    }

    #[test]
    fn test_records_parse_typed_fields() {
        let t = table(
            &["industry_type", "revenue", "employee_count", "net_profit", "total_assets"],
            &[&["软件开发", "10,000,000", "", "n/a", "5e6"]],
        );
        let records = t.records(&MissingValuePolicy::default());
        assert_eq!(records[0].industry_type.as_deref(), Some("软件开发"));
        assert_eq!(records[0].revenue, Some(10_000_000.0));
        assert_eq!(records[0].employee_count, None);
        assert_eq!(records[0].net_profit, None);
        assert_eq!(records[0].total_assets, Some(5_000_000.0));
    }

    #[test]
    fn test_unparsable_numeric_is_absent_but_not_missing() {
        let t = table(&["revenue"], &[&["unknown"]]);
        let policy = MissingValuePolicy::default();
        assert_eq!(t.records(&policy)[0].revenue, None);
        assert!(t.missing_counts(&policy).is_empty());
    }

    #[test]
    fn test_apply_fill_creates_column() {
        let mut t = table(&["revenue"], &[&["100"]]);
        t.apply_fill(&FieldFill {
            row: 0,
            field: EnhanceableField::EmployeeCount,
            value: 10.0,
        })
        .unwrap();
        assert_eq!(t.headers(), &["revenue".to_string(), "employee_count".to_string()]);
        assert_eq!(t.cell(0, 1), Some("10"));
    }

    #[test]
    fn test_apply_fill_out_of_range() {
        let mut t = table(&["revenue"], &[]);
        let result = t.apply_fill(&FieldFill {
            row: 3,
            field: EnhanceableField::NetProfit,
            value: 1.0,
        });
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }
}
