// ============================================================
// ENTERPRISE RECORD TYPES
// ============================================================
// Typed view of one input row and the fills applied to it

use serde::{Deserialize, Serialize};

pub const INDUSTRY_TYPE: &str = "industry_type";
pub const REVENUE: &str = "revenue";
pub const EMPLOYEE_COUNT: &str = "employee_count";
pub const NET_PROFIT: &str = "net_profit";
pub const TOTAL_ASSETS: &str = "total_assets";

/// A field the enhancer is allowed to write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnhanceableField {
    EmployeeCount,
    NetProfit,
}

impl EnhanceableField {
    pub const ALL: [EnhanceableField; 2] =
        [EnhanceableField::EmployeeCount, EnhanceableField::NetProfit];

    /// Column header this field is stored under
    pub fn column_name(&self) -> &'static str {
        match self {
            EnhanceableField::EmployeeCount => EMPLOYEE_COUNT,
            EnhanceableField::NetProfit => NET_PROFIT,
        }
    }

    /// Method description recorded in the enhancement log
    pub fn method_description(&self) -> &'static str {
        match self {
            EnhanceableField::EmployeeCount => "estimated from revenue and industry benchmark",
            EnhanceableField::NetProfit => "estimated from revenue and industry profit margin",
        }
    }

    /// Render an estimate as cell text; head counts are whole numbers
    pub fn format_value(&self, value: f64) -> String {
        match self {
            EnhanceableField::EmployeeCount => format!("{}", value.round() as i64),
            EnhanceableField::NetProfit => format!("{}", value),
        }
    }
}

impl std::fmt::Display for EnhanceableField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.column_name())
    }
}

/// One estimated value to be written into a row
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldFill {
    /// Row index (0-based, header excluded)
    pub row: usize,

    pub field: EnhanceableField,

    pub value: f64,
}

/// A single enterprise record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Row index (0-based, header excluded)
    pub index: usize,

    /// Free-text industry label
    pub industry_type: Option<String>,

    pub revenue: Option<f64>,

    pub employee_count: Option<f64>,

    pub net_profit: Option<f64>,

    pub total_assets: Option<f64>,
}

impl Record {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            ..Default::default()
        }
    }

    pub fn with_industry(mut self, industry_type: &str) -> Self {
        self.industry_type = Some(industry_type.to_string());
        self
    }

    pub fn with_revenue(mut self, revenue: f64) -> Self {
        self.revenue = Some(revenue);
        self
    }

    pub fn with_employee_count(mut self, employee_count: f64) -> Self {
        self.employee_count = Some(employee_count);
        self
    }

    pub fn with_net_profit(mut self, net_profit: f64) -> Self {
        self.net_profit = Some(net_profit);
        self
    }

    pub fn with_total_assets(mut self, total_assets: f64) -> Self {
        self.total_assets = Some(total_assets);
        self
    }

    /// Current value of an enhanceable field
    pub fn get(&self, field: EnhanceableField) -> Option<f64> {
        match field {
            EnhanceableField::EmployeeCount => self.employee_count,
            EnhanceableField::NetProfit => self.net_profit,
        }
    }

    /// Write a fill into the record
    pub fn apply(&mut self, fill: &FieldFill) {
        match fill.field {
            EnhanceableField::EmployeeCount => self.employee_count = Some(fill.value.round()),
            EnhanceableField::NetProfit => self.net_profit = Some(fill.value),
        }
    }
}

/// Parse a numeric cell, accepting thousands separators
///
/// Returns `None` for text that is not a finite number.
pub fn parse_number(cell: &str) -> Option<f64> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return None;
    }

    trimmed
        .parse::<f64>()
        .ok()
        .or_else(|| trimmed.replace(',', "").parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("1200"), Some(1200.0));
        assert_eq!(parse_number(" 3.5 "), Some(3.5));
        assert_eq!(parse_number("10,000,000"), Some(10_000_000.0));
        assert_eq!(parse_number("-42"), Some(-42.0));
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number(""), None);
    }

    #[test]
    fn test_format_value() {
        assert_eq!(EnhanceableField::EmployeeCount.format_value(120.0), "120");
        assert_eq!(EnhanceableField::NetProfit.format_value(1_800_000.0), "1800000");
        assert_eq!(EnhanceableField::NetProfit.format_value(12.5), "12.5");
    }

    #[test]
    fn test_apply_fill() {
        let mut record = Record::new(0).with_revenue(1_000_000.0);
        record.apply(&FieldFill {
            row: 0,
            field: EnhanceableField::NetProfit,
            value: 80_000.0,
        });
        assert_eq!(record.get(EnhanceableField::NetProfit), Some(80_000.0));
        assert_eq!(record.get(EnhanceableField::EmployeeCount), None);
    }
}
