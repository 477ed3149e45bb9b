// 集計結果のレポート

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// 集計値一式
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub source: String,
    pub records: usize,
    pub skipped_rows: usize,
    pub total_units: i128,
    pub total_revenue: f64,
    pub revenue_by_region: BTreeMap<String, f64>,
    pub most_sold_item: Option<String>,
    pub average_price: f64,
    pub min_price: f64,
    pub max_price: f64,
    pub generated_at: DateTime<Utc>,
}

impl AnalysisReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Source: {} ({} rows, {} skipped)", self.source, self.records, self.skipped_rows)?;
        writeln!(f, "Total Units Sold: {}", self.total_units)?;
        writeln!(f, "Total Revenue: ${:.2}", self.total_revenue)?;
        writeln!(f, "Revenue by Region:")?;
        for (region, revenue) in &self.revenue_by_region {
            writeln!(f, "  {region:10} : ${revenue:.2}")?;
        }
        writeln!(
            f,
            "Most Sold Item: {}",
            self.most_sold_item.as_deref().unwrap_or("-")
        )?;
        writeln!(f, "Average Price: ${:.2}", self.average_price)?;
        write!(f, "Price Range: ${:.2} - ${:.2}", self.min_price, self.max_price)
    }
}
