//! JSON report export.

use std::path::Path;

use anyhow::{Context, Result};
use tidy_model::CleaningReport;

use crate::common::ensure_parent_dir;

/// Pretty-printed JSON with two-space indentation.
pub fn report_to_json(report: &CleaningReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("serialize cleaning report")
}

/// Writes the report as JSON, creating parent directories.
pub fn write_json_report(path: &Path, report: &CleaningReport) -> Result<()> {
    ensure_parent_dir(path)?;
    let mut json = report_to_json(report)?;
    json.push('\n');
    std::fs::write(path, json).with_context(|| format!("write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tidy_model::CleanCategory;

    #[test]
    fn test_key_order() {
        let mut report = CleaningReport::new(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap());
        report.column_mapping.push("Order ID", "order_id");
        report
            .counts_mut(CleanCategory::NullsNormalized)
            .insert("order_id".to_string(), 0);

        let json = report_to_json(&report).unwrap();
        let positions: Vec<usize> = [
            "\"generated_at\"",
            "\"column_mapping\"",
            "\"nulls_normalized\"",
            "\"status_normalized\"",
            "\"merged_columns\"",
            "\"duplicate_rows_removed\"",
        ]
        .iter()
        .map(|key| json.find(key).unwrap())
        .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(json.contains("\"generated_at\": \"2024-05-01T12:00:00Z\""));
        assert!(json.contains("\"Order ID\": \"order_id\""));
    }
}
