//! Report assembly.

use chrono::{DateTime, Utc};
use tidy_model::{CleaningReport, ColumnMapping};

use crate::column::ColumnDelta;

/// Accumulates per-column deltas into a [`CleaningReport`].
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    column_mapping: ColumnMapping,
    deltas: Vec<ColumnDelta>,
    merged_columns: Vec<String>,
    duplicate_rows_removed: usize,
}

impl ReportBuilder {
    pub fn new(column_mapping: ColumnMapping) -> Self {
        Self {
            column_mapping,
            deltas: Vec::new(),
            merged_columns: Vec::new(),
            duplicate_rows_removed: 0,
        }
    }

    pub fn record_column(&mut self, delta: ColumnDelta) {
        self.deltas.push(delta);
    }

    pub fn merged_columns(&mut self, merged: Vec<String>) {
        self.merged_columns = merged;
    }

    pub fn duplicate_rows_removed(&mut self, count: usize) {
        self.duplicate_rows_removed = count;
    }

    /// Builds the report stamped with the current time.
    pub fn build(self) -> CleaningReport {
        self.build_at(Utc::now())
    }

    pub fn build_at(self, generated_at: DateTime<Utc>) -> CleaningReport {
        let mut report = CleaningReport::new(generated_at);
        report.column_mapping = self.column_mapping;
        for delta in self.deltas {
            for (category, count) in delta.counts {
                *report
                    .counts_mut(category)
                    .entry(delta.column.clone())
                    .or_insert(0) += count;
            }
        }
        report.merged_columns = self.merged_columns;
        report.duplicate_rows_removed = self.duplicate_rows_removed;
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tidy_model::CleanCategory;

    #[test]
    fn test_build_combines_deltas() {
        let mapping: ColumnMapping = [("Unit Price".to_string(), "unit_price".to_string())]
            .into_iter()
            .collect();
        let mut builder = ReportBuilder::new(mapping);

        let mut delta = ColumnDelta::new("unit_price");
        delta.record(CleanCategory::NullsNormalized, 1);
        delta.record(CleanCategory::NumericParsed, 4);
        builder.record_column(delta);
        builder.merged_columns(vec!["Unit  Price".to_string()]);
        builder.duplicate_rows_removed(2);

        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let report = builder.build_at(at);

        assert_eq!(report.generated_at, at);
        assert_eq!(report.column_mapping.normalized("Unit Price"), Some("unit_price"));
        assert_eq!(report.count(CleanCategory::NullsNormalized, "unit_price"), Some(1));
        assert_eq!(report.count(CleanCategory::NumericParsed, "unit_price"), Some(4));
        assert_eq!(report.count(CleanCategory::DatesParsed, "unit_price"), None);
        assert_eq!(report.merged_columns, vec!["Unit  Price".to_string()]);
        assert_eq!(report.duplicate_rows_removed, 2);
    }
}
