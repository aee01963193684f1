//! The per-column transform chain.

use tidy_model::{CleanCategory, CleaningOptions, Column};

use crate::inference::{infer_dates, infer_numbers};
use crate::normalization::{VALUE_RULES, normalize_nulls, normalize_whitespace};

/// Counts produced by cleaning one column.
///
/// Only categories whose stage applied to the column are present, so a
/// recorded zero means "applied, nothing changed".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnDelta {
    pub column: String,
    pub counts: Vec<(CleanCategory, usize)>,
}

impl ColumnDelta {
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            counts: Vec::new(),
        }
    }

    pub fn record(&mut self, category: CleanCategory, count: usize) {
        self.counts.push((category, count));
    }

    pub fn get(&self, category: CleanCategory) -> Option<usize> {
        self.counts
            .iter()
            .find(|(recorded, _)| *recorded == category)
            .map(|(_, count)| *count)
    }
}

/// Runs nulls, whitespace, the keyword rules, dates and numbers, in that
/// order, on one column. Touches nothing outside the column.
pub fn clean_column(column: &mut Column, options: &CleaningOptions) -> ColumnDelta {
    let mut delta = ColumnDelta::new(column.name.clone());

    delta.record(CleanCategory::NullsNormalized, normalize_nulls(column));
    if let Some(changed) = normalize_whitespace(column) {
        delta.record(CleanCategory::TrimmedValues, changed);
    }

    for rule in &VALUE_RULES {
        if let Some(changed) = rule.apply(column) {
            delta.record(rule.category, changed);
        }
    }

    if let Some(dates) = infer_dates(column, options) {
        column.values = dates.values;
        delta.record(CleanCategory::DatesParsed, dates.parsed);
    }

    if let Some(numbers) = infer_numbers(column, options) {
        column.values = numbers.values;
        delta.record(CleanCategory::NumericParsed, numbers.parsed);
        if numbers.ranges > 0 {
            delta.record(CleanCategory::RangesNormalized, numbers.ranges);
        }
    }

    delta
}
