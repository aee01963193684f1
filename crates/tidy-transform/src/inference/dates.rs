//! Date column inference.

use tidy_model::{CellValue, CleaningOptions, Column};

use super::{Candidate, hit_rate};
use crate::normalization::text::contains_any;
use crate::normalization::{looks_like_date, parse_timestamp_fallback};

/// Name keywords that force date parsing.
pub const DATE_KEYWORDS: [&str; 2] = ["date", "time"];

pub fn is_forced_date(name: &str) -> bool {
    contains_any(name, &DATE_KEYWORDS)
}

/// An accepted date conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct DateInference {
    pub values: Vec<CellValue>,
    /// Cells holding a timestamp after conversion.
    pub parsed: usize,
}

/// Decides whether a text column is a date column and converts it.
///
/// Returns `None` when the column is not a candidate or the candidate was
/// rejected; the caller then keeps the column unchanged.
pub fn infer_dates(column: &Column, options: &CleaningOptions) -> Option<DateInference> {
    if !column.is_text() {
        return None;
    }
    let sample = column.text_sample(options.sample_size);
    if sample.is_empty() {
        return None;
    }

    let forced = is_forced_date(&column.name);
    if !forced && hit_rate(&sample, looks_like_date) < options.thresholds.sample_hit_rate {
        return None;
    }

    let candidate = build_candidate(column, forced);
    let threshold = options.thresholds.for_column(forced);
    if !candidate.is_accepted(threshold) {
        tracing::debug!(
            column = %column.name,
            forced,
            ratio = candidate.ratio(),
            threshold,
            "date conversion rejected"
        );
        return None;
    }

    tracing::debug!(
        column = %column.name,
        forced,
        parsed = candidate.converted,
        ratio = candidate.ratio(),
        threshold,
        "date conversion accepted"
    );
    Some(DateInference {
        values: candidate.values,
        parsed: candidate.converted,
    })
}

/// Unparseable cells become missing in forced columns and keep their text
/// otherwise.
fn build_candidate(column: &Column, forced: bool) -> Candidate {
    let mut converted = 0;
    let mut attempted = 0;
    let values = column
        .values
        .iter()
        .map(|value| {
            let CellValue::Text(text) = value else {
                return value.clone();
            };
            attempted += 1;
            match parse_timestamp_fallback(text) {
                Some(timestamp) => {
                    converted += 1;
                    CellValue::Timestamp(timestamp)
                }
                None if forced => CellValue::Missing,
                None => value.clone(),
            }
        })
        .collect();
    Candidate {
        values,
        converted,
        attempted,
    }
}
