//! Numeric column inference.

use tidy_model::{CellValue, CleaningOptions, Column};

use super::{Candidate, hit_rate};
use crate::normalization::text::contains_any;
use crate::normalization::{NumericToken, parse_numeric_token};

/// Name keywords that force numeric parsing.
pub const FORCED_NUMERIC_KEYWORDS: [&str; 8] = [
    "price", "cost", "amount", "qty", "quantity", "tax", "discount", "total",
];

/// Name keywords of columns that hold text even when they contain digits.
pub const TEXT_KEYWORDS: [&str; 10] = [
    "phone", "address", "email", "name", "country", "status", "method", "tag", "note", "product",
];

pub fn is_forced_numeric(name: &str) -> bool {
    contains_any(name, &FORCED_NUMERIC_KEYWORDS)
}

/// An accepted numeric conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericInference {
    pub values: Vec<CellValue>,
    /// Cells converted through any shape (plain, range or percent).
    pub parsed: usize,
    /// Cells converted from a `low-high` range.
    pub ranges: usize,
}

/// Decides whether a text column is numeric and converts it.
///
/// Unforced columns are skipped when the name contains `id` or a text
/// keyword, or when fewer than the sample hit rate of sampled values
/// contain a digit. Unparseable cells become missing in the candidate.
pub fn infer_numbers(column: &Column, options: &CleaningOptions) -> Option<NumericInference> {
    if !column.is_text() {
        return None;
    }

    let name = column.name.as_str();
    let forced = is_forced_numeric(name);
    if !forced {
        if name.contains("id") || contains_any(name, &TEXT_KEYWORDS) {
            return None;
        }
        let sample = column.text_sample(options.sample_size);
        if sample.is_empty()
            || hit_rate(&sample, |value| value.chars().any(|ch| ch.is_ascii_digit()))
                < options.thresholds.sample_hit_rate
        {
            return None;
        }
    }

    let (candidate, ranges) = build_candidate(column);
    let threshold = options.thresholds.for_column(forced);
    if !candidate.is_accepted(threshold) {
        tracing::debug!(
            column = %column.name,
            forced,
            ratio = candidate.ratio(),
            threshold,
            "numeric conversion rejected"
        );
        return None;
    }

    tracing::debug!(
        column = %column.name,
        forced,
        parsed = candidate.converted,
        ranges,
        ratio = candidate.ratio(),
        threshold,
        "numeric conversion accepted"
    );
    Some(NumericInference {
        values: candidate.values,
        parsed: candidate.converted,
        ranges,
    })
}

fn build_candidate(column: &Column) -> (Candidate, usize) {
    let mut converted = 0;
    let mut attempted = 0;
    let mut ranges = 0;
    let values = column
        .values
        .iter()
        .map(|value| {
            let CellValue::Text(text) = value else {
                return value.clone();
            };
            attempted += 1;
            let token = parse_numeric_token(text);
            if matches!(token, NumericToken::Range(_)) {
                ranges += 1;
            }
            match token.value() {
                Some(number) => {
                    converted += 1;
                    CellValue::Number(number)
                }
                None => CellValue::Missing,
            }
        })
        .collect();
    (
        Candidate {
            values,
            converted,
            attempted,
        },
        ranges,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `parsed` numeric cells followed by `text` cells without digits.
    fn mixed(name: &str, parsed: usize, text: usize) -> Column {
        let mut raw: Vec<Option<String>> = (0..parsed).map(|i| Some(format!("{i}.5"))).collect();
        raw.extend((0..text).map(|_| Some("call us".to_string())));
        Column::from_raw(name, raw)
    }

    #[test]
    fn test_forced_threshold_accepts_35_percent() {
        let column = mixed("total_price", 7, 13);
        let inferred = infer_numbers(&column, &CleaningOptions::default()).unwrap();
        assert_eq!(inferred.parsed, 7);
        assert_eq!(inferred.values[0], CellValue::Number(0.5));
        assert!(inferred.values[19].is_missing());
    }

    #[test]
    fn test_unforced_threshold_rejects_35_percent() {
        let column = mixed("misc", 7, 13);
        assert_eq!(infer_numbers(&column, &CleaningOptions::default()), None);
    }

    #[test]
    fn test_unforced_column_accepts_mostly_numeric() {
        let column = mixed("weight", 8, 2);
        let inferred = infer_numbers(&column, &CleaningOptions::default()).unwrap();
        assert_eq!(inferred.parsed, 8);
        assert_eq!(inferred.ranges, 0);
    }

    #[test]
    fn test_shapes_in_forced_column() {
        let column = Column::from_raw(
            "quantity",
            vec![
                Some("2-3"),
                Some("(12.34)"),
                Some("10%"),
                Some("$1,200"),
                Some("$1,200.00"),
                None,
            ],
        );
        let inferred = infer_numbers(&column, &CleaningOptions::default()).unwrap();
        assert_eq!(inferred.parsed, 5);
        assert_eq!(inferred.ranges, 1);
        assert_eq!(inferred.values[0], CellValue::Number(2.5));
        assert_eq!(inferred.values[1], CellValue::Number(-12.34));
        let percent = inferred.values[2].as_number().unwrap();
        assert!((percent - 0.10).abs() < 1e-12);
        // a lone `digits,digits` comma is a decimal point
        assert_eq!(inferred.values[3], CellValue::Number(1.2));
        assert_eq!(inferred.values[4], CellValue::Number(1200.0));
        assert!(inferred.values[5].is_missing());
    }

    #[test]
    fn test_name_exclusions() {
        let ids = Column::from_raw("order_id", vec![Some("1001"), Some("1002")]);
        assert_eq!(infer_numbers(&ids, &CleaningOptions::default()), None);
        // keyword containment is literal: "valid" contains "id"
        let valid = Column::from_raw("valid", vec![Some("1"), Some("0")]);
        assert_eq!(infer_numbers(&valid, &CleaningOptions::default()), None);
        let phones = Column::from_raw("phone", vec![Some("5551234567")]);
        assert_eq!(infer_numbers(&phones, &CleaningOptions::default()), None);
    }

    #[test]
    fn test_forced_keyword_beats_exclusions() {
        let column = Column::from_raw("product_price", vec![Some("9.99")]);
        let inferred = infer_numbers(&column, &CleaningOptions::default()).unwrap();
        assert_eq!(inferred.values[0], CellValue::Number(9.99));
    }

    #[test]
    fn test_all_missing_forced_column_is_skipped() {
        let column = Column::from_raw::<String>("total", vec![None, None]);
        assert_eq!(infer_numbers(&column, &CleaningOptions::default()), None);
    }
}
