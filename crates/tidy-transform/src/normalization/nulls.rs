//! Placeholder/null token normalization.

use tidy_model::{CellValue, Column};

/// Free-text values that mean "no real value". Matched against the trimmed,
/// lower-cased cell text.
pub const NULL_TOKENS: [&str; 16] = [
    "", " ", "  ", "n/a", "na", "null", "none", "nil", "nan", "-", "--", "unknown", "?", "today",
    "yesterday", "tomorrow",
];

/// True when the text is a null placeholder.
pub fn is_null_token(value: &str) -> bool {
    let normalized = value.trim().to_lowercase();
    NULL_TOKENS.contains(&normalized.as_str())
}

/// Turns placeholder text cells into missing cells.
///
/// Returns the net increase in missing cells.
pub fn normalize_nulls(column: &mut Column) -> usize {
    let before = column.missing_count();
    for value in &mut column.values {
        if value.as_text().is_some_and(is_null_token) {
            *value = CellValue::Missing;
        }
    }
    column.missing_count() - before
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_tokens() {
        for token in ["N/A", " null ", "NaN", "-", "--", "?", "Unknown", "TODAY", "   ", ""] {
            assert!(is_null_token(token), "{token:?} should be null");
        }
        for value in ["0", "none given", "n/a2", "anything"] {
            assert!(!is_null_token(value), "{value:?} should not be null");
        }
    }

    #[test]
    fn test_normalize_counts_net_increase() {
        let mut column = Column::from_raw(
            "status",
            vec![Some("N/A"), None, Some("shipped"), Some(" none ")],
        );
        assert_eq!(normalize_nulls(&mut column), 2);
        assert_eq!(column.missing_count(), 3);
        assert_eq!(column.values[2].as_text(), Some("shipped"));
        assert_eq!(normalize_nulls(&mut column), 0);
    }

    #[test]
    fn test_typed_cells_untouched() {
        let mut column = Column::new("n", vec![CellValue::Number(0.0), CellValue::Missing]);
        assert_eq!(normalize_nulls(&mut column), 0);
        assert_eq!(column.values[0], CellValue::Number(0.0));
    }
}
