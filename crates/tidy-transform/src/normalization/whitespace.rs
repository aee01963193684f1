//! Whitespace normalization for text columns.

use tidy_model::{CellValue, Column};

use super::text::collapse_whitespace;

/// Collapses whitespace in every text cell of a text column.
///
/// Returns `None` when the column is no longer text-typed, otherwise the
/// number of cells whose value changed.
pub fn normalize_whitespace(column: &mut Column) -> Option<usize> {
    if !column.is_text() {
        return None;
    }
    Some(map_text_cells(column, collapse_whitespace))
}

/// Applies `normalize` to every text cell and counts the cells that changed.
pub(crate) fn map_text_cells(column: &mut Column, normalize: impl Fn(&str) -> String) -> usize {
    let mut changed = 0;
    for value in &mut column.values {
        if let CellValue::Text(text) = value {
            let normalized = normalize(text);
            if normalized != *text {
                *text = normalized;
                changed += 1;
            }
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_changed_cells_only() {
        let mut column = Column::from_raw(
            "product",
            vec![Some("  Yoga   Mat "), Some("Desk"), None, Some("Lamp\\t")],
        );
        assert_eq!(normalize_whitespace(&mut column), Some(2));
        assert_eq!(column.values[0].as_text(), Some("Yoga Mat"));
        assert_eq!(column.values[3].as_text(), Some("Lamp"));
        assert!(column.values[2].is_missing());
    }

    #[test]
    fn test_skips_typed_columns() {
        let mut column = Column::new("n", vec![CellValue::Number(1.0)]);
        assert_eq!(normalize_whitespace(&mut column), None);
    }
}
