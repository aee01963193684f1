//! Exact duplicate row removal.

use std::collections::BTreeSet;

use tidy_model::{CellKey, CellValue, Table};

/// Removes rows equal, cell for cell, to an earlier row.
///
/// Missing equals missing. The first occurrence is kept and the surviving
/// rows keep their relative order. Returns the number of rows removed.
pub fn remove_duplicate_rows(table: &mut Table) -> usize {
    let keep: Vec<bool> = {
        let mut seen: BTreeSet<Vec<Option<CellKey<'_>>>> = BTreeSet::new();
        (0..table.height())
            .map(|row| {
                let key: Vec<Option<CellKey<'_>>> = table
                    .columns()
                    .iter()
                    .map(|column| column.values.get(row).map(CellValue::key))
                    .collect();
                seen.insert(key)
            })
            .collect()
    };

    let removed = keep.iter().filter(|kept| !**kept).count();
    if removed > 0 {
        table.retain_rows(&keep);
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use tidy_model::Column;

    #[test]
    fn test_keeps_first_occurrence_in_order() {
        let mut table = Table::new(vec![
            Column::from_raw("id", vec![Some("1"), Some("2"), Some("1"), Some("3"), Some("2")]),
            Column::from_raw("note", vec![None, Some("x"), None, Some("y"), Some("x")]),
        ])
        .unwrap();

        assert_eq!(remove_duplicate_rows(&mut table), 2);

        let ids: Vec<_> = table
            .column("id")
            .unwrap()
            .values
            .iter()
            .map(|v| v.as_text().unwrap())
            .collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_typed_values_compare_by_value() {
        let mut table = Table::new(vec![Column::new(
            "n",
            vec![
                CellValue::Number(1.0),
                CellValue::Number(1.0),
                CellValue::from("1"),
            ],
        )])
        .unwrap();
        assert_eq!(remove_duplicate_rows(&mut table), 1);
        assert_eq!(table.height(), 2);
    }

    #[test]
    fn test_no_duplicates() {
        let mut table = Table::new(vec![Column::from_raw("a", vec![Some("1"), Some("2")])]).unwrap();
        assert_eq!(remove_duplicate_rows(&mut table), 0);
        assert_eq!(table.height(), 2);
    }

    #[test]
    fn test_short_column_does_not_panic() {
        let mut table = Table::new(vec![
            Column::from_raw("a", vec![Some("1"), Some("1")]),
            Column::from_raw("b", vec![Some("x"), Some("x")]),
        ])
        .unwrap();
        table.columns_mut()[1].values.pop();

        assert_eq!(remove_duplicate_rows(&mut table), 0);
        assert_eq!(table.height(), 2);
    }
}
