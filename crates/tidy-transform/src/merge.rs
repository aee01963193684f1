//! Duplicate column merge.

use std::collections::BTreeMap;

use tidy_model::{Column, Table};

/// Collapses columns that share a name into the first of them.
///
/// Every later column in a group fills the primary's missing cells row by
/// row; a value already present in the primary is never overwritten. The
/// later columns are then removed. `originals` holds the pre-normalization
/// header of every column, in table order, and the originals of the removed
/// columns are returned in the order they were dropped.
pub fn merge_duplicate_columns(table: &mut Table, originals: &[String]) -> Vec<String> {
    let mut primary_of: BTreeMap<String, usize> = BTreeMap::new();
    let mut keep = vec![true; table.width()];
    let mut dropped = Vec::new();

    for idx in 0..table.width() {
        let name = table.columns()[idx].name.clone();
        if let Some(&primary) = primary_of.get(&name) {
            let (head, tail) = table.columns_mut().split_at_mut(idx);
            fill_missing(&mut head[primary], &tail[0]);
            keep[idx] = false;
            dropped.push(originals.get(idx).cloned().unwrap_or(name));
        } else {
            primary_of.insert(name, idx);
        }
    }

    if !dropped.is_empty() {
        table.retain_columns(&keep);
    }
    dropped
}

fn fill_missing(primary: &mut Column, duplicate: &Column) {
    for (target, source) in primary.values.iter_mut().zip(&duplicate.values) {
        if target.is_missing() && !source.is_missing() {
            *target = source.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tidy_model::CellValue;

    fn table(columns: Vec<Column>) -> Table {
        Table::new(columns).unwrap()
    }

    #[test]
    fn test_first_non_null_wins() {
        let mut t = table(vec![
            Column::from_raw("email", vec![None, Some("a@x.com"), None]),
            Column::from_raw("phone", vec![Some("1"), Some("2"), Some("3")]),
            Column::from_raw("email", vec![Some("b@x.com"), Some("c@x.com"), None]),
        ]);
        let originals = vec!["Email".to_string(), "Phone".to_string(), "E-mail".to_string()];

        let dropped = merge_duplicate_columns(&mut t, &originals);

        assert_eq!(dropped, vec!["E-mail".to_string()]);
        assert_eq!(t.column_names(), vec!["email", "phone"]);
        let email = t.column("email").unwrap();
        assert_eq!(email.values[0].as_text(), Some("b@x.com"));
        assert_eq!(email.values[1].as_text(), Some("a@x.com"));
        assert_eq!(email.values[2], CellValue::Missing);
    }

    #[test]
    fn test_three_way_group() {
        let mut t = table(vec![
            Column::from_raw("a", vec![None::<String>, None]),
            Column::from_raw("a", vec![Some("x"), None]),
            Column::from_raw("a", vec![Some("y"), Some("z")]),
        ]);
        let originals = vec!["A".to_string(), "a ".to_string(), " a".to_string()];
        let dropped = merge_duplicate_columns(&mut t, &originals);
        assert_eq!(dropped, vec!["a ".to_string(), " a".to_string()]);
        assert_eq!(t.width(), 1);
        let a = t.column("a").unwrap();
        assert_eq!(a.values[0].as_text(), Some("x"));
        assert_eq!(a.values[1].as_text(), Some("z"));
    }

    #[test]
    fn test_unique_names_untouched() {
        let mut t = table(vec![
            Column::from_raw("a", vec![Some("1")]),
            Column::from_raw("b", vec![None::<String>]),
        ]);
        let dropped = merge_duplicate_columns(&mut t, &["a".to_string(), "b".to_string()]);
        assert!(dropped.is_empty());
        assert_eq!(t.width(), 2);
    }
}
