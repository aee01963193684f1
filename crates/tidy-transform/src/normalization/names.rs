//! Column header canonicalization.

/// Canonicalizes a raw header into a lower-case identifier.
///
/// Outer whitespace is trimmed and inner runs collapse to one space, every
/// character that is neither a word character nor a space is dropped, and
/// the remaining spaces become underscores:
///
/// ```
/// use tidy_transform::normalization::normalize_column_name;
///
/// assert_eq!(normalize_column_name("  Order   ID "), "order_id");
/// assert_eq!(normalize_column_name("Unit Price ($)"), "unit_price_");
/// assert_eq!(normalize_column_name("E-mail"), "email");
/// ```
pub fn normalize_column_name(name: &str) -> String {
    let collapsed = name.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed
        .to_lowercase()
        .chars()
        .filter(|ch| is_word_char(*ch) || *ch == ' ')
        .map(|ch| if ch == ' ' { '_' } else { ch })
        .collect()
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}
