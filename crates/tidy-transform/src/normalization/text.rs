//! Shared text helpers.

/// Replaces escaped tab/newline/carriage-return sequences (the two-character
/// forms `\t`, `\n`, `\r`) with a space, collapses whitespace runs to one
/// space, and trims both ends.
pub fn collapse_whitespace(value: &str) -> String {
    let unescaped = value
        .replace("\\t", " ")
        .replace("\\n", " ")
        .replace("\\r", " ");
    unescaped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Title-cases a value: the first cased letter of every run of letters is
/// upper-cased, the rest lower-cased. Any non-letter starts a new run, so
/// `o'neil` becomes `O'Neil` and `3rd` becomes `3Rd`.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut previous_cased = false;
    for ch in value.chars() {
        let cased = ch.is_lowercase() || ch.is_uppercase();
        if cased {
            if previous_cased {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
        } else {
            out.push(ch);
        }
        previous_cased = cased;
    }
    out
}

/// True when the name contains any of the keywords.
pub fn contains_any(name: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| name.contains(keyword))
}
