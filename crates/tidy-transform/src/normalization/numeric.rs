//! Numeric cell parsing: currency, ranges, percentages, accounting negatives.

use std::sync::LazyLock;

use regex::Regex;

/// Currency symbols and ISO-style currency words stripped before parsing.
static CURRENCY_TOKENS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)us\$|usd|eur|gbp|cad|aud|chf|cny|rmb|jpy|inr|[$€£¥₹]")
        .expect("Invalid currency regex")
});

static RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+(?:\.\d+)?)-(\d+(?:\.\d+)?)$").expect("Invalid range regex")
});

static PERCENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(-?\d+(?:\.\d+)?)%$").expect("Invalid percent regex"));

static COMMA_DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+,\d+$").expect("Invalid comma-decimal regex"));

/// Outcome of parsing one cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericToken {
    /// A plain decimal number.
    Number(f64),
    /// `low-high`, resolved to the midpoint.
    Range(f64),
    /// `n%`, resolved to `n / 100`.
    Percent(f64),
    Invalid,
}

impl NumericToken {
    pub fn value(self) -> Option<f64> {
        match self {
            NumericToken::Number(value)
            | NumericToken::Range(value)
            | NumericToken::Percent(value) => Some(value),
            NumericToken::Invalid => None,
        }
    }
}

/// Reduces a cell to the characters that matter for numeric parsing.
///
/// Whitespace and currency tokens are removed, then everything except
/// digits, `,`, `.`, `-`, `%`, `(` and `)`. A fully parenthesized value
/// becomes negative: `(12.34)` -> `-12.34`.
pub fn clean_numeric_text(raw: &str) -> String {
    let compact: String = raw.chars().filter(|ch| !ch.is_whitespace()).collect();
    let without_currency = CURRENCY_TOKENS.replace_all(&compact, "");
    let kept: String = without_currency
        .chars()
        .filter(|ch| ch.is_ascii_digit() || matches!(ch, ',' | '.' | '-' | '%' | '(' | ')'))
        .collect();
    match kept.strip_prefix('(').and_then(|rest| rest.strip_suffix(')')) {
        Some(inner) if !inner.is_empty() => format!("-{inner}"),
        _ => kept,
    }
}

/// Parses one cell.
///
/// Shapes are checked in priority order: range, percent, then plain number
/// (where `digits,digits` reads the comma as a decimal point and any other
/// comma is a thousands separator).
pub fn parse_numeric_token(raw: &str) -> NumericToken {
    let cleaned = clean_numeric_text(raw);

    if let Some(caps) = RANGE.captures(&cleaned) {
        return match (caps[1].parse::<f64>(), caps[2].parse::<f64>()) {
            (Ok(low), Ok(high)) => NumericToken::Range((low + high) / 2.0),
            _ => NumericToken::Invalid,
        };
    }

    if let Some(caps) = PERCENT.captures(&cleaned) {
        return caps[1]
            .parse::<f64>()
            .map_or(NumericToken::Invalid, |value| {
                NumericToken::Percent(value / 100.0)
            });
    }

    let decimal = if COMMA_DECIMAL.is_match(&cleaned) {
        cleaned.replace(',', ".")
    } else {
        cleaned.replace(',', "")
    };
    match decimal.parse::<f64>() {
        Ok(value) if value.is_finite() => NumericToken::Number(value),
        _ => NumericToken::Invalid,
    }
}
