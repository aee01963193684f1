//! Value-level normalizers.
//!
//! Everything here is a pure function of a header or a single column; the
//! column-wide type inference built on top of the parsers lives in
//! [`crate::inference`].

pub mod datetime;
pub mod domain;
pub mod names;
pub mod nulls;
pub mod numeric;
pub mod text;
pub mod whitespace;

pub use datetime::{DateOrder, looks_like_date, parse_timestamp, parse_timestamp_fallback};
pub use domain::{VALUE_RULES, ValueRule};
pub use names::normalize_column_name;
pub use nulls::{NULL_TOKENS, is_null_token, normalize_nulls};
pub use numeric::{NumericToken, clean_numeric_text, parse_numeric_token};
pub use text::{collapse_whitespace, title_case};
pub use whitespace::normalize_whitespace;
