//! Output generation for cleaning runs.
//!
//! - **csv**: the cleaned table as CSV
//! - **json**: the structured [`CleaningReport`](tidy_model::CleaningReport)
//! - **text**: the human-readable report

mod common;
mod csv;
mod json;
mod text;

pub use self::csv::{write_csv_table, write_csv_to};
pub use json::{report_to_json, write_json_report};
pub use text::{render_text_report, write_text_report};
