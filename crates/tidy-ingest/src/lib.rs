//! Loading of dirty CSV exports.
//!
//! This crate is the load boundary of the cleaning engine. It reads CSV
//! input into a [`tidy_model::Table`] whose cells are raw text or missing,
//! and reports structural failures (unreadable file, broken framing,
//! ragged rows) as [`IngestError`].
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use tidy_ingest::read_csv_table;
//!
//! let table = read_csv_table(Path::new("orders_dirty.csv"))?;
//! ```

mod csv;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use self::csv::{read_csv_reader, read_csv_table};
