//! Command-line front end for the CSV cleaning engine.
//!
//! The `tidy-csv` binary is a thin wrapper over these modules so the
//! commands can be driven from integration tests.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
