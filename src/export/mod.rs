//! Export module
//!
//! Writes the current split in two formats:
//! - CSV: spreadsheet-compatible item list plus a summary block
//! - JSON: machine-readable settlement with versioned schema

pub mod csv;
pub mod json;

pub use csv::export_summary_csv;
pub use json::{export_settlement_json, JsonExport, EXPORT_SCHEMA_VERSION};
