//! I/O module
//!
//! Handles flat-file parsing and report output.
//!
//! # Components
//!
//! - `csv_format` - Record format handling (row structs, conversion to
//!   domain types, the round-trip account representation)
//! - `reader` - File readers for the three data sources
//! - `report` - The account report printer

pub mod csv_format;
pub mod reader;
pub mod report;

pub use csv_format::{convert_account_row, format_account_record, AccountRow, LinkRow, OwnerRow};
pub use report::write_report;
