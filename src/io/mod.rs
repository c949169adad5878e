//! I/O module
//!
//! Handles delimited input parsing and report output.
//!
//! # Components
//!
//! - `csv_format` - Field parsing and report serialization (no I/O)
//! - `sync_reader` - Synchronous `;`-delimited reader with iterator interface
//! - `report_writer` - Report file creation with parent directory handling

pub mod csv_format;
pub mod report_writer;
pub mod sync_reader;

pub use csv_format::{write_product_report, write_seller_report};
pub use report_writer::write_report_file;
pub use sync_reader::{DelimitedLine, SyncReader};
