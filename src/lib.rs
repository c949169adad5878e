//! Sales Consolidator Library
//! # Overview
//!
//! This library reads `;`-delimited master files describing products and
//! sellers, applies per-seller sales files to them, and writes two ranked
//! summary reports.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Product, Seller, Diagnostic, ReportError)
//! - [`cli`] - CLI arguments parsing
//! - [`config`] - Run configuration passed to the pipeline
//! - [`core`] - Business logic components:
//!   - [`core::loader`] - Master record loading and validation
//!   - [`core::correlator`] - Sales file processing and accumulation
//!   - [`core::report`] - Ranking and report output
//!   - [`core::policy`] - Strict/lenient handling of validation findings
//! - [`io`] - Delimited input reading and report serialization
//! - [`pipeline`] - The end-to-end run
//!
//! # Input Files
//!
//! - **Products**: `ProductId;Name;UnitPrice`
//! - **Sellers**: `DocumentType;DocumentNumber;FirstName;LastName`
//! - **Sales** (`ventas_*.csv`): a `DocumentType;DocumentNumber` header,
//!   then `ProductId;Quantity` lines
//!
//! # Reports
//!
//! - **Sellers**: `FullName;TotalRevenue`, by revenue descending
//! - **Products**: `ProductName;UnitPrice;UnitsSold`, by units sold descending
//!
//! # Error Policy
//!
//! In strict mode (the default) the first invalid record aborts the run. In
//! lenient mode invalid records are logged and skipped.

// Module declarations
pub mod cli;
pub mod config;
pub mod core;
pub mod io;
pub mod pipeline;
pub mod types;

pub use crate::config::Config;
pub use crate::core::{Diagnostics, ErrorPolicy, SalesCorrelator};
pub use crate::pipeline::{run, RunSummary};
pub use crate::types::{
    Diagnostic, DiagnosticKind, DocumentNumber, Product, ProductCatalog, ProductId, ReportError,
    Seller, SellerRegistry,
};
