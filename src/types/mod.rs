//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `product`: Product master records and their units-sold accumulator
//! - `seller`: Seller master records and their revenue accumulator
//! - `diagnostic`: Recoverable validation findings
//! - `error`: Fatal error types for the consolidator

pub mod diagnostic;
pub mod error;
pub mod product;
pub mod seller;

pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use error::ReportError;
pub use product::{Product, ProductCatalog, ProductId};
pub use seller::{DocumentNumber, Seller, SellerRegistry};
