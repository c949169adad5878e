//! Core business logic module
//!
//! This module contains the validation-and-aggregation components:
//! - `policy` - Strict/lenient handling of validation findings
//! - `loader` - Products and sellers master loading
//! - `correlator` - Sales file processing and accumulation
//! - `report` - Ranking and report output

pub mod correlator;
pub mod loader;
pub mod policy;
pub mod report;

pub use correlator::{CorrelationStats, SalesCorrelator};
pub use loader::{load_master_data, MasterData};
pub use policy::{Diagnostics, ErrorPolicy};

use std::path::Path;

/// Name used for `path` in diagnostics: the file name when there is one
pub(crate) fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
