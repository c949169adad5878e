//! Run configuration
//!
//! Everything a run needs is carried by [`Config`] and passed explicitly to
//! [`crate::pipeline::run`], so separate runs (and tests) can point at
//! different directories side by side.

use crate::core::ErrorPolicy;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_DIR: &str = "datos";
pub const DEFAULT_PRODUCTS_FILE: &str = "productos.csv";
pub const DEFAULT_SELLERS_FILE: &str = "vendedores.csv";
pub const DEFAULT_SELLER_REPORT_FILE: &str = "reporte_vendedores.csv";
pub const DEFAULT_PRODUCT_REPORT_FILE: &str = "reporte_productos.csv";

/// Configuration for one consolidation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the masters and the `ventas_*.csv` files
    pub data_dir: PathBuf,
    /// Products master, relative to `data_dir`
    pub products_file: PathBuf,
    /// Sellers master, relative to `data_dir`
    pub sellers_file: PathBuf,
    /// Report directory; the data directory when `None`
    pub output_dir: Option<PathBuf>,
    /// Seller report, relative to the report directory
    pub seller_report_file: PathBuf,
    /// Product report, relative to the report directory
    pub product_report_file: PathBuf,
    /// Abort on the first validation finding
    pub strict_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config::new(DEFAULT_DATA_DIR)
    }
}

impl Config {
    /// Default file names and strict mode, reading from `data_dir`
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Config {
            data_dir: data_dir.into(),
            products_file: PathBuf::from(DEFAULT_PRODUCTS_FILE),
            sellers_file: PathBuf::from(DEFAULT_SELLERS_FILE),
            output_dir: None,
            seller_report_file: PathBuf::from(DEFAULT_SELLER_REPORT_FILE),
            product_report_file: PathBuf::from(DEFAULT_PRODUCT_REPORT_FILE),
            strict_mode: true,
        }
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(output_dir.into());
        self
    }

    pub fn with_strict_mode(mut self, strict_mode: bool) -> Self {
        self.strict_mode = strict_mode;
        self
    }

    pub fn policy(&self) -> ErrorPolicy {
        ErrorPolicy::from_strict(self.strict_mode)
    }

    pub fn products_path(&self) -> PathBuf {
        self.data_dir.join(&self.products_file)
    }

    pub fn sellers_path(&self) -> PathBuf {
        self.data_dir.join(&self.sellers_file)
    }

    /// Directory the reports are written to
    pub fn report_dir(&self) -> &Path {
        self.output_dir.as_deref().unwrap_or(self.data_dir.as_path())
    }

    pub fn seller_report_path(&self) -> PathBuf {
        self.report_dir().join(&self.seller_report_file)
    }

    pub fn product_report_path(&self) -> PathBuf {
        self.report_dir().join(&self.product_report_file)
    }
}
