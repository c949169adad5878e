use crate::config::{
    Config, DEFAULT_DATA_DIR, DEFAULT_PRODUCTS_FILE, DEFAULT_PRODUCT_REPORT_FILE,
    DEFAULT_SELLERS_FILE, DEFAULT_SELLER_REPORT_FILE,
};
use clap::Parser;
use std::path::PathBuf;

/// Consolidate per-seller sales files into ranked seller and product reports
#[derive(Parser, Debug)]
#[command(name = "sales-consolidator")]
#[command(
    about = "Consolidate per-seller sales files into ranked seller and product reports",
    long_about = None
)]
pub struct CliArgs {
    /// Directory containing the master files and the ventas_*.csv sales files
    #[arg(
        value_name = "DATA_DIR",
        default_value = DEFAULT_DATA_DIR,
        help = "Directory with productos.csv, vendedores.csv and ventas_*.csv"
    )]
    pub data_dir: PathBuf,

    /// Products master file name, relative to the data directory
    #[arg(long = "products", value_name = "FILE", default_value = DEFAULT_PRODUCTS_FILE)]
    pub products_file: PathBuf,

    /// Sellers master file name, relative to the data directory
    #[arg(long = "sellers", value_name = "FILE", default_value = DEFAULT_SELLERS_FILE)]
    pub sellers_file: PathBuf,

    /// Directory for the reports (defaults to the data directory)
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Seller report file name, relative to the report directory
    #[arg(
        long = "seller-report",
        value_name = "FILE",
        default_value = DEFAULT_SELLER_REPORT_FILE
    )]
    pub seller_report_file: PathBuf,

    /// Product report file name, relative to the report directory
    #[arg(
        long = "product-report",
        value_name = "FILE",
        default_value = DEFAULT_PRODUCT_REPORT_FILE
    )]
    pub product_report_file: PathBuf,

    /// Skip invalid records with a warning instead of aborting
    #[arg(
        long = "lenient",
        help = "Skip invalid records with a warning instead of aborting the run"
    )]
    pub lenient: bool,
}

impl CliArgs {
    /// Build the run configuration from the parsed arguments
    pub fn to_config(&self) -> Config {
        Config {
            data_dir: self.data_dir.clone(),
            products_file: self.products_file.clone(),
            sellers_file: self.sellers_file.clone(),
            output_dir: self.output_dir.clone(),
            seller_report_file: self.seller_report_file.clone(),
            product_report_file: self.product_report_file.clone(),
            strict_mode: !self.lenient,
        }
    }
}
