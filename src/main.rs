//! Sales Consolidator CLI
//!
//! Command-line interface for consolidating seller sales files into reports.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- datos
//! cargo run -- datos --lenient
//! cargo run -- datos --output-dir reports
//! RUST_LOG=debug cargo run -- datos
//! ```
//!
//! The program loads `productos.csv` and `vendedores.csv` from the data
//! directory, applies every `ventas_*.csv` file, and writes
//! `reporte_vendedores.csv` and `reporte_productos.csv`.
//!
//! Diagnostics and logs go to stderr; the run summary goes to stdout.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Fatal error (strict-mode diagnostic, empty master file, I/O failure)

use env_logger::Env;
use log::LevelFilter;
use sales_consolidator::cli;
use sales_consolidator::core::policy::DIAGNOSTICS_TARGET;
use sales_consolidator::pipeline;
use std::process;

fn main() {
    // Validation findings stay visible whatever RUST_LOG filters out.
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .filter_module(DIAGNOSTICS_TARGET, LevelFilter::Warn)
        .init();

    let args = cli::parse_args();
    let config = args.to_config();

    match pipeline::run(&config) {
        Ok(summary) => {
            println!("{}", summary);
            println!("Reports generated in '{}'", config.report_dir().display());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
