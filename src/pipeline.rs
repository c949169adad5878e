//! Consolidation pipeline
//!
//! Runs the three stages in order against one [`Config`]:
//! 1. Load the products and sellers masters
//! 2. Apply every sales file to the loaded entities
//! 3. Rank the entities and write both reports
//!
//! The pipeline owns the entity collections for the whole run. Any fatal
//! error stops it before the reports are written.

use crate::config::Config;
use crate::core::report::{write_product_report_file, write_seller_report_file};
use crate::core::{load_master_data, CorrelationStats, Diagnostics, MasterData, SalesCorrelator};
use crate::types::ReportError;
use log::{info, warn};
use std::fmt;
use std::path::PathBuf;

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub products_loaded: usize,
    pub sellers_loaded: usize,
    pub sales: CorrelationStats,
    /// Findings recorded in lenient mode (and the non-fatal "no sales files")
    pub warnings: usize,
    pub seller_report: PathBuf,
    pub product_report: PathBuf,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Loaded {} products and {} sellers",
            self.products_loaded, self.sellers_loaded
        )?;
        writeln!(
            f,
            "Sales files: {} processed, {} skipped",
            self.sales.files_processed, self.sales.files_skipped
        )?;
        writeln!(
            f,
            "Sale lines: {} accepted, {} rejected",
            self.sales.lines_accepted, self.sales.lines_rejected
        )?;
        writeln!(f, "Warnings: {}", self.warnings)?;
        writeln!(f, "Seller report: {}", self.seller_report.display())?;
        write!(f, "Product report: {}", self.product_report.display())
    }
}

/// Run the whole consolidation described by `config`
///
/// # Errors
///
/// Returns the first fatal [`ReportError`]: an I/O failure, an empty master
/// file, or any validation finding when `config.strict_mode` is set.
pub fn run(config: &Config) -> Result<RunSummary, ReportError> {
    let mut diagnostics = Diagnostics::new(config.policy());
    info!(
        "consolidating sales in {} ({:?} mode)",
        config.data_dir.display(),
        diagnostics.policy()
    );

    let MasterData {
        mut products,
        mut sellers,
    } = load_master_data(
        &config.products_path(),
        &config.sellers_path(),
        &mut diagnostics,
    )?;

    let sales = SalesCorrelator::new(&mut products, &mut sellers, &mut diagnostics)
        .run(&config.data_dir)?;

    let seller_report = config.seller_report_path();
    let product_report = config.product_report_path();
    write_seller_report_file(&seller_report, &sellers)?;
    write_product_report_file(&product_report, &products)?;

    if diagnostics.count() > 0 {
        warn!("completed with {} warning(s)", diagnostics.count());
    }

    Ok(RunSummary {
        products_loaded: products.len(),
        sellers_loaded: sellers.len(),
        sales,
        warnings: diagnostics.count(),
        seller_report,
        product_report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn data_dir(files: &[(&str, &str)]) -> TempDir {
        let dir = TempDir::new().expect("Failed to create temp dir");
        for (name, content) in files {
            fs::write(dir.path().join(name), content).expect("Failed to write fixture");
        }
        dir
    }

    #[test]
    fn test_run_writes_both_reports() {
        let dir = data_dir(&[
            ("productos.csv", "1;Widget;100\n"),
            ("vendedores.csv", "CC;1000;Ana;Ruiz\n"),
            ("ventas_CC_1000.csv", "CC;1000\n1;3\n1;2\n"),
        ]);

        let summary = run(&Config::new(dir.path())).unwrap();

        assert_eq!(
            fs::read_to_string(&summary.seller_report).unwrap(),
            "Ana Ruiz;500"
        );
        assert_eq!(
            fs::read_to_string(&summary.product_report).unwrap(),
            "Widget;100;5"
        );
        assert_eq!(summary.sales.lines_accepted, 2);
        assert_eq!(summary.warnings, 0);
    }

    #[test]
    fn test_strict_abort_writes_no_report() {
        let dir = data_dir(&[
            ("productos.csv", "1;Widget;100\n"),
            ("vendedores.csv", "CC;1000;Ana;Ruiz\n"),
            ("ventas_CC_1000.csv", "CC;1000\n7;1\n"),
        ]);
        let config = Config::new(dir.path());

        assert!(matches!(
            run(&config),
            Err(ReportError::StrictModeAbort(_))
        ));
        assert!(!config.seller_report_path().exists());
        assert!(!config.product_report_path().exists());
    }

    #[test]
    fn test_summary_display() {
        let summary = RunSummary {
            products_loaded: 2,
            sellers_loaded: 1,
            sales: CorrelationStats {
                files_processed: 1,
                files_skipped: 1,
                lines_accepted: 4,
                lines_rejected: 2,
            },
            warnings: 3,
            seller_report: PathBuf::from("out/s.csv"),
            product_report: PathBuf::from("out/p.csv"),
        };

        assert_eq!(
            summary.to_string(),
            "Loaded 2 products and 1 sellers\n\
             Sales files: 1 processed, 1 skipped\n\
             Sale lines: 4 accepted, 2 rejected\n\
             Warnings: 3\n\
             Seller report: out/s.csv\n\
             Product report: out/p.csv"
        );
    }
}
