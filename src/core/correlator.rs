//! Sales correlation
//!
//! This module provides the SalesCorrelator that applies every `ventas_*.csv`
//! file in the data directory to the loaded master data.
//!
//! Each sales file starts with a header binding it to a seller
//! (`DocumentType;DocumentNumber`), followed by `ProductId;Quantity` lines.
//! The correlator enforces:
//! - Deterministic order: files are processed sorted by file name
//! - File-level rejection: empty file, malformed header, unknown seller
//! - Line-level rejection, checked in this order: incomplete line, invalid
//!   product id, invalid quantity, unknown product, accumulator overflow
//! - Consolidation: totals accumulate across all files of a run
//!
//! Rejections go through the diagnostics policy; in lenient mode only the
//! offending file or line is skipped.

use crate::core::policy::Diagnostics;
use crate::core::source_name;
use crate::io::csv_format::parse_positive;
use crate::io::sync_reader::{DelimitedLine, SyncReader};
use crate::types::{
    Diagnostic, DiagnosticKind, DocumentNumber, ProductCatalog, ProductId, ReportError,
    SellerRegistry,
};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// File name prefix of a sales file
pub const SALES_FILE_PREFIX: &str = "ventas_";

/// File name suffix of a sales file
pub const SALES_FILE_SUFFIX: &str = ".csv";

/// Whether `file_name` matches `ventas_*.csv`
pub fn is_sales_file(file_name: &str) -> bool {
    file_name.len() >= SALES_FILE_PREFIX.len() + SALES_FILE_SUFFIX.len()
        && file_name.starts_with(SALES_FILE_PREFIX)
        && file_name.ends_with(SALES_FILE_SUFFIX)
}

/// List the sales files of `data_dir`, sorted by file name
///
/// # Errors
///
/// Returns [`ReportError::FileNotFound`] if the directory does not exist and
/// [`ReportError::Io`] if it cannot be listed.
pub fn discover_sales_files(data_dir: &Path) -> Result<Vec<PathBuf>, ReportError> {
    let entries = fs::read_dir(data_dir).map_err(|e| ReportError::from_io(data_dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ReportError::io(data_dir, e))?;
        let path = entry.path();
        let matches = entry.file_name().to_str().is_some_and(is_sales_file);
        if matches && path.is_file() {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Counters for one correlation pass
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CorrelationStats {
    /// Sales files whose header was accepted
    pub files_processed: usize,
    /// Sales files rejected as a whole
    pub files_skipped: usize,
    pub lines_accepted: usize,
    pub lines_rejected: usize,
}

/// Applies sales files to the master data
///
/// Holds the only mutable access to the product and seller accumulators for
/// the duration of a run.
pub struct SalesCorrelator<'a> {
    products: &'a mut ProductCatalog,
    sellers: &'a mut SellerRegistry,
    diagnostics: &'a mut Diagnostics,
    stats: CorrelationStats,
}

impl<'a> SalesCorrelator<'a> {
    pub fn new(
        products: &'a mut ProductCatalog,
        sellers: &'a mut SellerRegistry,
        diagnostics: &'a mut Diagnostics,
    ) -> Self {
        SalesCorrelator {
            products,
            sellers,
            diagnostics,
            stats: CorrelationStats::default(),
        }
    }

    /// Process every sales file of `data_dir`
    ///
    /// Finding no sales file at all is reported but never fatal: the reports
    /// are then built from the masters with zero totals.
    ///
    /// # Errors
    ///
    /// Fails on I/O errors and on the first strict-mode diagnostic.
    pub fn run(mut self, data_dir: &Path) -> Result<CorrelationStats, ReportError> {
        let files = discover_sales_files(data_dir)?;

        if files.is_empty() {
            self.diagnostics.note(Diagnostic::new(
                DiagnosticKind::NoSalesFiles,
                data_dir.display().to_string(),
                0,
                format!(
                    "no {}*{} sales files found",
                    SALES_FILE_PREFIX, SALES_FILE_SUFFIX
                ),
            ));
            return Ok(self.stats);
        }

        info!("processing {} sales files", files.len());
        for path in &files {
            self.process_file(path)?;
        }

        Ok(self.stats)
    }

    /// Process one sales file
    pub fn process_file(&mut self, path: &Path) -> Result<(), ReportError> {
        let source = source_name(path);
        let mut lines = SyncReader::new(path)?;

        let header = match lines.next().transpose()? {
            Some(header) => header,
            None => {
                return self.skip_file(Diagnostic::new(
                    DiagnosticKind::EmptySalesFile,
                    &source,
                    0,
                    "empty sales file",
                ));
            }
        };

        let document = match self.resolve_seller(&header, &source) {
            Ok(document) => document,
            Err(diagnostic) => return self.skip_file(diagnostic),
        };

        self.stats.files_processed += 1;
        debug!("{}: sales for seller {}", source, document);

        for line in lines {
            let line = line?;
            match self.apply_line(document, &line, &source) {
                Ok(()) => self.stats.lines_accepted += 1,
                Err(diagnostic) => {
                    self.stats.lines_rejected += 1;
                    self.diagnostics.warn(diagnostic)?;
                }
            }
        }

        Ok(())
    }

    /// Statistics accumulated so far
    pub fn stats(&self) -> CorrelationStats {
        self.stats
    }

    fn skip_file(&mut self, diagnostic: Diagnostic) -> Result<(), ReportError> {
        self.stats.files_skipped += 1;
        self.diagnostics.warn(diagnostic)
    }

    /// Validate the header and return the seller's document number
    fn resolve_seller(
        &self,
        header: &DelimitedLine,
        source: &str,
    ) -> Result<DocumentNumber, Diagnostic> {
        let reject = |kind, message: String| Diagnostic::new(kind, source, header.number, message);

        let field = header.field(1).ok_or_else(|| {
            reject(
                DiagnosticKind::MalformedSalesHeader,
                format!(
                    "malformed sales header: expected 2 fields, found {}",
                    header.len()
                ),
            )
        })?;

        let document = parse_positive::<DocumentNumber>(field).ok_or_else(|| {
            reject(
                DiagnosticKind::MalformedSalesHeader,
                format!("invalid seller document number '{}'", field),
            )
        })?;

        if !self.sellers.contains_key(&document) {
            return Err(reject(
                DiagnosticKind::UnknownSeller,
                format!("unknown seller document {}", document),
            ));
        }

        Ok(document)
    }

    /// Validate one sale line and apply it to the product and the seller
    ///
    /// Nothing is mutated unless every check passes.
    fn apply_line(
        &mut self,
        document: DocumentNumber,
        line: &DelimitedLine,
        source: &str,
    ) -> Result<(), Diagnostic> {
        let reject = |kind, message: String| Diagnostic::new(kind, source, line.number, message);

        if line.len() < 2 {
            return Err(reject(
                DiagnosticKind::InvalidSaleLine,
                "incomplete sale line".to_string(),
            ));
        }

        let product_id = parse_positive::<ProductId>(&line.fields[0]).ok_or_else(|| {
            reject(
                DiagnosticKind::InvalidSaleLine,
                format!("invalid product id '{}'", line.fields[0]),
            )
        })?;

        let quantity = parse_positive::<u32>(&line.fields[1]).ok_or_else(|| {
            reject(
                DiagnosticKind::InvalidSaleLine,
                format!("invalid quantity '{}'", line.fields[1]),
            )
        })?;

        // Unit prices are unsigned; negative prices are rejected at load time.
        let product = self.products.get_mut(&product_id).ok_or_else(|| {
            reject(
                DiagnosticKind::UnknownProduct,
                format!("unknown product id {}", product_id),
            )
        })?;

        let seller = self.sellers.get_mut(&document).ok_or_else(|| {
            reject(
                DiagnosticKind::UnknownSeller,
                format!("unknown seller document {}", document),
            )
        })?;

        let line_total = u64::from(product.unit_price()) * u64::from(quantity);
        if product.units_after(quantity).is_none() || seller.revenue_after(line_total).is_none() {
            return Err(reject(
                DiagnosticKind::InvalidSaleLine,
                "accumulator overflow".to_string(),
            ));
        }

        product.record_units(quantity);
        seller.record_revenue(line_total);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::policy::ErrorPolicy;
    use crate::types::{Product, Seller};
    use rstest::rstest;
    use tempfile::TempDir;

    fn catalog() -> ProductCatalog {
        [Product::new(1, "Widget", 100), Product::new(2, "Gadget", 250)]
            .into_iter()
            .map(|p| (p.id(), p))
            .collect()
    }

    fn registry() -> SellerRegistry {
        [Seller::new(1000, "Ana", "Ruiz"), Seller::new(1001, "Luis", "Gomez")]
            .into_iter()
            .map(|s| (s.document(), s))
            .collect()
    }

    fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).expect("Failed to write sales file");
        path
    }

    #[rstest]
    #[case::typical("ventas_CC_1000.csv", true)]
    #[case::bare_prefix("ventas_.csv", true)]
    #[case::no_underscore("ventas.csv", false)]
    #[case::other_extension("ventas_CC_1000.txt", false)]
    #[case::report("reporte_vendedores.csv", false)]
    #[case::uppercase("VENTAS_CC_1000.csv", false)]
    fn test_is_sales_file(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(is_sales_file(name), expected);
    }

    #[test]
    fn test_discover_sales_files_sorted_and_filtered() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "ventas_b.csv", "");
        write_file(&dir, "ventas_a.csv", "");
        write_file(&dir, "productos.csv", "");
        write_file(&dir, "ventas_c.txt", "");
        fs::create_dir(dir.path().join("ventas_dir.csv")).unwrap();

        let files = discover_sales_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();

        assert_eq!(names, vec!["ventas_a.csv", "ventas_b.csv"]);
    }

    #[test]
    fn test_discover_sales_files_missing_directory() {
        let dir = TempDir::new().unwrap();
        let result = discover_sales_files(&dir.path().join("missing"));
        assert!(matches!(result, Err(ReportError::FileNotFound { .. })));
    }

    #[test]
    fn test_run_accumulates_across_lines() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "ventas_CC_1000.csv", "CC;1000\n1;3\n1;2\n");
        let (mut products, mut sellers) = (catalog(), registry());
        let mut diagnostics = Diagnostics::new(ErrorPolicy::Strict);

        let stats = SalesCorrelator::new(&mut products, &mut sellers, &mut diagnostics)
            .run(dir.path())
            .unwrap();

        assert_eq!(sellers[&1000].total_revenue(), 500);
        assert_eq!(products[&1].units_sold(), 5);
        assert_eq!(stats.files_processed, 1);
        assert_eq!(stats.lines_accepted, 2);
        assert_eq!(diagnostics.count(), 0);
    }

    #[test]
    fn test_run_consolidates_across_files() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "ventas_CC_1000_a.csv", "CC;1000\n2;1\n");
        write_file(&dir, "ventas_CC_1000_b.csv", "CC;1000\n2;2\n1;1\n");
        write_file(&dir, "ventas_CC_1001.csv", "CC;1001\n2;4\n");
        let (mut products, mut sellers) = (catalog(), registry());
        let mut diagnostics = Diagnostics::default();

        SalesCorrelator::new(&mut products, &mut sellers, &mut diagnostics)
            .run(dir.path())
            .unwrap();

        assert_eq!(sellers[&1000].total_revenue(), 3 * 250 + 100);
        assert_eq!(sellers[&1001].total_revenue(), 4 * 250);
        assert_eq!(products[&2].units_sold(), 7);
        assert_eq!(products[&1].units_sold(), 1);
    }

    #[test]
    fn test_run_without_sales_files_is_not_fatal_in_strict_mode() {
        let dir = TempDir::new().unwrap();
        let (mut products, mut sellers) = (catalog(), registry());
        let mut diagnostics = Diagnostics::new(ErrorPolicy::Strict);

        let stats = SalesCorrelator::new(&mut products, &mut sellers, &mut diagnostics)
            .run(dir.path())
            .unwrap();

        assert_eq!(stats, CorrelationStats::default());
        assert_eq!(diagnostics.count_of(DiagnosticKind::NoSalesFiles), 1);
        assert_eq!((products, sellers), (catalog(), registry()));
    }

    #[rstest]
    #[case::empty_file("", DiagnosticKind::EmptySalesFile, 0)]
    #[case::blank_file("\n  \n", DiagnosticKind::EmptySalesFile, 0)]
    #[case::short_header("CC\n1;1\n", DiagnosticKind::MalformedSalesHeader, 1)]
    #[case::bad_document("CC;abc\n1;1\n", DiagnosticKind::MalformedSalesHeader, 1)]
    #[case::zero_document("CC;0\n1;1\n", DiagnosticKind::MalformedSalesHeader, 1)]
    #[case::unknown_seller("\nCC;9999\n1;1\n", DiagnosticKind::UnknownSeller, 2)]
    fn test_file_level_rejection_skips_whole_file(
        #[case] content: &str,
        #[case] kind: DiagnosticKind,
        #[case] line: u64,
    ) {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "ventas_CC_9999.csv", content);
        let (mut products, mut sellers) = (catalog(), registry());
        let mut diagnostics = Diagnostics::new(ErrorPolicy::Lenient);

        let mut correlator = SalesCorrelator::new(&mut products, &mut sellers, &mut diagnostics);
        correlator.process_file(&path).unwrap();
        let stats = correlator.stats();

        assert_eq!(stats.files_skipped, 1);
        assert_eq!(stats.files_processed, 0);
        assert_eq!((products, sellers), (catalog(), registry()));
        assert_eq!(diagnostics.count(), 1);
        assert_eq!(diagnostics.last().unwrap().kind, kind);
        assert_eq!(diagnostics.last().unwrap().line, line);
        assert_eq!(diagnostics.last().unwrap().source, "ventas_CC_9999.csv");
    }

    #[rstest]
    #[case::incomplete("1", DiagnosticKind::InvalidSaleLine, "incomplete sale line")]
    #[case::bad_product_id("x;2", DiagnosticKind::InvalidSaleLine, "invalid product id 'x'")]
    #[case::zero_product_id("0;2", DiagnosticKind::InvalidSaleLine, "invalid product id '0'")]
    #[case::zero_quantity("1;0", DiagnosticKind::InvalidSaleLine, "invalid quantity '0'")]
    #[case::negative_quantity("1;-2", DiagnosticKind::InvalidSaleLine, "invalid quantity '-2'")]
    #[case::id_checked_before_quantity(
        "x;y",
        DiagnosticKind::InvalidSaleLine,
        "invalid product id 'x'"
    )]
    #[case::quantity_checked_before_lookup(
        "99;y",
        DiagnosticKind::InvalidSaleLine,
        "invalid quantity 'y'"
    )]
    #[case::unknown_product("99;2", DiagnosticKind::UnknownProduct, "unknown product id 99")]
    fn test_line_rejection_skips_only_that_line(
        #[case] bad_line: &str,
        #[case] kind: DiagnosticKind,
        #[case] message: &str,
    ) {
        let dir = TempDir::new().unwrap();
        let content = format!("CC;1000\n1;1\n{}\n2;2\n", bad_line);
        let path = write_file(&dir, "ventas_CC_1000.csv", &content);
        let (mut products, mut sellers) = (catalog(), registry());
        let mut diagnostics = Diagnostics::new(ErrorPolicy::Lenient);

        let mut correlator = SalesCorrelator::new(&mut products, &mut sellers, &mut diagnostics);
        correlator.process_file(&path).unwrap();
        let stats = correlator.stats();

        assert_eq!(stats.lines_accepted, 2);
        assert_eq!(stats.lines_rejected, 1);
        assert_eq!(sellers[&1000].total_revenue(), 100 + 2 * 250);
        assert_eq!(products[&1].units_sold(), 1);
        assert_eq!(products[&2].units_sold(), 2);

        let diagnostic = diagnostics.last().unwrap();
        assert_eq!(diagnostic.kind, kind);
        assert_eq!(diagnostic.line, 3);
        assert_eq!(diagnostic.message, message);
    }

    #[test]
    fn test_strict_mode_aborts_on_first_bad_line() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "ventas_CC_1000.csv", "CC;1000\n1;1\n99;1\n1;1\n");
        let (mut products, mut sellers) = (catalog(), registry());
        let mut diagnostics = Diagnostics::new(ErrorPolicy::Strict);

        let result = SalesCorrelator::new(&mut products, &mut sellers, &mut diagnostics)
            .run(dir.path());

        match result {
            Err(ReportError::StrictModeAbort(diagnostic)) => {
                assert_eq!(diagnostic.kind, DiagnosticKind::UnknownProduct);
                assert_eq!(diagnostic.line, 3);
            }
            other => panic!("Expected strict mode abort, got {:?}", other),
        }
    }

    #[test]
    fn test_strict_mode_aborts_on_unknown_seller() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "ventas_CC_9999.csv", "CC;9999\n1;1\n");
        let (mut products, mut sellers) = (catalog(), registry());
        let mut diagnostics = Diagnostics::new(ErrorPolicy::Strict);

        let result = SalesCorrelator::new(&mut products, &mut sellers, &mut diagnostics)
            .run(dir.path());

        assert!(matches!(
            result,
            Err(ReportError::StrictModeAbort(Diagnostic {
                kind: DiagnosticKind::UnknownSeller,
                ..
            }))
        ));
    }

    #[test]
    fn test_large_line_totals_use_wide_arithmetic() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "ventas_CC_1000.csv", "CC;1000\n1;4000000000\n");
        let mut products: ProductCatalog =
            [(1, Product::new(1, "Server", 4_000_000_000))].into_iter().collect();
        let mut sellers = registry();
        let mut diagnostics = Diagnostics::default();

        SalesCorrelator::new(&mut products, &mut sellers, &mut diagnostics)
            .run(dir.path())
            .unwrap();

        assert_eq!(sellers[&1000].total_revenue(), 16_000_000_000_000_000_000);
        assert_eq!(products[&1].units_sold(), 4_000_000_000);
    }

    #[test]
    fn test_accumulator_overflow_leaves_both_entities_untouched() {
        let dir = TempDir::new().unwrap();
        let mut content = String::from("CC;1000\n");
        // Two lines of 1.6e19 each exceed u64::MAX (about 1.8e19).
        content.push_str("1;4000000000\n1;4000000000\n");
        write_file(&dir, "ventas_CC_1000.csv", &content);
        let mut products: ProductCatalog =
            [(1, Product::new(1, "Server", 4_000_000_000))].into_iter().collect();
        let mut sellers = registry();
        let mut diagnostics = Diagnostics::new(ErrorPolicy::Lenient);

        let stats = SalesCorrelator::new(&mut products, &mut sellers, &mut diagnostics)
            .run(dir.path())
            .unwrap();

        assert_eq!(stats.lines_accepted, 1);
        assert_eq!(stats.lines_rejected, 1);
        assert_eq!(sellers[&1000].total_revenue(), 16_000_000_000_000_000_000);
        assert_eq!(products[&1].units_sold(), 4_000_000_000);
        assert_eq!(diagnostics.last().unwrap().message, "accumulator overflow");
    }
}
