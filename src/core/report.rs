//! Report building
//!
//! Ranks the final entity state and writes the two summary reports:
//! - sellers by total revenue, descending, ties by ascending document number
//! - products by units sold, descending, ties by ascending product id
//!
//! The secondary keys make the output independent of map iteration order.

use crate::io::csv_format::{write_product_report, write_seller_report};
use crate::io::report_writer::write_report_file;
use crate::types::{Product, ProductCatalog, ReportError, Seller, SellerRegistry};
use log::info;
use std::path::Path;

/// Sellers ordered for the seller report
pub fn rank_sellers(sellers: &SellerRegistry) -> Vec<&Seller> {
    let mut ranked: Vec<&Seller> = sellers.values().collect();
    ranked.sort_by(|a, b| {
        b.total_revenue()
            .cmp(&a.total_revenue())
            .then_with(|| a.document().cmp(&b.document()))
    });
    ranked
}

/// Products ordered for the product report
pub fn rank_products(products: &ProductCatalog) -> Vec<&Product> {
    let mut ranked: Vec<&Product> = products.values().collect();
    ranked.sort_by(|a, b| {
        b.units_sold()
            .cmp(&a.units_sold())
            .then_with(|| a.id().cmp(&b.id()))
    });
    ranked
}

/// Write `FullName;TotalRevenue` lines to `path`
pub fn write_seller_report_file(path: &Path, sellers: &SellerRegistry) -> Result<(), ReportError> {
    let ranked = rank_sellers(sellers);
    write_report_file(path, |out| write_seller_report(&ranked, out))?;
    info!("wrote {} sellers to {}", ranked.len(), path.display());
    Ok(())
}

/// Write `ProductName;UnitPrice;UnitsSold` lines to `path`
pub fn write_product_report_file(
    path: &Path,
    products: &ProductCatalog,
) -> Result<(), ReportError> {
    let ranked = rank_products(products);
    write_report_file(path, |out| write_product_report(&ranked, out))?;
    info!("wrote {} products to {}", ranked.len(), path.display());
    Ok(())
}
