//! Field parsing and report serialization
//!
//! This module centralizes the format concerns of the consolidator:
//! - Numeric field parsing shared by the loader and the correlator
//! - Report row structures and their `;`-delimited serialization
//!
//! All functions are pure (no file I/O) for easy testing.

use crate::types::{Product, Seller};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use serde::Serialize;
use std::io::Write;
use std::str::FromStr;

/// Parse a strictly positive integer field
///
/// Returns `None` for anything that is not a number, does not fit `T`, or is
/// zero. Negative input never fits the unsigned types used for identifiers.
pub fn parse_positive<T>(field: &str) -> Option<T>
where
    T: FromStr + PartialOrd + Default,
{
    field.trim().parse::<T>().ok().filter(|v| *v > T::default())
}

/// Parse a non-negative integer field
pub fn parse_non_negative<T>(field: &str) -> Option<T>
where
    T: FromStr,
{
    field.trim().parse::<T>().ok()
}

/// One line of the seller report: `FullName;TotalRevenue`
#[derive(Debug, Serialize)]
struct SellerRow<'a> {
    full_name: &'a str,
    total_revenue: u64,
}

/// One line of the product report: `ProductName;UnitPrice;UnitsSold`
#[derive(Debug, Serialize)]
struct ProductRow<'a> {
    name: &'a str,
    unit_price: u32,
    units_sold: u64,
}

/// Serialize rows as `;`-delimited lines joined by `\n`
///
/// No header row, no quoting, and no newline after the last row. An empty
/// row set produces zero bytes.
fn write_rows<S, I>(rows: I, output: &mut dyn Write) -> Result<(), String>
where
    S: Serialize,
    I: IntoIterator<Item = S>,
{
    let mut writer = WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| format!("Failed to write report row: {}", e))?;
    }

    let mut bytes = writer
        .into_inner()
        .map_err(|e| format!("Failed to flush report: {}", e))?;
    if bytes.last() == Some(&b'\n') {
        bytes.pop();
    }

    output
        .write_all(&bytes)
        .map_err(|e| format!("Failed to write report: {}", e))
}

/// Write the seller report
///
/// Sellers are written in the order given; see
/// [`crate::core::report::rank_sellers`] for the ranking.
pub fn write_seller_report(sellers: &[&Seller], output: &mut dyn Write) -> Result<(), String> {
    write_rows(
        sellers.iter().map(|seller| SellerRow {
            full_name: seller.full_name(),
            total_revenue: seller.total_revenue(),
        }),
        output,
    )
}

/// Write the product report
///
/// Products are written in the order given; see
/// [`crate::core::report::rank_products`] for the ranking.
pub fn write_product_report(products: &[&Product], output: &mut dyn Write) -> Result<(), String> {
    write_rows(
        products.iter().map(|product| ProductRow {
            name: product.name(),
            unit_price: product.unit_price(),
            units_sold: product.units_sold(),
        }),
        output,
    )
}
