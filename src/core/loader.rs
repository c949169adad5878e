//! Master record loading
//!
//! Reads the products and sellers master files into their keyed collections.
//!
//! Every line is validated on its own. A rejected line (wrong field count,
//! unparsable number, empty name, or repeated identity) is reported through
//! the diagnostics policy and never overwrites a record loaded earlier: the
//! first occurrence of an id or document wins.
//!
//! A master file that yields no valid record is always fatal.

use crate::core::policy::Diagnostics;
use crate::core::source_name;
use crate::io::csv_format::{parse_non_negative, parse_positive};
use crate::io::sync_reader::{DelimitedLine, SyncReader};
use crate::types::{
    Diagnostic, DiagnosticKind, DocumentNumber, Product, ProductCatalog, ProductId, ReportError,
    Seller, SellerRegistry,
};
use log::info;
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;
use std::path::Path;

/// `ProductId;Name;UnitPrice`
const PRODUCT_FIELDS: usize = 3;

/// `DocumentType;DocumentNumber;FirstName;LastName`
const SELLER_FIELDS: usize = 4;

/// Both master collections, ready for correlation
#[derive(Debug, Default)]
pub struct MasterData {
    pub products: ProductCatalog,
    pub sellers: SellerRegistry,
}

/// Load products then sellers
///
/// # Errors
///
/// Fails on any I/O error, on a strict-mode diagnostic, or when either file
/// yields zero valid records.
pub fn load_master_data(
    products_path: &Path,
    sellers_path: &Path,
    diagnostics: &mut Diagnostics,
) -> Result<MasterData, ReportError> {
    let products = load_products(products_path, diagnostics)?;
    let sellers = load_sellers(sellers_path, diagnostics)?;
    Ok(MasterData { products, sellers })
}

/// Load the products master file
pub fn load_products(
    path: &Path,
    diagnostics: &mut Diagnostics,
) -> Result<ProductCatalog, ReportError> {
    load_master(
        path,
        diagnostics,
        parse_product,
        Product::id,
        "product id",
        "products",
    )
}

/// Load the sellers master file
pub fn load_sellers(
    path: &Path,
    diagnostics: &mut Diagnostics,
) -> Result<SellerRegistry, ReportError> {
    load_master(
        path,
        diagnostics,
        parse_seller,
        Seller::document,
        "seller document",
        "sellers",
    )
}

/// Read one master file into a map keyed by `key`
///
/// `identity` and `plural` only feed the duplicate diagnostic and the load log.
fn load_master<T, K>(
    path: &Path,
    diagnostics: &mut Diagnostics,
    parse: fn(&DelimitedLine) -> Result<T, String>,
    key: fn(&T) -> K,
    identity: &str,
    plural: &str,
) -> Result<HashMap<K, T>, ReportError>
where
    K: Eq + Hash + Display,
{
    let source = source_name(path);
    let mut records = HashMap::new();

    for line in SyncReader::new(path)? {
        let line = line?;
        let rejection = match parse(&line) {
            Ok(record) if records.contains_key(&key(&record)) => Diagnostic::new(
                DiagnosticKind::DuplicateIdentity,
                &source,
                line.number,
                format!("duplicate {} {}", identity, key(&record)),
            ),
            Ok(record) => {
                records.insert(key(&record), record);
                continue;
            }
            Err(reason) => {
                Diagnostic::new(DiagnosticKind::MalformedRecord, &source, line.number, reason)
            }
        };
        diagnostics.warn(rejection)?;
    }

    if records.is_empty() {
        return Err(ReportError::empty_master_data(&source));
    }

    info!("loaded {} {} from {}", records.len(), plural, source);
    Ok(records)
}

fn parse_product(line: &DelimitedLine) -> Result<Product, String> {
    if line.len() < PRODUCT_FIELDS {
        return Err(format!(
            "expected {} fields, found {}",
            PRODUCT_FIELDS,
            line.len()
        ));
    }

    let id = parse_positive::<ProductId>(&line.fields[0])
        .ok_or_else(|| format!("invalid product id '{}'", line.fields[0]))?;

    let name = &line.fields[1];
    if name.is_empty() {
        return Err("empty product name".to_string());
    }

    let unit_price = parse_non_negative::<u32>(&line.fields[2])
        .ok_or_else(|| format!("invalid unit price '{}'", line.fields[2]))?;

    Ok(Product::new(id, name.as_str(), unit_price))
}

fn parse_seller(line: &DelimitedLine) -> Result<Seller, String> {
    if line.len() < SELLER_FIELDS {
        return Err(format!(
            "expected {} fields, found {}",
            SELLER_FIELDS,
            line.len()
        ));
    }

    // The document type in field 0 is positional only.
    let document = parse_positive::<DocumentNumber>(&line.fields[1])
        .ok_or_else(|| format!("invalid document number '{}'", line.fields[1]))?;

    let (first_name, last_name) = (&line.fields[2], &line.fields[3]);
    if first_name.is_empty() {
        return Err("empty first name".to_string());
    }
    if last_name.is_empty() {
        return Err("empty last name".to_string());
    }

    Ok(Seller::new(document, first_name, last_name))
}
