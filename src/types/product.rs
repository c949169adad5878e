//! Product-related types for the sales consolidator
//!
//! This module defines the Product master record and the catalog that maps
//! product identifiers to products.

use std::collections::HashMap;

/// Product identifier
///
/// Strictly positive; zero is rejected at load time.
pub type ProductId = u32;

/// Products keyed by their identifier
pub type ProductCatalog = HashMap<ProductId, Product>;

/// Product master record
///
/// Identity fields are fixed at load time. The only mutable state is the
/// units-sold accumulator, which can only grow through
/// [`Product::record_units`], reachable from inside the crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: ProductId,
    name: String,
    unit_price: u32,
    units_sold: u64,
}

impl Product {
    /// Create a product with no recorded sales
    pub fn new(id: ProductId, name: impl Into<String>, unit_price: u32) -> Self {
        Product {
            id,
            name: name.into(),
            unit_price,
            units_sold: 0,
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> u32 {
        self.unit_price
    }

    /// Total units sold across every accepted sale line
    pub fn units_sold(&self) -> u64 {
        self.units_sold
    }

    /// Units sold after adding `quantity`, or `None` on overflow
    pub(crate) fn units_after(&self, quantity: u32) -> Option<u64> {
        self.units_sold.checked_add(u64::from(quantity))
    }

    /// Add `quantity` to the units-sold accumulator
    ///
    /// Callers check [`Product::units_after`] first; the addition saturates
    /// rather than wrapping if they do not.
    pub(crate) fn record_units(&mut self, quantity: u32) {
        self.units_sold = self.units_sold.saturating_add(u64::from(quantity));
    }
}
