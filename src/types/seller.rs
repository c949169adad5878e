//! Seller-related types for the sales consolidator
//!
//! This module defines the Seller master record and the registry that maps
//! document numbers to sellers.

use std::collections::HashMap;

/// Seller identity document number
///
/// Strictly positive; zero is rejected at load time.
pub type DocumentNumber = u64;

/// Sellers keyed by their document number
pub type SellerRegistry = HashMap<DocumentNumber, Seller>;

/// Seller master record
///
/// Represents one seller loaded from the sellers master file. The revenue
/// accumulator starts at zero and only grows through
/// [`Seller::record_revenue`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seller {
    document: DocumentNumber,
    full_name: String,
    total_revenue: u64,
}

impl Seller {
    /// Create a seller from its first and last name
    ///
    /// The full name is the two parts joined with a single space.
    pub fn new(document: DocumentNumber, first_name: &str, last_name: &str) -> Self {
        Seller {
            document,
            full_name: format!("{} {}", first_name, last_name),
            total_revenue: 0,
        }
    }

    pub fn document(&self) -> DocumentNumber {
        self.document
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Sum of `unit_price * quantity` over every accepted sale line
    pub fn total_revenue(&self) -> u64 {
        self.total_revenue
    }

    /// Revenue after adding `amount`, or `None` on overflow
    pub(crate) fn revenue_after(&self, amount: u64) -> Option<u64> {
        self.total_revenue.checked_add(amount)
    }

    /// Add `amount` to the revenue accumulator
    ///
    /// Callers check [`Seller::revenue_after`] first; the addition saturates
    /// rather than wrapping if they do not.
    pub(crate) fn record_revenue(&mut self, amount: u64) {
        self.total_revenue = self.total_revenue.saturating_add(amount);
    }
}
