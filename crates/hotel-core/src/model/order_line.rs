//! Line items shared by food orders and purchase orders.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A requested line: which catalog item and how many.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRequest<I> {
    pub item_id: I,
    pub quantity: u32,
    pub notes: String,
}

impl<I> LineRequest<I> {
    pub fn new(item_id: I, quantity: u32) -> Self {
        Self {
            item_id,
            quantity,
            notes: String::new(),
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

/// A priced line, embedded in exactly one parent order.
///
/// Lines are immutable once the order exists; changing a quantity means placing
/// a new order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine<I> {
    /// 1-based position within the parent order.
    pub line_no: u32,
    pub item_id: I,
    pub quantity: u32,
    /// Catalog price at the moment the order was placed.
    pub unit_price: Decimal,
    /// `unit_price * quantity`
    pub price: Decimal,
    pub notes: String,
}

/// Sum of line prices; what every order's `total_price` must equal.
pub fn lines_total<I>(lines: &[OrderLine<I>]) -> Decimal {
    lines.iter().map(|line| line.price).sum()
}
