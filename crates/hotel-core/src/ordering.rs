//! # Order Aggregation
//!
//! Shared by food orders and purchase orders. An order is built in two steps, both
//! on the staged entity inside its actor's `Create` request:
//!
//! 1. [`draft_lines`] (sync, in `from_create_params`): reject an empty order or a
//!    zero quantity, number the lines.
//! 2. [`price_lines`] (async, in `on_create`): resolve each line against a live
//!    [`PriceCatalog`], compute `unit_price * quantity` and keep a running total.
//!
//! The caller stores the returned total on the parent. A failure at any line aborts
//! the create, and since the actor only inserts entities whose hooks succeeded, no
//! partial order is ever visible.

use crate::model::{LineRequest, OrderLine};
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::fmt::{Debug, Display};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineError {
    #[error("order must contain at least one item")]
    Empty,
    #[error("quantity for {item} must be at least 1")]
    ZeroQuantity { item: String },
}

/// Live price lookup for the items an order can reference.
#[async_trait]
pub trait PriceCatalog: Send + Sync {
    type ItemId: Clone + Display + Debug + Send + Sync;
    type Error: Send;

    /// Current unit price of `item`, or the reason it cannot be ordered.
    async fn unit_price(&self, item: &Self::ItemId) -> Result<Decimal, Self::Error>;
}

/// Validates the requested lines and turns them into unpriced order lines.
pub fn draft_lines<I: Display>(
    requests: Vec<LineRequest<I>>,
) -> Result<Vec<OrderLine<I>>, LineError> {
    if requests.is_empty() {
        return Err(LineError::Empty);
    }

    requests
        .into_iter()
        .zip(1..)
        .map(|(request, line_no)| {
            if request.quantity == 0 {
                return Err(LineError::ZeroQuantity {
                    item: request.item_id.to_string(),
                });
            }
            Ok(OrderLine {
                line_no,
                item_id: request.item_id,
                quantity: request.quantity,
                unit_price: Decimal::ZERO,
                price: Decimal::ZERO,
                notes: request.notes,
            })
        })
        .collect()
}

/// Prices every line in order and returns the accumulated total.
///
/// Stops at the first line the catalog rejects.
pub async fn price_lines<C: PriceCatalog>(
    catalog: &C,
    lines: &mut [OrderLine<C::ItemId>],
) -> Result<Decimal, C::Error> {
    let mut total = Decimal::ZERO;
    for line in lines.iter_mut() {
        let unit_price = catalog.unit_price(&line.item_id).await?;
        line.unit_price = unit_price;
        line.price = unit_price * Decimal::from(line.quantity);
        total += line.price;
    }
    Ok(total)
}
