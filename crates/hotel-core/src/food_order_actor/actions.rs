use crate::model::FoodOrderStatus;

/// Moves the order along `pending → preparing → delivered`, or cancels it.
/// Replies with the order's new state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodOrderAction {
    Advance(FoodOrderStatus),
}
