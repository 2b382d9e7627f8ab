use crate::model::{PurchaseOrderStatus, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseOrderAction {
    /// Moves the order to `to`. Moving to `Received` credits every line to
    /// inventory on behalf of `actor`.
    Transition {
        to: PurchaseOrderStatus,
        actor: UserId,
    },
}
