//! Closed status enums driven by an explicit transition table.

use std::fmt::{Debug, Display};

/// A status whose legal edges are listed in [`StatusMachine::TRANSITIONS`].
///
/// Any edge not in the table, including a same-state "transition", is rejected.
/// A status with no outgoing edge is terminal.
pub trait StatusMachine: Copy + Eq + Debug + Display + 'static {
    const TRANSITIONS: &'static [(Self, Self)];

    fn is_terminal(self) -> bool {
        !Self::TRANSITIONS.iter().any(|(from, _)| *from == self)
    }

    fn can_transition_to(self, to: Self) -> bool {
        Self::TRANSITIONS.contains(&(self, to))
    }

    fn transition(self, to: Self) -> Result<Self, TransitionError<Self>> {
        if self.is_terminal() {
            Err(TransitionError::Terminal { from: self })
        } else if self.can_transition_to(to) {
            Ok(to)
        } else {
            Err(TransitionError::Illegal { from: self, to })
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError<S: Debug + Display> {
    #[error("order is in a terminal state: {from}")]
    Terminal { from: S },
    #[error("invalid status transition from {from} to {to}")]
    Illegal { from: S, to: S },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BookingStatus, FoodOrderStatus, PurchaseOrderStatus};

    #[test]
    fn test_purchase_order_table() {
        use PurchaseOrderStatus::*;
        let all = [Pending, Approved, Received, Cancelled];
        let legal = [
            (Pending, Approved),
            (Pending, Cancelled),
            (Approved, Received),
            (Approved, Cancelled),
        ];
        for from in all {
            for to in all {
                let expected = legal.contains(&(from, to));
                assert_eq!(from.can_transition_to(to), expected, "{from} -> {to}");
            }
        }
        assert!(Received.is_terminal());
        assert!(Cancelled.is_terminal());
        assert!(!Approved.is_terminal());
    }

    #[test]
    fn test_same_state_is_illegal() {
        assert_eq!(
            PurchaseOrderStatus::Pending.transition(PurchaseOrderStatus::Pending),
            Err(TransitionError::Illegal {
                from: PurchaseOrderStatus::Pending,
                to: PurchaseOrderStatus::Pending
            })
        );
    }

    #[test]
    fn test_terminal_wins_over_illegal() {
        let err = PurchaseOrderStatus::Received
            .transition(PurchaseOrderStatus::Received)
            .unwrap_err();
        assert_eq!(
            err,
            TransitionError::Terminal {
                from: PurchaseOrderStatus::Received
            }
        );
        assert!(err.to_string().starts_with("order is in a terminal state"));
    }

    #[test]
    fn test_food_order_and_booking_tables() {
        assert!(FoodOrderStatus::Pending.can_transition_to(FoodOrderStatus::Preparing));
        assert!(FoodOrderStatus::Preparing.can_transition_to(FoodOrderStatus::Delivered));
        assert!(!FoodOrderStatus::Pending.can_transition_to(FoodOrderStatus::Delivered));
        assert!(FoodOrderStatus::Delivered.is_terminal());

        assert!(BookingStatus::Confirmed.can_transition_to(BookingStatus::Cancelled));
        assert!(BookingStatus::Completed.is_terminal());
        assert!(BookingStatus::Cancelled.is_terminal());
    }
}
