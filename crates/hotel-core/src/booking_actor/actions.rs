//! Custom actions for the Booking actor.

/// Status changes a confirmed booking can go through. Both reply with the booking's
/// new state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingAction {
    /// Allowed while confirmed and before the stay starts.
    Cancel,
    /// Check-out; allowed once the stay has started.
    Complete,
}
