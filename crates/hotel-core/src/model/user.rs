resource_id!(
    /// The authenticated caller, as supplied by the transport layer.
    ///
    /// Identity is trusted as given; it is recorded on bookings, orders and ledger
    /// entries but never looked up.
    UserId,
    "user"
);
