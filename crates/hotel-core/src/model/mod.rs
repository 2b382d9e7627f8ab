//! Records owned by the resource actors, their identifiers and their DTOs.

/// Declares a `u32` identifier newtype that displays as `<prefix>_<n>`.
macro_rules! resource_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        pub struct $name(pub u32);

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, concat!($prefix, "_{}"), self.0)
            }
        }
    };
}

pub mod booking;
pub mod food_order;
pub mod inventory;
pub mod menu;
pub mod order_line;
pub mod purchase_order;
pub mod room;
pub mod status;
pub mod supplier;
pub mod user;

pub use booking::*;
pub use food_order::*;
pub use inventory::*;
pub use menu::*;
pub use order_line::*;
pub use purchase_order::*;
pub use room::*;
pub use status::*;
pub use supplier::*;
pub use user::*;
