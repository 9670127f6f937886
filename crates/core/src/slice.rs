//! Independently persisted subsets of the shop state.
//!
//! Four slices survive a restart: the cart, the wishlist, the session user,
//! and the order history. Each is written under its own storage key whenever
//! it changes; the catalog and the active filters are rebuilt on startup and
//! never persisted.

use serde::{Deserialize, Serialize};

/// Storage keys for the persisted slices.
pub mod keys {
    /// Cart lines.
    pub const CART: &str = "cart";
    /// Wishlist products.
    pub const WISHLIST: &str = "wishlist";
    /// Session user (or null).
    pub const USER: &str = "user";
    /// Order history.
    pub const ORDERS: &str = "orders";
}

/// A persisted state slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slice {
    Cart,
    Wishlist,
    User,
    Orders,
}

impl Slice {
    /// Every persisted slice, in seeding order.
    pub const ALL: [Self; 4] = [Self::Cart, Self::Wishlist, Self::User, Self::Orders];

    /// The storage key the slice is written under.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Cart => keys::CART,
            Self::Wishlist => keys::WISHLIST,
            Self::User => keys::USER,
            Self::Orders => keys::ORDERS,
        }
    }
}

impl std::fmt::Display for Slice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
