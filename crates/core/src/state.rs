//! The authoritative shop state.

use serde::{Deserialize, Serialize};

use crate::types::{CartLine, Filters, Order, Product, User};

/// Everything the storefront knows, in one owned value.
///
/// There is no global instance: whoever needs the state owns a [`ShopState`]
/// (usually inside the engine's `Store`) and threads it through
/// [`crate::reduce`]. The `products` slice is seeded from the catalog at
/// startup; `cart`, `wishlist`, `user`, and `orders` are seeded from
/// persisted storage; `filters` always starts at its defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ShopState {
    /// Product catalog; mutated only by review aggregation.
    pub products: Vec<Product>,
    /// Cart lines, at most one per identity key.
    pub cart: Vec<CartLine>,
    /// Wishlisted products, at most one per product id.
    pub wishlist: Vec<Product>,
    /// Session user; `None` while signed out.
    pub user: Option<User>,
    /// Append-only order history, oldest first.
    pub orders: Vec<Order>,
    /// Active catalog filters.
    pub filters: Filters,
}

impl ShopState {
    /// Fresh state over a catalog: empty cart, wishlist, and history;
    /// nobody signed in; default filters.
    #[must_use]
    pub fn with_catalog(products: Vec<Product>) -> Self {
        Self {
            products,
            ..Self::default()
        }
    }
}
