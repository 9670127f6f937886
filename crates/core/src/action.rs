//! The closed set of state transitions.
//!
//! Every mutation of [`crate::ShopState`] is one of these actions, applied
//! through [`crate::reduce`]. The serde encoding is a tagged object
//! (`{"type": "ADD_TO_CART", "payload": ...}`) so hosts can hand actions
//! across process or script boundaries; the tags are the engine's stable
//! wire names. Kinds the engine does not know are rejected at the decode
//! boundary and treated as no-ops there - the enum itself stays closed and
//! is matched exhaustively.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::slice::Slice;
use crate::types::{
    CartAddition, FilterUpdate, LineKey, Order, Product, ProductId, User,
};

// =============================================================================
// Payload Types
// =============================================================================

/// Payload for re-pointing a cart line at a new quantity.
///
/// The quantity is a `NonZeroU32`: a request for zero cannot be expressed,
/// so the "never clamp to zero and remove" rule holds by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityChange {
    /// Line being changed.
    pub key: LineKey,
    /// New quantity, at least one.
    pub quantity: NonZeroU32,
}

/// Payload for folding a new review into a product's aggregate rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewSubmission {
    /// Product being reviewed.
    pub product_id: ProductId,
    /// Star rating, 1-5.
    pub rating: f64,
}

// =============================================================================
// Actions
// =============================================================================

/// A state transition request.
///
/// Large payloads are boxed to keep the enum itself small.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Add a product in a chosen size and color; merges into an existing
    /// line with the same identity key.
    AddToCart(Box<CartAddition>),
    /// Remove the line with this identity key; no-op if absent.
    RemoveFromCart(LineKey),
    /// Set a line's quantity; no-op if the key is absent.
    UpdateCartQuantity(QuantityChange),
    /// Empty the cart.
    ClearCart,
    /// Add the product to the wishlist, or remove it if already present.
    ToggleWishlist(Box<Product>),
    /// Shallow-merge a partial filter change.
    SetFilters(FilterUpdate),
    /// Set the session user.
    Login(User),
    /// Clear the session user.
    Logout,
    /// Append an order to the history and empty the cart, atomically.
    AddOrder(Box<Order>),
    /// Fold a new rating into a product's running review mean.
    AddReview(ReviewSubmission),
}

impl Action {
    /// The action's wire tag, for logging and diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::AddToCart(_) => "ADD_TO_CART",
            Self::RemoveFromCart(_) => "REMOVE_FROM_CART",
            Self::UpdateCartQuantity(_) => "UPDATE_CART_QUANTITY",
            Self::ClearCart => "CLEAR_CART",
            Self::ToggleWishlist(_) => "TOGGLE_WISHLIST",
            Self::SetFilters(_) => "SET_FILTERS",
            Self::Login(_) => "LOGIN",
            Self::Logout => "LOGOUT",
            Self::AddOrder(_) => "ADD_ORDER",
            Self::AddReview(_) => "ADD_REVIEW",
        }
    }

    /// The persisted slices this action's transition may touch.
    ///
    /// Drives the store's slice-changed notifications. Filters and products
    /// are not persisted, so their actions touch nothing.
    #[must_use]
    pub const fn affected_slices(&self) -> &'static [Slice] {
        match self {
            Self::AddToCart(_)
            | Self::RemoveFromCart(_)
            | Self::UpdateCartQuantity(_)
            | Self::ClearCart => &[Slice::Cart],
            Self::ToggleWishlist(_) => &[Slice::Wishlist],
            Self::Login(_) | Self::Logout => &[Slice::User],
            Self::AddOrder(_) => &[Slice::Orders, Slice::Cart],
            Self::SetFilters(_) | Self::AddReview(_) => &[],
        }
    }

    /// Add a product to the cart.
    #[must_use]
    pub fn add_to_cart(
        product: Product,
        size: String,
        color: String,
        quantity: Option<NonZeroU32>,
    ) -> Self {
        Self::AddToCart(Box::new(CartAddition::new(product, size, color, quantity)))
    }

    /// Remove a cart line by identity key.
    #[must_use]
    pub const fn remove_from_cart(key: LineKey) -> Self {
        Self::RemoveFromCart(key)
    }

    /// Set a cart line's quantity.
    #[must_use]
    pub const fn update_cart_quantity(key: LineKey, quantity: NonZeroU32) -> Self {
        Self::UpdateCartQuantity(QuantityChange { key, quantity })
    }

    /// Toggle a product's wishlist membership.
    #[must_use]
    pub fn toggle_wishlist(product: Product) -> Self {
        Self::ToggleWishlist(Box::new(product))
    }

    /// Merge a partial filter change.
    #[must_use]
    pub const fn set_filters(update: FilterUpdate) -> Self {
        Self::SetFilters(update)
    }

    /// Sign a user in.
    #[must_use]
    pub const fn login(user: User) -> Self {
        Self::Login(user)
    }

    /// Append an order (and clear the cart).
    #[must_use]
    pub fn add_order(order: Order) -> Self {
        Self::AddOrder(Box::new(order))
    }

    /// Submit a review rating for a product.
    #[must_use]
    pub const fn add_review(product_id: ProductId, rating: f64) -> Self {
        Self::AddReview(ReviewSubmission { product_id, rating })
    }
}
