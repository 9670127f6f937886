//! Cart lines and their identity keys.

use std::num::NonZeroU32;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::product::Product;

/// The identity of a cart line: one product in one size and color.
///
/// A cart holds at most one line per key; adding the same combination again
/// accumulates quantity instead of duplicating the line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineKey {
    /// Product the line refers to.
    pub product_id: ProductId,
    /// Chosen size.
    pub size: String,
    /// Chosen color.
    pub color: String,
}

impl LineKey {
    /// Create a line key.
    #[must_use]
    pub const fn new(product_id: ProductId, size: String, color: String) -> Self {
        Self {
            product_id,
            size,
            color,
        }
    }
}

impl std::fmt::Display for LineKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}-{}", self.product_id, self.size, self.color)
    }
}

/// A line in the shopping cart: a product snapshot plus the chosen
/// size, color, and quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product as it was when added.
    pub product: Product,
    /// Chosen size.
    pub size: String,
    /// Chosen color.
    pub color: String,
    /// Units of this line; never below one.
    pub quantity: NonZeroU32,
}

impl CartLine {
    /// The line's identity key.
    #[must_use]
    pub fn key(&self) -> LineKey {
        LineKey::new(self.product.id, self.size.clone(), self.color.clone())
    }

    /// Whether this line is identified by `key`.
    #[must_use]
    pub fn matches(&self, key: &LineKey) -> bool {
        self.product.id == key.product_id && self.size == key.size && self.color == key.color
    }

    /// Price of the line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity.get())
    }
}

/// Payload for adding a product to the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartAddition {
    /// Product being added.
    pub product: Product,
    /// Chosen size.
    pub size: String,
    /// Chosen color.
    pub color: String,
    /// Units to add; one when not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<NonZeroU32>,
}

impl CartAddition {
    /// Create an addition payload.
    #[must_use]
    pub const fn new(
        product: Product,
        size: String,
        color: String,
        quantity: Option<NonZeroU32>,
    ) -> Self {
        Self {
            product,
            size,
            color,
            quantity,
        }
    }

    /// The identity key the addition resolves to.
    #[must_use]
    pub fn line_key(&self) -> LineKey {
        LineKey::new(self.product.id, self.size.clone(), self.color.clone())
    }

    /// Units to add, defaulting to one.
    #[must_use]
    pub fn units(&self) -> NonZeroU32 {
        self.quantity.unwrap_or(NonZeroU32::MIN)
    }
}
