//! Catalog product records.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// Catalog section a product belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Men,
    Women,
    Shoes,
    Accessories,
}

impl Category {
    /// All catalog categories, in display order.
    pub const ALL: [Self; 4] = [Self::Men, Self::Women, Self::Shoes, Self::Accessories];

    /// Lowercase label as it appears in filters and search text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Men => "men",
            Self::Women => "women",
            Self::Shoes => "shoes",
            Self::Accessories => "accessories",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "men" => Ok(Self::Men),
            "women" => Ok(Self::Women),
            "shoes" => Ok(Self::Shoes),
            "accessories" => Ok(Self::Accessories),
            _ => Err(format!("invalid category: {s}")),
        }
    }
}

/// A product in the catalog.
///
/// Everything here is immutable once loaded, with one exception: `rating`
/// and `reviews` are recomputed by the review-aggregation transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Plain text description.
    pub description: String,
    /// Catalog section.
    pub category: Category,
    /// Current selling price.
    pub price: Decimal,
    /// Price before markdown; equals `price` when not on sale.
    pub original_price: Decimal,
    /// Average review rating, 0-5.
    pub rating: f64,
    /// Number of reviews behind `rating`.
    pub reviews: u32,
    /// Available sizes, in display order.
    pub sizes: Vec<String>,
    /// Available colors, in display order.
    pub colors: Vec<String>,
    /// Whether the product can currently be purchased.
    pub in_stock: bool,
    /// Whether the product is featured on the home page.
    pub featured: bool,
    /// Product image URI.
    pub image: String,
}

impl Product {
    /// Markdown percentage when the product is on sale.
    ///
    /// Returns `Some(percent)` rounded to the nearest whole number when
    /// `original_price > price`, `None` otherwise.
    #[must_use]
    pub fn discount_percent(&self) -> Option<u32> {
        if self.original_price <= self.price || self.original_price <= Decimal::ZERO {
            return None;
        }
        let off = (self.original_price - self.price) / self.original_price * Decimal::ONE_HUNDRED;
        off.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u32()
    }
}
