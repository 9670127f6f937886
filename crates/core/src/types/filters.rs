//! Catalog filter state and partial filter updates.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::product::Category;

/// Category selector: everything, or a single catalog section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    /// No category restriction.
    #[default]
    All,
    Men,
    Women,
    Shoes,
    Accessories,
}

impl CategoryFilter {
    /// Whether a product in `category` passes this selector.
    #[must_use]
    pub const fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Men => matches!(category, Category::Men),
            Self::Women => matches!(category, Category::Women),
            Self::Shoes => matches!(category, Category::Shoes),
            Self::Accessories => matches!(category, Category::Accessories),
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        match category {
            Category::Men => Self::Men,
            Category::Women => Self::Women,
            Category::Shoes => Self::Shoes,
            Category::Accessories => Self::Accessories,
        }
    }
}

impl std::str::FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(Self::All);
        }
        s.parse::<Category>().map(Self::from)
    }
}

/// Sort order for the filtered product view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Featured products first, otherwise catalog order.
    #[default]
    Featured,
    /// Ascending by price.
    PriceLow,
    /// Descending by price.
    PriceHigh,
    /// Descending by review rating.
    Rating,
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Featured => "featured",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Rating => "rating",
        };
        write!(f, "{label}")
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "featured" => Ok(Self::Featured),
            "price-low" => Ok(Self::PriceLow),
            "price-high" => Ok(Self::PriceHigh),
            "rating" => Ok(Self::Rating),
            _ => Err(format!("invalid sort key: {s}")),
        }
    }
}

/// Inclusive price window applied to the filtered view.
///
/// `min <= max` is the intended shape but is not enforced; an inverted
/// range simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    /// Lower bound, inclusive.
    pub min: Decimal,
    /// Upper bound, inclusive.
    pub max: Decimal,
}

impl PriceRange {
    /// Create a price range.
    #[must_use]
    pub const fn new(min: Decimal, max: Decimal) -> Self {
        Self { min, max }
    }

    /// Whether `price` falls inside the window, bounds included.
    #[must_use]
    pub fn contains(&self, price: Decimal) -> bool {
        price >= self.min && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: Decimal::ZERO,
            max: Decimal::from(500),
        }
    }
}

/// The active catalog filter set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Filters {
    /// Category selector.
    pub category: CategoryFilter,
    /// Inclusive price window.
    pub price_range: PriceRange,
    /// Sort order.
    pub sort_by: SortKey,
    /// Free-text search query; empty means no text filter.
    pub search: String,
}

impl Filters {
    /// Shallow-merge a partial update: fields present in `update` replace
    /// the current value, absent fields keep theirs.
    pub fn apply(&mut self, update: FilterUpdate) {
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(price_range) = update.price_range {
            self.price_range = price_range;
        }
        if let Some(sort_by) = update.sort_by {
            self.sort_by = sort_by;
        }
        if let Some(search) = update.search {
            self.search = search;
        }
    }
}

/// Partial filter change; every field is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FilterUpdate {
    /// New category selector.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryFilter>,
    /// New price window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<PriceRange>,
    /// New sort order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortKey>,
    /// New search query.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}
