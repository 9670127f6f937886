//! Derived read models over [`ShopState`].
//!
//! Everything here is computed on demand from the slices; nothing is
//! cached or stored. Callers that need a value twice call twice.

use rust_decimal::Decimal;

use crate::state::ShopState;
use crate::types::{CartLine, Filters, Product, ProductId, SortKey};

/// How many products the featured rail shows.
const FEATURED_LIMIT: usize = 4;

/// How many products the new-arrivals rail shows.
const NEW_ARRIVALS_LIMIT: usize = 8;

/// How many related products accompany a detail view.
const RELATED_LIMIT: usize = 4;

impl ShopState {
    /// The catalog narrowed by the active filters and ordered by the
    /// active sort key.
    ///
    /// Filters combine with AND: a product must match the category, the
    /// search text (case-insensitive substring over name, description and
    /// category label; empty text matches everything) and the price
    /// window. Sorting is stable, so products that compare equal keep
    /// their catalog order.
    #[must_use]
    pub fn filtered_products(&self) -> Vec<&Product> {
        let mut list: Vec<&Product> = self
            .products
            .iter()
            .filter(|product| matches_filters(&self.filters, product))
            .collect();

        match self.filters.sort_by {
            SortKey::PriceLow => list.sort_by(|a, b| a.price.cmp(&b.price)),
            SortKey::PriceHigh => list.sort_by(|a, b| b.price.cmp(&a.price)),
            SortKey::Rating => list.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
            SortKey::Featured => list.sort_by(|a, b| b.featured.cmp(&a.featured)),
        }
        list
    }

    /// Look up a product by id.
    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// The first few featured products, in catalog order.
    #[must_use]
    pub fn featured_products(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| product.featured)
            .take(FEATURED_LIMIT)
            .collect()
    }

    /// The head of the catalog, newest entries first in the source data.
    #[must_use]
    pub fn new_arrivals(&self) -> Vec<&Product> {
        self.products.iter().take(NEW_ARRIVALS_LIMIT).collect()
    }

    /// Other products from the same category, excluding the product itself.
    #[must_use]
    pub fn related_products(&self, id: ProductId) -> Vec<&Product> {
        let Some(subject) = self.product(id) else {
            return Vec::new();
        };
        self.products
            .iter()
            .filter(|product| product.category == subject.category && product.id != id)
            .take(RELATED_LIMIT)
            .collect()
    }

    /// Sum of `price * quantity` over every cart line.
    #[must_use]
    pub fn cart_total(&self) -> Decimal {
        self.cart.iter().map(CartLine::line_total).sum()
    }

    /// Total number of units in the cart, across all lines.
    #[must_use]
    pub fn cart_count(&self) -> u32 {
        self.cart.iter().map(|line| line.quantity.get()).sum()
    }

    /// Whether the product is on the wishlist.
    #[must_use]
    pub fn is_in_wishlist(&self, id: ProductId) -> bool {
        self.wishlist.iter().any(|product| product.id == id)
    }

    /// Number of wishlisted products.
    #[must_use]
    pub fn wishlist_count(&self) -> usize {
        self.wishlist.len()
    }

    /// Flat shipping fee; orders strictly above 100 ship free.
    #[must_use]
    pub fn shipping_fee(&self) -> Decimal {
        if self.cart_total() > Decimal::ONE_HUNDRED {
            Decimal::ZERO
        } else {
            Decimal::TEN
        }
    }

    /// Sales tax at a flat 8% of the cart subtotal.
    #[must_use]
    pub fn sales_tax(&self) -> Decimal {
        self.cart_total() * Decimal::new(8, 2)
    }

    /// Subtotal plus shipping plus tax: what checkout charges.
    #[must_use]
    pub fn checkout_total(&self) -> Decimal {
        self.cart_total() + self.shipping_fee() + self.sales_tax()
    }
}

fn matches_filters(filters: &Filters, product: &Product) -> bool {
    if !filters.category.matches(product.category) {
        return false;
    }
    if !filters.price_range.contains(product.price) {
        return false;
    }
    if filters.search.is_empty() {
        return true;
    }
    let needle = filters.search.to_lowercase();
    product.name.to_lowercase().contains(&needle)
        || product.description.to_lowercase().contains(&needle)
        || product.category.label().to_lowercase().contains(&needle)
}
