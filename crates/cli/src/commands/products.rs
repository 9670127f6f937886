//! Catalog browsing and product reviews.
//!
//! # Usage
//!
//! ```bash
//! # Everything, featured first
//! fashionista products
//!
//! # Narrowed and sorted
//! fashionista products --category shoes --min 20 --max 100 --sort price-low
//!
//! # Rate a product
//! fashionista review 5 --rating 4.5
//! ```

use fashionista_core::Action;
use fashionista_core::types::{CategoryFilter, FilterUpdate, PriceRange, ProductId, SortKey};
use rust_decimal::Decimal;

use super::{CommandError, close_store, open_store};

/// List products through the given filters.
pub fn list(
    category: Option<CategoryFilter>,
    search: Option<String>,
    min: Option<Decimal>,
    max: Option<Decimal>,
    sort: Option<SortKey>,
) -> Result<(), CommandError> {
    let mut store = open_store()?;

    let price_range = match (min, max) {
        (None, None) => None,
        (lo, hi) => {
            let defaults = PriceRange::default();
            Some(PriceRange::new(
                lo.unwrap_or(defaults.min),
                hi.unwrap_or(defaults.max),
            ))
        }
    };
    store.dispatch(Action::set_filters(FilterUpdate {
        category,
        search,
        price_range,
        sort_by: sort,
    }));

    let listing = store.state().filtered_products();
    if listing.is_empty() {
        tracing::info!("No products match the active filters");
    } else {
        tracing::info!("{} product(s):", listing.len());
        for product in listing {
            let discount = product
                .discount_percent()
                .map(|pct| format!(", {pct}% off"))
                .unwrap_or_default();
            let stock = if product.in_stock { "" } else { " [out of stock]" };
            tracing::info!(
                "  #{} {} - ${} ({}, rated {:.1} by {} reviewers{}){}",
                product.id,
                product.name,
                product.price,
                product.category,
                product.rating,
                product.reviews,
                discount,
                stock
            );
        }
    }

    close_store(store);
    Ok(())
}

/// Fold a rating into a product's review average.
pub fn review(product: i32, rating: f64) -> Result<(), CommandError> {
    if !(1.0..=5.0).contains(&rating) {
        return Err(CommandError::InvalidRating(rating));
    }

    let mut store = open_store()?;
    let id = ProductId::new(product);
    if store.state().product(id).is_none() {
        close_store(store);
        return Err(CommandError::UnknownProduct(product));
    }

    store.dispatch(Action::add_review(id, rating));

    if let Some(reviewed) = store.state().product(id) {
        tracing::info!(
            "Rated {}: now {:.1} across {} reviews",
            reviewed.name,
            reviewed.rating,
            reviewed.reviews
        );
    }

    close_store(store);
    Ok(())
}
