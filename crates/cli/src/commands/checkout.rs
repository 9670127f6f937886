//! Checkout: turn the cart into an order.
//!
//! # Usage
//!
//! ```bash
//! fashionista checkout --first-name Maya --last-name Kade \
//!     --email maya@example.com --address "1 Canal St" --city Amsterdam \
//!     --zip 1011 --country NL
//! ```
//!
//! Payment is a local simulation; no external call is made. Orders above
//! $100 ship free, everything else pays a flat $10, and 8% sales tax
//! applies to the subtotal.

use fashionista_core::types::ShippingDetails;

use super::{CommandError, close_store, open_store};

/// Place an order for the current cart.
pub fn place(shipping: ShippingDetails) -> Result<(), CommandError> {
    let mut store = open_store()?;

    let Some(order) = store.checkout(shipping) else {
        close_store(store);
        return Err(CommandError::EmptyCart);
    };

    tracing::info!("Order placed!");
    tracing::info!("  Order id: {}", order.id);
    tracing::info!("  Items: {}", order.items.len());
    tracing::info!("  Total: ${}", order.total);
    tracing::info!("  Status: {}", order.status);
    tracing::info!(
        "  Ships to: {} {}, {}, {}",
        order.shipping.first_name,
        order.shipping.last_name,
        order.shipping.city,
        order.shipping.country
    );

    close_store(store);
    Ok(())
}
