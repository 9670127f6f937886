//! Shopping cart commands.
//!
//! # Usage
//!
//! ```bash
//! fashionista cart add 1 --size M --color White --quantity 2
//! fashionista cart set-qty 1 --size M --color White --quantity 5
//! fashionista cart remove 1 --size M --color White
//! fashionista cart show
//! fashionista cart clear
//! ```
//!
//! Cart lines are keyed by product id, size and color; adding the same
//! combination again increases its quantity.

use std::num::NonZeroU32;

use fashionista_core::Action;
use fashionista_core::types::{LineKey, ProductId};

use super::{CommandError, close_store, open_store};

/// Add units of a product to the cart.
///
/// Size and color default to the first ones the product lists, mirroring
/// the storefront's preselected options.
pub fn add(
    product: i32,
    size: Option<String>,
    color: Option<String>,
    quantity: NonZeroU32,
) -> Result<(), CommandError> {
    let mut store = open_store()?;
    let id = ProductId::new(product);
    let Some(item) = store.state().product(id).cloned() else {
        close_store(store);
        return Err(CommandError::UnknownProduct(product));
    };

    let size = size
        .or_else(|| item.sizes.first().cloned())
        .unwrap_or_default();
    let color = color
        .or_else(|| item.colors.first().cloned())
        .unwrap_or_default();
    let name = item.name.clone();

    store.dispatch(Action::add_to_cart(
        item,
        size.clone(),
        color.clone(),
        Some(quantity),
    ));

    tracing::info!(
        "Added {} x {} ({} / {}) - cart holds {} item(s), subtotal ${}",
        quantity,
        name,
        size,
        color,
        store.state().cart_count(),
        store.state().cart_total()
    );
    close_store(store);
    Ok(())
}

/// Remove a cart line.
pub fn remove(product: i32, size: String, color: String) -> Result<(), CommandError> {
    let mut store = open_store()?;
    let key = LineKey::new(ProductId::new(product), size, color);

    store.dispatch(Action::remove_from_cart(key));

    tracing::info!(
        "Cart holds {} item(s), subtotal ${}",
        store.state().cart_count(),
        store.state().cart_total()
    );
    close_store(store);
    Ok(())
}

/// Set a cart line's quantity.
pub fn set_quantity(
    product: i32,
    size: String,
    color: String,
    quantity: NonZeroU32,
) -> Result<(), CommandError> {
    let mut store = open_store()?;
    let key = LineKey::new(ProductId::new(product), size, color);

    store.dispatch(Action::update_cart_quantity(key, quantity));

    tracing::info!(
        "Cart holds {} item(s), subtotal ${}",
        store.state().cart_count(),
        store.state().cart_total()
    );
    close_store(store);
    Ok(())
}

/// Empty the cart.
pub fn clear() -> Result<(), CommandError> {
    let mut store = open_store()?;
    store.dispatch(Action::ClearCart);
    tracing::info!("Cart cleared");
    close_store(store);
    Ok(())
}

/// Show the cart with totals.
pub fn show() -> Result<(), CommandError> {
    let store = open_store()?;
    let state = store.state();

    if state.cart.is_empty() {
        tracing::info!("The cart is empty");
    } else {
        tracing::info!("Cart:");
        for line in &state.cart {
            tracing::info!(
                "  {} x {} ({} / {}) - ${}",
                line.quantity,
                line.product.name,
                line.size,
                line.color,
                line.line_total()
            );
        }
        tracing::info!("  Subtotal: ${} ({} items)", state.cart_total(), state.cart_count());
        tracing::info!("  Shipping: ${}", state.shipping_fee());
        tracing::info!("  Tax: ${}", state.sales_tax());
        tracing::info!("  Order total: ${}", state.checkout_total());
    }

    close_store(store);
    Ok(())
}
