//! Wishlist commands.
//!
//! # Usage
//!
//! ```bash
//! fashionista wishlist toggle 3
//! fashionista wishlist show
//! ```

use fashionista_core::Action;
use fashionista_core::types::ProductId;

use super::{CommandError, close_store, open_store};

/// Add or remove a product from the wishlist.
pub fn toggle(product: i32) -> Result<(), CommandError> {
    let mut store = open_store()?;
    let id = ProductId::new(product);
    let Some(item) = store.state().product(id).cloned() else {
        close_store(store);
        return Err(CommandError::UnknownProduct(product));
    };
    let name = item.name.clone();

    store.dispatch(Action::toggle_wishlist(item));

    if store.state().is_in_wishlist(id) {
        tracing::info!("Added {} to the wishlist", name);
    } else {
        tracing::info!("Removed {} from the wishlist", name);
    }
    close_store(store);
    Ok(())
}

/// Show wishlisted products.
pub fn show() -> Result<(), CommandError> {
    let store = open_store()?;
    let state = store.state();

    if state.wishlist.is_empty() {
        tracing::info!("The wishlist is empty");
    } else {
        tracing::info!("Wishlist ({} product(s)):", state.wishlist_count());
        for product in &state.wishlist {
            tracing::info!("  #{} {} - ${}", product.id, product.name, product.price);
        }
    }

    close_store(store);
    Ok(())
}
