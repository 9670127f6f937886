//! Order history.
//!
//! # Usage
//!
//! ```bash
//! fashionista orders
//! ```

use super::{CommandError, close_store, open_store};

/// Show all placed orders, newest last.
pub fn list() -> Result<(), CommandError> {
    let store = open_store()?;
    let state = store.state();

    if state.orders.is_empty() {
        tracing::info!("No orders yet");
    } else {
        tracing::info!("{} order(s):", state.orders.len());
        for order in &state.orders {
            tracing::info!(
                "  {} - {} item(s), ${}, {} ({})",
                order.placed_at.format("%Y-%m-%d %H:%M"),
                order.items.len(),
                order.total,
                order.status,
                order.id
            );
            for line in &order.items {
                tracing::info!(
                    "    {} x {} ({} / {})",
                    line.quantity,
                    line.product.name,
                    line.size,
                    line.color
                );
            }
        }
    }

    close_store(store);
    Ok(())
}
