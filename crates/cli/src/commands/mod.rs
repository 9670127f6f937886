//! Command implementations.
//!
//! Every command opens the store from the configured data directory, acts
//! on it, and closes it again, draining queued slice writes. State
//! therefore persists between invocations the way a browser session would
//! across page loads.

pub mod cart;
pub mod checkout;
pub mod orders;
pub mod products;
pub mod session;
pub mod wishlist;

use fashionista_core::types::EmailError;
use fashionista_engine::{EngineError, Store, StoreConfig};
use thiserror::Error;

/// Errors surfaced by command handling.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Engine failure: configuration, catalog or storage.
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// A product id that is not in the catalog.
    #[error("No product with id {0}")]
    UnknownProduct(i32),

    /// The email address did not parse.
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// A rating outside the accepted range.
    #[error("Rating must be between 1 and 5, got {0}")]
    InvalidRating(f64),

    /// Checkout with nothing in the cart.
    #[error("The cart is empty; nothing to check out")]
    EmptyCart,
}

/// Open the store described by the environment.
fn open_store() -> Result<Store, CommandError> {
    let config = StoreConfig::from_env().map_err(EngineError::from)?;
    Ok(Store::open(&config)?)
}

/// Close the store, logging what the writer flushed.
fn close_store(store: Store) {
    let stats = store.close();
    if stats.failures > 0 {
        tracing::warn!(failures = stats.failures, "Some slice writes failed");
    }
    tracing::debug!(writes = stats.writes, "Store closed");
}
