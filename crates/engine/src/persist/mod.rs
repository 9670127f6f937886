//! Slice persistence.
//!
//! Four slices of [`ShopState`] survive restarts: cart, wishlist, user and
//! orders. The catalog and the filters are rebuilt each run. The
//! [`SliceStorage`] port abstracts where the serialized slices live:
//! [`JsonFileStorage`] keeps one file per slice under a data directory,
//! [`MemoryStorage`] backs tests and ephemeral sessions. Writes go through
//! [`SliceWriter`] on a background thread so dispatch never waits on the
//! disk.

mod file;
mod memory;
mod writer;

pub use file::JsonFileStorage;
pub use memory::MemoryStorage;
pub use writer::{SliceWriter, WriteStats, WriterHandle};

use fashionista_core::{Product, ShopState, Slice};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serde(String),
}

/// Where serialized slices live.
///
/// Implementations hold one JSON payload per slice key; `read` returns
/// `None` for a key that has never been written.
pub trait SliceStorage: Send {
    /// Read the payload stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be consulted. A missing
    /// key is `Ok(None)`, not an error.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the payload stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the payload cannot be stored.
    fn write(&self, key: &str, payload: &str) -> Result<(), StorageError>;
}

/// Build the initial state: the catalog plus whatever storage holds.
///
/// Each persisted slice is loaded independently. A slice that is missing,
/// unreadable or corrupt falls back to its default with a warning; the
/// remaining slices still load. Seeding never fails because of persisted
/// data.
pub fn seed_state(storage: &dyn SliceStorage, products: Vec<Product>) -> ShopState {
    let mut state = ShopState::with_catalog(products);
    state.cart = load_slice(storage, Slice::Cart);
    state.wishlist = load_slice(storage, Slice::Wishlist);
    state.user = load_slice(storage, Slice::User);
    state.orders = load_slice(storage, Slice::Orders);
    state
}

/// Serialize one slice of `state` to its JSON payload.
///
/// # Errors
///
/// Returns `StorageError::Serde` if the slice cannot be serialized.
pub fn snapshot_slice(state: &ShopState, slice: Slice) -> Result<String, StorageError> {
    let payload = match slice {
        Slice::Cart => serde_json::to_string(&state.cart),
        Slice::Wishlist => serde_json::to_string(&state.wishlist),
        Slice::User => serde_json::to_string(&state.user),
        Slice::Orders => serde_json::to_string(&state.orders),
    };
    payload.map_err(|e| StorageError::Serde(e.to_string()))
}

fn load_slice<T>(storage: &dyn SliceStorage, slice: Slice) -> T
where
    T: DeserializeOwned + Default,
{
    let payload = match storage.read(slice.key()) {
        Ok(Some(payload)) => payload,
        Ok(None) => return T::default(),
        Err(e) => {
            tracing::warn!(slice = %slice, error = %e, "Failed to read slice, using default");
            return T::default();
        }
    };
    match serde_json::from_str(&payload) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(slice = %slice, error = %e, "Corrupt slice payload, using default");
            T::default()
        }
    }
}
