//! The owned store: dispatch, subscriptions, checkout.

use chrono::Utc;
use fashionista_core::{
    Action, Order, OrderId, Product, ShippingDetails, ShopState, Slice, reduce,
};

use crate::catalog;
use crate::config::StoreConfig;
use crate::error::Result;
use crate::persist::{self, JsonFileStorage, SliceStorage, SliceWriter, WriteStats};

type Listener = Box<dyn Fn(Slice, &ShopState)>;

/// Owns the shop state and the only mutation entry point.
///
/// Dispatch is synchronous on the caller's thread: the reducer runs to
/// completion, the new state commits, then each listener is called once
/// per slice the action touches. Persistence, when wired, is one such
/// listener feeding the writer thread.
pub struct Store {
    state: ShopState,
    listeners: Vec<Listener>,
    writer: Option<SliceWriter>,
}

impl Store {
    /// An ephemeral store over `products`: no persistence, no listeners.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        Self::with_state(ShopState::with_catalog(products))
    }

    /// A store over an explicit initial state.
    #[must_use]
    pub fn with_state(state: ShopState) -> Self {
        Self {
            state,
            listeners: Vec::new(),
            writer: None,
        }
    }

    /// A store seeded from `storage`, with the writer thread running and
    /// the persistence listener wired.
    pub fn with_storage<S>(storage: S, products: Vec<Product>) -> Self
    where
        S: SliceStorage + 'static,
    {
        let state = persist::seed_state(&storage, products);
        let writer = SliceWriter::spawn(storage);
        let handle = writer.handle();

        let mut store = Self::with_state(state);
        store.writer = Some(writer);
        store.subscribe(move |slice, state| {
            // Serialized here, on the dispatch thread, so the payload always
            // carries the slice value as of this notification.
            match persist::snapshot_slice(state, slice) {
                Ok(payload) => handle.enqueue(slice.key(), payload),
                Err(e) => {
                    tracing::warn!(slice = %slice, error = %e, "Failed to serialize slice");
                }
            }
        });
        store
    }

    /// Open the file-backed store described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded or the data
    /// directory cannot be created.
    pub fn open(config: &StoreConfig) -> Result<Self> {
        let products = match &config.catalog_path {
            Some(path) => catalog::load_products(path)?,
            None => catalog::builtin_products()?,
        };
        let storage = JsonFileStorage::open(&config.data_dir)?;
        Ok(Self::with_storage(storage, products))
    }

    /// Read access to the current state.
    #[must_use]
    pub const fn state(&self) -> &ShopState {
        &self.state
    }

    /// Register a listener called once per slice an action changes.
    pub fn subscribe(&mut self, listener: impl Fn(Slice, &ShopState) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Apply `action` to the state and notify listeners.
    pub fn dispatch(&mut self, action: Action) {
        let kind = action.kind();
        let slices = action.affected_slices();

        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);

        tracing::debug!(action = kind, "Applied action");
        for &slice in slices {
            for listener in &self.listeners {
                listener(slice, &self.state);
            }
        }
    }

    /// Decode an externally encoded action and dispatch it.
    ///
    /// Returns whether the payload was recognized and applied. Unknown
    /// action kinds and malformed payloads are logged no-ops, so an older
    /// engine tolerates actions minted by a newer frontend.
    pub fn dispatch_json(&mut self, raw: &str) -> bool {
        match serde_json::from_str::<Action>(raw) {
            Ok(action) => {
                self.dispatch(action);
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring unrecognized action payload");
                false
            }
        }
    }

    /// Place an order for the current cart.
    ///
    /// Stamps the order id and timestamp from the host clock, snapshots the
    /// cart lines and the grand total (subtotal, shipping and tax), and
    /// dispatches the order action, which also empties the cart. Returns
    /// `None` when the cart is empty.
    pub fn checkout(&mut self, shipping: ShippingDetails) -> Option<Order> {
        if self.state.cart.is_empty() {
            tracing::warn!("Refusing checkout: cart is empty");
            return None;
        }

        let now = Utc::now();
        let order = Order::new(
            OrderId::new(now.timestamp_millis()),
            self.state.cart.clone(),
            self.state.checkout_total(),
            shipping,
            now,
        );
        self.dispatch(Action::add_order(order.clone()));
        Some(order)
    }

    /// Stop the writer thread, draining queued writes.
    ///
    /// Returns the writer's statistics; zero for a store without storage.
    pub fn close(mut self) -> WriteStats {
        self.writer
            .take()
            .map_or_else(WriteStats::default, SliceWriter::stop)
    }
}
