//! Store runtime for Fashionista.
//!
//! This crate wraps the pure domain from `fashionista-core` in an owned
//! [`Store`]: it loads the product catalog, seeds state from persisted
//! slices, applies actions through the reducer, notifies slice
//! subscribers, and hands changed slices to a background writer thread.
//!
//! # Architecture
//!
//! The engine is deliberately synchronous. Dispatch happens on the
//! caller's thread; the only other thread is the persistence worker,
//! which drains a channel of serialized slice payloads so that disk
//! latency never blocks a dispatch. There is no async runtime.
//!
//! # Modules
//!
//! - [`store`] - The owned store: dispatch, subscriptions, checkout
//! - [`persist`] - Slice storage port, backends, and the writer thread
//! - [`catalog`] - Product catalog loading (built-in or from a file)
//! - [`config`] - Environment-based configuration
//! - [`error`] - Umbrella error type

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod persist;
pub mod store;

pub use config::StoreConfig;
pub use error::{EngineError, Result};
pub use persist::{JsonFileStorage, MemoryStorage, SliceStorage};
pub use store::Store;
