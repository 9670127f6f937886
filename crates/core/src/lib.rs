//! Fashionista Core - Pure shopping-state domain.
//!
//! This crate is the heart of the Fashionista storefront engine:
//! - [`types`] - Products, cart lines, filters, users, orders
//! - [`action`] - The closed set of state transitions ([`Action`])
//! - [`state`] - The authoritative state container ([`ShopState`])
//! - [`reducer`] - The pure transition function ([`reduce`])
//! - [`views`] - Derived read models (filtered listings, totals, badges)
//! - [`slice`] - The independently persisted state slices
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no clock,
//! no threads. State changes flow exclusively through [`reduce`], which takes
//! the current state and an action by value and returns the next state;
//! untouched slices are moved, never copied. Everything readable is either
//! the state itself or a derivation recomputed on call.
//!
//! Hosts (the engine crate, the CLI) own the state, stamp ids and timestamps,
//! and perform persistence. Nothing in here can fail at runtime: transitions
//! that reference missing entities leave the state unchanged.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod action;
pub mod reducer;
pub mod slice;
pub mod state;
pub mod types;
pub mod views;

pub use action::Action;
pub use reducer::reduce;
pub use slice::Slice;
pub use state::ShopState;
pub use types::*;
