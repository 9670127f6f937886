//! Integration tests for Fashionista.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p fashionista-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `persistence_round_trip` - Slices surviving store restarts, corrupt
//!   payload recovery, on-disk layout
//! - `checkout_flow` - Cart to order end to end, including the exact
//!   shipping and tax math
//!
//! The tests exercise the public surface of `fashionista-core` and
//! `fashionista-engine` together over real (temporary) data directories;
//! nothing here reaches a network.
