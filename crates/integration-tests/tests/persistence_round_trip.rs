//! Persistence across store restarts.
//!
//! Each test opens a file-backed store over a temporary data directory,
//! acts on it, closes it (draining the writer), and reopens to observe
//! what survived. The built-in catalog seeds every run, the way a real
//! invocation would.

#![allow(clippy::unwrap_used)]

use std::num::NonZeroU32;

use fashionista_core::Action;
use fashionista_core::types::ProductId;
use fashionista_engine::{Store, StoreConfig};

fn add_builtin_item(store: &mut Store, id: i32, quantity: u32) {
    let item = store.state().product(ProductId::new(id)).unwrap().clone();
    let size = item.sizes.first().unwrap().clone();
    let color = item.colors.first().unwrap().clone();
    store.dispatch(Action::add_to_cart(
        item,
        size,
        color,
        NonZeroU32::new(quantity),
    ));
}

// =============================================================================
// Restart Round Trips
// =============================================================================

#[test]
fn test_cart_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::with_data_dir(dir.path());

    let mut store = Store::open(&config).unwrap();
    add_builtin_item(&mut store, 1, 2);
    add_builtin_item(&mut store, 5, 1);
    let total_before = store.state().cart_total();
    let stats = store.close();
    assert_eq!(stats.failures, 0);

    let reopened = Store::open(&config).unwrap();
    assert_eq!(reopened.state().cart_count(), 3);
    assert_eq!(reopened.state().cart_total(), total_before);
    reopened.close();
}

#[test]
fn test_all_four_slices_get_their_own_files() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::with_data_dir(dir.path());

    let mut store = Store::open(&config).unwrap();
    add_builtin_item(&mut store, 2, 1);
    let wishlisted = store.state().product(ProductId::new(3)).unwrap().clone();
    store.dispatch(Action::toggle_wishlist(wishlisted));
    assert!(store.dispatch_json(
        r#"{"type":"LOGIN","payload":{"id":1700000000000,"name":"maya","email":"maya@example.com"}}"#
    ));
    store
        .checkout(sample_shipping())
        .expect("cart was not empty");
    store.close();

    for file in ["cart.json", "wishlist.json", "user.json", "orders.json"] {
        assert!(dir.path().join(file).is_file(), "missing {file}");
    }

    // Each file is a self-describing JSON value, not an opaque blob.
    let cart: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("cart.json")).unwrap())
            .unwrap();
    assert!(cart.is_array());
    let user: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("user.json")).unwrap())
            .unwrap();
    assert_eq!(user.get("name").and_then(serde_json::Value::as_str), Some("maya"));
}

#[test]
fn test_wishlist_user_and_orders_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::with_data_dir(dir.path());

    let mut store = Store::open(&config).unwrap();
    let wishlisted = store.state().product(ProductId::new(7)).unwrap().clone();
    store.dispatch(Action::toggle_wishlist(wishlisted));
    assert!(store.dispatch_json(
        r#"{"type":"LOGIN","payload":{"id":1700000000000,"name":"maya","email":"maya@example.com"}}"#
    ));
    add_builtin_item(&mut store, 4, 1);
    store
        .checkout(sample_shipping())
        .expect("cart was not empty");
    store.close();

    let reopened = Store::open(&config).unwrap();
    assert!(reopened.state().is_in_wishlist(ProductId::new(7)));
    assert_eq!(reopened.state().user.as_ref().unwrap().name, "maya");
    assert_eq!(reopened.state().orders.len(), 1);
    // The order emptied the cart before anything was persisted again.
    assert!(reopened.state().cart.is_empty());
    reopened.close();
}

// =============================================================================
// Corruption Recovery
// =============================================================================

#[test]
fn test_corrupt_slice_defaults_while_others_load() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::with_data_dir(dir.path());

    let mut store = Store::open(&config).unwrap();
    add_builtin_item(&mut store, 1, 2);
    assert!(store.dispatch_json(
        r#"{"type":"LOGIN","payload":{"id":1700000000000,"name":"maya","email":"maya@example.com"}}"#
    ));
    store.close();

    // A partial write or an editor mishap leaves one file unreadable.
    std::fs::write(dir.path().join("cart.json"), "{truncated").unwrap();

    let reopened = Store::open(&config).unwrap();
    assert!(reopened.state().cart.is_empty());
    assert_eq!(reopened.state().user.as_ref().unwrap().name, "maya");
    reopened.close();
}

#[test]
fn test_logout_persists_as_null_user() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::with_data_dir(dir.path());

    let mut store = Store::open(&config).unwrap();
    assert!(store.dispatch_json(
        r#"{"type":"LOGIN","payload":{"id":1700000000000,"name":"maya","email":"maya@example.com"}}"#
    ));
    store.dispatch(Action::Logout);
    store.close();

    assert_eq!(
        std::fs::read_to_string(dir.path().join("user.json")).unwrap(),
        "null"
    );
    let reopened = Store::open(&config).unwrap();
    assert!(reopened.state().user.is_none());
    reopened.close();
}

fn sample_shipping() -> fashionista_core::types::ShippingDetails {
    fashionista_core::types::ShippingDetails {
        first_name: "Maya".to_string(),
        last_name: "Kade".to_string(),
        email: "maya@example.com".to_string(),
        address: "1 Canal St".to_string(),
        city: "Amsterdam".to_string(),
        zip_code: "1011".to_string(),
        country: "NL".to_string(),
    }
}
