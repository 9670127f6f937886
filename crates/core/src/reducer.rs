//! The pure state transition function.
//!
//! `reduce` is the only way shop state changes. It takes the current state
//! and one action by value and returns the next state; slices the action
//! does not touch are moved into the result untouched. No I/O, no clock,
//! no randomness - ids and timestamps arrive inside action payloads.
//!
//! Transitions that reference something missing (an absent cart line, an
//! unknown product id) leave the state unchanged instead of failing: the
//! action stream is not validated upstream, and a reducer that can reject
//! would force every caller to handle errors that have no user-facing
//! meaning.

use crate::action::{Action, QuantityChange, ReviewSubmission};
use crate::state::ShopState;
use crate::types::{CartAddition, CartLine, FilterUpdate, LineKey, Order, Product, User};

/// Apply one action to the state, returning the next state.
#[must_use]
pub fn reduce(state: ShopState, action: Action) -> ShopState {
    match action {
        Action::AddToCart(addition) => add_to_cart(state, *addition),
        Action::RemoveFromCart(key) => remove_from_cart(state, &key),
        Action::UpdateCartQuantity(change) => update_cart_quantity(state, &change),
        Action::ClearCart => clear_cart(state),
        Action::ToggleWishlist(product) => toggle_wishlist(state, *product),
        Action::SetFilters(update) => set_filters(state, update),
        Action::Login(user) => login(state, user),
        Action::Logout => logout(state),
        Action::AddOrder(order) => add_order(state, *order),
        Action::AddReview(review) => add_review(state, &review),
    }
}

/// Merge into an existing line with the same identity key, or append.
fn add_to_cart(mut state: ShopState, addition: CartAddition) -> ShopState {
    let key = addition.line_key();
    let units = addition.units();
    if let Some(line) = state.cart.iter_mut().find(|line| line.matches(&key)) {
        line.quantity = line.quantity.saturating_add(units.get());
    } else {
        state.cart.push(CartLine {
            product: addition.product,
            size: addition.size,
            color: addition.color,
            quantity: units,
        });
    }
    state
}

fn remove_from_cart(mut state: ShopState, key: &LineKey) -> ShopState {
    state.cart.retain(|line| !line.matches(key));
    state
}

fn update_cart_quantity(mut state: ShopState, change: &QuantityChange) -> ShopState {
    if let Some(line) = state.cart.iter_mut().find(|line| line.matches(&change.key)) {
        line.quantity = change.quantity;
    }
    state
}

fn clear_cart(mut state: ShopState) -> ShopState {
    state.cart.clear();
    state
}

/// Membership is by product id; a second toggle removes the entry.
fn toggle_wishlist(mut state: ShopState, product: Product) -> ShopState {
    if state.wishlist.iter().any(|p| p.id == product.id) {
        state.wishlist.retain(|p| p.id != product.id);
    } else {
        state.wishlist.push(product);
    }
    state
}

fn set_filters(mut state: ShopState, update: FilterUpdate) -> ShopState {
    state.filters.apply(update);
    state
}

fn login(mut state: ShopState, user: User) -> ShopState {
    state.user = Some(user);
    state
}

fn logout(mut state: ShopState) -> ShopState {
    state.user = None;
    state
}

/// The appended order and the emptied cart commit in the same transition;
/// no intermediate state is ever observable.
fn add_order(mut state: ShopState, order: Order) -> ShopState {
    state.orders.push(order);
    state.cart.clear();
    state
}

/// Fold a rating into the product's running mean:
/// `new = (old_rating * old_count + rating) / (old_count + 1)`.
fn add_review(mut state: ShopState, review: &ReviewSubmission) -> ShopState {
    if !(1.0..=5.0).contains(&review.rating) {
        return state;
    }
    if let Some(product) = state
        .products
        .iter_mut()
        .find(|p| p.id == review.product_id)
    {
        let count = f64::from(product.reviews);
        product.rating = (product.rating * count + review.rating) / (count + 1.0);
        product.reviews += 1;
    }
    state
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::num::NonZeroU32;

    use chrono::Utc;
    use rust_decimal::Decimal;

    use super::*;
    use crate::types::{
        Category, CategoryFilter, Email, OrderId, ProductId, ShippingDetails, SortKey, UserId,
    };

    fn product(id: i32, name: &str, category: Category, price: Decimal) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            description: format!("{name} description"),
            category,
            price,
            original_price: price,
            rating: 4.0,
            reviews: 10,
            sizes: vec!["S".to_string(), "M".to_string()],
            colors: vec!["Black".to_string(), "White".to_string()],
            in_stock: true,
            featured: false,
            image: format!("https://images.example.com/{id}.jpg"),
        }
    }

    fn state_with_catalog() -> ShopState {
        ShopState::with_catalog(vec![
            product(1, "Linen Shirt", Category::Men, Decimal::new(4500, 2)),
            product(2, "Wrap Dress", Category::Women, Decimal::new(7900, 2)),
            product(3, "Trail Runners", Category::Shoes, Decimal::new(2000, 2)),
        ])
    }

    fn shipping() -> ShippingDetails {
        ShippingDetails {
            first_name: "Maya".to_string(),
            last_name: "Kade".to_string(),
            email: "maya@example.com".to_string(),
            address: "1 Canal St".to_string(),
            city: "Amsterdam".to_string(),
            zip_code: "1011".to_string(),
            country: "NL".to_string(),
        }
    }

    fn add(state: ShopState, id: i32, size: &str, color: &str, qty: u32) -> ShopState {
        let item = state
            .products
            .iter()
            .find(|p| p.id == ProductId::new(id))
            .unwrap()
            .clone();
        reduce(
            state,
            Action::add_to_cart(item, size.to_string(), color.to_string(), NonZeroU32::new(qty)),
        )
    }

    #[test]
    fn test_add_to_cart_accumulates_quantity() {
        let state = state_with_catalog();
        let state = add(state, 3, "M", "Black", 2);
        let state = add(state, 3, "M", "Black", 3);

        assert_eq!(state.cart.len(), 1);
        assert_eq!(state.cart.first().unwrap().quantity.get(), 5);
    }

    #[test]
    fn test_add_to_cart_distinct_keys_make_distinct_lines() {
        let state = state_with_catalog();
        let state = add(state, 3, "M", "Black", 1);
        let state = add(state, 3, "S", "Black", 1);
        let state = add(state, 3, "M", "White", 1);

        assert_eq!(state.cart.len(), 3);
    }

    #[test]
    fn test_add_to_cart_defaults_to_one_unit() {
        let state = state_with_catalog();
        let item = state.products.first().unwrap().clone();
        let state = reduce(
            state,
            Action::add_to_cart(item, "M".to_string(), "Black".to_string(), None),
        );
        assert_eq!(state.cart.first().unwrap().quantity.get(), 1);
    }

    #[test]
    fn test_remove_then_add_starts_fresh() {
        let state = add(state_with_catalog(), 3, "M", "Black", 2);
        let key = LineKey::new(ProductId::new(3), "M".to_string(), "Black".to_string());

        let state = reduce(state, Action::remove_from_cart(key));
        assert!(state.cart.is_empty());

        let state = add(state, 3, "M", "Black", 3);
        assert_eq!(state.cart.len(), 1);
        // The new line carries only the newly added quantity.
        assert_eq!(state.cart.first().unwrap().quantity.get(), 3);
    }

    #[test]
    fn test_remove_absent_key_is_noop() {
        let state = add(state_with_catalog(), 1, "M", "Black", 1);
        let before = state.clone();
        let key = LineKey::new(ProductId::new(99), "M".to_string(), "Black".to_string());

        let state = reduce(state, Action::remove_from_cart(key));
        assert_eq!(state, before);
    }

    #[test]
    fn test_update_cart_quantity() {
        let state = add(state_with_catalog(), 1, "M", "Black", 1);
        let key = LineKey::new(ProductId::new(1), "M".to_string(), "Black".to_string());

        let state = reduce(
            state,
            Action::update_cart_quantity(key, NonZeroU32::new(7).unwrap()),
        );
        assert_eq!(state.cart.first().unwrap().quantity.get(), 7);
    }

    #[test]
    fn test_update_cart_quantity_absent_key_is_noop() {
        let state = add(state_with_catalog(), 1, "M", "Black", 2);
        let before = state.clone();
        let key = LineKey::new(ProductId::new(1), "XL".to_string(), "Black".to_string());

        let state = reduce(
            state,
            Action::update_cart_quantity(key, NonZeroU32::new(9).unwrap()),
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_clear_cart() {
        let state = add(state_with_catalog(), 1, "M", "Black", 2);
        let state = add(state, 2, "S", "White", 1);

        let state = reduce(state, Action::ClearCart);
        assert!(state.cart.is_empty());
    }

    #[test]
    fn test_toggle_wishlist_is_its_own_inverse() {
        let state = state_with_catalog();
        let dress = state.products.get(1).unwrap().clone();

        let state = reduce(state, Action::toggle_wishlist(dress.clone()));
        assert_eq!(state.wishlist.len(), 1);

        let state = reduce(state, Action::toggle_wishlist(dress));
        assert!(state.wishlist.is_empty());
    }

    #[test]
    fn test_toggle_wishlist_no_duplicates_by_id() {
        let state = state_with_catalog();
        let shirt = state.products.first().unwrap().clone();
        let state = reduce(state, Action::toggle_wishlist(shirt.clone()));

        // Toggling a stale copy of the same product removes, never duplicates.
        let mut stale = shirt;
        stale.rating = 1.0;
        let state = reduce(state, Action::toggle_wishlist(stale));
        assert!(state.wishlist.is_empty());
    }

    #[test]
    fn test_add_order_empties_cart_in_same_transition() {
        let state = add(state_with_catalog(), 1, "M", "Black", 2);
        let state = add(state, 3, "S", "White", 3);
        assert!(!state.cart.is_empty());

        let order = Order::new(
            OrderId::new(1_700_000_000_000),
            state.cart.clone(),
            Decimal::new(16200, 2),
            shipping(),
            Utc::now(),
        );
        let state = reduce(state, Action::add_order(order));

        assert_eq!(state.orders.len(), 1);
        assert!(state.cart.is_empty());
        assert_eq!(state.orders.first().unwrap().items.len(), 2);
    }

    #[test]
    fn test_login_then_logout() {
        let user = User::from_email(
            UserId::new(1_700_000_000_000),
            Email::parse("maya@example.com").unwrap(),
        );
        let state = reduce(state_with_catalog(), Action::login(user.clone()));
        assert_eq!(state.user.as_ref(), Some(&user));

        let state = reduce(state, Action::Logout);
        assert!(state.user.is_none());
    }

    #[test]
    fn test_set_filters_keeps_unspecified_fields() {
        let state = reduce(
            state_with_catalog(),
            Action::set_filters(FilterUpdate {
                search: Some("linen".to_string()),
                ..FilterUpdate::default()
            }),
        );
        let state = reduce(
            state,
            Action::set_filters(FilterUpdate {
                category: Some(CategoryFilter::Men),
                ..FilterUpdate::default()
            }),
        );

        assert_eq!(state.filters.search, "linen");
        assert_eq!(state.filters.category, CategoryFilter::Men);
        assert_eq!(state.filters.sort_by, SortKey::Featured);
    }

    #[test]
    fn test_add_review_updates_running_mean() {
        // rating 4.0 over 10 reviews, then a 5: (4*10 + 5) / 11.
        let state = reduce(
            state_with_catalog(),
            Action::add_review(ProductId::new(1), 5.0),
        );

        let reviewed = state.products.first().unwrap();
        assert!((reviewed.rating - 45.0 / 11.0).abs() < 1e-9);
        assert_eq!(reviewed.reviews, 11);
    }

    #[test]
    fn test_add_review_unknown_product_is_noop() {
        let state = state_with_catalog();
        let before = state.clone();
        let state = reduce(state, Action::add_review(ProductId::new(404), 5.0));
        assert_eq!(state, before);
    }

    #[test]
    fn test_add_review_out_of_range_rating_is_noop() {
        let state = state_with_catalog();
        let before = state.clone();

        let state = reduce(state, Action::add_review(ProductId::new(1), 0.0));
        let state = reduce(state, Action::add_review(ProductId::new(1), 5.5));
        assert_eq!(state, before);
    }

    #[test]
    fn test_untouched_slices_pass_through() {
        let user = User::from_email(UserId::new(7), Email::parse("a@b.c").unwrap());
        let state = reduce(state_with_catalog(), Action::login(user.clone()));
        let products_before = state.products.clone();

        let state = add(state, 2, "S", "White", 1);

        assert_eq!(state.user.as_ref(), Some(&user));
        assert_eq!(state.products, products_before);
        assert!(state.orders.is_empty());
        assert!(state.wishlist.is_empty());
    }
}
