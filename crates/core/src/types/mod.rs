//! Core types for the Fashionista shopping state.
//!
//! This module provides the domain vocabulary: products and categories,
//! cart lines and their identity keys, filters, users, and orders.

pub mod cart;
pub mod filters;
pub mod id;
pub mod order;
pub mod product;
pub mod user;

pub use cart::{CartAddition, CartLine, LineKey};
pub use filters::{CategoryFilter, FilterUpdate, Filters, PriceRange, SortKey};
pub use id::{OrderId, ProductId, UserId};
pub use order::{Order, OrderStatus, ShippingDetails};
pub use product::{Category, Product};
pub use user::{Email, EmailError, User};
