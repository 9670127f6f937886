//! Order history records.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::cart::CartLine;
use super::id::OrderId;

/// Order lifecycle status.
///
/// Checkout in this engine is a local simulation, so every order it creates
/// starts and stays at `confirmed`; the remaining states exist for persisted
/// histories written by a fuller backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Confirmed,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Confirmed => "confirmed",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        };
        write!(f, "{label}")
    }
}

/// Shipping address snapshot captured at checkout.
///
/// Payment card fields are deliberately not part of this snapshot; the
/// checkout simulation discards them at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub zip_code: String,
    pub country: String,
}

/// An immutable order snapshot created at checkout.
///
/// Orders are append-only: once placed they are never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Host-stamped identifier (epoch milliseconds at checkout).
    pub id: OrderId,
    /// Cart lines as they were when the order was placed.
    pub items: Vec<CartLine>,
    /// Grand total: subtotal + shipping + tax.
    pub total: Decimal,
    /// Shipping form snapshot.
    pub shipping: ShippingDetails,
    /// Lifecycle status.
    pub status: OrderStatus,
    /// When the order was placed.
    pub placed_at: DateTime<Utc>,
}

impl Order {
    /// Create a confirmed order snapshot.
    ///
    /// The id and timestamp come from the host; this crate has no clock.
    #[must_use]
    pub const fn new(
        id: OrderId,
        items: Vec<CartLine>,
        total: Decimal,
        shipping: ShippingDetails,
        placed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            items,
            total,
            shipping,
            status: OrderStatus::Confirmed,
            placed_at,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

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

    #[test]
    fn test_new_order_is_confirmed() {
        let order = Order::new(
            OrderId::new(1_700_000_000_000),
            Vec::new(),
            Decimal::new(6940, 2),
            shipping(),
            Utc::now(),
        );
        assert_eq!(order.status, OrderStatus::Confirmed);
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Confirmed).unwrap(),
            "\"confirmed\""
        );
        let back: OrderStatus = serde_json::from_str("\"shipped\"").unwrap();
        assert_eq!(back, OrderStatus::Shipped);
        assert_eq!(OrderStatus::Cancelled.to_string(), "cancelled");
    }

    #[test]
    fn test_order_serde_roundtrip() {
        let order = Order::new(
            OrderId::new(1_700_000_000_000),
            Vec::new(),
            Decimal::new(6940, 2),
            shipping(),
            Utc::now(),
        );
        let json = serde_json::to_string(&order).unwrap();
        let back: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(back, order);
    }
}
