//! Customer orders.
//!
//! An order starts `open`, may be replaced or deleted while open, and becomes `closed`
//! exactly once through the close action. A closed order is never rewritten.

use super::{require_text, ValidationError};
use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for Orders, rendered as `order<N>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrderId(pub u32);

const ORDER_PREFIX: &str = "order";

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", ORDER_PREFIX, self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid order id: {0}")]
pub struct InvalidOrderId(pub String);

impl FromStr for OrderId {
    type Err = InvalidOrderId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix(ORDER_PREFIX)
            .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|digits| digits.parse().ok())
            .map(OrderId)
            .ok_or_else(|| InvalidOrderId(s.to_string()))
    }
}

impl TryFrom<String> for OrderId {
    type Error = InvalidOrderId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OrderId> for String {
    fn from(id: OrderId) -> Self {
        id.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Open,
    Closed,
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Open => f.write_str("open"),
            OrderStatus::Closed => f.write_str("closed"),
        }
    }
}

/// One (product, quantity) line of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: String,
    pub quantity: u32,
}

impl OrderLine {
    pub fn new(product_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "order_id")]
    pub id: OrderId,
    pub customer_name: String,
    pub items: Vec<OrderLine>,
    pub status: OrderStatus,
    pub created_at: DateTime<FixedOffset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<DateTime<FixedOffset>>,
}

impl Order {
    pub fn is_closed(&self) -> bool {
        self.status == OrderStatus::Closed
    }
}

/// Current time in UTC, the zone every generated timestamp uses.
pub fn now() -> DateTime<FixedOffset> {
    Utc::now().into()
}

/// Payload for creating a new order. The id is always assigned by the order store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub customer_name: String,
    pub items: Vec<OrderLine>,
    #[serde(default)]
    pub status: Option<OrderStatus>,
    #[serde(default)]
    pub created_at: Option<DateTime<FixedOffset>>,
}

impl OrderCreate {
    pub fn new(customer_name: impl Into<String>, items: Vec<OrderLine>) -> Self {
        Self {
            customer_name: customer_name.into(),
            items,
            status: None,
            created_at: None,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(&self.customer_name, &self.items, self.status)
    }
}

/// Full replacement of an open order. An omitted `created_at` keeps the stored one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub customer_name: String,
    pub items: Vec<OrderLine>,
    #[serde(default)]
    pub status: Option<OrderStatus>,
    #[serde(default)]
    pub created_at: Option<DateTime<FixedOffset>>,
}

impl OrderUpdate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(&self.customer_name, &self.items, self.status)
    }
}

impl From<OrderCreate> for OrderUpdate {
    fn from(create: OrderCreate) -> Self {
        Self {
            customer_name: create.customer_name,
            items: create.items,
            status: create.status,
            created_at: create.created_at,
        }
    }
}

fn validate_fields(
    customer_name: &str,
    items: &[OrderLine],
    status: Option<OrderStatus>,
) -> Result<(), ValidationError> {
    require_text("customer_name", customer_name)?;
    if items.is_empty() {
        return Err(ValidationError::new("items", "must not be empty"));
    }
    for line in items {
        require_text("items.product_id", &line.product_id)?;
        if line.quantity == 0 {
            return Err(ValidationError::new("items.quantity", "must be greater than zero"));
        }
    }
    // `closed` is reachable only through the close action, which draws down inventory.
    if status == Some(OrderStatus::Closed) {
        return Err(ValidationError::new("status", "must be open"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_id_round_trips_through_text() {
        assert_eq!("order12".parse::<OrderId>().unwrap(), OrderId(12));
        assert_eq!(OrderId(3).to_string(), "order3");
        for bad in ["order", "12", "order-1", "orderx", "Order1", "order1 "] {
            assert!(bad.parse::<OrderId>().is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn reads_stored_order_format() {
        let json = r#"{
            "order_id": "order4",
            "customer_name": "Alice",
            "items": [{"product_id": "latte", "quantity": 2}],
            "status": "closed",
            "created_at": "2024-10-12T10:00:00+05:00"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.id, OrderId(4));
        assert!(order.is_closed());
        assert!(order.closed_at.is_none());

        let back = serde_json::to_value(&order).unwrap();
        assert_eq!(back["order_id"], "order4");
        assert_eq!(back["created_at"], "2024-10-12T10:00:00+05:00");
        assert!(back.get("closed_at").is_none());
    }

    #[test]
    fn create_payload_validation() {
        let ok = OrderCreate::new("Alice", vec![OrderLine::new("latte", 1)]);
        assert!(ok.validate().is_ok());

        let mut bad = ok.clone();
        bad.customer_name = "  ".into();
        assert_eq!(bad.validate().unwrap_err().field, "customer_name");

        let mut bad = ok.clone();
        bad.items.clear();
        assert_eq!(bad.validate().unwrap_err().field, "items");

        let mut bad = ok.clone();
        bad.items[0].quantity = 0;
        assert_eq!(bad.validate().unwrap_err().field, "items.quantity");

        let mut bad = ok;
        bad.status = Some(OrderStatus::Closed);
        assert_eq!(bad.validate().unwrap_err().field, "status");
    }
}
