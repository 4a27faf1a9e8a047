use crate::domain::cart::{Cart, CartLine};
use crate::domain::menu::Price;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier minted by the order sink when a submission is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub String);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Completed,
    Cancelled,
}

/// One line of a finalized order, copied from the cart at submission time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub item_id: String,
    pub name: String,
    pub price: Price,
    pub quantity: u32,
}

impl From<&CartLine> for OrderLine {
    fn from(line: &CartLine) -> Self {
        Self {
            item_id: line.item_id.clone(),
            name: line.name.clone(),
            price: line.price,
            quantity: line.quantity,
        }
    }
}

/// Immutable snapshot of a cart handed to the order sink.
///
/// `total` is computed from the snapshot lines here, once, and never
/// recomputed from live menu prices afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSubmission {
    pub customer_name: String,
    pub lines: Vec<OrderLine>,
    pub total: Decimal,
    pub status: OrderStatus,
}

impl OrderSubmission {
    /// Snapshots `cart` for `customer_name`. The cart itself is untouched.
    pub fn from_cart(customer_name: &str, cart: &Cart) -> Self {
        Self {
            customer_name: customer_name.to_owned(),
            lines: cart.lines().iter().map(OrderLine::from).collect(),
            total: cart.total(),
            status: OrderStatus::Pending,
        }
    }
}

/// An accepted submission as the sink stores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: OrderId,
    pub customer_name: String,
    pub lines: Vec<OrderLine>,
    pub total: Decimal,
    pub placed_at: DateTime<Utc>,
    pub status: OrderStatus,
}

/// Push notification emitted by the order sink, so dashboards follow order
/// activity without polling.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderEvent {
    Placed(OrderRecord),
    StatusChanged { id: OrderId, status: OrderStatus },
}
