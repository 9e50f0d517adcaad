//! Order model and status state machine

use super::menu_item::MenuItem;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Cooking,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Legal transitions: Pending -> {Cooking, Cancelled};
    /// Cooking -> {Completed}. Completed and Cancelled are terminal.
    pub fn can_transition(self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (OrderStatus::Pending, OrderStatus::Cooking)
                | (OrderStatus::Pending, OrderStatus::Cancelled)
                | (OrderStatus::Cooking, OrderStatus::Completed)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }
}

/// Line item snapshot frozen into an order at checkout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    #[serde(flatten)]
    pub item: MenuItem,
    /// Positive quantity
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total(&self) -> Decimal {
        self.item.price * Decimal::from(self.quantity)
    }
}

/// A placed order
///
/// `total` is computed once at checkout and never recomputed, so later
/// catalog price changes do not retroactively affect history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: String,
    pub customer_name: String,
    pub items: Vec<CartItem>,
    pub total: Decimal,
    pub status: OrderStatus,
    /// Creation instant, UTC milliseconds
    pub timestamp: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
