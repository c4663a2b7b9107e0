use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(OrderStatus::Pending),
            "Completed" => Ok(OrderStatus::Completed),
            "Cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(DomainError::InvalidInput(format!(
                "unknown order status '{other}'"
            ))),
        }
    }
}

/// One line of an order. `food_name` and `unit_price` are copied from the
/// menu at placement time; later menu edits or deletions do not touch them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub food_id: u32,
    pub quantity: u32,
    pub food_name: String,
    pub unit_price: BigDecimal,
}

impl OrderItem {
    pub fn line_total(&self) -> BigDecimal {
        &self.unit_price * BigDecimal::from(self.quantity)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: u32,
    pub customer_name: String,
    pub customer_address: String,
    pub customer_phone: String,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderItem>,
    pub total: BigDecimal,
}

/// Customer details captured with an order, free text as submitted.
#[derive(Debug, Clone, Default)]
pub struct CustomerDetails {
    pub name: String,
    pub address: String,
    pub phone: String,
}

/// One checkbox row from the order form, still unparsed. Lines that fail to
/// parse or resolve are dropped during placement.
#[derive(Debug, Clone)]
pub struct RequestedLine {
    pub food_id: String,
    pub quantity: String,
}

/// A resolved order ready for insertion. The store assigns the id, the
/// timestamp and the total.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub customer: CustomerDetails,
    pub items: Vec<OrderItem>,
}
