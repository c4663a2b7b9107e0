use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// A dish on the menu. The id is assigned once by the menu store and never
/// reused, even after deletion. `available` gates whether the item can be
/// newly ordered; it has no effect on orders already placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub category: String,
    pub available: bool,
}

/// Validated input for a new menu entry. The store assigns the id and
/// defaults `available` to true.
#[derive(Debug, Clone)]
pub struct NewFoodItem {
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub category: String,
}
