use super::menu::{FoodItem, NewFoodItem};
use super::order::{NewOrder, Order, OrderStatus};

pub trait MenuRepository: Send + Sync + 'static {
    /// Assigns the next id and inserts with `available = true`.
    fn insert(&self, item: NewFoodItem) -> FoodItem;
    fn find(&self, id: u32) -> Option<FoodItem>;
    /// Id-ascending, so listings render in a stable order.
    fn list(&self) -> Vec<FoodItem>;
    /// Returns false without mutating anything when the id is unknown.
    fn set_availability(&self, id: u32, available: bool) -> bool;
    /// Returns whether an entry existed. Never cascades to orders.
    fn remove(&self, id: u32) -> bool;
    fn count(&self) -> usize;
}

pub trait OrderRepository: Send + Sync + 'static {
    /// Assigns the next id, stamps `created_at`, computes the total from the
    /// line items and stores the order as `Pending`.
    fn insert(&self, order: NewOrder) -> Order;
    fn find(&self, id: u32) -> Option<Order>;
    fn list(&self) -> Vec<Order>;
    fn update_status(&self, id: u32, status: OrderStatus) -> bool;
    fn remove(&self, id: u32) -> bool;
    fn count(&self) -> usize;
}
