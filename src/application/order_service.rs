use std::sync::Arc;

use crate::domain::errors::DomainError;
use crate::domain::order::{
    CustomerDetails, NewOrder, Order, OrderItem, OrderStatus, RequestedLine,
};
use crate::domain::ports::{MenuRepository, OrderRepository};

/// Order operations. Placement resolves the requested lines against the
/// menu; an order with no surviving lines is rejected without being stored.
pub struct OrderService<M, R> {
    menu: Arc<M>,
    repo: R,
}

impl<M: MenuRepository, R: OrderRepository> OrderService<M, R> {
    pub fn new(menu: Arc<M>, repo: R) -> Self {
        Self { menu, repo }
    }

    pub fn list_orders(&self) -> Vec<Order> {
        self.repo.list()
    }

    pub fn get_order(&self, id: u32) -> Option<Order> {
        self.repo.find(id)
    }

    /// Lines are dropped when the food id does not parse, the quantity does
    /// not parse as a positive integer, the item is missing from the menu,
    /// or the item is unavailable. Surviving lines copy the item's name and
    /// price, so later menu changes never affect the stored order.
    pub fn place_order(
        &self,
        customer: CustomerDetails,
        requested: Vec<RequestedLine>,
    ) -> Result<Order, DomainError> {
        let items: Vec<OrderItem> = requested
            .iter()
            .filter_map(|line| self.resolve_line(line))
            .collect();

        if items.is_empty() {
            return Err(DomainError::NoItemsSelected);
        }

        Ok(self.repo.insert(NewOrder { customer, items }))
    }

    // The menu read is a snapshot: a concurrent delete between form
    // submission and this lookup just makes the line resolve to nothing.
    fn resolve_line(&self, line: &RequestedLine) -> Option<OrderItem> {
        let food_id = line.food_id.trim().parse::<u32>().ok()?;
        let quantity = line
            .quantity
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|quantity| *quantity > 0)?;
        let item = self.menu.find(food_id)?;
        if !item.available {
            return None;
        }
        Some(OrderItem {
            food_id,
            quantity,
            food_name: item.name,
            unit_price: item.price,
        })
    }

    pub fn update_status(&self, id: u32, status: OrderStatus) -> bool {
        self.repo.update_status(id, status)
    }

    pub fn remove_order(&self, id: u32) -> bool {
        self.repo.remove(id)
    }

    pub fn order_count(&self) -> usize {
        self.repo.count()
    }
}
