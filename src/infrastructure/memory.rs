use std::sync::atomic::{AtomicU32, Ordering};

use bigdecimal::BigDecimal;
use chrono::Utc;
use dashmap::DashMap;

use crate::domain::menu::{FoodItem, NewFoodItem};
use crate::domain::order::{NewOrder, Order, OrderItem, OrderStatus};
use crate::domain::ports::{MenuRepository, OrderRepository};

// ── Menu store ───────────────────────────────────────────────────────────────

/// Menu store backed by a concurrent map. Ids come from an atomic counter
/// starting at 1 and are never reused, even after deletion.
pub struct InMemoryMenuRepository {
    items: DashMap<u32, FoodItem>,
    next_id: AtomicU32,
}

impl InMemoryMenuRepository {
    pub fn new() -> Self {
        Self {
            items: DashMap::new(),
            next_id: AtomicU32::new(1),
        }
    }
}

impl Default for InMemoryMenuRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuRepository for InMemoryMenuRepository {
    fn insert(&self, item: NewFoodItem) -> FoodItem {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let item = FoodItem {
            id,
            name: item.name,
            description: item.description,
            price: item.price,
            category: item.category,
            available: true,
        };
        self.items.insert(id, item.clone());
        item
    }

    fn find(&self, id: u32) -> Option<FoodItem> {
        self.items.get(&id).map(|entry| entry.value().clone())
    }

    fn list(&self) -> Vec<FoodItem> {
        let mut items: Vec<FoodItem> = self.items.iter().map(|entry| entry.value().clone()).collect();
        items.sort_by_key(|item| item.id);
        items
    }

    fn set_availability(&self, id: u32, available: bool) -> bool {
        match self.items.get_mut(&id) {
            Some(mut entry) => {
                entry.available = available;
                true
            }
            None => false,
        }
    }

    fn remove(&self, id: u32) -> bool {
        self.items.remove(&id).is_some()
    }

    fn count(&self) -> usize {
        self.items.len()
    }
}

// ── Order store ──────────────────────────────────────────────────────────────

pub struct InMemoryOrderRepository {
    orders: DashMap<u32, Order>,
    next_id: AtomicU32,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self {
            orders: DashMap::new(),
            next_id: AtomicU32::new(1),
        }
    }
}

impl Default for InMemoryOrderRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderRepository for InMemoryOrderRepository {
    fn insert(&self, order: NewOrder) -> Order {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let total: BigDecimal = order.items.iter().map(OrderItem::line_total).sum();
        let order = Order {
            id,
            customer_name: order.customer.name,
            customer_address: order.customer.address,
            customer_phone: order.customer.phone,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
            items: order.items,
            total,
        };
        self.orders.insert(id, order.clone());
        order
    }

    fn find(&self, id: u32) -> Option<Order> {
        self.orders.get(&id).map(|entry| entry.value().clone())
    }

    fn list(&self) -> Vec<Order> {
        let mut orders: Vec<Order> = self.orders.iter().map(|entry| entry.value().clone()).collect();
        orders.sort_by_key(|order| order.id);
        orders
    }

    fn update_status(&self, id: u32, status: OrderStatus) -> bool {
        match self.orders.get_mut(&id) {
            Some(mut entry) => {
                entry.status = status;
                true
            }
            None => false,
        }
    }

    fn remove(&self, id: u32) -> bool {
        self.orders.remove(&id).is_some()
    }

    fn count(&self) -> usize {
        self.orders.len()
    }
}
