//! Order store: an arena of order records addressed by stable ids.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

use boxoffice_core::types::id::{OrderId, ShowtimeId};
use boxoffice_core::{AppError, AppResult};
use boxoffice_entity::order::Order;

/// Owns every order record; all access goes through the id.
#[derive(Debug, Default)]
pub struct OrderStore {
    orders: DashMap<OrderId, Order>,
    next_id: AtomicU64,
}

impl OrderStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            orders: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Reserve the next order id.
    ///
    /// Ids are handed out before the order exists so the seat hold can
    /// be tagged with it; an id whose hold fails is simply never
    /// inserted.
    pub fn next_id(&self) -> OrderId {
        OrderId::new(self.next_id.fetch_add(1, Ordering::SeqCst))
    }

    /// Insert a newly created order.
    pub fn insert(&self, order: Order) {
        self.orders.insert(order.id, order);
    }

    /// Look up an order by id.
    pub fn get(&self, order_id: OrderId) -> AppResult<Order> {
        self.orders
            .get(&order_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AppError::not_found(format!("Order {order_id} not found")))
    }

    /// Apply a mutation to an order and return the updated record.
    pub fn update<F>(&self, order_id: OrderId, mutate: F) -> AppResult<Order>
    where
        F: FnOnce(&mut Order),
    {
        let mut entry = self
            .orders
            .get_mut(&order_id)
            .ok_or_else(|| AppError::not_found(format!("Order {order_id} not found")))?;
        mutate(entry.value_mut());
        Ok(entry.value().clone())
    }

    /// All orders for one showtime, in id order.
    pub fn list_by_showtime(&self, showtime_id: ShowtimeId) -> Vec<Order> {
        let mut results: Vec<Order> = self
            .orders
            .iter()
            .filter(|entry| entry.value().showtime_id == showtime_id)
            .map(|entry| entry.value().clone())
            .collect();
        results.sort_by_key(|o| o.id);
        results
    }

    /// Number of stored orders.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
