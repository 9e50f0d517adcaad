//! Order ledger store
//!
//! Append-biased collection of placed orders. New orders are prepended so
//! the in-memory sequence is already newest-first; the staff view re-sorts
//! by timestamp anyway and the two must agree.
//!
//! Status changes go through an explicit state machine
//! ([`shared::models::OrderStatus::can_transition`]). Illegal transitions
//! are rejected with a typed error instead of silently accepted; the
//! discipline lives in the store, not in which buttons a UI shows.

use crate::storage::{ORDERS_SLOT, SlotStore, StorageResult};
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult};
use shared::models::{Order, OrderStatus};

/// Order ledger backed by the `orders` slot
pub struct OrderLedger {
    store: SlotStore,
    orders: Vec<Order>,
}

impl OrderLedger {
    /// Load the ledger from its slot; absent or unreadable means empty.
    pub fn load(store: SlotStore) -> Self {
        let orders = store.load_or_default(ORDERS_SLOT, Vec::new);
        Self { store, orders }
    }

    /// All orders, newest first
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn get(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    /// Prepend a new order and persist the whole ledger.
    pub fn add(&mut self, order: Order) -> StorageResult<()> {
        tracing::info!(
            order_id = %order.id,
            customer = %order.customer_name,
            total = %order.total,
            "Order placed"
        );
        self.orders.insert(0, order);
        self.persist()
    }

    /// Apply a status transition to the matching order.
    ///
    /// Unknown ids and illegal transitions (anything outside
    /// Pending -> {Cooking, Cancelled}, Cooking -> Completed) are rejected;
    /// the ledger is left untouched in both cases.
    pub fn update_status(&mut self, id: &str, next: OrderStatus) -> AppResult<()> {
        let order = self
            .orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| AppError::order_not_found(id))?;

        if !order.status.can_transition(next) {
            return Err(AppError::invalid_transition(order.status, next));
        }

        tracing::info!(order_id = %id, from = ?order.status, to = ?next, "Order status changed");
        order.status = next;
        self.persist()?;
        Ok(())
    }

    /// Empty the ledger and remove its persisted slot entirely.
    ///
    /// Irreversible and unscoped: every order goes, regardless of status.
    pub fn clear(&mut self) -> StorageResult<()> {
        tracing::warn!(count = self.orders.len(), "Clearing order history");
        self.orders.clear();
        self.store.remove_slot(ORDERS_SLOT)
    }

    // ========== Derived reads (recomputed on every access) ==========

    /// Orders still waiting for the kitchen. O(n) over the ledger; n stays
    /// small at stall scale, memoize on a version counter before caching
    /// matters.
    pub fn pending_count(&self) -> usize {
        self.orders
            .iter()
            .filter(|o| o.status == OrderStatus::Pending)
            .count()
    }

    /// Staff display list: optional status filter, then timestamp
    /// descending. The sort is stable, so orders whose timestamps collide
    /// keep their insertion order.
    pub fn filtered_sorted(&self, filter: Option<OrderStatus>) -> Vec<&Order> {
        let mut view: Vec<&Order> = self
            .orders
            .iter()
            .filter(|o| filter.is_none_or(|s| o.status == s))
            .collect();
        view.sort_by_key(|o| std::cmp::Reverse(o.timestamp));
        view
    }

    /// Gross takings: the frozen total of every non-cancelled order.
    /// Pending and cooking orders count as revenue before the money is
    /// collected; that simplification is intentional.
    pub fn revenue(&self) -> Decimal {
        self.orders
            .iter()
            .filter(|o| o.status != OrderStatus::Cancelled)
            .map(|o| o.total)
            .sum()
    }

    fn persist(&self) -> StorageResult<()> {
        self.store.write_slot(ORDERS_SLOT, &self.orders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::ORDERS_SLOT;
    use shared::error::ErrorCode;
    use shared::models::{CartItem, Category, MenuItem};
    use shared::util;

    fn test_item(id: &str, cents: i64) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: format!("Dish {id}"),
            description: "test dish".to_string(),
            price: Decimal::new(cents, 2),
            image: String::new(),
            category: Category::Main,
            is_popular: false,
            is_available: true,
        }
    }

    fn test_order(id: &str, timestamp: i64, cents: i64) -> Order {
        let item = test_item("1", cents);
        Order {
            id: id.to_string(),
            customer_name: "Test".to_string(),
            items: vec![CartItem { item, quantity: 1 }],
            total: Decimal::new(cents, 2),
            status: OrderStatus::Pending,
            timestamp,
            note: None,
        }
    }

    fn ledger() -> OrderLedger {
        OrderLedger::load(SlotStore::open_in_memory().unwrap())
    }

    #[test]
    fn add_prepends_newest_first() {
        let mut ledger = ledger();
        ledger.add(test_order("a", 1, 100)).unwrap();
        ledger.add(test_order("b", 2, 200)).unwrap();

        assert_eq!(ledger.orders()[0].id, "b");
        assert_eq!(ledger.orders()[1].id, "a");
    }

    #[test]
    fn pending_count_follows_status_changes() {
        let mut ledger = ledger();
        ledger.add(test_order("a", 1, 100)).unwrap();
        ledger.add(test_order("b", 2, 200)).unwrap();
        ledger.add(test_order("c", 3, 300)).unwrap();
        assert_eq!(ledger.pending_count(), 3);

        ledger.update_status("a", OrderStatus::Cooking).unwrap();
        assert_eq!(ledger.pending_count(), 2);

        ledger.update_status("b", OrderStatus::Cancelled).unwrap();
        assert_eq!(ledger.pending_count(), 1);

        ledger.update_status("a", OrderStatus::Completed).unwrap();
        assert_eq!(ledger.pending_count(), 1);
    }

    #[test]
    fn illegal_transitions_are_rejected_and_leave_ledger_untouched() {
        let mut ledger = ledger();
        ledger.add(test_order("a", 1, 100)).unwrap();
        ledger.update_status("a", OrderStatus::Cooking).unwrap();
        ledger.update_status("a", OrderStatus::Completed).unwrap();

        // Completed is terminal
        let err = ledger
            .update_status("a", OrderStatus::Pending)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidTransition);
        assert_eq!(ledger.get("a").unwrap().status, OrderStatus::Completed);

        // Cooking cannot be cancelled
        ledger.add(test_order("b", 2, 200)).unwrap();
        ledger.update_status("b", OrderStatus::Cooking).unwrap();
        let err = ledger
            .update_status("b", OrderStatus::Cancelled)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidTransition);
        assert_eq!(ledger.get("b").unwrap().status, OrderStatus::Cooking);
    }

    #[test]
    fn unknown_order_id_is_an_error() {
        let mut ledger = ledger();
        let err = ledger
            .update_status("nope", OrderStatus::Cooking)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderNotFound);
    }

    #[test]
    fn clear_removes_the_slot_entirely() {
        let mut ledger = ledger();
        ledger.add(test_order("a", 1, 100)).unwrap();
        assert!(ledger.store.contains_slot(ORDERS_SLOT).unwrap());

        ledger.clear().unwrap();
        assert!(ledger.orders().is_empty());
        // Slot key is gone, not just an empty array
        assert!(!ledger.store.contains_slot(ORDERS_SLOT).unwrap());
    }

    #[test]
    fn filtered_sorted_filters_then_sorts_descending() {
        let mut ledger = ledger();
        ledger.add(test_order("old", 10, 100)).unwrap();
        ledger.add(test_order("new", 30, 100)).unwrap();
        ledger.add(test_order("mid", 20, 100)).unwrap();
        ledger.update_status("mid", OrderStatus::Cooking).unwrap();

        let all = ledger.filtered_sorted(None);
        let ids: Vec<&str> = all.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "mid", "old"]);

        let pending = ledger.filtered_sorted(Some(OrderStatus::Pending));
        let ids: Vec<&str> = pending.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "old"]);
    }

    #[test]
    fn colliding_timestamps_keep_insertion_order() {
        let mut ledger = ledger();
        // Same millisecond; prepend order means "second" sits first
        ledger.add(test_order("first", 5, 100)).unwrap();
        ledger.add(test_order("second", 5, 100)).unwrap();

        let view = ledger.filtered_sorted(None);
        assert_eq!(view[0].id, "second");
        assert_eq!(view[1].id, "first");
    }

    #[test]
    fn revenue_counts_everything_but_cancelled() {
        let mut ledger = ledger();
        ledger.add(test_order("a", 1, 300)).unwrap(); // stays pending
        ledger.add(test_order("b", 2, 200)).unwrap();
        ledger.add(test_order("c", 3, 100)).unwrap();
        ledger.update_status("b", OrderStatus::Cooking).unwrap();
        ledger.update_status("c", OrderStatus::Cancelled).unwrap();

        // 3.00 pending + 2.00 cooking; the cancelled 1.00 is out
        assert_eq!(ledger.revenue(), Decimal::new(500, 2));
    }

    #[test]
    fn order_total_stays_frozen_after_item_price_changes() {
        let mut ledger = ledger();
        let order = test_order("a", util::now_millis(), 300);
        let frozen = order.total;
        ledger.add(order).unwrap();

        // Reprice the same dish in a catalog; the ledger keeps its snapshot
        let mut catalog = crate::catalog::MenuCatalog::load(SlotStore::open_in_memory().unwrap());
        let mut repriced = catalog.items()[0].clone();
        repriced.price = Decimal::new(999, 2);
        catalog.update(repriced).unwrap();

        assert_eq!(ledger.get("a").unwrap().total, frozen);
        assert_eq!(ledger.revenue(), frozen);
    }
}
