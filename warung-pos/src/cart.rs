//! Ephemeral cart and checkout
//!
//! Owned by a single browsing session, never persisted, gone on drop.
//! Checkout only builds the order snapshot; appending it to the ledger is
//! the caller's move. There is no cross-store transaction behind it, and no
//! stock to decrement.

use rust_decimal::Decimal;
use shared::models::{CartItem, MenuItem, Order, OrderStatus};
use shared::util;

/// In-progress cart for one customer
#[derive(Debug, Default)]
pub struct Cart {
    lines: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartItem] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add one of the given item, snapshotting it. Adding the same item
    /// again bumps the quantity of the existing line.
    pub fn add(&mut self, item: &MenuItem) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.item.id == item.id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartItem {
                item: item.clone(),
                quantity: 1,
            });
        }
    }

    /// Drop the whole line for this item id
    pub fn remove(&mut self, id: &str) {
        self.lines.retain(|l| l.item.id != id);
    }

    /// Set a line's quantity directly; zero removes the line.
    pub fn set_quantity(&mut self, id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove(id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.item.id == id) {
            line.quantity = quantity;
        }
    }

    /// Sum of line totals, recomputed on every read
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(|l| l.line_total()).sum()
    }

    /// Turn the cart into a pending order, freezing the total, and clear
    /// the cart.
    pub fn checkout(&mut self, customer_name: impl Into<String>, note: Option<String>) -> Order {
        let total = self.total();
        Order {
            id: util::order_id(),
            customer_name: customer_name.into(),
            items: std::mem::take(&mut self.lines),
            total,
            status: OrderStatus::Pending,
            timestamp: util::now_millis(),
            note,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MenuCatalog;
    use crate::ledger::OrderLedger;
    use crate::storage::SlotStore;

    fn catalog() -> MenuCatalog {
        MenuCatalog::load(SlotStore::open_in_memory().unwrap())
    }

    #[test]
    fn adding_the_same_item_twice_bumps_quantity() {
        let catalog = catalog();
        let dish = &catalog.items()[0];

        let mut cart = Cart::new();
        cart.add(dish);
        cart.add(dish);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn set_quantity_zero_removes_the_line() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(&catalog.items()[0]);
        cart.add(&catalog.items()[1]);

        cart.set_quantity(&catalog.items()[0].id, 0);
        assert_eq!(cart.lines().len(), 1);

        cart.set_quantity(&catalog.items()[1].id, 4);
        assert_eq!(cart.lines()[0].quantity, 4);
    }

    #[test]
    fn total_is_sum_of_line_totals() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(&catalog.items()[0]); // 3.00
        cart.add(&catalog.items()[0]); // -> qty 2
        cart.add(&catalog.items()[3]); // 1.00

        assert_eq!(cart.total(), Decimal::new(700, 2));
    }

    /// One item at 3.00 added twice, checked out as "Rina": order totals
    /// 6.00, is pending, carries the quantity-2 line, and bumps the
    /// ledger's pending count by one.
    #[test]
    fn rina_checkout_scenario() {
        let catalog = catalog();
        let dish = catalog.items()[0].clone();
        assert_eq!(dish.price, Decimal::new(300, 2));

        let mut cart = Cart::new();
        cart.add(&dish);
        cart.add(&dish);

        let mut ledger = OrderLedger::load(SlotStore::open_in_memory().unwrap());
        let before = ledger.pending_count();

        let order = cart.checkout("Rina", None);
        assert_eq!(order.total, Decimal::new(600, 2));
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].quantity, 2);
        assert_eq!(order.customer_name, "Rina");
        assert!(cart.is_empty());

        ledger.add(order).unwrap();
        assert_eq!(ledger.pending_count(), before + 1);
    }

    #[test]
    fn order_total_survives_later_catalog_reprice() {
        let mut catalog = catalog();
        let dish = catalog.items()[0].clone();

        let mut cart = Cart::new();
        cart.add(&dish);
        let order = cart.checkout("Budi", Some("extra sambal".to_string()));
        let frozen = order.total;

        let mut ledger = OrderLedger::load(SlotStore::open_in_memory().unwrap());
        ledger.add(order).unwrap();

        // Reprice the dish the order was built from
        let mut repriced = dish.clone();
        repriced.price = Decimal::new(1250, 2);
        catalog.update(repriced).unwrap();

        let stored = &ledger.orders()[0];
        assert_eq!(stored.total, frozen);
        assert_eq!(stored.items[0].item.price, dish.price);
        assert_eq!(stored.note.as_deref(), Some("extra sambal"));
    }
}
