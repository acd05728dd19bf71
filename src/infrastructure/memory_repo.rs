use std::sync::{Mutex, MutexGuard};

use bigdecimal::BigDecimal;
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::order::{Order, OrderStatus};
use crate::domain::ports::InventoryRepository;
use crate::domain::product::{Product, ProductDraft};

#[derive(Default)]
struct StoreState {
    products: Vec<Product>,
    orders: Vec<Order>,
}

/// In-memory inventory store: two insertion-ordered collections behind a
/// single mutex.
///
/// Every operation takes the lock for its whole duration, so the stock check
/// and decrement in `create_order` are atomic and two concurrent orders can
/// never over-draw the same product. Nothing is persisted; all state is lost
/// when the process exits.
pub struct InMemoryInventory {
    state: Mutex<StoreState>,
}

impl InMemoryInventory {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(StoreState::default()),
        }
    }

    fn state(&self) -> Result<MutexGuard<'_, StoreState>, DomainError> {
        self.state
            .lock()
            .map_err(|e| DomainError::Internal(e.to_string()))
    }
}

impl Default for InMemoryInventory {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryRepository for InMemoryInventory {
    fn create_product(&self, draft: ProductDraft) -> Result<Product, DomainError> {
        let mut state = self.state()?;

        let product = Product {
            id: Uuid::new_v4(),
            name: draft.name,
            price: draft.price,
            stock: draft.stock,
        };
        state.products.push(product.clone());
        Ok(product)
    }

    fn list_products(&self) -> Result<Vec<Product>, DomainError> {
        Ok(self.state()?.products.clone())
    }

    fn find_product(&self, id: Uuid) -> Result<Option<Product>, DomainError> {
        let state = self.state()?;
        Ok(state.products.iter().find(|p| p.id == id).cloned())
    }

    fn update_product(
        &self,
        id: Uuid,
        draft: ProductDraft,
    ) -> Result<Option<Product>, DomainError> {
        let mut state = self.state()?;

        let Some(product) = state.products.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        product.name = draft.name;
        product.price = draft.price;
        product.stock = draft.stock;
        Ok(Some(product.clone()))
    }

    fn delete_product(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut state = self.state()?;

        // Orders referencing this product keep their product_id; there is no
        // cascade and the reference is allowed to dangle.
        match state.products.iter().position(|p| p.id == id) {
            Some(idx) => {
                state.products.remove(idx);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn create_order(&self, product_id: Uuid, quantity: i32) -> Result<Order, DomainError> {
        let mut state = self.state()?;

        let product = state
            .products
            .iter_mut()
            .find(|p| p.id == product_id)
            .ok_or(DomainError::ProductNotFound)?;
        if product.stock < quantity {
            return Err(DomainError::InsufficientStock);
        }

        product.stock -= quantity;
        let order = Order {
            id: Uuid::new_v4(),
            product_id,
            quantity,
            total_price: &product.price * BigDecimal::from(quantity),
            status: OrderStatus::Pending,
        };
        state.orders.push(order.clone());
        Ok(order)
    }

    fn list_orders(&self) -> Result<Vec<Order>, DomainError> {
        Ok(self.state()?.orders.clone())
    }

    fn mark_order_paid(&self, id: Uuid) -> Result<Option<Order>, DomainError> {
        let mut state = self.state()?;

        let Some(order) = state.orders.iter_mut().find(|o| o.id == id) else {
            return Ok(None);
        };
        // No transition guard: re-marking a paid order is a silent no-op.
        order.status = OrderStatus::Paid;
        Ok(Some(order.clone()))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;
    use uuid::Uuid;

    use super::InMemoryInventory;
    use crate::domain::errors::DomainError;
    use crate::domain::order::OrderStatus;
    use crate::domain::ports::InventoryRepository;
    use crate::domain::product::ProductDraft;

    fn draft(name: &str, price: &str, stock: i32) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            price: BigDecimal::from_str(price).expect("valid decimal"),
            stock,
        }
    }

    #[test]
    fn create_and_find_product_roundtrip() {
        let repo = InMemoryInventory::new();

        let created = repo
            .create_product(draft("Widget", "9.99", 5))
            .expect("create failed");

        let found = repo
            .find_product(created.id)
            .expect("find failed")
            .expect("product should exist");

        assert_eq!(found, created);
    }

    #[test]
    fn find_product_returns_none_for_unknown_id() {
        let repo = InMemoryInventory::new();

        let result = repo
            .find_product(Uuid::new_v4())
            .expect("find should not error");

        assert!(result.is_none());
    }

    #[test]
    fn list_products_preserves_insertion_order() {
        let repo = InMemoryInventory::new();

        let a = repo.create_product(draft("A", "1.00", 1)).expect("create failed");
        let b = repo.create_product(draft("B", "2.00", 2)).expect("create failed");
        let c = repo.create_product(draft("C", "3.00", 3)).expect("create failed");

        let products = repo.list_products().expect("list failed");
        let ids: Vec<_> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![a.id, b.id, c.id]);
    }

    #[test]
    fn update_replaces_all_fields_except_id() {
        let repo = InMemoryInventory::new();
        let created = repo
            .create_product(draft("Widget", "9.99", 5))
            .expect("create failed");

        let updated = repo
            .update_product(created.id, draft("Gadget", "19.99", 7))
            .expect("update failed")
            .expect("product should exist");

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Gadget");
        assert_eq!(updated.price, BigDecimal::from_str("19.99").unwrap());
        assert_eq!(updated.stock, 7);

        let found = repo
            .find_product(created.id)
            .expect("find failed")
            .expect("product should exist");
        assert_eq!(found, updated);
    }

    #[test]
    fn update_returns_none_for_unknown_id() {
        let repo = InMemoryInventory::new();

        let result = repo
            .update_product(Uuid::new_v4(), draft("Ghost", "1.00", 1))
            .expect("update should not error");

        assert!(result.is_none());
    }

    #[test]
    fn delete_then_find_returns_none() {
        let repo = InMemoryInventory::new();
        let created = repo
            .create_product(draft("Widget", "9.99", 5))
            .expect("create failed");

        assert!(repo.delete_product(created.id).expect("delete failed"));
        assert!(repo
            .find_product(created.id)
            .expect("find failed")
            .is_none());
    }

    #[test]
    fn delete_returns_false_for_unknown_id() {
        let repo = InMemoryInventory::new();

        assert!(!repo.delete_product(Uuid::new_v4()).expect("delete failed"));
    }

    #[test]
    fn create_order_decrements_stock_and_freezes_total() {
        let repo = InMemoryInventory::new();
        let product = repo
            .create_product(draft("Widget", "10.0", 5))
            .expect("create failed");

        let order = repo.create_order(product.id, 3).expect("order failed");

        assert_eq!(order.product_id, product.id);
        assert_eq!(order.quantity, 3);
        assert_eq!(order.total_price, BigDecimal::from_str("30.0").unwrap());
        assert_eq!(order.status, OrderStatus::Pending);

        let product = repo
            .find_product(product.id)
            .expect("find failed")
            .expect("product should exist");
        assert_eq!(product.stock, 2);
    }

    #[test]
    fn create_order_fails_for_unknown_product() {
        let repo = InMemoryInventory::new();

        let result = repo.create_order(Uuid::new_v4(), 1);

        assert!(matches!(result, Err(DomainError::ProductNotFound)));
    }

    #[test]
    fn insufficient_stock_leaves_stock_unchanged() {
        let repo = InMemoryInventory::new();
        let product = repo
            .create_product(draft("Widget", "10.0", 2))
            .expect("create failed");

        let result = repo.create_order(product.id, 10);
        assert!(matches!(result, Err(DomainError::InsufficientStock)));

        let product = repo
            .find_product(product.id)
            .expect("find failed")
            .expect("product should exist");
        assert_eq!(product.stock, 2);
        assert!(repo.list_orders().expect("list failed").is_empty());
    }

    #[test]
    fn total_price_is_not_retroactively_changed_by_price_update() {
        let repo = InMemoryInventory::new();
        let product = repo
            .create_product(draft("Widget", "10.0", 5))
            .expect("create failed");
        let order = repo.create_order(product.id, 3).expect("order failed");

        repo.update_product(product.id, draft("Widget", "99.0", 2))
            .expect("update failed")
            .expect("product should exist");

        let orders = repo.list_orders().expect("list failed");
        assert_eq!(orders[0].id, order.id);
        assert_eq!(orders[0].total_price, BigDecimal::from_str("30.0").unwrap());
    }

    #[test]
    fn mark_order_paid_is_idempotent() {
        let repo = InMemoryInventory::new();
        let product = repo
            .create_product(draft("Widget", "10.0", 5))
            .expect("create failed");
        let order = repo.create_order(product.id, 1).expect("order failed");

        let first = repo
            .mark_order_paid(order.id)
            .expect("mark failed")
            .expect("order should exist");
        assert_eq!(first.status, OrderStatus::Paid);

        let second = repo
            .mark_order_paid(order.id)
            .expect("mark failed")
            .expect("order should exist");
        assert_eq!(second.status, OrderStatus::Paid);
    }

    #[test]
    fn mark_order_paid_returns_none_for_unknown_id() {
        let repo = InMemoryInventory::new();

        let result = repo
            .mark_order_paid(Uuid::new_v4())
            .expect("mark should not error");

        assert!(result.is_none());
    }

    #[test]
    fn deleting_product_leaves_order_reference_dangling() {
        let repo = InMemoryInventory::new();
        let product = repo
            .create_product(draft("Widget", "10.0", 5))
            .expect("create failed");
        let order = repo.create_order(product.id, 1).expect("order failed");

        assert!(repo.delete_product(product.id).expect("delete failed"));

        let orders = repo.list_orders().expect("list failed");
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].id, order.id);
        assert_eq!(orders[0].product_id, product.id);
    }

    #[test]
    fn create_order_accepts_zero_quantity() {
        // Quantity is deliberately unvalidated; a zero-quantity order totals
        // zero and leaves stock alone.
        let repo = InMemoryInventory::new();
        let product = repo
            .create_product(draft("Widget", "10.0", 5))
            .expect("create failed");

        let order = repo.create_order(product.id, 0).expect("order failed");

        assert_eq!(order.total_price, BigDecimal::from(0));
        let product = repo
            .find_product(product.id)
            .expect("find failed")
            .expect("product should exist");
        assert_eq!(product.stock, 5);
    }
}
