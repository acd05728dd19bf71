use uuid::Uuid;

use super::errors::DomainError;
use super::order::Order;
use super::product::{Product, ProductDraft};

/// Storage port for the product catalog and the orders placed against it.
///
/// Lookups return `Ok(None)` when the id does not resolve; the HTTP layer
/// decides what absence means. `create_order` reports its failures as domain
/// errors instead, because the stock check and the decrement have to happen
/// atomically inside the store.
pub trait InventoryRepository: Send + Sync + 'static {
    fn create_product(&self, draft: ProductDraft) -> Result<Product, DomainError>;
    fn list_products(&self) -> Result<Vec<Product>, DomainError>;
    fn find_product(&self, id: Uuid) -> Result<Option<Product>, DomainError>;
    fn update_product(&self, id: Uuid, draft: ProductDraft)
        -> Result<Option<Product>, DomainError>;
    fn delete_product(&self, id: Uuid) -> Result<bool, DomainError>;

    fn create_order(&self, product_id: Uuid, quantity: i32) -> Result<Order, DomainError>;
    fn list_orders(&self) -> Result<Vec<Order>, DomainError>;
    fn mark_order_paid(&self, id: Uuid) -> Result<Option<Order>, DomainError>;
}
