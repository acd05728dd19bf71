use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::order::Order;
use crate::domain::ports::InventoryRepository;
use crate::domain::product::{Product, ProductDraft};

/// Use-case layer over the repository port. Each method is one operation of
/// the inventory API; all business rules live behind the port.
pub struct InventoryService<R> {
    repo: R,
}

impl<R: InventoryRepository> InventoryService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn create_product(&self, draft: ProductDraft) -> Result<Product, DomainError> {
        self.repo.create_product(draft)
    }

    pub fn list_products(&self) -> Result<Vec<Product>, DomainError> {
        self.repo.list_products()
    }

    pub fn get_product(&self, id: Uuid) -> Result<Option<Product>, DomainError> {
        self.repo.find_product(id)
    }

    pub fn update_product(
        &self,
        id: Uuid,
        draft: ProductDraft,
    ) -> Result<Option<Product>, DomainError> {
        self.repo.update_product(id, draft)
    }

    pub fn delete_product(&self, id: Uuid) -> Result<bool, DomainError> {
        self.repo.delete_product(id)
    }

    pub fn create_order(&self, product_id: Uuid, quantity: i32) -> Result<Order, DomainError> {
        self.repo.create_order(product_id, quantity)
    }

    pub fn list_orders(&self) -> Result<Vec<Order>, DomainError> {
        self.repo.list_orders()
    }

    pub fn mark_order_paid(&self, id: Uuid) -> Result<Option<Order>, DomainError> {
        self.repo.mark_order_paid(id)
    }
}
