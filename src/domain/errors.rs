use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Product not found")]
    ProductNotFound,
    #[error("Order not found")]
    OrderNotFound,
    #[error("Insufficient stock")]
    InsufficientStock,
    #[error("Internal error: {0}")]
    Internal(String),
}
