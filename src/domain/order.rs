use std::fmt;

use bigdecimal::BigDecimal;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: Uuid,
    /// Reference by value: the product may be deleted afterwards, leaving
    /// this id dangling.
    pub product_id: Uuid,
    pub quantity: i32,
    /// price × quantity at the moment of creation; never recomputed.
    pub total_price: BigDecimal,
    pub status: OrderStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Paid,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::Paid => write!(f, "paid"),
        }
    }
}
