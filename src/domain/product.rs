use bigdecimal::BigDecimal;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: BigDecimal,
    pub stock: i32,
}

/// Caller-supplied product fields; the store assigns the id.
///
/// Used both for creation and for update, which replaces every field except
/// the id (there is no partial patch).
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub name: String,
    pub price: BigDecimal,
    pub stock: i32,
}
