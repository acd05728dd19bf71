use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::order::Order;
use crate::errors::AppError;
use crate::AppService;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    pub product_id: Uuid,
    pub quantity: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderResponse {
    pub id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    /// Decimal total as a string, frozen at order creation, e.g. "29.97"
    pub total_price: String,
    pub status: String,
}

impl From<Order> for OrderResponse {
    fn from(o: Order) -> Self {
        Self {
            id: o.id,
            product_id: o.product_id,
            quantity: o.quantity,
            total_price: o.total_price.to_string(),
            status: o.status.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PaymentNotification {
    pub order_id: Uuid,
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /orders
///
/// Places an order against a product: checks stock, decrements it, and
/// freezes the total at the product's current price times the quantity.
#[utoipa::path(
    post,
    path = "/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Order placed", body = OrderResponse),
        (status = 400, description = "Insufficient stock"),
        (status = 404, description = "Product not found"),
    ),
    tag = "orders"
)]
pub async fn create_order(
    service: web::Data<AppService>,
    body: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let order = service.create_order(body.product_id, body.quantity)?;
    Ok(HttpResponse::Ok().json(OrderResponse::from(order)))
}

/// GET /orders
///
/// Returns all orders in insertion order.
#[utoipa::path(
    get,
    path = "/orders",
    responses(
        (status = 200, description = "All orders", body = [OrderResponse]),
    ),
    tag = "orders"
)]
pub async fn list_orders(service: web::Data<AppService>) -> Result<HttpResponse, AppError> {
    let orders = service.list_orders()?;
    let items: Vec<OrderResponse> = orders.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(items))
}

/// POST /webhook/payment
///
/// Payment notification callback: marks the order paid. Re-delivery of the
/// same notification is accepted and leaves the order paid.
#[utoipa::path(
    post,
    path = "/webhook/payment",
    params(
        ("order_id" = Uuid, Query, description = "Order UUID"),
    ),
    responses(
        (status = 200, description = "Order marked as paid"),
        (status = 404, description = "Order not found"),
    ),
    tag = "orders"
)]
pub async fn payment_webhook(
    service: web::Data<AppService>,
    query: web::Query<PaymentNotification>,
) -> Result<HttpResponse, AppError> {
    match service.mark_order_paid(query.order_id)? {
        Some(_) => Ok(HttpResponse::Ok().json(json!({ "message": "Order marked as paid" }))),
        None => Err(AppError::OrderNotFound),
    }
}
