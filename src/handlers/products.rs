use actix_web::{web, HttpResponse};
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::product::{Product, ProductDraft};
use crate::errors::AppError;
use crate::AppService;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct ProductRequest {
    pub name: String,
    /// Decimal price as a string to avoid floating-point issues, e.g. "9.99"
    pub price: String,
    pub stock: i32,
}

impl ProductRequest {
    fn into_draft(self) -> Result<ProductDraft, AppError> {
        let price = BigDecimal::from_str(&self.price)
            .map_err(|e| AppError::Internal(format!("Invalid price '{}': {}", self.price, e)))?;
        Ok(ProductDraft {
            name: self.name,
            price,
            stock: self.stock,
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub price: String,
    pub stock: i32,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            price: p.price.to_string(),
            stock: p.stock,
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /products
///
/// Creates a catalog product with a server-assigned id.
#[utoipa::path(
    post,
    path = "/products",
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Product created", body = ProductResponse),
    ),
    tag = "products"
)]
pub async fn create_product(
    service: web::Data<AppService>,
    body: web::Json<ProductRequest>,
) -> Result<HttpResponse, AppError> {
    let draft = body.into_inner().into_draft()?;
    let product = service.create_product(draft)?;
    Ok(HttpResponse::Ok().json(ProductResponse::from(product)))
}

/// GET /products
///
/// Returns all products in insertion order.
#[utoipa::path(
    get,
    path = "/products",
    responses(
        (status = 200, description = "All products", body = [ProductResponse]),
    ),
    tag = "products"
)]
pub async fn list_products(service: web::Data<AppService>) -> Result<HttpResponse, AppError> {
    let products = service.list_products()?;
    let items: Vec<ProductResponse> = products.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(items))
}

/// GET /products/{id}
#[utoipa::path(
    get,
    path = "/products/{id}",
    params(
        ("id" = Uuid, Path, description = "Product UUID"),
    ),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 404, description = "Product not found"),
    ),
    tag = "products"
)]
pub async fn get_product(
    service: web::Data<AppService>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    match service.get_product(path.into_inner())? {
        Some(product) => Ok(HttpResponse::Ok().json(ProductResponse::from(product))),
        None => Err(AppError::ProductNotFound),
    }
}

/// PUT /products/{id}
///
/// Replaces every field except the id. Unchanged fields must be re-supplied;
/// there is no partial patch.
#[utoipa::path(
    put,
    path = "/products/{id}",
    params(
        ("id" = Uuid, Path, description = "Product UUID"),
    ),
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Product replaced", body = ProductResponse),
        (status = 404, description = "Product not found"),
    ),
    tag = "products"
)]
pub async fn update_product(
    service: web::Data<AppService>,
    path: web::Path<Uuid>,
    body: web::Json<ProductRequest>,
) -> Result<HttpResponse, AppError> {
    let draft = body.into_inner().into_draft()?;
    match service.update_product(path.into_inner(), draft)? {
        Some(product) => Ok(HttpResponse::Ok().json(ProductResponse::from(product))),
        None => Err(AppError::ProductNotFound),
    }
}

/// DELETE /products/{id}
///
/// Removes the product. Orders referencing it are left untouched.
#[utoipa::path(
    delete,
    path = "/products/{id}",
    params(
        ("id" = Uuid, Path, description = "Product UUID"),
    ),
    responses(
        (status = 200, description = "Product deleted"),
        (status = 404, description = "Product not found"),
    ),
    tag = "products"
)]
pub async fn delete_product(
    service: web::Data<AppService>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    if service.delete_product(path.into_inner())? {
        Ok(HttpResponse::Ok().json(json!({ "message": "Product deleted" })))
    } else {
        Err(AppError::ProductNotFound)
    }
}
