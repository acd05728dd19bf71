pub mod application;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;

use actix_web::{middleware::Logger, web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use application::inventory_service::InventoryService;
pub use infrastructure::memory_repo::InMemoryInventory;

/// Concrete service type injected into the request handlers.
pub type AppService = InventoryService<InMemoryInventory>;

#[derive(OpenApi)]
#[openapi(
    info(title = "Orders & Inventory API", version = "1.0"),
    paths(
        handlers::products::create_product,
        handlers::products::list_products,
        handlers::products::get_product,
        handlers::products::update_product,
        handlers::products::delete_product,
        handlers::orders::create_order,
        handlers::orders::list_orders,
        handlers::orders::payment_webhook,
    ),
    components(schemas(
        handlers::products::ProductRequest,
        handlers::products::ProductResponse,
        handlers::orders::CreateOrderRequest,
        handlers::orders::OrderResponse,
    ))
)]
struct ApiDoc;

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    service: AppService,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    let service = web::Data::new(service);
    Ok(HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .service(
                web::scope("/products")
                    .route("", web::post().to(handlers::products::create_product))
                    .route("", web::get().to(handlers::products::list_products))
                    .route("/{id}", web::get().to(handlers::products::get_product))
                    .route("/{id}", web::put().to(handlers::products::update_product))
                    .route("/{id}", web::delete().to(handlers::products::delete_product)),
            )
            .service(
                web::scope("/orders")
                    .route("", web::post().to(handlers::orders::create_order))
                    .route("", web::get().to(handlers::orders::list_orders)),
            )
            .route(
                "/webhook/payment",
                web::post().to(handlers::orders::payment_webhook),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}
