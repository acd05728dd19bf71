use dotenvy::dotenv;
use inventory_service::{build_server, InMemoryInventory, InventoryService};
use std::env;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .expect("PORT must be a valid number");

    let service = InventoryService::new(InMemoryInventory::new());

    log::info!("Starting server at http://{}:{}", host, port);

    build_server(service, &host, port)?.await
}
