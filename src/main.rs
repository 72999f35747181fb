use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use loanbook_rs::config::Config;
use loanbook_rs::routes::api_router;
use loanbook_rs::store::{Collection, JsonFileStore, RecordStore};

#[tokio::main]
async fn main() {
    // Load environment variables from .env file (if present)
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    tracing::info!("Starting loanbook service...");

    let config = Config::from_env().expect("Failed to load configuration from environment");

    tracing::info!(
        "Configuration loaded: host={}, port={}, data_dir={}",
        config.host,
        config.port,
        config.data_dir.display()
    );

    let store: Arc<dyn RecordStore> = Arc::new(JsonFileStore::new(&config.data_dir));
    for collection in Collection::ALL {
        store
            .ensure_collection(collection)
            .await
            .expect("Failed to initialize collection file");
    }

    let app = api_router(store).layer(
        CorsLayer::new()
            .allow_origin(tower_http::cors::Any)
            .allow_methods(tower_http::cors::Any)
            .allow_headers(tower_http::cors::Any),
    );

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");

    tracing::info!("loanbook service listening on {}", addr);

    axum::serve(listener, app)
        .await
        .expect("Server failed to start");
}
