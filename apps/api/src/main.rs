use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use dotenv::dotenv;
use tokio::net::TcpListener;
use tower_http::cors::{CorsLayer, Any};
use tower_http::trace::{self, TraceLayer};
use tracing::{Level, info};

mod router;

use doctor_cell::handlers::DirectoryState;
use doctor_cell::{Catalog, CatalogSource, DirectoryService, JsonFileCatalog, StaticCatalog};
use shared_config::AppConfig;
use shared_utils::logging::{init_tracing, DEFAULT_LOG_FILTER};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Loading Env Vars
    dotenv().ok();

    init_tracing(DEFAULT_LOG_FILTER);

    info!("Starting Doctor Directory API server");

    let config = Arc::new(AppConfig::from_env());

    let source: Box<dyn CatalogSource> = match &config.catalog_path {
        Some(path) => Box::new(JsonFileCatalog::new(path)),
        None => Box::new(StaticCatalog),
    };
    let catalog = Catalog::from_source(source.as_ref())
        .await
        .with_context(|| format!("failed to load doctor catalog from {}", source.describe()))?;

    let directory = DirectoryService::new(&config, catalog);
    info!("Simulated latency: {:?}", directory.latency());

    // Set up CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let state = Arc::new(DirectoryState::new(config.clone(), directory));

    // Build the application router
    let app = router::create_router(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(trace::DefaultMakeSpan::new()
                    .level(Level::INFO))
                .on_response(trace::DefaultOnResponse::new()
                    .level(Level::INFO)),
        )
        .layer(cors);

    // Run the server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app)
        .await
        .context("server error")?;

    Ok(())
}
