/// Server setup and initialization
///
/// Wires together all components: store, service, and HTTP routes.
/// Provides the main application factory function for creating the Axum app.

use crate::{
    api::workflows::{create_workflow_routes, AppState},
    config::Config,
    workflow::{service::WorkflowService, store::MemoryStore},
};
use anyhow::Result;
use axum::{routing::get, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

/// Create the main Axum application with all routes and middleware
///
/// Initializes the in-memory store and the workflow service and wires them
/// into the HTTP router. The editor is served from another origin, so every
/// response carries permissive CORS headers.
pub fn create_app() -> Router {
    // In-memory store: contents last for the process lifetime only
    let store = Arc::new(MemoryStore::new());
    let service = Arc::new(WorkflowService::new(store));

    let app_state = AppState { service };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check endpoint
        .route("/healthz", get(health_check))
        // Workflow management API routes
        .merge(create_workflow_routes().with_state(app_state))
        .layer(cors)
}

/// Start the HTTP server with the given configuration
///
/// Creates the application and starts the Axum server on the configured
/// address and port.
pub async fn start_server(config: Config) -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    tracing::info!("Starting flowdeck server...");

    let app = create_app();

    // Bind to the configured address
    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&bind_addr).await?;

    tracing::info!("Server listening on http://{}", bind_addr);

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

/// Health check endpoint handler
async fn health_check() -> &'static str {
    "ok"
}
