/// flowdeck: minimal backend for a visual workflow builder
///
/// Main entry point. Initializes configuration and starts the HTTP server
/// with workflow management and simulated execution endpoints.

use flowdeck::{config::Config, server::start_server};

/// Application entry point
///
/// Starts the server with default configuration. The server provides:
/// - Workflow management API at /api/workflows/*
/// - Simulated execution at /api/workflows/{id}/execute
/// - Health check at /healthz
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration (defaults to 0.0.0.0:5679)
    let config = Config::default();

    // Start the server
    start_server(config).await?;

    Ok(())
}
