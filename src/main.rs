use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ticket_desk::{
    api::{create_router, AppState},
    config::{Config, ADMIN_ACCOUNTS},
    error::AppError,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,ticket_desk=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("🚀 Starting ticket desk v{}...", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("✅ Configuration loaded");

    // Create shared application state (creates missing data files)
    let state = AppState::new(&config)?;
    tracing::info!(
        "✅ Data files ready: {}, {}",
        config.users_file.display(),
        config.tickets_file.display()
    );

    // Build router
    let app = create_router(state);

    // Bind and serve
    let addr = config.server_address();
    tracing::info!("🌐 Server listening on http://{}", addr);
    tracing::info!("🏥 Health check: http://{}/api/health", addr);
    tracing::info!("");
    tracing::info!("📚 API Endpoints:");
    tracing::info!("  POST /api/register      - Register new user");
    tracing::info!("  POST /api/login         - Login, returns bearer token");
    tracing::info!("  POST /api/tickets       - Submit ticket (requires auth)");
    tracing::info!("  GET  /api/admin/tickets - List all tickets (requires admin)");
    tracing::info!("");
    tracing::info!("🔑 Admin accounts:");
    for (username, password) in ADMIN_ACCOUNTS {
        tracing::info!("  - {} / {}", username, password);
    }

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to bind to {}: {}", addr, e)))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Internal(format!("Server error: {}", e)))?;

    Ok(())
}
