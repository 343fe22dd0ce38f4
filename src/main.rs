use resort_search_api::api::AppState;
use resort_search_api::app;
use resort_search_api::config::AppConfig;
use resort_search_api::provider::OpenAiProvider;
use resort_search_api::storage::{ResortStore, StaticResortStore};
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    info!("🚀 Starting Resort Search API Server");

    // Load configuration (reads .env if present)
    dotenvy::dotenv().ok();
    let config = Arc::new(AppConfig::load()?);
    info!("📋 Configuration loaded");
    info!("   - Model: {}", config.openai_model);
    info!("   - Environment: {:?}", config.environment);
    info!("   - Port: {}", config.port);

    // Initialize resort catalog
    let store = Arc::new(StaticResortStore::new());
    info!("✅ Resort catalog ready ({} resorts)", store.all().len());

    // Initialize completion provider
    let provider = Arc::new(OpenAiProvider::new(
        config.openai_base_url.clone(),
        config.openai_api_key.clone(),
        config.openai_model.clone(),
    ));
    info!("✅ Completion provider ready");

    // Create application state
    let state = AppState {
        config: config.clone(),
        store,
        provider,
    };

    // Build router with modular routes
    let app = app(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("🌐 Server listening on http://{}", addr);
    info!("");
    info!("📡 Available endpoints:");
    info!("   GET  /health        - Health check");
    info!("   POST /api/search    - Search via completion provider");
    info!("   GET  /api/resorts   - List resorts");
    info!("   POST /api/resorts   - Add resort (requires admin token)");
    info!("");
    info!("✨ Server is ready to accept requests!");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server shutting down gracefully");

    Ok(())
}

/// Graceful shutdown handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("🛑 Shutdown signal received");
}
