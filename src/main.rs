use anyhow::Context;
use quirky_news_api::api::{self, AppState};
use quirky_news_api::config::AppConfig;
use quirky_news_api::storage::{CompanyStore, MongoStore};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    info!("🚀 Starting Quirky News API Server");

    // Load configuration
    let config = AppConfig::load()?;
    info!("📋 Configuration loaded");
    info!("   - Database: {}", config.database.name);
    info!("   - Server: {}", config.bind_addr());

    // Connect to the document store
    info!("💾 Connecting to MongoDB...");
    let store: Arc<dyn CompanyStore> = Arc::new(
        MongoStore::connect(&config.database.url, &config.database.name)
            .await
            .context("Invalid MongoDB connection string")?,
    );

    // Unreachable store degrades to sample data; keep starting
    match store.ensure_collections().await {
        Ok(()) => info!("✅ Database collections initialized"),
        Err(e) => error!("Error initializing database: {}", e),
    }

    let state = AppState::new(store.clone());
    let app = api::router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("🌐 Server listening on http://{}", addr);
    info!("");
    info!("📡 Available endpoints:");
    info!("   GET  /                    - Greeting");
    info!("   GET  /api/health          - Health check");
    info!("   GET  /api/companies       - List companies");
    info!("   GET  /api/company-info    - Company by name");
    info!("   POST /api/company-info    - Create company");
    info!("   GET  /api/quirky-news     - Quirky news by company name");
    info!("   GET  /api/hubspot/setup   - HubSpot OAuth setup");
    info!("");
    info!("✨ Server is ready to accept requests!");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;

    info!("👋 Server shutting down gracefully");

    Ok(())
}

/// Graceful shutdown handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("🛑 Shutdown signal received");
}
