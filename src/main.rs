use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};

use landing_api::config::Config;
use landing_api::db::{MemStorage, PgStorage, Storage};
use landing_api::i18n::{seed_entries, LanguageRegistry, SeedValidator};
use landing_api::routes::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("landing_api=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .init();

    info!("Starting landing page API");

    let config = Config::from_env()?;

    let report = SeedValidator::validate(seed_entries());
    for issue in report.errors.iter().chain(report.warnings.iter()) {
        warn!("Translation table: {}", issue);
    }

    let languages: Vec<String> = LanguageRegistry::get()
        .list()
        .iter()
        .map(|lang| format!("{} ({})", lang.name, lang.code))
        .collect();
    info!("Serving translations for {}", languages.join(", "));

    let store: Arc<dyn Storage> = match &config.database_url {
        Some(url) => {
            info!("Using PostgreSQL storage");
            Arc::new(PgStorage::connect(url).await?)
        }
        None => {
            info!("Using in-memory storage");
            Arc::new(MemStorage::new())
        }
    };

    if config.admin_api_key.is_none() {
        warn!("ADMIN_API_KEY not set, /api/contacts is publicly readable");
    }

    let addr = config.bind_addr()?;
    let app = routes::router(AppState::new(store, config));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("✓ Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or on SIGTERM where the platform has it.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
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

    info!("Shutdown signal received");
}
