use std::sync::Arc;

use notes_server::{
    NoteService, app,
    config::{self, StorageBackend},
    repository::{InMemoryNoteStore, NoteStore, PgNoteStore},
};

#[tokio::main]
async fn main() {
    // Log setup
    tracing_subscriber::fmt::init();

    // Load config
    let cfg = config::load_config().unwrap_or_else(|e| {
        tracing::error!("Failed to load config: {e}");
        panic!("failed to locate or load config: {e}");
    });
    tracing::info!("Successfully loaded notes server config");

    // Store creation and migration
    let store: Arc<dyn NoteStore> = match cfg.storage {
        StorageBackend::Postgres => {
            let dsn = cfg.pg_dsn.as_deref().unwrap_or_default();
            let mut store = PgNoteStore::new(dsn).await.unwrap_or_else(|e| {
                tracing::error!("Failed to establish database connection: {e}");
                panic!("failed to establish database connection: {e}");
            });

            store.migrate().await.unwrap_or_else(|e| {
                tracing::error!("Failed to migrate database: {e}");
                panic!("failed to migrate database: {e}");
            });

            Arc::new(store)
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory note storage, notes will not survive a restart");
            Arc::new(InMemoryNoteStore::new())
        }
    };

    // Service and router creation
    let router = app(NoteService::new(store));

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", cfg.port))
        .await
        .unwrap_or_else(|e| {
            tracing::error!("Failed to bind to port {}: {e}", cfg.port);
            panic!("failed to bind to port {}: {e}", cfg.port);
        });

    if let Ok(addr) = listener.local_addr() {
        tracing::info!("REST server starting, listening on {}", addr);
    }

    if let Err(e) = axum::serve(listener, router).await {
        tracing::error!("HTTP server error: {e}");
        panic!("failed to start HTTP server: {e}");
    }
}
