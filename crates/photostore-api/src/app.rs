//! Application runner — wires pool, schema bootstrap, state, and the server.

use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Notify;

use photostore_core::config::AppConfig;
use photostore_core::error::AppError;
use photostore_database::connection::DatabasePool;
use photostore_database::repositories::photo::PhotoRepository;
use photostore_database::schema::ensure_schema;
use photostore_service::photo::service::PhotoService;

use crate::router::build_router;
use crate::state::AppState;

/// Runs the Photostore server with the given configuration.
///
/// Connects the pool, bootstraps the schema once, wires the state, and
/// serves until ctrl-c. After the shutdown signal, in-flight connections get
/// `server.shutdown_grace_seconds` to drain before the process exits anyway.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Photostore server...");

    let db = DatabasePool::connect(&config.database).await?;
    ensure_schema(db.pool(), &config.database.schema).await?;
    let db_pool = db.into_pool();

    let photo_repo = Arc::new(PhotoRepository::new(
        db_pool.clone(),
        &config.database.schema,
    )?);
    let photo_service = Arc::new(PhotoService::new(Arc::clone(&photo_repo), &config.upload));

    let state = AppState {
        config: Arc::new(config.clone()),
        db_pool,
        photo_repo,
        photo_service,
    };

    let app = build_router(state);
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Photostore server listening on {}", addr);

    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let drain_started = Arc::new(Notify::new());
    let notify = Arc::clone(&drain_started);

    let mut server = Box::pin(
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                shutdown_signal().await;
                notify.notify_one();
            })
            .into_future(),
    );

    tokio::select! {
        result = &mut server => {
            result.map_err(|e| AppError::internal(format!("Server error: {e}")))?;
        }
        _ = drain_grace(drain_started, grace) => {
            tracing::warn!(
                grace_seconds = grace.as_secs(),
                "Shutdown grace period elapsed with connections still open, exiting"
            );
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, draining connections");
}

/// Resolves once the drain grace period has elapsed; pending forever until
/// the shutdown signal arrives.
async fn drain_grace(drain_started: Arc<Notify>, grace: Duration) {
    drain_started.notified().await;
    tokio::time::sleep(grace).await;
}
