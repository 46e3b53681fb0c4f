use std::future::Future;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub mod config;
pub mod error;
pub mod handlers;
pub mod state;
pub mod types;

pub use config::AppConfig;
pub use error::{ApiError, ServerError};
pub use state::AppState;

/// Builds the router over `state`, without any optional middleware.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/greeting", get(handlers::greeting))
        .route("/api/health/liveness", get(handlers::liveness))
        .route("/api/stop", get(handlers::stop))
        .fallback(handlers::not_found)
        .layer(CatchPanicLayer::custom(handlers::handle_panic))
        .with_state(state)
}

/// Router with the middleware enabled by `config`.
pub fn app_with_config(state: AppState, config: &AppConfig) -> Router {
    let mut router = app(state);
    if config.api.enable_cors {
        router = router.layer(CorsLayer::permissive());
    }
    if config.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }
    router
}

/// Serves on an already-bound listener until `/api/stop` closes it after the
/// grace period.
pub async fn serve(listener: TcpListener, config: AppConfig) -> Result<(), ServerError> {
    let state = AppState::new(config.shutdown_grace());
    serve_with_state(listener, state, &config, std::future::pending::<()>()).await
}

/// Like `serve`, with a caller-owned state and an extra `signal` that also
/// closes the listener when it resolves.
pub async fn serve_with_state<F>(
    listener: TcpListener,
    state: AppState,
    config: &AppConfig,
    signal: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let liveness = state.liveness.clone();
    let router = app_with_config(state, config);

    if let Ok(addr) = listener.local_addr() {
        info!("Greeting service listening on http://{}", addr);
    }

    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            tokio::select! {
                _ = liveness.wait_for_shutdown() => {}
                _ = signal => {}
            }
        })
        .await?;

    info!("Greeting service stopped");
    Ok(())
}

/// Validates `config`, binds its address and serves until `/api/stop`,
/// Ctrl+C or SIGTERM.
pub async fn run(config: AppConfig) -> Result<(), ServerError> {
    config.validate()?;

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr: addr.clone(), source })?;

    let state = AppState::new(config.shutdown_grace());
    serve_with_state(listener, state, &config, shutdown_signal()).await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
