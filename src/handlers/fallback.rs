// handlers/fallback.rs - 404 for unmatched routes and 500 for handler panics

use std::any::Any;

use axum::{
    http::Uri,
    response::{IntoResponse, Response},
};

use crate::error::ApiError;

pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::not_found(format!("Route {} not found", uri.path()))
}

/// Panic handler for `CatchPanicLayer`; the panic payload is logged, never returned.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    tracing::error!("Handler panicked: {}", detail);

    ApiError::internal_server_error("An error occurred while processing your request").into_response()
}
