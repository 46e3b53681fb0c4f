// handlers/health.rs - GET /api/health/liveness handler

use axum::{extract::State, http::StatusCode, Json};

use crate::state::AppState;
use crate::types::{HealthResponse, Outcome};

/// GET /api/health/liveness
///
/// 200 `{"outcome":"UP"}` while running, 503 `{"outcome":"DOWN"}` once the
/// service has been stopped.
pub async fn liveness(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let outcome = Outcome::from(state.liveness.lifecycle());
    let status = match outcome {
        Outcome::Up => StatusCode::OK,
        Outcome::Down => {
            tracing::warn!("Liveness probe answered DOWN");
            StatusCode::SERVICE_UNAVAILABLE
        }
    };

    (status, Json(HealthResponse { outcome }))
}
