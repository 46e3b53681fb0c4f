// handlers/stop.rs - GET /api/stop handler

use axum::{extract::State, Json};

use crate::state::AppState;
use crate::types::{HealthResponse, Outcome};

/// GET /api/stop - take the service out of rotation
///
/// Liveness is DOWN before this returns. The listener closes after the
/// configured shutdown grace, so this response is always delivered.
pub async fn stop(State(state): State<AppState>) -> Json<HealthResponse> {
    let lifecycle = state.stop();
    Json(HealthResponse {
        outcome: Outcome::from(lifecycle),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_stop_reports_down_and_flips_flag() {
        let state = AppState::new(Duration::from_secs(60));
        let Json(body) = stop(State(state.clone())).await;
        assert_eq!(body.outcome, Outcome::Down);
        assert!(!state.liveness.is_up());
        assert!(!state.liveness.shutdown_requested());
    }
}
