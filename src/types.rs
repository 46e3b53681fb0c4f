/// Shared types used across the codebase

use serde::{Deserialize, Serialize};

/// Service lifecycle. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lifecycle {
    Running,
    Stopped,
}

/// Liveness outcome as reported on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Outcome {
    Up,
    Down,
}

impl From<Lifecycle> for Outcome {
    fn from(lifecycle: Lifecycle) -> Self {
        match lifecycle {
            Lifecycle::Running => Outcome::Up,
            Lifecycle::Stopped => Outcome::Down,
        }
    }
}

/// Body of the liveness and stop endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub outcome: Outcome,
}

/// Body of the greeting endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    pub content: String,
}
