//! Health payload reported by the board backend.

use serde::Serialize;
use utoipa::ToSchema;

/// Health of the backend as seen from `/healthcheck`.
///
/// A degraded board still serves page data requests with an error payload;
/// form actions are rejected until the store comes back.
#[derive(Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct HealthResponse {
    /// `ok` while the board store answers pings, `degraded` otherwise.
    pub status: String,
    /// Whether the board store is currently reachable.
    pub store_connected: bool,
}

impl HealthResponse {
    /// The board store is reachable and actions are accepted.
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            store_connected: true,
        }
    }

    /// The board store is unreachable; the supervisor is reconnecting.
    pub fn degraded() -> Self {
        Self {
            status: "degraded".to_string(),
            store_connected: false,
        }
    }
}
