//! Health reporting backed by a live board store ping.

use tracing::warn;

use crate::{dto::health::HealthResponse, state::SharedState};

/// Ping the board store and report whether the backend can take sign-ups.
///
/// Degraded mode has two faces here: no store installed yet (the supervisor is
/// still connecting) or an installed store that stopped answering pings.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    let Some(store) = state.board_store().await else {
        warn!("no board store installed; reporting degraded");
        return HealthResponse::degraded();
    };

    if let Err(err) = store.health_check().await {
        warn!(error = %err, "board store ping failed; reporting degraded");
        return HealthResponse::degraded();
    }

    HealthResponse::ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::AppConfig, services::test_support::test_state, state::AppState};

    #[tokio::test]
    async fn healthy_store_reports_ok() {
        let state = test_state().await;
        assert_eq!(health_status(&state).await, HealthResponse::ok());
    }

    #[tokio::test]
    async fn missing_store_reports_degraded() {
        let state = AppState::new(AppConfig::default());
        let response = health_status(&state).await;
        assert_eq!(response, HealthResponse::degraded());
        assert!(!response.store_connected);
    }
}
