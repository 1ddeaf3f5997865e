//! Board snapshot assembly and night-date bookkeeping.

use std::time::SystemTime;

use time::OffsetDateTime;
use tracing::debug;
use validator::Validate;

use crate::{
    dao::models::SettingsEntity,
    dto::{
        board::{BoardSnapshot, NightDateResponse},
        forms::{PageDataForm, SetNightDateForm},
    },
    error::ServiceError,
    services::{NIGHT_DATE_LIMIT, clip, guard_honeypot},
    state::SharedState,
};

/// Assemble the full data set the page renders for one night.
pub async fn board_snapshot(
    state: &SharedState,
    night_date: Option<String>,
) -> Result<BoardSnapshot, ServiceError> {
    let night_date = resolve_night_date(state, night_date.as_deref()).await?;
    let store = state.require_board_store().await?;

    let tables = store.list_tables(night_date.clone()).await?;
    let spare_players = store.list_spare_players(night_date.clone()).await?;

    Ok(BoardSnapshot {
        tables: tables.into_iter().map(Into::into).collect(),
        spare_players: spare_players.into_iter().map(Into::into).collect(),
        weights: state.config().weights().to_vec(),
        night_date,
    })
}

/// The `pageData` form action: same payload as the read route, form-invoked.
pub async fn page_data(
    state: &SharedState,
    payload: PageDataForm,
) -> Result<BoardSnapshot, ServiceError> {
    guard_honeypot(&payload.website)?;
    board_snapshot(state, payload.night_date).await
}

/// Validate and persist the active night date in the settings singleton.
pub async fn set_night_date(
    state: &SharedState,
    payload: SetNightDateForm,
) -> Result<NightDateResponse, ServiceError> {
    guard_honeypot(&payload.website)?;

    payload
        .validate()
        .map_err(|_| ServiceError::InvalidInput("invalid date".into()))?;

    let night_date = clip(Some(&payload.night_date), NIGHT_DATE_LIMIT);
    let store = state.require_board_store().await?;
    store
        .save_settings(SettingsEntity {
            night_date: night_date.clone(),
            updated_at: SystemTime::now(),
        })
        .await?;

    debug!(%night_date, "active night date updated");
    Ok(NightDateResponse::new(night_date))
}

/// Resolve the night a request refers to: explicit value first, then the
/// settings singleton, then today's UTC date.
pub async fn resolve_night_date(
    state: &SharedState,
    requested: Option<&str>,
) -> Result<String, ServiceError> {
    let requested = clip(requested, NIGHT_DATE_LIMIT);
    if !requested.is_empty() {
        return Ok(requested);
    }

    let store = state.require_board_store().await?;
    if let Some(settings) = store.load_settings().await? {
        return Ok(settings.night_date);
    }

    Ok(today_utc())
}

/// Today's UTC calendar date as `YYYY-MM-DD`.
fn today_utc() -> String {
    let today = OffsetDateTime::now_utc().date();
    format!(
        "{:04}-{:02}-{:02}",
        today.year(),
        u8::from(today.month()),
        today.day()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dto::validation::validate_night_date, services::test_support::test_state};

    #[test]
    fn today_utc_is_a_valid_night_date() {
        assert!(validate_night_date(&today_utc()).is_ok());
    }

    #[tokio::test]
    async fn snapshot_carries_the_configured_weights() {
        let state = test_state().await;

        let snapshot = board_snapshot(&state, Some("2026-08-23".into()))
            .await
            .unwrap();
        assert_eq!(snapshot.night_date, "2026-08-23");
        assert_eq!(snapshot.weights.len(), 4);
        assert!(snapshot.tables.is_empty());
        assert!(snapshot.spare_players.is_empty());
    }

    #[tokio::test]
    async fn set_night_date_becomes_the_default_night() {
        let state = test_state().await;

        let response = set_night_date(
            &state,
            SetNightDateForm {
                night_date: "2026-09-05".into(),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(response.night_date, "2026-09-05");

        // A request with no explicit night now resolves to the stored one.
        let snapshot = board_snapshot(&state, None).await.unwrap();
        assert_eq!(snapshot.night_date, "2026-09-05");
    }

    #[tokio::test]
    async fn malformed_night_date_is_rejected() {
        let state = test_state().await;

        let err = set_night_date(
            &state,
            SetNightDateForm {
                night_date: "05/09/2026".into(),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn unset_night_defaults_to_today() {
        let state = test_state().await;

        let snapshot = board_snapshot(&state, None).await.unwrap();
        assert_eq!(snapshot.night_date, today_utc());
    }

    #[tokio::test]
    async fn page_data_rejects_honeypot_submissions() {
        let state = test_state().await;

        let err = page_data(
            &state,
            PageDataForm {
                website: Some("https://spam.example".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));
    }
}
