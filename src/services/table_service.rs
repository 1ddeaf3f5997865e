//! Table lifecycle: create, edit, delete.
//!
//! Duplicate-title checks re-read the current night before writing. The
//! read-then-write window is not atomic; at sign-up-sheet scale the race is
//! accepted rather than engineered around.

use std::time::SystemTime;

use tracing::info;
use uuid::Uuid;

use crate::{
    dao::models::{TableEntity, TablePatch},
    dto::{
        board::TableSummary,
        forms::{CreateTableForm, DeleteTableForm, UpdateTableForm},
    },
    error::ServiceError,
    services::{
        DESCRIPTION_LIMIT, TITLE_LIMIT, WEIGHT_LIMIT, board_service, clip, guard_honeypot,
        normalize, parse_entity_id, parse_seats,
    },
    state::SharedState,
};

const TITLE_MIN: usize = 3;

struct TableInput {
    title: String,
    description: String,
    weight: String,
    seats: u32,
}

/// Clamp and validate the fields shared by create and update.
fn sanitize_table_input(
    state: &SharedState,
    title: Option<&str>,
    description: Option<&str>,
    weight: Option<&str>,
    seats: Option<&str>,
) -> Result<TableInput, ServiceError> {
    let title = clip(title, TITLE_LIMIT);
    if title.chars().count() < TITLE_MIN {
        return Err(ServiceError::InvalidInput("title is too short".into()));
    }

    let weight = clip(weight, WEIGHT_LIMIT);
    if !state.config().is_known_weight(&weight) {
        return Err(ServiceError::InvalidInput("select a table weight".into()));
    }

    Ok(TableInput {
        title,
        description: clip(description, DESCRIPTION_LIMIT),
        weight,
        seats: parse_seats(seats),
    })
}

/// Open a new table for a night, rejecting duplicate titles on that night.
pub async fn create_table(
    state: &SharedState,
    payload: CreateTableForm,
) -> Result<TableSummary, ServiceError> {
    guard_honeypot(&payload.website)?;

    let input = sanitize_table_input(
        state,
        payload.title.as_deref(),
        payload.description.as_deref(),
        payload.weight.as_deref(),
        payload.seats.as_deref(),
    )?;
    let night_date = board_service::resolve_night_date(state, payload.night_date.as_deref()).await?;

    let store = state.require_board_store().await?;
    let tables_for_night = store.list_tables(night_date.clone()).await?;
    let wanted = normalize(&input.title);
    if tables_for_night
        .iter()
        .any(|table| normalize(&table.title) == wanted)
    {
        return Err(ServiceError::InvalidInput(
            "a table with this title already exists for this night, pick another name".into(),
        ));
    }

    let table = TableEntity {
        id: Uuid::new_v4(),
        title: input.title,
        description: input.description,
        weight: input.weight,
        seats: input.seats,
        players: Vec::new(),
        night_date,
        created_at: SystemTime::now(),
    };

    store.insert_table(table.clone()).await?;
    info!(table_id = %table.id, night_date = %table.night_date, "table created");

    Ok(table.into())
}

/// Edit an existing table, keeping its title unique for the night.
pub async fn update_table(
    state: &SharedState,
    payload: UpdateTableForm,
) -> Result<TableSummary, ServiceError> {
    guard_honeypot(&payload.website)?;

    let table_id = parse_entity_id(payload.table_id.as_deref(), "table")?;
    let input = sanitize_table_input(
        state,
        payload.title.as_deref(),
        payload.description.as_deref(),
        payload.weight.as_deref(),
        payload.seats.as_deref(),
    )?;

    let store = state.require_board_store().await?;
    let existing = store
        .find_table(table_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound("table not found".into()))?;

    let tables_for_night = store.list_tables(existing.night_date.clone()).await?;
    let wanted = normalize(&input.title);
    if tables_for_night
        .iter()
        .any(|table| table.id != table_id && normalize(&table.title) == wanted)
    {
        return Err(ServiceError::InvalidInput(
            "a table with this title already exists for this night".into(),
        ));
    }

    let patch = TablePatch {
        title: input.title,
        description: input.description,
        weight: input.weight,
        seats: input.seats,
    };

    let updated = store
        .update_table(table_id, patch)
        .await?
        .ok_or_else(|| ServiceError::NotFound("table not found".into()))?;

    Ok(updated.into())
}

/// Remove a table and everyone seated at it.
pub async fn delete_table(
    state: &SharedState,
    payload: DeleteTableForm,
) -> Result<Uuid, ServiceError> {
    guard_honeypot(&payload.website)?;

    let table_id = parse_entity_id(payload.table_id.as_deref(), "table")?;
    let store = state.require_board_store().await?;

    if !store.delete_table(table_id).await? {
        return Err(ServiceError::NotFound("table not found".into()));
    }

    info!(%table_id, "table deleted");
    Ok(table_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::test_state;

    const NIGHT: &str = "2026-08-23";

    fn create_form(title: &str) -> CreateTableForm {
        CreateTableForm {
            title: Some(title.into()),
            description: Some("An evening of heavy euros".into()),
            weight: Some("Party".into()),
            seats: Some("5".into()),
            night_date: Some(NIGHT.into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn created_table_shows_up_on_the_night() {
        let state = test_state().await;

        let table = create_table(&state, create_form("Brass Birmingham"))
            .await
            .unwrap();
        assert_eq!(table.title, "Brass Birmingham");
        assert_eq!(table.seats, 5);
        assert!(table.players.is_empty());

        let snapshot = board_service::board_snapshot(&state, Some(NIGHT.into()))
            .await
            .unwrap();
        assert_eq!(snapshot.tables.len(), 1);
        assert_eq!(snapshot.tables[0].id, table.id);
    }

    #[tokio::test]
    async fn duplicate_title_is_rejected_case_insensitively() {
        let state = test_state().await;
        create_table(&state, create_form("Brass Birmingham"))
            .await
            .unwrap();

        let err = create_table(&state, create_form("  brass BIRMINGHAM "))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn same_title_is_fine_on_another_night() {
        let state = test_state().await;
        create_table(&state, create_form("Brass Birmingham"))
            .await
            .unwrap();

        let mut form = create_form("Brass Birmingham");
        form.night_date = Some("2026-08-30".into());
        assert!(create_table(&state, form).await.is_ok());
    }

    #[tokio::test]
    async fn seats_are_clamped_and_defaulted() {
        let state = test_state().await;

        let mut form = create_form("Root");
        form.seats = Some("99".into());
        assert_eq!(create_table(&state, form).await.unwrap().seats, 30);

        // An omitted field coerces to zero and clamps up to one seat; a value
        // that is not a number at all takes the default instead.
        let mut form = create_form("Wingspan");
        form.seats = None;
        assert_eq!(create_table(&state, form).await.unwrap().seats, 1);

        let mut form = create_form("Cascadia");
        form.seats = Some("a few".into());
        assert_eq!(create_table(&state, form).await.unwrap().seats, 4);
    }

    #[tokio::test]
    async fn short_title_and_unknown_weight_are_rejected() {
        let state = test_state().await;

        let err = create_table(&state, create_form("  ab  ")).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));

        let mut form = create_form("Root");
        form.weight = Some("Impossible".into());
        let err = create_table(&state, form).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn honeypot_blocks_the_submission() {
        let state = test_state().await;
        let mut form = create_form("Root");
        form.website = Some("https://spam.example".into());
        assert!(create_table(&state, form).await.is_err());
    }

    #[tokio::test]
    async fn update_edits_fields_and_keeps_titles_unique() {
        let state = test_state().await;
        create_table(&state, create_form("Root")).await.unwrap();
        let table = create_table(&state, create_form("Wingspan"))
            .await
            .unwrap();

        let updated = update_table(
            &state,
            UpdateTableForm {
                table_id: Some(table.id.to_string()),
                title: Some("Wingspan Oceania".into()),
                description: Some("With the expansion".into()),
                weight: Some("Party".into()),
                seats: Some("6".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(updated.title, "Wingspan Oceania");
        assert_eq!(updated.seats, 6);

        let err = update_table(
            &state,
            UpdateTableForm {
                table_id: Some(table.id.to_string()),
                title: Some("ROOT".into()),
                weight: Some("Party".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn update_and_delete_report_missing_tables() {
        let state = test_state().await;

        let err = update_table(
            &state,
            UpdateTableForm {
                table_id: Some(Uuid::new_v4().to_string()),
                title: Some("Root".into()),
                weight: Some("Party".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));

        let err = delete_table(
            &state,
            DeleteTableForm {
                table_id: Some(Uuid::new_v4().to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn deleted_table_leaves_the_board() {
        let state = test_state().await;
        let table = create_table(&state, create_form("Root")).await.unwrap();

        delete_table(
            &state,
            DeleteTableForm {
                table_id: Some(table.id.to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let snapshot = board_service::board_snapshot(&state, Some(NIGHT.into()))
            .await
            .unwrap();
        assert!(snapshot.tables.is_empty());
    }
}
