//! Seated-player operations: join a table, edit, remove.

use uuid::Uuid;

use crate::{
    dao::models::PlayerEntity,
    dto::{
        board::TableSummary,
        forms::{DeletePlayerForm, JoinTableForm, UpdatePlayerForm},
    },
    error::ServiceError,
    services::{NAME_LIMIT, checkbox, clip, guard_honeypot, normalize, parse_entity_id},
    state::SharedState,
};

const NAME_MIN: usize = 2;

fn sanitize_player_name(raw: Option<&str>) -> Result<String, ServiceError> {
    let name = clip(raw, NAME_LIMIT);
    if name.chars().count() < NAME_MIN {
        return Err(ServiceError::InvalidInput("enter the player name".into()));
    }
    Ok(name)
}

/// Seat a player at a table, rejecting names already present there.
///
/// The duplicate check reads the current table first; the store's push is
/// additionally guarded on the exact name, so the benign race between two
/// identical submissions resolves to a single seat.
pub async fn join_table(
    state: &SharedState,
    payload: JoinTableForm,
) -> Result<TableSummary, ServiceError> {
    guard_honeypot(&payload.website)?;

    let table_id = parse_entity_id(payload.table_id.as_deref(), "table")?;
    let name = sanitize_player_name(payload.name.as_deref())?;

    let store = state.require_board_store().await?;
    let table = store
        .find_table(table_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound("table not found".into()))?;

    let wanted = normalize(&name);
    if table
        .players
        .iter()
        .any(|player| normalize(&player.name) == wanted)
    {
        return Err(ServiceError::InvalidInput(
            "name already taken at this table, use your nickname".into(),
        ));
    }

    let player = PlayerEntity {
        id: Uuid::new_v4(),
        name,
        beginner: checkbox(&payload.is_beginner),
        teacher: checkbox(&payload.is_teacher),
    };

    let updated = store
        .push_player(table_id, player)
        .await?
        .ok_or_else(|| ServiceError::NotFound("table not found".into()))?;

    Ok(updated.into())
}

/// Edit a seated player, keeping names unique within the table.
pub async fn update_player(
    state: &SharedState,
    payload: UpdatePlayerForm,
) -> Result<TableSummary, ServiceError> {
    guard_honeypot(&payload.website)?;

    let table_id = parse_entity_id(payload.table_id.as_deref(), "table")?;
    let player_id = parse_entity_id(payload.player_id.as_deref(), "player")?;
    let name = sanitize_player_name(payload.name.as_deref())?;

    let store = state.require_board_store().await?;
    let table = store.find_table(table_id).await?.ok_or_else(|| {
        ServiceError::NotFound("table not found, maybe someone deleted it in the meantime".into())
    })?;

    let wanted = normalize(&name);
    if table
        .players
        .iter()
        .any(|player| player.id != player_id && normalize(&player.name) == wanted)
    {
        return Err(ServiceError::InvalidInput(
            "name already taken at this table, use your nickname".into(),
        ));
    }

    let player = PlayerEntity {
        id: player_id,
        name,
        beginner: checkbox(&payload.is_beginner),
        teacher: checkbox(&payload.is_teacher),
    };

    let updated = store
        .update_player(table_id, player)
        .await?
        .ok_or_else(|| ServiceError::NotFound("failed to edit the player".into()))?;

    Ok(updated.into())
}

/// Remove a player from a table.
pub async fn delete_player(
    state: &SharedState,
    payload: DeletePlayerForm,
) -> Result<TableSummary, ServiceError> {
    guard_honeypot(&payload.website)?;

    let table_id = parse_entity_id(payload.table_id.as_deref(), "table")?;
    let player_id = parse_entity_id(payload.player_id.as_deref(), "player")?;

    let store = state.require_board_store().await?;
    let updated = store
        .pull_player(table_id, player_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound("player or table not found".into()))?;

    Ok(updated.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        dto::forms::CreateTableForm,
        services::{table_service, test_support::test_state},
        state::SharedState,
    };

    async fn seeded_table(state: &SharedState) -> Uuid {
        let table = table_service::create_table(
            state,
            CreateTableForm {
                title: Some("Brass Birmingham".into()),
                weight: Some("Party".into()),
                night_date: Some("2026-08-23".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        table.id
    }

    fn join_form(table_id: Uuid, name: &str) -> JoinTableForm {
        JoinTableForm {
            table_id: Some(table_id.to_string()),
            name: Some(name.into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn joining_seats_the_player() {
        let state = test_state().await;
        let table_id = seeded_table(&state).await;

        let mut form = join_form(table_id, "  Ada  ");
        form.is_beginner = Some("on".into());
        let table = join_table(&state, form).await.unwrap();

        assert_eq!(table.players.len(), 1);
        assert_eq!(table.players[0].name, "Ada");
        assert!(table.players[0].is_beginner);
        assert!(!table.players[0].is_teacher);
    }

    #[tokio::test]
    async fn duplicate_name_at_the_table_is_rejected() {
        let state = test_state().await;
        let table_id = seeded_table(&state).await;
        join_table(&state, join_form(table_id, "Ada")).await.unwrap();

        let err = join_table(&state, join_form(table_id, " ADA "))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn one_character_names_are_rejected() {
        let state = test_state().await;
        let table_id = seeded_table(&state).await;

        let err = join_table(&state, join_form(table_id, " a "))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn joining_a_missing_table_reports_not_found() {
        let state = test_state().await;

        let err = join_table(&state, join_form(Uuid::new_v4(), "Ada"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));

        let err = join_table(
            &state,
            JoinTableForm {
                table_id: Some("not-a-uuid".into()),
                name: Some("Ada".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn renaming_onto_another_player_is_rejected() {
        let state = test_state().await;
        let table_id = seeded_table(&state).await;
        join_table(&state, join_form(table_id, "Ada")).await.unwrap();
        let table = join_table(&state, join_form(table_id, "Grace"))
            .await
            .unwrap();
        let grace = table
            .players
            .iter()
            .find(|player| player.name == "Grace")
            .unwrap();

        let err = update_player(
            &state,
            UpdatePlayerForm {
                table_id: Some(table_id.to_string()),
                player_id: Some(grace.id.to_string()),
                name: Some("ada".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));

        // Keeping her own name with different flags is fine.
        let table = update_player(
            &state,
            UpdatePlayerForm {
                table_id: Some(table_id.to_string()),
                player_id: Some(grace.id.to_string()),
                name: Some("Grace".into()),
                is_teacher: Some("on".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        let grace = table
            .players
            .iter()
            .find(|player| player.name == "Grace")
            .unwrap();
        assert!(grace.is_teacher);
    }

    #[tokio::test]
    async fn deleting_a_player_frees_the_seat() {
        let state = test_state().await;
        let table_id = seeded_table(&state).await;
        let table = join_table(&state, join_form(table_id, "Ada"))
            .await
            .unwrap();
        let player_id = table.players[0].id;

        let table = delete_player(
            &state,
            DeletePlayerForm {
                table_id: Some(table_id.to_string()),
                player_id: Some(player_id.to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert!(table.players.is_empty());

        let err = delete_player(
            &state,
            DeletePlayerForm {
                table_id: Some(Uuid::new_v4().to_string()),
                player_id: Some(player_id.to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }
}
