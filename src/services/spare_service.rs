//! Spare-player waiting list: sign up for a weight category, leave the list.

use std::time::SystemTime;

use tracing::info;
use uuid::Uuid;

use crate::{
    dao::models::SparePlayerEntity,
    dto::{
        board::SparePlayerSummary,
        forms::{DeleteSparePlayerForm, JoinCategoryForm},
    },
    error::ServiceError,
    services::{
        NAME_LIMIT, WEIGHT_LIMIT, board_service, clip, guard_honeypot, normalize, parse_entity_id,
    },
    state::SharedState,
};

const NAME_MIN: usize = 2;

/// Queue a player for a weight category, one entry per (name, weight, night).
pub async fn join_category(
    state: &SharedState,
    payload: JoinCategoryForm,
) -> Result<SparePlayerSummary, ServiceError> {
    guard_honeypot(&payload.website)?;

    let weight = clip(payload.weight.as_deref(), WEIGHT_LIMIT);
    if !state.config().is_known_weight(&weight) {
        return Err(ServiceError::InvalidInput(
            "pick your preferred weight".into(),
        ));
    }

    let name = clip(payload.name.as_deref(), NAME_LIMIT);
    if name.chars().count() < NAME_MIN {
        return Err(ServiceError::InvalidInput("enter your name".into()));
    }

    let night_date = board_service::resolve_night_date(state, payload.night_date.as_deref()).await?;

    let store = state.require_board_store().await?;
    let existing = store.list_spare_players(night_date.clone()).await?;
    let wanted = normalize(&name);
    if existing
        .iter()
        .any(|spare| spare.weight == weight && normalize(&spare.name) == wanted)
    {
        return Err(ServiceError::InvalidInput(
            "a player with this name is already on the list for this weight, use your nickname"
                .into(),
        ));
    }

    let spare = SparePlayerEntity {
        id: Uuid::new_v4(),
        name,
        weight,
        night_date,
        created_at: SystemTime::now(),
    };

    store.insert_spare_player(spare.clone()).await?;
    info!(spare_id = %spare.id, weight = %spare.weight, "spare player signed up");

    Ok(spare.into())
}

/// Remove a spare player from the waiting list.
pub async fn delete_spare_player(
    state: &SharedState,
    payload: DeleteSparePlayerForm,
) -> Result<Uuid, ServiceError> {
    guard_honeypot(&payload.website)?;

    let spare_id = parse_entity_id(payload.id.as_deref(), "player")?;
    let store = state.require_board_store().await?;

    if !store.delete_spare_player(spare_id).await? {
        return Err(ServiceError::NotFound("player not found".into()));
    }

    Ok(spare_id)
}
