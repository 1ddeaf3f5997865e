//! Projections of board entities exposed to REST clients, plus the action
//! success payloads. Everything serializes camelCase to match the page forms.

use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    dao::models::{PlayerEntity, SparePlayerEntity, TableEntity},
    dto::{forms::FormId, system_time_millis},
};

/// Public projection of a table and its seated players.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TableSummary {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub weight: String,
    pub seats: u32,
    pub players: Vec<PlayerSummary>,
    pub night_date: String,
    /// Creation time as epoch milliseconds.
    pub created_at: i64,
}

/// Public projection of a seated player.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSummary {
    pub id: Uuid,
    pub name: String,
    pub is_beginner: bool,
    pub is_teacher: bool,
}

/// Public projection of a spare player awaiting a seat.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SparePlayerSummary {
    pub id: Uuid,
    pub name: String,
    pub weight: String,
    pub night_date: String,
    /// Creation time as epoch milliseconds.
    pub created_at: i64,
}

/// Full data set the page renders for one night.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BoardSnapshot {
    pub tables: Vec<TableSummary>,
    pub spare_players: Vec<SparePlayerSummary>,
    pub weights: Vec<String>,
    pub night_date: String,
}

impl From<TableEntity> for TableSummary {
    fn from(value: TableEntity) -> Self {
        Self {
            id: value.id,
            title: value.title,
            description: value.description,
            weight: value.weight,
            seats: value.seats,
            players: value.players.into_iter().map(Into::into).collect(),
            night_date: value.night_date,
            created_at: system_time_millis(value.created_at),
        }
    }
}

impl From<PlayerEntity> for PlayerSummary {
    fn from(value: PlayerEntity) -> Self {
        Self {
            id: value.id,
            name: value.name,
            is_beginner: value.beginner,
            is_teacher: value.teacher,
        }
    }
}

impl From<SparePlayerEntity> for SparePlayerSummary {
    fn from(value: SparePlayerEntity) -> Self {
        Self {
            id: value.id,
            name: value.name,
            weight: value.weight,
            night_date: value.night_date,
            created_at: system_time_millis(value.created_at),
        }
    }
}

/// Success payload for actions that resolve to a table state.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TableActionResponse {
    pub success: bool,
    pub form: FormId,
    pub table: TableSummary,
}

impl TableActionResponse {
    pub fn new(form: FormId, table: TableSummary) -> Self {
        Self {
            success: true,
            form,
            table,
        }
    }
}

/// Success payload for the spare-player sign-up action.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SparePlayerActionResponse {
    pub success: bool,
    pub form: FormId,
    pub spare_player: SparePlayerSummary,
}

impl SparePlayerActionResponse {
    pub fn new(form: FormId, spare_player: SparePlayerSummary) -> Self {
        Self {
            success: true,
            form,
            spare_player,
        }
    }
}

/// Success payload for the delete-table action.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TableDeletedResponse {
    pub success: bool,
    pub form: FormId,
    pub table_id: Uuid,
}

impl TableDeletedResponse {
    pub fn new(table_id: Uuid) -> Self {
        Self {
            success: true,
            form: FormId::DeleteTable,
            table_id,
        }
    }
}

/// Success payload for the delete-spare-player action.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SparePlayerDeletedResponse {
    pub success: bool,
    pub form: FormId,
    pub spare_player_id: Uuid,
}

impl SparePlayerDeletedResponse {
    pub fn new(spare_player_id: Uuid) -> Self {
        Self {
            success: true,
            form: FormId::DeleteSparePlayer,
            spare_player_id,
        }
    }
}

/// Success payload for the set-night-date action.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NightDateResponse {
    pub success: bool,
    pub form: FormId,
    pub night_date: String,
}

impl NightDateResponse {
    pub fn new(night_date: String) -> Self {
        Self {
            success: true,
            form: FormId::SetNightDate,
            night_date,
        }
    }
}
