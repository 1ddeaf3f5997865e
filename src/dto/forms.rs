//! Form-encoded payloads submitted by the page actions.
//!
//! Field names mirror the HTML form inputs (camelCase). Every form carries the
//! `website` honeypot: browsers leave it empty, naive bots fill it in.
//! Checkbox fields arrive as present-or-absent, hence `Option<String>`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::dto::validation::validate_night_date;

/// Identifier of the page form an action payload belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum FormId {
    PageData,
    Create,
    Update,
    JoinTable,
    UpdatePlayer,
    JoinCategory,
    DeleteTable,
    DeletePlayer,
    DeleteSparePlayer,
    SetNightDate,
}

/// Reload request for the full board data set.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageDataForm {
    #[serde(default)]
    pub night_date: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

/// Organizer request to open a new table.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTableForm {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub weight: Option<String>,
    /// Raw seats value; parsed and clamped server-side.
    #[serde(default)]
    pub seats: Option<String>,
    #[serde(default)]
    pub night_date: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

/// Organizer request to edit an existing table.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTableForm {
    #[serde(default)]
    pub table_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub weight: Option<String>,
    #[serde(default)]
    pub seats: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

/// Player request to take a seat at a table.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JoinTableForm {
    #[serde(default)]
    pub table_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub night_date: Option<String>,
    #[serde(default)]
    pub is_beginner: Option<String>,
    #[serde(default)]
    pub is_teacher: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

/// Request to edit a seated player.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlayerForm {
    #[serde(default)]
    pub table_id: Option<String>,
    #[serde(default)]
    pub player_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub is_beginner: Option<String>,
    #[serde(default)]
    pub is_teacher: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

/// Player request to queue up as a spare for a weight category.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JoinCategoryForm {
    #[serde(default)]
    pub weight: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub night_date: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

/// Organizer request to remove a table.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTableForm {
    #[serde(default)]
    pub table_id: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

/// Request to remove a seated player.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeletePlayerForm {
    #[serde(default)]
    pub table_id: Option<String>,
    #[serde(default)]
    pub player_id: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

/// Request to remove a spare player from the waiting list.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteSparePlayerForm {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

/// Organizer request to switch the active night date.
#[derive(Debug, Default, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SetNightDateForm {
    #[serde(default)]
    #[validate(custom(function = validate_night_date))]
    pub night_date: String,
    #[serde(default)]
    pub website: Option<String>,
}
