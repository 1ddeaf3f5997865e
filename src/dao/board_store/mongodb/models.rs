//! Wire representations of the board documents.
//!
//! The whole board lives in one collection; documents are told apart by their
//! `kind` tag. Identifiers are stored as UUID strings and field names stay
//! camelCase so the collection remains readable by the existing front-end.

use mongodb::bson::{DateTime, Document, doc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::{MongoDaoError, MongoResult};
use crate::dao::models::{PlayerEntity, SettingsEntity, SparePlayerEntity, TableEntity};

/// `kind` tag of table documents.
pub const TABLE_KIND: &str = "table";
/// `kind` tag of spare-player documents.
pub const SPARE_KIND: &str = "spare";
/// `kind` tag of the settings singleton.
pub const SETTINGS_KIND: &str = "settings";
/// Fixed `_id` of the settings singleton.
pub const SETTINGS_ID: &str = "settings";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub kind: String,
    pub title: String,
    pub description: String,
    pub weight: String,
    pub seats: u32,
    pub players: Vec<PlayerDocument>,
    pub night_date: String,
    pub created_at: DateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDocument {
    pub id: String,
    pub name: String,
    pub is_beginner: bool,
    pub is_teacher: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SparePlayerDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub kind: String,
    pub name: String,
    pub weight: String,
    pub night_date: String,
    pub created_at: DateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub kind: String,
    pub night_date: String,
    pub updated_at: DateTime,
}

impl From<TableEntity> for TableDocument {
    fn from(value: TableEntity) -> Self {
        Self {
            id: value.id.to_string(),
            kind: TABLE_KIND.to_owned(),
            title: value.title,
            description: value.description,
            weight: value.weight,
            seats: value.seats,
            players: value.players.into_iter().map(Into::into).collect(),
            night_date: value.night_date,
            created_at: DateTime::from_system_time(value.created_at),
        }
    }
}

impl TryFrom<TableDocument> for TableEntity {
    type Error = MongoDaoError;

    fn try_from(value: TableDocument) -> MongoResult<Self> {
        let players = value
            .players
            .into_iter()
            .map(PlayerEntity::try_from)
            .collect::<MongoResult<Vec<_>>>()?;

        Ok(Self {
            id: parse_doc_id(&value.id)?,
            title: value.title,
            description: value.description,
            weight: value.weight,
            seats: value.seats,
            players,
            night_date: value.night_date,
            created_at: value.created_at.to_system_time(),
        })
    }
}

impl From<PlayerEntity> for PlayerDocument {
    fn from(value: PlayerEntity) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name,
            is_beginner: value.beginner,
            is_teacher: value.teacher,
        }
    }
}

impl TryFrom<PlayerDocument> for PlayerEntity {
    type Error = MongoDaoError;

    fn try_from(value: PlayerDocument) -> MongoResult<Self> {
        Ok(Self {
            id: parse_doc_id(&value.id)?,
            name: value.name,
            beginner: value.is_beginner,
            teacher: value.is_teacher,
        })
    }
}

impl From<SparePlayerEntity> for SparePlayerDocument {
    fn from(value: SparePlayerEntity) -> Self {
        Self {
            id: value.id.to_string(),
            kind: SPARE_KIND.to_owned(),
            name: value.name,
            weight: value.weight,
            night_date: value.night_date,
            created_at: DateTime::from_system_time(value.created_at),
        }
    }
}

impl TryFrom<SparePlayerDocument> for SparePlayerEntity {
    type Error = MongoDaoError;

    fn try_from(value: SparePlayerDocument) -> MongoResult<Self> {
        Ok(Self {
            id: parse_doc_id(&value.id)?,
            name: value.name,
            weight: value.weight,
            night_date: value.night_date,
            created_at: value.created_at.to_system_time(),
        })
    }
}

impl From<SettingsEntity> for SettingsDocument {
    fn from(value: SettingsEntity) -> Self {
        Self {
            id: SETTINGS_ID.to_owned(),
            kind: SETTINGS_KIND.to_owned(),
            night_date: value.night_date,
            updated_at: DateTime::from_system_time(value.updated_at),
        }
    }
}

impl From<SettingsDocument> for SettingsEntity {
    fn from(value: SettingsDocument) -> Self {
        Self {
            night_date: value.night_date,
            updated_at: value.updated_at.to_system_time(),
        }
    }
}

fn parse_doc_id(raw: &str) -> MongoResult<Uuid> {
    Uuid::parse_str(raw).map_err(|source| MongoDaoError::MalformedDocumentId {
        id: raw.to_owned(),
        source,
    })
}

/// Filter matching a single document of the given kind.
pub fn doc_id(kind: &str, id: Uuid) -> Document {
    doc! { "_id": id.to_string(), "kind": kind }
}

/// Wire form of a player ready for an array `$push`/`$set`.
pub fn player_bson(player: &PlayerEntity) -> Document {
    doc! {
        "id": player.id.to_string(),
        "name": &player.name,
        "isBeginner": player.beginner,
        "isTeacher": player.teacher,
    }
}
