//! Entity types shared between the store trait and the service layer.

use std::time::SystemTime;

use uuid::Uuid;

/// A game table open for sign-ups on a given night.
#[derive(Debug, Clone)]
pub struct TableEntity {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub weight: String,
    pub seats: u32,
    pub players: Vec<PlayerEntity>,
    pub night_date: String,
    pub created_at: SystemTime,
}

/// A player seated at a table. Owned exclusively by its table document.
#[derive(Debug, Clone)]
pub struct PlayerEntity {
    pub id: Uuid,
    pub name: String,
    pub beginner: bool,
    pub teacher: bool,
}

/// A player waiting for a seat in a weight category.
#[derive(Debug, Clone)]
pub struct SparePlayerEntity {
    pub id: Uuid,
    pub name: String,
    pub weight: String,
    pub night_date: String,
    pub created_at: SystemTime,
}

/// Singleton settings document carrying the active night date.
#[derive(Debug, Clone)]
pub struct SettingsEntity {
    pub night_date: String,
    pub updated_at: SystemTime,
}

/// Fields an organizer can change on an existing table.
#[derive(Debug, Clone)]
pub struct TablePatch {
    pub title: String,
    pub description: String,
    pub weight: String,
    pub seats: u32,
}
