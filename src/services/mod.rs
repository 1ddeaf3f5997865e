//! Business logic behind the board routes: input clamping, duplicate checks,
//! and the thin orchestration between form payloads and the store.

/// Board snapshot assembly and night-date resolution.
pub mod board_service;
/// OpenAPI document definition.
pub mod documentation;
/// Health reporting.
pub mod health_service;
/// Seated-player operations.
pub mod player_service;
/// Spare-player waiting list operations.
pub mod spare_service;
/// Board store connection supervision.
pub mod storage_supervisor;
/// Table lifecycle operations.
pub mod table_service;

#[cfg(test)]
pub(crate) mod test_support;

use uuid::Uuid;

use crate::error::ServiceError;

pub(crate) const TITLE_LIMIT: usize = 80;
pub(crate) const DESCRIPTION_LIMIT: usize = 240;
pub(crate) const NAME_LIMIT: usize = 48;
pub(crate) const WEIGHT_LIMIT: usize = 64;
pub(crate) const ID_LIMIT: usize = 128;
pub(crate) const NIGHT_DATE_LIMIT: usize = 32;

pub(crate) const SEATS_MIN: u32 = 1;
pub(crate) const SEATS_MAX: u32 = 30;
pub(crate) const SEATS_DEFAULT: u32 = 4;

/// Trim a raw form value and clip it to `limit` characters.
pub(crate) fn clip(value: Option<&str>, limit: usize) -> String {
    value
        .map(|raw| raw.trim().chars().take(limit).collect())
        .unwrap_or_default()
}

/// Case-insensitive comparison key for names and titles.
pub(crate) fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Parse the raw seats field and clamp it to the allowed range. A missing or
/// empty field coerces to zero and clamps up to the minimum; a value that is
/// not a number at all falls back to the default seat count.
pub(crate) fn parse_seats(raw: Option<&str>) -> u32 {
    let raw = raw.unwrap_or_default().trim();
    if raw.is_empty() {
        return SEATS_MIN;
    }

    raw.parse::<i64>()
        .map(|seats| seats.clamp(SEATS_MIN as i64, SEATS_MAX as i64) as u32)
        .unwrap_or(SEATS_DEFAULT)
}

/// Checkbox semantics: the field being present at all means checked.
pub(crate) fn checkbox(value: &Option<String>) -> bool {
    value.is_some()
}

/// Reject submissions where the honeypot field was filled in.
pub(crate) fn guard_honeypot(website: &Option<String>) -> Result<(), ServiceError> {
    if !clip(website.as_deref(), 32).is_empty() {
        return Err(ServiceError::InvalidInput("bot detected".into()));
    }
    Ok(())
}

/// Parse an entity id field. A malformed id can only reference a document
/// that does not exist, so it reports not-found like any other stale id.
pub(crate) fn parse_entity_id(raw: Option<&str>, what: &str) -> Result<Uuid, ServiceError> {
    let clipped = clip(raw, ID_LIMIT);
    Uuid::parse_str(&clipped).map_err(|_| ServiceError::NotFound(format!("{what} not found")))
}
