//! Modal bookkeeping for the board page.
//!
//! The page drives one modal per interaction (create table, join, edit,
//! confirm deletion, ...) and the edit/delete confirmations stack on top of
//! the detail views, so each modal tracks its own open flag and payload.
//! Plain structs with methods; clients embedding the API (kiosk front-end,
//! tests) own a [`PageState`] and mutate it through these methods.

use time::OffsetDateTime;
use uuid::Uuid;

use crate::dto::board::{PlayerSummary, TableSummary};

/// Floating action button menu, the only toggleable surface on the page.
#[derive(Debug, Default)]
pub struct FabMenu {
    open: bool,
}

impl FabMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }
}

/// Open/closed bookkeeping for a modal without a payload.
#[derive(Debug, Default)]
pub struct Modal {
    open: bool,
}

impl Modal {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// A modal that carries context while open and drops it on close.
#[derive(Debug)]
pub struct PayloadModal<T> {
    payload: Option<T>,
}

impl<T> Default for PayloadModal<T> {
    fn default() -> Self {
        Self { payload: None }
    }
}

impl<T> PayloadModal<T> {
    pub fn is_open(&self) -> bool {
        self.payload.is_some()
    }

    pub fn open(&mut self, payload: T) {
        self.payload = Some(payload);
    }

    pub fn close(&mut self) {
        self.payload = None;
    }

    pub fn payload(&self) -> Option<&T> {
        self.payload.as_ref()
    }
}

/// Context captured when the edit-table modal opens: the table being edited,
/// the default field values the form starts from, and the stacking z-index.
#[derive(Debug, Clone)]
pub struct EditTableContext {
    pub table: TableSummary,
    pub z_index: i32,
    pub default_title: String,
    pub default_description: String,
    pub default_seats: u32,
    pub default_weight: String,
}

impl EditTableContext {
    /// Prime the edit form from a table, stacking above `current_z_index`.
    pub fn for_table(table: TableSummary, current_z_index: i32) -> Self {
        Self {
            default_title: table.title.clone(),
            default_description: table.description.clone(),
            default_seats: table.seats,
            default_weight: table.weight.clone(),
            z_index: current_z_index + 1,
            table,
        }
    }
}

/// Context for the delete-table confirmation modal.
#[derive(Debug, Clone)]
pub struct DeleteTableContext {
    pub table_id: Uuid,
    pub title: String,
    pub z_index: i32,
}

impl DeleteTableContext {
    pub fn for_table(table: &TableSummary, current_z_index: i32) -> Self {
        Self {
            table_id: table.id,
            title: table.title.clone(),
            z_index: current_z_index + 1,
        }
    }
}

/// Context for the add-player modal: just enough of the table to join it.
#[derive(Debug, Clone)]
pub struct AddPlayerContext {
    pub table_id: Uuid,
    pub title: String,
    pub night_date: String,
}

impl From<&TableSummary> for AddPlayerContext {
    fn from(table: &TableSummary) -> Self {
        Self {
            table_id: table.id,
            title: table.title.clone(),
            night_date: table.night_date.clone(),
        }
    }
}

/// A player in the context of its table, used by the detail and edit modals.
#[derive(Debug, Clone)]
pub struct PlayerContext {
    pub table_id: Uuid,
    pub player: PlayerSummary,
}

/// Context for the delete-player confirmation modal.
#[derive(Debug, Clone)]
pub struct DeletePlayerContext {
    pub table_id: Uuid,
    pub player_id: Uuid,
    pub player_name: String,
}

/// Aggregated modal state for the board page.
#[derive(Debug, Default)]
pub struct PageState {
    pub fab_menu: FabMenu,
    pub create_table: Modal,
    pub add_spare_player: Modal,
    pub edit_table: PayloadModal<EditTableContext>,
    pub delete_table: PayloadModal<DeleteTableContext>,
    pub detail_table: PayloadModal<Uuid>,
    pub add_player: PayloadModal<AddPlayerContext>,
    pub detail_player: PayloadModal<PlayerContext>,
    pub edit_player: PayloadModal<PlayerContext>,
    pub delete_player: PayloadModal<DeletePlayerContext>,
    /// Z-index of the page content the stacked modals raise above.
    pub base_z_index: i32,
    night_date: String,
}

impl PageState {
    /// State for a freshly loaded page showing `initial_night_date`.
    pub fn new(initial_night_date: impl Into<String>) -> Self {
        Self {
            night_date: initial_night_date.into(),
            ..Self::default()
        }
    }

    /// The night the page is currently showing.
    pub fn night_date(&self) -> &str {
        &self.night_date
    }

    /// Switch the page to another night.
    pub fn update_night_date(&mut self, new_date: impl Into<String>) {
        self.night_date = new_date.into();
    }

    /// Render an epoch-milliseconds timestamp as a wall-clock `HH:MM` label.
    pub fn format_timestamp(millis: i64) -> String {
        OffsetDateTime::from_unix_timestamp(millis / 1000)
            .map(|time| format!("{:02}:{:02}", time.hour(), time.minute()))
            .unwrap_or_else(|_| "--:--".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> TableSummary {
        TableSummary {
            id: Uuid::new_v4(),
            title: "Brass Birmingham".into(),
            description: "heavy economic game".into(),
            weight: "Estremo (>2h)".into(),
            seats: 4,
            players: vec![],
            night_date: "2026-08-23".into(),
            created_at: 1_766_500_000_000,
        }
    }

    #[test]
    fn fab_menu_toggles() {
        let mut fab = FabMenu::default();
        assert!(!fab.is_open());
        fab.toggle();
        assert!(fab.is_open());
        fab.toggle();
        assert!(!fab.is_open());
        fab.open();
        fab.close();
        assert!(!fab.is_open());
    }

    #[test]
    fn payload_modal_drops_context_on_close() {
        let mut modal = PayloadModal::<Uuid>::default();
        assert!(!modal.is_open());

        let id = Uuid::new_v4();
        modal.open(id);
        assert!(modal.is_open());
        assert_eq!(modal.payload(), Some(&id));

        modal.close();
        assert!(!modal.is_open());
        assert!(modal.payload().is_none());
    }

    #[test]
    fn edit_table_context_primes_defaults_and_stacks() {
        let table = sample_table();
        let context = EditTableContext::for_table(table.clone(), 10);

        assert_eq!(context.default_title, table.title);
        assert_eq!(context.default_description, table.description);
        assert_eq!(context.default_seats, table.seats);
        assert_eq!(context.default_weight, table.weight);
        assert_eq!(context.z_index, 11);
    }

    #[test]
    fn delete_table_context_keeps_only_id_and_title() {
        let table = sample_table();
        let context = DeleteTableContext::for_table(&table, 0);

        assert_eq!(context.table_id, table.id);
        assert_eq!(context.title, table.title);
        assert_eq!(context.z_index, 1);
    }

    #[test]
    fn page_state_tracks_night_date() {
        let mut page = PageState::new("2026-08-23");
        assert_eq!(page.night_date(), "2026-08-23");

        page.update_night_date("2026-08-30");
        assert_eq!(page.night_date(), "2026-08-30");
    }

    #[test]
    fn format_timestamp_is_wall_clock() {
        // 2026-08-23T19:30:00Z
        assert_eq!(PageState::format_timestamp(1_787_513_400_000), "19:30");
        assert_eq!(PageState::format_timestamp(0), "00:00");
    }
}
