//! Post-mutation orchestration for the board page.
//!
//! Every successful form action invalidates the whole page data set, so each
//! handler reloads the board through a [`BoardReloader`] and then closes the
//! modal that triggered the mutation.

use futures::future::BoxFuture;

use crate::{
    dto::board::{SparePlayerSummary, TableSummary},
    state::page::{DeletePlayerContext, PageState},
};

/// Abstraction over "fetch the full board for this night again".
///
/// Reload failures are the reloader's business (typically a retry or a toast);
/// the dispatcher always proceeds to its modal bookkeeping.
pub trait BoardReloader {
    fn reload<'a>(&'a mut self, night_date: &str) -> BoxFuture<'a, ()>;
}

/// Drives the reload-then-close flow after each board mutation.
pub struct ActionDispatcher<R> {
    reloader: R,
}

impl<R: BoardReloader> ActionDispatcher<R> {
    pub fn new(reloader: R) -> Self {
        Self { reloader }
    }

    /// A table was created (or the modal was dismissed with nothing created).
    pub async fn handle_table_created(
        &mut self,
        page: &mut PageState,
        table: Option<&TableSummary>,
        night_date: &str,
    ) {
        if table.is_some() {
            self.reloader.reload(night_date).await;
        }
        page.create_table.close();
    }

    /// An edited table was saved.
    pub async fn handle_table_saved(&mut self, page: &mut PageState, night_date: &str) {
        self.reloader.reload(night_date).await;
        page.edit_table.close();
    }

    /// A table was deleted after confirmation.
    pub async fn handle_table_deleted(&mut self, page: &mut PageState, night_date: &str) {
        self.reloader.reload(night_date).await;
        page.delete_table.close();
    }

    /// A seated player was edited and saved.
    pub async fn handle_player_saved(&mut self, night_date: &str) {
        self.reloader.reload(night_date).await;
    }

    /// A player joined a table.
    pub async fn handle_player_added(&mut self, page: &mut PageState, night_date: &str) {
        self.reloader.reload(night_date).await;
        page.add_player.close();
    }

    /// A player was removed after confirmation.
    pub async fn handle_player_deleted(&mut self, page: &mut PageState, night_date: &str) {
        self.reloader.reload(night_date).await;
        page.delete_player.close();
    }

    /// Delete was requested from the player detail view: hand the payload over
    /// to the confirmation modal and close the detail.
    pub fn handle_detail_player_deleted(&mut self, page: &mut PageState) {
        let Some(context) = page.detail_player.payload() else {
            return;
        };

        let confirmation = DeletePlayerContext {
            table_id: context.table_id,
            player_id: context.player.id,
            player_name: context.player.name.clone(),
        };
        page.delete_player.open(confirmation);
        page.detail_player.close();
    }

    /// A spare player signed up (or the modal was dismissed empty-handed).
    pub async fn handle_spare_added(
        &mut self,
        page: &mut PageState,
        spare_player: Option<&SparePlayerSummary>,
        night_date: &str,
    ) {
        if spare_player.is_some() {
            self.reloader.reload(night_date).await;
        }
        page.add_spare_player.close();
    }

    /// Another night was selected; the page state itself is updated by the
    /// caller once the reload lands.
    pub async fn handle_night_date_selected(&mut self, updated_date: &str) {
        self.reloader.reload(updated_date).await;
    }
}
