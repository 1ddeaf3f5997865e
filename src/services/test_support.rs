//! In-memory [`BoardStore`] used by the service-level tests.

use std::sync::{Arc, Mutex};

use futures::future::BoxFuture;
use uuid::Uuid;

use crate::{
    config::AppConfig,
    dao::{
        board_store::BoardStore,
        models::{PlayerEntity, SettingsEntity, SparePlayerEntity, TableEntity, TablePatch},
        storage::StorageResult,
    },
    state::{AppState, SharedState},
};

#[derive(Default)]
struct BoardData {
    tables: Vec<TableEntity>,
    spare_players: Vec<SparePlayerEntity>,
    settings: Option<SettingsEntity>,
}

/// Stores everything in a mutex-guarded struct; mirrors the single-document
/// command semantics of the real backend.
#[derive(Clone, Default)]
pub(crate) struct MemoryBoardStore {
    data: Arc<Mutex<BoardData>>,
}

impl BoardStore for MemoryBoardStore {
    fn list_tables(
        &self,
        night_date: String,
    ) -> BoxFuture<'static, StorageResult<Vec<TableEntity>>> {
        let data = self.data.clone();
        Box::pin(async move {
            let guard = data.lock().expect("store poisoned");
            let mut tables: Vec<TableEntity> = guard
                .tables
                .iter()
                .filter(|table| table.night_date == night_date)
                .cloned()
                .collect();
            tables.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(tables)
        })
    }

    fn find_table(&self, id: Uuid) -> BoxFuture<'static, StorageResult<Option<TableEntity>>> {
        let data = self.data.clone();
        Box::pin(async move {
            let guard = data.lock().expect("store poisoned");
            Ok(guard.tables.iter().find(|table| table.id == id).cloned())
        })
    }

    fn insert_table(&self, table: TableEntity) -> BoxFuture<'static, StorageResult<()>> {
        let data = self.data.clone();
        Box::pin(async move {
            let mut guard = data.lock().expect("store poisoned");
            guard.tables.push(table);
            Ok(())
        })
    }

    fn update_table(
        &self,
        id: Uuid,
        patch: TablePatch,
    ) -> BoxFuture<'static, StorageResult<Option<TableEntity>>> {
        let data = self.data.clone();
        Box::pin(async move {
            let mut guard = data.lock().expect("store poisoned");
            let Some(table) = guard.tables.iter_mut().find(|table| table.id == id) else {
                return Ok(None);
            };
            table.title = patch.title;
            table.description = patch.description;
            table.weight = patch.weight;
            table.seats = patch.seats;
            Ok(Some(table.clone()))
        })
    }

    fn delete_table(&self, id: Uuid) -> BoxFuture<'static, StorageResult<bool>> {
        let data = self.data.clone();
        Box::pin(async move {
            let mut guard = data.lock().expect("store poisoned");
            let before = guard.tables.len();
            guard.tables.retain(|table| table.id != id);
            Ok(guard.tables.len() < before)
        })
    }

    fn push_player(
        &self,
        table_id: Uuid,
        player: PlayerEntity,
    ) -> BoxFuture<'static, StorageResult<Option<TableEntity>>> {
        let data = self.data.clone();
        Box::pin(async move {
            let mut guard = data.lock().expect("store poisoned");
            let Some(table) = guard.tables.iter_mut().find(|table| table.id == table_id) else {
                return Ok(None);
            };
            // Exact-name guard, matching the conditional `$push`.
            if !table.players.iter().any(|seated| seated.name == player.name) {
                table.players.push(player);
            }
            Ok(Some(table.clone()))
        })
    }

    fn update_player(
        &self,
        table_id: Uuid,
        player: PlayerEntity,
    ) -> BoxFuture<'static, StorageResult<Option<TableEntity>>> {
        let data = self.data.clone();
        Box::pin(async move {
            let mut guard = data.lock().expect("store poisoned");
            let Some(table) = guard.tables.iter_mut().find(|table| table.id == table_id) else {
                return Ok(None);
            };
            let Some(seated) = table
                .players
                .iter_mut()
                .find(|seated| seated.id == player.id)
            else {
                return Ok(None);
            };
            *seated = player;
            Ok(Some(table.clone()))
        })
    }

    fn pull_player(
        &self,
        table_id: Uuid,
        player_id: Uuid,
    ) -> BoxFuture<'static, StorageResult<Option<TableEntity>>> {
        let data = self.data.clone();
        Box::pin(async move {
            let mut guard = data.lock().expect("store poisoned");
            let Some(table) = guard.tables.iter_mut().find(|table| table.id == table_id) else {
                return Ok(None);
            };
            table.players.retain(|seated| seated.id != player_id);
            Ok(Some(table.clone()))
        })
    }

    fn list_spare_players(
        &self,
        night_date: String,
    ) -> BoxFuture<'static, StorageResult<Vec<SparePlayerEntity>>> {
        let data = self.data.clone();
        Box::pin(async move {
            let guard = data.lock().expect("store poisoned");
            let mut spares: Vec<SparePlayerEntity> = guard
                .spare_players
                .iter()
                .filter(|spare| spare.night_date == night_date)
                .cloned()
                .collect();
            spares.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(spares)
        })
    }

    fn insert_spare_player(
        &self,
        spare: SparePlayerEntity,
    ) -> BoxFuture<'static, StorageResult<()>> {
        let data = self.data.clone();
        Box::pin(async move {
            let mut guard = data.lock().expect("store poisoned");
            guard.spare_players.push(spare);
            Ok(())
        })
    }

    fn delete_spare_player(&self, id: Uuid) -> BoxFuture<'static, StorageResult<bool>> {
        let data = self.data.clone();
        Box::pin(async move {
            let mut guard = data.lock().expect("store poisoned");
            let before = guard.spare_players.len();
            guard.spare_players.retain(|spare| spare.id != id);
            Ok(guard.spare_players.len() < before)
        })
    }

    fn load_settings(&self) -> BoxFuture<'static, StorageResult<Option<SettingsEntity>>> {
        let data = self.data.clone();
        Box::pin(async move {
            let guard = data.lock().expect("store poisoned");
            Ok(guard.settings.clone())
        })
    }

    fn save_settings(&self, settings: SettingsEntity) -> BoxFuture<'static, StorageResult<()>> {
        let data = self.data.clone();
        Box::pin(async move {
            let mut guard = data.lock().expect("store poisoned");
            guard.settings = Some(settings);
            Ok(())
        })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        Box::pin(async { Ok(()) })
    }

    fn try_reconnect(&self) -> BoxFuture<'static, StorageResult<()>> {
        Box::pin(async { Ok(()) })
    }
}

/// Shared state backed by an in-memory store and default config.
pub(crate) async fn test_state() -> SharedState {
    let state = AppState::new(AppConfig::default());
    state
        .install_board_store(Arc::new(MemoryBoardStore::default()))
        .await;
    state
}
