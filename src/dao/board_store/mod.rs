#[cfg(feature = "mongo-store")]
pub mod mongodb;

use futures::future::BoxFuture;
use uuid::Uuid;

use crate::dao::models::{
    PlayerEntity, SettingsEntity, SparePlayerEntity, TableEntity, TablePatch,
};
use crate::dao::storage::StorageResult;

/// Abstraction over the persistence layer for the sign-up board.
///
/// All entities live in a single logical collection partitioned by a `kind`
/// tag; every mutation below is a single-document command, so the store
/// offers no cross-document atomicity and none is required.
pub trait BoardStore: Send + Sync {
    /// Tables for one night, newest first.
    fn list_tables(&self, night_date: String) -> BoxFuture<'static, StorageResult<Vec<TableEntity>>>;
    fn find_table(&self, id: Uuid) -> BoxFuture<'static, StorageResult<Option<TableEntity>>>;
    fn insert_table(&self, table: TableEntity) -> BoxFuture<'static, StorageResult<()>>;
    /// Apply `patch` and return the post-image, or `None` when the table is gone.
    fn update_table(
        &self,
        id: Uuid,
        patch: TablePatch,
    ) -> BoxFuture<'static, StorageResult<Option<TableEntity>>>;
    /// Returns `false` when no table with this id existed.
    fn delete_table(&self, id: Uuid) -> BoxFuture<'static, StorageResult<bool>>;

    /// Append a player unless one with the same name already sits at the
    /// table, then return the current table state.
    fn push_player(
        &self,
        table_id: Uuid,
        player: PlayerEntity,
    ) -> BoxFuture<'static, StorageResult<Option<TableEntity>>>;
    fn update_player(
        &self,
        table_id: Uuid,
        player: PlayerEntity,
    ) -> BoxFuture<'static, StorageResult<Option<TableEntity>>>;
    fn pull_player(
        &self,
        table_id: Uuid,
        player_id: Uuid,
    ) -> BoxFuture<'static, StorageResult<Option<TableEntity>>>;

    /// Spare players for one night, newest first.
    fn list_spare_players(
        &self,
        night_date: String,
    ) -> BoxFuture<'static, StorageResult<Vec<SparePlayerEntity>>>;
    fn insert_spare_player(
        &self,
        spare: SparePlayerEntity,
    ) -> BoxFuture<'static, StorageResult<()>>;
    fn delete_spare_player(&self, id: Uuid) -> BoxFuture<'static, StorageResult<bool>>;

    fn load_settings(&self) -> BoxFuture<'static, StorageResult<Option<SettingsEntity>>>;
    fn save_settings(&self, settings: SettingsEntity) -> BoxFuture<'static, StorageResult<()>>;

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>>;
    fn try_reconnect(&self) -> BoxFuture<'static, StorageResult<()>>;
}
