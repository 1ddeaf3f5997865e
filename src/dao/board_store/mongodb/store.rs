use std::sync::Arc;

use futures::{TryStreamExt, future::BoxFuture};
use mongodb::{
    Client, Collection, Database,
    bson::doc,
    options::{IndexOptions, ReturnDocument},
};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{
    config::MongoConfig,
    connection::establish_connection,
    error::{MongoDaoError, MongoResult},
    models::{
        PlayerDocument, SETTINGS_ID, SETTINGS_KIND, SPARE_KIND, SettingsDocument,
        SparePlayerDocument, TABLE_KIND, TableDocument, doc_id, player_bson,
    },
};
use crate::dao::{
    board_store::BoardStore,
    models::{PlayerEntity, SettingsEntity, SparePlayerEntity, TableEntity, TablePatch},
    storage::StorageResult,
};

/// The one collection holding every board document, kept under its historical
/// name so existing deployments keep working.
const BOARD_COLLECTION_NAME: &str = "ZugaTableFinder";

/// MongoDB-backed [`BoardStore`] implementation.
#[derive(Clone)]
pub struct MongoBoardStore {
    inner: Arc<MongoInner>,
}

struct MongoInner {
    state: RwLock<MongoState>,
    config: MongoConfig,
}

struct MongoState {
    client: Client,
    database: Database,
}

impl MongoInner {
    async fn ping(&self) -> MongoResult<()> {
        let database = {
            let guard = self.state.read().await;
            guard.database.clone()
        };

        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|source| MongoDaoError::HealthPing { source })?;
        Ok(())
    }

    async fn reconnect(&self) -> MongoResult<()> {
        let (client, database) =
            establish_connection(&self.config.options, &self.config.database_name).await?;
        let mut guard = self.state.write().await;
        guard.client = client;
        guard.database = database;
        Ok(())
    }
}

impl MongoBoardStore {
    /// Establish a connection to MongoDB and ensure indexes are present.
    pub async fn connect(config: MongoConfig) -> MongoResult<Self> {
        let (client, database) =
            establish_connection(&config.options, &config.database_name).await?;

        let inner = Arc::new(MongoInner {
            state: RwLock::new(MongoState { client, database }),
            config,
        });

        let store = Self { inner };
        store.ensure_indexes().await?;
        Ok(store)
    }

    async fn ensure_indexes(&self) -> MongoResult<()> {
        let database = self.database().await;
        let collection = database.collection::<mongodb::bson::Document>(BOARD_COLLECTION_NAME);

        // Every list query filters on (kind, nightDate) and sorts by createdAt.
        let night_index = mongodb::IndexModel::builder()
            .keys(doc! { "kind": 1, "nightDate": 1 })
            .options(
                IndexOptions::builder()
                    .name(Some("board_kind_night_idx".to_owned()))
                    .build(),
            )
            .build();

        collection
            .create_index(night_index)
            .await
            .map_err(|source| MongoDaoError::EnsureIndex {
                collection: BOARD_COLLECTION_NAME,
                index: "kind,nightDate",
                source,
            })?;

        let recency_index = mongodb::IndexModel::builder()
            .keys(doc! { "kind": 1, "createdAt": -1 })
            .options(
                IndexOptions::builder()
                    .name(Some("board_kind_recency_idx".to_owned()))
                    .build(),
            )
            .build();

        collection
            .create_index(recency_index)
            .await
            .map_err(|source| MongoDaoError::EnsureIndex {
                collection: BOARD_COLLECTION_NAME,
                index: "kind,createdAt",
                source,
            })?;

        Ok(())
    }

    async fn database(&self) -> Database {
        let guard = self.inner.state.read().await;
        guard.database.clone()
    }

    async fn tables(&self) -> Collection<TableDocument> {
        let guard = self.inner.state.read().await;
        guard
            .database
            .collection::<TableDocument>(BOARD_COLLECTION_NAME)
    }

    async fn spare_players(&self) -> Collection<SparePlayerDocument> {
        let guard = self.inner.state.read().await;
        guard
            .database
            .collection::<SparePlayerDocument>(BOARD_COLLECTION_NAME)
    }

    async fn settings(&self) -> Collection<SettingsDocument> {
        let guard = self.inner.state.read().await;
        guard
            .database
            .collection::<SettingsDocument>(BOARD_COLLECTION_NAME)
    }

    async fn list_tables(&self, night_date: String) -> MongoResult<Vec<TableEntity>> {
        let collection = self.tables().await;

        let documents: Vec<TableDocument> = collection
            .find(doc! { "kind": TABLE_KIND, "nightDate": night_date })
            .sort(doc! { "createdAt": -1 })
            .await
            .map_err(|source| MongoDaoError::ListDocuments {
                kind: TABLE_KIND,
                source,
            })?
            .try_collect()
            .await
            .map_err(|source| MongoDaoError::ListDocuments {
                kind: TABLE_KIND,
                source,
            })?;

        documents.into_iter().map(TryInto::try_into).collect()
    }

    async fn find_table(&self, id: Uuid) -> MongoResult<Option<TableEntity>> {
        let collection = self.tables().await;

        let document = collection
            .find_one(doc_id(TABLE_KIND, id))
            .await
            .map_err(|source| MongoDaoError::LoadDocument {
                kind: TABLE_KIND,
                id,
                source,
            })?;

        document.map(TryInto::try_into).transpose()
    }

    async fn insert_table(&self, table: TableEntity) -> MongoResult<()> {
        let id = table.id;
        let document: TableDocument = table.into();
        let collection = self.tables().await;

        collection
            .insert_one(&document)
            .await
            .map_err(|source| MongoDaoError::SaveDocument {
                kind: TABLE_KIND,
                id,
                source,
            })?;

        Ok(())
    }

    async fn update_table(&self, id: Uuid, patch: TablePatch) -> MongoResult<Option<TableEntity>> {
        let collection = self.tables().await;

        let updated = collection
            .find_one_and_update(
                doc_id(TABLE_KIND, id),
                doc! { "$set": {
                    "title": patch.title,
                    "description": patch.description,
                    "weight": patch.weight,
                    "seats": patch.seats,
                }},
            )
            .return_document(ReturnDocument::After)
            .await
            .map_err(|source| MongoDaoError::UpdateDocument {
                kind: TABLE_KIND,
                id,
                source,
            })?;

        updated.map(TryInto::try_into).transpose()
    }

    async fn delete_table(&self, id: Uuid) -> MongoResult<bool> {
        let collection = self.tables().await;

        let result = collection
            .delete_one(doc_id(TABLE_KIND, id))
            .await
            .map_err(|source| MongoDaoError::DeleteDocument {
                kind: TABLE_KIND,
                id,
                source,
            })?;

        Ok(result.deleted_count > 0)
    }

    async fn push_player(
        &self,
        table_id: Uuid,
        player: PlayerEntity,
    ) -> MongoResult<Option<TableEntity>> {
        let collection = self.tables().await;

        // The name guard makes the append a no-op when someone squeezed the
        // same name in between the duplicate check and this write.
        let mut filter = doc_id(TABLE_KIND, table_id);
        filter.insert("players.name", doc! { "$ne": &player.name });

        collection
            .update_one(filter, doc! { "$push": { "players": player_bson(&player) } })
            .await
            .map_err(|source| MongoDaoError::UpdateDocument {
                kind: TABLE_KIND,
                id: table_id,
                source,
            })?;

        self.find_table(table_id).await
    }

    async fn update_player(
        &self,
        table_id: Uuid,
        player: PlayerEntity,
    ) -> MongoResult<Option<TableEntity>> {
        let collection = self.tables().await;
        let player_doc: PlayerDocument = player.into();

        let mut filter = doc_id(TABLE_KIND, table_id);
        filter.insert("players.id", &player_doc.id);

        let updated = collection
            .find_one_and_update(
                filter,
                doc! { "$set": {
                    "players.$.name": player_doc.name,
                    "players.$.isBeginner": player_doc.is_beginner,
                    "players.$.isTeacher": player_doc.is_teacher,
                }},
            )
            .return_document(ReturnDocument::After)
            .await
            .map_err(|source| MongoDaoError::UpdateDocument {
                kind: TABLE_KIND,
                id: table_id,
                source,
            })?;

        updated.map(TryInto::try_into).transpose()
    }

    async fn pull_player(
        &self,
        table_id: Uuid,
        player_id: Uuid,
    ) -> MongoResult<Option<TableEntity>> {
        let collection = self.tables().await;

        let updated = collection
            .find_one_and_update(
                doc_id(TABLE_KIND, table_id),
                doc! { "$pull": { "players": { "id": player_id.to_string() } } },
            )
            .return_document(ReturnDocument::After)
            .await
            .map_err(|source| MongoDaoError::UpdateDocument {
                kind: TABLE_KIND,
                id: table_id,
                source,
            })?;

        updated.map(TryInto::try_into).transpose()
    }

    async fn list_spare_players(&self, night_date: String) -> MongoResult<Vec<SparePlayerEntity>> {
        let collection = self.spare_players().await;

        let documents: Vec<SparePlayerDocument> = collection
            .find(doc! { "kind": SPARE_KIND, "nightDate": night_date })
            .sort(doc! { "createdAt": -1 })
            .await
            .map_err(|source| MongoDaoError::ListDocuments {
                kind: SPARE_KIND,
                source,
            })?
            .try_collect()
            .await
            .map_err(|source| MongoDaoError::ListDocuments {
                kind: SPARE_KIND,
                source,
            })?;

        documents.into_iter().map(TryInto::try_into).collect()
    }

    async fn insert_spare_player(&self, spare: SparePlayerEntity) -> MongoResult<()> {
        let id = spare.id;
        let document: SparePlayerDocument = spare.into();
        let collection = self.spare_players().await;

        collection
            .insert_one(&document)
            .await
            .map_err(|source| MongoDaoError::SaveDocument {
                kind: SPARE_KIND,
                id,
                source,
            })?;

        Ok(())
    }

    async fn delete_spare_player(&self, id: Uuid) -> MongoResult<bool> {
        let collection = self.spare_players().await;

        let result = collection
            .delete_one(doc_id(SPARE_KIND, id))
            .await
            .map_err(|source| MongoDaoError::DeleteDocument {
                kind: SPARE_KIND,
                id,
                source,
            })?;

        Ok(result.deleted_count > 0)
    }

    async fn load_settings(&self) -> MongoResult<Option<SettingsEntity>> {
        let collection = self.settings().await;

        let document = collection
            .find_one(doc! { "_id": SETTINGS_ID, "kind": SETTINGS_KIND })
            .await
            .map_err(|source| MongoDaoError::LoadSettings { source })?;

        Ok(document.map(Into::into))
    }

    async fn save_settings(&self, settings: SettingsEntity) -> MongoResult<()> {
        let document: SettingsDocument = settings.into();
        let collection = self.settings().await;

        collection
            .replace_one(doc! { "_id": SETTINGS_ID, "kind": SETTINGS_KIND }, &document)
            .upsert(true)
            .await
            .map_err(|source| MongoDaoError::SaveSettings { source })?;

        Ok(())
    }
}

impl BoardStore for MongoBoardStore {
    fn list_tables(
        &self,
        night_date: String,
    ) -> BoxFuture<'static, StorageResult<Vec<TableEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.list_tables(night_date).await.map_err(Into::into) })
    }

    fn find_table(&self, id: Uuid) -> BoxFuture<'static, StorageResult<Option<TableEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.find_table(id).await.map_err(Into::into) })
    }

    fn insert_table(&self, table: TableEntity) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.insert_table(table).await.map_err(Into::into) })
    }

    fn update_table(
        &self,
        id: Uuid,
        patch: TablePatch,
    ) -> BoxFuture<'static, StorageResult<Option<TableEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.update_table(id, patch).await.map_err(Into::into) })
    }

    fn delete_table(&self, id: Uuid) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move { store.delete_table(id).await.map_err(Into::into) })
    }

    fn push_player(
        &self,
        table_id: Uuid,
        player: PlayerEntity,
    ) -> BoxFuture<'static, StorageResult<Option<TableEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.push_player(table_id, player).await.map_err(Into::into) })
    }

    fn update_player(
        &self,
        table_id: Uuid,
        player: PlayerEntity,
    ) -> BoxFuture<'static, StorageResult<Option<TableEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .update_player(table_id, player)
                .await
                .map_err(Into::into)
        })
    }

    fn pull_player(
        &self,
        table_id: Uuid,
        player_id: Uuid,
    ) -> BoxFuture<'static, StorageResult<Option<TableEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .pull_player(table_id, player_id)
                .await
                .map_err(Into::into)
        })
    }

    fn list_spare_players(
        &self,
        night_date: String,
    ) -> BoxFuture<'static, StorageResult<Vec<SparePlayerEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .list_spare_players(night_date)
                .await
                .map_err(Into::into)
        })
    }

    fn insert_spare_player(
        &self,
        spare: SparePlayerEntity,
    ) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.insert_spare_player(spare).await.map_err(Into::into) })
    }

    fn delete_spare_player(&self, id: Uuid) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move { store.delete_spare_player(id).await.map_err(Into::into) })
    }

    fn load_settings(&self) -> BoxFuture<'static, StorageResult<Option<SettingsEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.load_settings().await.map_err(Into::into) })
    }

    fn save_settings(&self, settings: SettingsEntity) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.save_settings(settings).await.map_err(Into::into) })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.inner.ping().await.map_err(Into::into) })
    }

    fn try_reconnect(&self) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.inner.reconnect().await.map_err(Into::into) })
    }
}
