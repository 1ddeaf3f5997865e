use thiserror::Error;
use uuid::Uuid;

/// Result alias for the MongoDB backend.
pub type MongoResult<T> = Result<T, MongoDaoError>;

/// Failures specific to the MongoDB board store.
#[derive(Debug, Error)]
pub enum MongoDaoError {
    #[error("invalid MongoDB connection string `{uri}`")]
    InvalidUri {
        uri: String,
        #[source]
        source: mongodb::error::Error,
    },
    #[error("failed to construct MongoDB client")]
    ClientConstruction {
        #[source]
        source: mongodb::error::Error,
    },
    #[error("MongoDB did not answer the initial ping after {attempts} attempts")]
    InitialPing {
        attempts: u32,
        #[source]
        source: mongodb::error::Error,
    },
    #[error("MongoDB health ping failed")]
    HealthPing {
        #[source]
        source: mongodb::error::Error,
    },
    #[error("failed to ensure index `{index}` on `{collection}`")]
    EnsureIndex {
        collection: &'static str,
        index: &'static str,
        #[source]
        source: mongodb::error::Error,
    },
    #[error("failed to list `{kind}` documents")]
    ListDocuments {
        kind: &'static str,
        #[source]
        source: mongodb::error::Error,
    },
    #[error("failed to load `{kind}` document {id}")]
    LoadDocument {
        kind: &'static str,
        id: Uuid,
        #[source]
        source: mongodb::error::Error,
    },
    #[error("failed to persist `{kind}` document {id}")]
    SaveDocument {
        kind: &'static str,
        id: Uuid,
        #[source]
        source: mongodb::error::Error,
    },
    #[error("failed to update `{kind}` document {id}")]
    UpdateDocument {
        kind: &'static str,
        id: Uuid,
        #[source]
        source: mongodb::error::Error,
    },
    #[error("failed to delete `{kind}` document {id}")]
    DeleteDocument {
        kind: &'static str,
        id: Uuid,
        #[source]
        source: mongodb::error::Error,
    },
    #[error("failed to load board settings")]
    LoadSettings {
        #[source]
        source: mongodb::error::Error,
    },
    #[error("failed to persist board settings")]
    SaveSettings {
        #[source]
        source: mongodb::error::Error,
    },
    #[error("document `{id}` carries a malformed identifier")]
    MalformedDocumentId {
        id: String,
        #[source]
        source: uuid::Error,
    },
}
