// Document Store: persists generated reality-check documents keyed by id.
// The engine never touches this module; handlers store what the engine returns.

pub mod handlers;
pub mod memory;
pub mod models;
pub mod redis_store;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

pub use memory::InMemoryDocumentStore;
pub use models::Document;
pub use redis_store::RedisDocumentStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Key-value persistence for documents.
///
/// Carried in `AppState` as `Arc<dyn DocumentStore>`; the backend is picked at startup
/// (Redis when `REDIS_URL` is set, in-memory otherwise).
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn put(&self, document: &Document) -> Result<(), StoreError>;

    async fn get(&self, id: Uuid) -> Result<Option<Document>, StoreError>;

    /// Most recently created documents first.
    async fn list_recent(&self, limit: usize) -> Result<Vec<Document>, StoreError>;

    /// Backend label for logs and the health endpoint.
    fn backend(&self) -> &'static str;
}
