//! Redis-backed document store.
//!
//! Layout:
//! - `offradar:doc:{id}`  → JSON document (wire-form blocks)
//! - `offradar:docs`      → sorted set of ids scored by creation time (ms)

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use uuid::Uuid;

use crate::documents::{Document, DocumentStore, StoreError};

const INDEX_KEY: &str = "offradar:docs";

fn doc_key(id: Uuid) -> String {
    format!("offradar:doc:{id}")
}

#[derive(Clone)]
pub struct RedisDocumentStore {
    client: redis::Client,
}

impl RedisDocumentStore {
    pub fn open(redis_url: &str) -> Result<Self, StoreError> {
        Ok(Self {
            client: redis::Client::open(redis_url)?,
        })
    }

    async fn connection(&self) -> Result<MultiplexedConnection, StoreError> {
        Ok(self.client.get_multiplexed_async_connection().await?)
    }
}

#[async_trait]
impl DocumentStore for RedisDocumentStore {
    async fn put(&self, document: &Document) -> Result<(), StoreError> {
        let json = serde_json::to_string(document)?;
        let mut con = self.connection().await?;

        redis::pipe()
            .atomic()
            .set(doc_key(document.id), json)
            .ignore()
            .zadd(
                INDEX_KEY,
                document.id.to_string(),
                document.created_at.timestamp_millis(),
            )
            .ignore()
            .query_async::<_, ()>(&mut con)
            .await?;
        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Document>, StoreError> {
        let mut con = self.connection().await?;
        let raw: Option<String> = con.get(doc_key(id)).await?;
        Ok(raw.map(|r| serde_json::from_str(&r)).transpose()?)
    }

    async fn list_recent(&self, limit: usize) -> Result<Vec<Document>, StoreError> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        let mut con = self.connection().await?;

        let ids: Vec<String> = con.zrevrange(INDEX_KEY, 0, limit as isize - 1).await?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let keys: Vec<String> = ids.iter().map(|id| format!("offradar:doc:{id}")).collect();
        let raws: Vec<Option<String>> = con.mget(&keys).await?;

        // Index entries whose document was evicted are skipped
        let mut documents = Vec::with_capacity(raws.len());
        for raw in raws.into_iter().flatten() {
            documents.push(serde_json::from_str(&raw)?);
        }
        Ok(documents)
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}
