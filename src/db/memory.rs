//! Process-local rating store for tests and Redis-less local runs.
//! Values are kept as the same JSON Redis would hold.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    battle::types::UserRating,
    db::rating_repo::{decode, encode_all, RatingStore},
    error::StoreError,
};

#[derive(Debug, Default)]
pub struct InMemoryRatingStore {
    ratings: RwLock<HashMap<String, String>>,
}

impl InMemoryRatingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a raw payload as-is, bypassing encoding.
    pub async fn insert_raw(&self, user_id: impl Into<String>, json: impl Into<String>) {
        self.ratings.write().await.insert(user_id.into(), json.into());
    }

    pub async fn raw(&self, user_id: &str) -> Option<String> {
        self.ratings.read().await.get(user_id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.ratings.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.ratings.read().await.is_empty()
    }
}

#[async_trait]
impl RatingStore for InMemoryRatingStore {
    async fn get_rating(&self, user_id: &str) -> Result<UserRating, StoreError> {
        let raw = self.raw(user_id).await;
        decode(user_id, raw)
    }

    async fn batch_update(&self, ratings: &[UserRating]) -> Result<(), StoreError> {
        let encoded = encode_all(ratings)?;

        // One write guard for the whole batch.
        let mut map = self.ratings.write().await;
        map.extend(encoded);
        Ok(())
    }
}
