//! Per-user rating records in Redis.
//
//  Redis keys
//  ----------
//  user-elo   – HASH  field = <user_id>, value = {"userID": .., "elo": ..} (JSON)

use async_trait::async_trait;
use redis::{AsyncCommands, AsyncConnectionConfig, Client as RedisClient};
use serde::Deserialize;

use crate::{battle::types::UserRating, error::StoreError};

/// Hash holding every user's rating.
pub const USER_RATING_KEY: &str = "user-elo";

/// What the reward workflow needs from a rating backend.
#[async_trait]
pub trait RatingStore: Send + Sync {
    /// Current rating of `user_id`; a user without a record gets the default
    /// rating instead of an error.
    async fn get_rating(&self, user_id: &str) -> Result<UserRating, StoreError>;

    /// Writes every rating in one atomic step. Nothing is written if any
    /// record fails to encode.
    async fn batch_update(&self, ratings: &[UserRating]) -> Result<(), StoreError>;
}

/// Encode all records up front so a bad one aborts the batch before any
/// write is issued.
pub(crate) fn encode_all(ratings: &[UserRating]) -> Result<Vec<(String, String)>, StoreError> {
    ratings
        .iter()
        .map(|r| {
            serde_json::to_string(r)
                .map(|json| (r.user_id.clone(), json))
                .map_err(|source| StoreError::Encode {
                    user_id: r.user_id.clone(),
                    source,
                })
        })
        .collect()
}

/// Stored payload; fields missing from it fall back to the defaults.
#[derive(Deserialize)]
struct StoredRating {
    #[serde(rename = "userID")]
    user_id: Option<String>,
    elo: Option<i64>,
}

/// Missing hash field -> default rating, malformed payload -> `Decode`.
pub(crate) fn decode(user_id: &str, raw: Option<String>) -> Result<UserRating, StoreError> {
    let mut rating = UserRating::with_default(user_id);
    if let Some(json) = raw {
        let stored: StoredRating =
            serde_json::from_str(&json).map_err(|source| StoreError::Decode {
                user_id: user_id.to_string(),
                source,
            })?;
        if let Some(id) = stored.user_id {
            rating.user_id = id;
        }
        if let Some(elo) = stored.elo {
            rating.rating = elo;
        }
    }
    Ok(rating)
}

pub struct RedisRatingStore {
    client: RedisClient,
    conn_config: AsyncConnectionConfig,
}

impl RedisRatingStore {
    pub fn new(client: RedisClient, conn_config: AsyncConnectionConfig) -> Self {
        Self {
            client,
            conn_config,
        }
    }

    async fn conn(&self) -> Result<redis::aio::MultiplexedConnection, StoreError> {
        Ok(self
            .client
            .get_multiplexed_async_connection_with_config(&self.conn_config)
            .await?)
    }
}

#[async_trait]
impl RatingStore for RedisRatingStore {
    async fn get_rating(&self, user_id: &str) -> Result<UserRating, StoreError> {
        let mut conn = self.conn().await?;
        let raw: Option<String> = conn.hget(USER_RATING_KEY, user_id).await?;
        decode(user_id, raw)
    }

    async fn batch_update(&self, ratings: &[UserRating]) -> Result<(), StoreError> {
        let encoded = encode_all(ratings)?;

        // MULTI/EXEC so readers never see half a battle applied.
        let mut pipe = redis::pipe();
        pipe.atomic();
        for (user_id, json) in &encoded {
            pipe.hset(USER_RATING_KEY, user_id, json).ignore();
        }

        let mut conn = self.conn().await?;
        let _: () = pipe.query_async(&mut conn).await?;
        Ok(())
    }
}
