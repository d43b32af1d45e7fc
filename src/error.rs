//! Error taxonomy of the reward workflow and its HTTP mapping.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Anything that went wrong talking to (or through) the rating store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("redis error: {0}")]
    Backend(#[from] redis::RedisError),

    #[error("cannot decode stored rating of {user_id}: {source}")]
    Decode {
        user_id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot encode rating of {user_id}: {source}")]
    Encode {
        user_id: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum RewardError {
    /// Every violated rule, in field order.
    #[error("invalid request: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("malformed request body: {0}")]
    MalformedBody(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("reward workflow exceeded its deadline")]
    Timeout,
}

impl ResponseError for RewardError {
    fn status_code(&self) -> StatusCode {
        match self {
            RewardError::Validation(_) => StatusCode::BAD_REQUEST,
            RewardError::MalformedBody(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            RewardError::Store(_) | RewardError::Timeout => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Store details stay in the logs.
        let body = match self {
            RewardError::Validation(errs) => json!({ "message": errs }),
            RewardError::MalformedBody(_) => json!({ "message": "Unsupported Media Type" }),
            RewardError::Store(_) | RewardError::Timeout => {
                json!({ "message": "Internal Server Error" })
            }
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
