pub mod memory;
pub mod rating_repo;

pub use memory::InMemoryRatingStore;
pub use rating_repo::{RatingStore, RedisRatingStore, USER_RATING_KEY};
