//! Battle reward service: adjusts and persists per-user Elo ratings after a
//! two-team battle.

pub mod battle;
pub mod cache;
pub mod config;
pub mod db;
pub mod error;
pub mod http;
pub mod metrics;
pub mod protocol;
