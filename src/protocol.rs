//! Wire contract of `POST /v1/battle/{battle_id}/reward`.

use crate::battle::types::{Outcome, Team};
use serde::{Deserialize, Deserializer, Serialize};

/// Number of teams a battle must have.
pub const TEAMS_PER_BATTLE: usize = 2;

// ---------- client -> server ----------
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct RewardRequest {
    /// Owner of the winning team; any other non-empty value counts as a draw.
    /// Absent and null both read as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub winner: String,
    /// `None` when the field is absent or null.
    #[serde(default)]
    pub teams: Option<Vec<Team>>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(de)?.unwrap_or_default())
}

impl RewardRequest {
    /// Collects every violated rule instead of stopping at the first one.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errs = Vec::new();

        if self.winner.is_empty() {
            errs.push("winner is required".to_string());
        }

        match &self.teams {
            None => errs.push("teams is required".to_string()),
            Some(teams) if teams.len() != TEAMS_PER_BATTLE => {
                errs.push(format!("teams must be equals to {TEAMS_PER_BATTLE}"))
            }
            Some(_) => {}
        }

        if errs.is_empty() {
            Ok(())
        } else {
            Err(errs)
        }
    }

    /// Teams in request order; empty when absent.
    pub fn teams(&self) -> &[Team] {
        self.teams.as_deref().unwrap_or_default()
    }

    /// First team is checked before the second, so a winner matching both
    /// owners resolves to `FirstTeamWins`. No match is a draw.
    pub fn resolve_winner(&self) -> Outcome {
        let teams = self.teams();
        if teams.first().is_some_and(|t| t.owner == self.winner) {
            Outcome::FirstTeamWins
        } else if teams.get(1).is_some_and(|t| t.owner == self.winner) {
            Outcome::SecondTeamWins
        } else {
            Outcome::Draw
        }
    }
}

// ---------- server -> client ----------
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RewardItem {
    #[serde(rename = "userID")]
    pub user_id: String,
    #[serde(rename = "oldElo")]
    pub old_rating: i64,
    #[serde(rename = "newElo")]
    pub new_rating: i64,
    /// Unix seconds, shared by every item of one response.
    #[serde(rename = "updatedAt")]
    pub updated_at: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RewardResponse {
    pub rewards: Vec<RewardItem>,
}
