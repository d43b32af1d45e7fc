use serde::{Deserialize, Serialize};

/// Rating handed out the first time a user shows up.
pub const DEFAULT_RATING: i64 = 1000;

/// One side of a battle. `owner` is the rating-store key.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Team {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub owner: String,
}

/// Persisted rating of one user (`user-elo` hash value).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct UserRating {
    #[serde(rename = "userID")]
    pub user_id: String,
    #[serde(rename = "elo")]
    pub rating: i64,
}

impl UserRating {
    pub fn new(user_id: impl Into<String>, rating: i64) -> Self {
        Self {
            user_id: user_id.into(),
            rating,
        }
    }

    /// Record for a user that has never been rated.
    pub fn with_default(user_id: impl Into<String>) -> Self {
        Self::new(user_id, DEFAULT_RATING)
    }

    /// New record for the same user, rating shifted by `delta`. No clamping;
    /// overflow wraps instead of panicking.
    pub fn with_delta(&self, delta: i64) -> Self {
        Self {
            user_id: self.user_id.clone(),
            rating: self.rating.wrapping_add(delta),
        }
    }
}

/// Battle result relative to the two teams, in request order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Draw,
    FirstTeamWins,
    SecondTeamWins,
}

impl Outcome {
    /// Winner index: 0 -> draw, 1 -> first team, 2 -> second team.
    pub fn index(self) -> u8 {
        match self {
            Outcome::Draw => 0,
            Outcome::FirstTeamWins => 1,
            Outcome::SecondTeamWins => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Draw => "draw",
            Outcome::FirstTeamWins => "first_team_wins",
            Outcome::SecondTeamWins => "second_team_wins",
        }
    }
}
