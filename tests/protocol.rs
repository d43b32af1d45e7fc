//! Request validation and winner resolution.

use battle_reward_server::{
    battle::types::{Outcome, Team},
    protocol::{RewardRequest, RewardResponse},
};

fn team(id: &str, owner: &str) -> Team {
    Team {
        id: id.into(),
        owner: owner.into(),
    }
}

fn battle(winner: &str) -> RewardRequest {
    RewardRequest {
        winner: winner.into(),
        teams: Some(vec![team("team_1", "user_1"), team("team_2", "user_2")]),
    }
}

#[test]
fn empty_request_reports_every_violation() {
    let req: RewardRequest = serde_json::from_str("{}").unwrap();
    assert_eq!(
        req.validate().unwrap_err(),
        vec!["winner is required", "teams is required"]
    );
}

#[test]
fn single_team_is_rejected() {
    let req = RewardRequest {
        winner: "user_1".into(),
        teams: Some(vec![team("team_1", "user_1")]),
    };
    assert_eq!(req.validate().unwrap_err(), vec!["teams must be equals to 2"]);
}

#[test]
fn empty_team_list_fails_count_not_presence() {
    let req: RewardRequest = serde_json::from_str(r#"{"winner":"a","teams":[]}"#).unwrap();
    assert_eq!(req.validate().unwrap_err(), vec!["teams must be equals to 2"]);
}

#[test]
fn null_teams_counts_as_missing() {
    let req: RewardRequest = serde_json::from_str(r#"{"winner":"","teams":null}"#).unwrap();
    assert_eq!(
        req.validate().unwrap_err(),
        vec!["winner is required", "teams is required"]
    );
}

#[test]
fn null_winner_counts_as_missing() {
    let req: RewardRequest = serde_json::from_str(
        r#"{"winner":null,"teams":[{"id":"t1","owner":"u1"},{"id":"t2","owner":"u2"}]}"#,
    )
    .unwrap();
    assert_eq!(req.validate().unwrap_err(), vec!["winner is required"]);
}

#[test]
fn well_formed_request_passes() {
    assert!(battle("user_1").validate().is_ok());
}

#[test]
fn winner_resolution_follows_team_order() {
    assert_eq!(battle("user_1").resolve_winner(), Outcome::FirstTeamWins);
    assert_eq!(battle("user_2").resolve_winner(), Outcome::SecondTeamWins);
    assert_eq!(battle("draw").resolve_winner(), Outcome::Draw);
    assert_eq!(battle("someone_else").resolve_winner(), Outcome::Draw);
}

#[test]
fn shared_owner_resolves_to_first_team() {
    let req = RewardRequest {
        winner: "user_1".into(),
        teams: Some(vec![team("team_1", "user_1"), team("team_2", "user_1")]),
    };
    assert_eq!(req.resolve_winner(), Outcome::FirstTeamWins);
}

#[test]
fn wire_names_match_the_public_api() {
    let req: RewardRequest = serde_json::from_str(
        r#"{"winner":"u1","teams":[{"id":"t1","owner":"u1"},{"id":"t2","owner":"u2"}]}"#,
    )
    .unwrap();
    assert_eq!(req.teams()[1], team("t2", "u2"));

    let res: RewardResponse = serde_json::from_str(
        r#"{"rewards":[{"userID":"u1","oldElo":1000,"newElo":1010,"updatedAt":42}]}"#,
    )
    .unwrap();
    assert_eq!(res.rewards[0].new_rating, 1010);
    assert_eq!(res.rewards[0].updated_at, 42);
}
