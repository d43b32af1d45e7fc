//! Unit tests for the fixed-increment rating rule.

use battle_reward_server::battle::{
    scoring::{compute_update, rating_delta},
    types::{Outcome, UserRating},
};

fn pair(r1: i64, r2: i64) -> [UserRating; 2] {
    [UserRating::new("user_1", r1), UserRating::new("user_2", r2)]
}

fn ratings(out: &[UserRating; 2]) -> (i64, i64) {
    (out[0].rating, out[1].rating)
}

#[test]
fn draw_gives_both_sides_five() {
    let out = compute_update(&pair(1000, 1000), Outcome::Draw.index());
    assert_eq!(ratings(&out), (1005, 1005));
}

#[test]
fn first_team_win_moves_ten_points() {
    let out = compute_update(&pair(1000, 1000), Outcome::FirstTeamWins.index());
    assert_eq!(ratings(&out), (1010, 990));
}

#[test]
fn second_team_win_moves_ten_points() {
    let out = compute_update(&pair(1000, 1000), Outcome::SecondTeamWins.index());
    assert_eq!(ratings(&out), (990, 1010));
}

#[test]
fn unknown_winner_index_is_a_no_op() {
    let out = compute_update(&pair(1000, 1200), 7);
    assert_eq!(ratings(&out), (1000, 1200));
    assert_eq!(rating_delta(u8::MAX), (0, 0));
}

#[test]
fn input_is_not_mutated_and_output_is_deterministic() {
    let current = pair(1000, 1000);
    let snapshot = current.clone();

    let a = compute_update(&current, 1);
    let b = compute_update(&current, 1);

    assert_eq!(current, snapshot);
    assert_eq!(a, b);
    assert_eq!(a[0].user_id, "user_1");
    assert_eq!(a[1].user_id, "user_2");
}

#[test]
fn ratings_may_go_negative() {
    let out = compute_update(&pair(5, 0), Outcome::FirstTeamWins.index());
    assert_eq!(ratings(&out), (15, -10));
}

#[test]
fn ratings_beyond_32_bits_are_plain_integers() {
    let out = compute_update(
        &pair(i32::MAX as i64, 3_000_000_000),
        Outcome::FirstTeamWins.index(),
    );
    assert_eq!(ratings(&out), (i32::MAX as i64 + 10, 2_999_999_990));
}

#[test]
fn top_of_range_wraps_instead_of_panicking() {
    let out = compute_update(&pair(i64::MAX - 4, 0), Outcome::FirstTeamWins.index());
    assert_eq!(out[0].rating, (i64::MAX - 4).wrapping_add(10));
    assert_eq!(out[1].rating, -10);
}
