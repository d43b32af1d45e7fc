//! Fixed-increment Elo rule (no K-factor, no expected score).

use crate::battle::types::UserRating;

/// Points both sides gain on a draw.
pub const DRAW_BONUS: i64 = 5;
/// Points moved from loser to winner.
pub const WIN_SWING: i64 = 10;

/// Returns (delta_p1, delta_p2) for a winner index.
/// `winner` = 0 -> draw, 1 -> p1, 2 -> p2; anything else leaves both unchanged.
pub fn rating_delta(winner: u8) -> (i64, i64) {
    match winner {
        0 => (DRAW_BONUS, DRAW_BONUS),
        1 => (WIN_SWING, -WIN_SWING),
        2 => (-WIN_SWING, WIN_SWING),
        _ => (0, 0),
    }
}

/// Fresh ratings for both participants; `current` is left untouched so the
/// caller can still report the pre-battle values.
pub fn compute_update(current: &[UserRating; 2], winner: u8) -> [UserRating; 2] {
    let (d1, d2) = rating_delta(winner);
    [current[0].with_delta(d1), current[1].with_delta(d2)]
}
