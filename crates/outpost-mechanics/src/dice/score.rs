//! Success scoring.
//!
//! Each die is weighted by face: a 6 is a critical worth two successes, a
//! 4 or 5 is worth one, a 1 is a fumble that cancels one, and a 2 or 3 is
//! worth nothing. The total is signed and can go below zero.

use super::DicePool;

/// Face that scores two successes.
pub const CRIT: u8 = 6;
/// Lowest face that scores a success.
pub const SUCCESS_THRESHOLD: u8 = 4;
/// Face that cancels a success.
pub const FUMBLE: u8 = 1;

/// Successes contributed by a single face.
pub fn face_weight(face: u8) -> i32 {
    match face {
        CRIT => 2,
        f if f >= SUCCESS_THRESHOLD => 1,
        FUMBLE => -1,
        _ => 0,
    }
}

/// Signed success score of a pool.
pub fn score_successes(pool: &DicePool) -> i32 {
    pool.values().iter().map(|&d| face_weight(d)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(values: &[u8]) -> i32 {
        score_successes(&DicePool::from_values(values.iter().copied()))
    }

    #[test]
    fn all_crits() {
        assert_eq!(score(&[6, 6, 6]), 6);
    }

    #[test]
    fn all_fumbles_go_negative() {
        assert_eq!(score(&[1, 1, 1]), -3);
    }

    #[test]
    fn mixed_faces() {
        assert_eq!(score(&[4, 5, 6]), 4);
        assert_eq!(score(&[2, 3]), 0);
        assert_eq!(score(&[1, 6, 3]), 1);
    }

    #[test]
    fn empty_pool_scores_zero() {
        assert_eq!(score(&[]), 0);
    }
}
