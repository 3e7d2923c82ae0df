//! Lifetime statistics, accumulated across sessions.
//!
//! Statistics are persisted with the settings and survive session resets;
//! only [`GameStatistics::clear`] zeroes them. Scores are *not* tracked
//! here — they belong to the live session.
//!
//! ## Invariants
//!
//! - `total_rounds == wins + losses + ties`
//! - `longest_streak >= win_streak`
//! - `favorite_hand` holds the maximum usage count, ties broken by the
//!   first hand in Rock, Paper, Scissors order

use serde::{Deserialize, Serialize};

use crate::core::{Hand, HandMap, RoundOutcome};

/// Accumulated round statistics.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatistics {
    /// Rounds completed, across all sessions.
    pub total_rounds: u32,

    /// Rounds the player won.
    pub wins: u32,

    /// Rounds the opponent won.
    pub losses: u32,

    /// Rounds that tied.
    pub ties: u32,

    /// Player wins since the last non-win.
    pub win_streak: u32,

    /// Longest win streak ever reached.
    pub longest_streak: u32,

    /// How often the player has thrown each hand.
    pub hand_usage: HandMap<u32>,

    /// Most-thrown hand so far.
    pub favorite_hand: Hand,
}

impl Default for GameStatistics {
    fn default() -> Self {
        Self {
            total_rounds: 0,
            wins: 0,
            losses: 0,
            ties: 0,
            win_streak: 0,
            longest_streak: 0,
            hand_usage: HandMap::default(),
            favorite_hand: Hand::Rock,
        }
    }
}

impl GameStatistics {
    /// Create empty statistics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed round.
    ///
    /// Called exactly once per round, after the outcome is known.
    /// Ties and losses both break the win streak.
    pub fn record_round(&mut self, player_hand: Hand, outcome: RoundOutcome) {
        self.total_rounds += 1;
        self.hand_usage[player_hand] += 1;
        self.favorite_hand = self.compute_favorite();

        match outcome {
            RoundOutcome::Player => {
                self.wins += 1;
                self.win_streak += 1;
                self.longest_streak = self.longest_streak.max(self.win_streak);
            }
            RoundOutcome::Opponent => {
                self.losses += 1;
                self.win_streak = 0;
            }
            RoundOutcome::Tie => {
                self.ties += 1;
                self.win_streak = 0;
            }
        }
    }

    /// Zero everything back to a fresh state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Fraction of rounds won, 0.0 when no rounds have been played.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_rounds == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.total_rounds)
        }
    }

    /// Hand with the maximum usage count; earlier hands win ties.
    fn compute_favorite(&self) -> Hand {
        let mut favorite = Hand::Rock;
        let mut best = 0;

        for (hand, &count) in self.hand_usage.iter() {
            if count > best {
                favorite = hand;
                best = count;
            }
        }

        favorite
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let stats = GameStatistics::new();
        assert_eq!(stats.total_rounds, 0);
        assert_eq!(stats.favorite_hand, Hand::Rock);
        assert_eq!(stats.win_rate(), 0.0);
    }

    #[test]
    fn test_record_win() {
        let mut stats = GameStatistics::new();
        stats.record_round(Hand::Paper, RoundOutcome::Player);

        assert_eq!(stats.total_rounds, 1);
        assert_eq!(stats.wins, 1);
        assert_eq!(stats.losses, 0);
        assert_eq!(stats.ties, 0);
        assert_eq!(stats.win_streak, 1);
        assert_eq!(stats.longest_streak, 1);
        assert_eq!(stats.hand_usage[Hand::Paper], 1);
    }

    #[test]
    fn test_exactly_one_bucket_per_round() {
        let mut stats = GameStatistics::new();
        stats.record_round(Hand::Rock, RoundOutcome::Opponent);
        stats.record_round(Hand::Rock, RoundOutcome::Tie);
        stats.record_round(Hand::Rock, RoundOutcome::Player);

        assert_eq!(stats.total_rounds, 3);
        assert_eq!(stats.wins + stats.losses + stats.ties, 3);
        assert_eq!(stats.wins, 1);
        assert_eq!(stats.losses, 1);
        assert_eq!(stats.ties, 1);
    }

    #[test]
    fn test_streak_tracking() {
        let mut stats = GameStatistics::new();

        for _ in 0..4 {
            stats.record_round(Hand::Rock, RoundOutcome::Player);
        }
        assert_eq!(stats.win_streak, 4);
        assert_eq!(stats.longest_streak, 4);

        // Loss breaks the streak without touching the record.
        stats.record_round(Hand::Rock, RoundOutcome::Opponent);
        assert_eq!(stats.win_streak, 0);
        assert_eq!(stats.longest_streak, 4);

        // A shorter new streak leaves the record alone.
        stats.record_round(Hand::Rock, RoundOutcome::Player);
        stats.record_round(Hand::Rock, RoundOutcome::Player);
        assert_eq!(stats.win_streak, 2);
        assert_eq!(stats.longest_streak, 4);
    }

    #[test]
    fn test_tie_breaks_streak() {
        let mut stats = GameStatistics::new();
        stats.record_round(Hand::Rock, RoundOutcome::Player);
        stats.record_round(Hand::Rock, RoundOutcome::Tie);

        assert_eq!(stats.win_streak, 0);
        assert_eq!(stats.longest_streak, 1);
    }

    #[test]
    fn test_favorite_hand() {
        let mut stats = GameStatistics::new();
        stats.record_round(Hand::Scissors, RoundOutcome::Tie);
        assert_eq!(stats.favorite_hand, Hand::Scissors);

        stats.record_round(Hand::Paper, RoundOutcome::Tie);
        stats.record_round(Hand::Paper, RoundOutcome::Tie);
        assert_eq!(stats.favorite_hand, Hand::Paper);
    }

    #[test]
    fn test_favorite_hand_tie_break() {
        let mut stats = GameStatistics::new();
        stats.record_round(Hand::Scissors, RoundOutcome::Tie);
        stats.record_round(Hand::Rock, RoundOutcome::Tie);

        // Equal usage: Rock comes first in the canonical ordering.
        assert_eq!(stats.favorite_hand, Hand::Rock);
    }

    #[test]
    fn test_clear() {
        let mut stats = GameStatistics::new();
        stats.record_round(Hand::Rock, RoundOutcome::Player);
        stats.record_round(Hand::Paper, RoundOutcome::Opponent);

        stats.clear();

        assert_eq!(stats, GameStatistics::default());
    }

    #[test]
    fn test_win_rate() {
        let mut stats = GameStatistics::new();
        stats.record_round(Hand::Rock, RoundOutcome::Player);
        stats.record_round(Hand::Rock, RoundOutcome::Opponent);
        stats.record_round(Hand::Rock, RoundOutcome::Player);
        stats.record_round(Hand::Rock, RoundOutcome::Tie);

        assert_eq!(stats.win_rate(), 0.5);
    }

    #[test]
    fn test_stats_serde() {
        let mut stats = GameStatistics::new();
        stats.record_round(Hand::Paper, RoundOutcome::Player);

        let json = serde_json::to_string(&stats).unwrap();
        let back: GameStatistics = serde_json::from_str(&json).unwrap();

        assert_eq!(stats, back);
    }
}
