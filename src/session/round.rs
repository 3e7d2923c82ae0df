//! Round tickets and reports.
//!
//! The engine never sleeps. `start_round` hands the host a [`RoundTicket`]
//! carrying the handshake delay as data; the host's event loop realizes
//! the timer however it likes (a UI timeout, an async sleep, or nothing at
//! all in tests) and then passes the ticket back to `complete_round`.
//!
//! The ticket also carries the session generation it was issued under, so
//! a resolution that fires after a reset is recognized as stale and
//! discarded instead of mutating the fresh session.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::core::{Hand, RoundOutcome};

/// Claim on a started round, redeemable once after the handshake delay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundTicket {
    generation: u64,
    delay: Duration,
}

impl RoundTicket {
    pub(crate) fn new(generation: u64, delay: Duration) -> Self {
        Self { generation, delay }
    }

    /// Session generation this ticket was issued under.
    #[must_use]
    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    /// How long the host should wait before completing the round.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// Everything that happened in one completed round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    /// Hand the player threw.
    pub player_hand: Hand,

    /// Hand the opponent drew.
    pub opponent_hand: Hand,

    /// Who took the round.
    pub outcome: RoundOutcome,

    /// Player score after this round.
    pub player_score: u32,

    /// Opponent score after this round.
    pub opponent_score: u32,

    /// Whether this round decided the session.
    pub game_over: bool,
}
