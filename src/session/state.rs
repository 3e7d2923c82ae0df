//! Live session state.
//!
//! A [`GameSession`] is the in-memory state of one play-through: scores,
//! the selected hand, and where the lifecycle currently sits. It is never
//! persisted; every session starts fresh and only statistics/settings
//! outlive it.

use serde::{Deserialize, Serialize};

use crate::core::Hand;

/// Victory banner when the player reaches the winning score.
pub const PLAYER_WINS_MESSAGE: &str = "PLAYER WINS THE GAME!";

/// Victory banner when the opponent reaches the winning score.
pub const CPU_WINS_MESSAGE: &str = "CPU WINS THE GAME!";

/// Where the session lifecycle currently sits.
///
/// ```text
/// Idle --start_round--> Resolving --complete_round--> Idle | GameOver
/// GameOver --reset_session--> Idle
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// No round in flight, no winner declared. Input is accepted.
    #[default]
    Idle,
    /// A round has started; its outcome is pending the handshake delay.
    Resolving,
    /// A side reached the winning score. Terminal until reset.
    GameOver,
}

/// Mutable state of the current play session.
///
/// Owned and mutated exclusively by the lifecycle engine; UIs read it
/// each render via [`crate::session::GameEngine::session`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    /// Player's score this session.
    pub player_score: u32,

    /// Opponent's score this session.
    pub opponent_score: u32,

    /// Hand the player will throw next round.
    pub player_hand: Hand,

    /// Cursor position into [`Hand::ALL`], kept in sync with `player_hand`.
    pub selected_index: usize,

    /// Opponent's hand from the last resolved round, if any.
    pub opponent_hand: Option<Hand>,

    /// Outcome text of the last resolved round, empty before the first.
    pub last_result: String,

    /// Victory banner; non-empty exactly when `phase` is `GameOver`.
    pub winner_message: String,

    /// Lifecycle phase.
    pub phase: SessionPhase,

    /// Bumped on every reset; stale round tickets are detected by
    /// comparing against this.
    generation: u64,
}

impl Default for GameSession {
    fn default() -> Self {
        Self {
            player_score: 0,
            opponent_score: 0,
            player_hand: Hand::Rock,
            selected_index: 0,
            opponent_hand: None,
            last_result: String::new(),
            winner_message: String::new(),
            phase: SessionPhase::Idle,
            generation: 0,
        }
    }
}

impl GameSession {
    /// Create a fresh session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether player input (hand selection, round start) is accepted.
    ///
    /// False while a round is resolving or after a winner was declared.
    #[must_use]
    pub fn accepts_input(&self) -> bool {
        self.phase == SessionPhase::Idle
    }

    /// Whether a winner has been declared.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == SessionPhase::GameOver
    }

    /// Current reset generation, captured into round tickets.
    #[must_use]
    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    /// Reinitialize for a new session, invalidating any pending round.
    ///
    /// The generation survives the wipe so a timer started before the
    /// reset can be recognized as stale when it fires.
    pub(crate) fn reset(&mut self) {
        let generation = self.generation + 1;
        *self = Self::default();
        self.generation = generation;
    }
}
