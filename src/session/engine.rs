//! The lifecycle engine: single owner of session, settings, and statistics.
//!
//! ## Ownership
//!
//! `GameEngine` is an explicitly-constructed instance the host passes
//! around by reference; there is no ambient singleton. All three state
//! structures are mutated only through its methods, which keeps
//! single-writer semantics without locking: a host using real parallelism
//! must route every call through the one task that owns the engine.
//!
//! ## Round flow
//!
//! ```
//! use rps_engine::core::Hand;
//! use rps_engine::session::GameEngine;
//!
//! let mut engine = GameEngine::new(42);
//! engine.select_hand(Hand::Paper);
//!
//! let ticket = engine.start_round().unwrap();
//! // ... host waits ticket.delay(), then:
//! let report = engine.complete_round(ticket).unwrap();
//! assert_eq!(report.player_hand, Hand::Paper);
//! ```

use log::{debug, warn};

use crate::core::{resolve, GameSettings, Hand, HandSource, RandomHandSource, RoundOutcome, SettingsPatch};
use crate::persist::SavedProfile;
use crate::stats::GameStatistics;

use super::round::{RoundReport, RoundTicket};
use super::state::{GameSession, SessionPhase, CPU_WINS_MESSAGE, PLAYER_WINS_MESSAGE};

/// Game engine owning all rules, bookkeeping, and lifecycle state.
///
/// Generic over the opponent [`HandSource`] so tests can script draws;
/// production hosts use the default uniform-random source.
#[derive(Clone, Debug)]
pub struct GameEngine<H: HandSource = RandomHandSource> {
    session: GameSession,
    settings: GameSettings,
    stats: GameStatistics,
    hands: H,
}

impl GameEngine<RandomHandSource> {
    /// Create an engine with default settings and empty statistics.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_hand_source(RandomHandSource::new(seed))
    }

    /// Create an engine seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::with_hand_source(RandomHandSource::from_entropy())
    }

    /// Create an engine seeded from a previously saved profile.
    ///
    /// The session always starts fresh; only statistics and settings
    /// carry over.
    #[must_use]
    pub fn with_profile(profile: SavedProfile, seed: u64) -> Self {
        Self {
            session: GameSession::new(),
            settings: profile.settings,
            stats: profile.stats,
            hands: RandomHandSource::new(seed),
        }
    }
}

impl<H: HandSource> GameEngine<H> {
    /// Create an engine with a custom opponent hand source.
    #[must_use]
    pub fn with_hand_source(hands: H) -> Self {
        Self {
            session: GameSession::new(),
            settings: GameSettings::default(),
            stats: GameStatistics::default(),
            hands,
        }
    }

    /// Replace the settings wholesale (e.g. from a settings screen).
    #[must_use]
    pub fn with_settings(mut self, settings: GameSettings) -> Self {
        self.settings = settings;
        self
    }

    // === Read accessors ===

    /// Current session state.
    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Current settings.
    #[must_use]
    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// Accumulated statistics.
    #[must_use]
    pub fn statistics(&self) -> &GameStatistics {
        &self.stats
    }

    /// Snapshot of the persisted subset (statistics + settings).
    ///
    /// Hosts call this after any statistics or settings mutation and hand
    /// the result to their blob store.
    #[must_use]
    pub fn profile(&self) -> SavedProfile {
        SavedProfile {
            stats: self.stats.clone(),
            settings: self.settings.clone(),
        }
    }

    // === Actions ===

    /// Select the hand to throw next round.
    ///
    /// Silently ignored while a round is resolving or after game over.
    pub fn select_hand(&mut self, hand: Hand) {
        if !self.session.accepts_input() {
            return;
        }
        self.session.player_hand = hand;
        self.session.selected_index = hand.index();
    }

    /// Move the selection cursor to a position, wrapping modulo 3.
    ///
    /// Arrow-key navigation calls this with `current ± 1`. Silently
    /// ignored outside the idle phase.
    pub fn select_index(&mut self, index: i32) {
        self.select_hand(Hand::from_index(index));
    }

    /// Start a round: transition to `Resolving` and issue a ticket.
    ///
    /// Returns `None` (a no-op) if a round is already in flight or a
    /// winner has been declared. The host waits out `ticket.delay()` and
    /// then calls [`complete_round`](Self::complete_round).
    pub fn start_round(&mut self) -> Option<RoundTicket> {
        if !self.session.accepts_input() {
            return None;
        }

        self.session.phase = SessionPhase::Resolving;
        let ticket = RoundTicket::new(self.session.generation(), self.settings.handshake_delay());
        debug!(
            "round started: player {} (delay {:?})",
            self.session.player_hand,
            ticket.delay()
        );
        Some(ticket)
    }

    /// Reveal a started round's outcome and apply it.
    ///
    /// Draws the opponent's hand, resolves the round, updates scores and
    /// statistics, and moves to `Idle` or `GameOver` in one step; callers
    /// never observe a half-applied round. A stale ticket (the session was
    /// reset after `start_round`, or the round already completed) is
    /// discarded: nothing is mutated and `None` is returned.
    pub fn complete_round(&mut self, ticket: RoundTicket) -> Option<RoundReport> {
        if self.session.phase != SessionPhase::Resolving
            || ticket.generation() != self.session.generation()
        {
            warn!("discarding stale round resolution");
            return None;
        }

        let player_hand = self.session.player_hand;
        let opponent_hand = self.hands.draw();
        let outcome = resolve(player_hand, opponent_hand);

        self.session.opponent_hand = Some(opponent_hand);
        match outcome {
            RoundOutcome::Player => {
                self.session.player_score += 1;
                if self.session.player_score >= self.settings.winning_score {
                    self.session.winner_message = PLAYER_WINS_MESSAGE.to_string();
                    self.session.phase = SessionPhase::GameOver;
                }
            }
            RoundOutcome::Opponent => {
                self.session.opponent_score += 1;
                if self.session.opponent_score >= self.settings.winning_score {
                    self.session.winner_message = CPU_WINS_MESSAGE.to_string();
                    self.session.phase = SessionPhase::GameOver;
                }
            }
            RoundOutcome::Tie => {}
        }

        self.stats.record_round(player_hand, outcome);
        self.session.last_result = outcome.message().to_string();
        if self.session.phase == SessionPhase::Resolving {
            self.session.phase = SessionPhase::Idle;
        }

        debug!(
            "round resolved: {player_hand} vs {opponent_hand} -> {outcome:?} ({}-{})",
            self.session.player_score, self.session.opponent_score
        );

        Some(RoundReport {
            player_hand,
            opponent_hand,
            outcome,
            player_score: self.session.player_score,
            opponent_score: self.session.opponent_score,
            game_over: self.session.is_over(),
        })
    }

    /// Start and immediately complete a round, skipping the delay.
    ///
    /// For delay-free hosts and tests; equivalent to `start_round`
    /// followed by `complete_round` with no wait.
    pub fn play_round(&mut self) -> Option<RoundReport> {
        let ticket = self.start_round()?;
        self.complete_round(ticket)
    }

    /// Reset the session: fresh scores, hand back to Rock, phase `Idle`.
    ///
    /// Permitted in any phase. A resolution still pending from before the
    /// reset becomes stale and will be discarded when it fires. Settings
    /// and statistics are untouched.
    pub fn reset_session(&mut self) {
        debug!("session reset");
        self.session.reset();
    }

    /// Apply a partial settings update.
    ///
    /// A changed winning score applies to rounds resolved from now on; it
    /// never retroactively declares a winner.
    pub fn update_settings(&mut self, patch: &SettingsPatch) {
        self.settings.apply(patch);
    }

    /// Zero the accumulated statistics. Settings and session are untouched.
    pub fn clear_statistics(&mut self) {
        self.stats.clear();
    }
}
