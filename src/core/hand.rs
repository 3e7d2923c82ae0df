//! Hands, the dominance rule, and round outcomes.
//!
//! ## Hand
//!
//! The three throwable hands in their fixed display order
//! (Rock, Paper, Scissors). The order matters: the selection cursor
//! indexes into it, and statistics tie-breaks follow it.
//!
//! ## Resolution
//!
//! `resolve` is a pure lookup over the fixed dominance cycle
//! Rock→Scissors→Paper→Rock. It has exactly 9 input pairs and is
//! tested exhaustively.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the three throwable hands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hand {
    Rock,
    Paper,
    Scissors,
}

impl Hand {
    /// All hands in display/cursor order.
    pub const ALL: [Hand; 3] = [Hand::Rock, Hand::Paper, Hand::Scissors];

    /// The hand this hand beats.
    ///
    /// The dominance table is total and fixed:
    /// Rock beats Scissors, Paper beats Rock, Scissors beats Paper.
    #[must_use]
    pub const fn beats(self) -> Hand {
        match self {
            Hand::Rock => Hand::Scissors,
            Hand::Paper => Hand::Rock,
            Hand::Scissors => Hand::Paper,
        }
    }

    /// Position of this hand in [`Hand::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Hand::Rock => 0,
            Hand::Paper => 1,
            Hand::Scissors => 2,
        }
    }

    /// Hand at a cursor position, wrapping in both directions.
    ///
    /// Accepts any integer so callers can move a selection cursor with
    /// plain `-1`/`+1` arithmetic:
    ///
    /// ```
    /// use rps_engine::core::Hand;
    ///
    /// assert_eq!(Hand::from_index(-1), Hand::Scissors);
    /// assert_eq!(Hand::from_index(3), Hand::Rock);
    /// ```
    #[must_use]
    pub fn from_index(index: i32) -> Hand {
        Hand::ALL[index.rem_euclid(3) as usize]
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Hand::Rock => write!(f, "ROCK"),
            Hand::Paper => write!(f, "PAPER"),
            Hand::Scissors => write!(f, "SCISSORS"),
        }
    }
}

/// Per-hand data storage with O(1) access.
///
/// Backed by a fixed `[T; 3]` with one entry per hand. Iteration always
/// follows [`Hand::ALL`] order, which is what the favorite-hand tie-break
/// relies on.
///
/// ## Example
///
/// ```
/// use rps_engine::core::{Hand, HandMap};
///
/// let mut usage: HandMap<u32> = HandMap::default();
/// usage[Hand::Paper] += 1;
/// assert_eq!(usage[Hand::Paper], 1);
/// assert_eq!(usage[Hand::Rock], 0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandMap<T> {
    data: [T; 3],
}

impl<T> HandMap<T> {
    /// Create a map with every entry set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: [value.clone(), value.clone(), value],
        }
    }

    /// Iterate entries in [`Hand::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Hand, &T)> {
        Hand::ALL.iter().map(move |&h| (h, &self.data[h.index()]))
    }
}

impl<T> Index<Hand> for HandMap<T> {
    type Output = T;

    fn index(&self, hand: Hand) -> &T {
        &self.data[hand.index()]
    }
}

impl<T> IndexMut<Hand> for HandMap<T> {
    fn index_mut(&mut self, hand: Hand) -> &mut T {
        &mut self.data[hand.index()]
    }
}

/// Outcome of a single resolved round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Player's hand beat the opponent's.
    Player,
    /// Opponent's hand beat the player's.
    Opponent,
    /// Both sides threw the same hand.
    Tie,
}

impl RoundOutcome {
    /// Canonical result text shown after a round.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            RoundOutcome::Player => "You Win!",
            RoundOutcome::Opponent => "CPU Wins!",
            RoundOutcome::Tie => "It's a Tie!",
        }
    }
}

/// Resolve a round from both hands.
///
/// Pure function: equal hands tie, otherwise the dominance table decides.
/// Deterministic over all 9 input pairs.
#[must_use]
pub fn resolve(player: Hand, opponent: Hand) -> RoundOutcome {
    if player == opponent {
        RoundOutcome::Tie
    } else if player.beats() == opponent {
        RoundOutcome::Player
    } else {
        RoundOutcome::Opponent
    }
}
