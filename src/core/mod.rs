//! Core engine types: hands, resolution rule, RNG, settings.
//!
//! This module contains the building blocks the rest of the crate is
//! assembled from. Everything here is either a pure value type or a
//! deterministic, injectable source of randomness.

pub mod hand;
pub mod rng;
pub mod settings;

pub use hand::{resolve, Hand, HandMap, RoundOutcome};
pub use rng::{GameRng, HandSource, RandomHandSource, ScriptedHands};
pub use settings::{GameSettings, SettingsPatch, HANDSHAKE_UNIT};
