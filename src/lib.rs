//! # rps-engine
//!
//! A rock-paper-scissors game engine for UI frontends: round resolution,
//! session lifecycle, and persisted statistics, with all rendering left
//! to the host.
//!
//! ## Design Principles
//!
//! 1. **Owned, not ambient**: The engine is an explicitly-constructed
//!    instance the host passes around; no global store. Single-writer
//!    semantics fall out of `&mut self`.
//!
//! 2. **Deterministic by injection**: Randomness flows through a seeded
//!    `HandSource` and the handshake delay is returned as data on a
//!    `RoundTicket` instead of being slept inside the engine, so every
//!    sequence of rounds is reproducible in tests.
//!
//! 3. **Persist only what outlives a session**: Statistics and settings
//!    cross the serde boundary as a `SavedProfile`; session state never
//!    does.
//!
//! ## Modules
//!
//! - `core`: Hands, the dominance rule, RNG, settings
//! - `session`: The lifecycle state machine and engine
//! - `stats`: Lifetime statistics aggregation
//! - `persist`: Saved-profile boundary and blob storage
//! - `ui`: Keyboard mapping and breakpoint classification

pub mod core;
pub mod persist;
pub mod session;
pub mod stats;
pub mod ui;

// Re-export commonly used types
pub use crate::core::{
    resolve, GameRng, GameSettings, Hand, HandMap, HandSource, RandomHandSource, RoundOutcome,
    ScriptedHands, SettingsPatch, HANDSHAKE_UNIT,
};

pub use crate::session::{
    GameEngine, GameSession, RoundReport, RoundTicket, SessionPhase, CPU_WINS_MESSAGE,
    PLAYER_WINS_MESSAGE,
};

pub use crate::stats::GameStatistics;

pub use crate::persist::{
    load_profile, save_profile, BlobStore, MemoryStore, ProfileError, SavedProfile, StoreError,
};

pub use crate::ui::{Breakpoint, KeyInput, UiCommand};
