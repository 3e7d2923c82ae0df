//! Session lifecycle: state machine, round tickets, and the engine.

pub mod engine;
pub mod round;
pub mod state;

pub use engine::GameEngine;
pub use round::{RoundReport, RoundTicket};
pub use state::{GameSession, SessionPhase, CPU_WINS_MESSAGE, PLAYER_WINS_MESSAGE};
