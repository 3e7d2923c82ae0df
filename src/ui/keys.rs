//! Keyboard shortcut mapping.
//!
//! Pure translation from key presses to engine commands; the host's
//! render layer captures raw key events and feeds them through here.
//! Bindings: arrows move the selection cursor, Enter/Space throw the
//! selected hand, digits 1–3 select a hand and throw it immediately,
//! Escape or `r` resets the session.

use crate::core::{Hand, HandSource};
use crate::session::{GameEngine, RoundTicket};

/// A key press, already decoded from the host's event type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyInput {
    Left,
    Right,
    Enter,
    Space,
    Escape,
    Char(char),
}

/// An engine-facing command produced by a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiCommand {
    /// Move the selection cursor by an offset (wraps).
    MoveSelection(i32),
    /// Throw the currently selected hand.
    Play,
    /// Select a specific hand and throw it in one stroke.
    SelectAndPlay(Hand),
    /// Reset the session.
    Reset,
}

impl UiCommand {
    /// Translate a key press, `None` for unbound keys.
    #[must_use]
    pub fn from_key(key: KeyInput) -> Option<UiCommand> {
        match key {
            KeyInput::Left => Some(UiCommand::MoveSelection(-1)),
            KeyInput::Right => Some(UiCommand::MoveSelection(1)),
            KeyInput::Enter | KeyInput::Space => Some(UiCommand::Play),
            KeyInput::Escape => Some(UiCommand::Reset),
            KeyInput::Char('1') => Some(UiCommand::SelectAndPlay(Hand::Rock)),
            KeyInput::Char('2') => Some(UiCommand::SelectAndPlay(Hand::Paper)),
            KeyInput::Char('3') => Some(UiCommand::SelectAndPlay(Hand::Scissors)),
            KeyInput::Char('r') | KeyInput::Char('R') => Some(UiCommand::Reset),
            KeyInput::Char(_) => None,
        }
    }

    /// Drive the corresponding engine action.
    ///
    /// Returns the round ticket when the command started a round, so the
    /// host can schedule the handshake delay. The engine's own guards
    /// make every command inert while a round is resolving, except
    /// `Reset` which is always honored.
    pub fn apply<H: HandSource>(self, engine: &mut GameEngine<H>) -> Option<RoundTicket> {
        match self {
            UiCommand::MoveSelection(offset) => {
                let index = engine.session().selected_index as i32 + offset;
                engine.select_index(index);
                None
            }
            UiCommand::Play => engine.start_round(),
            UiCommand::SelectAndPlay(hand) => {
                engine.select_hand(hand);
                engine.start_round()
            }
            UiCommand::Reset => {
                engine.reset_session();
                None
            }
        }
    }
}
