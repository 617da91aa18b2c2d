//! # Key Map
//!
//! The keyboard table. Keys reach this module already stripped of
//! Ctrl/Alt/Super/Meta combinations (the TUI drops those), so every key here
//! is a plain press.
//!
//! | Key     | Precondition                      | Action                 |
//! |---------|-----------------------------------|------------------------|
//! | →       | deck nonempty                     | `Next`                 |
//! | ←       | deck nonempty                     | `Prev`                 |
//! | 1–9     | mcq, digit-1 < choice count       | `SetAnswer(Choice)`    |
//! | T / t   | tf                                | `SetAnswer(Flag(true))`|
//! | F / f   | tf                                | `SetAnswer(Flag(false))`|
//! | Space   | open                              | `ToggleRevealCurrent`  |

use crate::core::action::Action;
use crate::core::card::Card;
use crate::core::session::{Session, Slot};

/// A key press the card table understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Char(char),
}

/// Maps a key to an action for the current session, or `None` if the key
/// does nothing in this state.
pub fn action_for_key(session: &Session, key: Key) -> Option<Action> {
    match key {
        Key::Right if !session.is_empty() => Some(Action::Next),
        Key::Left if !session.is_empty() => Some(Action::Prev),
        Key::Char(c) => match (session.current()?, c) {
            (Card::Mcq { choices, .. }, '1'..='9') => {
                let index = c.to_digit(10)? as usize - 1;
                (index < choices.len()).then_some(Action::SetAnswer(Slot::Choice(index)))
            }
            (Card::Tf { .. }, 'T' | 't') => Some(Action::SetAnswer(Slot::Flag(true))),
            (Card::Tf { .. }, 'F' | 'f') => Some(Action::SetAnswer(Slot::Flag(false))),
            (Card::Open { .. }, ' ') => Some(Action::ToggleRevealCurrent),
            _ => None,
        },
        _ => None,
    }
}
