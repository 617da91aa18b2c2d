//! # Actions
//!
//! Everything that can happen in the viewer becomes an `Action`.
//! User presses →? That's `Action::Next`.
//! The deck finishes loading? That's `Action::DeckLoaded(cards)`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and returns an `Effect` for the event loop.
//! No I/O here. The loop owns the terminal and the background load.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::core::card::Card;
use crate::core::session::Slot;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The one-time load resolved. An empty deck covers load failures too.
    DeckLoaded(Vec<Card>),
    Next,
    Prev,
    /// Overwrite the current card's answer slot.
    SetAnswer(Slot),
    ClearCurrent,
    /// Flip the current open card's revealed flag.
    ToggleRevealCurrent,
    ToggleRevealAll,
    ResetAll,
    Quit,
}

/// Side effects the event loop must perform after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);

    match action {
        Action::Quit => return Effect::Quit,
        Action::DeckLoaded(deck) => {
            info!("Deck loaded with {} cards", deck.len());
            app.session.seed(deck);
            app.is_loading = false;
            app.status_message = if app.session.is_empty() {
                String::from("No cards")
            } else {
                String::new()
            };
            return Effect::None;
        }
        _ if app.is_loading => {
            debug!("Ignoring action while the deck is loading");
            return Effect::None;
        }
        _ => {}
    }

    let session = &mut app.session;
    match action {
        Action::Next => session.advance(),
        Action::Prev => session.retreat(),
        Action::SetAnswer(slot) => session.set_answer(slot),
        Action::ClearCurrent => session.clear_current(),
        Action::ToggleRevealCurrent => session.toggle_revealed(),
        Action::ToggleRevealAll => {
            session.toggle_reveal_all();
            app.status_message = if session.reveal_all() {
                String::from("Answers shown")
            } else {
                String::new()
            };
        }
        Action::ResetAll => {
            session.reset();
            app.status_message = String::from("Deck reset");
        }
        Action::DeckLoaded(_) | Action::Quit => {}
    }
    Effect::None
}
