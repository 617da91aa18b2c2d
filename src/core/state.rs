//! # Application State
//!
//! Core business state for the viewer. Domain logic only, no TUI types.
//! Presentation state (hit boxes, redraw flags) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── session: Session         // deck, answers, cursor, reveal flag
//! ├── is_loading: bool         // deck fetch still pending
//! ├── title: String            // header text
//! ├── source_label: String     // where the deck comes from
//! └── status_message: String   // transient status line
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! The render layer reads [`App::screen`], which is rebuilt from scratch on
//! every call.

use crate::core::card::{Card, CardKind};
use crate::core::config::ResolvedConfig;
use crate::core::session::{Correctness, OptionState, Session, Slot};

pub struct App {
    pub session: Session,
    pub is_loading: bool,
    pub title: String,
    pub source_label: String,
    pub status_message: String,
}

impl App {
    pub fn new(title: String, source_label: String) -> Self {
        Self {
            session: Session::new(),
            is_loading: true,
            title,
            source_label,
            status_message: String::from("Loading…"),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.title.clone(), config.source.clone())
    }

    /// Read model for the render layer.
    pub fn screen(&self) -> Screen<'_> {
        if self.is_loading {
            return Screen::Loading;
        }
        match self.session.current() {
            None => Screen::Empty,
            Some(card) => Screen::Card(CardState {
                card,
                kind: card.kind(),
                position: self.session.cursor(),
                total: self.session.len(),
                slot: self.session.current_slot(),
                reveal_all: self.session.reveal_all(),
                correctness: self.session.correctness(),
                options: self.session.option_states(),
                answer_shown: self.session.answer_shown(),
            }),
        }
    }
}

/// What the viewer should show right now.
#[derive(Debug)]
pub enum Screen<'a> {
    Loading,
    Empty,
    Card(CardState<'a>),
}

#[derive(Debug)]
pub struct CardState<'a> {
    pub card: &'a Card,
    pub kind: CardKind,
    /// 0-based index of the card.
    pub position: usize,
    pub total: usize,
    pub slot: Slot,
    pub reveal_all: bool,
    pub correctness: Correctness,
    pub options: Vec<OptionState>,
    /// Open cards only.
    pub answer_shown: bool,
}
