//! # Study Session
//!
//! The session controller: deck, answer slots, cursor and the global
//! reveal flag, all in one owned struct.
//!
//! ```text
//! Session
//! ├── deck: Vec<Card>        // working deck, never mutated in place
//! ├── original: Vec<Card>    // snapshot restored by reset()
//! ├── answers: Vec<Slot>     // one slot per card, index-aligned
//! ├── cursor: usize          // current card, wraps on navigation
//! └── reveal_all: bool       // forces answers to show everywhere
//! ```
//!
//! Correctness and visibility are computed on every read from the fields
//! above. Nothing derived is stored.
//!
//! Every operation is total: on an empty deck navigation and answer-setting
//! do nothing.

use crate::core::card::{Card, CardKind};

/// A user's answer slot for one card.
///
/// Slots are not checked against the card kind on write. An mcq card holding
/// a `Flag` counts as answered (and wrong).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Slot {
    #[default]
    Empty,
    /// Chosen mcq option (0-based).
    Choice(usize),
    /// Chosen tf value, or the revealed flag of an open card.
    Flag(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Correctness {
    Unknown,
    Correct,
    Incorrect,
}

/// Display state of one selectable option (an mcq choice or a tf value).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionState {
    pub picked: bool,
    pub correct: bool,
    /// Show the "correct answer" hint on an option the user did not pick.
    pub reveal_hint: bool,
}

/// The two tf options in display order.
pub const TF_OPTIONS: [bool; 2] = [true, false];

#[derive(Debug, Default)]
pub struct Session {
    deck: Vec<Card>,
    original: Vec<Card>,
    answers: Vec<Slot>,
    cursor: usize,
    reveal_all: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the deck and clears every piece of per-session state.
    pub fn seed(&mut self, deck: Vec<Card>) {
        self.original = deck.clone();
        self.deck = deck;
        self.reinitialize();
    }

    fn reinitialize(&mut self) {
        self.answers = vec![Slot::Empty; self.deck.len()];
        self.cursor = 0;
        self.reveal_all = false;
    }

    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    pub fn answers(&self) -> &[Slot] {
        &self.answers
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn reveal_all(&self) -> bool {
        self.reveal_all
    }

    pub fn len(&self) -> usize {
        self.deck.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    pub fn current(&self) -> Option<&Card> {
        self.deck.get(self.cursor)
    }

    pub fn current_slot(&self) -> Slot {
        self.slot_at(self.cursor)
    }

    pub fn slot_at(&self, index: usize) -> Slot {
        self.answers.get(index).copied().unwrap_or_default()
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    pub fn advance(&mut self) {
        let len = self.deck.len();
        if len == 0 {
            return;
        }
        self.cursor = (self.cursor + 1) % len;
    }

    pub fn retreat(&mut self) {
        let len = self.deck.len();
        if len == 0 {
            return;
        }
        self.cursor = (self.cursor + len - 1) % len;
    }

    // ------------------------------------------------------------------
    // Answers
    // ------------------------------------------------------------------

    /// Overwrites the slot of the current card.
    pub fn set_answer(&mut self, slot: Slot) {
        if let Some(current) = self.answers.get_mut(self.cursor) {
            *current = slot;
        }
    }

    pub fn clear_current(&mut self) {
        self.set_answer(Slot::Empty);
    }

    /// Flips the current card's revealed flag. Anything other than
    /// `Flag(true)` counts as hidden.
    pub fn toggle_revealed(&mut self) {
        let revealed = self.current_slot() == Slot::Flag(true);
        self.set_answer(Slot::Flag(!revealed));
    }

    pub fn toggle_reveal_all(&mut self) {
        self.reveal_all = !self.reveal_all;
    }

    /// Restores the originally loaded deck and clears all answers.
    pub fn reset(&mut self) {
        self.deck = self.original.clone();
        self.reinitialize();
    }

    // ------------------------------------------------------------------
    // Derived state
    // ------------------------------------------------------------------

    pub fn correctness(&self) -> Correctness {
        self.correctness_at(self.cursor)
    }

    pub fn correctness_at(&self, index: usize) -> Correctness {
        let Some(card) = self.deck.get(index) else {
            return Correctness::Unknown;
        };
        match (card, self.slot_at(index)) {
            (_, Slot::Empty) | (Card::Open { .. }, _) => Correctness::Unknown,
            (Card::Mcq { answer_index, .. }, Slot::Choice(picked)) => {
                grade(i64::try_from(picked).is_ok_and(|p| p == *answer_index))
            }
            (Card::Mcq { .. }, Slot::Flag(_)) => Correctness::Incorrect,
            (Card::Tf { answer, .. }, Slot::Flag(picked)) => grade(picked == *answer),
            (Card::Tf { .. }, Slot::Choice(_)) => Correctness::Unknown,
        }
    }

    /// The current mcq pick, if the slot holds one.
    pub fn picked_choice(&self) -> Option<usize> {
        match self.current_slot() {
            Slot::Choice(i) => Some(i),
            _ => None,
        }
    }

    /// The current tf pick, if the slot holds one.
    pub fn picked_flag(&self) -> Option<bool> {
        match self.current_slot() {
            Slot::Flag(b) => Some(b),
            _ => None,
        }
    }

    /// Per-option display state for the current card. Empty for open cards.
    pub fn option_states(&self) -> Vec<OptionState> {
        match self.current() {
            Some(Card::Mcq {
                choices,
                answer_index,
                ..
            }) => {
                let picked = self.picked_choice();
                (0..choices.len())
                    .map(|i| {
                        let correct = i64::try_from(i).is_ok_and(|i| i == *answer_index);
                        self.option_state(picked.is_some(), picked == Some(i), correct)
                    })
                    .collect()
            }
            Some(Card::Tf { answer, .. }) => {
                let picked = self.picked_flag();
                TF_OPTIONS
                    .iter()
                    .map(|&value| {
                        self.option_state(picked.is_some(), picked == Some(value), value == *answer)
                    })
                    .collect()
            }
            Some(Card::Open { .. }) | None => Vec::new(),
        }
    }

    fn option_state(&self, any_picked: bool, picked: bool, correct: bool) -> OptionState {
        OptionState {
            picked,
            correct,
            reveal_hint: self.reveal_all && correct && any_picked && !picked,
        }
    }

    /// Whether the current open card's answer is visible.
    pub fn answer_shown(&self) -> bool {
        match self.current().map(Card::kind) {
            Some(CardKind::Open) => self.reveal_all || self.current_slot() == Slot::Flag(true),
            _ => false,
        }
    }
}

fn grade(correct: bool) -> Correctness {
    if correct {
        Correctness::Correct
    } else {
        Correctness::Incorrect
    }
}
