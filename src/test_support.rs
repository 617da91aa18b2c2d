//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Notify;

use crate::core::action::{Action, update};
use crate::core::card::Card;
use crate::core::session::Session;
use crate::core::state::App;
use crate::source::{DeckSource, LoadError};

pub fn mcq(prompt: &str, choices: &[&str], answer_index: i64) -> Card {
    Card::Mcq {
        prompt: prompt.to_string(),
        choices: choices.iter().map(|c| c.to_string()).collect(),
        answer_index,
    }
}

pub fn tf(prompt: &str, answer: bool) -> Card {
    Card::Tf {
        prompt: prompt.to_string(),
        answer,
    }
}

pub fn open(prompt: &str, answer: &str) -> Card {
    Card::Open {
        prompt: prompt.to_string(),
        answer: answer.to_string(),
    }
}

/// One card of each kind: mcq (answer 1), tf (answer true), open.
pub fn sample_deck() -> Vec<Card> {
    vec![
        mcq("Capital of Greece?", &["Sparta", "Athens", "Thebes"], 1),
        tf("Alpha is the first letter", true),
        open("Translate: ευχαριστώ", "thank you"),
    ]
}

pub fn seeded_session() -> Session {
    let mut session = Session::new();
    session.seed(sample_deck());
    session
}

/// Creates a test App that is still waiting for its deck.
pub fn test_app() -> App {
    App::new("Test Deck".to_string(), "questions.json".to_string())
}

/// Creates a test App with the sample deck already loaded.
pub fn loaded_app() -> App {
    let mut app = test_app();
    update(&mut app, Action::DeckLoaded(sample_deck()));
    app
}

/// A source that answers immediately with a fixed result.
pub struct StaticSource {
    result: Result<Value, LoadError>,
}

impl StaticSource {
    pub fn document(document: Value) -> Self {
        Self { result: Ok(document) }
    }

    pub fn failing(error: LoadError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl DeckSource for StaticSource {
    fn describe(&self) -> &str {
        "static"
    }

    async fn fetch(&self) -> Result<Value, LoadError> {
        self.result.clone()
    }
}

/// A source that holds its answer until the gate is notified.
pub struct GatedSource {
    document: Value,
    gate: Arc<Notify>,
}

impl GatedSource {
    pub fn new(document: Value) -> Self {
        Self {
            document,
            gate: Arc::new(Notify::new()),
        }
    }

    pub fn gate(&self) -> Arc<Notify> {
        self.gate.clone()
    }
}

#[async_trait]
impl DeckSource for GatedSource {
    fn describe(&self) -> &str {
        "gated"
    }

    async fn fetch(&self) -> Result<Value, LoadError> {
        self.gate.notified().await;
        Ok(self.document.clone())
    }
}
