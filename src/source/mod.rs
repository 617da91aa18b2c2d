//! # Deck Sources
//!
//! Where the cards document comes from, and the one-time background load.
//!
//! ```text
//! DeckSource::fetch ──▶ JSON document ──▶ parse_document ──▶ Vec<Card>
//!        │ error                                               ▲
//!        └──────────────── log + empty deck ───────────────────┘
//! ```
//!
//! Load failures never escape this module: [`load_or_empty`] turns them into
//! an empty deck, and the viewer shows its "no cards" screen.

pub mod provider;
pub mod providers;

pub use provider::{DeckSource, LoadError};
pub use providers::{FileSource, HttpSource};

use log::{debug, info, warn};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::task::AbortHandle;

use crate::core::card::Card;
use crate::core::normalize::parse_document;

/// Picks a source for a location: `http://` and `https://` become an
/// [`HttpSource`], anything else is a file path.
pub fn from_location(location: &str, timeout: Duration) -> Arc<dyn DeckSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Arc::new(HttpSource::new(location.to_string(), timeout))
    } else {
        Arc::new(FileSource::new(location))
    }
}

/// Fetches and normalizes a deck.
pub async fn load_deck(source: &dyn DeckSource) -> Result<Vec<Card>, LoadError> {
    let document = source.fetch().await?;
    Ok(parse_document(&document))
}

/// Fetches and normalizes a deck, logging any failure and returning an empty
/// deck in its place.
pub async fn load_or_empty(source: &dyn DeckSource) -> Vec<Card> {
    match load_deck(source).await {
        Ok(deck) => {
            info!("Loaded {} cards from {}", deck.len(), source.describe());
            deck
        }
        Err(e) => {
            warn!("Could not load deck from {}: {}", source.describe(), e);
            Vec::new()
        }
    }
}

/// Loads a deck and renders it as pretty-printed JSON. Unlike the viewer, a
/// failed load is reported instead of becoming an empty deck.
pub async fn export_json(source: &dyn DeckSource) -> std::io::Result<String> {
    let deck = load_deck(source).await.map_err(std::io::Error::other)?;
    serde_json::to_string_pretty(&deck).map_err(std::io::Error::other)
}

/// The in-flight deck load.
///
/// The result is handed to `deliver` only while the task is still alive.
/// Cancelling (or dropping) the task clears the flag first, so a load that
/// resolves during teardown is discarded instead of applied.
pub struct LoadTask {
    alive: Arc<AtomicBool>,
    handle: AbortHandle,
}

impl LoadTask {
    pub fn spawn<F>(source: Arc<dyn DeckSource>, deliver: F) -> Self
    where
        F: FnOnce(Vec<Card>) + Send + 'static,
    {
        let alive = Arc::new(AtomicBool::new(true));
        let still_alive = alive.clone();

        info!("Spawning deck load from {}", source.describe());
        let handle = tokio::spawn(async move {
            let deck = load_or_empty(source.as_ref()).await;
            deliver_if_alive(&still_alive, deck, deliver);
        });

        Self {
            alive,
            handle: handle.abort_handle(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }

    pub fn cancel(&self) {
        if self.alive.swap(false, Ordering::AcqRel) {
            debug!("Cancelling deck load");
        }
        self.handle.abort();
    }
}

impl Drop for LoadTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Hands `deck` to `deliver` only if `alive` is still set. Returns whether it
/// was delivered.
fn deliver_if_alive<F>(alive: &AtomicBool, deck: Vec<Card>, deliver: F) -> bool
where
    F: FnOnce(Vec<Card>),
{
    if alive.load(Ordering::Acquire) {
        deliver(deck);
        true
    } else {
        debug!("Deck load resolved after teardown, discarding {} cards", deck.len());
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{GatedSource, StaticSource};
    use serde_json::json;
    use tokio::sync::oneshot;

    #[test]
    fn test_from_location_picks_by_scheme() {
        let timeout = Duration::from_secs(1);
        assert_eq!(
            from_location("https://example.com/q.json", timeout).describe(),
            "https://example.com/q.json"
        );
        assert_eq!(from_location("decks/q.json", timeout).describe(), "decks/q.json");
    }

    #[tokio::test]
    async fn test_load_deck_normalizes() {
        let source = StaticSource::document(json!({"cards": [
            {"q": "Sun is a star", "answer": true},
            {"q": "Alpha?", "a": "α"},
        ]}));
        let deck = load_deck(&source).await.unwrap();
        assert_eq!(deck.len(), 2);
        assert_eq!(deck[0].prompt(), "Sun is a star");
    }

    #[tokio::test]
    async fn test_load_or_empty_swallows_errors() {
        let source = StaticSource::failing(LoadError::Network("refused".to_string()));
        assert!(load_or_empty(&source).await.is_empty());
    }

    #[tokio::test]
    async fn test_document_without_cards_is_empty_not_error() {
        let source = StaticSource::document(json!({"questions": []}));
        assert!(load_deck(&source).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_load_task_delivers_when_alive() {
        let source = Arc::new(StaticSource::document(json!({"cards": [{"q": "x"}]})));
        let (tx, rx) = oneshot::channel();
        let task = LoadTask::spawn(source, move |deck| {
            let _ = tx.send(deck);
        });

        let deck = rx.await.expect("deck should be delivered");
        assert_eq!(deck.len(), 1);
        assert!(task.is_alive());
    }

    #[tokio::test]
    async fn test_load_task_discards_after_cancel() {
        let source = Arc::new(GatedSource::new(json!({"cards": [{"q": "x"}]})));
        let gate = source.gate();
        let (tx, rx) = oneshot::channel::<Vec<Card>>();
        let task = LoadTask::spawn(source, move |deck| {
            let _ = tx.send(deck);
        });

        task.cancel();
        gate.notify_one();

        assert!(!task.is_alive());
        assert!(rx.await.is_err(), "cancelled load must not deliver");
    }

    #[tokio::test]
    async fn test_dropping_load_task_cancels() {
        let source = Arc::new(GatedSource::new(json!({"cards": []})));
        let gate = source.gate();
        let (tx, rx) = oneshot::channel::<Vec<Card>>();
        drop(LoadTask::spawn(source, move |deck| {
            let _ = tx.send(deck);
        }));
        gate.notify_one();
        assert!(rx.await.is_err());
    }

    #[test]
    fn test_cleared_flag_discards_result() {
        let alive = AtomicBool::new(false);
        let mut delivered = None;
        let sent = deliver_if_alive(&alive, vec![], |deck| delivered = Some(deck));
        assert!(!sent);
        assert!(delivered.is_none());
    }

    #[test]
    fn test_set_flag_delivers_result() {
        let alive = AtomicBool::new(true);
        let mut delivered = None;
        let deck = vec![Card::Tf {
            prompt: "Sun is a star".to_string(),
            answer: true,
        }];
        assert!(deliver_if_alive(&alive, deck.clone(), |d| delivered = Some(d)));
        assert_eq!(delivered, Some(deck));
    }

    #[tokio::test]
    async fn test_cancel_clears_flag_seen_by_running_load() {
        let source = Arc::new(GatedSource::new(json!({"cards": [{"q": "x"}]})));
        let gate = source.gate();
        let (tx, rx) = oneshot::channel::<Vec<Card>>();
        let task = LoadTask::spawn(source, move |deck| {
            let _ = tx.send(deck);
        });
        // Only the flag is cleared; the task itself keeps running.
        task.alive.store(false, Ordering::Release);
        gate.notify_one();
        assert!(rx.await.is_err(), "a load finishing after teardown must not deliver");
    }

    fn temp_deck(contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("flashdeck-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[tokio::test]
    async fn test_export_json_writes_normalized_deck() {
        let path = temp_deck(
            r#"{"cards": [{"type": "mcq", "q": "Capital?", "choices": ["Athens"], "answerIndex": "0"}, {}]}"#,
        );
        let result = export_json(&FileSource::new(&path)).await;
        std::fs::remove_file(&path).ok();

        let exported: serde_json::Value = serde_json::from_str(&result.unwrap()).unwrap();
        assert_eq!(
            exported,
            json!([
                {"type": "mcq", "q": "Capital?", "choices": ["Athens"], "answerIndex": 0},
                {"type": "open", "q": "—", "a": ""},
            ])
        );
    }

    #[tokio::test]
    async fn test_export_json_reports_load_errors() {
        let missing = std::env::temp_dir().join(format!("flashdeck-{}.json", uuid::Uuid::new_v4()));
        let err = export_json(&FileSource::new(&missing)).await.unwrap_err();
        assert!(err.to_string().contains("I/O error"));

        let broken = temp_deck("{cards: ");
        let result = export_json(&FileSource::new(&broken)).await;
        std::fs::remove_file(&broken).ok();
        assert!(result.unwrap_err().to_string().contains("parse error"));
    }
}
