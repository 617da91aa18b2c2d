//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Flow
//!
//! ```text
//! crossterm ──translate──▶ TuiEvent ──action_for_event──▶ Action ──update──▶ App
//!                                        │
//!                                        ├─ Key        → core::keymap
//!                                        ├─ MouseClick → HitMap (filled by the last draw)
//!                                        └─ Scroll     → CardScroll (no action)
//!
//! LoadTask ──mpsc──▶ Action::DeckLoaded ──update──▶ App
//! ```
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner moves.
//! - **Idle**: sleeps up to 500ms, only redraws on events or when the
//!   background load delivers.

mod component;
mod components;
mod event;
mod hit_map;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::keymap::action_for_key;
use crate::core::state::App;
use crate::source::{self, LoadTask};
use crate::tui::components::CardScroll;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::hit_map::HitMap;

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    /// Click regions from the most recent draw.
    pub hit_map: HitMap,
    /// Scroll window of the card body.
    pub card_scroll: CardScroll,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            hit_map: HitMap::new(),
            card_scroll: CardScroll::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Maps a translated terminal event to a core action. Scrolling only moves
/// the card window and never reaches the core.
fn action_for_event(event: &TuiEvent, app: &App, tui: &mut TuiState) -> Option<Action> {
    match event {
        TuiEvent::ForceQuit | TuiEvent::Quit => Some(Action::Quit),
        TuiEvent::Key(key) => action_for_key(&app.session, *key),
        TuiEvent::MouseClick(column, row) => tui.hit_map.action_at(*column, *row),
        TuiEvent::Scroll(rows) => {
            tui.card_scroll.scroll_by(*rows);
            None
        }
        TuiEvent::Resize => None,
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();

    // Channel for actions from the background load
    let (tx, rx) = mpsc::channel();
    let deck_source = source::from_location(&config.source, config.timeout);
    let load = LoadTask::spawn(deck_source, move |deck| {
        if tx.send(Action::DeckLoaded(deck)).is_err() {
            log::warn!("Failed to deliver deck: receiver dropped");
        }
    });

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let result = event_loop(&mut terminal, &mut app, &mut tui, &rx);

    // Anything still in flight belongs to a view that no longer exists.
    load.cancel();
    ratatui::restore();
    info!("Viewer closed");
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
    rx: &mpsc::Receiver<Action>,
) -> std::io::Result<()> {
    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        if app.is_loading {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, app, tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short while loading, long when idle
        let timeout = if app.is_loading {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Some(action) = action_for_event(&event, app, tui)
                && update(app, action) == Effect::Quit
            {
                should_quit = true;
            }
        }

        // Handle the background load
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if update(app, action) == Effect::Quit {
                should_quit = true;
            }
        }

        if should_quit {
            return Ok(());
        }
    }
}
