use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use log::{debug, warn};

use crate::core::keymap::Key;

const WHEEL_ROWS: isize = 3;
const PAGE_ROWS: isize = 10;

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    /// Ctrl+C
    ForceQuit,
    /// Esc
    Quit,
    /// A plain key for the card key map.
    Key(Key),
    MouseClick(u16, u16),
    /// Scroll the card body by this many rows (negative is up).
    Scroll(isize),
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => match event::read() {
            Ok(raw) => translate(raw),
            Err(e) => {
                warn!("Failed to read terminal event: {}", e);
                None
            }
        },
        Ok(false) => None,
        Err(e) => {
            warn!("Failed to poll terminal events: {}", e);
            None
        }
    }
}

/// Converts a crossterm event into a `TuiEvent`. Releases, repeats and
/// anything the viewer doesn't react to become `None`.
pub fn translate(raw: Event) -> Option<TuiEvent> {
    match raw {
        Event::Key(key_event) if key_event.kind == KeyEventKind::Press => translate_key(key_event),
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::MouseClick(mouse_event.column, mouse_event.row))
            }
            MouseEventKind::ScrollUp => Some(TuiEvent::Scroll(-WHEEL_ROWS)),
            MouseEventKind::ScrollDown => Some(TuiEvent::Scroll(WHEEL_ROWS)),
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn translate_key(key_event: KeyEvent) -> Option<TuiEvent> {
    debug!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code, key_event.modifiers
    );

    let modifiers = key_event.modifiers;
    if modifiers.contains(KeyModifiers::CONTROL) && key_event.code == KeyCode::Char('c') {
        return Some(TuiEvent::ForceQuit);
    }
    // Shift stays allowed so that `T` and `F` work.
    if modifiers.intersects(
        KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER | KeyModifiers::META,
    ) {
        return None;
    }

    match key_event.code {
        KeyCode::Esc => Some(TuiEvent::Quit),
        KeyCode::Left => Some(TuiEvent::Key(Key::Left)),
        KeyCode::Right => Some(TuiEvent::Key(Key::Right)),
        KeyCode::Up => Some(TuiEvent::Scroll(-1)),
        KeyCode::Down => Some(TuiEvent::Scroll(1)),
        KeyCode::PageUp => Some(TuiEvent::Scroll(-PAGE_ROWS)),
        KeyCode::PageDown => Some(TuiEvent::Scroll(PAGE_ROWS)),
        KeyCode::Char(c) => Some(TuiEvent::Key(Key::Char(c))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::MouseEvent;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_plain_keys_translate() {
        assert_eq!(
            translate(press(KeyCode::Right, KeyModifiers::NONE)),
            Some(TuiEvent::Key(Key::Right))
        );
        assert_eq!(
            translate(press(KeyCode::Char('3'), KeyModifiers::NONE)),
            Some(TuiEvent::Key(Key::Char('3')))
        );
        assert_eq!(
            translate(press(KeyCode::Char(' '), KeyModifiers::NONE)),
            Some(TuiEvent::Key(Key::Char(' ')))
        );
        assert_eq!(
            translate(press(KeyCode::Esc, KeyModifiers::NONE)),
            Some(TuiEvent::Quit)
        );
    }

    #[test]
    fn test_shift_is_allowed() {
        assert_eq!(
            translate(press(KeyCode::Char('T'), KeyModifiers::SHIFT)),
            Some(TuiEvent::Key(Key::Char('T')))
        );
    }

    #[test]
    fn test_modified_keys_are_dropped() {
        for modifiers in [KeyModifiers::CONTROL, KeyModifiers::ALT, KeyModifiers::SUPER] {
            assert_eq!(translate(press(KeyCode::Char('t'), modifiers)), None);
            assert_eq!(translate(press(KeyCode::Right, modifiers)), None);
        }
    }

    #[test]
    fn test_ctrl_c_force_quits() {
        assert_eq!(
            translate(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(TuiEvent::ForceQuit)
        );
    }

    #[test]
    fn test_key_release_ignored() {
        let release = Event::Key(KeyEvent::new_with_kind(
            KeyCode::Char('t'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        ));
        assert_eq!(translate(release), None);
    }

    #[test]
    fn test_left_click_translates() {
        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 12,
            row: 4,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(translate(click), Some(TuiEvent::MouseClick(12, 4)));

        let moved = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 1,
            row: 1,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(translate(moved), None);
    }

    #[test]
    fn test_scroll_inputs() {
        assert_eq!(
            translate(press(KeyCode::Down, KeyModifiers::NONE)),
            Some(TuiEvent::Scroll(1))
        );
        assert_eq!(
            translate(press(KeyCode::PageUp, KeyModifiers::NONE)),
            Some(TuiEvent::Scroll(-PAGE_ROWS))
        );
        let wheel = Event::Mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(translate(wheel), Some(TuiEvent::Scroll(WHEEL_ROWS)));
    }
}
