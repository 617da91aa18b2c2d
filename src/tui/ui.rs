use crate::core::action::Action;
use crate::core::card::CardKind;
use crate::core::session::Correctness;
use crate::core::state::{App, CardState, Screen};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Button, ButtonRow, CardView, Placeholder, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    tui.hit_map.clear();
    let area = frame.area();

    match app.screen() {
        Screen::Loading => Placeholder::loading(spinner_frame).render(frame, area),
        Screen::Empty => Placeholder::empty(&app.source_label).render(frame, area),
        Screen::Card(state) => draw_card_screen(frame, app, &state, tui),
    }
}

fn draw_card_screen(frame: &mut Frame, app: &App, state: &CardState<'_>, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(1), Min(0), Length(1), Length(1), Length(1)]);
    let [title_area, toolbar_area, card_area, controls_area, result_area, hint_area] =
        layout.areas(frame.area());

    TitleBar::new(
        app.title.clone(),
        app.status_message.clone(),
        Some((state.position + 1, state.total)),
    )
    .render(frame, title_area);

    let reveal_label = if state.reveal_all {
        "Hide answers"
    } else {
        "Show answers"
    };
    ButtonRow::new(
        vec![
            Button::new(reveal_label, Action::ToggleRevealAll),
            Button::new("Clear card", Action::ClearCurrent),
            Button::new("Reset all", Action::ResetAll),
        ],
        &mut tui.hit_map,
    )
    .render(frame, toolbar_area);

    CardView::new(state, &mut tui.card_scroll, &mut tui.hit_map).render(frame, card_area);

    ButtonRow::new(
        vec![
            Button::new("← Back", Action::Prev),
            Button::new("Next →", Action::Next),
        ],
        &mut tui.hit_map,
    )
    .render(frame, controls_area);

    if let Some(result) = result_line(state) {
        frame.render_widget(Paragraph::new(result), result_area);
    }

    let hint = Paragraph::new("← / → to navigate · ↑ / ↓ to scroll · Esc to quit")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hint, hint_area);
}

/// Verdict line under the card. Open cards are not graded and get none.
fn result_line(state: &CardState<'_>) -> Option<Span<'static>> {
    if state.kind == CardKind::Open {
        return None;
    }
    let span = match state.correctness {
        Correctness::Unknown => {
            Span::styled("Make a choice.", Style::default().fg(Color::DarkGray))
        }
        Correctness::Correct => Span::styled(
            "Correct!",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Correctness::Incorrect => Span::styled(
            "Wrong.",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };
    Some(span)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::update;
    use crate::core::session::Slot;
    use crate::test_support::{loaded_app, mcq, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App, tui: &mut TuiState) -> Vec<String> {
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui, 0)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect()
    }

    /// Finds `needle` on screen, returning (column, row) of its first cell.
    fn locate(rows: &[String], needle: &str) -> Option<(u16, u16)> {
        rows.iter().enumerate().find_map(|(y, row)| {
            row.find(needle)
                .map(|byte| (row[..byte].chars().count() as u16, y as u16))
        })
    }

    #[test]
    fn test_draw_loading_screen() {
        let app = test_app();
        let mut tui = TuiState::new();
        let rows = draw(&app, &mut tui);
        assert!(rows.iter().any(|r| r.contains("Loading…")));
        assert!(tui.hit_map.is_empty());
    }

    #[test]
    fn test_draw_empty_screen() {
        let mut app = test_app();
        update(&mut app, Action::DeckLoaded(Vec::new()));
        let mut tui = TuiState::new();
        let rows = draw(&app, &mut tui);
        assert!(rows.iter().any(|r| r.contains("No cards.")));
        assert!(rows.iter().any(|r| r.contains("questions.json")));
        assert!(tui.hit_map.is_empty());
    }

    #[test]
    fn test_draw_card_screen() {
        let app = loaded_app();
        let mut tui = TuiState::new();
        let rows = draw(&app, &mut tui);

        assert!(rows[0].starts_with("Test Deck"));
        assert!(rows[0].contains("1 / 3"));
        assert!(rows[1].contains("[ Show answers ]"));
        assert!(rows.iter().any(|r| r.contains("Capital of Greece?")));
        assert!(rows.iter().any(|r| r.contains("Make a choice.")));
        assert!(rows.iter().any(|r| r.contains("[ Next → ]")));
    }

    #[test]
    fn test_clicks_map_to_actions() {
        let app = loaded_app();
        let mut tui = TuiState::new();
        let rows = draw(&app, &mut tui);

        let (x, y) = locate(&rows, "Athens").unwrap();
        assert_eq!(
            tui.hit_map.action_at(x, y),
            Some(Action::SetAnswer(Slot::Choice(1)))
        );

        let (x, y) = locate(&rows, "Reset all").unwrap();
        assert_eq!(tui.hit_map.action_at(x, y), Some(Action::ResetAll));

        let (x, y) = locate(&rows, "Next →").unwrap();
        assert_eq!(tui.hit_map.action_at(x, y), Some(Action::Next));
    }

    #[test]
    fn test_result_line_follows_correctness() {
        let mut app = loaded_app();
        update(&mut app, Action::SetAnswer(Slot::Choice(1)));
        let mut tui = TuiState::new();
        assert!(draw(&app, &mut tui).iter().any(|r| r.contains("Correct!")));

        update(&mut app, Action::SetAnswer(Slot::Choice(2)));
        assert!(draw(&app, &mut tui).iter().any(|r| r.contains("Wrong.")));

        // Open card: no verdict line at all.
        update(&mut app, Action::Prev);
        let rows = draw(&app, &mut tui);
        assert!(!rows.iter().any(|r| r.contains("Make a choice.")));
        assert!(rows.iter().any(|r| r.contains("[Hidden (click / Space)]")));
    }

    #[test]
    fn test_reveal_button_label_toggles() {
        let mut app = loaded_app();
        update(&mut app, Action::ToggleRevealAll);
        let mut tui = TuiState::new();
        let rows = draw(&app, &mut tui);
        assert!(rows[1].contains("[ Hide answers ]"));
    }

    #[test]
    fn test_short_terminal_scrolls_to_hidden_choices() {
        let choices: Vec<String> = (1..=12).map(|i| format!("Option {i}")).collect();
        let choices: Vec<&str> = choices.iter().map(String::as_str).collect();
        let mut app = test_app();
        update(&mut app, Action::DeckLoaded(vec![mcq("Pick one", &choices, 11)]));
        let mut tui = TuiState::new();

        let rows = draw(&app, &mut tui);
        assert!(locate(&rows, "12. Option 12").is_none());

        tui.card_scroll.scroll_by(100);
        let rows = draw(&app, &mut tui);
        let (x, y) = locate(&rows, "12. Option 12").unwrap();
        assert_eq!(
            tui.hit_map.action_at(x, y),
            Some(Action::SetAnswer(Slot::Choice(11)))
        );
    }
}
