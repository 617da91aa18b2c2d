//! # TitleBar Component
//!
//! Top line: deck title and status on the left, `position / total` on the
//! right.
//!
//! Purely presentational. It receives everything as props and keeps no
//! state, so the formatting is trivial to test.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub struct TitleBar {
    pub title: String,
    pub status_message: String,
    /// 1-based position and deck length.
    pub progress: Option<(usize, usize)>,
}

impl TitleBar {
    pub fn new(title: String, status_message: String, progress: Option<(usize, usize)>) -> Self {
        Self {
            title,
            status_message,
            progress,
        }
    }

    fn left_line(&self) -> Line<'static> {
        let mut spans = vec![Span::styled(
            self.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if !self.status_message.is_empty() {
            spans.push(Span::styled(
                format!(" | {}", self.status_message),
                Style::default().fg(Color::DarkGray),
            ));
        }
        Line::from(spans)
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(self.left_line()), area);

        if let Some((position, total)) = self.progress {
            let progress = Paragraph::new(format!("{position} / {total}"))
                .style(Style::default().fg(Color::Cyan))
                .alignment(Alignment::Right);
            frame.render_widget(progress, area);
        }
    }
}
