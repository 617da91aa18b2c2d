//! Centered one-message screen used while loading and when the deck is empty.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub struct Placeholder {
    lines: Vec<String>,
}

impl Placeholder {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn loading(spinner_frame: usize) -> Self {
        const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];
        Self::new(vec![format!(
            "{} Loading…",
            SPINNER[spinner_frame % SPINNER.len()]
        )])
    }

    pub fn empty(source_label: &str) -> Self {
        Self::new(vec![
            "No cards.".to_string(),
            format!("Add cards to {source_label}."),
        ])
    }
}

impl Component for Placeholder {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [middle] = Layout::vertical([Constraint::Length(self.lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);

        let lines: Vec<Line> = self.lines.iter().map(|l| Line::from(l.as_str())).collect();
        let paragraph = Paragraph::new(lines)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, middle);
    }
}
