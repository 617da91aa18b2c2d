//! # ButtonRow Component
//!
//! A single line of clickable `[ label ]` buttons, laid out left to right.
//! Used for the toolbar and the back/next controls.
//!
//! Follows the transient wrapper pattern: built each frame with a borrowed
//! `HitMap`, into which it records where each button landed.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::core::action::Action;
use crate::tui::component::Component;
use crate::tui::hit_map::HitMap;

const GAP: u16 = 1;

pub struct Button {
    pub label: String,
    pub action: Action,
}

impl Button {
    pub fn new(label: impl Into<String>, action: Action) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }

    fn text(&self) -> String {
        format!("[ {} ]", self.label)
    }
}

pub struct ButtonRow<'a> {
    buttons: Vec<Button>,
    hit_map: &'a mut HitMap,
}

impl<'a> ButtonRow<'a> {
    pub fn new(buttons: Vec<Button>, hit_map: &'a mut HitMap) -> Self {
        Self { buttons, hit_map }
    }
}

impl Component for ButtonRow<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::with_capacity(self.buttons.len() * 2);
        let mut x = area.x;

        for button in &self.buttons {
            let text = button.text();
            let width = UnicodeWidthStr::width(text.as_str()) as u16;

            let region = Rect::new(x, area.y, width, 1).intersection(area);
            self.hit_map.push(region, button.action.clone());

            spans.push(Span::styled(text, Style::default().fg(Color::Yellow)));
            spans.push(Span::raw(" ".repeat(GAP as usize)));
            x = x.saturating_add(width + GAP);
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
