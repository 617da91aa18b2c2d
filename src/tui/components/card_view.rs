//! # CardView Component
//!
//! The bordered card: prompt, divider, then a body that depends on the kind.
//!
//! ```text
//! ┌ Question ─────────────────────────┐
//! │ Capital of Greece?                │
//! │                                   │
//! │ Choices                           │
//! │ 1. Sparta                         │
//! │ 2. Athens  ✓ Correct              │
//! │ 3. Thebes                         │
//! └───────────────────────────────────┘
//! ```
//!
//! Text is wrapped with `textwrap` up front instead of letting the
//! paragraph wrap it, so each option knows exactly which rows it occupies.
//! Those rows become click regions in the `HitMap`.
//!
//! A card taller than its area scrolls. Only the visible window of lines is
//! handed to the paragraph, and only options inside that window get click
//! regions. Row positions stay `usize` until the window is cut, so decks of
//! any length lay out without overflow.

use ratatui::Frame;
use ratatui::layout::{Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};

use crate::core::action::Action;
use crate::core::card::Card;
use crate::core::session::{OptionState, Slot, TF_OPTIONS};
use crate::core::state::CardState;
use crate::tui::component::Component;
use crate::tui::hit_map::HitMap;

const HIDDEN_ANSWER: &str = "••••••••";

/// Scroll position of the card body. Lives in `TuiState` between frames.
#[derive(Debug, Default)]
pub struct CardScroll {
    offset: usize,
    /// Card the offset belongs to. Moving to another card starts at the top.
    card: Option<usize>,
}

impl CardScroll {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Moves the window by `delta` rows. Clamped to the content on the next draw.
    pub fn scroll_by(&mut self, delta: isize) {
        self.offset = self.offset.saturating_add_signed(delta);
    }

    fn follow(&mut self, card: usize) {
        if self.card != Some(card) {
            self.card = Some(card);
            self.offset = 0;
        }
    }

    fn clamp(&mut self, max_offset: usize) {
        self.offset = self.offset.min(max_offset);
    }
}

/// Lines of the card body plus the clickable row ranges inside them.
struct CardLayout {
    lines: Vec<Line<'static>>,
    /// (first row, row count, action), rows relative to the top of the card.
    targets: Vec<(usize, usize, Action)>,
}

impl CardLayout {
    fn new() -> Self {
        Self {
            lines: Vec::new(),
            targets: Vec::new(),
        }
    }

    fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    /// Appends wrapped text, returning the row it started on.
    fn push_wrapped(&mut self, text: &str, width: usize, style: Style) -> usize {
        let start = self.lines.len();
        for row in textwrap::wrap(text, width.max(1)) {
            self.lines.push(Line::from(Span::styled(row.into_owned(), style)));
        }
        if self.lines.len() == start {
            self.lines.push(Line::default());
        }
        start
    }

    fn rows_since(&self, start: usize) -> usize {
        self.lines.len() - start
    }

    fn label(&mut self, text: &str) {
        self.push(Line::from(Span::styled(
            text.to_string(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )));
    }

    /// One selectable option (an mcq choice or a tf value) with its badge.
    fn option(&mut self, text: &str, width: usize, option: OptionState, action: Action) {
        let start = self.push_wrapped(text, width, option_style(option));
        if let Some((badge, style)) = badge(option)
            && let Some(last) = self.lines.last_mut()
        {
            last.push_span(Span::styled(badge, style));
        }
        let rows = self.rows_since(start);
        self.targets.push((start, rows, action));
    }
}

fn option_style(option: OptionState) -> Style {
    match (option.picked, option.correct) {
        (true, true) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        (true, false) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        _ if option.reveal_hint => Style::default().fg(Color::Green),
        _ => Style::default(),
    }
}

fn badge(option: OptionState) -> Option<(&'static str, Style)> {
    match (option.picked, option.correct) {
        (true, true) => Some(("  ✓ Correct", Style::default().fg(Color::Green))),
        (true, false) => Some(("  ✗ Wrong", Style::default().fg(Color::Red))),
        _ if option.reveal_hint => Some((
            "  · Correct answer",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::DIM | Modifier::ITALIC),
        )),
        _ => None,
    }
}

fn build_layout(state: &CardState<'_>, width: u16) -> CardLayout {
    let width = width as usize;
    let mut layout = CardLayout::new();

    layout.push_wrapped(
        state.card.prompt(),
        width,
        Style::default().add_modifier(Modifier::BOLD),
    );
    layout.push(Line::default());

    match state.card {
        Card::Mcq { choices, .. } => {
            layout.label("Choices");
            for (i, (choice, option)) in choices.iter().zip(&state.options).enumerate() {
                let text = format!("{}. {}", i + 1, choice);
                layout.option(&text, width, *option, Action::SetAnswer(Slot::Choice(i)));
            }
        }
        Card::Tf { .. } => {
            layout.label("True / False");
            for (value, option) in TF_OPTIONS.iter().zip(&state.options) {
                let marker = if option.picked { "(•)" } else { "( )" };
                let text = format!("{} {}", marker, if *value { "True" } else { "False" });
                layout.option(&text, width, *option, Action::SetAnswer(Slot::Flag(*value)));
            }
        }
        Card::Open { answer, .. } => {
            layout.label("Answer");
            let start = layout.lines.len();
            let pill = if state.answer_shown {
                "[Visible]"
            } else {
                "[Hidden (click / Space)]"
            };
            layout.push(Line::from(Span::styled(
                pill,
                Style::default().fg(Color::Cyan),
            )));
            if state.answer_shown {
                layout.push_wrapped(answer, width, Style::default().fg(Color::Green));
            } else {
                layout.push(Line::from(Span::styled(
                    HIDDEN_ANSWER,
                    Style::default().fg(Color::DarkGray),
                )));
            }
            let rows = layout.rows_since(start);
            layout.targets.push((start, rows, Action::ToggleRevealCurrent));
        }
    }

    layout
}

pub struct CardView<'a> {
    state: &'a CardState<'a>,
    scroll: &'a mut CardScroll,
    hit_map: &'a mut HitMap,
}

impl<'a> CardView<'a> {
    pub fn new(
        state: &'a CardState<'a>,
        scroll: &'a mut CardScroll,
        hit_map: &'a mut HitMap,
    ) -> Self {
        Self {
            state,
            scroll,
            hit_map,
        }
    }
}

impl Component for CardView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(format!(" Question ({}) ", self.state.kind))
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);

        let layout = build_layout(self.state, inner.width);
        let total = layout.lines.len();
        let height = inner.height as usize;
        let max_offset = total.saturating_sub(height);

        self.scroll.follow(self.state.position);
        self.scroll.clamp(max_offset);
        let top = self.scroll.offset();
        let bottom = top + height;

        for (start, rows, action) in layout.targets {
            let first = start.max(top);
            let last = (start + rows).min(bottom);
            if first >= last {
                continue;
            }
            let (Ok(y), Ok(h)) = (u16::try_from(first - top), u16::try_from(last - first))
            else {
                continue;
            };
            self.hit_map
                .push(Rect::new(inner.x, inner.y + y, inner.width, h), action);
        }

        let visible: Vec<Line<'static>> =
            layout.lines.into_iter().skip(top).take(height).collect();
        frame.render_widget(Paragraph::new(visible).block(block), area);

        if max_offset > 0 {
            let mut scrollbar_state = ScrollbarState::new(max_offset).position(top);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight),
                area.inner(Margin::new(0, 1)),
                &mut scrollbar_state,
            );
        }
    }
}
