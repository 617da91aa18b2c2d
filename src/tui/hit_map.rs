//! Click regions recorded during rendering.
//!
//! Every draw clears the map, and components push the rectangles they drew
//! clickable things into, tagged with the action a click should send.

use ratatui::layout::{Position, Rect};

use crate::core::action::Action;

#[derive(Debug, Default)]
pub struct HitMap {
    regions: Vec<(Rect, Action)>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Records a region. Empty rectangles are ignored.
    pub fn push(&mut self, area: Rect, action: Action) {
        if !area.is_empty() {
            self.regions.push((area, action));
        }
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Action for a click at `(column, row)`. Later regions win on overlap.
    pub fn action_at(&self, column: u16, row: u16) -> Option<Action> {
        let point = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(point))
            .map(|(_, action)| action.clone())
    }
}
