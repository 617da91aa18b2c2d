//! # Cards
//!
//! The canonical card model. A card is exactly one of three kinds, and only
//! the fields of that kind exist. Loosely-typed input never reaches this
//! type directly; it goes through [`crate::core::normalize`] first.
//!
//! Cards serialize back to the same wire shape the normalizer reads, so a
//! normalized deck can be written out and loaded again unchanged.

use serde::Serialize;
use std::fmt;

/// Placeholder prompt for records without a `q` field.
pub const PROMPT_PLACEHOLDER: &str = "—";

/// The three card kinds, as written in the `type` field of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    Mcq,
    Tf,
    Open,
}

impl CardKind {
    /// Parses a declared `type` tag. Unknown tags return `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "mcq" => Some(CardKind::Mcq),
            "tf" => Some(CardKind::Tf),
            "open" => Some(CardKind::Open),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            CardKind::Mcq => "mcq",
            CardKind::Tf => "tf",
            CardKind::Open => "open",
        }
    }
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Card {
    /// Multiple choice. `answer_index` is 0-based and may point outside
    /// `choices` when the source data is malformed.
    Mcq {
        #[serde(rename = "q")]
        prompt: String,
        choices: Vec<String>,
        #[serde(rename = "answerIndex")]
        answer_index: i64,
    },
    /// True/false.
    Tf {
        #[serde(rename = "q")]
        prompt: String,
        answer: bool,
    },
    /// Open-ended, answer hidden until revealed. Not gradable.
    Open {
        #[serde(rename = "q")]
        prompt: String,
        #[serde(rename = "a")]
        answer: String,
    },
}

impl Card {
    pub fn kind(&self) -> CardKind {
        match self {
            Card::Mcq { .. } => CardKind::Mcq,
            Card::Tf { .. } => CardKind::Tf,
            Card::Open { .. } => CardKind::Open,
        }
    }

    pub fn prompt(&self) -> &str {
        match self {
            Card::Mcq { prompt, .. } | Card::Tf { prompt, .. } | Card::Open { prompt, .. } => {
                prompt
            }
        }
    }

    /// Number of selectable options: choices for mcq, two for tf, none for open.
    pub fn option_count(&self) -> usize {
        match self {
            Card::Mcq { choices, .. } => choices.len(),
            Card::Tf { .. } => 2,
            Card::Open { .. } => 0,
        }
    }
}
