//! # Card Normalizer
//!
//! Turns loosely-typed JSON records into canonical [`Card`] values.
//!
//! Parsing is permissive: a malformed record becomes a card of its inferred
//! kind with default fields instead of failing the whole load. Nothing in
//! here returns an error.
//!
//! ```text
//! { "cards": [ record, ... ] }
//!        │
//!        ▼  parse_document
//!   [ record, ... ] ──normalize──▶ [ Card, ... ]
//! ```

use serde_json::Value;

use crate::core::card::{Card, CardKind, PROMPT_PLACEHOLDER};

/// Decides the kind of a raw record. First matching rule wins.
pub fn infer_kind(record: &Value) -> CardKind {
    if let Some(kind) = record
        .get("type")
        .and_then(Value::as_str)
        .and_then(CardKind::from_tag)
    {
        return kind;
    }

    let has_choices = record.get("choices").is_some_and(Value::is_array);
    let integral_index = record.get("answerIndex").is_some_and(is_integral);
    if has_choices && integral_index {
        return CardKind::Mcq;
    }

    if record.get("answer").is_some_and(Value::is_boolean) {
        return CardKind::Tf;
    }

    // A text `a` and the fallback both land on open.
    CardKind::Open
}

/// Produces a canonical card from any JSON value.
pub fn normalize(record: &Value) -> Card {
    let prompt = match field(record, "q") {
        Some(q) => to_text(q),
        None => PROMPT_PLACEHOLDER.to_string(),
    };

    match infer_kind(record) {
        CardKind::Mcq => Card::Mcq {
            prompt,
            choices: field(record, "choices")
                .and_then(Value::as_array)
                .map(|items| items.iter().map(to_text).collect())
                .unwrap_or_default(),
            answer_index: field(record, "answerIndex").map_or(0, to_integer),
        },
        CardKind::Tf => Card::Tf {
            prompt,
            answer: record.get("answer").is_some_and(is_truthy),
        },
        CardKind::Open => Card::Open {
            prompt,
            answer: field(record, "a").map(to_text).unwrap_or_default(),
        },
    }
}

/// Normalizes every record, preserving order.
pub fn normalize_deck(records: &[Value]) -> Vec<Card> {
    records.iter().map(normalize).collect()
}

/// Reads the `cards` list out of a loaded document.
///
/// A document without a `cards` array (or one that is not an object at all)
/// is an empty deck, not an error.
pub fn parse_document(document: &Value) -> Vec<Card> {
    document
        .get("cards")
        .and_then(Value::as_array)
        .map(|records| normalize_deck(records))
        .unwrap_or_default()
}

/// Looks up a field, treating an explicit `null` the same as absence.
fn field<'a>(record: &'a Value, key: &str) -> Option<&'a Value> {
    record.get(key).filter(|v| !v.is_null())
}

fn is_integral(value: &Value) -> bool {
    match value {
        Value::Number(n) => {
            n.is_i64() || n.is_u64() || n.as_f64().is_some_and(|f| f.is_finite() && f.fract() == 0.0)
        }
        _ => false,
    }
}

fn to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

fn to_integer(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Value::String(s) => {
            let trimmed = s.trim();
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| {
                    trimmed
                        .parse::<f64>()
                        .ok()
                        .filter(|f| f.is_finite())
                        .map(|f| f.trunc() as i64)
                })
                .unwrap_or(0)
        }
        Value::Bool(b) => i64::from(*b),
        _ => 0,
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
