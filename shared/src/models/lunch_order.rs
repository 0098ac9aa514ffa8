//! Lunch Order Model

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Questions asked about a lunch order, in the order they are shown.
///
/// The question text doubles as the key in the stored metadata object.
pub const LUNCH_ORDER_QUESTIONS: [&str; 5] = [
    "score (1-10)",
    "food ordered",
    "order again?",
    "visit outside of work?",
    "notes",
];

/// Lunch order entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LunchOrder {
    pub id: i64,
    pub restaurant: String,
    /// JSON object of question → answer, `None` when nothing was answered
    pub metadata: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Soft-delete flag, never set by the app itself
    #[serde(default)]
    pub is_deleted: bool,
}

/// Create lunch order payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LunchOrderCreate {
    pub restaurant: String,
    pub metadata: Option<String>,
}

impl LunchOrderCreate {
    /// Build a payload from answers given in [`LUNCH_ORDER_QUESTIONS`] order.
    ///
    /// Answers are trimmed and blank ones are left out of the metadata.
    pub fn from_answers<S: AsRef<str>>(restaurant: impl Into<String>, answers: &[S]) -> Self {
        Self {
            restaurant: restaurant.into(),
            metadata: encode_metadata(answers),
        }
    }

    /// Decoded metadata, empty when no question was answered
    pub fn answers(&self) -> BTreeMap<String, String> {
        decode_metadata(self.metadata.as_deref())
    }
}

impl LunchOrder {
    /// Decoded metadata, empty when no question was answered
    pub fn answers(&self) -> BTreeMap<String, String> {
        decode_metadata(self.metadata.as_deref())
    }
}

/// Pair each question with its trimmed answer and serialize the non-blank
/// pairs as a JSON object. Returns `None` if every answer is blank.
pub fn encode_metadata<S: AsRef<str>>(answers: &[S]) -> Option<String> {
    let data: BTreeMap<&str, &str> = LUNCH_ORDER_QUESTIONS
        .iter()
        .zip(answers)
        .filter_map(|(question, answer)| {
            let answer = answer.as_ref().trim();
            (!answer.is_empty()).then_some((*question, answer))
        })
        .collect();

    if data.is_empty() {
        return None;
    }
    serde_json::to_string(&data).ok()
}

fn decode_metadata(metadata: Option<&str>) -> BTreeMap<String, String> {
    metadata
        .and_then(|raw| serde_json::from_str(raw).ok())
        .unwrap_or_default()
}
