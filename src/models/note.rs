use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A note held by the in-memory store.
///
/// Ids are positive integers assigned by the store and immutable once
/// assigned. `date` records when the note was created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: u64,
    pub content: String,
    pub date: DateTime<Utc>,
    pub important: bool,
}

/// Input for creating a note.
///
/// `content` stays optional at the schema level so an absent field and
/// an empty string can be rejected with the same error by the route
/// handler. `important` defaults to `false` when omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNoteInput {
    pub content: Option<String>,
    #[serde(default)]
    pub important: bool,
}
