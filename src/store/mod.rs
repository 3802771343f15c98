use std::sync::{Arc, Mutex};

use chrono::Utc;

use crate::models::Note;

/// In-memory note collection.
///
/// The store is the only owner of note state. Every operation takes the
/// single mutex, so inserts and removes serialize and the max+1 id rule
/// below cannot race. Cloning the store clones the handle, not the
/// notes; the router holds one clone per request via axum state.
///
/// Nothing is persisted. A restarted process starts from the seed
/// records again.
#[derive(Clone)]
pub struct NoteStore {
    notes: Arc<Mutex<Vec<Note>>>,
}

impl NoteStore {
    /// An empty store.
    pub fn empty() -> Self {
        Self {
            notes: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A store holding the three fixed records the server boots with.
    pub fn seeded() -> Self {
        Self {
            notes: Arc::new(Mutex::new(vec![
                seed_note(1, "HTML is easy", "2022-05-30T17:30:31.098Z", true),
                seed_note(
                    2,
                    "Browser can execute only Javascript",
                    "2022-05-30T18:39:34.091Z",
                    false,
                ),
                seed_note(
                    3,
                    "GET and POST are the most important methods of HTTP protocol",
                    "2022-05-30T19:20:14.298Z",
                    true,
                ),
            ])),
        }
    }

    /// All notes in insertion order.
    pub fn list(&self) -> Vec<Note> {
        let notes = self.notes.lock().expect("note store lock poisoned");
        notes.clone()
    }

    /// The note with the given id, if any. Linear scan; ids are unique
    /// so the first match is the only match.
    pub fn find(&self, id: u64) -> Option<Note> {
        let notes = self.notes.lock().expect("note store lock poisoned");
        notes.iter().find(|note| note.id == id).cloned()
    }

    /// Remove the note with the given id. Removing an absent id is a
    /// no-op, not an error.
    pub fn remove(&self, id: u64) {
        let mut notes = self.notes.lock().expect("note store lock poisoned");
        notes.retain(|note| note.id != id);
    }

    /// Insert a new note. The caller has already validated `content`;
    /// the store assigns the id and the creation timestamp.
    pub fn insert(&self, content: String, important: bool) -> Note {
        let mut notes = self.notes.lock().expect("note store lock poisoned");
        let note = Note {
            id: next_id(&notes),
            content,
            date: Utc::now(),
            important,
        };
        notes.push(note.clone());
        note
    }

    /// The id the next insert would receive.
    pub fn next_id(&self) -> u64 {
        let notes = self.notes.lock().expect("note store lock poisoned");
        next_id(&notes)
    }
}

/// Max existing id + 1, or 1 when the collection is empty. Ids deleted
/// from below the maximum are never handed out again; deleting the
/// maximum itself frees its id for the next insert.
fn next_id(notes: &[Note]) -> u64 {
    notes.iter().map(|note| note.id).max().unwrap_or(0) + 1
}

fn seed_note(id: u64, content: &str, date: &str, important: bool) -> Note {
    Note {
        id,
        content: content.to_string(),
        date: date.parse().expect("seed date is valid RFC 3339"),
        important,
    }
}
