use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::{CreateNoteInput, Note};
use crate::store::NoteStore;

// ============================================================
// Error Handling
// ============================================================

/// Route-level failures. Every failure maps to a status code plus,
/// where the surface defines one, a small JSON object with an `error`
/// field. No internal detail reaches the client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// POST body had no usable `content` field.
    #[error("content missing")]
    ContentMissing,
    /// GET by id matched nothing. The response body stays empty.
    #[error("note not found")]
    NoteNotFound,
    /// No registered route matched the request.
    #[error("unknown endpoint")]
    UnknownEndpoint,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::ContentMissing => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": "content missing" })),
            )
                .into_response(),
            ApiError::NoteNotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::UnknownEndpoint => (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "error": "unknown endpoint" })),
            )
                .into_response(),
        }
    }
}

/// Parse an id path segment. A non-numeric segment yields `None`,
/// which callers treat exactly like an id that matches no note: GET
/// answers 404 and DELETE stays a 204 no-op.
fn parse_id(segment: &str) -> Option<u64> {
    segment.parse().ok()
}

// ============================================================
// Routes
// ============================================================

pub async fn root() -> Html<&'static str> {
    Html("<h1>Hello World!</h1>")
}

pub async fn list_notes(State(store): State<NoteStore>) -> Json<Vec<Note>> {
    Json(store.list())
}

pub async fn get_note(
    State(store): State<NoteStore>,
    Path(id): Path<String>,
) -> Result<Json<Note>, ApiError> {
    parse_id(&id)
        .and_then(|id| store.find(id))
        .map(Json)
        .ok_or(ApiError::NoteNotFound)
}

/// Idempotent delete: 204 whether the note existed, was already gone,
/// or the id segment was not numeric at all.
pub async fn delete_note(State(store): State<NoteStore>, Path(id): Path<String>) -> StatusCode {
    if let Some(id) = parse_id(&id) {
        store.remove(id);
    }
    StatusCode::NO_CONTENT
}

pub async fn create_note(
    State(store): State<NoteStore>,
    Json(input): Json<CreateNoteInput>,
) -> Result<Json<Note>, ApiError> {
    // Absent field and empty string are the same client error.
    let content = input
        .content
        .filter(|content| !content.is_empty())
        .ok_or(ApiError::ContentMissing)?;

    Ok(Json(store.insert(content, input.important)))
}

pub async fn unknown_endpoint() -> ApiError {
    ApiError::UnknownEndpoint
}
