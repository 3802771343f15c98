mod handlers;
mod middleware;

use axum::{
    middleware::from_fn,
    routing::{delete, get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::store::NoteStore;

pub fn create_router(store: NoteStore) -> Router {
    let api = Router::new()
        .route("/notes", get(handlers::list_notes))
        .route("/notes", post(handlers::create_note))
        .route("/notes/{id}", get(handlers::get_note))
        .route("/notes/{id}", delete(handlers::delete_note));

    // The request logger is the outermost layer so every request is
    // logged before dispatch, matched or not. Both fallbacks route to
    // the same unknown-endpoint handler: an unregistered path and a
    // wrong method on a registered path answer identically.
    Router::new()
        .route("/", get(handlers::root))
        .nest("/api", api)
        .fallback(handlers::unknown_endpoint)
        .method_not_allowed_fallback(handlers::unknown_endpoint)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(from_fn(middleware::log_request))
        .with_state(store)
}
