//! Request logging middleware.

use axum::{
    body::Body,
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::Response,
};

/// Log method, path and body for every incoming request before it is
/// dispatched. The body has to be buffered to be logged, so it is read
/// fully here and handed back to the router as a new body.
pub async fn log_request(request: Request, next: Next) -> Result<Response, StatusCode> {
    let (parts, body) = request.into_parts();

    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .map_err(|_| StatusCode::BAD_REQUEST)?;

    tracing::info!(
        method = %parts.method,
        path = %parts.uri.path(),
        body = %String::from_utf8_lossy(&bytes),
        "incoming request"
    );

    let request = Request::from_parts(parts, Body::from(bytes));
    Ok(next.run(request).await)
}
