//! Production firewall for admin-only routes.
//!
//! The keyword management endpoints exist for the local content pipeline
//! only. When `ADMIN_ENABLED` is off (the production default) the whole
//! subtree answers with a plain 404 -- indistinguishable from a route that
//! does not exist -- plus an `X-Robots-Tag` so crawlers drop anything they
//! ever saw there.

use axum::extract::{Request, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Reject admin routes unless the deployment explicitly enables them.
pub async fn require_admin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if state.config.admin_enabled {
        return next.run(request).await;
    }

    tracing::debug!(path = %request.uri().path(), "Admin route blocked");

    let mut response = StatusCode::NOT_FOUND.into_response();
    response.headers_mut().insert(
        "x-robots-tag",
        HeaderValue::from_static("noindex, nofollow, noarchive, nosnippet"),
    );
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static("no-store, must-revalidate"),
    );
    response
}
