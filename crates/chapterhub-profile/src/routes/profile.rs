//! Profile page route handler.
//!
//! Handles `GET /{slug}`, where the slug is the last segment of the path.

use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};

use crate::error::ProfileError;
use crate::render;
use crate::repository;
use crate::state::AppState;

/// Handle a profile page request.
///
/// 1. Takes the slug from the last path segment
/// 2. Looks up the public profile for it
/// 3. Renders the page and returns it with cache and security headers
///
/// Any failure becomes the same 404.
pub async fn profile_handler(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Response, ProfileError> {
    let slug = slug_from_path(uri.path());
    if slug.is_empty() {
        return Err(ProfileError::EmptySlug);
    }

    let profile = repository::find_public_profile(state.store.as_ref(), slug).await?;

    tracing::debug!(slug = %slug, "rendering profile");
    let html = render::render_profile_page(&profile, &state.config.site_name).into_string();

    Ok(build_response(html, state.config.cache_max_age))
}

/// The final `/`-separated segment of a path, taken verbatim.
///
/// `/a/b` gives `b`; `/a/` and `/` give an empty slug.
pub fn slug_from_path(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or_default()
}

/// Build an HTTP response with HTML content and security/cache headers.
fn build_response(html: String, max_age: u32) -> Response {
    let mut headers = HeaderMap::new();

    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );
    if let Ok(val) = HeaderValue::from_str(&cache_control(max_age)) {
        headers.insert(header::CACHE_CONTROL, val);
    }

    // Security headers
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(render::components::CSP_HEADER),
    );
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );

    (StatusCode::OK, headers, html).into_response()
}

/// `Cache-Control` value letting shared caches reuse the page for `max_age` seconds.
fn cache_control(max_age: u32) -> String {
    format!("public, max-age={max_age}")
}
