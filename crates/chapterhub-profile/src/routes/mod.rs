//! Route definitions for the profile service.
//!
//! ## Routes
//!
//! - `GET /{slug}` - Public profile page
//!
//! Every path is handled the same way: the last segment is the slug. `/` and
//! paths ending in `/` have an empty slug and return 404.

mod profile;

use axum::Router;
use axum::routing::get;

use crate::state::AppState;

pub use profile::slug_from_path;

/// Build the complete profile service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(profile::profile_handler))
        .route("/{*path}", get(profile::profile_handler))
        .with_state(state)
}
