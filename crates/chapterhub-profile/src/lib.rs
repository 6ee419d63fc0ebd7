//! Chapter Hub Profile - public profile pages for chapter members.
//!
//! This crate serves one read-only HTML page per public profile. It is
//! stateless and meant to sit behind a CDN that honours `Cache-Control`.
//!
//! # Architecture
//!
//! - **Store**: PostgREST client for the Supabase `profiles` table
//! - **Repository**: Slug lookup with the visibility filter, validated into a typed `Profile`
//! - **Render**: Self-contained HTML page built with maud
//!
//! # URL Pattern
//!
//! ```text
//! GET /{slug}
//! ```
//!
//! The slug is the last path segment. Private profiles, unknown slugs and
//! store failures all return the same `404 Not Found`.
//!
//! # Security
//!
//! - Every field is HTML-escaped (`& < > " '`) in text and attribute positions
//! - Booking links must use `http://` or `https://`
//! - Strict Content-Security-Policy: no JavaScript, no external resources

pub mod config;
pub mod error;
pub mod render;
pub mod repository;
pub mod routes;
pub mod server;
pub mod state;
pub mod store;

pub use config::Config;
pub use repository::{Profile, find_public_profile};
pub use routes::router;
pub use state::AppState;
