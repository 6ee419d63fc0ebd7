//! Profile store access.
//!
//! The store is the Supabase `profiles` table, reached through its PostgREST
//! endpoint. Every lookup is a point query on `public_slug` with the
//! `is_public = true` filter applied server-side.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, header};
use serde::Deserialize;

/// Columns fetched for a profile page. Nothing else leaves the store.
pub const PROFILE_COLUMNS: &str =
    "name,furigana,company,position,category,bio,email,phone,booking_url,is_public";

/// Row limit sent with every lookup. Two is enough to detect a duplicated slug.
const LOOKUP_LIMIT: &str = "2";

/// A row from the `profiles` table, as returned by the store.
///
/// Every column is optional here; [`crate::repository`] decides what a
/// well-formed profile is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProfileRow {
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Phonetic reading of the name.
    #[serde(default)]
    pub furigana: Option<String>,
    /// Company name.
    #[serde(default)]
    pub company: Option<String>,
    /// Job title.
    #[serde(default)]
    pub position: Option<String>,
    /// Business category.
    #[serde(default)]
    pub category: Option<String>,
    /// Free-text introduction; may contain newlines.
    #[serde(default)]
    pub bio: Option<String>,
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
    /// Contact phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// External 1-to-1 booking link.
    #[serde(default)]
    pub booking_url: Option<String>,
    /// Visibility flag.
    #[serde(default)]
    pub is_public: Option<bool>,
    /// Lookup key. Not selected from the store; only set for in-memory rows.
    #[serde(default)]
    pub public_slug: Option<String>,
}

/// Errors talking to the profile store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The request never produced a response (DNS, TLS, connection reset...).
    #[error("store transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The store answered with a non-success status.
    #[error("store returned {status}: {body}")]
    Status {
        /// HTTP status from the store.
        status: StatusCode,
        /// Response body, truncated for logging.
        body: String,
    },

    /// The store answered but the body was not a list of profile rows.
    #[error("store response could not be decoded: {0}")]
    Decode(#[source] serde_json::Error),
}

impl StoreError {
    /// Whether the store could not be reached at all.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

/// Read-only access to the profile store.
///
/// Implementations must apply both predicates: exact `public_slug` match and
/// `is_public = true`.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch the public profiles whose slug equals `slug`.
    ///
    /// Returns at most a couple of rows; callers treat more than one as an error.
    async fn select_public_profiles(&self, slug: &str) -> Result<Vec<ProfileRow>, StoreError>;
}

/// PostgREST client for the Supabase `profiles` table.
///
/// Built once at startup and shared by every request.
#[derive(Clone)]
pub struct SupabaseStore {
    http: Client,
    profiles_url: String,
    api_key: String,
}

impl std::fmt::Debug for SupabaseStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseStore")
            .field("profiles_url", &self.profiles_url)
            .finish_non_exhaustive()
    }
}

impl SupabaseStore {
    /// Create a client for the project at `base_url` using `api_key` for both
    /// the `apikey` and bearer headers.
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self::with_client(Client::new(), base_url, api_key)
    }

    /// Create a client reusing an existing `reqwest::Client`.
    pub fn with_client(http: Client, base_url: &str, api_key: &str) -> Self {
        Self {
            http,
            profiles_url: profiles_endpoint(base_url),
            api_key: api_key.to_string(),
        }
    }

    /// The REST endpoint queried for profiles.
    pub fn profiles_url(&self) -> &str {
        &self.profiles_url
    }
}

#[async_trait]
impl ProfileStore for SupabaseStore {
    async fn select_public_profiles(&self, slug: &str) -> Result<Vec<ProfileRow>, StoreError> {
        let response = self
            .http
            .get(&self.profiles_url)
            .query(&lookup_query(slug))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(StoreError::Transport)?;

        let status = response.status();
        let body = response.text().await.map_err(StoreError::Transport)?;

        if !status.is_success() {
            return Err(StoreError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        decode_rows(&body)
    }
}

/// Build the PostgREST endpoint for the `profiles` table.
fn profiles_endpoint(base_url: &str) -> String {
    format!("{}/rest/v1/profiles", base_url.trim_end_matches('/'))
}

/// Query parameters for a public-profile lookup.
fn lookup_query(slug: &str) -> [(&'static str, String); 4] {
    [
        ("select", PROFILE_COLUMNS.to_string()),
        ("public_slug", format!("eq.{slug}")),
        ("is_public", "eq.true".to_string()),
        ("limit", LOOKUP_LIMIT.to_string()),
    ]
}

/// Decode a PostgREST JSON array of rows.
fn decode_rows(body: &str) -> Result<Vec<ProfileRow>, StoreError> {
    serde_json::from_str(body).map_err(StoreError::Decode)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 256;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

/// In-process store holding a fixed set of rows.
///
/// Applies the same predicates as the PostgREST query, so it can stand in for
/// the real store in tests.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    rows: Vec<ProfileRow>,
}

#[cfg(test)]
impl MemoryStore {
    /// Create a store from rows; each row should carry its `public_slug`.
    pub fn new(rows: Vec<ProfileRow>) -> Self {
        Self { rows }
    }
}

#[cfg(test)]
#[async_trait]
impl ProfileStore for MemoryStore {
    async fn select_public_profiles(&self, slug: &str) -> Result<Vec<ProfileRow>, StoreError> {
        Ok(self
            .rows
            .iter()
            .filter(|row| row.public_slug.as_deref() == Some(slug))
            .filter(|row| row.is_public == Some(true))
            .take(2)
            .cloned()
            .collect())
    }
}
