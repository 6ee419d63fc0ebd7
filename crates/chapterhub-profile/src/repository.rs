//! Public profile lookup.
//!
//! Turns a slug into a validated [`Profile`]. A private profile and a
//! missing one both come back as [`ProfileError::NoSuchPublicProfile`].

use crate::error::ProfileError;
use crate::store::{ProfileRow, ProfileStore};

/// A public profile, validated and ready to render.
///
/// Optional fields are `None` when the store has no value or an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    /// Display name (never empty).
    pub name: String,
    /// Phonetic reading of the name.
    pub furigana: Option<String>,
    /// Company name.
    pub company: Option<String>,
    /// Job title.
    pub position: Option<String>,
    /// Business category.
    pub category: Option<String>,
    /// Free-text introduction.
    pub bio: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// External booking link.
    pub booking_url: Option<String>,
    /// Always `true` for profiles returned by [`find_public_profile`].
    pub is_public: bool,
    /// The slug the profile was looked up by.
    pub public_slug: String,
}

impl Profile {
    /// Validate a store row into a profile.
    ///
    /// `slug` is used when the row does not carry its own `public_slug`.
    pub fn from_row(row: ProfileRow, slug: &str) -> Result<Self, ProfileError> {
        let name = present(row.name)
            .ok_or_else(|| ProfileError::MalformedRecord(format!("profile {slug:?} has no name")))?;

        Ok(Self {
            name,
            furigana: present(row.furigana),
            company: present(row.company),
            position: present(row.position),
            category: present(row.category),
            bio: present(row.bio),
            email: present(row.email),
            phone: present(row.phone),
            booking_url: present(row.booking_url),
            is_public: row.is_public.unwrap_or(false),
            public_slug: row.public_slug.unwrap_or_else(|| slug.to_string()),
        })
    }
}

/// Empty strings count as absent.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Look up the public profile for `slug`.
///
/// The slug must be non-empty; it is passed to the store verbatim.
pub async fn find_public_profile(
    store: &dyn ProfileStore,
    slug: &str,
) -> Result<Profile, ProfileError> {
    if slug.is_empty() {
        return Err(ProfileError::EmptySlug);
    }

    let mut rows = store.select_public_profiles(slug).await?;

    // Re-check visibility; a store that ignores the filter must not leak.
    rows.retain(|row| row.is_public == Some(true));

    if rows.len() > 1 {
        return Err(ProfileError::AmbiguousSlug {
            slug: slug.to_string(),
            count: rows.len(),
        });
    }

    let row = rows.pop().ok_or(ProfileError::NoSuchPublicProfile)?;
    Profile::from_row(row, slug)
}
