//! HTML rendering for public profile pages.
//!
//! All rendering uses [maud](https://maud.lambda.xyz/). Dynamic values go
//! through [`components::Escaped`] so every field gets the same five-character
//! escaping in text and attribute positions.

pub mod components;
pub mod profile;

use maud::Markup;

use crate::repository::Profile;

/// Render a profile into a complete, self-contained HTML document.
pub fn render_profile_page(profile: &Profile, site_name: &str) -> Markup {
    profile::render(profile, site_name)
}
