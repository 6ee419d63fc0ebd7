//! Profile page renderer.
//!
//! Renders the header card (name, reading, company, position, category), an
//! optional introduction card, and an optional contact card.

use maud::{Markup, html};

use super::components::{Escaped, is_safe_url, page_shell};
use crate::repository::Profile;

/// One line under the name in the header card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeaderLine<'a> {
    class: Option<&'static str>,
    text: &'a str,
}

/// A contact entry in the contact card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContactLink<'a> {
    Email(&'a str),
    Phone(&'a str),
    Booking(&'a str),
}

/// Header lines for the profile, in display order. Absent fields are skipped.
fn header_lines(profile: &Profile) -> Vec<HeaderLine<'_>> {
    [
        (Some("furigana"), profile.furigana.as_deref()),
        (Some("company"), profile.company.as_deref()),
        (None, profile.position.as_deref()),
        (None, profile.category.as_deref()),
    ]
    .into_iter()
    .filter_map(|(class, text)| {
        text.filter(|t| !t.is_empty())
            .map(|text| HeaderLine { class, text })
    })
    .collect()
}

/// Contact links for the profile. Booking URLs without an http(s) scheme are dropped.
fn contact_links(profile: &Profile) -> Vec<ContactLink<'_>> {
    let email = profile.email.as_deref().map(ContactLink::Email);
    let phone = profile.phone.as_deref().map(ContactLink::Phone);
    let booking = profile
        .booking_url
        .as_deref()
        .filter(|url| {
            let safe = is_safe_url(url);
            if !safe {
                tracing::debug!(
                    slug = %profile.public_slug,
                    booking_url = %url,
                    "booking url has no http(s) scheme, not rendered"
                );
            }
            safe
        })
        .map(ContactLink::Booking);

    [email, phone, booking]
        .into_iter()
        .flatten()
        .filter(|link| !link.value().is_empty())
        .collect()
}

impl ContactLink<'_> {
    fn value(&self) -> &str {
        match *self {
            Self::Email(v) | Self::Phone(v) | Self::Booking(v) => v,
        }
    }

    fn render(&self) -> Markup {
        match *self {
            Self::Email(email) => html! {
                div { "Email: " a href={"mailto:" (Escaped(email))} { (Escaped(email)) } }
            },
            Self::Phone(phone) => html! {
                div { "Tel: " a href={"tel:" (Escaped(phone))} { (Escaped(phone)) } }
            },
            Self::Booking(url) => html! {
                div { a href=(Escaped(url)) target="_blank" rel="noopener noreferrer" { "▶ 1to1予約" } }
            },
        }
    }
}

/// Page description: "{company} {name} のプロフィール", company omitted when absent.
fn description(profile: &Profile) -> String {
    match profile.company.as_deref().filter(|c| !c.is_empty()) {
        Some(company) => format!("{company} {} のプロフィール", profile.name),
        None => format!("{} のプロフィール", profile.name),
    }
}

/// Render a complete profile page.
///
/// Pure: the same profile and site name always produce the same bytes.
pub fn render(profile: &Profile, site_name: &str) -> Markup {
    let title = format!("{} | プロフィール", profile.name);
    let description = description(profile);
    let lines = header_lines(profile);
    let contacts = contact_links(profile);
    let bio = profile.bio.as_deref().filter(|b| !b.is_empty());

    let body = html! {
        div class="card" {
            h1 { (Escaped(&profile.name)) }
            @for line in &lines {
                @if let Some(class) = line.class {
                    div class=(class) { (Escaped(line.text)) }
                } @else {
                    div { (Escaped(line.text)) }
                }
            }
        }

        @if let Some(bio) = bio {
            div class="card" {
                div class="section" {
                    div class="label" { "自己紹介" }
                    div class="bio" { (Escaped(bio)) }
                }
            }
        }

        @if !contacts.is_empty() {
            div class="card" {
                div class="section" {
                    div class="label" { "連絡先" }
                    @for link in &contacts {
                        (link.render())
                    }
                }
            }
        }
    };

    page_shell(&title, &description, body, site_name)
}
