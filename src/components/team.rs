//! Core team profile components

use maud::{Markup, html};

use super::icons::{SocialPlatform, social_link};

/// External reference shown after the profile cards.
const ARXIV_VANITY_URL: &str = "https://www.arxiv-vanity.com/";

/// A single team member profile.
///
/// Profiles are fixed site content: a portrait image path, a name, a
/// one-line bio, and up to two social profile links rendered as glyphs.
pub struct Profile {
    pub name: &'static str,
    pub bio: &'static str,
    pub image: &'static str,
    pub links: &'static [(SocialPlatform, &'static str)],
}

/// The two core team profiles rendered in the footer.
pub const CORE_TEAM: [Profile; 2] = [
    Profile {
        name: "Ben Firshman",
        bio: "Product at Docker, creator of Docker\u{a0}Compose.",
        image: "/images/ben.jpg",
        links: &[
            (SocialPlatform::GitHub, "https://github.com/bfirsh"),
            (SocialPlatform::Twitter, "https://twitter.com/bfirsh"),
        ],
    },
    Profile {
        name: "Andreas Jansson",
        bio: "ML infrastructure and research at\u{a0}Spotify.",
        image: "/images/andreas.jpg",
        links: &[(SocialPlatform::GitHub, "https://github.com/andreasjansson")],
    },
];

/// Renders a single profile figure
///
/// Displays the portrait as a background-image div with the name and bio
/// below, profile links appended to the bio as icon glyphs.
///
/// # Arguments
///
/// * `profile`: Profile data to render
///
/// # Returns
///
/// Figure markup for one team member
pub fn profile_card(profile: &Profile) -> Markup {
    html! {
        figure {
            div style=(format!("background-image: url({})", profile.image)) {}
            figcaption {
                h4 { (profile.name) }
                p {
                    (profile.bio)
                    @for (platform, href) in profile.links {
                        (social_link(*platform, href))
                    }
                }
            }
        }
    }
}

/// Renders the core team block
///
/// Heading, the two profile cards, and a closing paragraph referencing
/// arXiv Vanity. All content is fixed.
///
/// # Returns
///
/// Core team section markup
pub fn core_team() -> Markup {
    html! {
        div id="team" {
            h3 { "Core team" }
            div class="us" {
                @for profile in &CORE_TEAM {
                    (profile_card(profile))
                }
            }
            p {
                "We also built "
                a href=(ARXIV_VANITY_URL) { "arXiv Vanity" }
                ", which lets you read arXiv papers as responsive web pages."
            }
        }
    }
}
