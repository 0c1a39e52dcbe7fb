//! Social platform icon rendering

use maud::{Markup, html};

/// Social platforms linked from team profiles.
///
/// Each variant maps to a fixed Font Awesome brand glyph. The site links
/// at most one profile per platform per person.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialPlatform {
    GitHub,
    Twitter,
    SoundCloud,
}

impl SocialPlatform {
    /// Returns Font Awesome brand class for the platform glyph.
    pub fn icon_class(self) -> &'static str {
        match self {
            SocialPlatform::GitHub => "fa-brands fa-github",
            SocialPlatform::Twitter => "fa-brands fa-twitter",
            SocialPlatform::SoundCloud => "fa-brands fa-soundcloud",
        }
    }

    /// Returns accessible label for profile links.
    pub fn label(self) -> &'static str {
        match self {
            SocialPlatform::GitHub => "GitHub",
            SocialPlatform::Twitter => "Twitter",
            SocialPlatform::SoundCloud => "SoundCloud",
        }
    }
}

/// Renders a profile link as an icon glyph
///
/// Generates an anchor wrapping the platform's Font Awesome icon. Used in
/// team profile bios where links are rendered as glyphs rather than text.
///
/// # Arguments
///
/// * `platform`: Social platform determining the glyph
/// * `href`: Profile URL
///
/// # Returns
///
/// Anchor markup containing the icon element
pub fn social_link(platform: SocialPlatform, href: &str) -> Markup {
    html! {
        a href=(href) class="link" aria-label=(platform.label()) {
            i class=(platform.icon_class()) {}
        }
    }
}
