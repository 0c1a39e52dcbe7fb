//! Page shell wrapper component

use maud::{DOCTYPE, Markup, html};

use super::footer::footer;

/// Title used when a page provides none.
pub const DEFAULT_TITLE: &str = "Replicate";

/// Viewport directive emitted into every document head.
const VIEWPORT: &str = "initial-scale=1.0, width=device-width";

/// Icon font stylesheet loaded for profile link glyphs.
const ICON_STYLESHEET: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css";

/// Resolves the document title for a page
///
/// Missing or empty titles fall back to the fixed site default, so the
/// rendered title is never empty.
///
/// # Arguments
///
/// * `title`: Optional page title
///
/// # Returns
///
/// The caller's title when non-empty, else the default
pub fn page_title(title: Option<&str>) -> &str {
    match title {
        Some(t) if !t.is_empty() => t,
        _ => DEFAULT_TITLE,
    }
}

/// Wraps page content with the shared page shell
///
/// Provides consistent DOCTYPE, html, head, and layout structure across
/// all pages. The shell handles document metadata (viewport and title) and
/// appends the fixed site footer after the caller's content. Content is
/// emitted verbatim; the shell does not inspect or transform it.
///
/// # Arguments
///
/// * `title`: Page title text; empty or absent falls back to the default
/// * `content`: Page-specific body markup, placed before the footer
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_shell(title: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content=(VIEWPORT);
                title { (page_title(title)) }
                link rel="stylesheet" href="/assets/site.css";
                link rel="stylesheet" href=(ICON_STYLESHEET);
            }
            body {
                div class="layout" {
                    (content)
                    (footer())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_title_uses_caller_value() {
        // Arrange & Act & Assert
        assert_eq!(page_title(Some("Docs")), "Docs");
        assert_eq!(page_title(Some("How it works")), "How it works");
    }

    #[test]
    fn test_page_title_defaults_when_absent() {
        // Arrange & Act & Assert
        assert_eq!(page_title(None), "Replicate");
    }

    #[test]
    fn test_page_title_defaults_when_empty() {
        // Arrange & Act & Assert: empty string is treated as absent
        assert_eq!(page_title(Some("")), "Replicate");
    }

    #[test]
    fn test_shell_emits_metadata() {
        // Arrange & Act
        let markup = page_shell(Some("Docs"), html! {}).into_string();

        // Assert
        assert!(markup.contains("<title>Docs</title>"), "Should set title");
        assert!(
            markup.contains("content=\"initial-scale=1.0, width=device-width\""),
            "Should emit viewport directive"
        );
        assert!(markup.contains("<!DOCTYPE html>"), "Should emit doctype");
    }

    #[test]
    fn test_shell_places_content_before_footer() {
        // Arrange
        let content = html! { p { "Hello" } };

        // Act
        let markup = page_shell(None, content).into_string();

        // Assert
        let content_pos = markup.find("<p>Hello</p>").expect("content present");
        let footer_pos = markup.find("<footer>").expect("footer present");
        assert!(
            content_pos < footer_pos,
            "Content should come before the footer"
        );
    }

    #[test]
    fn test_shell_with_empty_content() {
        // Arrange & Act: pages may supply no content at all
        let markup = page_shell(None, html! {}).into_string();

        // Assert
        assert!(
            markup.contains("<title>Replicate</title>"),
            "Default title should apply"
        );
        assert!(
            markup.contains("<footer>"),
            "Footer should render unaffected"
        );
    }
}
