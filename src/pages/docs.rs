//! Docs page generation

use anyhow::{Context, Result};
use maud::{Markup, PreEscaped, html};
use std::path::Path;

use crate::components::layout::page_shell;
use crate::markdown::MarkdownRenderer;

/// Generates a docs page from pre-rendered HTML
///
/// Wraps the rendered docs body in the page shell with the given title.
///
/// # Arguments
///
/// * `title`: Document title for the page
/// * `body_html`: Rendered docs content
///
/// # Returns
///
/// Complete HTML markup for the docs page
pub fn generate(title: &str, body_html: &str) -> Markup {
    page_shell(
        Some(title),
        html! {
            article class="docs-content" {
                (PreEscaped(body_html))
            }
        },
    )
}

/// Generates a docs page from a markdown source file
///
/// Reads the file, renders it as GitHub Flavored Markdown, and wraps the
/// result in the page shell. The page title is taken from the document's
/// first level-1 heading, falling back to the file stem.
///
/// # Arguments
///
/// * `path`: Path to the markdown source
///
/// # Returns
///
/// Complete HTML markup for the docs page
///
/// # Errors
///
/// Returns error if the file cannot be read
pub fn generate_from_file(path: impl AsRef<Path>) -> Result<Markup> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read docs source: {}", path.display()))?;

    let fallback = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Docs");
    let title = extract_title(&content).unwrap_or(fallback);

    let renderer = MarkdownRenderer::new();
    let body = renderer.render(&content);

    Ok(generate(title, &body))
}

/// Extracts the document title from markdown content
///
/// Returns the text of the first level-1 ATX heading, if any.
///
/// # Arguments
///
/// * `content`: Markdown source
fn extract_title(content: &str) -> Option<&str> {
    content.lines().find_map(|line| {
        let line = line.trim_start();
        line.strip_prefix("# ").map(str::trim).filter(|t| !t.is_empty())
    })
}
