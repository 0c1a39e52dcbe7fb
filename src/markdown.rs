//! Markdown rendering with GitHub Flavored Markdown support.

use anyhow::{Context, Result};
use comrak::Options;
use std::path::Path;

/// Renders docs markdown sources to HTML.
///
/// Provides GFM extensions including tables, strikethrough, autolinks,
/// task lists, footnotes, and description lists. Raw HTML passes through
/// unchanged; docs sources are trusted local content.
pub struct MarkdownRenderer<'a> {
    options: Options<'a>,
}

impl<'a> MarkdownRenderer<'a> {
    /// Creates renderer with GitHub Flavored Markdown options.
    pub fn new() -> Self {
        let mut options = Options::default();

        // Extension options (GFM features)
        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;
        options.extension.footnotes = true;
        options.extension.description_lists = true;

        // Parse options (smart punctuation)
        options.parse.smart = true;

        // Render options (docs sources are trusted)
        options.render.unsafe_ = true;

        Self { options }
    }

    /// Renders markdown content to an HTML string.
    ///
    /// # Arguments
    ///
    /// * `content`: Markdown content to render
    pub fn render(&self, content: &str) -> String {
        comrak::markdown_to_html(content, &self.options)
    }

    /// Renders markdown file at given path.
    ///
    /// Convenience method that reads the file and renders its content.
    ///
    /// # Arguments
    ///
    /// * `path`: Path to markdown file
    ///
    /// # Returns
    ///
    /// Rendered HTML string
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read
    pub fn render_file(&self, path: impl AsRef<Path>) -> Result<String> {
        let content = std::fs::read_to_string(path.as_ref()).with_context(|| {
            format!("Failed to read markdown file: {}", path.as_ref().display())
        })?;
        Ok(self.render(&content))
    }
}

impl<'a> Default for MarkdownRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}
