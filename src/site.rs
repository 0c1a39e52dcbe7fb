//! Site build orchestration

use anyhow::{Context, Result};
use std::fs;

use crate::assets::write_css_assets;
use crate::config::Config;
use crate::pages;

/// Builds the complete site into the output directory
///
/// Creates the output layout, writes the CSS bundle, generates the landing
/// page, and renders every markdown source in the docs directory to a docs
/// page. A missing docs directory is reported as a warning and skipped.
///
/// # Arguments
///
/// * `config`: Build configuration
///
/// # Errors
///
/// Returns error if output directories cannot be created or any page
/// fails to render or write.
pub fn build(config: &Config) -> Result<()> {
    fs::create_dir_all(&config.output).context("Failed to create output directory")?;

    let assets_dir = config.output.join("assets");
    fs::create_dir_all(&assets_dir).context("Failed to create assets directory")?;
    write_css_assets(&assets_dir)?;

    let index_path = config.output.join("index.html");
    fs::write(&index_path, pages::index::generate().into_string())
        .with_context(|| format!("Failed to write landing page to {}", index_path.display()))?;
    println!("Generated: {}", index_path.display());

    if !config.docs.is_dir() {
        eprintln!(
            "Warning: docs directory not found, skipping docs pages: {}",
            config.docs.display()
        );
        return Ok(());
    }

    let docs_dir = config.output.join("docs");
    fs::create_dir_all(&docs_dir).context("Failed to create docs output directory")?;

    let mut sources: Vec<_> = fs::read_dir(&config.docs)
        .with_context(|| format!("Failed to read docs directory: {}", config.docs.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().and_then(|e| e.to_str()) == Some("md"))
        .collect();
    sources.sort();

    let mut docs_count = 0;
    for source in &sources {
        let Some(stem) = source.file_stem().and_then(|s| s.to_str()) else {
            eprintln!(
                "Warning: Skipping docs source with invalid UTF-8 name: {}",
                source.display()
            );
            continue;
        };

        let html = pages::docs::generate_from_file(source)
            .with_context(|| format!("Failed to generate docs page for {}", source.display()))?;

        let page_path = docs_dir.join(format!("{}.html", stem));
        fs::write(&page_path, html.into_string())
            .with_context(|| format!("Failed to write docs page {}", page_path.display()))?;

        docs_count += 1;
    }

    println!("Generated {} docs pages", docs_count);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn test_config(docs: PathBuf, output: PathBuf) -> Config {
        Config {
            docs,
            output,
            open: false,
        }
    }

    #[test]
    fn test_build_without_docs_dir() {
        // Arrange
        let out = tempfile::tempdir().expect("Should create temp directory");
        let config = test_config(PathBuf::from("no/such/docs"), out.path().join("dist"));

        // Act
        let result = build(&config);

        // Assert
        assert!(result.is_ok(), "Build should succeed without docs");
        assert!(
            config.output.join("index.html").exists(),
            "Landing page should be written"
        );
        assert!(
            config.output.join("assets/site.css").exists(),
            "CSS bundle should be written"
        );
        assert!(
            !config.output.join("docs").exists(),
            "No docs output without sources"
        );
    }

    #[test]
    fn test_build_with_docs_sources() {
        // Arrange
        let root = tempfile::tempdir().expect("Should create temp directory");
        let docs = root.path().join("docs");
        fs::create_dir_all(&docs).expect("Should create docs directory");
        fs::write(docs.join("index.md"), "# Docs\n\nWelcome.\n").expect("Should write source");
        fs::write(docs.join("how-it-works.md"), "# How it works\n\nDetails.\n")
            .expect("Should write source");
        fs::write(docs.join("notes.txt"), "not markdown").expect("Should write source");

        let config = test_config(docs, root.path().join("dist"));

        // Act
        let result = build(&config);

        // Assert
        assert!(result.is_ok(), "Build should succeed");
        assert!(
            config.output.join("docs/index.html").exists(),
            "index.md should become docs/index.html"
        );
        assert!(
            config.output.join("docs/how-it-works.html").exists(),
            "Each markdown source should become a docs page"
        );
        assert!(
            !config.output.join("docs/notes.html").exists(),
            "Non-markdown sources should be ignored"
        );
    }

    #[test]
    fn test_build_is_reproducible() {
        // Arrange
        let root = tempfile::tempdir().expect("Should create temp directory");
        let docs = root.path().join("docs");
        fs::create_dir_all(&docs).expect("Should create docs directory");
        fs::write(docs.join("index.md"), "# Docs\n").expect("Should write source");

        let config = test_config(docs, root.path().join("dist"));

        // Act
        build(&config).expect("First build should succeed");
        let first = fs::read_to_string(config.output.join("index.html")).expect("read");
        build(&config).expect("Second build should succeed");
        let second = fs::read_to_string(config.output.join("index.html")).expect("read");

        // Assert
        assert_eq!(first, second, "Rebuilding should produce identical output");
    }
}
