//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

const BASE: &str = include_str!("../assets/base.css");
const FOOTER: &str = include_str!("../assets/components/footer.css");

const INDEX_PAGE: &str = include_str!("../assets/page-index.css");
const MARKDOWN: &str = include_str!("../assets/markdown.css");

/// Writes the bundled site stylesheet to output directory
pub fn write_css_assets(assets_dir: &Path) -> Result<()> {
    write_bundled(assets_dir, "site.css", &[BASE, FOOTER, INDEX_PAGE, MARKDOWN])?;
    Ok(())
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let css = parts.join("\n");
    fs::write(dir.join(name), css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    Ok(())
}
