//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

/// Command line configuration for the site generator.
#[derive(Debug, Clone, Parser)]
#[command(name = "replicate-web", version, about, long_about = None)]
pub struct Config {
    /// Docs directory containing markdown sources
    #[arg(default_value = "docs")]
    pub docs: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Open the generated site in a browser after building
    #[arg(long)]
    pub open: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// A missing docs directory is allowed (the landing page still builds),
    /// but a docs path that exists as a regular file is rejected.
    ///
    /// # Errors
    ///
    /// Returns error if the docs path exists and is not a directory.
    pub fn validate(&self) -> Result<()> {
        if self.docs.exists() && !self.docs.is_dir() {
            bail!("Docs path is not a directory: {}", self.docs.display());
        }

        Ok(())
    }
}
