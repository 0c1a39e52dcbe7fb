use anyhow::{Context, Result};
use replicate_web::Config;

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    replicate_web::build(&config).context("Failed to build site")?;

    if config.open {
        let index_path = config.output.join("index.html");
        open::that(&index_path)
            .with_context(|| format!("Failed to open {}", index_path.display()))?;
    }

    Ok(())
}
