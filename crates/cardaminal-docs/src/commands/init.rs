//! Initialize the docs site configuration.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use cardaminal_docs_config::DEFAULT_CONFIG;

use super::public_dir;

/// Run the init command.
pub fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing docs site...");

    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!("Created {}", config_path.display());

    let public = public_dir(config_path);
    if !public.exists() {
        fs::create_dir_all(&public).context("Failed to create public directory")?;
        tracing::info!("Created {}", public.display());
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'cardaminal-docs serve' to preview the site.");

    Ok(())
}
