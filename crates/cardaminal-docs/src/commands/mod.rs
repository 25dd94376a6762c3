//! CLI command implementations.

pub mod build;
pub mod check;
pub mod init;
pub mod serve;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use cardaminal_docs_config::SiteConfig;

/// Load and validate the site config, failing before anything renders.
pub fn load_site(config_path: &Path) -> Result<Arc<SiteConfig>> {
    let site = cardaminal_docs_config::load(config_path)
        .with_context(|| format!("Invalid site configuration in {}", config_path.display()))?;
    Ok(Arc::new(site))
}

/// `public/` next to the config file.
pub fn public_dir(config_path: &Path) -> std::path::PathBuf {
    config_path
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join("public")
}
