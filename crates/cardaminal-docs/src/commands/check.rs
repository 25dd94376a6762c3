//! Validate the site configuration.

use std::path::Path;

use anyhow::Result;
use cardaminal_docs_config::PageContext;

use super::load_site;

/// Run the check command.
pub fn run(config_path: &Path) -> Result<()> {
    let site = load_site(config_path)?;
    let seo = site.seo(&PageContext::default());

    tracing::info!("Configuration is valid");
    tracing::info!("  site name:      {}", seo.site_name);
    tracing::info!("  title template: {}", seo.title_template);
    tracing::info!("  description:    {}", seo.description);
    tracing::info!("  theme:          {}", site.default_mode());
    tracing::info!("  project:        {}", site.project_link());
    tracing::info!("  chat:           {}", site.chat_link());
    tracing::info!("  edit base:      {}", site.docs_repository_base());

    Ok(())
}
