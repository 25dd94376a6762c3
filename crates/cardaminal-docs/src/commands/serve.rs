//! Preview server command.

use std::path::Path;

use anyhow::Result;
use cardaminal_docs_config::SiteConfig;
use cardaminal_docs_server::{DocsServer, ServerConfig};

use super::{load_site, public_dir};

/// Run the serve command.
pub async fn run(config_path: &Path, port: u16, open: bool) -> Result<()> {
    let site = load_site(config_path)?;
    let config = server_config(config_path, &site, port, open);

    tracing::info!("Base URL: {}", site.build().base_url);

    DocsServer::new(config, site).start().await?;

    Ok(())
}

/// Server settings from CLI flags and the `[build]` table.
fn server_config(config_path: &Path, site: &SiteConfig, port: u16, open: bool) -> ServerConfig {
    let public = public_dir(config_path);

    ServerConfig {
        port,
        open,
        public_dir: public.exists().then_some(public),
        minify: site.build().minify,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn uses_build_settings() {
        let temp = tempfile::tempdir().unwrap();
        let config_path = temp.path().join("docs.toml");
        let site = SiteConfig::cardaminal().unwrap();

        let config = server_config(&config_path, &site, 8080, false);

        assert_eq!(config.port, 8080);
        assert!(!config.open);
        assert!(config.minify);
        assert_eq!(config.public_dir, None);
    }

    #[test]
    fn picks_up_public_dir_and_minify_off() {
        let temp = tempfile::tempdir().unwrap();
        let config_path = temp.path().join("docs.toml");
        fs::create_dir_all(temp.path().join("public")).unwrap();

        let toml = cardaminal_docs_config::DEFAULT_CONFIG.replace("minify = true", "minify = false");
        let site = SiteConfig::from_toml_str(&toml).unwrap();

        let config = server_config(&config_path, &site, 4000, true);

        assert!(!config.minify);
        assert_eq!(config.public_dir, Some(temp.path().join("public")));
    }
}
