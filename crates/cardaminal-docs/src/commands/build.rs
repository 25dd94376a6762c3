//! Static site build command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use cardaminal_docs_static::{BuildConfig, StaticBuilder};

use super::{load_site, public_dir};

/// Run the build command.
pub fn run(config_path: &Path, output: Option<PathBuf>, minify: Option<bool>) -> Result<()> {
    let site = load_site(config_path)?;

    tracing::info!("Building static site...");

    let settings = site.build();
    let config = BuildConfig {
        output_dir: output.unwrap_or_else(|| PathBuf::from(&settings.output)),
        minify: minify.unwrap_or(settings.minify),
        public_dir: Some(public_dir(config_path)),
    };

    let result = StaticBuilder::new(config, site).build()?;

    tracing::info!(
        "Built {} pages and {} assets in {}ms",
        result.pages,
        result.assets,
        result.duration_ms
    );

    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn builds_into_output_dir() {
        let temp = tempfile::tempdir().unwrap();
        let config = temp.path().join("docs.toml");
        let out = temp.path().join("site");
        fs::write(&config, cardaminal_docs_config::DEFAULT_CONFIG).unwrap();

        run(&config, Some(out.clone()), Some(false)).unwrap();

        let index = fs::read_to_string(out.join("index.html")).unwrap();
        assert!(index.contains("<title>Cardaminal</title>"));
    }

    #[test]
    fn invalid_config_writes_nothing() {
        let temp = tempfile::tempdir().unwrap();
        let config = temp.path().join("docs.toml");
        let out = temp.path().join("site");
        fs::write(&config, "[footer]\ntext = \"\"\n").unwrap();

        assert!(run(&config, Some(out.clone()), None).is_err());
        assert!(!out.exists());
    }
}
