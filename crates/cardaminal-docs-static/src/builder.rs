//! Static site builder.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use walkdir::WalkDir;

use cardaminal_docs_config::SiteConfig;

use crate::assets::AssetPipeline;
use crate::pages::{render_page, Page};
use crate::templates::TemplateEngine;

/// Configuration for building a static site.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Output directory
    pub output_dir: PathBuf,

    /// Minify CSS output
    pub minify: bool,

    /// Directory copied verbatim into the output (images, favicons)
    pub public_dir: Option<PathBuf>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("dist"),
            minify: true,
            public_dir: None,
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of pages generated
    pub pages: usize,

    /// Number of asset files written or copied
    pub assets: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to read {path}: {message}")]
    ReadError { path: String, message: String },

    #[error("Failed to render {page}: {message}")]
    TemplateError { page: String, message: String },

    #[error("Failed to write {path}: {message}")]
    WriteError { path: String, message: String },
}

impl BuildError {
    fn write(path: &Path, e: impl ToString) -> Self {
        BuildError::WriteError {
            path: path.display().to_string(),
            message: e.to_string(),
        }
    }

    fn read(path: &Path, e: impl ToString) -> Self {
        BuildError::ReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        }
    }
}

/// Static site builder.
pub struct StaticBuilder {
    config: BuildConfig,
    site: Arc<SiteConfig>,
    templates: TemplateEngine,
}

impl StaticBuilder {
    /// Create a new static builder.
    pub fn new(config: BuildConfig, site: Arc<SiteConfig>) -> Self {
        Self {
            config,
            site,
            templates: TemplateEngine::new(),
        }
    }

    /// Build the static site.
    pub fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| BuildError::write(&self.config.output_dir, e))?;

        let mut pages = 0;
        for page in Page::ALL {
            self.build_page(page)?;
            pages += 1;
        }

        let mut assets = self.generate_assets()?;
        assets += self.copy_public()?;

        let duration = start.elapsed();

        Ok(BuildResult {
            pages,
            assets,
            duration_ms: duration.as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// Render a single page and write it out.
    fn build_page(&self, page: Page) -> Result<(), BuildError> {
        let html = render_page(&self.templates, &self.site, page).map_err(|e| {
            BuildError::TemplateError {
                page: page.output_file().to_string(),
                message: e.to_string(),
            }
        })?;

        let output_path = self.config.output_dir.join(page.output_file());
        fs::write(&output_path, html).map_err(|e| BuildError::write(&output_path, e))?;

        tracing::debug!("Wrote {}", output_path.display());

        Ok(())
    }

    /// Generate static assets.
    fn generate_assets(&self) -> Result<usize, BuildError> {
        let assets_dir = self.config.output_dir.join("assets");
        fs::create_dir_all(&assets_dir).map_err(|e| BuildError::write(&assets_dir, e))?;

        let css_path = assets_dir.join("main.css");
        fs::write(&css_path, AssetPipeline::stylesheet(self.config.minify))
            .map_err(|e| BuildError::write(&css_path, e))?;

        let js_path = assets_dir.join("main.js");
        fs::write(&js_path, AssetPipeline::generate_js())
            .map_err(|e| BuildError::write(&js_path, e))?;

        Ok(2)
    }

    /// Copy the public directory into the output, preserving layout.
    fn copy_public(&self) -> Result<usize, BuildError> {
        let Some(public_dir) = &self.config.public_dir else {
            return Ok(0);
        };

        if !public_dir.exists() {
            tracing::warn!("Public directory not found: {}", public_dir.display());
            return Ok(0);
        }

        let mut copied = 0;

        for entry in WalkDir::new(public_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();

            if !path.is_file() {
                continue;
            }

            let relative = path.strip_prefix(public_dir).unwrap_or(path);
            let target = self.config.output_dir.join(relative);

            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|e| BuildError::write(parent, e))?;
            }

            fs::copy(path, &target).map_err(|e| BuildError::read(path, e))?;
            copied += 1;
        }

        tracing::info!("Copied {} files from {}", copied, public_dir.display());

        Ok(copied)
    }
}
