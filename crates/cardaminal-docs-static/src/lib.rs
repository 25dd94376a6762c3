//! Static site generator for the Cardaminal documentation site.
//!
//! Wraps views in the configured page shell (header, SEO head tags, footer,
//! theme) and writes the result to disk.

pub mod assets;
pub mod builder;
pub mod pages;
pub mod templates;

pub use builder::{BuildConfig, BuildError, BuildResult, StaticBuilder};
pub use pages::{render_page, Page};
pub use templates::{Context, TemplateEngine};
