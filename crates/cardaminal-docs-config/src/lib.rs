//! Site configuration for the Cardaminal documentation site.
//!
//! A [`SiteConfig`] is loaded once from `docs.toml`, validated as a whole and
//! then shared read-only by every render.

pub mod defaults;
pub mod error;
pub mod seo;
pub mod site;
pub mod theme;

pub use defaults::DEFAULT_CONFIG;
pub use error::{ConfigError, Diagnostics, Issue};
pub use seo::{PageContext, SeoMetadata};
pub use site::{load, BuildSettings, SiteConfig};
pub use theme::ThemeMode;
