//! Pages the site renders and how each maps to a view and template.

use cardaminal_docs_config::{PageContext, SiteConfig};
use cardaminal_docs_view::{landing_view, not_found_view};

use crate::templates::{Context, TemplateEngine};

/// A page of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Site root
    Landing,
    /// Fallback for unknown routes
    NotFound,
}

impl Page {
    /// Every page the static build writes.
    pub const ALL: [Page; 2] = [Page::Landing, Page::NotFound];

    /// Output file relative to the output directory.
    pub fn output_file(self) -> &'static str {
        match self {
            Page::Landing => "index.html",
            Page::NotFound => "404.html",
        }
    }

    fn template(self) -> &'static str {
        match self {
            Page::Landing => "landing.html",
            Page::NotFound => "page.html",
        }
    }

    fn context(self) -> PageContext {
        match self {
            Page::Landing => PageContext {
                title: None,
                source_path: Some("pages/index.mdx".to_string()),
            },
            Page::NotFound => PageContext::titled("404"),
        }
    }
}

/// Render a page inside the site shell.
///
/// The view tree is rebuilt on every call; nothing is cached between renders.
pub fn render_page(
    engine: &TemplateEngine,
    site: &SiteConfig,
    page: Page,
) -> Result<String, minijinja::Error> {
    let body = match page {
        Page::Landing => landing_view(),
        Page::NotFound => not_found_view(&site.build().base_url),
    };

    let context = Context::new(site, &page.context(), body.to_html());
    engine.render_page(page.template(), &context)
}
