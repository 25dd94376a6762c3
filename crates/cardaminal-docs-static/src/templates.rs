//! Template engine for the page shell.

use minijinja::{AutoEscape, Environment};

use cardaminal_docs_config::{PageContext, SiteConfig};
use cardaminal_docs_view::html_escape;

/// Context for rendering a page template.
///
/// String fields are HTML-escaped on construction; `logo` and `content`
/// hold markup. The engine itself does no escaping.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Context {
    /// `light` or `dark`
    pub theme: String,
    /// Document title after template substitution
    pub title: String,
    pub description: String,
    pub site_name: String,
    /// Logo markup
    pub logo: String,
    pub project_link: String,
    pub chat_link: String,
    pub footer_text: String,
    /// Base URL
    pub base_url: String,
    /// Rendered page body
    pub content: String,
    /// "Edit this page" target, when the page has a source file
    pub edit_url: Option<String>,
}

impl Context {
    /// Build the shell context for one page render.
    pub fn new(site: &SiteConfig, page: &PageContext, content: String) -> Self {
        let seo = site.seo(page);

        Self {
            theme: site.default_mode().as_str().to_string(),
            title: html_escape(&seo.title(page.title.as_deref())),
            description: html_escape(&seo.description),
            site_name: html_escape(&seo.site_name),
            logo: site.logo().to_html(),
            project_link: html_escape(site.project_link().as_str()),
            chat_link: html_escape(site.chat_link().as_str()),
            footer_text: html_escape(site.footer_text()),
            base_url: html_escape(&site.build().base_url),
            content,
            edit_url: page
                .source_path
                .as_deref()
                .map(|path| html_escape(&site.edit_url(path))),
        }
    }
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the built-in templates.
    pub fn new() -> Self {
        let mut env = Environment::new();

        // Context values arrive pre-escaped
        env.set_auto_escape_callback(|_| AutoEscape::None);

        env.add_template_owned("base.html".to_string(), BASE_TEMPLATE.to_string())
            .expect("Failed to add base template");

        env.add_template_owned("header.html".to_string(), HEADER_TEMPLATE.to_string())
            .expect("Failed to add header template");

        env.add_template_owned("landing.html".to_string(), LANDING_TEMPLATE.to_string())
            .expect("Failed to add landing template");

        env.add_template_owned("page.html".to_string(), PAGE_TEMPLATE.to_string())
            .expect("Failed to add page template");

        Self { env }
    }

    /// Render a page using the specified template.
    pub fn render_page(
        &self,
        template: &str,
        context: &Context,
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template(template)?;
        tmpl.render(context)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en" data-theme="{{ theme }}">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ title }}</title>
  <meta name="description" content="{{ description }}">
  <meta property="og:title" content="{{ title }}">
  <meta property="og:description" content="{{ description }}">
  <meta property="og:site_name" content="{{ site_name }}">
  <link rel="stylesheet" href="{{ base_url }}assets/main.css">
</head>
<body>
  {% include "header.html" %}
  <main class="main">
    {% block content %}{% endblock %}
  </main>
  <footer class="footer">
    {% if edit_url %}<a class="edit-link" href="{{ edit_url }}">Edit this page</a>
    {% endif %}<p class="footer-text">{{ footer_text }}</p>
  </footer>
  <script src="{{ base_url }}assets/main.js"></script>
</body>
</html>"##;

const HEADER_TEMPLATE: &str = r##"<header class="header">
  <a href="{{ base_url }}" class="nav-logo">{{ logo }}</a>
  <nav class="nav-links">
    <a href="{{ project_link }}" class="nav-project" target="_blank" rel="noreferrer">Project</a>
    <a href="{{ chat_link }}" class="nav-chat" target="_blank" rel="noreferrer">Chat</a>
    <button type="button" id="theme-toggle" class="theme-toggle" aria-label="Toggle theme">Theme</button>
  </nav>
</header>"##;

const LANDING_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
{{ content }}
{% endblock %}"##;

const PAGE_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
<article class="doc">
  <div class="content">
    {{ content }}
  </div>
</article>
{% endblock %}"##;

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> SiteConfig {
        SiteConfig::cardaminal().unwrap()
    }

    #[test]
    fn renders_seo_head_tags() {
        let engine = TemplateEngine::new();
        let context = Context::new(&site(), &PageContext::titled("Chain"), String::new());

        let html = engine.render_page("page.html", &context).unwrap();

        assert!(html.contains("<title>Chain – Cardaminal</title>"));
        assert!(html.contains(
            r#"<meta name="description" content="Cardaminal is a CLI-based Cardano wallet tailored for power-users and developers">"#
        ));
        assert!(html.contains(r#"<meta property="og:site_name" content="Cardaminal">"#));
    }

    #[test]
    fn renders_header_and_footer() {
        let engine = TemplateEngine::new();
        let context = Context::new(&site(), &PageContext::default(), String::new());

        let html = engine.render_page("page.html", &context).unwrap();

        assert!(html.contains(r#"<html lang="en" data-theme="dark">"#));
        assert!(html.contains(r#"href="https://github.com/txpipe/cardaminal""#));
        assert!(html.contains(r#"href="https://discord.gg/Vc3x8N9nz2""#));
        assert!(html.contains(r#"<h1 class="font-bold text-4xl md:text-4xl lg:text-5xl">Cardaminal</h1>"#));
        assert!(html.contains(r#"<p class="footer-text">Cardaminal</p>"#));
        assert!(!html.contains("Edit this page"));
    }

    #[test]
    fn renders_edit_link_for_source_pages() {
        let engine = TemplateEngine::new();
        let page = PageContext {
            title: Some("Chain".to_string()),
            source_path: Some("pages/chain.mdx".to_string()),
        };
        let context = Context::new(&site(), &page, "<p>body</p>".to_string());

        let html = engine.render_page("page.html", &context).unwrap();

        assert!(html.contains(
            r#"<a class="edit-link" href="https://github.com/txpipe/cardaminal/tree/main/docs/pages/chain.mdx">Edit this page</a>"#
        ));
        assert!(html.contains("<p>body</p>"));
    }

    #[test]
    fn escapes_config_text() {
        let toml = cardaminal_docs_config::DEFAULT_CONFIG.replace(
            "text = \"Cardaminal\"\n\n[theme]",
            "text = \"<b>Cardaminal</b>\"\n\n[theme]",
        );
        let site = SiteConfig::from_toml_str(&toml).unwrap();
        let context = Context::new(&site, &PageContext::default(), String::new());

        assert_eq!(context.footer_text, "&lt;b&gt;Cardaminal&lt;/b&gt;");
    }
}
