//! Site configuration loading and validation.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use url::Url;

use cardaminal_docs_view::{Content, Element, ElementKind};

use crate::defaults::DEFAULT_CONFIG;
use crate::error::{ConfigError, Diagnostics};
use crate::seo::{slot_count, PageContext, SeoMetadata, TITLE_SLOT};
use crate::theme::ThemeMode;

/// Configuration file structure (docs.toml).
///
/// Every field is optional here so that a missing key is reported as a
/// validation issue alongside the others instead of aborting the parse.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    docs_repository_base: Option<String>,
    logo: Option<LogoSection>,
    project: Option<LinkSection>,
    chat: Option<LinkSection>,
    footer: Option<FooterSection>,
    theme: Option<ThemeSection>,
    seo: Option<SeoSection>,
    #[serde(default)]
    build: BuildSettings,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct LogoSection {
    text: Option<String>,
    heading: Option<u8>,
    class: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct LinkSection {
    link: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct FooterSection {
    text: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ThemeSection {
    default_mode: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct SeoSection {
    title_template: Option<String>,
    description: Option<String>,
    site_name: Option<String>,
}

/// Static build settings from the optional `[build]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildSettings {
    /// Output directory for the static build
    pub output: String,
    /// Minify generated CSS
    pub minify: bool,
    /// URL prefix the site is deployed under
    pub base_url: String,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            output: "dist".to_string(),
            minify: true,
            base_url: "/".to_string(),
        }
    }
}

/// Validated, immutable site configuration.
///
/// Built once per process and shared by reference; there are no setters.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    logo: Content,
    project_link: Url,
    chat_link: Url,
    footer_text: String,
    default_mode: ThemeMode,
    docs_repository_base: Url,
    seo: SeoMetadata,
    build: BuildSettings,
}

impl SiteConfig {
    /// The built-in Cardaminal configuration.
    pub fn cardaminal() -> Result<Self, ConfigError> {
        Self::from_toml_str(DEFAULT_CONFIG)
    }

    /// Parse and validate a `docs.toml` document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;
        Self::from_file(file)
    }

    fn from_file(file: ConfigFile) -> Result<Self, ConfigError> {
        let mut diag = Diagnostics::new();

        let logo = validate_logo(file.logo, &mut diag);

        let project = file.project.unwrap_or_default();
        let project_link = validate_url("project.link", project.link.as_deref(), &mut diag);

        let chat = file.chat.unwrap_or_default();
        let chat_link = validate_url("chat.link", chat.link.as_deref(), &mut diag);

        let footer_text = required_text(
            "footer.text",
            file.footer.unwrap_or_default().text,
            &mut diag,
        );

        let default_mode = match file.theme.unwrap_or_default().default_mode {
            Some(mode) => match mode.parse::<ThemeMode>() {
                Ok(mode) => Some(mode),
                Err(e) => {
                    diag.error("theme.default_mode", e);
                    None
                }
            },
            None => {
                diag.missing("theme.default_mode");
                None
            }
        };

        let docs_repository_base = validate_url(
            "docs_repository_base",
            file.docs_repository_base.as_deref(),
            &mut diag,
        );

        let seo = validate_seo(file.seo, &mut diag);

        validate_build(&file.build, &mut diag);

        let (
            Some(logo),
            Some(project_link),
            Some(chat_link),
            Some(footer_text),
            Some(default_mode),
            Some(docs_repository_base),
            Some(seo),
        ) = (
            logo,
            project_link,
            chat_link,
            footer_text,
            default_mode,
            docs_repository_base,
            seo,
        )
        else {
            return Err(ConfigError::Invalid(diag));
        };

        if !diag.is_empty() {
            return Err(ConfigError::Invalid(diag));
        }

        Ok(Self {
            logo,
            project_link,
            chat_link,
            footer_text,
            default_mode,
            docs_repository_base,
            seo,
            build: file.build,
        })
    }

    /// Logo shown in every page header.
    pub fn logo(&self) -> &Content {
        &self.logo
    }

    /// Link to the project repository.
    pub fn project_link(&self) -> &Url {
        &self.project_link
    }

    /// Link to the community chat.
    pub fn chat_link(&self) -> &Url {
        &self.chat_link
    }

    pub fn footer_text(&self) -> &str {
        &self.footer_text
    }

    pub fn default_mode(&self) -> ThemeMode {
        self.default_mode
    }

    /// Base of the source tree for "edit this page" links.
    pub fn docs_repository_base(&self) -> &Url {
        &self.docs_repository_base
    }

    pub fn build(&self) -> &BuildSettings {
        &self.build
    }

    /// SEO metadata for a page.
    ///
    /// Pure: the same context always yields an equal value.
    pub fn seo(&self, _page: &PageContext) -> SeoMetadata {
        self.seo.clone()
    }

    /// "Edit this page" URL for a source path in the docs tree.
    pub fn edit_url(&self, source_path: &str) -> String {
        format!(
            "{}/{}",
            self.docs_repository_base.as_str().trim_end_matches('/'),
            source_path.trim_start_matches('/')
        )
    }
}

/// Load `docs.toml`, falling back to the built-in config when absent.
pub fn load(path: &Path) -> Result<SiteConfig, ConfigError> {
    if !path.exists() {
        tracing::info!(
            "{} not found, using built-in configuration",
            path.display()
        );
        return SiteConfig::cardaminal();
    }

    let content =
        fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
    let config = SiteConfig::from_toml_str(&content)?;

    tracing::info!("Loaded config from {}", path.display());
    tracing::debug!(?config, "Resolved site configuration");

    Ok(config)
}

fn required_text(
    field: &'static str,
    value: Option<String>,
    diag: &mut Diagnostics,
) -> Option<String> {
    match value {
        Some(text) if !text.trim().is_empty() => Some(text),
        Some(_) => {
            diag.error(field, "must not be empty");
            None
        }
        None => {
            diag.missing(field);
            None
        }
    }
}

/// Links must be absolute http(s) URLs with a host.
fn validate_url(field: &'static str, value: Option<&str>, diag: &mut Diagnostics) -> Option<Url> {
    let Some(value) = value else {
        diag.missing(field);
        return None;
    };

    match Url::parse(value) {
        Ok(parsed) => {
            if !matches!(parsed.scheme(), "http" | "https") {
                diag.error(
                    field,
                    format!(
                        "scheme '{}' not supported, must be http or https",
                        parsed.scheme()
                    ),
                );
                return None;
            }
            if parsed.host_str().is_none() {
                diag.error(field, "URL must have a valid host");
                return None;
            }
            Some(parsed)
        }
        Err(e) => {
            diag.error(field, format!("invalid URL '{}': {}", value, e));
            None
        }
    }
}

fn validate_logo(section: Option<LogoSection>, diag: &mut Diagnostics) -> Option<Content> {
    let Some(section) = section else {
        diag.missing("logo");
        return None;
    };

    let Some(text) = section.text else {
        diag.missing("logo.text");
        return None;
    };

    let logo = match (section.heading, section.class) {
        (None, None) => Content::Text(text),
        (Some(level), _) if !(1..=6).contains(&level) => {
            diag.error("logo.heading", format!("heading level {} is not 1-6", level));
            return None;
        }
        (heading, class) => {
            let kind = heading.map_or(ElementKind::Container, ElementKind::Heading);
            let mut element = Element::new(kind).child(text);
            element.class = class;
            Content::Rich(element.into())
        }
    };

    // Shown in every header, so it needs visible text
    if logo.is_empty() {
        diag.error("logo.text", "must not be empty");
        return None;
    }

    Some(logo)
}

fn validate_seo(section: Option<SeoSection>, diag: &mut Diagnostics) -> Option<SeoMetadata> {
    let Some(section) = section else {
        diag.missing("seo");
        return None;
    };

    let title_template = required_text("seo.title_template", section.title_template, diag);
    let description = required_text("seo.description", section.description, diag);
    let site_name = required_text("seo.site_name", section.site_name, diag);

    let title_template = title_template.filter(|template| {
        let slots = slot_count(template);
        if slots != 1 {
            diag.error(
                "seo.title_template",
                format!(
                    "must contain exactly one '{}' placeholder, found {}",
                    TITLE_SLOT, slots
                ),
            );
        }
        slots == 1
    })?;

    Some(SeoMetadata {
        title_template,
        description: description?,
        site_name: site_name?,
    })
}

fn validate_build(build: &BuildSettings, diag: &mut Diagnostics) {
    if build.output.trim().is_empty() {
        diag.error("build.output", "must not be empty");
    }
    if !build.base_url.starts_with('/') || !build.base_url.ends_with('/') {
        diag.error("build.base_url", "must start and end with '/'");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardaminal_docs_view::Node;
    use pretty_assertions::assert_eq;

    const MINIMAL: &str = r#"
docs_repository_base = "https://example.com/repo/tree/main/docs"

[logo]
text = "Demo"

[project]
link = "https://example.com/repo"

[chat]
link = "https://chat.example.com"

[footer]
text = "Demo footer"

[theme]
default_mode = "light"

[seo]
title_template = "%s | Demo"
description = "Demo site"
site_name = "Demo"
"#;

    #[test]
    fn default_config_seo() {
        let config = SiteConfig::cardaminal().unwrap();

        assert_eq!(
            config.seo(&PageContext::default()),
            SeoMetadata {
                title_template: "%s – Cardaminal".to_string(),
                description:
                    "Cardaminal is a CLI-based Cardano wallet tailored for power-users and developers"
                        .to_string(),
                site_name: "Cardaminal".to_string(),
            }
        );
    }

    #[test]
    fn default_config_fields() {
        let config = SiteConfig::cardaminal().unwrap();

        assert_eq!(
            config.project_link().as_str(),
            "https://github.com/txpipe/cardaminal"
        );
        assert_eq!(config.chat_link().as_str(), "https://discord.gg/Vc3x8N9nz2");
        assert_eq!(config.footer_text(), "Cardaminal");
        assert_eq!(config.default_mode(), ThemeMode::Dark);
        assert_eq!(config.build(), &BuildSettings::default());
        assert_eq!(
            config.logo(),
            &Content::Rich(Node::from(
                Element::new(ElementKind::Heading(1))
                    .with_class("font-bold text-4xl md:text-4xl lg:text-5xl")
                    .child("Cardaminal")
            ))
        );
    }

    #[test]
    fn seo_is_pure() {
        let config = SiteConfig::cardaminal().unwrap();
        let page = PageContext::titled("Chain");

        assert_eq!(config.seo(&page), config.seo(&page));
    }

    #[test]
    fn plain_text_logo() {
        let config = SiteConfig::from_toml_str(MINIMAL).unwrap();

        assert_eq!(config.logo(), &Content::Text("Demo".to_string()));
        assert_eq!(config.default_mode(), ThemeMode::Light);
    }

    #[test]
    fn rejects_malformed_project_link() {
        let toml = MINIMAL.replace("https://example.com/repo\"", "not-a-url\"");
        let err = SiteConfig::from_toml_str(&toml).unwrap_err();

        assert!(matches!(err, ConfigError::Invalid(_)));
        assert_eq!(err.issues().len(), 1);
        assert_eq!(err.issues()[0].field, "project.link");
    }

    #[test]
    fn rejects_non_http_scheme() {
        let toml = MINIMAL.replace("https://chat.example.com", "ftp://chat.example.com");
        let err = SiteConfig::from_toml_str(&toml).unwrap_err();

        assert_eq!(err.issues()[0].field, "chat.link");
        assert!(err.issues()[0].message.contains("ftp"));
    }

    #[test]
    fn rejects_empty_footer() {
        let toml = MINIMAL.replace("Demo footer", "  ");
        let err = SiteConfig::from_toml_str(&toml).unwrap_err();

        assert_eq!(err.issues()[0].field, "footer.text");
    }

    #[test]
    fn rejects_template_without_single_slot() {
        let toml = MINIMAL.replace("%s | Demo", "%s | %s");
        let err = SiteConfig::from_toml_str(&toml).unwrap_err();

        assert_eq!(err.issues()[0].field, "seo.title_template");
        assert!(err.to_string().contains("found 2"));
    }

    #[test]
    fn rejects_unknown_theme_mode() {
        let toml = MINIMAL.replace("\"light\"", "\"sepia\"");
        let err = SiteConfig::from_toml_str(&toml).unwrap_err();

        assert_eq!(err.issues()[0].field, "theme.default_mode");
    }

    #[test]
    fn reports_every_missing_section() {
        let err = SiteConfig::from_toml_str("").unwrap_err();
        let fields: Vec<_> = err.issues().iter().map(|i| i.field).collect();

        assert_eq!(
            fields,
            vec![
                "logo",
                "project.link",
                "chat.link",
                "footer.text",
                "theme.default_mode",
                "docs_repository_base",
                "seo",
            ]
        );
    }

    #[test]
    fn rejects_unknown_keys() {
        let toml = format!("{}\n[nextThemes]\ndefaultTheme = \"dark\"\n", MINIMAL);
        let err = SiteConfig::from_toml_str(&toml).unwrap_err();

        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn rejects_bad_heading_level() {
        let toml = MINIMAL.replace("text = \"Demo\"", "text = \"Demo\"\nheading = 7");
        let err = SiteConfig::from_toml_str(&toml).unwrap_err();

        assert_eq!(err.issues()[0].field, "logo.heading");
    }

    #[test]
    fn rejects_blank_logo() {
        let plain = MINIMAL.replace("text = \"Demo\"", "text = \" \"");
        let err = SiteConfig::from_toml_str(&plain).unwrap_err();
        assert_eq!(err.issues()[0].field, "logo.text");

        let rich = DEFAULT_CONFIG.replace(
            "text = \"Cardaminal\"\nheading = 1",
            "text = \" \"\nheading = 1",
        );
        let err = SiteConfig::from_toml_str(&rich).unwrap_err();
        assert_eq!(err.issues()[0].field, "logo.text");
        assert_eq!(err.issues()[0].message, "must not be empty");
    }

    #[test]
    fn rejects_bad_base_url() {
        let toml = format!("{}\n[build]\nbase_url = \"docs\"\n", MINIMAL);
        let err = SiteConfig::from_toml_str(&toml).unwrap_err();

        assert_eq!(err.issues()[0].field, "build.base_url");
    }

    #[test]
    fn joins_edit_url() {
        let config = SiteConfig::cardaminal().unwrap();

        assert_eq!(
            config.edit_url("/pages/chain.mdx"),
            "https://github.com/txpipe/cardaminal/tree/main/docs/pages/chain.mdx"
        );
    }

    #[test]
    fn footer_is_non_empty_when_valid() {
        let config = SiteConfig::from_toml_str(MINIMAL).unwrap();
        assert!(!config.footer_text().trim().is_empty());
    }

    #[test]
    fn load_falls_back_to_builtin() {
        let temp = tempfile::tempdir().unwrap();
        let config = load(&temp.path().join("docs.toml")).unwrap();

        assert_eq!(config, SiteConfig::cardaminal().unwrap());
    }

    #[test]
    fn load_reads_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("docs.toml");
        fs::write(&path, MINIMAL).unwrap();

        let config = load(&path).unwrap();

        assert_eq!(config.footer_text(), "Demo footer");
    }

    #[test]
    fn config_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SiteConfig>();
    }
}
