//! Per-page SEO metadata.

use serde::Serialize;

/// Placeholder substituted with the page title.
pub const TITLE_SLOT: &str = "%s";

/// Inputs a page render passes to the SEO provider and page shell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContext {
    /// Page title filled into the title template
    pub title: Option<String>,
    /// Source path inside the docs tree, for the "edit this page" link
    pub source_path: Option<String>,
}

impl PageContext {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            source_path: None,
        }
    }
}

/// Search and preview metadata for a rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeoMetadata {
    /// Title template with exactly one `%s` slot
    pub title_template: String,
    pub description: String,
    pub site_name: String,
}

impl SeoMetadata {
    /// Resolve the document title.
    ///
    /// With a page title the template's slot is filled in; without one the
    /// site name is used as-is.
    pub fn title(&self, page_title: Option<&str>) -> String {
        match page_title {
            Some(title) if !title.trim().is_empty() => {
                self.title_template.replacen(TITLE_SLOT, title, 1)
            }
            _ => self.site_name.clone(),
        }
    }
}

/// Number of substitution slots in a title template.
pub fn slot_count(template: &str) -> usize {
    template.matches(TITLE_SLOT).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn metadata() -> SeoMetadata {
        SeoMetadata {
            title_template: "%s – Cardaminal".to_string(),
            description: "A wallet".to_string(),
            site_name: "Cardaminal".to_string(),
        }
    }

    #[test]
    fn fills_page_title_into_template() {
        assert_eq!(metadata().title(Some("Chain")), "Chain – Cardaminal");
    }

    #[test]
    fn falls_back_to_site_name() {
        assert_eq!(metadata().title(None), "Cardaminal");
        assert_eq!(metadata().title(Some("  ")), "Cardaminal");
    }

    #[test]
    fn counts_slots() {
        assert_eq!(slot_count("%s – Cardaminal"), 1);
        assert_eq!(slot_count("Cardaminal"), 0);
        assert_eq!(slot_count("%s %s"), 2);
    }
}
