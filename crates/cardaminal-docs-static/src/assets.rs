//! Stylesheet and script served with every page.

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Generate the main CSS file.
    pub fn generate_css() -> String {
        DEFAULT_CSS.to_string()
    }

    /// Generate the main JavaScript file.
    pub fn generate_js() -> String {
        DEFAULT_JS.to_string()
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }

    /// The stylesheet, minified when requested.
    ///
    /// Falls back to the unminified source if minification fails.
    pub fn stylesheet(minify: bool) -> String {
        let css = Self::generate_css();
        if !minify {
            return css;
        }
        match Self::minify_css(&css) {
            Ok(min) => min,
            Err(e) => {
                tracing::warn!("{}, writing unminified stylesheet", e);
                css
            }
        }
    }
}

// Light palette by default; `data-theme="dark"` on <html> swaps it
const DEFAULT_CSS: &str = r#"/* Cardaminal docs theme */

:root {
  --background: #ffffff;
  --foreground: #111827;
  --muted: #4b5563;
  --border: #e5e7eb;
  --accent-from: #059669;
  --accent-to: #0891b2;
  --header-height: 4rem;
  --content-max-width: 48rem;
}

[data-theme="dark"] {
  --background: #111111;
  --foreground: #e5e7eb;
  --muted: #9ca3af;
  --border: #262626;
}

* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: system-ui, -apple-system, sans-serif;
  background: var(--background);
  color: var(--foreground);
  line-height: 1.6;
  min-height: 100vh;
  display: flex;
  flex-direction: column;
}

/* Header */
.header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  height: var(--header-height);
  padding: 0 1.5rem;
  border-bottom: 1px solid var(--border);
}

.nav-logo {
  color: var(--foreground);
  text-decoration: none;
}

.nav-logo h1 {
  font-size: 1.5rem;
  font-weight: 700;
}

.nav-links {
  display: flex;
  align-items: center;
  gap: 1rem;
}

.nav-links a {
  color: var(--muted);
  text-decoration: none;
}

.nav-links a:hover {
  color: var(--foreground);
}

.theme-toggle {
  background: none;
  border: 1px solid var(--border);
  border-radius: 0.375rem;
  color: var(--muted);
  padding: 0.25rem 0.5rem;
  cursor: pointer;
}

/* Main content */
.main {
  flex: 1;
  width: 100%;
  max-width: var(--content-max-width);
  margin: 0 auto;
  padding: 2rem 1.5rem;
}

/* Hero */
.hero {
  padding: 5rem 0;
  text-align: center;
}

.hero h1 {
  font-size: 4rem;
  font-weight: 700;
  margin-bottom: 1.25rem;
}

.hero p {
  font-size: 1.125rem;
  color: var(--muted);
  max-width: 48rem;
  margin: 0 auto 2rem;
}

.hero .cta {
  display: inline-block;
  padding: 0.75rem 1rem;
  border-radius: 0.375rem;
  font-size: 0.875rem;
  color: #ffffff;
  text-decoration: none;
  background-image: linear-gradient(to top left, var(--accent-from), var(--accent-to));
}

.hero .cta:focus {
  outline: 2px solid #2563eb;
  outline-offset: 2px;
}

/* Not found */
.not-found {
  text-align: center;
  padding: 2.5rem 0;
}

.not-found h1 {
  font-size: 3rem;
}

.not-found a {
  color: var(--accent-to);
}

/* Footer */
.footer {
  border-top: 1px solid var(--border);
  padding: 1.5rem;
  color: var(--muted);
  font-size: 0.875rem;
}

.edit-link {
  display: block;
  margin-bottom: 0.5rem;
  color: var(--muted);
}

@media (max-width: 768px) {
  .hero h1 {
    font-size: 2.25rem;
  }
}
"#;

// Stored preference wins over the configured default
const DEFAULT_JS: &str = r#"// Cardaminal docs theme switch
(function() {
  const root = document.documentElement;
  const stored = localStorage.getItem('theme');
  if (stored === 'light' || stored === 'dark') {
    root.dataset.theme = stored;
  }

  const toggle = document.getElementById('theme-toggle');
  if (!toggle) return;

  toggle.addEventListener('click', () => {
    const next = root.dataset.theme === 'dark' ? 'light' : 'dark';
    root.dataset.theme = next;
    localStorage.setItem('theme', next);
  });
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_css() {
        let css = AssetPipeline::generate_css();
        assert!(css.contains(":root"));
        assert!(css.contains(r#"[data-theme="dark"]"#));
        assert!(css.contains(".hero .cta"));
    }

    #[test]
    fn generates_js() {
        let js = AssetPipeline::generate_js();
        assert!(js.contains("theme-toggle"));
        assert!(js.contains("localStorage"));
    }

    #[test]
    fn minifies_css() {
        let css = r#"
.button {
    background-color: blue;
    padding: 10px;
}
        "#;

        let minified = AssetPipeline::minify_css(css).unwrap();

        assert!(!minified.contains('\n'));
        assert!(minified.contains(".button"));
    }

    #[test]
    fn stylesheet_respects_minify_flag() {
        assert_eq!(AssetPipeline::stylesheet(false), AssetPipeline::generate_css());
        assert!(AssetPipeline::stylesheet(true).len() < AssetPipeline::generate_css().len());
    }
}
