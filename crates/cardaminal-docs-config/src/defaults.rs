//! Built-in site configuration.

/// Default `docs.toml`, used when no config file exists and written by
/// `cardaminal-docs init`.
pub const DEFAULT_CONFIG: &str = r#"# Cardaminal documentation site

# Base URL for "edit this page" links
docs_repository_base = "https://github.com/txpipe/cardaminal/tree/main/docs"

[logo]
text = "Cardaminal"
heading = 1
class = "font-bold text-4xl md:text-4xl lg:text-5xl"

[project]
link = "https://github.com/txpipe/cardaminal"

[chat]
link = "https://discord.gg/Vc3x8N9nz2"

[footer]
text = "Cardaminal"

[theme]
# "light" or "dark"
default_mode = "dark"

[seo]
title_template = "%s – Cardaminal"
description = "Cardaminal is a CLI-based Cardano wallet tailored for power-users and developers"
site_name = "Cardaminal"

[build]
output = "dist"
minify = true
base_url = "/"
"#;
