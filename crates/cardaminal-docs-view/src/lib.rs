//! Renderable content for the Cardaminal documentation site.
//!
//! Provides a small display-node tree that renders to HTML, and the
//! landing view shown at the site root.

pub mod landing;
pub mod node;
pub mod not_found;

pub use landing::{landing_view, CTA_HREF, CTA_TEXT, PRODUCT_NAME, TAGLINE};
pub use node::{html_escape, Content, Element, ElementKind, Node};
pub use not_found::not_found_view;
