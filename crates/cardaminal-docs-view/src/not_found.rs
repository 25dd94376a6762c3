//! Fallback view for unknown routes.

use crate::node::{Element, ElementKind, Node};

/// Build the "page not found" tree, linking back to the site root.
pub fn not_found_view(base_url: &str) -> Node {
    Element::new(ElementKind::Container)
        .with_class("not-found text-center py-10")
        .child(Element::new(ElementKind::Heading(1)).child("404"))
        .child(Element::new(ElementKind::Paragraph).child("This page could not be found."))
        .child(
            Element::new(ElementKind::Link {
                href: base_url.to_string(),
            })
            .child("Back to home"),
        )
        .into()
}
