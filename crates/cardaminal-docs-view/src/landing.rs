//! Landing view rendered at the site root.

use crate::node::{Element, ElementKind, Node};

/// Product name shown in the hero heading.
pub const PRODUCT_NAME: &str = "Cardaminal";

/// Hero paragraph copy.
pub const TAGLINE: &str =
    "Cardaminal is a CLI-based Cardano wallet tailored for power-users and developers.";

/// Call-to-action label.
pub const CTA_TEXT: &str = "Documentation";

/// Call-to-action destination, the documentation section root.
pub const CTA_HREF: &str = "/chain";

/// Build the landing page tree.
///
/// Takes no input and always returns a structurally equal tree: a heading,
/// a paragraph and one link, each wrapped in its own layout block.
pub fn landing_view() -> Node {
    let heading = Element::new(ElementKind::Heading(1))
        .with_class(
            "flex flex-col flex-wrap font-bold text-4xl md:text-6xl lg:text-7xl dark:text-gray-200",
        )
        .child(PRODUCT_NAME);

    let paragraph = Element::new(ElementKind::Paragraph)
        .with_class("md:text-lg text-gray-600 dark:text-gray-400")
        .child(TAGLINE);

    let cta = Element::new(ElementKind::Link {
        href: CTA_HREF.to_string(),
    })
    .with_class("cta bg-gradient-to-tl from-emerald-600 to-cyan-600 text-white text-sm rounded-md py-3 px-4")
    .child(CTA_TEXT);

    Element::new(ElementKind::Container)
        .with_class("hero py-10 md:p-20")
        .child(
            Element::new(ElementKind::Container)
                .with_class("mb-5 text-center")
                .child(heading),
        )
        .child(
            Element::new(ElementKind::Container)
                .with_class("mb-8 max-w-3xl text-center mx-auto")
                .child(paragraph),
        )
        .child(
            Element::new(ElementKind::Container)
                .with_class("flex justify-center")
                .child(cta),
        )
        .into()
}
