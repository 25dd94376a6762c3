//! Display nodes and their HTML rendering.

use std::fmt::Write;

/// The kind of an element node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementKind {
    /// Grouping block (`<div>`)
    Container,
    /// Heading of the given level, clamped to 1-6 when rendered
    Heading(u8),
    /// Paragraph of text (`<p>`)
    Paragraph,
    /// Anchor to another page (`<a href>`)
    Link { href: String },
}

impl ElementKind {
    fn tag(&self) -> &'static str {
        match self {
            ElementKind::Container => "div",
            ElementKind::Heading(level) => match level {
                0 | 1 => "h1",
                2 => "h2",
                3 => "h3",
                4 => "h4",
                5 => "h5",
                _ => "h6",
            },
            ElementKind::Paragraph => "p",
            ElementKind::Link { .. } => "a",
        }
    }
}

/// An element with optional CSS classes and child nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// What the element is
    pub kind: ElementKind,
    /// Space-separated CSS classes
    pub class: Option<String>,
    /// Child nodes in document order
    pub children: Vec<Node>,
}

impl Element {
    /// Create an element with no classes or children.
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            class: None,
            children: Vec::new(),
        }
    }

    /// Set the CSS classes.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Append a child node.
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }
}

/// A node in the display tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Plain text, escaped on render
    Text(String),
    /// Element with children
    Element(Element),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl Node {
    /// Concatenated text of this node and all descendants.
    pub fn text(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Element(element) => element.children.iter().map(Node::text).collect(),
        }
    }

    /// Depth-first, pre-order walk over this node and its descendants.
    pub fn descendants(&self) -> Vec<&Node> {
        let mut out = vec![self];
        if let Node::Element(element) = self {
            for child in &element.children {
                out.extend(child.descendants());
            }
        }
        out
    }

    /// All element nodes in the subtree matching a predicate.
    pub fn find_all<F>(&self, predicate: F) -> Vec<&Element>
    where
        F: Fn(&ElementKind) -> bool,
    {
        self.descendants()
            .into_iter()
            .filter_map(|node| match node {
                Node::Element(element) if predicate(&element.kind) => Some(element),
                _ => None,
            })
            .collect()
    }

    /// Render the subtree to HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(&html_escape(text)),
            Node::Element(element) => {
                let tag = element.kind.tag();
                out.push('<');
                out.push_str(tag);
                if let ElementKind::Link { href } = &element.kind {
                    let _ = write!(out, r#" href="{}""#, html_escape(href));
                }
                if let Some(class) = &element.class {
                    let _ = write!(out, r#" class="{}""#, html_escape(class));
                }
                out.push('>');
                for child in &element.children {
                    child.write_html(out);
                }
                let _ = write!(out, "</{}>", tag);
            }
        }
    }
}

/// Display content: plain text or a styled node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Plain text
    Text(String),
    /// Rich node
    Rich(Node),
}

impl Content {
    /// Visible text of the content.
    pub fn text(&self) -> String {
        match self {
            Content::Text(text) => text.clone(),
            Content::Rich(node) => node.text(),
        }
    }

    /// Whether there is no visible text.
    pub fn is_empty(&self) -> bool {
        self.text().trim().is_empty()
    }

    /// Render to HTML.
    pub fn to_html(&self) -> String {
        match self {
            Content::Text(text) => html_escape(text),
            Content::Rich(node) => node.to_html(),
        }
    }
}

/// Escape text for use in HTML content and double-quoted attributes.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
