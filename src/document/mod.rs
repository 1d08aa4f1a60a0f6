//! Read-only document tree capability consumed by the checkers.
//!
//! The checkers never depend on a particular parser. Anything that can hand
//! out its tag name, attributes, element children and text satisfies
//! [`DocumentNode`]:
//!
//! - [`Element`] - an owned tree, handy for callers that build documents in code
//! - [`HtmlDocument`] - lenient HTML5 parsing backed by `scraper`

mod element;
mod html;

pub use element::{Element, Node};
pub use html::{parse_html, parse_html_bytes, HtmlDocument};

/// Minimal traversal interface over an element tree.
///
/// Implementations are cheap handles (references or copyable cursors), so
/// `children` and `descendants` hand out owned values.
pub trait DocumentNode: Clone {
    /// Element name as the parser reports it (lowercase for HTML).
    fn tag_name(&self) -> &str;

    fn attribute(&self, name: &str) -> Option<&str>;

    /// Element children in document order; text and comment nodes are skipped.
    fn children(&self) -> Vec<Self>;

    /// Accessible text: every descendant text run, trimmed, concatenated
    /// without separators.
    fn text_content(&self) -> String;

    fn inline_style(&self) -> Option<&str> {
        self.attribute("style")
    }

    fn is_tag(&self, name: &str) -> bool {
        self.tag_name().eq_ignore_ascii_case(name)
    }

    /// Pre-order walk starting with `self`.
    fn descendants(&self) -> Vec<Self> {
        let mut out = Vec::new();
        let mut stack = vec![self.clone()];
        while let Some(node) = stack.pop() {
            let children = node.children();
            out.push(node);
            stack.extend(children.into_iter().rev());
        }
        out
    }
}
