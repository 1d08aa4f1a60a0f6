use std::collections::HashMap;

use super::DocumentNode;

/// Child of an owned [`Element`].
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// Owned element tree built in code.
///
/// ```
/// use acc_lib::document::{DocumentNode, Element};
///
/// let img = Element::new("img").attr("src", "logo.png");
/// assert_eq!((&img).attribute("src"), Some("logo.png"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub tag: String,
    pub attributes: HashMap<String, String>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn style(self, style: impl Into<String>) -> Self {
        self.attr("style", style)
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(text) => out.push_str(text.trim()),
                Node::Element(el) => el.collect_text(out),
            }
        }
    }
}

impl<'a> DocumentNode for &'a Element {
    fn tag_name(&self) -> &str {
        &self.tag
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    fn children(&self) -> Vec<Self> {
        let element: &'a Element = self;
        element
            .children
            .iter()
            .filter_map(|child| match child {
                Node::Element(el) => Some(el),
                Node::Text(_) => None,
            })
            .collect()
    }

    fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }
}
