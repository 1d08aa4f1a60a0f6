use scraper::{ElementRef, Html};

use super::DocumentNode;
use crate::error::{AccError, Result};

/// A parsed HTML document.
///
/// Parsing is lenient: malformed markup is repaired the way browsers do, so
/// building a document from text never fails.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    pub fn parse(markup: &str) -> Self {
        let html = Html::parse_document(markup);
        if !html.errors.is_empty() {
            log::debug!(
                "HTML parser recovered from {} markup error(s)",
                html.errors.len()
            );
        }
        Self { html }
    }

    /// The `<html>` element; the parser synthesizes one when it is missing.
    pub fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }

    /// Number of markup errors the parser recovered from.
    pub fn recovered_errors(&self) -> usize {
        self.html.errors.len()
    }
}

impl std::fmt::Debug for HtmlDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HtmlDocument")
            .field("recovered_errors", &self.recovered_errors())
            .finish()
    }
}

pub fn parse_html(markup: &str) -> HtmlDocument {
    HtmlDocument::parse(markup)
}

/// Parse raw bytes (e.g. a local file). Fails only when the bytes are not UTF-8.
pub fn parse_html_bytes(bytes: &[u8]) -> Result<HtmlDocument> {
    let markup = std::str::from_utf8(bytes)
        .map_err(|e| AccError::parse(format!("input is not valid UTF-8 ({})", e)))?;
    Ok(HtmlDocument::parse(markup))
}

impl<'a> DocumentNode for ElementRef<'a> {
    fn tag_name(&self) -> &str {
        self.value().name()
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.value().attr(name)
    }

    fn children(&self) -> Vec<Self> {
        // Deref to the underlying tree node; `ElementRef` has no inherent `children`.
        (**self).children().filter_map(ElementRef::wrap).collect()
    }

    fn text_content(&self) -> String {
        self.text().map(str::trim).collect()
    }
}
