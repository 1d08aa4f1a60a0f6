use thiserror::Error;
use url::Url;

use crate::types::SourceKind;

/// What a user-supplied input string refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentInput {
    /// Literal markup to analyze as-is
    Markup(String),
    /// A document to retrieve over the network
    Locator(Url),
}

impl DocumentInput {
    pub fn source_kind(&self) -> SourceKind {
        match self {
            DocumentInput::Markup(_) => SourceKind::RawMarkup,
            DocumentInput::Locator(_) => SourceKind::RemoteDocument,
        }
    }
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Please provide a URL or HTML content to analyze.")]
    Empty,
    #[error("Invalid input format")]
    InvalidFormat,
    #[error("Invalid URL '{value}': {source}. Hint: include http(s):// and ensure the URL is well-formed.")]
    InvalidUrl {
        value: String,
        source: url::ParseError,
    },
}

/// Decide whether `value` is markup or a locator.
///
/// Surrounding whitespace is ignored. Markup must start with `<` and contain
/// a `>`; locators start with `http://`, `https://` or `www.` (the last is
/// rewritten to `https://`).
pub fn classify_input(value: &str) -> Result<DocumentInput, InputError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    if trimmed.starts_with('<') && trimmed.contains('>') {
        return Ok(DocumentInput::Markup(trimmed.to_string()));
    }

    let locator = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else if trimmed.starts_with("www.") {
        format!("https://{}", trimmed)
    } else {
        return Err(InputError::InvalidFormat);
    };

    Url::parse(&locator)
        .map(DocumentInput::Locator)
        .map_err(|source| InputError::InvalidUrl {
            value: trimmed.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_is_empty() {
        assert!(matches!(classify_input(""), Err(InputError::Empty)));
        assert!(matches!(classify_input(" \n\t "), Err(InputError::Empty)));
    }

    #[test]
    fn markup_needs_opening_and_closing_bracket() {
        let input = classify_input("  <p>hello</p>\n").expect("markup");
        assert_eq!(input, DocumentInput::Markup("<p>hello</p>".to_string()));
        assert_eq!(input.source_kind(), SourceKind::RawMarkup);

        assert!(matches!(
            classify_input("<p"),
            Err(InputError::InvalidFormat)
        ));
    }

    #[test]
    fn http_and_https_are_locators() {
        for value in ["http://example.com", "https://www.w3.org/WAI/"] {
            let input = classify_input(value).expect("locator");
            match &input {
                DocumentInput::Locator(url) => assert!(url.as_str().starts_with("http")),
                other => panic!("expected locator, got {other:?}"),
            }
            assert_eq!(input.source_kind(), SourceKind::RemoteDocument);
        }
    }

    #[test]
    fn www_prefix_is_rewritten_to_https() {
        match classify_input("www.example.com/page").expect("locator") {
            DocumentInput::Locator(url) => {
                assert_eq!(url.as_str(), "https://www.example.com/page");
            }
            other => panic!("expected locator, got {other:?}"),
        }
    }

    #[test]
    fn malformed_locator_is_invalid_url() {
        let err = classify_input("http://").unwrap_err();
        assert!(matches!(err, InputError::InvalidUrl { .. }));
        assert!(err.to_string().contains("Invalid URL 'http://'"));
    }

    #[test]
    fn anything_else_is_invalid_format() {
        for value in ["example.com", "hello world", "ftp://example.com"] {
            let err = classify_input(value).unwrap_err();
            assert!(matches!(err, InputError::InvalidFormat), "{value}");
            assert_eq!(err.to_string(), "Invalid input format");
        }
    }
}
