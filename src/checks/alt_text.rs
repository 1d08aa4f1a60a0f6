//! Image alternative text checks (WCAG 1.1.1 Non-text Content).
//!
//! Every `<img>` is inspected in document order:
//! - no `alt` attribute at all is a high priority issue
//! - `alt=""` is valid for decorative images but is still surfaced for review
//! - generic text such as "image" or "photo" says nothing about the content

use crate::document::DocumentNode;
use crate::types::{Issue, IssueDetail};

use super::{CheckKind, CheckResult, Checker};

/// Alt values that describe the element type instead of the image content.
const GENERIC_ALT_VALUES: &[&str] = &["image", "picture", "photo", "img"];

const NO_IMAGES_SUGGESTION: &str =
    "Consider adding relevant images with proper alt text to enhance content.";

const ALT_TEXT_SUGGESTIONS: [&str; 4] = [
    "Write descriptive alt text that conveys the meaning and context of images",
    "Use empty alt='' for purely decorative images",
    "Avoid generic terms like 'image', 'picture', or 'photo'",
    "Keep alt text concise but meaningful (aim for 125 characters or less)",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct AltTextChecker;

impl Checker for AltTextChecker {
    fn kind(&self) -> CheckKind {
        CheckKind::AltText
    }

    fn check<N: DocumentNode>(&self, root: &N) -> CheckResult {
        let images: Vec<N> = root
            .descendants()
            .into_iter()
            .filter(|node| node.is_tag("img"))
            .collect();

        if images.is_empty() {
            return CheckResult::new(Vec::new(), vec![NO_IMAGES_SUGGESTION.to_string()]);
        }

        let mut issues = Vec::new();
        for (idx, image) in images.iter().enumerate() {
            if let Some(detail) = inspect_image(image) {
                issues.push(Issue::new(format!("Image {}", idx + 1), detail));
            }
        }

        let suggestions = if issues.is_empty() {
            Vec::new()
        } else {
            ALT_TEXT_SUGGESTIONS.iter().map(|s| s.to_string()).collect()
        };

        CheckResult::new(issues, suggestions)
    }
}

fn inspect_image<N: DocumentNode>(image: &N) -> Option<IssueDetail> {
    let src = image.attribute("src").unwrap_or("Unknown source").to_string();
    match image.attribute("alt") {
        None => Some(IssueDetail::MissingAlt { src }),
        Some(alt) if alt.trim().is_empty() => Some(IssueDetail::EmptyAlt { src }),
        Some(alt) if is_generic_alt(alt) => Some(IssueDetail::GenericAlt {
            alt: alt.to_string(),
        }),
        Some(_) => None,
    }
}

fn is_generic_alt(alt: &str) -> bool {
    let normalized = alt.trim().to_lowercase();
    GENERIC_ALT_VALUES.contains(&normalized.as_str())
}
