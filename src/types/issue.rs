//! Issue records produced by the checkers.
//!
//! An [`Issue`] is a common envelope (element label, description, severity,
//! guideline reference) around a rule-specific [`IssueDetail`] payload. The
//! severity and guideline reference are derived from the payload's
//! [`IssueKind`] when the issue is built, so a rule can never report a kind at
//! a different priority.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Severity;

const WCAG_NON_TEXT_CONTENT: &str = "WCAG 2.1 Level A - 1.1.1";
const WCAG_RESIZE_TEXT: &str = "WCAG 2.1 Level AA - 1.4.4";
const WCAG_LOCATION: &str = "WCAG 2.1 Level AAA - 2.4.8";
const WCAG_CONTRAST_MINIMUM: &str = "WCAG 2.1 Level AA - 1.4.3";
const WCAG_USE_OF_COLOR: &str = "WCAG 2.1 Level A - 1.4.1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueKind {
    MissingAlt,
    EmptyAlt,
    GenericAlt,
    SmallFont,
    LongTextBlock,
    PoorContrast,
    ColorDependency,
}

impl IssueKind {
    pub const fn severity(self) -> Severity {
        match self {
            IssueKind::MissingAlt | IssueKind::PoorContrast => Severity::High,
            IssueKind::EmptyAlt
            | IssueKind::GenericAlt
            | IssueKind::SmallFont
            | IssueKind::ColorDependency => Severity::Medium,
            IssueKind::LongTextBlock => Severity::Low,
        }
    }

    pub const fn guideline(self) -> &'static str {
        match self {
            IssueKind::MissingAlt | IssueKind::EmptyAlt | IssueKind::GenericAlt => {
                WCAG_NON_TEXT_CONTENT
            }
            IssueKind::SmallFont => WCAG_RESIZE_TEXT,
            IssueKind::LongTextBlock => WCAG_LOCATION,
            IssueKind::PoorContrast => WCAG_CONTRAST_MINIMUM,
            IssueKind::ColorDependency => WCAG_USE_OF_COLOR,
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            IssueKind::MissingAlt => "Missing Alt Attribute",
            IssueKind::EmptyAlt => "Empty Alt Text",
            IssueKind::GenericAlt => "Generic Alt Text",
            IssueKind::SmallFont => "Small Font Size",
            IssueKind::LongTextBlock => "Long Text Blocks",
            IssueKind::PoorContrast => "Poor Color Contrast",
            IssueKind::ColorDependency => "Color Dependency",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Rule-specific payload, tagged by kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum IssueDetail {
    MissingAlt {
        src: String,
    },
    EmptyAlt {
        src: String,
    },
    GenericAlt {
        alt: String,
    },
    SmallFont {
        tag: String,
        /// Declared size as written, e.g. `8px` or `0.6em`
        declared: String,
        pixels: f64,
    },
    LongTextBlock {
        count: usize,
    },
    PoorContrast {
        tag: String,
        foreground: String,
        background: String,
    },
    ColorDependency {
        count: usize,
    },
}

impl IssueDetail {
    pub fn kind(&self) -> IssueKind {
        match self {
            IssueDetail::MissingAlt { .. } => IssueKind::MissingAlt,
            IssueDetail::EmptyAlt { .. } => IssueKind::EmptyAlt,
            IssueDetail::GenericAlt { .. } => IssueKind::GenericAlt,
            IssueDetail::SmallFont { .. } => IssueKind::SmallFont,
            IssueDetail::LongTextBlock { .. } => IssueKind::LongTextBlock,
            IssueDetail::PoorContrast { .. } => IssueKind::PoorContrast,
            IssueDetail::ColorDependency { .. } => IssueKind::ColorDependency,
        }
    }

    fn describe(&self) -> String {
        match self {
            IssueDetail::MissingAlt { src } => {
                format!("Image with src=\"{}\" has no alt attribute", src)
            }
            IssueDetail::EmptyAlt { src } => format!(
                "Image with src=\"{}\" has empty alt text (okay if decorative)",
                src
            ),
            IssueDetail::GenericAlt { alt } => {
                format!("Alt text \"{}\" is too generic and not descriptive", alt)
            }
            IssueDetail::SmallFont {
                tag,
                declared,
                pixels,
            } => format!(
                "Font size {} on <{}> (\u{2248}{:.1}px) may be too small for readability",
                declared, tag, pixels
            ),
            IssueDetail::LongTextBlock { count } => format!(
                "Found {} very long text block{} that may hurt readability",
                count,
                if *count == 1 { "" } else { "s" }
            ),
            IssueDetail::PoorContrast {
                foreground,
                background,
                ..
            } => format!(
                "Text color \"{}\" on background \"{}\" may have insufficient contrast",
                foreground, background
            ),
            IssueDetail::ColorDependency { count } => format!(
                "Heavy reliance on color ({} styled elements) - ensure information is also conveyed through other means",
                count
            ),
        }
    }
}

/// A single detected defect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    #[serde(flatten)]
    pub detail: IssueDetail,
    /// Which element the issue points at, e.g. `Image 2` or `Element 4 (p)`
    pub element: String,
    pub description: String,
    pub severity: Severity,
    pub guideline_ref: String,
}

impl Issue {
    pub fn new(element: impl Into<String>, detail: IssueDetail) -> Self {
        let kind = detail.kind();
        Self {
            description: detail.describe(),
            element: element.into(),
            severity: kind.severity(),
            guideline_ref: kind.guideline().to_string(),
            detail,
        }
    }

    pub fn kind(&self) -> IssueKind {
        self.detail.kind()
    }
}
