use crate::document::DocumentNode;
use crate::error::AccError;
use crate::types::Issue;
use std::fmt;
use std::str::FromStr;

use super::{AltTextChecker, ColorContrastChecker, FontSizeChecker};

/// The kind of checker being run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckKind {
    AltText,
    FontSize,
    ColorContrast,
}

impl CheckKind {
    /// All checkers, in invocation order.
    pub const fn all() -> [CheckKind; 3] {
        [
            CheckKind::AltText,
            CheckKind::FontSize,
            CheckKind::ColorContrast,
        ]
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                CheckKind::AltText => "alt-text",
                CheckKind::FontSize => "font-size",
                CheckKind::ColorContrast => "color-contrast",
            }
        )
    }
}

impl FromStr for CheckKind {
    type Err = AccError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "alt-text" | "alt" => Ok(CheckKind::AltText),
            "font-size" | "font" => Ok(CheckKind::FontSize),
            "color-contrast" | "contrast" | "color" => Ok(CheckKind::ColorContrast),
            _ => Err(AccError::Config(format!("Unknown check: {}", s))),
        }
    }
}

/// Issues and remediation suggestions produced by one checker.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckResult {
    pub issues: Vec<Issue>,
    pub suggestions: Vec<String>,
}

impl CheckResult {
    pub fn new(issues: Vec<Issue>, suggestions: Vec<String>) -> Self {
        Self {
            issues,
            suggestions,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty() && self.suggestions.is_empty()
    }
}

/// Trait for a stateless rule evaluator over a document tree.
///
/// Checkers are total: a malformed or unusual element never aborts a check,
/// it simply produces no issue.
pub trait Checker {
    fn kind(&self) -> CheckKind;
    fn check<N: DocumentNode>(&self, root: &N) -> CheckResult;
}

/// Results of one pass, one slot per checker.
#[derive(Debug, Clone, Default)]
pub struct CheckOutcomes {
    pub alt_text: CheckResult,
    pub font_size: CheckResult,
    pub color_contrast: CheckResult,
}

impl CheckOutcomes {
    /// Results in invocation order: alt text, font size, color contrast.
    pub fn into_ordered(self) -> [CheckResult; 3] {
        [self.alt_text, self.font_size, self.color_contrast]
    }
}

/// Run the selected checkers against `root`. An empty selection runs all of
/// them; unselected checkers leave their slot empty.
pub fn run_checkers<N: DocumentNode>(selected: &[CheckKind], root: &N) -> CheckOutcomes {
    let desired: Vec<CheckKind> = if selected.is_empty() {
        CheckKind::all().to_vec()
    } else {
        selected.to_vec()
    };

    let mut outcomes = CheckOutcomes::default();
    for kind in CheckKind::all() {
        if !desired.contains(&kind) {
            continue;
        }
        let result = match kind {
            CheckKind::AltText => AltTextChecker.check(root),
            CheckKind::FontSize => FontSizeChecker::default().check(root),
            CheckKind::ColorContrast => ColorContrastChecker::default().check(root),
        };
        log::debug!(
            "{} check: {} issue(s), {} suggestion(s)",
            kind,
            result.issues.len(),
            result.suggestions.len()
        );
        match kind {
            CheckKind::AltText => outcomes.alt_text = result,
            CheckKind::FontSize => outcomes.font_size = result,
            CheckKind::ColorContrast => outcomes.color_contrast = result,
        }
    }
    outcomes
}
