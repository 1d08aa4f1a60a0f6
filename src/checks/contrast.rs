//! Heuristic color checks over inline styles.
//!
//! - Same-class contrast (WCAG 1.4.3): `color` and `background-color` that
//!   both classify light, or both dark, are flagged.
//! - Color reliance (WCAG 1.4.1): many styled elements declaring colors
//!   suggest information may be conveyed by color alone.

use crate::document::DocumentNode;
use crate::types::{Issue, IssueDetail};

use super::{classify_color, declaration_value, declarations, CheckKind, CheckResult, Checker};

const DEFAULT_COLOR_DEPENDENCY_THRESHOLD: usize = 5;

const CONTRAST_SUGGESTIONS: [&str; 3] = [
    "Ensure text has at least 4.5:1 contrast ratio with background (7:1 for AAA compliance)",
    "Test colors using online contrast checkers",
    "Avoid using similar shades for text and background",
];

const COLOR_DEPENDENCY_SUGGESTION: &str =
    "Don't rely solely on color to convey information - use icons, text, or patterns too";

#[derive(Debug, Clone, Copy)]
pub struct ColorContrastChecker {
    /// A color-dependency issue is raised when more styled elements than
    /// this declare a color
    pub dependency_threshold: usize,
}

impl Default for ColorContrastChecker {
    fn default() -> Self {
        Self {
            dependency_threshold: DEFAULT_COLOR_DEPENDENCY_THRESHOLD,
        }
    }
}

/// Whether the style declares `color` or any `*-color` property.
fn declares_color(style: &str) -> bool {
    declarations(style).any(|d| d.property == "color" || d.property.ends_with("-color"))
}

fn contrast_issue<N: DocumentNode>(node: &N, style: &str, index: usize) -> Option<Issue> {
    let foreground = declaration_value(style, "color")?;
    let background = declaration_value(style, "background-color")?;
    if !classify_color(foreground).clashes_with(classify_color(background)) {
        return None;
    }
    let tag = node.tag_name().to_string();
    Some(Issue::new(
        format!("Element {} ({})", index, tag),
        IssueDetail::PoorContrast {
            tag,
            foreground: foreground.to_string(),
            background: background.to_string(),
        },
    ))
}

impl Checker for ColorContrastChecker {
    fn kind(&self) -> CheckKind {
        CheckKind::ColorContrast
    }

    fn check<N: DocumentNode>(&self, root: &N) -> CheckResult {
        let nodes = root.descendants();
        let styled: Vec<(&N, &str)> = nodes
            .iter()
            .filter_map(|node| node.inline_style().map(|style| (node, style)))
            .collect();

        let mut issues: Vec<Issue> = styled
            .iter()
            .enumerate()
            .filter_map(|(idx, (node, style))| contrast_issue(*node, style, idx + 1))
            .collect();
        let contrast_found = !issues.is_empty();

        let colored = styled
            .iter()
            .filter(|(_, style)| declares_color(style))
            .count();
        let dependency_found = colored > self.dependency_threshold;
        if dependency_found {
            issues.push(Issue::new(
                format!("{} elements", colored),
                IssueDetail::ColorDependency { count: colored },
            ));
        }

        let mut suggestions: Vec<String> = Vec::new();
        if contrast_found {
            suggestions.extend(CONTRAST_SUGGESTIONS.iter().map(|s| s.to_string()));
        }
        if dependency_found {
            suggestions.push(COLOR_DEPENDENCY_SUGGESTION.to_string());
        }

        CheckResult::new(issues, suggestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Element;
    use crate::types::{IssueKind, Severity};

    fn page(styles: &[&str]) -> Element {
        styles.iter().fold(Element::new("body"), |body, style| {
            body.child(Element::new("div").style(*style).text("text"))
        })
    }

    #[test]
    fn light_on_light_is_flagged() {
        let doc = page(&["color: yellow; background-color: white;"]);
        let result = ColorContrastChecker::default().check(&&doc);
        assert_eq!(result.issues.len(), 1);
        let issue = &result.issues[0];
        assert_eq!(issue.kind(), IssueKind::PoorContrast);
        assert_eq!(issue.severity, Severity::High);
        assert_eq!(issue.element, "Element 1 (div)");
        assert!(issue.description.contains("\"yellow\""));
        assert!(issue.description.contains("\"white\""));
        assert_eq!(result.suggestions.len(), 3);
    }

    #[test]
    fn dark_on_dark_is_flagged() {
        let doc = page(&["color: #333; background-color: BLACK"]);
        let result = ColorContrastChecker::default().check(&&doc);
        assert_eq!(result.issues.len(), 1);
    }

    #[test]
    fn dark_on_light_is_fine() {
        let doc = page(&["color: navy; background-color: lightgray"]);
        assert!(ColorContrastChecker::default().check(&&doc).is_empty());
    }

    #[test]
    fn indeterminate_or_unpaired_colors_are_skipped() {
        let doc = page(&[
            "color: red; background-color: white",
            "color: white",
            "background-color: white",
        ]);
        let result = ColorContrastChecker::default().check(&&doc);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn background_declared_first_still_pairs_correctly() {
        let doc = page(&["background-color: navy; color: white"]);
        assert!(ColorContrastChecker::default().check(&&doc).is_empty());
    }

    #[test]
    fn color_dependency_needs_more_than_five_colored_elements() {
        let five = page(&["color: red"; 5]);
        assert!(ColorContrastChecker::default().check(&&five).is_empty());

        let six = page(&[
            "color: red",
            "color: blue",
            "border-color: green",
            "background-color: teal",
            "color: orange",
            "color: red; margin: 0",
            "margin: 0",
        ]);
        let result = ColorContrastChecker::default().check(&&six);
        assert_eq!(result.issues.len(), 1);
        let issue = &result.issues[0];
        assert_eq!(issue.kind(), IssueKind::ColorDependency);
        assert_eq!(issue.severity, Severity::Medium);
        assert_eq!(issue.element, "6 elements");
        assert_eq!(
            result.suggestions,
            vec![COLOR_DEPENDENCY_SUGGESTION.to_string()]
        );
    }
}
