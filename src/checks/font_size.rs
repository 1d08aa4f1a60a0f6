//! Font size and readability checks.
//!
//! Inline `font-size` declarations are normalized to approximate pixels and
//! flagged below 12px (WCAG 1.4.4). Very long text blocks are reported once
//! per document (WCAG 2.4.8).

use std::sync::OnceLock;

use regex::Regex;

use crate::document::DocumentNode;
use crate::types::{Issue, IssueDetail};

use super::{declarations, normalize_to_pixels, CheckKind, CheckResult, Checker, FontUnit};

/// Magnitude immediately followed by a recognized unit.
const FONT_SIZE_PATTERN: &str = r"(?i)^(\d+(?:\.\d+)?)(px|pt|rem|em|%)";

const DEFAULT_MIN_PIXELS: f64 = 12.0;
const DEFAULT_LONG_TEXT_CHARS: usize = 500;

const TEXT_CONTAINER_TAGS: &[&str] = &["p", "div", "span", "li", "td", "th"];

const SMALL_FONT_SUGGESTIONS: [&str; 3] = [
    "Use minimum 12px font size for body text (14px+ recommended)",
    "Ensure text can be zoomed to 200% without loss of functionality",
    "Test readability on different devices and screen sizes",
];

const LONG_TEXT_SUGGESTION: &str =
    "Break up long text blocks with headings, bullet points, or shorter paragraphs";

fn font_size_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(FONT_SIZE_PATTERN).expect("font-size pattern is valid"))
}

/// A `font-size` value that parsed into a magnitude and unit.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FontSize {
    pub declared: String,
    pub magnitude: f64,
    pub unit: FontUnit,
}

impl FontSize {
    pub fn pixels(&self) -> f64 {
        normalize_to_pixels(self.magnitude, self.unit)
    }
}

/// The first `font-size` declaration in an inline style that uses a
/// recognized unit. Declarations with other values are passed over.
pub(crate) fn parse_font_size(style: &str) -> Option<FontSize> {
    declarations(style)
        .filter(|d| d.property == "font-size")
        .find_map(|d| font_size_from_value(d.value))
}

fn font_size_from_value(value: &str) -> Option<FontSize> {
    let caps = font_size_regex().captures(value)?;
    let magnitude: f64 = caps[1].parse().ok()?;
    let unit: FontUnit = caps[2].parse().ok()?;
    Some(FontSize {
        declared: caps[0].to_string(),
        magnitude,
        unit,
    })
}

#[derive(Debug, Clone, Copy)]
pub struct FontSizeChecker {
    /// Sizes strictly below this many pixels are flagged
    pub min_pixels: f64,
    /// Text longer than this many characters counts as a long block
    pub long_text_chars: usize,
}

impl Default for FontSizeChecker {
    fn default() -> Self {
        Self {
            min_pixels: DEFAULT_MIN_PIXELS,
            long_text_chars: DEFAULT_LONG_TEXT_CHARS,
        }
    }
}

impl FontSizeChecker {
    fn small_font_issues<N: DocumentNode>(&self, nodes: &[N]) -> Vec<Issue> {
        let mut issues = Vec::new();
        let styled = nodes
            .iter()
            .filter_map(|node| node.inline_style().map(|style| (node, style)));

        for (idx, (node, style)) in styled.enumerate() {
            let Some(size) = parse_font_size(style) else {
                continue;
            };
            let pixels = size.pixels();
            if pixels < self.min_pixels {
                let tag = node.tag_name().to_string();
                issues.push(Issue::new(
                    format!("Element {} ({})", idx + 1, tag),
                    IssueDetail::SmallFont {
                        tag,
                        declared: size.declared,
                        pixels,
                    },
                ));
            }
        }
        issues
    }

    fn count_long_blocks<N: DocumentNode>(&self, nodes: &[N]) -> usize {
        nodes
            .iter()
            .filter(|node| TEXT_CONTAINER_TAGS.iter().any(|tag| node.is_tag(tag)))
            .filter(|node| node.text_content().chars().count() > self.long_text_chars)
            .count()
    }
}

impl Checker for FontSizeChecker {
    fn kind(&self) -> CheckKind {
        CheckKind::FontSize
    }

    fn check<N: DocumentNode>(&self, root: &N) -> CheckResult {
        let nodes = root.descendants();
        let mut issues = self.small_font_issues(&nodes);
        let small_fonts_found = !issues.is_empty();

        let long_blocks = self.count_long_blocks(&nodes);
        if long_blocks > 0 {
            issues.push(Issue::new(
                format!("{} elements", long_blocks),
                IssueDetail::LongTextBlock { count: long_blocks },
            ));
        }

        let mut suggestions: Vec<String> = Vec::new();
        if small_fonts_found {
            suggestions.extend(SMALL_FONT_SUGGESTIONS.iter().map(|s| s.to_string()));
        }
        if long_blocks > 0 {
            suggestions.push(LONG_TEXT_SUGGESTION.to_string());
        }

        CheckResult::new(issues, suggestions)
    }
}
