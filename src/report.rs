//! Report aggregation.
//!
//! Merges the per-checker results into one [`AnalysisResult`]: issues are
//! concatenated in checker order, suggestions are deduplicated by exact
//! string equality (first occurrence wins), and the markdown narrative groups
//! issues by severity bucket while keeping each bucket's encounter order.

use std::collections::HashSet;
use std::fmt::Write as FmtWrite;

use serde::{Deserialize, Serialize};

use crate::checks::{CheckOutcomes, CheckResult};
use crate::error::AccError;
use crate::types::{Issue, Severity, SourceKind};

/// How many suggestions the "no issues" narrative lists.
const NO_ISSUE_SUGGESTION_LIMIT: usize = 3;

/// Coarse state of one analysis call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisStatus {
    /// Nothing was analyzed (blank input)
    Ready,
    /// Acquisition or parsing failed before the checkers ran
    Error,
    /// The checkers ran; see the issue count
    Completed,
}

impl AnalysisStatus {
    /// Short status line shown next to the report.
    pub fn message(self, issue_count: usize) -> String {
        match self {
            AnalysisStatus::Ready => "Ready to analyze...".to_string(),
            AnalysisStatus::Error => "Error occurred".to_string(),
            AnalysisStatus::Completed if issue_count == 0 => {
                "Accessibility check completed successfully!".to_string()
            }
            AnalysisStatus::Completed => format!(
                "Analysis completed! Found {} accessibility issues.",
                issue_count
            ),
        }
    }
}

/// Final output of one analysis call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub issues: Vec<Issue>,
    /// Deduplicated remediation suggestions, in first-seen order
    pub suggestions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_kind: Option<SourceKind>,
    pub errored: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_detail: Option<String>,
    pub status: AnalysisStatus,
    pub issue_count: usize,
    /// Markdown narrative
    pub report: String,
}

impl AnalysisResult {
    /// Response for blank input; nothing was fetched or checked.
    pub fn empty_input() -> Self {
        Self::not_analyzed(
            AnalysisStatus::Ready,
            AccError::EmptyInput.to_string(),
            None,
        )
    }

    /// Response for a failure that happened before the checkers ran.
    pub fn from_error(err: &AccError) -> Self {
        match err {
            AccError::EmptyInput => Self::empty_input(),
            AccError::Parse(detail) => Self::not_analyzed(
                AnalysisStatus::Error,
                format!("Error parsing HTML: {}", detail),
                Some(detail.clone()),
            ),
            other => {
                let detail = other.to_string();
                Self::not_analyzed(
                    AnalysisStatus::Error,
                    format!("Error: {}", detail),
                    Some(detail),
                )
            }
        }
    }

    fn not_analyzed(status: AnalysisStatus, report: String, error_detail: Option<String>) -> Self {
        Self {
            issues: Vec::new(),
            suggestions: Vec::new(),
            source_kind: None,
            errored: error_detail.is_some(),
            error_detail,
            status,
            issue_count: 0,
            report,
        }
    }

    pub fn status_message(&self) -> String {
        self.status.message(self.issue_count)
    }
}

/// Merge the three checker results for a document.
pub fn aggregate(
    alt_text: CheckResult,
    font_size: CheckResult,
    color_contrast: CheckResult,
    source_kind: SourceKind,
) -> AnalysisResult {
    let mut issues = Vec::new();
    let mut raw_suggestions = Vec::new();
    for result in [alt_text, font_size, color_contrast] {
        issues.extend(result.issues);
        raw_suggestions.extend(result.suggestions);
    }
    let suggestions = dedup_suggestions(raw_suggestions);

    let report = if issues.is_empty() {
        render_clean_report(&suggestions)
    } else {
        render_issue_report(&issues, &suggestions, source_kind)
    };

    AnalysisResult {
        issue_count: issues.len(),
        issues,
        suggestions,
        source_kind: Some(source_kind),
        errored: false,
        error_detail: None,
        status: AnalysisStatus::Completed,
        report,
    }
}

pub fn aggregate_outcomes(outcomes: CheckOutcomes, source_kind: SourceKind) -> AnalysisResult {
    let [alt_text, font_size, color_contrast] = outcomes.into_ordered();
    aggregate(alt_text, font_size, color_contrast, source_kind)
}

/// Drop exact duplicates, keeping the first occurrence. Suggestions that differ
/// only in wording or punctuation are kept apart.
pub fn dedup_suggestions(suggestions: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    suggestions
        .into_iter()
        .filter(|s| seen.insert(s.clone()))
        .collect()
}

/// Non-empty severity buckets in High, Medium, Low order. Issues keep their
/// relative order inside a bucket.
pub fn group_by_severity(issues: &[Issue]) -> Vec<(Severity, Vec<&Issue>)> {
    Severity::all()
        .into_iter()
        .map(|severity| {
            let bucket: Vec<&Issue> = issues.iter().filter(|i| i.severity == severity).collect();
            (severity, bucket)
        })
        .filter(|(_, bucket)| !bucket.is_empty())
        .collect()
}

fn render_clean_report(suggestions: &[String]) -> String {
    let mut buf = String::new();
    writeln!(buf, "**Great news!** No major accessibility issues detected.").ok();
    if !suggestions.is_empty() {
        writeln!(buf).ok();
        writeln!(buf, "However, consider these general best practices:").ok();
        for suggestion in suggestions.iter().take(NO_ISSUE_SUGGESTION_LIMIT) {
            writeln!(buf, "- {suggestion}").ok();
        }
    }
    buf
}

fn render_issue_report(issues: &[Issue], suggestions: &[String], source_kind: SourceKind) -> String {
    let mut buf = String::new();
    writeln!(buf, "## Accessibility Analysis Report").ok();
    writeln!(buf).ok();
    writeln!(buf, "**Issues Found:** {}", issues.len()).ok();
    writeln!(buf, "**Source:** {}", source_kind).ok();
    writeln!(buf).ok();

    for (severity, bucket) in group_by_severity(issues) {
        writeln!(buf, "### {}", severity.heading()).ok();
        for issue in bucket {
            writeln!(buf, "**{}** - {}", issue.kind().title(), issue.element).ok();
            writeln!(buf, "- {}", issue.description).ok();
            writeln!(buf, "- Standard: {}", issue.guideline_ref).ok();
            writeln!(buf).ok();
        }
    }

    if !suggestions.is_empty() {
        writeln!(buf, "## Recommended Actions").ok();
        writeln!(buf).ok();
        for (idx, suggestion) in suggestions.iter().enumerate() {
            writeln!(buf, "{}. {}", idx + 1, suggestion).ok();
        }
    }
    buf
}
