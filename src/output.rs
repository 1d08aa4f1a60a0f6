use crate::error::ErrorPayload;
use crate::report::{AnalysisResult, AnalysisStatus};
use crate::types::{Issue, SourceKind};
use serde::{Deserialize, Serialize};

/// Schema version for output payloads.
pub const ACC_OUTPUT_VERSION: &str = "0.1.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum AccOutput {
    Analyze(AnalyzeOutput),
    Error(ErrorOutput),
}

/// How the analyzed input was supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputOrigin {
    Inline,
    File,
    Url,
    Example,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub origin: InputOrigin,
    /// URL or file path; omitted for inline markup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeOutput {
    pub version: String,
    pub input: InputDescriptor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_kind: Option<SourceKind>,
    pub status: AnalysisStatus,
    pub status_message: String,
    pub issue_count: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<Issue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
    pub report: String,
}

impl AnalyzeOutput {
    pub fn new(input: InputDescriptor, result: AnalysisResult) -> Self {
        Self {
            version: ACC_OUTPUT_VERSION.to_string(),
            input,
            source_kind: result.source_kind,
            status: result.status,
            status_message: result.status_message(),
            issue_count: result.issue_count,
            issues: result.issues,
            suggestions: result.suggestions,
            report: result.report,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorOutput {
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub error: ErrorPayload,
}

impl ErrorOutput {
    pub fn new(error: ErrorPayload) -> Self {
        Self {
            version: ACC_OUTPUT_VERSION.to_string(),
            message: Some(error.message.clone()),
            error,
        }
    }
}
