use crate::resource::InputError;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::ParseError;

#[derive(Debug, Error)]
pub enum AccError {
    #[error("Please provide a URL or HTML content to analyze.")]
    EmptyInput,

    #[error("Invalid input format")]
    InvalidInput,

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] ParseError),

    #[error("HTTP Error {}", .status.as_u16())]
    HttpStatus { status: StatusCode },

    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("{0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AccError {
    pub fn parse(message: impl Into<String>) -> Self {
        AccError::Parse(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        AccError::Config(message.into())
    }

    /// True for failures that happen while obtaining the document, before any
    /// parsing or rule evaluation.
    pub fn is_acquisition(&self) -> bool {
        matches!(
            self,
            AccError::InvalidInput
                | AccError::InvalidUrl(_)
                | AccError::HttpStatus { .. }
                | AccError::Network(_)
        )
    }

    pub fn to_payload(&self) -> ErrorPayload {
        match self {
            AccError::EmptyInput => ErrorPayload::new(
                ErrorCategory::Input,
                self.to_string(),
                "Pass --input with a URL or HTML markup, --file with a local HTML file, or --example.",
            ),
            AccError::InvalidInput => ErrorPayload::new(
                ErrorCategory::Input,
                self.to_string(),
                "Input must start with '<' (markup) or with http://, https:// or www. (URL).",
            ),
            AccError::InvalidUrl(e) => ErrorPayload::new(
                ErrorCategory::Input,
                e.to_string(),
                "Verify URL/format (e.g., https://example.com).",
            ),
            AccError::HttpStatus { status } => {
                let remediation = if status.is_client_error() {
                    "Check the URL is correct and publicly reachable without authentication."
                } else {
                    "The server failed to respond successfully; retry later or analyze saved markup with --file."
                };
                ErrorPayload::new(ErrorCategory::Network, self.to_string(), remediation)
            }
            AccError::Network(e) => {
                let remediation = if e.is_timeout() {
                    "The request timed out; raise --timeout or [fetch].timeout in the config."
                } else {
                    "Check connectivity/proxy/VPN and retry."
                };
                ErrorPayload::new(ErrorCategory::Network, self.to_string(), remediation)
            }
            AccError::Parse(msg) => ErrorPayload::new(
                ErrorCategory::Parse,
                format!("Error parsing HTML: {}", msg),
                "Make sure the document is UTF-8 encoded HTML.",
            ),
            AccError::Io(e) => ErrorPayload::new(
                ErrorCategory::Config,
                e.to_string(),
                "Check file paths/permissions.",
            ),
            AccError::Serialization(e) => ErrorPayload::new(
                ErrorCategory::Unknown,
                e.to_string(),
                "Re-run with --verbose; file an issue if persistent.",
            ),
            AccError::Config(msg) => {
                let lower = msg.to_ascii_lowercase();
                if lower.contains("unknown check") {
                    ErrorPayload::new(
                        ErrorCategory::Config,
                        msg.to_string(),
                        "Use check names alt-text, font-size or color-contrast.",
                    )
                } else if lower.contains("timeout") {
                    ErrorPayload::new(
                        ErrorCategory::Config,
                        msg.to_string(),
                        "Use a positive timeout (e.g., timeout = \"10s\" or --timeout 10).",
                    )
                } else if lower.contains("failed to read config") {
                    ErrorPayload::new(
                        ErrorCategory::Config,
                        msg.to_string(),
                        "Verify the config path exists and is valid TOML.",
                    )
                } else {
                    ErrorPayload::new(
                        ErrorCategory::Config,
                        msg.to_string(),
                        "Check flags/paths and the [fetch]/[checks] config sections.",
                    )
                }
            }
        }
    }
}

impl From<InputError> for AccError {
    fn from(err: InputError) -> Self {
        match err {
            InputError::Empty => AccError::EmptyInput,
            InputError::InvalidFormat => AccError::InvalidInput,
            InputError::InvalidUrl { source, .. } => AccError::InvalidUrl(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, AccError>;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    Input,
    Network,
    Parse,
    Config,
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    pub category: ErrorCategory,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remediation: Option<String>,
}

impl ErrorPayload {
    pub fn new(category: ErrorCategory, message: String, remediation: impl Into<String>) -> Self {
        Self {
            category,
            message,
            remediation: Some(remediation.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_message_matches_report_wording() {
        let err = AccError::HttpStatus {
            status: StatusCode::NOT_FOUND,
        };
        assert_eq!(err.to_string(), "HTTP Error 404");
        let payload = err.to_payload();
        assert_eq!(payload.category, ErrorCategory::Network);
        let remediation = payload.remediation.unwrap_or_default();
        assert!(
            remediation.contains("URL"),
            "expected client error remediation, got: {remediation}"
        );
    }

    #[test]
    fn server_status_suggests_retry() {
        let err = AccError::HttpStatus {
            status: StatusCode::BAD_GATEWAY,
        };
        let remediation = err.to_payload().remediation.unwrap_or_default();
        assert!(remediation.contains("retry"), "got: {remediation}");
    }

    #[test]
    fn parse_payload_prefixes_message() {
        let err = AccError::parse("input is not valid UTF-8");
        let payload = err.to_payload();
        assert_eq!(payload.category, ErrorCategory::Parse);
        assert_eq!(
            payload.message,
            "Error parsing HTML: input is not valid UTF-8"
        );
    }

    #[test]
    fn config_payload_lists_check_names_for_unknown_check() {
        let err = AccError::config("Unknown check: headings");
        let remediation = err.to_payload().remediation.unwrap_or_default();
        assert!(
            remediation.contains("alt-text") && remediation.contains("color-contrast"),
            "expected check names in remediation, got: {remediation}"
        );
    }

    #[test]
    fn config_payload_uses_default_remediation_for_other_messages() {
        let err = AccError::config("Some other config issue");
        let remediation = err.to_payload().remediation.unwrap_or_default();
        assert!(remediation.contains("Check flags/paths"));
    }

    #[test]
    fn input_errors_convert_to_input_category() {
        let err: AccError = InputError::InvalidFormat.into();
        assert!(matches!(err, AccError::InvalidInput));
        assert!(err.is_acquisition());
        assert_eq!(err.to_payload().category, ErrorCategory::Input);

        let err: AccError = InputError::Empty.into();
        assert!(matches!(err, AccError::EmptyInput));
        assert!(!err.is_acquisition());
    }
}
