//! Core types used throughout the ACC library.
//!
//! - [`SourceKind`] - Where the analyzed markup came from
//! - [`Severity`] - Priority bucket attached to every issue

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of the analyzed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceKind {
    /// Markup supplied directly (inline text or a local file)
    RawMarkup,
    /// Markup retrieved from a network location
    RemoteDocument,
}

impl SourceKind {
    /// Human-readable label used in the report narrative.
    pub const fn label(self) -> &'static str {
        match self {
            SourceKind::RawMarkup => "Raw HTML",
            SourceKind::RemoteDocument => "URL",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Issue priority. The declaration order is the rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub const fn all() -> [Severity; 3] {
        [Severity::High, Severity::Medium, Severity::Low]
    }

    /// Section heading for this bucket in the report narrative.
    pub const fn heading(self) -> &'static str {
        match self {
            Severity::High => "High Priority Issues",
            Severity::Medium => "Medium Priority Issues",
            Severity::Low => "Low Priority Issues",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_order_is_high_medium_low() {
        let mut shuffled = vec![Severity::Low, Severity::High, Severity::Medium];
        shuffled.sort();
        assert_eq!(shuffled, Severity::all().to_vec());
    }

    #[test]
    fn source_kind_labels() {
        assert_eq!(SourceKind::RawMarkup.to_string(), "Raw HTML");
        assert_eq!(SourceKind::RemoteDocument.to_string(), "URL");
        let json = serde_json::to_string(&SourceKind::RemoteDocument).unwrap();
        assert_eq!(json, "\"remote-document\"");
    }
}
