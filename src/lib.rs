//! Accessibility Checker (ACC) Library
//!
//! A fast, heuristic accessibility pass over HTML documents. Three checkers
//! inspect a parsed document tree for common defects (image alternative text,
//! small fonts and long text blocks, poor color contrast and color reliance)
//! and their findings are merged into one prioritized report.
//!
//! # Module Overview
//!
//! - [`document`] - Read-only document tree capability and the HTML adapter
//! - [`checks`] - The checkers, unit normalizer and color classifier
//! - [`report`] - Aggregation of checker results into an [`AnalysisResult`]
//! - [`resource`] / [`fetch`] - Input classification and document retrieval
//! - [`pipeline`] - End-to-end analysis entry points
//! - [`config`] - Configuration file support
//! - [`output`] - JSON output schemas
//!
//! # Example
//!
//! ```
//! use acc_lib::{analyze, parse_html, SourceKind};
//!
//! let doc = parse_html(r#"<body><img src="logo.png"></body>"#);
//! let result = analyze(&doc.root(), SourceKind::RawMarkup);
//! assert_eq!(result.issue_count, 1);
//! ```

pub mod checks;
pub mod config;
pub mod document;
pub mod error;
pub mod fetch;
pub mod output;
pub mod pipeline;
pub mod report;
pub mod resource;
pub mod samples;
pub mod types;

pub use checks::{
    classify_color, normalize_to_pixels, run_checkers, AltTextChecker, CheckKind, CheckOutcomes,
    CheckResult, Checker, ColorClass, ColorContrastChecker, FontSizeChecker, FontUnit,
};
pub use config::{ChecksConfig, Config, FetchConfig};
pub use document::{parse_html, parse_html_bytes, DocumentNode, Element, HtmlDocument, Node};
pub use error::{AccError, ErrorCategory, ErrorPayload, Result};
pub use fetch::{fetch_document, DocumentFetcher};
pub use output::{
    AccOutput, AnalyzeOutput, ErrorOutput, InputDescriptor, InputOrigin, ACC_OUTPUT_VERSION,
};
pub use pipeline::{
    acquire_document, analyze, analyze_bytes, analyze_document, analyze_input, analyze_markup,
    analyze_with, load_document, try_analyze_bytes, try_analyze_markup, LoadedDocument,
};
pub use report::{aggregate, aggregate_outcomes, AnalysisResult, AnalysisStatus};
pub use resource::{classify_input, DocumentInput, InputError};
pub use types::{Issue, IssueDetail, IssueKind, Severity, SourceKind};
