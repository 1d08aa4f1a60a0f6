//! End-to-end analysis: classify input, acquire, parse, check, aggregate.
//!
//! Failures before the checkers run are folded into the returned
//! [`AnalysisResult`] so callers get one uniform value back.

use crate::checks::{run_checkers, CheckKind};
use crate::config::{Config, FetchConfig};
use crate::document::{parse_html, parse_html_bytes, DocumentNode};
use crate::error::{AccError, Result};
use crate::fetch::fetch_document;
use crate::report::{aggregate_outcomes, AnalysisResult};
use crate::resource::{classify_input, DocumentInput};
use crate::types::SourceKind;

/// Markup ready for parsing, plus where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDocument {
    pub markup: String,
    pub source_kind: SourceKind,
}

/// Run every checker against `document`.
pub fn analyze<N: DocumentNode>(document: &N, source_kind: SourceKind) -> AnalysisResult {
    analyze_with(document, source_kind, &CheckKind::all())
}

/// Run only the `selected` checkers; the others contribute nothing.
pub fn analyze_with<N: DocumentNode>(
    document: &N,
    source_kind: SourceKind,
    selected: &[CheckKind],
) -> AnalysisResult {
    let outcomes = run_checkers(selected, document);
    let result = aggregate_outcomes(outcomes, source_kind);
    log::debug!(
        "analysis of {} finished: {} issue(s), {} suggestion(s)",
        source_kind,
        result.issue_count,
        result.suggestions.len()
    );
    result
}

/// Parse and analyze markup that is already in memory.
pub fn analyze_markup(markup: &str, source_kind: SourceKind, config: &Config) -> AnalysisResult {
    try_analyze_markup(markup, source_kind, config).unwrap_or_else(|err| fold_error(&err))
}

/// Like [`analyze_markup`], but returns failures instead of folding them.
pub fn try_analyze_markup(
    markup: &str,
    source_kind: SourceKind,
    config: &Config,
) -> Result<AnalysisResult> {
    let selected = config.enabled_checks()?;
    let document = parse_html(markup);
    Ok(analyze_with(&document.root(), source_kind, &selected))
}

/// Parse and analyze raw bytes, such as a local file's contents.
pub fn analyze_bytes(bytes: &[u8], source_kind: SourceKind, config: &Config) -> AnalysisResult {
    try_analyze_bytes(bytes, source_kind, config).unwrap_or_else(|err| fold_error(&err))
}

/// Like [`analyze_bytes`], but returns failures instead of folding them.
pub fn try_analyze_bytes(
    bytes: &[u8],
    source_kind: SourceKind,
    config: &Config,
) -> Result<AnalysisResult> {
    let selected = config.enabled_checks()?;
    let document = parse_html_bytes(bytes)?;
    Ok(analyze_with(&document.root(), source_kind, &selected))
}

/// Resolve user input into markup, fetching it when it is a locator.
pub async fn load_document(input: &str, fetch: &FetchConfig) -> Result<LoadedDocument> {
    acquire_document(classify_input(input)?, fetch).await
}

/// Turn an already classified input into markup.
pub async fn acquire_document(
    input: DocumentInput,
    fetch: &FetchConfig,
) -> Result<LoadedDocument> {
    let source_kind = input.source_kind();
    let markup = match input {
        DocumentInput::Markup(markup) => markup,
        DocumentInput::Locator(url) => fetch_document(&url, fetch).await?,
    };
    Ok(LoadedDocument {
        markup,
        source_kind,
    })
}

/// Acquire, parse and analyze a classified input.
pub async fn analyze_document(input: DocumentInput, config: &Config) -> Result<AnalysisResult> {
    let loaded = acquire_document(input, &config.fetch).await?;
    try_analyze_markup(&loaded.markup, loaded.source_kind, config)
}

/// Analyze a user-supplied string: raw markup or a URL.
///
/// Never fails; blank input, acquisition failures and parse failures come
/// back as an [`AnalysisResult`] with zero issues.
pub async fn analyze_input(input: &str, config: &Config) -> AnalysisResult {
    let outcome = match classify_input(input) {
        Ok(document) => analyze_document(document, config).await,
        Err(err) => Err(err.into()),
    };
    outcome.unwrap_or_else(|err| fold_error(&err))
}

fn fold_error(err: &AccError) -> AnalysisResult {
    log::debug!("analysis short-circuited: {}", err);
    AnalysisResult::from_error(err)
}
