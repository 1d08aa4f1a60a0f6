use std::path::PathBuf;
use std::process::ExitCode;

use acc_lib::samples::EXAMPLE_HTML;
use acc_lib::{
    analyze_document, classify_input, try_analyze_bytes, try_analyze_markup, AccError, AccOutput,
    AnalysisResult, AnalyzeOutput, Config, DocumentInput, InputDescriptor, InputOrigin,
    SourceKind,
};

use crate::cli::OutputFormat;
use crate::formatting::{exit_code_for_analysis, render_error, write_output};
use crate::settings::{
    format_effective_config, load_config, resolve_analyze_config, AnalyzeFlagSources,
};

/// Where the analyze command gets its document from.
pub enum AnalyzeSource {
    Input(String),
    File(PathBuf),
    Example,
}

impl AnalyzeSource {
    pub fn from_args(input: Option<String>, file: Option<PathBuf>, example: bool) -> Option<Self> {
        match (input, file, example) {
            (Some(input), _, _) => Some(AnalyzeSource::Input(input)),
            (None, Some(path), _) => Some(AnalyzeSource::File(path)),
            (None, None, true) => Some(AnalyzeSource::Example),
            (None, None, false) => None,
        }
    }
}

/// Run the analyze command.
pub async fn run_analyze(
    raw_args: &[String],
    config_path: Option<PathBuf>,
    source: Option<AnalyzeSource>,
    checks: Option<Vec<String>>,
    timeout: u64,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> ExitCode {
    let config = match load_config(config_path.as_deref()) {
        Ok(cfg) => cfg,
        Err(err) => return render_error(err, format, output.clone()),
    };
    let flag_sources = AnalyzeFlagSources::from_args(raw_args);
    let config = match resolve_analyze_config(timeout, checks, config, &flag_sources) {
        Ok(cfg) => cfg,
        Err(err) => return render_error(err, format, output.clone()),
    };
    log::info!("{}", format_effective_config(&config, config_path.as_deref()));

    let Some(source) = source else {
        return render_error(AccError::EmptyInput, format, output);
    };
    let (descriptor, result) = match analyze_source(source, &config).await {
        Ok(analyzed) => analyzed,
        Err(err) => return render_error(err, format, output.clone()),
    };

    let status = result.status;
    let issue_count = result.issue_count;
    let body = AccOutput::Analyze(AnalyzeOutput::new(descriptor, result));
    if let Err(err) = write_output(&body, format, output.clone()) {
        return render_error(AccError::Config(err.to_string()), format, output);
    }
    exit_code_for_analysis(status, issue_count)
}

async fn analyze_source(
    source: AnalyzeSource,
    config: &Config,
) -> Result<(InputDescriptor, AnalysisResult), AccError> {
    match source {
        AnalyzeSource::Example => {
            log::debug!("analyzing built-in example");
            let result = try_analyze_markup(EXAMPLE_HTML, SourceKind::RawMarkup, config)?;
            Ok((descriptor(InputOrigin::Example, None), result))
        }
        AnalyzeSource::File(path) => {
            log::debug!("reading {}", path.display());
            let bytes = std::fs::read(&path)?;
            let result = try_analyze_bytes(&bytes, SourceKind::RawMarkup, config)?;
            let value = path.display().to_string();
            Ok((descriptor(InputOrigin::File, Some(value)), result))
        }
        AnalyzeSource::Input(input) => {
            let document = classify_input(&input)?;
            let input_descriptor = match &document {
                DocumentInput::Markup(_) => descriptor(InputOrigin::Inline, None),
                DocumentInput::Locator(url) => {
                    descriptor(InputOrigin::Url, Some(url.to_string()))
                }
            };
            let result = analyze_document(document, config).await?;
            Ok((input_descriptor, result))
        }
    }
}

fn descriptor(origin: InputOrigin, value: Option<String>) -> InputDescriptor {
    InputDescriptor { origin, value }
}
