use std::process::ExitCode;

use acc_lib::samples::{EXAMPLE_HTML, EXAMPLE_URLS};
use acc_lib::AccError;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::formatting::render_error;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExamplesOutput {
    urls: Vec<&'static str>,
    html: &'static str,
}

/// Run the examples command.
pub fn run_examples(format: OutputFormat) -> ExitCode {
    match format {
        OutputFormat::Json => {
            let body = ExamplesOutput {
                urls: EXAMPLE_URLS.to_vec(),
                html: EXAMPLE_HTML,
            };
            match serde_json::to_string(&body) {
                Ok(content) => println!("{content}"),
                Err(err) => return render_error(AccError::Serialization(err), format, None),
            }
        }
        OutputFormat::Pretty | OutputFormat::Markdown => println!("{}", format_examples()),
    }
    ExitCode::SUCCESS
}

fn format_examples() -> String {
    let mut lines = vec!["Example URLs:".to_string()];
    lines.extend(EXAMPLE_URLS.iter().map(|url| format!("- {url}")));
    lines.push(String::new());
    lines.push("Example HTML:".to_string());
    lines.push(EXAMPLE_HTML.to_string());
    lines.push(String::new());
    lines.push("Try: acc analyze --example --format markdown".to_string());
    lines.join("\n")
}
