use std::fmt::Write as FmtWrite;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use acc_lib::{AccError, AccOutput, AnalysisStatus, AnalyzeOutput, ErrorOutput, Severity};

use crate::cli::OutputFormat;

/// Write output in the requested format.
pub fn write_output(
    body: &AccOutput,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => write_json_output(body, output.as_deref())?,
        OutputFormat::Pretty => write_pretty_output(body, output.as_deref())?,
        OutputFormat::Markdown => write_text(&format_markdown(body), output.as_deref())?,
    };
    Ok(())
}

/// Render an error and return the appropriate exit code.
pub fn render_error(err: AccError, format: OutputFormat, output: Option<PathBuf>) -> ExitCode {
    log::debug!("rendering error: {}", err);
    let payload = AccOutput::Error(ErrorOutput::new(err.to_payload()));

    match format {
        OutputFormat::Json => {
            let content =
                serde_json::to_string(&payload).unwrap_or_else(|_| "{\"mode\":\"error\"}".into());
            if let Some(path) = output {
                if let Err(write_err) = std::fs::write(&path, &content) {
                    eprintln!("Failed to write error output: {}", write_err);
                    println!("{content}");
                }
            } else {
                println!("{content}");
            }
        }
        OutputFormat::Pretty => {
            if let Err(write_err) = write_pretty_output(&payload, output.as_deref()) {
                eprintln!("Failed to write error output: {}", write_err);
            }
        }
        OutputFormat::Markdown => {
            if let Err(write_err) = write_text(&format_markdown(&payload), output.as_deref()) {
                eprintln!("Failed to write error output: {}", write_err);
            }
        }
    };

    // Reserve exit code 2 for fatal/errors; found issues use 1.
    ExitCode::from(2)
}

/// Write JSON output to file or stdout.
fn write_json_output(body: &AccOutput, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let content = serde_json::to_string(body)?;
    write_text(&content, output)?;
    Ok(())
}

/// Write pretty output to file or stdout.
fn write_pretty_output(body: &AccOutput, output: Option<&Path>) -> io::Result<()> {
    let stdout_is_tty = std::io::stdout().is_terminal();
    let use_human = output.is_none() && stdout_is_tty;

    if use_human {
        let content = format_pretty(body, true);
        println!("{content}");
        return Ok(());
    }

    // Non-tty or file output: keep JSON shape for pipelines/files.
    let content =
        serde_json::to_string_pretty(body).unwrap_or_else(|_| "{\"mode\":\"error\"}".to_string());
    write_text(&content, output)
}

fn write_text(content: &str, output: Option<&Path>) -> io::Result<()> {
    if let Some(path) = output {
        std::fs::write(path, content)?;
    } else {
        println!("{content}");
    }
    Ok(())
}

/// The markdown narrative, or an error line for error payloads.
pub fn format_markdown(body: &AccOutput) -> String {
    match body {
        AccOutput::Analyze(out) => out.report.clone(),
        AccOutput::Error(out) => {
            let message = out.message.as_deref().unwrap_or(out.error.message.as_str());
            format!("Error: {}", message)
        }
    }
}

/// Format output for human consumption in a terminal.
pub fn format_pretty(body: &AccOutput, colorize: bool) -> String {
    match body {
        AccOutput::Analyze(out) => format_analysis(out, colorize),
        AccOutput::Error(out) => {
            let mut buf = String::new();
            let header = color("[ERROR]", "31", colorize);
            let message = out.message.as_deref().unwrap_or(out.error.message.as_str());
            writeln!(buf, "{} {}", header, message).ok();
            if let Some(remediation) = &out.error.remediation {
                writeln!(buf, "Hint: {}", remediation).ok();
            }
            buf
        }
    }
}

fn format_analysis(out: &AnalyzeOutput, colorize: bool) -> String {
    let mut buf = String::new();
    let (tag, code) = match out.status {
        AnalysisStatus::Completed if out.issue_count == 0 => ("PASS", "32"),
        AnalysisStatus::Completed => ("ISSUES", "33"),
        AnalysisStatus::Ready => ("READY", "36"),
        AnalysisStatus::Error => ("ERROR", "31"),
    };
    writeln!(buf, "{} {}", color(tag, code, colorize), out.status_message).ok();
    if let Some(kind) = out.source_kind {
        writeln!(buf, "Source: {}", kind).ok();
    }

    if !out.issues.is_empty() {
        writeln!(buf, "Issues ({}):", out.issue_count).ok();
        for issue in &out.issues {
            let severity = color(
                &format!("[{}]", issue.severity),
                severity_color_code(issue.severity),
                colorize,
            );
            writeln!(
                buf,
                "- {} {}: {} ({})",
                severity,
                issue.element,
                issue.description,
                issue.guideline_ref
            )
            .ok();
        }
    }

    if !out.suggestions.is_empty() {
        writeln!(buf, "Suggestions:").ok();
        for suggestion in &out.suggestions {
            writeln!(buf, "- {suggestion}").ok();
        }
    }
    buf
}

/// Apply ANSI color codes when enabled.
fn color(text: &str, code: &str, colorize: bool) -> String {
    if colorize {
        format!("\x1b[{}m{}\x1b[0m", code, text)
    } else {
        text.to_string()
    }
}

/// Map severity to ANSI color code.
fn severity_color_code(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "31",   // red
        Severity::Medium => "33", // yellow
        Severity::Low => "36",    // cyan
    }
}

/// Determine exit code for the analyze command.
pub fn exit_code_for_analysis(status: AnalysisStatus, issue_count: usize) -> ExitCode {
    match status {
        AnalysisStatus::Completed if issue_count == 0 => ExitCode::SUCCESS,
        AnalysisStatus::Completed => ExitCode::from(1),
        AnalysisStatus::Ready | AnalysisStatus::Error => ExitCode::from(2),
    }
}
