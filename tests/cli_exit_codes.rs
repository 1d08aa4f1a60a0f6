use acc_lib::AccOutput;
use std::process::{Command, Output};
use tempfile::TempDir;

const SCENARIO: &str = r#"<html><body><h1 style="color: yellow; background-color: white;">Welcome</h1><img src="logo.jpg"><p style="font-size: 8px;">text</p><div style="color: lightgray; background-color: white;">text</div></body></html>"#;

const CLEAN: &str = r#"<html><body><img src="chart.png" alt="Quarterly revenue chart"><p style="color: navy; background-color: lightgray">ok</p></body></html>"#;

/// Run the binary with an isolated HOME so no central config is picked up.
fn run_acc(home: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_acc"))
        .args(args)
        .env("HOME", home.path())
        .env_remove("RUST_LOG")
        .output()
        .expect("run acc")
}

fn parse_stdout(output: &Output) -> AccOutput {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(stdout.trim()).expect("stdout is an acc JSON payload")
}

#[test]
fn analyze_exit_code_is_one_when_issues_are_found() {
    let home = TempDir::new().expect("tempdir");
    let output = run_acc(&home, &["analyze", "--input", SCENARIO]);
    assert_eq!(output.status.code(), Some(1));

    match parse_stdout(&output) {
        AccOutput::Analyze(out) => {
            assert_eq!(out.issue_count, 4);
            assert_eq!(
                out.status_message,
                "Analysis completed! Found 4 accessibility issues."
            );
        }
        AccOutput::Error(err) => panic!("unexpected error output: {:?}", err.error),
    }
}

#[test]
fn analyze_exit_code_is_zero_for_clean_markup() {
    let home = TempDir::new().expect("tempdir");
    let output = run_acc(&home, &["analyze", "--input", CLEAN]);
    assert_eq!(output.status.code(), Some(0));

    match parse_stdout(&output) {
        AccOutput::Analyze(out) => {
            assert_eq!(out.issue_count, 0);
            assert!(out.report.contains("No major accessibility issues detected."));
        }
        AccOutput::Error(err) => panic!("unexpected error output: {:?}", err.error),
    }
}

#[test]
fn analyze_reads_local_file() {
    let home = TempDir::new().expect("tempdir");
    let page = home.path().join("page.html");
    std::fs::write(&page, SCENARIO).expect("write page");

    let output = run_acc(
        &home,
        &["analyze", "--file", page.to_str().expect("utf-8 path")],
    );
    assert_eq!(output.status.code(), Some(1));
    match parse_stdout(&output) {
        AccOutput::Analyze(out) => {
            assert_eq!(out.issue_count, 4);
            assert_eq!(out.input.value.as_deref(), page.to_str());
        }
        AccOutput::Error(err) => panic!("unexpected error output: {:?}", err.error),
    }
}

#[test]
fn analyze_respects_checks_flag() {
    let home = TempDir::new().expect("tempdir");
    let output = run_acc(&home, &["analyze", "--example", "--checks", "font-size"]);
    assert_eq!(output.status.code(), Some(1));
    match parse_stdout(&output) {
        AccOutput::Analyze(out) => assert_eq!(out.issue_count, 1),
        AccOutput::Error(err) => panic!("unexpected error output: {:?}", err.error),
    }
}

#[test]
fn analyze_uses_checks_from_config_file() {
    let home = TempDir::new().expect("tempdir");
    let cfg_path = home.path().join("acc.toml");
    std::fs::write(&cfg_path, "[checks]\nenabled = [\"alt-text\"]\n").expect("write config");

    let output = run_acc(
        &home,
        &[
            "--config",
            cfg_path.to_str().expect("utf-8 path"),
            "analyze",
            "--example",
        ],
    );
    assert_eq!(output.status.code(), Some(1));
    match parse_stdout(&output) {
        AccOutput::Analyze(out) => {
            assert_eq!(out.issue_count, 1);
            assert_eq!(out.issues[0].element, "Image 1");
        }
        AccOutput::Error(err) => panic!("unexpected error output: {:?}", err.error),
    }
}

#[test]
fn empty_input_exits_with_two() {
    let home = TempDir::new().expect("tempdir");
    let output = run_acc(&home, &["analyze", "--input", "   "]);
    assert_eq!(output.status.code(), Some(2));
    match parse_stdout(&output) {
        AccOutput::Error(err) => assert_eq!(
            err.error.message,
            "Please provide a URL or HTML content to analyze."
        ),
        AccOutput::Analyze(_) => panic!("expected error output"),
    }
}

#[test]
fn invalid_input_exits_with_two() {
    let home = TempDir::new().expect("tempdir");
    let output = run_acc(&home, &["analyze", "--input", "not a url or markup"]);
    assert_eq!(output.status.code(), Some(2));
    match parse_stdout(&output) {
        AccOutput::Error(err) => assert_eq!(err.error.message, "Invalid input format"),
        AccOutput::Analyze(_) => panic!("expected error output"),
    }
}

#[test]
fn non_utf8_file_exits_with_two() {
    let home = TempDir::new().expect("tempdir");
    let page = home.path().join("page.html");
    std::fs::write(&page, [0x3c, 0x70, 0x3e, 0xff, 0xfe]).expect("write page");

    let output = run_acc(
        &home,
        &["analyze", "--file", page.to_str().expect("utf-8 path")],
    );
    assert_eq!(output.status.code(), Some(2));
    match parse_stdout(&output) {
        AccOutput::Error(err) => assert!(err.error.message.starts_with("Error parsing HTML: ")),
        AccOutput::Analyze(_) => panic!("expected error output"),
    }
}

#[test]
fn unknown_check_is_a_config_error() {
    let home = TempDir::new().expect("tempdir");
    let output = run_acc(&home, &["analyze", "--example", "--checks", "headings"]);
    assert_eq!(output.status.code(), Some(2));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"category\":\"config\""), "{stdout}");
}

#[test]
fn markdown_format_prints_the_report() {
    let home = TempDir::new().expect("tempdir");
    let output = run_acc(&home, &["analyze", "--example", "--format", "markdown"]);
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("## Accessibility Analysis Report"));
    assert!(stdout.contains("**Issues Found:** 4"));
}

#[test]
fn output_flag_writes_file() {
    let home = TempDir::new().expect("tempdir");
    let report = home.path().join("report.json");
    let output = run_acc(
        &home,
        &[
            "analyze",
            "--example",
            "--output",
            report.to_str().expect("utf-8 path"),
        ],
    );
    assert_eq!(output.status.code(), Some(1));
    let written = std::fs::read_to_string(&report).expect("report written");
    assert!(written.contains("\"mode\":\"analyze\""));
}

#[test]
fn examples_command_succeeds() {
    let home = TempDir::new().expect("tempdir");
    let output = run_acc(&home, &["examples"]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("https://www.w3.org/WAI/"));
}
