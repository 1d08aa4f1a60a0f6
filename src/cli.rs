use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "acc")]
#[command(
    version,
    about = "Accessibility Checker - Fast heuristic accessibility pass over HTML",
    long_about = "Accessibility Checker (ACC)\n\nModes:\n- analyze: check a URL, inline HTML or a local HTML file for missing alt text, small fonts, long text blocks and poor color contrast.\n- examples: list canned inputs to try.\n\nExit codes: 0 no issues, 1 issues found, 2 error.\n\nUse --help on any subcommand for details."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, help = "Enable verbose (debug) logging")]
    pub verbose: bool,

    #[arg(
        long,
        global = true,
        value_name = "PATH",
        help = "Optional config file (TOML) to set defaults for fetch timeout/user agent and enabled checks; CLI flags override config"
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a document for accessibility issues
    #[command(group(
        ArgGroup::new("source")
            .required(true)
            .args(["input", "file", "example"])
    ))]
    Analyze {
        #[arg(
            long,
            short,
            help = "URL (http://, https://, www.) or HTML markup starting with '<'"
        )]
        input: Option<String>,

        #[arg(long, value_name = "PATH", help = "Local HTML file to analyze")]
        file: Option<PathBuf>,

        #[arg(long, help = "Analyze the built-in example HTML snippet")]
        example: bool,

        #[arg(
            long,
            value_delimiter = ',',
            help = "Checks to run (alt-text,font-size,color-contrast)"
        )]
        checks: Option<Vec<String>>,

        #[arg(
            long,
            default_value = "10",
            value_name = "SECS",
            help = "Fetch timeout (seconds) for URL input"
        )]
        timeout: u64,

        #[arg(long, value_enum, default_value = "json", help = "Output format")]
        format: OutputFormat,

        #[arg(long, short, help = "Output file path (stdout if omitted)")]
        output: Option<PathBuf>,
    },
    /// List example inputs
    Examples {
        #[arg(long, value_enum, default_value = "pretty", help = "Output format")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Pretty,
    Markdown,
}

pub fn parse() -> Cli {
    Cli::parse()
}
