mod cli;
mod commands;
mod formatting;
mod settings;

use std::process::ExitCode;

use cli::Commands;
use commands::{run_analyze, run_examples, AnalyzeSource};

#[tokio::main]
async fn main() -> ExitCode {
    run().await
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_filter),
    );
    if verbose {
        builder.filter_module("acc", log::LevelFilter::Debug);
        builder.filter_module("acc_lib", log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

async fn run() -> ExitCode {
    let raw_args: Vec<String> = std::env::args().collect();
    let args = cli::parse();
    init_logging(args.verbose);

    match args.command {
        Commands::Analyze {
            input,
            file,
            example,
            checks,
            timeout,
            format,
            output,
        } => {
            run_analyze(
                &raw_args,
                args.config,
                AnalyzeSource::from_args(input, file, example),
                checks,
                timeout,
                format,
                output,
            )
            .await
        }
        Commands::Examples { format } => run_examples(format),
    }
}
