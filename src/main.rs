mod cli;

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use color_eyre::eyre::Result;
use tracing_subscriber::EnvFilter;

use cli::{Cli, normalize_args};
use mandatory_tags::output::{self, OutputFormat};
use mandatory_tags::{CheckError, GitResolver, check_target, resolve_target};

fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse_from(normalize_args(std::env::args_os()));

    match run(&cli) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(Failure::Check(err)) => {
            eprintln!("Error: {}", err);
            if matches!(err, CheckError::Config(_)) {
                eprintln!("{}", Cli::command().render_help());
            }
            Ok(ExitCode::FAILURE)
        }
        Err(Failure::Other(report)) => Err(report),
    }
}

enum Failure {
    Check(CheckError),
    Other(color_eyre::Report),
}

impl From<CheckError> for Failure {
    fn from(err: CheckError) -> Self {
        Failure::Check(err)
    }
}

fn run(cli: &Cli) -> std::result::Result<(), Failure> {
    let resolver = GitResolver::with_base(&cli.repo, &cli.base);
    let branch = cli.branch.as_deref().unwrap_or_default();

    let target = resolve_target(&resolver, branch, cli.namespace.as_deref())?;

    if cli.format == OutputFormat::Text {
        println!("{}\n", output::progress_line(&target));
    }

    let report = check_target(&resolver, &target)?;

    match cli.format {
        OutputFormat::Text => print!("{}", output::render_text(&report)),
        OutputFormat::Json => {
            let json = output::render_json(&report)
                .map_err(|e| Failure::Other(color_eyre::Report::new(e)))?;
            println!("{}", json);
        }
    }

    Ok(())
}
