mod cli;
mod config;
mod error;
mod session;

use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use group_maker_core::{ExportFormat, GroupMaker, GroupSet, ShareParams};
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use cli::{Cli, Command, OutputArgs};
use config::{read_names, resolve_options};
use error::CliError;

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries results
    if let Err(e) = fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .try_init()
    {
        eprintln!("tracing init failed: {}", e);
    }

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "command failed");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Generate { input, output } => {
            let options = resolve_options(&input)?;
            let names = read_names(&input)?;
            let mut maker = GroupMaker::new();
            let groups = maker.generate(&names, &options)?;
            emit(groups, &output)
        }
        Command::Share { input, base_url } => {
            let options = resolve_options(&input)?;
            let names = read_names(&input)?;
            let url = ShareParams::new(names, options).share_url(&base_url);
            println!("{}", url);
            Ok(())
        }
        Command::Open { url, output } => {
            let params = ShareParams::from_url(&url);
            info!(mode = params.options.mode.wire_name(), "opening share link");
            let mut maker = GroupMaker::new();
            let groups = maker.generate(&params.names, &params.options)?;
            emit(groups, &output)
        }
        Command::Session { input } => {
            if input.input.is_none() {
                return Err(CliError::SessionNeedsInputFile);
            }
            let options = resolve_options(&input)?;
            let names = read_names(&input)?;
            let mut maker = GroupMaker::new();
            let stdin = io::stdin();
            session::run_session(&mut maker, &names, &options, stdin.lock(), io::stdout())
        }
    }
}

/// Render `groups` and write them to `--output` or stdout
fn emit(groups: &GroupSet, output: &OutputArgs) -> Result<(), CliError> {
    let format = ExportFormat::from(output.format);
    let rendered = format.render(groups)?;

    match &output.output {
        Some(path) => {
            if path.extension().is_none() {
                warn!(
                    path = %path.display(),
                    suggested = format.file_name(),
                    "output file has no extension"
                );
            }
            fs::write(path, rendered)?;
            info!(path = %path.display(), groups = groups.len(), "wrote groups");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            if format == ExportFormat::Json {
                writeln!(stdout)?;
            }
        }
    }
    Ok(())
}
