//! `argon-create`: scaffold an atom, molecule or component described by the
//! project's `argon.config`.
//!
//! Exit codes: 0 success, 1 internal failure, 2 rejected input (including
//! usage errors), 3 unknown bundle, 4 broken project configuration.

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info};

use crate::{
    cli::Cli,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompt::CliPrompter,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;
mod prompt;

fn main() -> ExitCode {
    // ARGON_CONFIG, ARGON_TEMPLATES and RUST_LOG may come from .env.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(usage) => {
            // Also reached for --help and --version, which exit 0.
            let _ = usage.print();
            return ExitCode::from(u8::try_from(usage.exit_code()).unwrap_or(2));
        }
    };

    if let Err(e) = logging::init_logging(&cli.global) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    let verbose = cli.global.verbose > 0;
    let colored = !cli.global.no_color && std::io::stderr().is_terminal();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            err.log();
            eprint!("{}", err.render(verbose, colored));
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let kind = cli.artifact.kind();
    let settings =
        AppConfig::load(&cli.global, &cli.artifact).map_err(|e| CliError::Settings {
            message: e.to_string(),
            source: Some(e.into()),
        })?;
    debug!(
        %kind,
        root = %settings.root.display(),
        config = %settings.config_path().display(),
        "Run settings resolved"
    );

    commands::create::execute(
        kind,
        &settings,
        &CliPrompter::from_args(&cli.artifact),
        &OutputManager::new(&cli.global),
    )?;
    info!(%kind, "Scaffold finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn argument_definitions_are_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn binary_reports_the_package_version() {
        assert_eq!(
            Cli::command().get_version(),
            Some(env!("CARGO_PKG_VERSION"))
        );
    }
}
