//! Diagnostics for `argon-create`.
//!
//! Library crates emit events; this module owns the one subscriber. Output
//! goes to stderr so stdout stays reserved for the created-file report.
//!
//! `-v` raises the level one step per occurrence starting from WARN, `-q`
//! drops it to ERROR. A `RUST_LOG` value replaces the derived filter.

use std::io::IsTerminal as _;

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

/// Crates whose events are shown.
const TARGETS: [&str; 3] = ["argon_create", "argon_core", "argon_adapters"];

/// Install the stderr subscriber. Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        Err(_) => scaffold_filter(level_for(args)),
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .compact()
        .without_time()
        .with_target(false)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing subscriber already installed: {e}"))
}

fn scaffold_filter(level: LevelFilter) -> EnvFilter {
    EnvFilter::new(directives(level))
}

fn directives(level: LevelFilter) -> String {
    let level = level.to_string().to_lowercase();
    TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn level_for(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}
