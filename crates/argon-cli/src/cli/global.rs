//! Global arguments: verbosity, color and the configuration file.
//!
//! Declared here and flattened into [`super::Cli`] so the logging and output
//! layers only need to see this struct.

use clap::Args;
use std::path::PathBuf;

/// Default configuration file, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "argon.config";

/// Global arguments for every invocation.
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Diagnostic level on stderr, raised once per `-v`.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Show diagnostics on stderr (-v, -vv, -vvv)",
        long_help = "Show diagnostics on stderr:
    (none)  - warnings and errors
    -v      - each pipeline stage
    -vv     - every file, prompt answer and config key
    -vvv    - everything"
    )]
    pub verbose: u8,

    /// Print nothing on success.
    #[arg(
        short = 'q',
        long = "quiet",
        conflicts_with = "verbose",
        help = "Print nothing on success; errors still go to stderr"
    )]
    pub quiet: bool,

    /// Plain report and error text. `NO_COLOR` has the same effect.
    #[arg(
        long = "no-color",
        env = "NO_COLOR",
        action = clap::ArgAction::SetTrue,
        value_parser = clap::builder::FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Project configuration file, relative to the working directory.
    #[arg(
        short = 'c',
        long = "config",
        env = "ARGON_CONFIG",
        value_name = "FILE",
        default_value = DEFAULT_CONFIG_FILE,
        help = "Project configuration file"
    )]
    pub config: PathBuf,
}

impl Default for GlobalArgs {
    fn default() -> Self {
        Self {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: PathBuf::from(DEFAULT_CONFIG_FILE),
        }
    }
}
