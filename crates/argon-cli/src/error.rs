//! Failures of an `argon-create` run and how they reach the user.
//!
//! Every failure becomes one [`CliError`]. `main` logs it, prints it on
//! stderr (with suggestions, and the cause chain under `-v`) and exits with
//! [`CliError::exit_code`].

use std::error::Error;
use std::fmt::Write as _;

use owo_colors::OwoColorize;
use thiserror::Error;

use argon_core::error::{ArgonError, ErrorCategory as CoreCategory};

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Working directory or flags could not be turned into run settings.
    #[error("Configuration error: {message}")]
    Settings {
        message: String,
        #[source]
        source: Option<Box<dyn Error + Send + Sync>>,
    },

    /// Raised by the scaffold pipeline.
    #[error("{0}")]
    Core(#[from] ArgonError),

    /// Writing the report to the console failed.
    #[error("Unable to write to the console while {context}")]
    Console {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Operation cancelled")]
    Cancelled,

    /// A question was left unanswered and prompts are compiled out.
    #[error("Feature not available: {feature}")]
    FeatureNotAvailable { feature: &'static str },
}

impl From<std::io::Error> for CliError {
    fn from(source: std::io::Error) -> Self {
        Self::Console {
            context: "printing the report".into(),
            source,
        }
    }
}

impl CliError {
    /// Wrap a pipeline error; a cancelled prompt is not reported as a failure
    /// of the pipeline itself.
    pub fn from_core(err: ArgonError) -> Self {
        if err.is_cancelled() {
            Self::Cancelled
        } else {
            Self::Core(err)
        }
    }

    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Settings { .. } => vec![
                "Run argon-create from your project root".into(),
                "Check the paths given to --config and --templates".into(),
            ],
            Self::Core(core) => core.suggestions(),
            Self::Console { .. } => vec!["Check that stdout is still open".into()],
            Self::Cancelled => Vec::new(),
            Self::FeatureNotAvailable { feature } => vec![
                "Answer every question with flags: --name, and for components one of \
                 --bundle, --new-bundle or --no-bundle"
                    .into(),
                format!("Or rebuild with `--features {feature}`"),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Settings { .. } | Self::FeatureNotAvailable { .. } => {
                ErrorCategory::Configuration
            }
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::Console { .. } => ErrorCategory::Internal,
            Self::Cancelled => ErrorCategory::UserError,
        }
    }

    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::Internal => 1,
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
        }
    }

    /// Text printed on stderr. `colored` adds ANSI styling; the words are the
    /// same either way.
    pub fn render(&self, verbose: bool, colored: bool) -> String {
        let paint = Paint(colored);
        let mut out = String::new();

        let _ = writeln!(
            out,
            "\n{} {}",
            paint.red("\u{2717} Error:"),
            paint.red(&self.to_string())
        );

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                let _ = writeln!(out, "  {}", paint.dim(&format!("caused by: {err}")));
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            let _ = writeln!(out, "\n{}", paint.yellow("Suggestions:"));
            for suggestion in &suggestions {
                let _ = writeln!(out, "  - {suggestion}");
            }
        }

        if !verbose {
            let _ = writeln!(out, "\n{}", paint.dim("Run again with -v for details."));
        }
        out
    }

    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError | ErrorCategory::NotFound => {
                tracing::warn!(exit_code = self.exit_code(), "{self}")
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(exit_code = self.exit_code(), "{self}")
            }
        }
        if let Some(cause) = self.source() {
            tracing::debug!("caused by: {cause}");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    UserError,
    NotFound,
    Configuration,
    Internal,
}

/// Styling that collapses to plain text when colors are off.
#[derive(Clone, Copy)]
struct Paint(bool);

impl Paint {
    fn red(self, text: &str) -> String {
        if self.0 {
            text.red().bold().to_string()
        } else {
            text.to_owned()
        }
    }

    fn yellow(self, text: &str) -> String {
        if self.0 {
            text.yellow().bold().to_string()
        } else {
            text.to_owned()
        }
    }

    fn dim(self, text: &str) -> String {
        if self.0 {
            text.dimmed().to_string()
        } else {
            text.to_owned()
        }
    }
}

/// Attach what the CLI was doing when a console write failed.
pub trait IntoCli<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|source| CliError::Console {
            context: f().into(),
            source,
        })
    }
}
