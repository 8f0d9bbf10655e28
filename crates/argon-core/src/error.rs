//! The error returned by every fallible core operation.
//!
//! [`ArgonError`] is a thin union over the two layers. Callers mostly need
//! three things from it: the message, [`ArgonError::suggestions`] and
//! [`ArgonError::category`] for choosing an exit code.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

pub use crate::domain::ErrorCategory;

#[derive(Debug, Error, Clone)]
pub enum ArgonError {
    /// A naming or configuration rule was broken.
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// A pipeline stage or a port failed.
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// A failure from outside argon with no better home, see [`Context`].
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

pub type ArgonResult<T> = Result<T, ArgonError>;

impl ArgonError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => {
                vec!["Re-run with -vv and include the output in a report".into()]
            }
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// The user backed out of a prompt.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Application(ApplicationError::PromptCancelled))
    }
}

/// Turn a foreign error into [`ArgonError::Internal`] with a short label.
pub trait Context<T> {
    fn context(self, what: impl Into<String>) -> ArgonResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, what: impl Into<String>) -> ArgonResult<T> {
        self.map_err(|e| ArgonError::Internal {
            message: format!("{}: {e}", what.into()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_categories_pass_through() {
        let missing: ArgonError = DomainError::MissingLayoutsConfig.into();
        assert_eq!(missing.category(), ErrorCategory::Configuration);

        let invalid: ArgonError = DomainError::InvalidName {
            subject: "component",
            name: "2x".into(),
        }
        .into();
        assert_eq!(invalid.category(), ErrorCategory::Validation);
        assert!(!invalid.suggestions().is_empty());
    }

    #[test]
    fn only_prompt_cancellation_counts_as_cancelled() {
        assert!(ArgonError::from(ApplicationError::PromptCancelled).is_cancelled());
        assert!(!ArgonError::from(DomainError::MissingLayoutsConfig).is_cancelled());
    }

    #[test]
    fn context_labels_foreign_errors() {
        let err = serde_json::from_str::<u8>("x")
            .context("serialising argon.config")
            .unwrap_err();
        assert!(matches!(err, ArgonError::Internal { .. }));
        assert!(err.to_string().starts_with("Internal error: serialising argon.config: "));
    }
}
