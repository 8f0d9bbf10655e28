// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they travel inside run outcomes and test assertions)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("invalid {subject} name '{name}'")]
    InvalidName { subject: &'static str, name: String },

    #[error("bundle '{name}' already exists")]
    BundleExists { name: String },

    #[error("duplicate or absolute path in generated files: {path}")]
    DuplicatePath { path: String },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    #[error(
        "missing configuration \"layouts\": the \"createComponent\" section must give it as a path string"
    )]
    MissingLayoutsConfig,

    #[error("missing configuration \"{key}\" in the \"createComponent\" section")]
    MissingFolderConfig { key: &'static str },

    #[error("configuration \"{key}\" must be a JSON {expected}")]
    MalformedConfig {
        key: &'static str,
        expected: &'static str,
    },

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("bundle '{name}' is not a known component bundle")]
    UnknownBundle { name: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { subject, .. } => vec![
                format!("A {subject} name must start with a letter (upper or lower case)"),
                "It must not start with a number".into(),
                "It may only contain letters, digits and underscores".into(),
            ],
            Self::BundleExists { name } => vec![
                format!("Select '{name}' from the bundle list instead of creating it"),
                "Or choose a different bundle name".into(),
            ],
            Self::MissingLayoutsConfig => vec![
                "Set \"layouts\" in the \"createComponent\" section to a string".into(),
                "It may point at a single layout file or a directory of layouts".into(),
                "Remove it to use source/templates/layouts".into(),
            ],
            Self::MissingFolderConfig { key } => {
                vec![format!(
                    "Add \"{key}\" to the \"createComponent\" section of your config file"
                )]
            }
            Self::MalformedConfig { key, expected } => vec![format!(
                "Make \"{key}\" a JSON {expected} in your config file"
            )],
            Self::DuplicatePath { path } => vec![
                format!("'{path}' would be written twice"),
                "This is a bug in the file generator, please report it".into(),
            ],
            Self::UnknownBundle { name } => vec![
                format!("'{name}' is not listed in webpack.cacheGroups with testMultiple: true"),
                "Create it with --new-bundle instead".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidName { .. } | Self::BundleExists { .. } => ErrorCategory::Validation,
            Self::MissingLayoutsConfig
            | Self::MissingFolderConfig { .. }
            | Self::MalformedConfig { .. } => ErrorCategory::Configuration,
            Self::UnknownBundle { .. } => ErrorCategory::NotFound,
            Self::DuplicatePath { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    NotFound,
    Internal,
}
