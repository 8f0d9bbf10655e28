//! Application layer errors.
//!
//! These errors represent failures in orchestration, not scaffolding rules.
//! Rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ArtifactKind;
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The configuration file is missing or cannot be parsed.
    #[error("An error occurred while loading configuration from {path}: {reason}")]
    ConfigLoad { path: PathBuf, reason: String },

    /// The configuration file could not be written back.
    #[error("Unable to save configuration to {path}: {reason}")]
    ConfigSave { path: PathBuf, reason: String },

    /// The `layouts` path does not exist or cannot be read.
    #[error("The layouts path {path} seems to be incorrect: {reason}")]
    LayoutResolution { path: PathBuf, reason: String },

    /// An artifact with the same (case-insensitive) name already exists.
    #[error("{} with name {name} already exists", kind.label())]
    DuplicateArtifact { kind: ArtifactKind, name: String },

    /// A template body could not be loaded.
    #[error("Unable to read template file(s)")]
    TemplateRead { template: String, reason: String },

    /// A generated file could not be written.
    #[error("Unable to write {path}: {reason}")]
    FileWrite { path: PathBuf, reason: String },

    /// Any other filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Resolving or registering the bundle choice failed unexpectedly.
    #[error("Something went wrong while resolving the bundle: {reason}")]
    BundleResolution { reason: String },

    /// The prompt collaborator could not collect an answer.
    #[error("Unable to read input: {reason}")]
    PromptFailed { reason: String },

    /// The user backed out of a prompt.
    #[error("Operation cancelled")]
    PromptCancelled,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigLoad { path, .. } => vec![
                format!("Check that {} exists and is valid JSON", path.display()),
                "It must contain a \"createComponent\" section".into(),
                "Point at another file with --config <FILE>".into(),
            ],
            Self::ConfigSave { path, .. } => vec![
                format!("Check that {} is writable", path.display()),
                "The artifact files were created; only the bundle entry is missing".into(),
            ],
            Self::LayoutResolution { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Update \"layouts\" in the \"createComponent\" section of your config file".into(),
            ],
            Self::DuplicateArtifact { kind, .. } => vec![
                format!("{} names are compared case-insensitively", kind.label()),
                "Choose a different name".into(),
            ],
            Self::TemplateRead { template, reason } => vec![
                format!("Failed to load {template}: {reason}"),
                "Check the directory passed to --templates".into(),
            ],
            Self::FileWrite { path, .. } | Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Files written before the failure are left in place".into(),
            ],
            Self::BundleResolution { .. } => vec![
                "Check webpack.cacheGroups and webpack.componentGroups in your config file".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigLoad { .. } | Self::LayoutResolution { .. } => {
                ErrorCategory::Configuration
            }
            Self::DuplicateArtifact { .. } | Self::PromptCancelled => ErrorCategory::Validation,
            Self::BundleResolution { .. } => ErrorCategory::NotFound,
            Self::ConfigSave { .. }
            | Self::TemplateRead { .. }
            | Self::FileWrite { .. }
            | Self::FilesystemError { .. }
            | Self::PromptFailed { .. } => ErrorCategory::Internal,
        }
    }
}
