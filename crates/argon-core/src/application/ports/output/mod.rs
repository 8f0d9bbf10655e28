//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `argon-adapters` crate provides implementations; the CLI provides the
//! [`Prompter`].

use std::path::Path;

use crate::domain::{ArtifactKind, BundleSelection, ProjectConfig, RenderContext, TemplateKind};
use crate::error::ArgonResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `argon_adapters::filesystem::LocalFilesystem` (production)
/// - `argon_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Succeeds if present.
    fn create_dir_all(&self, path: &Path) -> ArgonResult<()>;

    /// Write content to a file, replacing it if it exists.
    fn write_file(&self, path: &Path, content: &str) -> ArgonResult<()>;

    /// Names of the entries directly below `path`, in no particular order.
    fn list_dir(&self, path: &Path) -> ArgonResult<Vec<String>>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}

/// Port for loading template bodies.
///
/// Implemented by:
/// - `argon_adapters::template_store::EmbeddedTemplateStore` (built-in bodies)
/// - `argon_adapters::template_store::DirectoryTemplateStore` (user directory)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    fn load(&self, kind: TemplateKind) -> ArgonResult<String>;
}

/// Port for placeholder substitution.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    fn render(&self, body: &str, context: &RenderContext) -> ArgonResult<String>;
}

/// Port for reading and writing the project configuration document.
#[cfg_attr(test, mockall::automock)]
pub trait ConfigStore: Send + Sync {
    fn load(&self, path: &Path) -> ArgonResult<ProjectConfig>;

    /// Serialise the whole document back to `path`.
    fn save(&self, path: &Path, config: &ProjectConfig) -> ArgonResult<()>;
}

/// Port for the interactive questions asked during a run.
///
/// Implemented by the CLI (dialoguer prompts, optionally pre-answered by
/// flags).
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    /// Raw artifact name as typed by the user.
    fn artifact_name(&self, kind: ArtifactKind) -> ArgonResult<String>;

    /// Pick one of `bundles` or ask for a new one.
    fn bundle_choice(&self, bundles: &[String]) -> ArgonResult<BundleSelection>;

    /// Raw name for a bundle about to be created.
    fn bundle_name(&self) -> ArgonResult<String>;
}
