//! Run settings.
//!
//! [`AppConfig`] is resolved once at startup from the parsed flags (which
//! already include `ARGON_CONFIG` / `ARGON_TEMPLATES` from the environment or
//! `.env`) and the working directory.  The project configuration document
//! itself is read by the core through the `ConfigStore` port.

use std::path::PathBuf;

use anyhow::Context;

use crate::cli::{ArtifactArgs, GlobalArgs};

/// Where a run reads and writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory configured paths are resolved against.
    pub root: PathBuf,
    /// Project configuration file, as passed (relative to `root` or absolute).
    pub config_file: PathBuf,
    /// Template directory overriding the built-in templates.
    pub templates: Option<PathBuf>,
}

impl AppConfig {
    /// Resolve settings against the current working directory.
    pub fn load(global: &GlobalArgs, artifact: &ArtifactArgs) -> anyhow::Result<Self> {
        let root = std::env::current_dir().context("cannot determine the working directory")?;
        Ok(Self::with_root(root, global, artifact))
    }

    pub fn with_root(root: PathBuf, global: &GlobalArgs, artifact: &ArtifactArgs) -> Self {
        let templates = artifact.templates.as_ref().map(|dir| root.join(dir));
        Self {
            root,
            config_file: global.config.clone(),
            templates,
        }
    }

    /// Absolute path of the configuration file.
    pub fn config_path(&self) -> PathBuf {
        self.root.join(&self.config_file)
    }
}
