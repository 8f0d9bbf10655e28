//! Per-run ownership of the configuration document.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::{
    application::ports::ConfigStore,
    domain::{DomainError, ProjectConfig},
    error::ArgonResult,
};

/// Everything one scaffolding run may read or mutate.
///
/// The configuration is loaded once when the context is created. Mutations go
/// through the context so it knows whether the document must be written back,
/// and [`RunContext::persist_if_dirty`] writes it at most once.
#[derive(Debug, Clone)]
pub struct RunContext {
    root: PathBuf,
    config_path: PathBuf,
    config: ProjectConfig,
    dirty: bool,
}

impl RunContext {
    /// Create a context around an already loaded document.
    ///
    /// A relative `config_path` is resolved against `root`.
    pub fn new(
        root: impl Into<PathBuf>,
        config_path: impl AsRef<Path>,
        config: ProjectConfig,
    ) -> Self {
        let root = root.into();
        let config_path = root.join(config_path);
        Self {
            root,
            config_path,
            config,
            dirty: false,
        }
    }

    /// Load the document at `config_path` (relative to `root`) from `store`.
    pub fn load(
        store: &dyn ConfigStore,
        root: impl Into<PathBuf>,
        config_path: impl AsRef<Path>,
    ) -> ArgonResult<Self> {
        let root = root.into();
        let config_path = root.join(config_path);
        debug!(path = %config_path.display(), "Loading configuration");
        let config = store.load(&config_path)?;
        Ok(Self {
            root,
            config_path,
            config,
            dirty: false,
        })
    }

    /// Directory every configured relative path is resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Resolve a configured path against the run root.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// Create a component bundle in the document.
    pub fn create_bundle(&mut self, name: &str) -> Result<(), DomainError> {
        self.config.create_bundle(name)?;
        self.dirty = true;
        Ok(())
    }

    /// Register `entry` into `bundle`; only an actual append marks the
    /// document dirty.
    pub fn register_in_bundle(&mut self, bundle: &str, entry: &str) -> Result<bool, DomainError> {
        let appended = self.config.register_in_bundle(bundle, entry)?;
        self.dirty |= appended;
        Ok(appended)
    }

    /// Write the document back if anything changed. Returns whether a write
    /// happened.
    pub fn persist_if_dirty(&mut self, store: &dyn ConfigStore) -> ArgonResult<bool> {
        if !self.dirty {
            debug!("Configuration unchanged, not saving");
            return Ok(false);
        }
        store.save(&self.config_path, &self.config)?;
        self.dirty = false;
        info!(path = %self.config_path.display(), "Configuration saved");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockConfigStore;
    use serde_json::json;

    fn config() -> ProjectConfig {
        serde_json::from_value(json!({
            "createComponent": { "componentsFolder": "c", "layouts": "l" },
            "webpack": {
                "cacheGroups": { "common": { "testMultiple": true } },
                "componentGroups": { "common": [] }
            }
        }))
        .unwrap()
    }

    #[test]
    fn relative_config_path_is_resolved_against_root() {
        let ctx = RunContext::new("/work", "argon.config", config());
        assert_eq!(ctx.config_path(), Path::new("/work/argon.config"));
        assert_eq!(ctx.resolve("source/c"), PathBuf::from("/work/source/c"));
    }

    #[test]
    fn clean_context_is_not_saved() {
        let mut store = MockConfigStore::new();
        store.expect_save().never();

        let mut ctx = RunContext::new("/work", "argon.config", config());
        assert!(!ctx.persist_if_dirty(&store).unwrap());
    }

    #[test]
    fn mutation_is_saved_exactly_once() {
        let mut store = MockConfigStore::new();
        store
            .expect_save()
            .withf(|path, config| {
                path.ends_with("argon.config")
                    && config.bundle_entries("common").is_some_and(|e| e.len() == 1)
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let mut ctx = RunContext::new("/work", "argon.config", config());
        assert!(ctx.register_in_bundle("common", "c/card/").unwrap());
        assert!(ctx.is_dirty());
        assert!(ctx.persist_if_dirty(&store).unwrap());
        assert!(!ctx.persist_if_dirty(&store).unwrap());
    }

    #[test]
    fn repeated_registration_does_not_dirty() {
        let mut ctx = RunContext::new("/work", "argon.config", config());
        ctx.register_in_bundle("common", "c/card/").unwrap();
        let mut store = MockConfigStore::new();
        store.expect_save().times(1).returning(|_, _| Ok(()));
        ctx.persist_if_dirty(&store).unwrap();

        assert!(!ctx.register_in_bundle("common", "c/card/").unwrap());
        assert!(!ctx.is_dirty());
    }

    #[test]
    fn load_reads_from_store_once() {
        let mut store = MockConfigStore::new();
        store
            .expect_load()
            .withf(|path| path.ends_with("custom.json"))
            .times(1)
            .returning(|_| Ok(config()));

        let ctx = RunContext::load(&store, "/work", "custom.json").unwrap();
        assert_eq!(ctx.config_path(), Path::new("/work/custom.json"));
    }
}
