//! JSON configuration file adapter.

use std::path::Path;

use argon_core::{
    application::{ApplicationError, ports::ConfigStore},
    domain::ProjectConfig,
    error::{ArgonResult, Context},
};
use tracing::{debug, instrument};

/// Loads and saves the project configuration as JSON.
///
/// Saving pretty-prints with two-space indentation. Keys are written in the
/// order the file had them; new bundles are appended.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonConfigStore;

impl JsonConfigStore {
    pub fn new() -> Self {
        Self
    }
}

impl ConfigStore for JsonConfigStore {
    #[instrument(skip(self), fields(path = %path.display()))]
    fn load(&self, path: &Path) -> ArgonResult<ProjectConfig> {
        let fail = |reason: String| ApplicationError::ConfigLoad {
            path: path.to_path_buf(),
            reason,
        };

        let raw = std::fs::read_to_string(path).map_err(|e| fail(e.to_string()))?;
        let config: ProjectConfig = serde_json::from_str(&raw).map_err(|e| fail(e.to_string()))?;
        debug!(
            bundles = config.component_bundles().len(),
            "Configuration parsed"
        );
        Ok(config)
    }

    #[instrument(skip(self, config), fields(path = %path.display()))]
    fn save(&self, path: &Path, config: &ProjectConfig) -> ArgonResult<()> {
        let body = serde_json::to_string_pretty(config).context("serializing configuration")?;
        std::fs::write(path, body).map_err(|e| ApplicationError::ConfigSave {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon_core::error::ArgonError;

    // Hand-ordered: unknown keys sit before and between the ones argon reads.
    const DOCUMENT: &str = r#"{
  "name": "site",
  "webpack": {
    "entry": "main.js",
    "componentGroups": {
      "common": []
    },
    "cacheGroups": {
      "vendor": {
        "test": "node_modules",
        "name": "vendor"
      },
      "common": {
        "chunks": "all",
        "testMultiple": true,
        "name": "common",
        "enforce": true
      }
    }
  },
  "createComponent": {
    "lint": true,
    "layouts": "source/layouts",
    "componentsFolder": "source/components"
  }
}"#;

    #[test]
    fn unchanged_document_round_trips_exactly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("argon.config");
        std::fs::write(&path, DOCUMENT).unwrap();

        let store = JsonConfigStore::new();
        let config = store.load(&path).unwrap();
        store.save(&path, &config).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), DOCUMENT);
    }

    #[test]
    fn registration_appends_without_reordering() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("argon.config");
        std::fs::write(&path, DOCUMENT).unwrap();

        let store = JsonConfigStore::new();
        let mut config = store.load(&path).unwrap();
        config
            .register_in_bundle("common", "source/components/card/")
            .unwrap();
        store.save(&path, &config).unwrap();

        let expected = DOCUMENT.replace(
            r#""common": []"#,
            "\"common\": [\n        \"source/components/card/\"\n      ]",
        );
        assert_eq!(std::fs::read_to_string(&path).unwrap(), expected);
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonConfigStore::new()
            .load(&dir.path().join("argon.config"))
            .unwrap_err();
        assert!(matches!(
            err,
            ArgonError::Application(ApplicationError::ConfigLoad { .. })
        ));
    }

    #[test]
    fn syntax_error_and_missing_section_are_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("argon.config");
        let store = JsonConfigStore::new();

        std::fs::write(&path, "{ not json").unwrap();
        assert!(store.load(&path).is_err());

        std::fs::write(&path, r#"{ "webpack": {} }"#).unwrap();
        let err = store.load(&path).unwrap_err();
        assert!(err.to_string().contains("createComponent"));
    }
}
