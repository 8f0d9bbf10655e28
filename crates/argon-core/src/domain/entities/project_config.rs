//! The project configuration document (`argon.config`).
//!
//! The document is kept as parsed JSON and edited in place, so a save
//! writes every key back in the order the file had it, unknown ones included.
//! Only `createComponent` is required up front; every other key is read on
//! demand and a malformed value is reported by the operation that needs it.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value, json};

use crate::domain::{ArtifactKind, error::DomainError, naming};

/// Layouts location used when `createComponent.layouts` is not set.
pub const DEFAULT_LAYOUTS: &str = "source/templates/layouts";

const CREATE_COMPONENT: &str = "createComponent";
const LAYOUTS: &str = "layouts";
const WEBPACK: &str = "webpack";
const CACHE_GROUPS: &str = "cacheGroups";
const COMPONENT_GROUPS: &str = "componentGroups";
const TEST_MULTIPLE: &str = "testMultiple";

/// Root of the configuration file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct ProjectConfig {
    document: Map<String, Value>,
}

impl TryFrom<Map<String, Value>> for ProjectConfig {
    type Error = String;

    fn try_from(document: Map<String, Value>) -> Result<Self, Self::Error> {
        match document.get(CREATE_COMPONENT) {
            Some(Value::Object(_)) => Ok(Self { document }),
            Some(_) => Err(format!("\"{CREATE_COMPONENT}\" must be an object")),
            None => Err(format!("missing field `{CREATE_COMPONENT}`")),
        }
    }
}

impl Serialize for ProjectConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.document.serialize(serializer)
    }
}

impl ProjectConfig {
    /// The configured `layouts` path, or [`DEFAULT_LAYOUTS`] when the key is
    /// missing, null or empty.
    pub fn layouts_path(&self) -> Result<&str, DomainError> {
        match self.create_component().get(LAYOUTS) {
            None | Some(Value::Null) => Ok(DEFAULT_LAYOUTS),
            Some(Value::String(path)) if path.is_empty() => Ok(DEFAULT_LAYOUTS),
            Some(Value::String(path)) => Ok(path.as_str()),
            Some(_) => Err(DomainError::MissingLayoutsConfig),
        }
    }

    /// Root folder configured for `kind`.
    pub fn folder_for(&self, kind: ArtifactKind) -> Result<&str, DomainError> {
        let key = kind.folder_key();
        self.create_component()
            .get(key)
            .and_then(Value::as_str)
            .ok_or(DomainError::MissingFolderConfig { key })
    }

    /// Whether the document has a `webpack.cacheGroups` map at all.
    pub fn bundles_supported(&self) -> bool {
        self.cache_groups().is_some()
    }

    /// Names of the cache groups flagged `testMultiple`, in document order.
    pub fn component_bundles(&self) -> Vec<String> {
        self.cache_groups()
            .map(|groups| {
                groups
                    .iter()
                    .filter(|(_, group)| flagged_multiple(group))
                    .map(|(name, _)| name.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn has_cache_group(&self, name: &str) -> bool {
        self.cache_groups()
            .is_some_and(|groups| groups.contains_key(name))
    }

    pub fn is_component_bundle(&self, name: &str) -> bool {
        self.cache_groups()
            .and_then(|groups| groups.get(name))
            .is_some_and(flagged_multiple)
    }

    /// Paths registered into `bundle`, if the bundle has a list.
    pub fn bundle_entries(&self, bundle: &str) -> Option<Vec<&str>> {
        let entries = self
            .webpack()?
            .get(COMPONENT_GROUPS)?
            .as_object()?
            .get(bundle)?
            .as_array()?;
        Some(entries.iter().filter_map(Value::as_str).collect())
    }

    /// Insert a new component bundle together with its empty
    /// `componentGroups` list. Both land at the end of their maps.
    ///
    /// Nothing is mutated when the name is invalid, a cache group of that
    /// name already exists or one of the target maps is not an object.
    pub fn create_bundle(&mut self, name: &str) -> Result<(), DomainError> {
        naming::ensure_valid(name, "bundle")?;
        if self.has_cache_group(name) {
            return Err(DomainError::BundleExists {
                name: name.to_owned(),
            });
        }

        let webpack = object_entry(&mut self.document, WEBPACK)?;
        if webpack.get(COMPONENT_GROUPS).is_some_and(|v| !v.is_object()) {
            return Err(malformed(COMPONENT_GROUPS));
        }
        object_entry(webpack, CACHE_GROUPS)?.insert(
            name.to_owned(),
            json!({ "testMultiple": true, "name": name, "enforce": true, "chunks": "all" }),
        );
        object_entry(webpack, COMPONENT_GROUPS)?.insert(name.to_owned(), Value::Array(Vec::new()));

        Ok(())
    }

    /// Append `entry` to the bundle's `componentGroups` list.
    ///
    /// Returns `false` when the entry was already present. A missing list for
    /// a known bundle is created on the fly.
    pub fn register_in_bundle(&mut self, bundle: &str, entry: &str) -> Result<bool, DomainError> {
        if !self.is_component_bundle(bundle) {
            return Err(DomainError::UnknownBundle {
                name: bundle.to_owned(),
            });
        }

        let webpack = object_entry(&mut self.document, WEBPACK)?;
        let entries = object_entry(webpack, COMPONENT_GROUPS)?
            .entry(bundle)
            .or_insert_with(|| Value::Array(Vec::new()))
            .as_array_mut()
            .ok_or(DomainError::MalformedConfig {
                key: COMPONENT_GROUPS,
                expected: "object of path lists",
            })?;

        if entries.iter().any(|existing| existing.as_str() == Some(entry)) {
            return Ok(false);
        }
        entries.push(Value::String(entry.to_owned()));
        Ok(true)
    }

    fn create_component(&self) -> &Value {
        self.document.get(CREATE_COMPONENT).unwrap_or(&Value::Null)
    }

    fn webpack(&self) -> Option<&Map<String, Value>> {
        self.document.get(WEBPACK)?.as_object()
    }

    fn cache_groups(&self) -> Option<&Map<String, Value>> {
        self.webpack()?.get(CACHE_GROUPS)?.as_object()
    }
}

fn flagged_multiple(group: &Value) -> bool {
    group
        .get(TEST_MULTIPLE)
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

/// The object stored under `key`, inserted empty at the end when absent.
fn object_entry<'a>(
    map: &'a mut Map<String, Value>,
    key: &'static str,
) -> Result<&'a mut Map<String, Value>, DomainError> {
    map.entry(key)
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .ok_or(malformed(key))
}

fn malformed(key: &'static str) -> DomainError {
    DomainError::MalformedConfig {
        key,
        expected: "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(value: Value) -> ProjectConfig {
        serde_json::from_value(value).unwrap()
    }

    fn sample() -> ProjectConfig {
        config(json!({
            "createComponent": {
                "componentsFolder": "source/components",
                "atomsFolder": "source/atoms",
                "layouts": "source/layouts",
                "styleguide": true
            },
            "webpack": {
                "cacheGroups": {
                    "vendor": { "test": "node_modules", "name": "vendor" },
                    "common": { "testMultiple": true, "name": "common", "enforce": true, "chunks": "all" }
                },
                "componentGroups": {
                    "common": ["source/components/header/"]
                },
                "entry": "main.js"
            },
            "port": 3000
        }))
    }

    fn with_layouts(layouts: Value) -> ProjectConfig {
        config(json!({ "createComponent": { "layouts": layouts } }))
    }

    #[test]
    fn only_test_multiple_groups_are_component_bundles() {
        let config = sample();
        assert_eq!(config.component_bundles(), vec!["common".to_string()]);
        assert!(config.has_cache_group("vendor"));
        assert!(!config.is_component_bundle("vendor"));
    }

    #[test]
    fn folder_lookup_reports_missing_key() {
        let config = sample();
        assert_eq!(
            config.folder_for(ArtifactKind::Component).unwrap(),
            "source/components"
        );
        assert_eq!(
            config.folder_for(ArtifactKind::Molecule).unwrap_err(),
            DomainError::MissingFolderConfig {
                key: "moleculesFolder"
            }
        );
    }

    #[test]
    fn layouts_must_be_a_string() {
        assert_eq!(sample().layouts_path().unwrap(), "source/layouts");

        for wrong in [json!(["a", "b"]), json!(42), json!({ "dir": "x" }), json!(true)] {
            assert_eq!(
                with_layouts(wrong).layouts_path().unwrap_err(),
                DomainError::MissingLayoutsConfig
            );
        }
    }

    #[test]
    fn unset_layouts_fall_back_to_the_default_directory() {
        assert_eq!(with_layouts(json!(null)).layouts_path().unwrap(), DEFAULT_LAYOUTS);
        assert_eq!(with_layouts(json!("")).layouts_path().unwrap(), DEFAULT_LAYOUTS);

        let absent = config(json!({ "createComponent": { "atomsFolder": "source/atoms" } }));
        assert_eq!(absent.layouts_path().unwrap(), "source/templates/layouts");
    }

    #[test]
    fn create_bundle_inserts_cache_group_and_list() {
        let mut config = sample();
        config.create_bundle("cards").unwrap();

        assert!(config.is_component_bundle("cards"));
        assert_eq!(config.bundle_entries("cards"), Some(vec![]));
        assert_eq!(
            config.component_bundles(),
            vec!["common".to_string(), "cards".to_string()]
        );
    }

    #[test]
    fn create_bundle_with_existing_name_leaves_config_untouched() {
        let mut config = sample();
        let before = config.clone();

        assert_eq!(
            config.create_bundle("vendor").unwrap_err(),
            DomainError::BundleExists {
                name: "vendor".into()
            }
        );
        assert!(config.create_bundle("9lives").is_err());
        assert_eq!(config, before);
    }

    #[test]
    fn create_bundle_rejects_malformed_groups_without_mutating() {
        let mut config = config(json!({
            "createComponent": {},
            "webpack": { "componentGroups": ["oops"] }
        }));
        let before = config.clone();

        assert_eq!(
            config.create_bundle("cards").unwrap_err(),
            DomainError::MalformedConfig {
                key: "componentGroups",
                expected: "object"
            }
        );
        assert_eq!(config, before);
    }

    #[test]
    fn registration_is_idempotent() {
        let mut config = sample();
        let entry = "source/components/mycard/";

        assert!(config.register_in_bundle("common", entry).unwrap());
        assert!(!config.register_in_bundle("common", entry).unwrap());

        let entries = config.bundle_entries("common").unwrap();
        assert_eq!(entries.iter().filter(|e| **e == entry).count(), 1);
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn registering_into_unknown_bundle_fails() {
        let mut config = sample();
        assert!(matches!(
            config.register_in_bundle("vendor", "x/"),
            Err(DomainError::UnknownBundle { .. })
        ));
    }

    #[test]
    fn unknown_keys_survive_a_round_trip() {
        let mut config = sample();
        config
            .register_in_bundle("common", "source/components/mycard/")
            .unwrap();

        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["port"], json!(3000));
        assert_eq!(value["createComponent"]["styleguide"], json!(true));
        assert_eq!(value["webpack"]["entry"], json!("main.js"));
        assert_eq!(
            value["webpack"]["cacheGroups"]["vendor"],
            json!({ "test": "node_modules", "name": "vendor" })
        );
        assert_eq!(
            value["webpack"]["componentGroups"]["common"],
            json!(["source/components/header/", "source/components/mycard/"])
        );
    }

    #[test]
    fn saving_keeps_the_original_key_order() {
        let text = r#"{"port":3000,"webpack":{"entry":"main.js","componentGroups":{"common":[]},"cacheGroups":{"common":{"chunks":"all","testMultiple":true}}},"createComponent":{"layouts":"l","atomsFolder":"a"}}"#;
        let mut config: ProjectConfig = serde_json::from_str(text).unwrap();
        config.register_in_bundle("common", "a/").unwrap();
        config.create_bundle("cards").unwrap();

        assert_eq!(
            serde_json::to_string(&config).unwrap(),
            concat!(
                r#"{"port":3000,"webpack":{"entry":"main.js","componentGroups":{"common":["a/"],"cards":[]},"#,
                r#""cacheGroups":{"common":{"chunks":"all","testMultiple":true},"#,
                r#""cards":{"testMultiple":true,"name":"cards","enforce":true,"chunks":"all"}}},"#,
                r#""createComponent":{"layouts":"l","atomsFolder":"a"}}"#
            )
        );
    }

    #[test]
    fn missing_create_component_section_is_rejected() {
        let result: Result<ProjectConfig, _> = serde_json::from_value(json!({ "webpack": {} }));
        assert!(result.is_err());

        let result: Result<ProjectConfig, _> =
            serde_json::from_value(json!({ "createComponent": "yes" }));
        assert!(result.is_err());
    }
}
