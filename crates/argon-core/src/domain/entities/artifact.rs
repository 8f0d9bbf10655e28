use std::fmt;

use crate::domain::{ArtifactKind, error::DomainError, naming};

/// The atom, molecule or component being created in this run.
///
/// Invariant: `name` is a valid identifier in lower-camel form, and
/// `relative_path` is `<kind root>/<lowercase name>` joined POSIX-style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    name: String,
    kind: ArtifactKind,
    relative_path: String,
}

impl Artifact {
    /// Validate `raw_name` and place the artifact under `kind_root`
    /// (the configured folder for `kind`).
    pub fn new(raw_name: &str, kind: ArtifactKind, kind_root: &str) -> Result<Self, DomainError> {
        naming::ensure_valid(raw_name, kind.as_str())?;

        let name = naming::to_lower_camel(raw_name);
        let relative_path = join_posix(kind_root, &naming::to_folder_name(&name));

        Ok(Self {
            name,
            kind,
            relative_path,
        })
    }

    /// Lower-camel name, e.g. `myCard`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }

    /// Path of the artifact folder relative to the project root.
    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    /// Lower-cased name, e.g. `mycard`.
    pub fn folder_name(&self) -> String {
        naming::to_folder_name(&self.name)
    }

    /// Exported script symbol, e.g. `MyCard`.
    pub fn symbol_name(&self) -> String {
        naming::to_upper_camel(&self.name)
    }

    /// Instance variable name used in tests, e.g. `myCard`.
    pub fn instance_name(&self) -> String {
        naming::to_lower_camel(&self.name)
    }

    /// The string registered into a bundle's `componentGroups` list.
    pub fn bundle_entry(&self) -> String {
        format!("{}/", self.relative_path)
    }

    pub fn stylesheet_file_name(&self) -> String {
        format!("_{}.scss", self.name)
    }

    pub fn markup_file_name(&self) -> String {
        format!("{}-template.html", self.folder_name())
    }

    pub fn script_file_name(&self) -> String {
        format!("{}.js", self.symbol_name())
    }

    pub fn test_file_name(&self) -> String {
        format!("{}.spec.js", self.symbol_name())
    }

    pub fn metadata_file_name(&self) -> &'static str {
        "ux-model.json"
    }

    pub fn preview_file_name(&self) -> String {
        format!("{}.hbs", self.folder_name())
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.name)
    }
}

fn join_posix(root: &str, segment: &str) -> String {
    let root = root.trim_end_matches('/');
    if root.is_empty() {
        segment.to_owned()
    } else {
        format!("{root}/{segment}")
    }
}
