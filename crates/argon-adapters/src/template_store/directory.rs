//! Template store reading bodies from a user-supplied directory.

use std::path::PathBuf;

use argon_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::TemplateKind,
    error::ArgonResult,
};
use tracing::{debug, instrument};

/// Reads `<dir>/<kind file name>` on every load.
///
/// Nothing is checked up front: a missing file only fails the load that needs
/// it, so atoms and molecules work with a directory holding just the markup
/// template.
#[derive(Debug, Clone)]
pub struct DirectoryTemplateStore {
    dir: PathBuf,
}

impl DirectoryTemplateStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path the body for `kind` is read from.
    pub fn path_for(&self, kind: TemplateKind) -> PathBuf {
        self.dir.join(kind.file_name())
    }
}

impl TemplateStore for DirectoryTemplateStore {
    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    fn load(&self, kind: TemplateKind) -> ArgonResult<String> {
        let path = self.path_for(kind);
        let body = std::fs::read_to_string(&path).map_err(|e| ApplicationError::TemplateRead {
            template: path.display().to_string(),
            reason: e.to_string(),
        })?;
        debug!(path = %path.display(), bytes = body.len(), "Template loaded");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon_core::error::ArgonError;

    #[test]
    fn reads_body_by_file_name() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("jsClassTemplate.txt"), "class #component# {}").unwrap();

        let store = DirectoryTemplateStore::new(dir.path());
        assert_eq!(
            store.load(TemplateKind::Script).unwrap(),
            "class #component# {}"
        );
    }

    #[test]
    fn missing_file_is_a_template_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = DirectoryTemplateStore::new(dir.path())
            .load(TemplateKind::Preview)
            .unwrap_err();

        match err {
            ArgonError::Application(ApplicationError::TemplateRead { template, .. }) => {
                assert!(template.ends_with("uxPreviewTemplate.txt"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(
            DirectoryTemplateStore::new(dir.path())
                .load(TemplateKind::Sly)
                .unwrap_err()
                .to_string(),
            "Unable to read template file(s)"
        );
    }
}
