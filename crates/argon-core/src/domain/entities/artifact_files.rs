use std::collections::HashSet;
use std::path::PathBuf;

use crate::domain::error::DomainError;

/// Rendered files for one artifact, ready to be written.
///
/// Paths are file names relative to the artifact folder. The stylesheet is not
/// part of this list: it is written before any template is loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactFiles {
    pub(crate) files: Vec<FileToWrite>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileToWrite {
    pub path: PathBuf,
    pub content: String,
}

impl ArtifactFiles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.push(FileToWrite {
            path: path.into(),
            content: content.into(),
        });
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToWrite> {
        self.files.iter()
    }

    /// Reject duplicate or absolute file paths.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for file in &self.files {
            let path = file.path.display().to_string();
            if file.path.is_absolute() || !seen.insert(path.clone()) {
                return Err(DomainError::DuplicatePath { path });
            }
        }
        Ok(())
    }
}
