pub mod artifact;
pub mod artifact_files;
pub mod project_config;
pub mod render_context;

pub use crate::domain::DomainError;
pub use artifact::Artifact;
pub use artifact_files::{ArtifactFiles, FileToWrite};
pub use project_config::{DEFAULT_LAYOUTS, ProjectConfig};
pub use render_context::{RenderContext, placeholders};
