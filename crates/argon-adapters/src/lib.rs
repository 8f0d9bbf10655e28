//! Infrastructure adapters for argon.
//!
//! This crate implements the ports defined in `argon_core::application::ports`.
//! It contains all file I/O; the prompter lives in the CLI.

pub mod builtin_templates;
pub mod config_store;
pub mod filesystem;
pub mod renderer;
pub mod template_store;

// Re-export commonly used adapters
pub use config_store::JsonConfigStore;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::SimpleRenderer;
pub use template_store::{DirectoryTemplateStore, EmbeddedTemplateStore};
