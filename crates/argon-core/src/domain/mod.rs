//! Core domain layer for argon.
//!
//! This module contains pure scaffolding logic with no I/O. Reading templates,
//! touching the filesystem and talking to the user all happen through ports
//! defined in the application layer.
//!
//! - **Naming policy**: one module decides validity and casing of names
//! - **Rich domain model**: bundle registration lives on `ProjectConfig`
//! - **Immutable values**: `Artifact` is built once per run and never changes

pub mod entities;
pub mod error;
pub mod naming;
pub mod value_objects;

pub use entities::{
    Artifact, ArtifactFiles, DEFAULT_LAYOUTS, FileToWrite, ProjectConfig, RenderContext,
    placeholders,
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{ArtifactKind, BundleSelection, TemplateKind};
