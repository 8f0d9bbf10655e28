//! Application layer for argon.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService and its stages)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Context**: The per-run configuration owner
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer. Naming and bundle
//! rules live in `crate::domain`.

pub mod context;
pub mod error;
pub mod ports;
pub mod services;

pub use context::RunContext;

// Re-export main services
pub use services::{
    ArtifactGenerator, BundleRegistrar, BundleResolution, ScaffoldOutcome, ScaffoldRequest,
    ScaffoldService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{ConfigStore, Filesystem, Prompter, TemplateRenderer, TemplateStore};

pub use error::ApplicationError;
