//! Argon Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for argon, the
//! generator that scaffolds atoms, molecules and components into a front-end
//! project, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          argon-cli (argon-create)       │
//! │   (Flags, prompts, output, exit codes)  │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ScaffoldService and its stages, with  │
//! │       RunContext owning the config)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, TemplateStore, Renderer,   │
//! │       ConfigStore, Prompter)            │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      argon-adapters (Infrastructure)    │
//! │ (LocalFilesystem, JsonConfigStore, etc) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (naming, Artifact, ProjectConfig,       │
//! │           RenderContext)                │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use argon_core::prelude::*;
//!
//! let service = ScaffoldService::new(filesystem, store, renderer, config_store);
//! let request = ScaffoldRequest::new(ArtifactKind::Component, ".", "argon.config");
//! let outcome = service.scaffold(&request, &prompter)?;
//! println!("{} has been created!", outcome.artifact);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        RunContext, ScaffoldOutcome, ScaffoldRequest, ScaffoldService,
        ports::{ConfigStore, Filesystem, Prompter, TemplateRenderer, TemplateStore},
    };
    pub use crate::domain::{
        Artifact, ArtifactKind, BundleSelection, ProjectConfig, RenderContext, TemplateKind,
        naming,
    };
    pub use crate::error::{ArgonError, ArgonResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
