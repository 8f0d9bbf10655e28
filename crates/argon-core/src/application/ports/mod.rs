//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `argon-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: Directory creation, file writes, listings
//!   - `TemplateStore`: Template body retrieval
//!   - `TemplateRenderer`: Placeholder substitution
//!   - `ConfigStore`: Configuration document load/save
//!   - `Prompter`: Interactive questions
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - `ScaffoldService::scaffold`

pub mod output;

pub use output::{ConfigStore, Filesystem, Prompter, TemplateRenderer, TemplateStore};

#[cfg(test)]
pub use output::{
    MockConfigStore, MockFilesystem, MockPrompter, MockTemplateRenderer, MockTemplateStore,
};
