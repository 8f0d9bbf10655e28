//! Application services - orchestrate use cases.
//!
//! `ScaffoldService` runs the whole pipeline; the other modules are its
//! stages and can be used on their own.

pub mod artifact_generator;
pub mod bundle_registrar;
pub mod duplicate_checker;
pub mod layout_resolver;
pub mod scaffold_service;

pub use artifact_generator::ArtifactGenerator;
pub use bundle_registrar::{BundleRegistrar, BundleResolution};
pub use duplicate_checker::artifact_exists;
pub use layout_resolver::resolve_layout_file_name;
pub use scaffold_service::{ScaffoldOutcome, ScaffoldRequest, ScaffoldService};
