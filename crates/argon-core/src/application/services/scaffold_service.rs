//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Load the configuration into a [`RunContext`]
//! 2. Resolve the layout file name
//! 3. Ask for the artifact name (and the bundle, for components)
//! 4. Validate the name and reject duplicates
//! 5. Resolve the bundle
//! 6. Generate the artifact files
//! 7. Register the component into its bundle and save the configuration
//!
//! Any stage failure ends the run. Atoms, molecules and components all go
//! through the same pipeline; bundle support is switched on by the kind and by
//! the presence of `webpack.cacheGroups`.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError, RunContext,
        ports::{ConfigStore, Filesystem, Prompter, TemplateRenderer, TemplateStore},
        services::{
            ArtifactGenerator, BundleRegistrar, artifact_exists, resolve_layout_file_name,
        },
    },
    domain::{Artifact, ArtifactKind, BundleSelection, DomainError, naming},
    error::ArgonResult,
};

/// Input of one scaffolding run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    pub kind: ArtifactKind,
    /// Directory configured paths are resolved against.
    pub root: PathBuf,
    /// Configuration file, relative to `root` or absolute.
    pub config_path: PathBuf,
}

impl ScaffoldRequest {
    pub fn new(
        kind: ArtifactKind,
        root: impl Into<PathBuf>,
        config_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            kind,
            root: root.into(),
            config_path: config_path.into(),
        }
    }
}

/// What a successful run did.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaffoldOutcome {
    pub artifact: Artifact,
    /// Every file written, stylesheet first.
    pub files: Vec<PathBuf>,
    /// Bundle the component was registered into.
    pub bundle: Option<String>,
    /// Why a requested new bundle was not created.
    pub rejected_bundle: Option<DomainError>,
    /// Whether the configuration file was rewritten.
    pub config_saved: bool,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    store: Box<dyn TemplateStore>,
    renderer: Box<dyn TemplateRenderer>,
    config_store: Box<dyn ConfigStore>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use argon_core::application::ScaffoldService;
    ///
    /// let service = ScaffoldService::new(
    ///     filesystem,   // impl Filesystem
    ///     store,        // impl TemplateStore
    ///     renderer,     // impl TemplateRenderer
    ///     config_store, // impl ConfigStore
    /// );
    /// ```
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        store: Box<dyn TemplateStore>,
        renderer: Box<dyn TemplateRenderer>,
        config_store: Box<dyn ConfigStore>,
    ) -> Self {
        Self {
            filesystem,
            store,
            renderer,
            config_store,
        }
    }

    /// Create one artifact.
    #[instrument(
        skip_all,
        fields(
            kind = %request.kind,
            root = %request.root.display(),
            config = %request.config_path.display()
        )
    )]
    pub fn scaffold(
        &self,
        request: &ScaffoldRequest,
        prompter: &dyn Prompter,
    ) -> ArgonResult<ScaffoldOutcome> {
        let kind = request.kind;
        info!("Scaffolding {kind}");

        // 1. Load configuration
        let mut ctx = RunContext::load(
            self.config_store.as_ref(),
            &request.root,
            &request.config_path,
        )?;

        // 2. Resolve layout
        let layouts = ctx.resolve(ctx.config().layouts_path()?);
        let layout_file_name = resolve_layout_file_name(self.filesystem.as_ref(), &layouts)?;

        // 3. Ask
        let bundles_supported = kind.is_component() && ctx.config().bundles_supported();
        let raw_name = prompter.artifact_name(kind)?;
        let selection = if bundles_supported {
            prompter.bundle_choice(&ctx.config().component_bundles())?
        } else {
            BundleSelection::Skip
        };

        // 4. Validate and check for duplicates
        naming::ensure_valid(&raw_name, kind.as_str())?;
        let kind_root = ctx.config().folder_for(kind)?.to_owned();
        let artifact = Artifact::new(&raw_name, kind, &kind_root)?;
        self.ensure_unique(&ctx, &artifact, &kind_root)?;

        // 5. Resolve bundle
        let registrar = BundleRegistrar::new(prompter);
        let resolution = registrar.resolve(&mut ctx, selection)?;

        // 6. Generate files
        let files = ArtifactGenerator::new(
            self.filesystem.as_ref(),
            self.store.as_ref(),
            self.renderer.as_ref(),
        )
        .generate(ctx.root(), &artifact, &layout_file_name)?;
        info!(artifact = %artifact, "{} {} has been created", kind, artifact.name());

        // 7. Register and persist
        if let Some(bundle) = &resolution.bundle {
            registrar.register(&mut ctx, bundle, &artifact)?;
        }
        let config_saved = ctx.persist_if_dirty(self.config_store.as_ref())?;

        Ok(ScaffoldOutcome {
            artifact,
            files,
            bundle: resolution.bundle,
            rejected_bundle: resolution.rejected,
            config_saved,
        })
    }

    fn ensure_unique(
        &self,
        ctx: &RunContext,
        artifact: &Artifact,
        kind_root: &str,
    ) -> ArgonResult<()> {
        let root = ctx.resolve(Path::new(kind_root));
        if artifact_exists(self.filesystem.as_ref(), &root, artifact.name())? {
            return Err(ApplicationError::DuplicateArtifact {
                kind: artifact.kind(),
                name: artifact.name().to_owned(),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{
        MockConfigStore, MockFilesystem, MockPrompter, MockTemplateRenderer, MockTemplateStore,
    };
    use crate::domain::ProjectConfig;
    use crate::error::ArgonError;
    use serde_json::json;

    fn config_store() -> MockConfigStore {
        let mut store = MockConfigStore::new();
        store.expect_load().returning(|_| {
            Ok(serde_json::from_value::<ProjectConfig>(json!({
                "createComponent": {
                    "componentsFolder": "source/components",
                    "layouts": "source/layouts/page.hbs"
                }
            }))
            .unwrap())
        });
        store
    }

    fn service(filesystem: MockFilesystem, config_store: MockConfigStore) -> ScaffoldService {
        ScaffoldService::new(
            Box::new(filesystem),
            Box::new(MockTemplateStore::new()),
            Box::new(MockTemplateRenderer::new()),
            Box::new(config_store),
        )
    }

    fn answering(answer: &'static str) -> MockPrompter {
        let mut prompter = MockPrompter::new();
        prompter
            .expect_artifact_name()
            .returning(move |_| Ok(answer.to_string()));
        prompter.expect_bundle_choice().never();
        prompter
    }

    #[test]
    fn invalid_name_aborts_before_any_write() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_is_dir().returning(|_| false);
        fs.expect_write_file().never();
        fs.expect_create_dir_all().never();

        let request = ScaffoldRequest::new(ArtifactKind::Component, "/work", "argon.config");
        let err = service(fs, config_store())
            .scaffold(&request, &answering("2Button"))
            .unwrap_err();

        assert!(matches!(
            err,
            ArgonError::Domain(DomainError::InvalidName { .. })
        ));
    }

    #[test]
    fn duplicate_aborts_before_any_write() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_is_dir().returning(|_| false);
        fs.expect_list_dir()
            .returning(|_| Ok(vec!["card".to_string()]));
        fs.expect_write_file().never();

        let request = ScaffoldRequest::new(ArtifactKind::Component, "/work", "argon.config");
        let err = service(fs, config_store())
            .scaffold(&request, &answering("Card"))
            .unwrap_err();

        assert_eq!(err.to_string(), "Component with name card already exists");
    }

    #[test]
    fn non_string_layouts_is_reported_before_prompting() {
        let mut store = MockConfigStore::new();
        store.expect_load().returning(|_| {
            Ok(serde_json::from_value::<ProjectConfig>(json!({
                "createComponent": { "componentsFolder": "c", "layouts": ["a"] }
            }))
            .unwrap())
        });
        let mut prompter = MockPrompter::new();
        prompter.expect_artifact_name().never();

        let request = ScaffoldRequest::new(ArtifactKind::Component, "/work", "argon.config");
        let err = service(MockFilesystem::new(), store)
            .scaffold(&request, &prompter)
            .unwrap_err();

        assert!(matches!(
            err,
            ArgonError::Domain(DomainError::MissingLayoutsConfig)
        ));
    }

    #[test]
    fn config_load_failure_is_fatal() {
        let mut store = MockConfigStore::new();
        store.expect_load().returning(|path| {
            Err(ApplicationError::ConfigLoad {
                path: path.to_path_buf(),
                reason: "not found".into(),
            }
            .into())
        });

        let request = ScaffoldRequest::new(ArtifactKind::Atom, "/work", "argon.config");
        let err = service(MockFilesystem::new(), store)
            .scaffold(&request, &MockPrompter::new())
            .unwrap_err();

        assert!(matches!(
            err,
            ArgonError::Application(ApplicationError::ConfigLoad { .. })
        ));
    }
}
