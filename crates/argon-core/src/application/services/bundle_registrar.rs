//! Resolves the user's bundle choice and registers components into bundles.

use tracing::{info, instrument, warn};

use crate::{
    application::{ApplicationError, RunContext, ports::Prompter},
    domain::{Artifact, BundleSelection, DomainError},
    error::{ArgonError, ArgonResult},
};

/// Result of resolving a [`BundleSelection`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BundleResolution {
    /// Bundle the component will be registered into.
    pub bundle: Option<String>,
    /// Why a requested new bundle was not created. The run carries on
    /// without a bundle in that case.
    pub rejected: Option<DomainError>,
}

impl BundleResolution {
    fn selected(name: impl Into<String>) -> Self {
        Self {
            bundle: Some(name.into()),
            rejected: None,
        }
    }

    fn rejected(reason: DomainError) -> Self {
        Self {
            bundle: None,
            rejected: Some(reason),
        }
    }
}

/// Looks up or creates bundles on the run's configuration.
pub struct BundleRegistrar<'a> {
    prompter: &'a dyn Prompter,
}

impl<'a> BundleRegistrar<'a> {
    pub fn new(prompter: &'a dyn Prompter) -> Self {
        Self { prompter }
    }

    /// Turn the user's selection into a bundle name.
    ///
    /// Choosing "create new" asks for a name. An invalid or already used name
    /// does not fail the run: the resolution comes back without a bundle and
    /// with the reason attached.
    #[instrument(skip(self, ctx, selection), fields(selection = %selection))]
    pub fn resolve(
        &self,
        ctx: &mut RunContext,
        selection: BundleSelection,
    ) -> ArgonResult<BundleResolution> {
        match selection {
            BundleSelection::Skip => Ok(BundleResolution::default()),
            BundleSelection::Existing(name) => {
                if ctx.config().is_component_bundle(&name) {
                    Ok(BundleResolution::selected(name))
                } else {
                    Err(ApplicationError::BundleResolution {
                        reason: format!("'{name}' is not a component bundle"),
                    }
                    .into())
                }
            }
            BundleSelection::CreateNew => {
                let raw = self.prompter.bundle_name().map_err(prompt_failure)?;
                let name = raw.trim();
                match ctx.create_bundle(name) {
                    Ok(()) => {
                        info!(bundle = %name, "Bundle created");
                        Ok(BundleResolution::selected(name))
                    }
                    Err(broken @ DomainError::MalformedConfig { .. }) => Err(broken.into()),
                    Err(reason) => {
                        warn!(bundle = %name, %reason, "Bundle not created");
                        Ok(BundleResolution::rejected(reason))
                    }
                }
            }
        }
    }

    /// Append the artifact's path to `bundle`. Returns whether it was new.
    pub fn register(
        &self,
        ctx: &mut RunContext,
        bundle: &str,
        artifact: &Artifact,
    ) -> ArgonResult<bool> {
        let appended = ctx
            .register_in_bundle(bundle, &artifact.bundle_entry())
            .map_err(|e| match e {
                DomainError::MalformedConfig { .. } => ArgonError::from(e),
                other => ApplicationError::BundleResolution {
                    reason: other.to_string(),
                }
                .into(),
            })?;
        if appended {
            info!(bundle, entry = %artifact.bundle_entry(), "Registered in bundle");
        }
        Ok(appended)
    }
}

fn prompt_failure(err: ArgonError) -> ArgonError {
    match err {
        ArgonError::Application(ApplicationError::PromptFailed { reason }) => {
            ApplicationError::BundleResolution { reason }.into()
        }
        other => other,
    }
}
