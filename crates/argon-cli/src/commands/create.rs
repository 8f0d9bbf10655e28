//! Implementation of the create command.
//!
//! Responsibility: wire the adapters into the core scaffold service, run it
//! with the CLI prompter, and display results. No business logic lives here.

use std::path::Path;

use tracing::{info, instrument};

use argon_adapters::{
    DirectoryTemplateStore, EmbeddedTemplateStore, JsonConfigStore, LocalFilesystem,
    SimpleRenderer,
};
use argon_core::{
    application::{ScaffoldOutcome, ScaffoldRequest, ScaffoldService, ports::TemplateStore},
    domain::ArtifactKind,
};

use crate::{
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
    prompt::CliPrompter,
};

/// Message shown when a requested new bundle could not be created.
pub const REJECTED_BUNDLE: &str = "Invalid name or bundle already exists!";

/// Execute one scaffolding run.
///
/// Dispatch sequence:
/// 1. Build the adapters (template directory or built-in templates)
/// 2. Run the scaffold pipeline with flag-backed prompts
/// 3. Report the outcome
#[instrument(skip_all, fields(kind = %kind))]
pub fn execute(
    kind: ArtifactKind,
    config: &AppConfig,
    prompter: &CliPrompter,
    output: &OutputManager,
) -> CliResult<()> {
    let service = ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        template_store(config.templates.as_deref()),
        Box::new(SimpleRenderer::new()),
        Box::new(JsonConfigStore::new()),
    );
    let request = ScaffoldRequest::new(kind, &config.root, &config.config_file);

    let outcome = service.scaffold(&request, prompter).map_err(|err| {
        if prompter.needed_interaction() {
            CliError::FeatureNotAvailable {
                feature: "interactive",
            }
        } else {
            CliError::from_core(err)
        }
    })?;

    report(&outcome, &config.root, output)
}

fn template_store(dir: Option<&Path>) -> Box<dyn TemplateStore> {
    match dir {
        Some(dir) => {
            info!(dir = %dir.display(), "Using template directory");
            Box::new(DirectoryTemplateStore::new(dir))
        }
        None => Box::new(EmbeddedTemplateStore::new()),
    }
}

fn report(outcome: &ScaffoldOutcome, root: &Path, output: &OutputManager) -> CliResult<()> {
    if outcome.rejected_bundle.is_some() {
        output.warning(REJECTED_BUNDLE)?;
    }

    output
        .done(&success_message(outcome))
        .with_cli_context(|| "writing the result")?;

    for file in &outcome.files {
        output.file(file.strip_prefix(root).unwrap_or(file))?;
    }

    if let Some(bundle) = &outcome.bundle {
        let verb = if outcome.config_saved {
            "Registered in"
        } else {
            "Already registered in"
        };
        output.note(&format!("{verb} bundle '{bundle}'"))?;
    }

    Ok(())
}

/// `"<Kind> <name> has been created!"`
pub fn success_message(outcome: &ScaffoldOutcome) -> String {
    format!(
        "{} {} has been created!",
        outcome.artifact.kind().label(),
        outcome.artifact.name()
    )
}
