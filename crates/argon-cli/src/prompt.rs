//! Answers for the questions asked during a run.
//!
//! Flags pre-answer prompts. Anything left open is asked with `dialoguer`
//! when the `interactive` feature is enabled.

use std::cell::Cell;

use argon_core::{
    application::{ApplicationError, ports::Prompter},
    domain::{ArtifactKind, BundleSelection},
    error::ArgonResult,
};
use tracing::debug;

use crate::cli::ArtifactArgs;

/// Bundle answer taken from the flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BundlePreset {
    /// No flag given: ask.
    Ask,
    Existing(String),
    New(String),
    Skip,
}

/// [`Prompter`] backed by flags first, the terminal second.
#[derive(Debug)]
pub struct CliPrompter {
    name: Option<String>,
    bundle: BundlePreset,
    /// Set when a prompt was needed but interactive support is compiled out.
    missing_interactive: Cell<bool>,
}

impl CliPrompter {
    pub fn new(name: Option<String>, bundle: BundlePreset) -> Self {
        Self {
            name,
            bundle,
            missing_interactive: Cell::new(false),
        }
    }

    pub fn from_args(args: &ArtifactArgs) -> Self {
        let bundle = if let Some(name) = &args.bundle {
            BundlePreset::Existing(name.clone())
        } else if let Some(name) = &args.new_bundle {
            BundlePreset::New(name.clone())
        } else if args.no_bundle {
            BundlePreset::Skip
        } else {
            BundlePreset::Ask
        };
        Self::new(args.name.clone(), bundle)
    }

    /// Whether a run failed because it needed a prompt this build cannot show.
    pub fn needed_interaction(&self) -> bool {
        self.missing_interactive.get()
    }

    #[cfg(not(feature = "interactive"))]
    fn unavailable(&self, question: &str) -> argon_core::error::ArgonError {
        self.missing_interactive.set(true);
        ApplicationError::PromptFailed {
            reason: format!("cannot ask for {question}: interactive prompts are disabled"),
        }
        .into()
    }
}

/// Text shown when asking for an artifact name.
pub fn name_prompt(kind: ArtifactKind) -> String {
    format!(
        "Enter {} name\nRules:\n1. Name should start with capital or small case\n\
         2. Name should not start with a number\n3. Name can contain an underscore\n",
        kind.label()
    )
}

pub const BUNDLE_PROMPT: &str =
    "Select a bundle where you wish to place your JavaScript file\nOR\nSelect \"new\" to create new bundle";

pub const BUNDLE_NAME_PROMPT: &str = "Enter a bundle name";

/// Choices offered for the bundle question: `[new]` first, then `bundles`.
pub fn bundle_choices(bundles: &[String]) -> Vec<String> {
    std::iter::once(BundleSelection::NEW_CHOICE.to_string())
        .chain(bundles.iter().cloned())
        .collect()
}

/// Map an index into [`bundle_choices`] back to a selection.
pub fn selection_from_index(bundles: &[String], index: usize) -> BundleSelection {
    match index.checked_sub(1).and_then(|i| bundles.get(i)) {
        Some(name) => BundleSelection::Existing(name.clone()),
        None => BundleSelection::CreateNew,
    }
}

impl Prompter for CliPrompter {
    fn artifact_name(&self, kind: ArtifactKind) -> ArgonResult<String> {
        if let Some(name) = &self.name {
            debug!(%kind, name, "Name taken from --name");
            return Ok(name.clone());
        }
        self.ask_text(&name_prompt(kind))
    }

    fn bundle_choice(&self, bundles: &[String]) -> ArgonResult<BundleSelection> {
        match &self.bundle {
            BundlePreset::Existing(name) => Ok(BundleSelection::Existing(name.clone())),
            BundlePreset::New(_) => Ok(BundleSelection::CreateNew),
            BundlePreset::Skip => Ok(BundleSelection::Skip),
            BundlePreset::Ask => {
                let index = self.ask_select(BUNDLE_PROMPT, &bundle_choices(bundles))?;
                Ok(selection_from_index(bundles, index))
            }
        }
    }

    fn bundle_name(&self) -> ArgonResult<String> {
        match &self.bundle {
            BundlePreset::New(name) => Ok(name.clone()),
            _ => self.ask_text(BUNDLE_NAME_PROMPT),
        }
    }
}

#[cfg(feature = "interactive")]
impl CliPrompter {
    fn ask_text(&self, prompt: &str) -> ArgonResult<String> {
        use dialoguer::{Error as DialoguerError, Input};
        use std::io::ErrorKind;

        match Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
        {
            Ok(value) => Ok(value),
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => {
                Err(ApplicationError::PromptCancelled.into())
            }
            Err(err) => Err(ApplicationError::PromptFailed {
                reason: err.to_string(),
            }
            .into()),
        }
    }

    fn ask_select(&self, prompt: &str, items: &[String]) -> ArgonResult<usize> {
        use dialoguer::Select;

        let selection = Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_opt()
            .map_err(|err| ApplicationError::PromptFailed {
                reason: err.to_string(),
            })?;

        selection.ok_or_else(|| ApplicationError::PromptCancelled.into())
    }
}

#[cfg(not(feature = "interactive"))]
impl CliPrompter {
    fn ask_text(&self, prompt: &str) -> ArgonResult<String> {
        Err(self.unavailable(prompt.lines().next().unwrap_or(prompt)))
    }

    fn ask_select(&self, prompt: &str, _items: &[String]) -> ArgonResult<usize> {
        Err(self.unavailable(prompt.lines().next().unwrap_or(prompt)))
    }
}
