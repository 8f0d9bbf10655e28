//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases
//! and help text.  No business logic lives here.

use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser};

use argon_core::domain::ArtifactKind;

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "argon-create",
    bin_name = "argon-create",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold atoms, molecules and components",
    long_about = "argon-create generates the markup, stylesheet, script, test, \
                  metadata and preview files for a new component (or the \
                  markup and stylesheet for an atom or molecule) and can \
                  register the component into a webpack bundle.",
    after_help = "EXAMPLES:\n\
        \x20 argon-create                          # new component, asks for everything\n\
        \x20 argon-create --atom --name icon\n\
        \x20 argon-create --name card --bundle common\n\
        \x20 argon-create --name header --new-bundle layout --config site.config",
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(flatten)]
    pub artifact: ArtifactArgs,
}

// ── Artifact ──────────────────────────────────────────────────────────────────

/// What to create and the answers to give the prompts.
#[derive(Debug, Clone, Default, Args)]
#[command(group(
    ArgGroup::new("bundle_choice")
        .args(["bundle", "new_bundle", "no_bundle"])
        .multiple(false)
))]
pub struct ArtifactArgs {
    /// Create an atom instead of a component.
    #[arg(long = "atom", conflicts_with = "molecule", help = "Create an atom")]
    pub atom: bool,

    /// Create a molecule instead of a component.
    #[arg(long = "molecule", help = "Create a molecule")]
    pub molecule: bool,

    /// Artifact name; asked for when omitted.
    #[arg(
        short = 'n',
        long = "name",
        value_name = "NAME",
        help = "Name of the new artifact"
    )]
    pub name: Option<String>,

    /// Register the component into an existing bundle.
    #[arg(
        short = 'b',
        long = "bundle",
        value_name = "BUNDLE",
        help = "Existing bundle to register the component into"
    )]
    pub bundle: Option<String>,

    /// Create a bundle and register the component into it.
    #[arg(
        long = "new-bundle",
        value_name = "BUNDLE",
        help = "Create this bundle and register the component into it"
    )]
    pub new_bundle: Option<String>,

    /// Do not register the component into any bundle.
    #[arg(long = "no-bundle", help = "Skip bundle registration")]
    pub no_bundle: bool,

    /// Read template bodies from a directory instead of the built-in set.
    #[arg(
        short = 't',
        long = "templates",
        env = "ARGON_TEMPLATES",
        value_name = "DIR",
        help = "Directory with template files"
    )]
    pub templates: Option<PathBuf>,
}

impl ArtifactArgs {
    /// Kind selected by `--atom` / `--molecule`; component otherwise.
    pub fn kind(&self) -> ArtifactKind {
        ArtifactKind::from_flags(self.atom, self.molecule)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_component_and_config_file() {
        let cli = Cli::parse_from(["argon-create"]);
        assert_eq!(cli.artifact.kind(), ArtifactKind::Component);
        assert_eq!(cli.global.config, PathBuf::from("argon.config"));
        assert!(cli.artifact.name.is_none());
    }

    #[test]
    fn kind_flags() {
        let cli = Cli::parse_from(["argon-create", "--atom"]);
        assert_eq!(cli.artifact.kind(), ArtifactKind::Atom);

        let cli = Cli::parse_from(["argon-create", "--molecule", "-n", "teaser"]);
        assert_eq!(cli.artifact.kind(), ArtifactKind::Molecule);
        assert_eq!(cli.artifact.name.as_deref(), Some("teaser"));
    }

    #[test]
    fn atom_and_molecule_conflict() {
        let result = Cli::try_parse_from(["argon-create", "--atom", "--molecule"]);
        assert!(result.is_err());
    }

    #[test]
    fn bundle_flags_are_exclusive() {
        let result =
            Cli::try_parse_from(["argon-create", "--bundle", "common", "--no-bundle"]);
        assert!(result.is_err());

        let result =
            Cli::try_parse_from(["argon-create", "--bundle", "a", "--new-bundle", "b"]);
        assert!(result.is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["argon-create", "--quiet", "--verbose"]);
        assert!(result.is_err());
    }
}
