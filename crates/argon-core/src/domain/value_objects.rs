//! Domain value objects: ArtifactKind, TemplateKind, BundleSelection.
//!
//! Pure value types with equality-by-value and no identity.

use std::fmt;

// ── ArtifactKind ─────────────────────────────────────────────────────────────

/// The building block being scaffolded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Atom,
    Molecule,
    Component,
}

impl ArtifactKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Atom => "atom",
            Self::Molecule => "molecule",
            Self::Component => "component",
        }
    }

    /// Capitalised form used in user-facing messages.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Atom => "Atom",
            Self::Molecule => "Molecule",
            Self::Component => "Component",
        }
    }

    /// The `createComponent` key holding the root folder for this kind.
    pub const fn folder_key(&self) -> &'static str {
        match self {
            Self::Atom => "atomsFolder",
            Self::Molecule => "moleculesFolder",
            Self::Component => "componentsFolder",
        }
    }

    /// Components get the full file set and may join a bundle; atoms and
    /// molecules only get a stylesheet and a markup template.
    pub const fn is_component(self) -> bool {
        matches!(self, Self::Component)
    }

    /// Kind selected by the `--atom` / `--molecule` flags.
    pub const fn from_flags(atom: bool, molecule: bool) -> Self {
        if atom {
            Self::Atom
        } else if molecule {
            Self::Molecule
        } else {
            Self::Component
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── TemplateKind ─────────────────────────────────────────────────────────────

/// Template bodies the generator knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    /// Markup template for atoms and molecules.
    Sly,
    /// Markup template for components.
    SlyComponent,
    /// Component script class.
    Script,
    /// Test file paired with the script.
    ScriptTest,
    /// Preview page wired to a layout.
    Preview,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 5] = [
        Self::Sly,
        Self::SlyComponent,
        Self::Script,
        Self::ScriptTest,
        Self::Preview,
    ];

    /// File name of this template inside a template directory.
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::Sly => "slyTemplate.txt",
            Self::SlyComponent => "slyComponentTemplate.txt",
            Self::Script => "jsClassTemplate.txt",
            Self::ScriptTest => "jsTestFileTemplate.txt",
            Self::Preview => "uxPreviewTemplate.txt",
        }
    }

    /// Markup template used for the given artifact kind.
    pub const fn markup_for(kind: ArtifactKind) -> Self {
        if kind.is_component() {
            Self::SlyComponent
        } else {
            Self::Sly
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

// ── BundleSelection ──────────────────────────────────────────────────────────

/// What the user picked when asked where the component's script should live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BundleSelection {
    /// One of the eligible bundles already in the configuration.
    Existing(String),
    /// Ask for a name and create a fresh bundle.
    CreateNew,
    /// Leave the component unregistered.
    Skip,
}

impl BundleSelection {
    /// Label shown for the "create new" choice in the bundle list.
    pub const NEW_CHOICE: &'static str = "[new]";
}

impl fmt::Display for BundleSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Existing(name) => f.write_str(name),
            Self::CreateNew => f.write_str(Self::NEW_CHOICE),
            Self::Skip => f.write_str("none"),
        }
    }
}
