//! Template bodies that ship with argon.
//!
//! The files live in `crates/argon-adapters/templates/` and are compiled into
//! the binary, so a plain `argon-create` run needs nothing on disk besides the
//! project configuration. Pass `--templates DIR` to the CLI to use a directory
//! with the same file names instead.

use argon_core::domain::TemplateKind;

pub const SLY: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/templates/slyTemplate.txt"
));
pub const SLY_COMPONENT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/templates/slyComponentTemplate.txt"
));
pub const SCRIPT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/templates/jsClassTemplate.txt"
));
pub const SCRIPT_TEST: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/templates/jsTestFileTemplate.txt"
));
pub const PREVIEW: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/templates/uxPreviewTemplate.txt"
));

/// Built-in body for `kind`.
pub const fn body(kind: TemplateKind) -> &'static str {
    match kind {
        TemplateKind::Sly => SLY,
        TemplateKind::SlyComponent => SLY_COMPONENT,
        TemplateKind::Script => SCRIPT,
        TemplateKind::ScriptTest => SCRIPT_TEST,
        TemplateKind::Preview => PREVIEW,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon_core::domain::placeholders;

    #[test]
    fn markup_templates_reference_name_and_class() {
        for kind in [TemplateKind::Sly, TemplateKind::SlyComponent] {
            let body = body(kind);
            assert!(body.contains(placeholders::TEMPLATE_FILE_NAME), "{kind}");
            assert!(body.contains(placeholders::CLASS_NAME), "{kind}");
        }
    }

    #[test]
    fn script_templates_reference_symbol() {
        assert!(SCRIPT.contains(placeholders::COMPONENT));
        assert!(SCRIPT_TEST.contains(placeholders::COMPONENT));
        assert!(SCRIPT_TEST.contains(placeholders::INSTANCE));
    }

    #[test]
    fn preview_references_layout() {
        assert!(PREVIEW.contains(placeholders::NAME));
        assert!(PREVIEW.contains(placeholders::LAYOUT_FILE_NAME));
    }
}
