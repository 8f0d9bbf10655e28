//! Template store backed by the bodies compiled into the binary.

use argon_core::{application::ports::TemplateStore, domain::TemplateKind, error::ArgonResult};
use tracing::trace;

use crate::builtin_templates;

/// Serves the built-in template bodies. Loading never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplateStore;

impl EmbeddedTemplateStore {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateStore for EmbeddedTemplateStore {
    fn load(&self, kind: TemplateKind) -> ArgonResult<String> {
        trace!(template = %kind, "Loading built-in template");
        Ok(builtin_templates::body(kind).to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_a_non_empty_body() {
        let store = EmbeddedTemplateStore::new();
        for kind in TemplateKind::ALL {
            assert!(!store.load(kind).unwrap().trim().is_empty(), "{kind}");
        }
    }
}
