//! Simple placeholder substitution renderer.

use argon_core::{
    application::ports::TemplateRenderer, domain::RenderContext, error::ArgonResult,
};
use tracing::instrument;

/// Renderer that applies the literal `#token#` substitutions of a
/// [`RenderContext`]. Unknown tokens are left in place.
#[derive(Debug, Clone, Copy)]
pub struct SimpleRenderer;

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SimpleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip_all, fields(bytes = body.len()))]
    fn render(&self, body: &str, context: &RenderContext) -> ArgonResult<String> {
        Ok(context.render(body))
    }
}
