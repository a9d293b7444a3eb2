use crate::error::Result;
use handlebars::{Handlebars, Helper, HelperResult, Output, RenderContext};
use serde::Serialize;
use tracing::debug;

/// Registered name of the idea brainstorm prompt
pub const BRAINSTORM: &str = "brainstorm";
/// Registered name of the script synthesis prompt
pub const SYNTHESIS: &str = "synthesis";
/// Registered name of the theme directive block
pub const THEME: &str = "theme";

/// Template engine holding every prompt template
pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
}

impl TemplateEngine {
    /// Create an engine with the built-in prompt templates registered
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        handlebars.register_helper("default", Box::new(default_helper));

        // Prompts are plain text, and a missing field is a bug
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.set_strict_mode(true);

        handlebars.register_template_string(BRAINSTORM, crate::brainstorm::BRAINSTORM_TEMPLATE)?;
        handlebars.register_template_string(SYNTHESIS, crate::synthesis::SYNTHESIS_TEMPLATE)?;
        handlebars.register_template_string(THEME, crate::synthesis::THEME_TEMPLATE)?;

        Ok(Self { handlebars })
    }

    /// Render a registered template against any serializable context
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        let rendered = self.handlebars.render(name, data)?;
        debug!("Rendered template '{}' ({} chars)", name, rendered.len());
        Ok(rendered)
    }

    /// Render an ad hoc template string with the same helpers and settings
    pub fn render_str<T: Serialize>(&self, template: &str, data: &T) -> Result<String> {
        Ok(self.handlebars.render_template(template, data)?)
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.has_template(name)
    }
}

/// Provide default value if variable is missing or blank
fn default_helper(
    h: &Helper,
    _: &Handlebars,
    _: &handlebars::Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let value = h.param(0)
        .and_then(|p| p.value().as_str())
        .unwrap_or("");

    let default_value = h.param(1)
        .and_then(|p| p.value().as_str())
        .unwrap_or("");

    if value.trim().is_empty() {
        out.write(default_value)?;
    } else {
        out.write(value)?;
    }

    Ok(())
}
