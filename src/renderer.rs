//! Variable substitution rendering for leo-sdk.
//! Template files use EJS-style tags (`<%= sdkName %>`, `<% if .. %>`, `<%# .. %>`)
//! so that the `{{ }}`, `{% %}` and `{# }` sequences common in TSX, workflow
//! and Markdown files pass through untouched.
use crate::error::{Error, Result};
use cruet::Inflector;
use minijinja::syntax::SyntaxConfig;
use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use std::path::Path;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `name` - Path of the file being rendered, used in error reports
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, name: &Path, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

fn pascal_case(value: String) -> String {
    value.to_pascal_case()
}

fn camel_case(value: String) -> String {
    value.to_camel_case()
}

fn kebab_case(value: String) -> String {
    value.to_kebab_case()
}

fn snake_case(value: String) -> String {
    value.to_snake_case()
}

impl MiniJinjaRenderer {
    /// Creates a renderer with the `<%= %>` output, `<% %>` block and
    /// `<%# %>` comment syntax.
    ///
    /// Undefined variables are errors, trailing newlines are kept and
    /// nothing is auto-escaped, so a file without tags renders to itself.
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.set_syntax(
            SyntaxConfig::builder()
                .block_delimiters("<%", "%>")
                .variable_delimiters("<%=", "%>")
                .comment_delimiters("<%#", "%>")
                .build()?,
        );
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::None);

        env.add_filter("pascal_case", pascal_case);
        env.add_filter("camel_case", camel_case);
        env.add_filter("kebab_case", kebab_case);
        env.add_filter("snake_case", snake_case);

        Ok(Self { env })
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template string using MiniJinja.
    ///
    /// # Errors
    /// * `Error::TemplateRenderError` if the template fails to parse or
    ///   references a variable missing from `context`
    fn render(&self, name: &Path, template: &str, context: &serde_json::Value) -> Result<String> {
        self.env
            .render_named_str(&name.to_string_lossy(), template, context)
            .map_err(|source| Error::TemplateRenderError { path: name.to_path_buf(), source })
    }
}
