//! Variable substitution over the manifest allow-list.
//!
//! Only files enumerated by the manifest are rendered; every other copied
//! file stays byte-identical. The tree is never scanned for tags.

use crate::config::ProjectConfig;
use crate::error::{Error, Result};
use crate::manifest::TemplateManifest;
use crate::renderer::TemplateRenderer;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Renders the allow-listed files of `manifest` in place under `destination`.
///
/// Files that do not exist are skipped. Returns the destination-relative
/// paths that were rendered, in allow-list order.
///
/// # Errors
/// * `Error::ContextError` if the configuration cannot be turned into a context
/// * `Error::FileSystemError` if a listed file cannot be read or written
/// * `Error::TemplateRenderError` on the first file that fails to render;
///   files rendered before it keep their new content
pub fn substitute_variables(
    renderer: &dyn TemplateRenderer,
    manifest: &TemplateManifest,
    destination: &Path,
    config: &ProjectConfig,
) -> Result<Vec<PathBuf>> {
    let context = config.context()?;
    let mut rendered = Vec::new();

    for relative in &manifest.substitutions {
        let path = destination.join(relative);
        if !path.is_file() {
            debug!("Skipping '{}', not present in destination.", relative.display());
            continue;
        }

        render_in_place(renderer, &path, relative, &context)?;
        debug!("Rendered '{}'.", relative.display());
        rendered.push(relative.clone());
    }

    Ok(rendered)
}

fn render_in_place(
    renderer: &dyn TemplateRenderer,
    path: &Path,
    relative: &Path,
    context: &serde_json::Value,
) -> Result<()> {
    let content = fs::read_to_string(path).map_err(|e| Error::fs(path, e))?;
    let output = renderer.render(relative, &content, context)?;
    fs::write(path, output).map_err(|e| Error::fs(path, e))
}
