//! Project generation pipeline.
//! Runs template selection, tree copy, variable substitution and
//! repository initialization one after another for a resolved configuration.

use crate::config::ProjectConfig;
use crate::copier::copy_template;
use crate::error::{Error, Result};
use crate::manifest::select_template;
use crate::renderer::TemplateRenderer;
use crate::repository::RepositoryInitializer;
use crate::substitution::substitute_variables;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// What a successful run produced.
#[derive(Debug)]
pub struct GeneratedProject {
    pub destination: PathBuf,
    /// Destination-relative files copied from the template, sorted.
    pub files_copied: Vec<PathBuf>,
    /// Destination-relative files rendered in place, in allow-list order.
    pub files_rendered: Vec<PathBuf>,
    /// Destination-relative optional directories included.
    pub optional_dirs: Vec<PathBuf>,
}

/// Ensures the destination is safe to write to.
///
/// A missing or empty directory is accepted; a non-empty one only with `force`.
///
/// # Errors
/// * `Error::OutputDirectoryExistsError` if the directory has content and force is false
pub fn get_output_dir<P: AsRef<Path>>(output_dir: P, force: bool) -> Result<PathBuf> {
    let output_dir = output_dir.as_ref();
    let has_contents = fs::read_dir(output_dir).map(|mut d| d.next().is_some()).unwrap_or(false);
    if has_contents && !force {
        return Err(Error::OutputDirectoryExistsError {
            output_dir: output_dir.display().to_string(),
        });
    }
    Ok(output_dir.to_path_buf())
}

/// Generates projects from a template collection.
pub struct Generator<'a> {
    templates_dir: PathBuf,
    renderer: &'a dyn TemplateRenderer,
    initializer: &'a dyn RepositoryInitializer,
}

impl<'a> Generator<'a> {
    pub fn new<P: Into<PathBuf>>(
        templates_dir: P,
        renderer: &'a dyn TemplateRenderer,
        initializer: &'a dyn RepositoryInitializer,
    ) -> Self {
        Self { templates_dir: templates_dir.into(), renderer, initializer }
    }

    /// Materializes `config` as `output_root/<projectName>`.
    ///
    /// # Flow
    /// 1. Checks the destination before anything is written
    /// 2. Selects the template manifest
    /// 3. Copies the template tree and requested optional directories
    /// 4. Renders the allow-listed files
    /// 5. Initializes the repository
    ///
    /// Every stage is fatal on error and nothing is cleaned up, so a
    /// failed run leaves the partial destination for inspection.
    pub fn generate(
        &self,
        config: &ProjectConfig,
        output_root: &Path,
        force: bool,
    ) -> Result<GeneratedProject> {
        let destination = get_output_dir(output_root.join(&config.project_name), force)?;
        let manifest = select_template(&self.templates_dir, config.template_type)?;

        info!("Generating '{}' from template '{}'.", config.project_name, config.template_type);
        let report = copy_template(&manifest, &destination, &config.features())?;
        info!("Copied {} files.", report.files.len());

        let files_rendered = substitute_variables(self.renderer, &manifest, &destination, config)?;
        info!("Rendered {} files.", files_rendered.len());

        self.initializer.init(&destination)?;
        info!("Initialized repository in '{}'.", destination.display());

        Ok(GeneratedProject {
            destination,
            files_copied: report.files,
            files_rendered,
            optional_dirs: report.optional_dirs,
        })
    }
}
