//! Version-control initialization of the generated project.

use crate::constants::DEFAULT_VCS_PROGRAM;
use crate::error::{Error, Result};
use log::debug;
use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

/// Initializes a repository rooted at a directory.
pub trait RepositoryInitializer {
    fn init(&self, destination: &Path) -> Result<()>;
}

/// Runs `<program> init` inside the destination and waits for it.
///
/// There is no timeout and no retry: a failing exit status is returned
/// to the caller as-is.
#[derive(Debug, Clone)]
pub struct GitInitializer {
    program: OsString,
}

impl GitInitializer {
    pub fn new() -> Self {
        Self::with_program(DEFAULT_VCS_PROGRAM)
    }

    /// Uses another executable in place of `git`.
    pub fn with_program<S: Into<OsString>>(program: S) -> Self {
        Self { program: program.into() }
    }
}

impl Default for GitInitializer {
    fn default() -> Self {
        GitInitializer::new()
    }
}

impl RepositoryInitializer for GitInitializer {
    /// # Errors
    /// * `Error::RepoInitError` if the program cannot be started or exits
    ///   with a non-zero status
    fn init(&self, destination: &Path) -> Result<()> {
        debug!("Running '{} init' in '{}'.", self.program.to_string_lossy(), destination.display());

        let status = Command::new(&self.program)
            .arg("init")
            .current_dir(destination)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| Error::RepoInitError {
                destination: destination.to_path_buf(),
                reason: format!("failed to run '{}': {e}", self.program.to_string_lossy()),
            })?;

        if !status.success() {
            return Err(Error::RepoInitError {
                destination: destination.to_path_buf(),
                reason: format!("'{} init' exited with {status}", self.program.to_string_lossy()),
            });
        }

        Ok(())
    }
}
