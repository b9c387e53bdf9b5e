//! Error handling for leo-sdk.
//! Defines the error taxonomy shared by every stage of the generation pipeline.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for leo-sdk operations.
///
/// Every variant is fatal to the run: no stage retries and nothing
/// already written to the destination is rolled back.
#[derive(Error, Debug)]
pub enum Error {
    /// An enumerated or validated configuration value was rejected.
    #[error("Invalid configuration: {message}.")]
    ConfigValidationError { message: String },

    /// The static manifest for a template type is missing or malformed.
    #[error("Unknown template '{template_type}': {reason}.")]
    UnknownTemplateError { template_type: String, reason: String },

    /// Copy, read or write failure on a specific path.
    #[error("File system error at '{}': {source}.", path.display())]
    FileSystemError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Malformed substitution syntax (or an unknown variable) in an enumerated file.
    #[error("Failed to render '{}': {source}.", path.display())]
    TemplateRenderError {
        path: PathBuf,
        #[source]
        source: minijinja::Error,
    },

    /// The template engine could not be configured.
    #[error("Template engine error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// The version-control initialization subprocess failed.
    #[error("Failed to initialize repository in '{}': {reason}.", destination.display())]
    RepoInitError { destination: PathBuf, reason: String },

    /// The destination directory already exists and is not empty.
    #[error("Output directory '{output_dir}' already exists and is not empty. Use --force to write into it.")]
    OutputDirectoryExistsError { output_dir: String },

    /// Interactive prompt failure.
    #[error("Prompt error: {0}.")]
    PromptError(#[from] dialoguer::Error),

    /// The resolved configuration could not be turned into template variables.
    #[error("Failed to build template context: {0}.")]
    ContextError(#[source] serde_json::Error),

    /// Preloaded answers are not valid JSON.
    #[error("Failed to parse answers: {0}.")]
    AnswersError(#[from] serde_json::Error),
}

impl Error {
    /// Shorthand for a [`Error::FileSystemError`] on `path`.
    pub fn fs<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Error::FileSystemError { path: path.into(), source }
    }

    /// Shorthand for a [`Error::ConfigValidationError`].
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Error::ConfigValidationError { message: message.into() }
    }
}

/// Convenience type alias for Results with leo-sdk's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
