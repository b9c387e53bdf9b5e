//! leo-sdk generates TypeScript SDK projects from bundled templates.
//! It resolves a project configuration, copies the selected template tree,
//! renders an allow-listed set of files and initializes a git repository.

/// Preloaded answers read from stdin
pub mod answers;

/// Command-line interface module for the leo-sdk application
pub mod cli;

/// Project configuration and its resolution from flags, answers and prompts
pub mod config;

/// Common constants
pub mod constants;

/// Template tree copying with optional directories and placeholder renames
pub mod copier;

/// Error types and handling for the leo-sdk application
pub mod error;

/// Orchestration of the whole pipeline
pub mod generator;

/// Logger setup for the binary
pub mod logger;

/// Static template manifests and template selection
pub mod manifest;

/// User input and interaction handling
pub mod prompt;

/// Template rendering engine
pub mod renderer;

/// Repository initialization in the generated project
pub mod repository;

/// Variable substitution over the allow-listed files
pub mod substitution;
