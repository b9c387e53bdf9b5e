//! Common constants used throughout leo-sdk.

/// Organization used when none is given.
pub const DEFAULT_ORG: &str = "hollywood";

/// Author used when none is given.
pub const DEFAULT_AUTHOR: &str = "holly";

/// Template collection shipped with the crate.
pub const DEFAULT_TEMPLATES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/template");

/// Program invoked to initialize the repository in the destination.
pub const DEFAULT_VCS_PROGRAM: &str = "git";

/// Accepted project names. Also keeps the destination a single path component.
pub const PROJECT_NAME_PATTERN: &str = r"^[A-Za-z0-9][A-Za-z0-9._-]*$";
