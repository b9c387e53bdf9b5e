//! Template selection.
//! Maps each [`TemplateType`] to its root directory and a static manifest:
//! the optional top-level directories, the allow-list of files that go
//! through variable substitution, and the placeholder files renamed after copying.

use crate::config::TemplateType;
use crate::error::{Error, Result};
use indexmap::IndexSet;
use log::debug;
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

/// Optional part of a template, gated by a configuration flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Examples,
    Ci,
}

/// Flags deciding which optional directories are materialized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Features {
    pub examples: bool,
    pub ci: bool,
}

impl Features {
    pub fn is_enabled(&self, feature: Feature) -> bool {
        match feature {
            Feature::Examples => self.examples,
            Feature::Ci => self.ci,
        }
    }
}

/// A top-level template directory skipped by the primary copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionalDir {
    /// Directory name directly under the template root.
    pub source: String,
    /// Destination-relative directory it is copied to.
    pub target: PathBuf,
    pub feature: Feature,
}

/// File stored under an escaped name in the template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rename {
    pub placeholder: PathBuf,
    pub target: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateManifest {
    pub template_type: TemplateType,
    pub root: PathBuf,
    pub optional_dirs: Vec<OptionalDir>,
    /// Destination-relative files rendered in place, in order. Optional
    /// directories never contribute: they are copied verbatim.
    pub substitutions: IndexSet<PathBuf>,
    pub renames: Vec<Rename>,
}

impl TemplateManifest {
    pub fn optional_names(&self) -> HashSet<&str> {
        self.optional_dirs.iter().map(|dir| dir.source.as_str()).collect()
    }

    /// Whether a root-relative path lives inside an optional directory.
    pub fn is_optional(&self, relative: &Path) -> bool {
        match relative.components().next() {
            Some(Component::Normal(first)) => {
                self.optional_dirs.iter().any(|dir| first == dir.source.as_str())
            }
            _ => false,
        }
    }
}

struct OptionalDirEntry {
    source: &'static str,
    target: &'static str,
    feature: Feature,
}

struct ManifestEntry {
    template_type: TemplateType,
    substitutions: &'static [&'static str],
}

const OPTIONAL_DIRS: [OptionalDirEntry; 2] = [
    OptionalDirEntry {
        source: "examples",
        target: "example",
        feature: Feature::Examples,
    },
    OptionalDirEntry {
        source: "ci",
        target: ".github",
        feature: Feature::Ci,
    },
];

const PLACEHOLDER_RENAMES: [(&str, &str); 2] =
    [("_gitignore", ".gitignore"), ("_npmignore", ".npmignore")];

const MANIFESTS: [ManifestEntry; 2] = [
    ManifestEntry {
        template_type: TemplateType::TsLib,
        substitutions: &[
            "package.json",
            "README.md",
            "tsconfig.json",
            "src/index.ts",
            "src/__tests__/sdkClient.test.ts",
            "LICENSE",
        ],
    },
    ManifestEntry {
        template_type: TemplateType::ReactLib,
        substitutions: &[
            "package.json",
            "README.md",
            "tsconfig.json",
            "src/index.ts",
            "src/__tests__/sdkSection.test.tsx",
            "LICENSE",
        ],
    },
];

/// Rejects manifest paths that could escape the destination.
fn relative_path(template_type: TemplateType, raw: &str) -> Result<PathBuf> {
    let path = PathBuf::from(raw);
    let well_formed = !raw.is_empty()
        && path.components().all(|component| matches!(component, Component::Normal(_)));
    if !well_formed {
        return Err(Error::UnknownTemplateError {
            template_type: template_type.to_string(),
            reason: format!("manifest path '{raw}' is not a plain relative path"),
        });
    }
    Ok(path)
}

/// Returns the root and manifest of `template_type` inside `templates_dir`.
///
/// Has no side effects; the root is not required to exist yet.
///
/// # Errors
/// * `Error::UnknownTemplateError` if the static manifest has no entry for
///   the type or lists a path that is not plain and relative
pub fn select_template<P: AsRef<Path>>(
    templates_dir: P,
    template_type: TemplateType,
) -> Result<TemplateManifest> {
    let entry = MANIFESTS.iter().find(|entry| entry.template_type == template_type).ok_or_else(
        || Error::UnknownTemplateError {
            template_type: template_type.to_string(),
            reason: "no manifest entry".to_string(),
        },
    )?;

    let substitutions = entry
        .substitutions
        .iter()
        .map(|raw| relative_path(template_type, raw))
        .collect::<Result<IndexSet<_>>>()?;

    let mut optional_dirs = Vec::with_capacity(OPTIONAL_DIRS.len());
    for dir in &OPTIONAL_DIRS {
        if relative_path(template_type, dir.source)?.components().count() != 1 {
            return Err(Error::UnknownTemplateError {
                template_type: template_type.to_string(),
                reason: format!("optional directory '{}' is not top-level", dir.source),
            });
        }
        optional_dirs.push(OptionalDir {
            source: dir.source.to_string(),
            target: relative_path(template_type, dir.target)?,
            feature: dir.feature,
        });
    }

    let renames = PLACEHOLDER_RENAMES
        .iter()
        .map(|(placeholder, target)| -> Result<Rename> {
            Ok(Rename {
                placeholder: relative_path(template_type, placeholder)?,
                target: relative_path(template_type, target)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let root = templates_dir.as_ref().join(template_type.as_str());
    debug!("Selected template '{}' at '{}'.", template_type, root.display());

    Ok(TemplateManifest { template_type, root, optional_dirs, substitutions, renames })
}
