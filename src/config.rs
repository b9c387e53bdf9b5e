//! Project configuration.
//! Turns command-line flags, preloaded answers and interactive prompts
//! into one validated [`ProjectConfig`] that the rest of the pipeline borrows.

use crate::answers::{answer_bool, answer_str};
use crate::constants::{DEFAULT_AUTHOR, DEFAULT_ORG, PROJECT_NAME_PATTERN};
use crate::error::{Error, Result};
use crate::manifest::Features;
use crate::prompt::Prompter;
use chrono::Datelike;
use clap::ValueEnum;
use log::{debug, warn};
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Kind of project to generate. Each variant owns one template root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateType {
    /// Plain TypeScript library
    #[default]
    TsLib,
    /// React component library
    ReactLib,
}

impl TemplateType {
    pub const ALL: [TemplateType; 2] = [TemplateType::TsLib, TemplateType::ReactLib];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateType::TsLib => "ts-lib",
            TemplateType::ReactLib => "react-lib",
        }
    }

    /// Label shown in the interactive selection.
    pub fn title(&self) -> &'static str {
        match self {
            TemplateType::TsLib => "TypeScript library SDK",
            TemplateType::ReactLib => "React component SDK",
        }
    }

    /// Maps a raw value onto a known template type.
    ///
    /// Unrecognized values fall back to the default type instead of
    /// flowing into path construction.
    pub fn resolve(candidate: Option<&str>) -> Self {
        match candidate {
            Some(raw) => raw.parse::<TemplateType>().unwrap_or_else(|_| {
                warn!("Unknown template type '{raw}', using '{}'.", TemplateType::default());
                TemplateType::default()
            }),
            None => TemplateType::default(),
        }
    }
}

impl FromStr for TemplateType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        TemplateType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::validation(format!("unknown template type '{s}'")))
    }
}

impl fmt::Display for TemplateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Package manager echoed in the next steps and available to templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Npm,
    Pnpm,
    Yarn,
}

impl PackageManager {
    pub const ALL: [PackageManager; 3] =
        [PackageManager::Npm, PackageManager::Pnpm, PackageManager::Yarn];

    pub fn as_str(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
        }
    }
}

impl FromStr for PackageManager {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        PackageManager::ALL
            .into_iter()
            .find(|pm| pm.as_str() == s)
            .ok_or_else(|| Error::validation(format!("unknown package manager '{s}'")))
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fully resolved configuration of one generator run.
///
/// Serializes with the camelCase names templates refer to,
/// e.g. `<%= sdkName %>` or `<%= copyrightYear %>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    pub project_name: String,
    pub sdk_name: String,
    pub org: String,
    pub author: String,
    pub description: String,
    pub with_examples: bool,
    #[serde(rename = "withCI")]
    pub with_ci: bool,
    pub package_manager: PackageManager,
    pub template_type: TemplateType,
    pub copyright_year: i32,
}

impl ProjectConfig {
    /// Every field as a named variable for the substitution pass.
    ///
    /// # Errors
    /// * `Error::ContextError` if serialization fails
    pub fn context(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(Error::ContextError)
    }

    pub fn features(&self) -> Features {
        Features { examples: self.with_examples, ci: self.with_ci }
    }
}

/// Raw inputs to [`resolve_config`], as collected by the command line.
#[derive(Debug, Default)]
pub struct ConfigOptions {
    pub project_name: String,
    /// Skip prompting and take flags, answers and defaults as they are.
    pub defaults: bool,
    pub with_examples: bool,
    pub with_ci: bool,
    pub org: Option<String>,
    pub author: Option<String>,
    pub template_type: Option<TemplateType>,
    pub package_manager: Option<PackageManager>,
    /// Preloaded answers keyed by camelCase field name, or `null`.
    pub answers: serde_json::Value,
}

/// Checks that the project name can be used as a single directory name.
pub fn validate_project_name(name: &str) -> Result<()> {
    let re = Regex::new(PROJECT_NAME_PATTERN)
        .map_err(|e| Error::validation(format!("invalid project name pattern: {e}")))?;
    if re.is_match(name) {
        Ok(())
    } else {
        Err(Error::validation(format!(
            "project name '{name}' must match {PROJECT_NAME_PATTERN}"
        )))
    }
}

struct Questions<'a> {
    prompt: &'a dyn Prompter,
    answers: &'a serde_json::Value,
    interactive: bool,
}

impl Questions<'_> {
    fn text(&self, key: &str, message: &str, initial: String) -> Result<String> {
        let value = match answer_str(self.answers, key)? {
            Some(value) => value,
            None if self.interactive => self.prompt.text(message, &initial)?,
            None => initial.clone(),
        };

        if value.trim().is_empty() {
            debug!("Empty answer for '{key}', using '{initial}'.");
            Ok(initial)
        } else {
            Ok(value)
        }
    }

    fn confirm(&self, key: &str, message: &str, initial: bool) -> Result<bool> {
        match answer_bool(self.answers, key)? {
            Some(value) => Ok(value),
            None if self.interactive => self.prompt.confirm(message, initial),
            None => Ok(initial),
        }
    }

    fn template_type(&self, initial: TemplateType) -> Result<TemplateType> {
        if let Some(raw) = answer_str(self.answers, "templateType")? {
            return Ok(TemplateType::resolve(Some(&raw)));
        }
        if !self.interactive {
            return Ok(initial);
        }

        let titles: Vec<&str> = TemplateType::ALL.iter().map(|t| t.title()).collect();
        let default = TemplateType::ALL.iter().position(|t| *t == initial).unwrap_or(0);
        let selection = self.prompt.select("Template type", &titles, default)?;
        Ok(TemplateType::ALL.get(selection).copied().unwrap_or(initial))
    }

    fn package_manager(&self, initial: PackageManager) -> Result<PackageManager> {
        if let Some(raw) = answer_str(self.answers, "packageManager")? {
            return raw.parse();
        }
        if !self.interactive {
            return Ok(initial);
        }

        let names: Vec<&str> = PackageManager::ALL.iter().map(|pm| pm.as_str()).collect();
        let default = PackageManager::ALL.iter().position(|pm| *pm == initial).unwrap_or(0);
        let selection = self.prompt.select("Package manager", &names, default)?;
        Ok(PackageManager::ALL.get(selection).copied().unwrap_or(initial))
    }
}

/// Resolves the configuration for one run.
///
/// Precedence for every field: preloaded answer, then prompt (pre-filled
/// with the flag or default), then flag, then default. Prompts are skipped
/// entirely when `options.defaults` is set.
///
/// # Errors
/// * `Error::ConfigValidationError` for an invalid project name, a preloaded
///   answer of the wrong type, or an unknown package manager
/// * `Error::PromptError` if the terminal interaction fails
pub fn resolve_config(prompt: &dyn Prompter, options: ConfigOptions) -> Result<ProjectConfig> {
    validate_project_name(&options.project_name)?;

    let questions = Questions {
        prompt,
        answers: &options.answers,
        interactive: !options.defaults,
    };
    let project_name = options.project_name.clone();

    let sdk_name = questions.text("sdkName", "SDK name", project_name.clone())?;
    let org = questions.text(
        "org",
        "Organization name",
        options.org.clone().unwrap_or_else(|| DEFAULT_ORG.to_string()),
    )?;
    let author = questions.text(
        "author",
        "Author name",
        options.author.clone().unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
    )?;
    let description =
        questions.text("description", "Description", format!("{project_name} SDK"))?;
    let with_examples =
        questions.confirm("withExamples", "Include example components?", options.with_examples)?;
    let with_ci = questions.confirm("withCI", "Include CI/CD configuration?", options.with_ci)?;
    let template_type = questions.template_type(options.template_type.unwrap_or_default())?;
    let package_manager =
        questions.package_manager(options.package_manager.unwrap_or_default())?;

    let config = ProjectConfig {
        project_name,
        sdk_name,
        org,
        author,
        description,
        with_examples,
        with_ci,
        package_manager,
        template_type,
        copyright_year: chrono::Local::now().year(),
    };
    debug!("Resolved configuration: {config:?}");

    Ok(config)
}
