//! Command-line interface implementation for leo-sdk.
//! Provides argument parsing and help text formatting using clap.

use crate::config::{ConfigOptions, PackageManager, TemplateType};
use crate::constants::DEFAULT_TEMPLATES_DIR;
use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for leo-sdk.
#[derive(Parser, Debug)]
#[command(name = "leo-sdk", author, version, about = "Generate a new TypeScript SDK project", long_about = None)]
pub struct Args {
    /// Name of the project to create, also used as its directory name
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: String,

    /// Use default values for all prompts
    #[arg(short, long)]
    pub defaults: bool,

    /// Include example components
    #[arg(long)]
    pub with_examples: bool,

    /// Include CI/CD configuration
    #[arg(long)]
    pub with_ci: bool,

    /// Organization name
    #[arg(long)]
    pub org: Option<String>,

    /// Author name
    #[arg(long)]
    pub author: Option<String>,

    /// Template to generate from
    #[arg(short, long, value_enum)]
    pub template_type: Option<TemplateType>,

    /// Package manager shown in the next steps
    #[arg(long, value_enum)]
    pub package_manager: Option<PackageManager>,

    /// Directory in which the project directory is created
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Directory holding one subdirectory per template type
    #[arg(long, value_name = "DIR", default_value = DEFAULT_TEMPLATES_DIR)]
    pub templates: PathBuf,

    /// Write into the project directory even if it is not empty
    #[arg(short, long)]
    pub force: bool,

    /// Read answers as a JSON object from stdin.
    /// Questions without an answer take their defaults instead of prompting.
    #[arg(short, long)]
    pub stdin: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Inputs for the configuration resolver.
    pub fn config_options(&self, answers: serde_json::Value) -> ConfigOptions {
        ConfigOptions {
            project_name: self.project_name.clone(),
            defaults: self.defaults || self.stdin,
            with_examples: self.with_examples,
            with_ci: self.with_ci,
            org: self.org.clone(),
            author: self.author.clone(),
            template_type: self.template_type,
            package_manager: self.package_manager,
            answers,
        }
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
