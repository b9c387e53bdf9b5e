//! leo-sdk's main application entry point.
//! Parses the command line, resolves the project configuration and
//! runs the generation pipeline.

use leo_sdk::{
    answers::get_answers_from,
    cli::{get_args, Args},
    config::resolve_config,
    error::{default_error_handler, Result},
    generator::Generator,
    logger::init_logger,
    prompt::DialoguerPrompter,
    renderer::MiniJinjaRenderer,
    repository::GitInitializer,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads preloaded answers when `--stdin` is given
/// 2. Resolves the configuration (prompting unless `--defaults`)
/// 3. Generates the project and initializes its repository
/// 4. Prints the next steps
fn run(args: Args) -> Result<()> {
    let prompt = DialoguerPrompter::new();
    let renderer = MiniJinjaRenderer::new()?;
    let initializer = GitInitializer::new();

    let answers = get_answers_from(args.stdin)?;
    let config = resolve_config(&prompt, args.config_options(answers))?;

    println!("Creating new SDK project '{}'...", config.project_name);
    let project = Generator::new(&args.templates, &renderer, &initializer).generate(
        &config,
        &args.output_dir,
        args.force,
    )?;

    println!("\nYour SDK project is ready in {}.", project.destination.display());
    println!("\nNext steps:");
    println!("  cd {}", config.project_name);
    println!("  {} install", config.package_manager);
    println!("  {} run dev", config.package_manager);
    Ok(())
}
