use leo_sdk::config::{PackageManager, ProjectConfig, TemplateType};
use leo_sdk::error::{Error, Result};
use leo_sdk::generator::Generator;
use leo_sdk::renderer::MiniJinjaRenderer;
use leo_sdk::repository::RepositoryInitializer;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const TEMPLATES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/template");

/// Records the directories it was asked to initialize.
#[derive(Default)]
struct RecordingInitializer {
    calls: RefCell<Vec<PathBuf>>,
    fail: bool,
}

impl RepositoryInitializer for RecordingInitializer {
    fn init(&self, destination: &Path) -> Result<()> {
        self.calls.borrow_mut().push(destination.to_path_buf());
        if self.fail {
            return Err(Error::RepoInitError {
                destination: destination.to_path_buf(),
                reason: "exited with exit status: 1".to_string(),
            });
        }
        Ok(())
    }
}

fn config(template_type: TemplateType, with_examples: bool, with_ci: bool) -> ProjectConfig {
    ProjectConfig {
        project_name: "acme-sdk".to_string(),
        sdk_name: "AcmeSDK".to_string(),
        org: "acme".to_string(),
        author: "Jane Doe".to_string(),
        description: "Client for the Acme API".to_string(),
        with_examples,
        with_ci,
        package_manager: PackageManager::Pnpm,
        template_type,
        copyright_year: 2026,
    }
}

#[test_log::test]
fn test_generates_core_project() {
    let output = TempDir::new().unwrap();
    let renderer = MiniJinjaRenderer::new().unwrap();
    let initializer = RecordingInitializer::default();
    let generator = Generator::new(TEMPLATES, &renderer, &initializer);

    let project = generator
        .generate(&config(TemplateType::TsLib, false, false), output.path(), false)
        .unwrap();

    let destination = output.path().join("acme-sdk");
    assert_eq!(project.destination, destination);
    assert_eq!(project.files_rendered.len(), 6);
    for file in &project.files_rendered {
        let content = fs::read_to_string(destination.join(file)).unwrap();
        assert!(content.contains("AcmeSDK"), "{} lacks sdkName", file.display());
        assert!(!content.contains("<%="), "{} left unrendered", file.display());
    }
    assert!(project.optional_dirs.is_empty());
    assert!(!destination.join("example").exists());
    assert!(!destination.join(".github").exists());
    assert!(destination.join(".gitignore").is_file());
    assert!(!destination.join("_gitignore").exists());
    assert_eq!(*initializer.calls.borrow(), vec![destination]);
}

#[test]
fn test_package_json_stays_valid_json() {
    let output = TempDir::new().unwrap();
    let renderer = MiniJinjaRenderer::new().unwrap();
    let initializer = RecordingInitializer::default();
    let mut config = config(TemplateType::TsLib, false, false);
    config.author = "Jane \"JD\" Doe".to_string();

    Generator::new(TEMPLATES, &renderer, &initializer)
        .generate(&config, output.path(), false)
        .unwrap();

    let raw = fs::read_to_string(output.path().join("acme-sdk/package.json")).unwrap();
    let package: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(package["name"], "@acme/acme-sdk");
    assert_eq!(package["author"], "Jane \"JD\" Doe");
    assert_eq!(package["displayName"], "AcmeSDK");
}

#[test]
fn test_optional_directories_are_verbatim_copies() {
    for template_type in TemplateType::ALL {
        let output = TempDir::new().unwrap();
        let renderer = MiniJinjaRenderer::new().unwrap();
        let initializer = RecordingInitializer::default();

        let project = Generator::new(TEMPLATES, &renderer, &initializer)
            .generate(&config(template_type, true, true), output.path(), false)
            .unwrap();

        let source = Path::new(TEMPLATES).join(template_type.as_str());
        let destination = output.path().join("acme-sdk");
        assert_eq!(project.optional_dirs, vec![PathBuf::from("example"), PathBuf::from(".github")]);
        assert!(!dir_diff::is_different(source.join("ci"), destination.join(".github")).unwrap());
        assert!(!dir_diff::is_different(source.join("examples"), destination.join("example"))
            .unwrap());
        assert!(!destination.join("examples").exists());
        assert!(!destination.join("ci").exists());
    }
}

#[test]
fn test_react_lib_test_file_is_rendered() {
    let output = TempDir::new().unwrap();
    let renderer = MiniJinjaRenderer::new().unwrap();
    let initializer = RecordingInitializer::default();

    let project = Generator::new(TEMPLATES, &renderer, &initializer)
        .generate(&config(TemplateType::ReactLib, false, false), output.path(), false)
        .unwrap();

    assert!(project.files_rendered.contains(&PathBuf::from("src/__tests__/sdkSection.test.tsx")));
    let test_file = output.path().join("acme-sdk/src/__tests__/sdkSection.test.tsx");
    assert!(fs::read_to_string(test_file).unwrap().contains("AcmeSDK"));
}

#[test]
fn test_repository_failure_keeps_output() {
    let output = TempDir::new().unwrap();
    let renderer = MiniJinjaRenderer::new().unwrap();
    let initializer = RecordingInitializer { fail: true, ..Default::default() };

    let result = Generator::new(TEMPLATES, &renderer, &initializer).generate(
        &config(TemplateType::TsLib, false, false),
        output.path(),
        false,
    );

    assert!(matches!(result, Err(Error::RepoInitError { .. })));
    let readme = fs::read_to_string(output.path().join("acme-sdk/README.md")).unwrap();
    assert!(readme.contains("AcmeSDK"));
}

#[test]
fn test_existing_destination_requires_force() {
    let output = TempDir::new().unwrap();
    let destination = output.path().join("acme-sdk");
    fs::create_dir_all(&destination).unwrap();
    fs::write(destination.join("notes.txt"), "keep me\n").unwrap();
    let renderer = MiniJinjaRenderer::new().unwrap();
    let initializer = RecordingInitializer::default();
    let generator = Generator::new(TEMPLATES, &renderer, &initializer);
    let config = config(TemplateType::TsLib, false, false);

    let result = generator.generate(&config, output.path(), false);
    assert!(matches!(result, Err(Error::OutputDirectoryExistsError { .. })));
    assert!(!destination.join("package.json").exists());
    assert!(initializer.calls.borrow().is_empty());

    generator.generate(&config, output.path(), true).unwrap();
    assert!(destination.join("package.json").is_file());
    assert_eq!(fs::read_to_string(destination.join("notes.txt")).unwrap(), "keep me\n");
}

#[test]
fn test_missing_template_collection() {
    let output = TempDir::new().unwrap();
    let templates = TempDir::new().unwrap();
    let renderer = MiniJinjaRenderer::new().unwrap();
    let initializer = RecordingInitializer::default();

    let result = Generator::new(templates.path(), &renderer, &initializer).generate(
        &config(TemplateType::TsLib, false, false),
        output.path(),
        false,
    );

    assert!(matches!(result, Err(Error::FileSystemError { .. })));
    assert!(!output.path().join("acme-sdk").exists());
}
