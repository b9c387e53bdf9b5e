use std::io;
use std::path::PathBuf;

use leo_sdk::error::Error;

#[test]
fn test_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: Error = json_err.into();

    match err {
        Error::AnswersError(_) => (),
        _ => panic!("Expected AnswersError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::validation("unknown package manager 'bun'");
    assert_eq!(err.to_string(), "Invalid configuration: unknown package manager 'bun'.");

    let err = Error::RepoInitError {
        destination: PathBuf::from("my-sdk"),
        reason: "'git init' exited with exit status: 1".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Failed to initialize repository in 'my-sdk': 'git init' exited with exit status: 1."
    );
}

#[test]
fn test_file_system_error_keeps_path_and_source() {
    let err = Error::fs("template/ts-lib", io::Error::new(io::ErrorKind::NotFound, "missing"));

    assert!(err.to_string().contains("template/ts-lib"));
    match err {
        Error::FileSystemError { path, source } => {
            assert_eq!(path, PathBuf::from("template/ts-lib"));
            assert_eq!(source.kind(), io::ErrorKind::NotFound);
        }
        _ => panic!("Expected FileSystemError variant"),
    }
}

#[test]
fn test_context_error_is_not_an_answers_error() {
    let json_err = serde_json::from_str::<serde_json::Value>("[").unwrap_err();
    let err = Error::ContextError(json_err);

    assert!(err.to_string().starts_with("Failed to build template context:"));
    assert!(!matches!(err, Error::AnswersError(_)));
}
