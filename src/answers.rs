//! Preloaded answers.
//! A JSON object piped on stdin answers questions without prompting:
//!
//! ```text
//! echo '{"sdkName": "Acme", "withCI": true}' | leo-sdk acme --stdin
//! ```

use crate::error::{Error, Result};
use std::io::Read;

/// Parses preloaded answers. Blank input means "no answers" (`null`).
pub fn parse_answers(content: &str) -> Result<serde_json::Value> {
    let content = content.trim();
    if content.is_empty() {
        return Ok(serde_json::Value::Null);
    }

    let value: serde_json::Value = serde_json::from_str(content)?;
    match value {
        serde_json::Value::Object(_) | serde_json::Value::Null => Ok(value),
        other => Err(Error::validation(format!(
            "answers must be a JSON object, got '{other}'"
        ))),
    }
}

pub fn load_from_stdin() -> Result<serde_json::Value> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| Error::fs("<stdin>", e))?;
    parse_answers(&buffer)
}

/// Returns preloaded answers from stdin when requested, `null` otherwise.
pub fn get_answers_from(take_from_stdin: bool) -> Result<serde_json::Value> {
    if take_from_stdin {
        load_from_stdin()
    } else {
        Ok(serde_json::Value::Null)
    }
}

/// Reads a string answer. A JSON `null` counts as unanswered.
pub fn answer_str(answers: &serde_json::Value, key: &str) -> Result<Option<String>> {
    match answers.get(key) {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => {
            Err(Error::validation(format!("answer '{key}' must be a string, got '{other}'")))
        }
    }
}

/// Reads a boolean answer. A JSON `null` counts as unanswered.
pub fn answer_bool(answers: &serde_json::Value, key: &str) -> Result<Option<bool>> {
    match answers.get(key) {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::Bool(b)) => Ok(Some(*b)),
        Some(other) => {
            Err(Error::validation(format!("answer '{key}' must be a boolean, got '{other}'")))
        }
    }
}
