//! User input and interaction handling.
//! The resolver only talks to the [`Prompter`] trait so that the
//! terminal UI can be swapped for scripted answers.

use crate::error::Result;
use dialoguer::{Confirm, Input, Select};

/// Source of interactive answers.
pub trait Prompter {
    /// Asks for a free-form string, pre-filled with `default`.
    fn text(&self, prompt: &str, default: &str) -> Result<String>;

    /// Asks a yes/no question.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;

    /// Asks to pick one of `items`, returning the selected index.
    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize>;
}

/// Terminal prompter backed by dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn text(&self, prompt: &str, default: &str) -> Result<String> {
        let value = Input::<String>::new()
            .with_prompt(prompt)
            .default(default.to_string())
            .interact_text()?;
        Ok(value)
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        let value = Confirm::new().with_prompt(prompt).default(default).interact()?;
        Ok(value)
    }

    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize> {
        let selection =
            Select::new().with_prompt(prompt).items(items).default(default).interact()?;
        Ok(selection)
    }
}
