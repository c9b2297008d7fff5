//! Answers for options the user did not pass as flags.

use anyhow::Result;
use dialoguer::{Confirm, Input};

/// Source of answers for missing options.
pub trait Prompter {
    /// Ask for a text value. An empty answer means "use the default".
    fn input(&self, prompt: &str, default: Option<&str>) -> Result<String>;

    /// Ask a yes/no question.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;
}

/// Asks on the terminal with dialoguer.
pub struct Interactive;

impl Prompter for Interactive {
    fn input(&self, prompt: &str, default: Option<&str>) -> Result<String> {
        let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(true);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        Ok(input.interact_text()?.trim().to_string())
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        Ok(Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()?)
    }
}

/// Never asks; every question takes its default.
pub struct Defaults;

impl Prompter for Defaults {
    fn input(&self, _prompt: &str, default: Option<&str>) -> Result<String> {
        Ok(default.unwrap_or_default().to_string())
    }

    fn confirm(&self, _prompt: &str, default: bool) -> Result<bool> {
        Ok(default)
    }
}

/// Resolve one option: explicit value, then the prompter's answer, then the default.
pub fn resolve(
    explicit: Option<String>,
    prompter: &dyn Prompter,
    prompt: &str,
    default: &str,
) -> Result<String> {
    if let Some(value) = explicit {
        return Ok(value);
    }
    let answer = prompter.input(prompt, Some(default))?;
    Ok(if answer.is_empty() {
        default.to_string()
    } else {
        answer
    })
}
