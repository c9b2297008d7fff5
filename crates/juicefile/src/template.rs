//! Template store: command names mapped to ordered shell-command templates.

use crate::error::{Error, Result};
use crate::placeholder::Placeholders;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

/// Section key used by Juicefiles that nest their commands.
const COMMANDS_SECTION: &str = "commands";

/// Serialization format of a Juicefile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Toml,
}

impl Format {
    /// Pick a format from a file name; anything that is not `.toml` is YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Yaml,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yaml => write!(f, "yaml"),
            Self::Toml => write!(f, "toml"),
        }
    }
}

/// A named command and the shell-command templates it expands to.
///
/// `steps` is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTemplate {
    name: String,
    steps: Vec<String>,
}

impl CommandTemplate {
    /// Command name as written in the Juicefile.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Templates in execution order.
    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    /// Minimum number of arguments every step can be resolved with.
    pub fn required_args(&self) -> usize {
        self.steps
            .iter()
            .map(|s| Placeholders::scan(s).required())
            .max()
            .unwrap_or(0)
    }

    /// Whether any step forwards the whole argument list.
    pub fn takes_all_args(&self) -> bool {
        self.steps.iter().any(|s| Placeholders::scan(s).all_args)
    }
}

/// Loaded command templates keyed by name.
#[derive(Debug, Clone, Default)]
pub struct TemplateStore {
    templates: BTreeMap<String, CommandTemplate>,
}

impl TemplateStore {
    /// Parse a Juicefile document.
    pub fn load(source: &str, format: Format) -> Result<Self> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }

        let document: Value = match format {
            Format::Yaml => serde_yaml::from_str(source).map_err(|e| Error::syntax(e.to_string()))?,
            Format::Toml => toml::from_str(source).map_err(|e| Error::syntax(e.to_string()))?,
        };

        Self::from_document(document)
    }

    /// Read and parse a Juicefile, choosing the format from its extension.
    pub fn load_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::NotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        Self::load(&content, Format::from_path(path)).map_err(|e| e.at_path(path.to_path_buf()))
    }

    fn from_document(document: Value) -> Result<Self> {
        let mut root = match document {
            Value::Null => return Ok(Self::default()),
            Value::Object(map) => map,
            other => {
                return Err(Error::syntax(format!(
                    "expected a mapping of command names, found {}",
                    kind(&other)
                )));
            }
        };

        let commands = match root.remove(COMMANDS_SECTION) {
            Some(Value::Object(section)) => section,
            Some(Value::Null) => return Ok(Self::default()),
            Some(other) => {
                // Not a section: `commands` is itself a command name.
                root.insert(COMMANDS_SECTION.to_string(), other);
                root
            }
            None => root,
        };

        let mut templates = BTreeMap::new();
        for (name, value) in commands {
            let steps = parse_steps(&name, value)?;
            templates.insert(name.clone(), CommandTemplate { name, steps });
        }

        Ok(Self { templates })
    }

    /// Look up the template registered under `name`.
    pub fn resolve_template(&self, name: &str) -> Result<&CommandTemplate> {
        self.templates.get(name).ok_or_else(|| Error::UnknownCommand {
            name: name.to_string(),
        })
    }

    /// Whether `name` is a configured command.
    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Registered command names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    /// All templates in name order.
    pub fn templates(&self) -> impl Iterator<Item = &CommandTemplate> {
        self.templates.values()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

fn parse_steps(name: &str, value: Value) -> Result<Vec<String>> {
    let steps = match value {
        Value::String(step) => vec![step],
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::String(step) => Ok(step),
                other => Err(Error::syntax(format!(
                    "step {} of command '{}' must be a string, found {}",
                    i + 1,
                    name,
                    kind(&other)
                ))),
            })
            .collect::<Result<Vec<_>>>()?,
        other => {
            return Err(Error::syntax(format!(
                "command '{}' must be a string or a list of strings, found {}",
                name,
                kind(&other)
            )));
        }
    };

    if steps.is_empty() {
        return Err(Error::syntax(format!("command '{name}' has no steps")));
    }
    if let Some(i) = steps.iter().position(|s| s.trim().is_empty()) {
        return Err(Error::syntax(format!(
            "step {} of command '{}' is empty",
            i + 1,
            name
        )));
    }

    Ok(steps)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "nothing",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}
