//! Placeholder substitution for command templates.
//!
//! Templates may reference caller-supplied arguments in two ways:
//!
//! - `%args%` / `%arguments%` expands to every argument, joined by single spaces
//! - `%argN%` / `%argumentN%` (N >= 1) expands to the N-th argument
//!
//! The two forms are exclusive within one template: when the whole-list form is
//! present, positional placeholders are left untouched. `%arg0%` and anything
//! that is not a decimal index is ordinary text, so templates are free to
//! contain other `%` characters.

use crate::error::{Error, Result};
use regex::{Captures, Regex};
use std::collections::BTreeSet;
use std::sync::LazyLock;

static ALL_ARGS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%(?:args|arguments)%").expect("valid regex"));

static POSITIONAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%(?:arg|argument)([0-9]+)%").expect("valid regex"));

/// Placeholders referenced by a single template string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placeholders {
    /// Whether the template uses the whole-list shorthand
    pub all_args: bool,
    /// 1-based positional indices the template requires
    pub positional: BTreeSet<usize>,
}

impl Placeholders {
    /// Scan a template for placeholders.
    pub fn scan(template: &str) -> Self {
        if ALL_ARGS.is_match(template) {
            return Self {
                all_args: true,
                positional: BTreeSet::new(),
            };
        }

        let positional = POSITIONAL
            .captures_iter(template)
            .filter_map(|caps| parse_index(&caps))
            .collect();

        Self {
            all_args: false,
            positional,
        }
    }

    /// Minimum number of arguments needed to resolve the template.
    pub fn required(&self) -> usize {
        self.positional.last().copied().unwrap_or(0)
    }

    /// First index not covered by `supplied` arguments.
    pub fn first_missing(&self, supplied: usize) -> Option<usize> {
        self.positional.iter().copied().find(|&i| i > supplied)
    }
}

/// Resolve a template against the supplied arguments.
///
/// Fails with [`Error::MissingArgument`] naming the lowest unsatisfied index.
/// Arguments are inserted verbatim; quoting is the caller's concern.
pub fn substitute<S: AsRef<str>>(template: &str, args: &[S]) -> Result<String> {
    if ALL_ARGS.is_match(template) {
        let joined = args
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(" ");
        return Ok(ALL_ARGS
            .replace_all(template, regex::NoExpand(&joined))
            .into_owned());
    }

    let placeholders = Placeholders::scan(template);
    if let Some(index) = placeholders.first_missing(args.len()) {
        return Err(Error::MissingArgument {
            index,
            supplied: args.len(),
            template: template.to_string(),
        });
    }

    let resolved = POSITIONAL.replace_all(template, |caps: &Captures| match parse_index(caps) {
        Some(index) => args[index - 1].as_ref().to_string(),
        None => caps[0].to_string(),
    });

    Ok(resolved.into_owned())
}

/// Parse the numeric suffix of a positional match; zero and overflow are literal text.
fn parse_index(caps: &Captures) -> Option<usize> {
    caps[1].parse::<usize>().ok().filter(|&i| i >= 1)
}
