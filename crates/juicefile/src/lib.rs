//! # juicefile
//!
//! Command templates for WordPress projects.
//!
//! A Juicefile maps command names to one or more shell-command templates.
//! Templates reference caller arguments through `%args%`, `%arguments%`,
//! `%argN%` and `%argumentN%` placeholders. Any configured name becomes a
//! callable command, which lets a project extend the CLI purely by editing
//! its Juicefile.
//!
//! ## Example
//!
//! ```
//! use juicefile::{Format, Resolver, TemplateStore};
//!
//! let store = TemplateStore::load(
//!     "vendor:\n  - composer %arg1%\n  - echo done %arg2%\n",
//!     Format::Yaml,
//! )?;
//! let resolver = Resolver::new(store);
//!
//! let commands = resolver.invoke("vendor", &["install", "ok"])?;
//! assert_eq!(commands, vec!["composer install", "echo done ok"]);
//! # Ok::<(), juicefile::Error>(())
//! ```
//!
//! Resolution never runs anything; executing the returned commands is left
//! to the caller.

#![warn(clippy::all)]

pub mod discovery;
pub mod error;
pub mod placeholder;
pub mod resolver;
pub mod template;

pub use discovery::{discover, locate};
pub use error::{Error, ErrorCategory, Result};
pub use placeholder::{Placeholders, substitute};
pub use resolver::Resolver;
pub use template::{CommandTemplate, Format, TemplateStore};

use std::path::{Path, PathBuf};

/// Load the Juicefile at `explicit`, or the nearest one above `start`.
///
/// Returns the path that was loaded alongside a ready resolver.
pub fn load(explicit: Option<&Path>, start: &Path) -> Result<(PathBuf, Resolver)> {
    let path = locate(explicit, start)?;
    let store = TemplateStore::load_file(&path)?;
    Ok((path, Resolver::new(store)))
}
