//! Locating a project's Juicefile.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// File names recognised as a Juicefile, in lookup order.
pub const CANDIDATES: &[&str] = &[
    "Juicefile",
    "juicefile",
    "Juicefile.yml",
    "Juicefile.yaml",
    ".juicefile",
    "juice.toml",
];

/// Find the nearest Juicefile in `start` or any of its ancestors.
pub fn discover(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        CANDIDATES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    })
}

/// Use `explicit` when given, otherwise discover from `start`.
///
/// A relative `explicit` path is taken relative to `start`, so the result
/// always has a usable parent directory.
pub fn locate(explicit: Option<&Path>, start: &Path) -> Result<PathBuf> {
    match explicit {
        Some(path) => {
            let path = start.join(path);
            if path.is_file() {
                Ok(path)
            } else {
                Err(Error::NotFound(path))
            }
        }
        None => discover(start).ok_or_else(|| Error::NotFound(start.join(CANDIDATES[0]))),
    }
}
