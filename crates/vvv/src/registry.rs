//! File-backed declarative site list.
//!
//! The registry is a YAML document with a `sites` mapping keyed by site name.
//! Every change is a whole-document read-modify-write; keys this crate does
//! not know about are written back untouched. There is no locking, so two
//! concurrent writers can lose an update.

use crate::error::{Error, Result};
use crate::types::SiteDescriptor;
use serde_yaml::{Mapping, Value};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

const SITES_KEY: &str = "sites";

/// Site registry stored at a fixed path.
#[derive(Debug, Clone)]
pub struct Registry {
    path: PathBuf,
}

impl Registry {
    /// Create a registry backed by the document at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the registry document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Add or replace a site entry.
    pub fn register(&self, site: &SiteDescriptor) -> Result<()> {
        let entry = serde_yaml::to_value(site).map_err(|e| self.invalid(e.to_string()))?;

        let mut document = self.read()?;
        self.sites_mut(&mut document)?
            .insert(Value::String(site.name.clone()), entry);
        self.write(&document)
    }

    /// Remove a site entry. Returns `false` when the site was not registered.
    pub fn deregister(&self, name: &str) -> Result<bool> {
        let mut document = self.read()?;
        let removed = self
            .sites_mut(&mut document)?
            .remove(Value::String(name.to_string()))
            .is_some();

        if removed {
            self.write(&document)?;
        }
        Ok(removed)
    }

    /// Names of all registered sites.
    pub fn names(&self) -> Result<BTreeSet<String>> {
        let document = self.read()?;
        match document.get(SITES_KEY) {
            None | Some(Value::Null) => Ok(BTreeSet::new()),
            Some(Value::Mapping(sites)) => Ok(sites
                .keys()
                .filter_map(|k| k.as_str().map(String::from))
                .collect()),
            Some(_) => Err(self.invalid("'sites' must be a mapping")),
        }
    }

    /// Look up a single site entry.
    pub fn get(&self, name: &str) -> Result<Option<SiteDescriptor>> {
        let document = self.read()?;
        let Some(entry) = document
            .get(SITES_KEY)
            .and_then(|sites| sites.get(name))
        else {
            return Ok(None);
        };

        let mut site: SiteDescriptor = serde_yaml::from_value(entry.clone())
            .map_err(|e| self.invalid(format!("site '{name}': {e}")))?;
        site.name = name.to_string();
        Ok(Some(site))
    }

    fn read(&self) -> Result<Mapping> {
        if !self.path.exists() {
            return Ok(Mapping::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Mapping::new());
        }

        match serde_yaml::from_str::<Value>(&content).map_err(|e| self.invalid(e.to_string()))? {
            Value::Mapping(map) => Ok(map),
            Value::Null => Ok(Mapping::new()),
            _ => Err(self.invalid("expected a mapping at the top level")),
        }
    }

    fn write(&self, document: &Mapping) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml::to_string(document).map_err(|e| self.invalid(e.to_string()))?;

        // Write next to the target, then rename, so a crash never leaves half a file.
        let tmp = self.path.with_extension("yml.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn sites_mut<'a>(&self, document: &'a mut Mapping) -> Result<&'a mut Mapping> {
        let key = Value::String(SITES_KEY.to_string());
        if matches!(document.get(&key), None | Some(Value::Null)) {
            document.insert(key.clone(), Value::Mapping(Mapping::new()));
        }

        match document.get_mut(&key) {
            Some(Value::Mapping(sites)) => Ok(sites),
            _ => Err(self.invalid("'sites' must be a mapping")),
        }
    }

    fn invalid(&self, message: impl Into<String>) -> Error {
        Error::Registry {
            path: self.path.clone(),
            message: message.into(),
        }
    }
}
