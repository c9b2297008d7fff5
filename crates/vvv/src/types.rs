//! Core types for the VVV site registry.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// A site as recorded in the VVV registry.
///
/// The name is the registry key and is not serialized into the entry itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteDescriptor {
    /// Site name (registry key)
    #[serde(skip)]
    pub name: String,

    /// Hostnames served by the VM for this site
    #[serde(default)]
    pub hosts: Vec<String>,

    /// Directory on the host that holds the site's source
    pub local_dir: PathBuf,

    /// Directory inside the VM the source is synced to
    pub vm_dir: String,

    /// Git remote of the site, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,

    /// Extra settings passed to the provisioner (database credentials, etc.)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub custom: BTreeMap<String, String>,
}

impl SiteDescriptor {
    /// Create a descriptor syncing `local_dir` to `vm_dir`.
    pub fn new(
        name: impl Into<String>,
        local_dir: impl Into<PathBuf>,
        vm_dir: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            hosts: Vec::new(),
            local_dir: local_dir.into(),
            vm_dir: vm_dir.into(),
            repo: None,
            custom: BTreeMap::new(),
        }
    }

    /// Add a hostname.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.hosts.push(host.into());
        self
    }

    /// Set the git remote.
    pub fn with_repo(mut self, repo: impl Into<String>) -> Self {
        self.repo = Some(repo.into());
        self
    }

    /// Add a provisioner setting.
    pub fn with_custom(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom.insert(key.into(), value.into());
        self
    }
}
