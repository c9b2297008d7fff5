//! VVV backend that drives the real `vagrant` CLI.

use crate::backend::Backend;
use crate::error::{Error, Result};
use crate::registry::Registry;
use crate::types::SiteDescriptor;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

/// Backend rooted at a VVV checkout.
pub struct VagrantBackend {
    /// VVV installation directory (holds the Vagrantfile)
    vvv_dir: PathBuf,
    registry: Registry,
}

impl VagrantBackend {
    /// Create a backend for the VVV checkout at `vvv_dir`.
    ///
    /// `registry_file` is resolved relative to `vvv_dir`.
    pub fn new(vvv_dir: impl Into<PathBuf>, registry_file: impl AsRef<Path>) -> Result<Self> {
        let vvv_dir = vvv_dir.into();
        if !vvv_dir.is_dir() {
            return Err(Error::VvvNotFound(vvv_dir));
        }
        let registry = Registry::new(vvv_dir.join(registry_file));
        Ok(Self { vvv_dir, registry })
    }

    /// VVV installation directory.
    pub fn vvv_dir(&self) -> &Path {
        &self.vvv_dir
    }

    /// The site registry this backend writes to.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Run `vagrant <args>` inside the VVV directory with inherited stdio.
    pub fn passthrough(&self, args: &[String]) -> Result<ExitStatus> {
        let vagrant = find_vagrant()?;
        Command::new(vagrant)
            .args(args)
            .current_dir(&self.vvv_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| Error::CommandFailed {
                message: format!("failed to execute vagrant: {e}"),
                stderr: String::new(),
            })
    }

    /// Run a vagrant command and check for success.
    fn run_vagrant_checked(&self, args: &[&str]) -> Result<String> {
        let vagrant = find_vagrant()?;
        let output = Command::new(vagrant)
            .args(args)
            .current_dir(&self.vvv_dir)
            .output()
            .map_err(|e| Error::CommandFailed {
                message: format!("failed to execute vagrant: {e}"),
                stderr: String::new(),
            })?;

        if !output.status.success() {
            return Err(Error::CommandFailed {
                message: format!(
                    "vagrant {} exited with {}",
                    args.join(" "),
                    output
                        .status
                        .code()
                        .map_or_else(|| "a signal".to_string(), |c| c.to_string())
                ),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

impl Backend for VagrantBackend {
    fn register(&self, site: &SiteDescriptor) -> Result<()> {
        self.registry.register(site)
    }

    fn deregister(&self, name: &str) -> Result<bool> {
        self.registry.deregister(name)
    }

    fn reload(&self) -> Result<()> {
        self.run_vagrant_checked(&["reload", "--provision"])?;
        Ok(())
    }

    fn list(&self) -> Result<BTreeSet<String>> {
        self.registry.names()
    }
}

/// Find the vagrant executable path.
fn find_vagrant() -> Result<String> {
    let paths = [
        "/usr/local/bin/vagrant",
        "/opt/vagrant/bin/vagrant",
        "/usr/bin/vagrant",
    ];

    for path in &paths {
        if Path::new(path).exists() {
            return Ok(path.to_string());
        }
    }

    let output = Command::new("which")
        .arg("vagrant")
        .output()
        .map_err(|_| Error::VagrantNotFound)?;

    if output.status.success() {
        let path = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if !path.is_empty() {
            return Ok(path);
        }
    }

    Err(Error::VagrantNotFound)
}
