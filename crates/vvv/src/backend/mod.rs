//! Backend abstraction for the VM environment.
//!
//! The [`Backend`] trait is the whole surface the site lifecycle needs from
//! the virtualization tool, allowing for different implementations (real
//! Vagrant, in-memory mocks for testing).

pub mod vagrant;

use crate::error::Result;
use crate::types::SiteDescriptor;
use std::collections::BTreeSet;

/// Operations the site lifecycle needs from the VM environment.
///
/// All operations are synchronous from the caller's point of view.
pub trait Backend {
    /// Add or replace a site in the declarative site list.
    fn register(&self, site: &SiteDescriptor) -> Result<()>;

    /// Remove a site from the declarative site list.
    ///
    /// Returns `false` when the site was not registered.
    fn deregister(&self, name: &str) -> Result<bool>;

    /// Reload the VM so registry changes take effect.
    fn reload(&self) -> Result<()>;

    /// Names of all registered sites.
    fn list(&self) -> Result<BTreeSet<String>>;
}
