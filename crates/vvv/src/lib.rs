//! # vvv
//!
//! Site registration for a [Varying Vagrant Vagrants](https://varyingvagrantvagrants.org)
//! development environment.
//!
//! This crate provides:
//! - A [`Backend`] trait with the four operations a site lifecycle needs:
//!   register, deregister, reload and list
//! - A YAML [`Registry`] holding the declarative site list
//! - [`VagrantBackend`], which pairs the registry with the `vagrant` CLI
//!
//! ## Example
//!
//! ```no_run
//! use vvv::{Backend, SiteDescriptor, VagrantBackend};
//!
//! let backend = VagrantBackend::new("/home/me/vagrant", "vvv-custom.yml")?;
//! let site = SiteDescriptor::new("blog", "/home/me/sites/blog", "/srv/www/tj-blog")
//!     .with_host("blog.dev");
//!
//! backend.register(&site)?;
//! backend.reload()?;
//! # Ok::<(), vvv::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod backend;
pub mod error;
pub mod registry;
pub mod types;

pub use backend::{Backend, vagrant::VagrantBackend};
pub use error::{Error, ErrorCategory, Result};
pub use registry::Registry;
pub use types::SiteDescriptor;
