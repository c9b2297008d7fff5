//! Development site descriptor, validation and defaulting.

use anyhow::Result;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use rand::RngCore;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;

use crate::paths;
use crate::prompt::{self, Prompter};

/// Prefix of every site directory inside the VVV workspace.
pub const DEV_PREFIX: &str = "tj-";

/// Suffix every development URL must carry.
pub const DEV_URL_SUFFIX: &str = ".dev";

/// Maximum length of the name used for database identifiers.
const CLEAN_NAME_LEN: usize = 11;

/// Answer that turns the theme prompt into a bare setup.
const NO_THEME: &str = "none";

static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\W").expect("valid regex"));

/// Problems detected before any lifecycle step runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Site name is required")]
    EmptyName,

    #[error(
        "Site name '{0}' contains invalid characters. Only ASCII letters, digits, '.' and '-' are allowed since the name is used for directories"
    )]
    InvalidName(String),

    #[error("Development url '{0}' must end in '.dev'")]
    InvalidDevUrl(String),
}

// ============================================================================
// Site
// ============================================================================

/// Database settings for a site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Database {
    pub host: String,
    pub name: String,
    pub user: String,
    pub pass: String,
}

/// Everything needed to create a development site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
    pub name: String,
    /// Where the site's source scaffold lives
    pub location: PathBuf,
    /// Site directory inside the VVV workspace
    pub dev_location: PathBuf,
    pub dev_url: String,
    /// Starter theme to clone; `None` when `bare`
    pub starter_theme: Option<String>,
    pub bare: bool,
    /// Remote to attach to a fresh repository
    pub repository: Option<String>,
    pub db: Database,
}

impl Site {
    /// Check the name and development URL.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name(&self.name)?;
        validate_dev_url(&self.dev_url)
    }

    /// Directory the VM serves the site from.
    pub fn vm_dir(&self) -> String {
        format!("/srv/www/{DEV_PREFIX}{}", self.name)
    }

    /// Registry entry for this site.
    pub fn descriptor(&self) -> vvv::SiteDescriptor {
        let mut descriptor = vvv::SiteDescriptor::new(&self.name, &self.location, self.vm_dir())
            .with_host(&self.dev_url)
            .with_custom("db_host", &self.db.host)
            .with_custom("db_name", &self.db.name)
            .with_custom("db_user", &self.db.user)
            .with_custom("db_pass", &self.db.pass)
            .with_custom("dev_location", self.dev_location.to_string_lossy());
        if let Some(repo) = &self.repository {
            descriptor = descriptor.with_repo(repo);
        }
        descriptor
    }
}

/// Site names are used for directories, so only ASCII letters, digits, `.` and `-` are allowed.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
    {
        return Err(ValidationError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// The VM resolves only hostnames ending in `.dev`.
pub fn validate_dev_url(url: &str) -> Result<(), ValidationError> {
    match url.strip_suffix(DEV_URL_SUFFIX) {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(ValidationError::InvalidDevUrl(url.to_string())),
    }
}

/// Replace non-word characters with `_` and truncate to 11 characters.
pub fn clean_name(name: &str) -> String {
    NON_WORD
        .replace_all(name, "_")
        .chars()
        .take(CLEAN_NAME_LEN)
        .collect()
}

/// Site directory inside the VVV workspace.
pub fn dev_location(vvv_dir: &Path, name: &str) -> PathBuf {
    vvv_dir.join("www").join(format!("{DEV_PREFIX}{name}"))
}

/// Random database password.
pub fn generate_password() -> String {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut bytes);
    STANDARD.encode(bytes)
}

// ============================================================================
// Options -> Site
// ============================================================================

/// Values the CLI layer supplies for a new site. Anything left as `None` is
/// resolved through a [`Prompter`] and then falls back to a default.
#[derive(Debug, Clone, Default)]
pub struct SiteOptions {
    pub name: Option<String>,
    pub location: Option<String>,
    pub theme: Option<String>,
    pub url: Option<String>,
    pub repository: Option<String>,
    pub db_host: Option<String>,
    pub db_name: Option<String>,
    pub db_user: Option<String>,
    pub db_pass: Option<String>,
    pub bare: bool,
}

/// Environment-derived defaults for [`SiteOptions::resolve`].
#[derive(Debug, Clone)]
pub struct SiteDefaults {
    pub cwd: PathBuf,
    pub vvv_dir: PathBuf,
    pub starter_theme: String,
    pub db_host: String,
}

impl SiteOptions {
    /// Fill in every missing option and validate the result.
    ///
    /// Validation happens as soon as the name and URL are known, so a bad
    /// name aborts before any further questions are asked.
    pub fn resolve(self, defaults: &SiteDefaults, prompter: &dyn Prompter) -> Result<Site> {
        let name = match self.name {
            Some(name) => name,
            None => prompter.input("Site name (only ASCII characters are allowed)", None)?,
        };
        validate_name(&name)?;
        let clean = clean_name(&name);

        let default_location = defaults.cwd.join(&name);
        let location = prompt::resolve(
            self.location,
            prompter,
            "Where do you want to setup the site?",
            &default_location.to_string_lossy(),
        )?;
        let location = paths::absolutize(&location, &defaults.cwd);

        let mut bare = self.bare;
        let mut starter_theme = None;
        if !bare {
            let theme = prompt::resolve(
                self.theme,
                prompter,
                "Starter theme to clone (owner/repo, URL or 'none')",
                &defaults.starter_theme,
            )?;
            if theme.eq_ignore_ascii_case(NO_THEME) {
                bare = true;
            } else {
                starter_theme = Some(theme);
            }
        }

        let dev_url = prompt::resolve(
            self.url,
            prompter,
            "Development url (should end in '.dev')",
            &format!("{name}{DEV_URL_SUFFIX}"),
        )?;
        validate_dev_url(&dev_url)?;

        let repository = match self.repository {
            Some(url) => Some(url),
            None if prompter.confirm("Initialize a new Git repository?", false)? => {
                let url = prompter.input("Repository URL", None)?;
                (!url.is_empty()).then_some(url)
            }
            None => None,
        };

        let db = Database {
            host: prompt::resolve(self.db_host, prompter, "Database host", &defaults.db_host)?,
            name: prompt::resolve(self.db_name, prompter, "Database name", &format!("{clean}_db"))?,
            user: prompt::resolve(
                self.db_user,
                prompter,
                "Database username",
                &format!("{clean}_user"),
            )?,
            pass: prompt::resolve(
                self.db_pass,
                prompter,
                "Database password",
                &generate_password(),
            )?,
        };

        Ok(Site {
            dev_location: dev_location(&defaults.vvv_dir, &name),
            name,
            location,
            dev_url,
            starter_theme,
            bare,
            repository,
            db,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::Defaults;

    fn defaults() -> SiteDefaults {
        SiteDefaults {
            cwd: PathBuf::from("/home/me/sites"),
            vvv_dir: PathBuf::from("/home/me/vagrant"),
            starter_theme: "ezekg/theme-juice-starter".to_string(),
            db_host: "vvv".to_string(),
        }
    }

    fn named(name: &str) -> SiteOptions {
        SiteOptions {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("my-site.1").is_ok());
        assert_eq!(validate_name(""), Err(ValidationError::EmptyName));
        assert_eq!(
            validate_name("my siteé"),
            Err(ValidationError::InvalidName("my siteé".to_string()))
        );
        assert!(validate_name("my_site").is_err());
        assert!(validate_name("site/../etc").is_err());
    }

    #[test]
    fn test_validate_dev_url() {
        assert!(validate_dev_url("foo.dev").is_ok());
        assert!(validate_dev_url("www.foo.dev").is_ok());
        assert_eq!(
            validate_dev_url("foo.com"),
            Err(ValidationError::InvalidDevUrl("foo.com".to_string()))
        );
        assert!(validate_dev_url(".dev").is_err());
        assert!(validate_dev_url("foodev").is_err());
    }

    #[test]
    fn test_clean_name() {
        assert_eq!(clean_name("my-site.1"), "my_site_1");
        assert_eq!(clean_name("averyveryverylongname"), "averyveryve");
        assert_eq!(clean_name("blog"), "blog");
    }

    #[test]
    fn test_dev_location() {
        assert_eq!(
            dev_location(Path::new("/home/me/vagrant"), "blog"),
            PathBuf::from("/home/me/vagrant/www/tj-blog")
        );
    }

    #[test]
    fn test_generate_password() {
        let first = generate_password();
        let second = generate_password();
        assert_eq!(first.len(), 24);
        assert_ne!(first, second);
    }

    #[test]
    fn test_resolve_defaults() {
        let site = named("my-blog").resolve(&defaults(), &Defaults).unwrap();

        assert_eq!(site.name, "my-blog");
        assert_eq!(site.location, PathBuf::from("/home/me/sites/my-blog"));
        assert_eq!(site.dev_location, PathBuf::from("/home/me/vagrant/www/tj-my-blog"));
        assert_eq!(site.dev_url, "my-blog.dev");
        assert_eq!(site.starter_theme.as_deref(), Some("ezekg/theme-juice-starter"));
        assert!(!site.bare);
        assert_eq!(site.repository, None);
        assert_eq!(site.db.host, "vvv");
        assert_eq!(site.db.name, "my_blog_db");
        assert_eq!(site.db.user, "my_blog_user");
        assert!(!site.db.pass.is_empty());
        assert!(site.validate().is_ok());
    }

    #[test]
    fn test_resolve_explicit_options() {
        let options = SiteOptions {
            name: Some("shop".into()),
            location: Some("code/shop".into()),
            theme: Some("me/starter".into()),
            url: Some("store.dev".into()),
            repository: Some("git@example.com:me/shop.git".into()),
            db_host: Some("localhost".into()),
            db_name: Some("shopdb".into()),
            db_user: Some("shopper".into()),
            db_pass: Some("secret".into()),
            bare: false,
        };
        let site = options.resolve(&defaults(), &Defaults).unwrap();

        assert_eq!(site.location, PathBuf::from("/home/me/sites/code/shop"));
        assert_eq!(site.starter_theme.as_deref(), Some("me/starter"));
        assert_eq!(site.dev_url, "store.dev");
        assert_eq!(site.repository.as_deref(), Some("git@example.com:me/shop.git"));
        assert_eq!(
            site.db,
            Database {
                host: "localhost".into(),
                name: "shopdb".into(),
                user: "shopper".into(),
                pass: "secret".into(),
            }
        );
    }

    #[test]
    fn test_resolve_bare_has_no_theme() {
        let options = SiteOptions {
            bare: true,
            theme: Some("me/starter".into()),
            ..named("blog")
        };
        let site = options.resolve(&defaults(), &Defaults).unwrap();
        assert!(site.bare);
        assert_eq!(site.starter_theme, None);
    }

    #[test]
    fn test_resolve_theme_none_means_bare() {
        let options = SiteOptions {
            theme: Some("none".into()),
            ..named("blog")
        };
        let site = options.resolve(&defaults(), &Defaults).unwrap();
        assert!(site.bare);
        assert_eq!(site.starter_theme, None);
    }

    #[test]
    fn test_resolve_rejects_invalid_name() {
        let err = named("my siteé").resolve(&defaults(), &Defaults).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ValidationError>(),
            Some(ValidationError::InvalidName(_))
        ));
    }

    #[test]
    fn test_resolve_requires_name() {
        let err = SiteOptions::default()
            .resolve(&defaults(), &Defaults)
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<ValidationError>(),
            Some(&ValidationError::EmptyName)
        );
    }

    #[test]
    fn test_resolve_rejects_invalid_url() {
        let options = SiteOptions {
            url: Some("blog.com".into()),
            ..named("blog")
        };
        let err = options.resolve(&defaults(), &Defaults).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ValidationError>(),
            Some(ValidationError::InvalidDevUrl(_))
        ));
    }

    #[test]
    fn test_descriptor() {
        let site = named("blog").resolve(&defaults(), &Defaults).unwrap();
        let descriptor = site.descriptor();

        assert_eq!(descriptor.name, "blog");
        assert_eq!(descriptor.hosts, vec!["blog.dev"]);
        assert_eq!(descriptor.vm_dir, "/srv/www/tj-blog");
        assert_eq!(descriptor.local_dir, PathBuf::from("/home/me/sites/blog"));
        assert_eq!(
            descriptor.custom.get("db_name").map(String::as_str),
            Some("blog_db")
        );
        assert_eq!(descriptor.repo, None);
    }
}
