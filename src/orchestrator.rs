//! Site lifecycle: create, delete, list and install.
//!
//! Every transition is a fixed sequence of steps run one at a time. Each step
//! produces a [`LifecycleResult`]; the first failed step halts the sequence and
//! steps that already succeeded are left in place.

use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::runner::{self, Executor};
use crate::site::{Site, ValidationError};
use juicefile::Resolver;
use vvv::Backend;

// ============================================================================
// Results
// ============================================================================

/// One discrete, independently failable action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Scaffold,
    CloneTheme,
    InitRepo,
    RegisterVm,
    ReloadVm,
    DeregisterVm,
    /// One resolved command of the named Juicefile command
    RunCommands(String),
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scaffold => write!(f, "scaffold"),
            Self::CloneTheme => write!(f, "clone-theme"),
            Self::InitRepo => write!(f, "init-repo"),
            Self::RegisterVm => write!(f, "register-vm"),
            Self::ReloadVm => write!(f, "reload-vm"),
            Self::DeregisterVm => write!(f, "deregister-vm"),
            Self::RunCommands(name) => write!(f, "run-{name}-commands"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Ok,
    Skipped,
    Failed,
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "ok"),
            Self::Skipped => write!(f, "skipped"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// Outcome of one lifecycle step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifecycleResult {
    pub step: Step,
    pub status: StepStatus,
    /// Command run, exit code or reason for skipping
    pub detail: String,
}

/// Ordered results of one lifecycle transition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LifecycleReport {
    results: Vec<LifecycleResult>,
}

impl LifecycleReport {
    pub fn results(&self) -> &[LifecycleResult] {
        &self.results
    }

    /// True when no step failed.
    pub fn is_success(&self) -> bool {
        self.first_failure().is_none()
    }

    pub fn first_failure(&self) -> Option<&LifecycleResult> {
        self.results.iter().find(|r| r.status == StepStatus::Failed)
    }

    /// Status of the first result recorded for `step`.
    pub fn status_of(&self, step: &Step) -> Option<StepStatus> {
        self.results.iter().find(|r| &r.step == step).map(|r| r.status)
    }
}

impl FromIterator<LifecycleResult> for LifecycleReport {
    fn from_iter<I: IntoIterator<Item = LifecycleResult>>(iter: I) -> Self {
        Self {
            results: iter.into_iter().collect(),
        }
    }
}

/// A shell command or backend operation that did not succeed.
#[derive(Debug, Error)]
pub enum ExecutionFailure {
    #[error("`{command}` {}", describe_exit(.code))]
    Command {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error(transparent)]
    Backend(#[from] vvv::Error),

    #[error("{context}: {source}")]
    Io {
        context: String,
        source: std::io::Error,
    },

    #[error("{0:#}")]
    Spawn(anyhow::Error),
}

impl ExecutionFailure {
    fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Message plus any captured error output.
    fn detail(&self) -> String {
        let stderr = match self {
            Self::Command { stderr, .. } => stderr.trim(),
            Self::Backend(vvv::Error::CommandFailed { stderr, .. }) => stderr.trim(),
            _ => "",
        };
        if stderr.is_empty() {
            self.to_string()
        } else {
            format!("{self}\n{stderr}")
        }
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with status {code}"),
        None => "was terminated by a signal".to_string(),
    }
}

/// What a successful step did.
enum Outcome {
    Done(String),
    Skipped(String),
}

type StepResult = Result<Outcome, ExecutionFailure>;

/// Receives progress as steps run.
pub trait StepObserver {
    fn started(&self, _step: &Step) {}
    fn finished(&self, _result: &LifecycleResult) {}
}

/// Observer that reports nothing.
pub struct Silent;

impl StepObserver for Silent {}

// ============================================================================
// Runner
// ============================================================================

/// Runs steps against a shell and records their results.
///
/// Juicefile commands need nothing beyond this, so `install` and dynamic
/// commands work without a VM.
pub struct Runner<'a> {
    executor: &'a dyn Executor,
    observer: &'a dyn StepObserver,
}

impl<'a> Runner<'a> {
    pub fn new(executor: &'a dyn Executor) -> Self {
        Self {
            executor,
            observer: &Silent,
        }
    }

    pub fn with_observer(mut self, observer: &'a dyn StepObserver) -> Self {
        self.observer = observer;
        self
    }

    /// Locate a Juicefile and run its `install` command in the Juicefile's directory.
    pub fn install(&self, config: Option<&Path>, cwd: &Path) -> juicefile::Result<LifecycleReport> {
        let (path, resolver) = juicefile::load(config, cwd)?;
        log::debug!("Using Juicefile {}", path.display());
        let dir = path.parent().unwrap_or(cwd);
        self.run_command(&resolver, "install", &[] as &[&str], dir)
    }

    /// Resolve a configured command and run each resulting shell command in order.
    ///
    /// Resolution errors are returned before anything runs.
    pub fn run_command<S: AsRef<str>>(
        &self,
        resolver: &Resolver,
        name: &str,
        args: &[S],
        cwd: &Path,
    ) -> juicefile::Result<LifecycleReport> {
        let commands = resolver.invoke(name, args)?;

        let mut report = LifecycleReport::default();
        for command in &commands {
            let step = Step::RunCommands(name.to_string());
            if !self.attempt(&mut report, step, || self.shell(command, cwd)) {
                break;
            }
        }
        Ok(report)
    }

    /// Run one step, record its result and tell the caller whether to continue.
    fn attempt(
        &self,
        report: &mut LifecycleReport,
        step: Step,
        action: impl FnOnce() -> StepResult,
    ) -> bool {
        self.observer.started(&step);
        let result = match action() {
            Ok(Outcome::Done(detail)) => LifecycleResult {
                step,
                status: StepStatus::Ok,
                detail,
            },
            Ok(Outcome::Skipped(detail)) => LifecycleResult {
                step,
                status: StepStatus::Skipped,
                detail,
            },
            Err(failure) => LifecycleResult {
                step,
                status: StepStatus::Failed,
                detail: failure.detail(),
            },
        };
        log::debug!("{} {}: {}", result.step, result.status, result.detail);

        self.observer.finished(&result);
        let proceed = result.status != StepStatus::Failed;
        report.results.push(result);
        proceed
    }

    fn shell(&self, command: &str, cwd: &Path) -> StepResult {
        let output = self
            .executor
            .run(command, cwd)
            .map_err(ExecutionFailure::Spawn)?;
        if output.success() {
            Ok(Outcome::Done(command.to_string()))
        } else {
            Err(ExecutionFailure::Command {
                command: command.to_string(),
                code: output.code,
                stderr: output.stderr,
            })
        }
    }
}

// ============================================================================
// Orchestrator
// ============================================================================

/// Drives sites through their lifecycle against a VM backend and a shell.
pub struct Orchestrator<'a> {
    backend: &'a dyn Backend,
    runner: Runner<'a>,
}

impl<'a> Orchestrator<'a> {
    pub fn new(backend: &'a dyn Backend, executor: &'a dyn Executor) -> Self {
        Self {
            backend,
            runner: Runner::new(executor),
        }
    }

    pub fn with_observer(mut self, observer: &'a dyn StepObserver) -> Self {
        self.runner = self.runner.with_observer(observer);
        self
    }

    /// Scaffold, clone, initialize and register a new site.
    ///
    /// Name and URL are validated first; an invalid site performs no side
    /// effects at all.
    pub fn create(&self, site: &Site) -> Result<LifecycleReport, ValidationError> {
        site.validate()?;
        log::info!("Creating site {}", site.name);

        let runner = &self.runner;
        let mut report = LifecycleReport::default();
        let _completed = runner.attempt(&mut report, Step::Scaffold, || scaffold(site))
            && runner.attempt(&mut report, Step::CloneTheme, || self.clone_theme(site))
            && runner.attempt(&mut report, Step::InitRepo, || self.init_repo(site))
            && runner.attempt(&mut report, Step::RegisterVm, || {
                self.backend.register(&site.descriptor())?;
                Ok(Outcome::Done(format!("registered {}", site.dev_url)))
            })
            && runner.attempt(&mut report, Step::ReloadVm, || self.reload());

        Ok(report)
    }

    /// Remove a site from the VM registry. The local scaffold is never touched.
    pub fn delete(&self, name: &str, restart: bool) -> LifecycleReport {
        log::info!("Deleting site {name}");

        let runner = &self.runner;
        let mut report = LifecycleReport::default();
        let _completed = runner.attempt(&mut report, Step::DeregisterVm, || {
            Ok(if self.backend.deregister(name)? {
                Outcome::Done(format!("removed {name} from the registry"))
            } else {
                Outcome::Skipped(format!("{name} is not registered"))
            })
        }) && runner.attempt(&mut report, Step::ReloadVm, || {
            if restart {
                self.reload()
            } else {
                Ok(Outcome::Skipped("restart not requested".to_string()))
            }
        });

        report
    }

    fn clone_theme(&self, site: &Site) -> StepResult {
        let theme = match (&site.starter_theme, site.bare) {
            (Some(theme), false) => theme,
            _ => return Ok(Outcome::Skipped("bare site".to_string())),
        };

        let url = theme_url(theme);
        self.runner.shell(
            &format!("git clone --depth 1 {} .", runner::quote(&url)),
            &site.location,
        )?;

        // The starter's history does not belong to the new site.
        let git_dir = site.location.join(".git");
        if git_dir.exists() {
            fs::remove_dir_all(&git_dir)
                .map_err(|e| ExecutionFailure::io(format!("remove {}", git_dir.display()), e))?;
        }
        Ok(Outcome::Done(format!("cloned {url}")))
    }

    fn init_repo(&self, site: &Site) -> StepResult {
        let Some(repository) = &site.repository else {
            return Ok(Outcome::Skipped("no repository".to_string()));
        };

        self.runner.shell("git init", &site.location)?;
        self.runner.shell(
            &format!("git remote add origin {}", runner::quote(repository)),
            &site.location,
        )?;
        Ok(Outcome::Done(format!("origin set to {repository}")))
    }

    fn reload(&self) -> StepResult {
        self.backend.reload()?;
        Ok(Outcome::Done("vm reloaded".to_string()))
    }
}

/// Registered site names. Read-only, so no shell is involved.
pub fn list(backend: &dyn Backend) -> vvv::Result<BTreeSet<String>> {
    backend.list()
}

fn scaffold(site: &Site) -> StepResult {
    for dir in [&site.location, &site.dev_location] {
        fs::create_dir_all(dir)
            .map_err(|e| ExecutionFailure::io(format!("create {}", dir.display()), e))?;
    }
    Ok(Outcome::Done(format!(
        "{} and {}",
        site.location.display(),
        site.dev_location.display()
    )))
}

/// `owner/repo` shorthand is a GitHub repository; anything else is a git URL.
fn theme_url(theme: &str) -> String {
    let shorthand = !theme.contains(':')
        && theme.split('/').count() == 2
        && theme.split('/').all(|part| !part.is_empty());
    if shorthand {
        format!("https://github.com/{theme}.git")
    } else {
        theme.to_string()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::CommandOutput;
    use crate::site::Database;
    use juicefile::{Format, TemplateStore};
    use std::cell::RefCell;
    use std::path::PathBuf;
    use vvv::SiteDescriptor;

    #[derive(Default)]
    struct MockBackend {
        calls: RefCell<Vec<String>>,
        registered: RefCell<BTreeSet<String>>,
        fail_reload: bool,
    }

    impl Backend for MockBackend {
        fn register(&self, site: &SiteDescriptor) -> vvv::Result<()> {
            self.calls.borrow_mut().push(format!("register {}", site.name));
            self.registered.borrow_mut().insert(site.name.clone());
            Ok(())
        }

        fn deregister(&self, name: &str) -> vvv::Result<bool> {
            self.calls.borrow_mut().push(format!("deregister {name}"));
            Ok(self.registered.borrow_mut().remove(name))
        }

        fn reload(&self) -> vvv::Result<()> {
            self.calls.borrow_mut().push("reload".to_string());
            if self.fail_reload {
                return Err(vvv::Error::CommandFailed {
                    message: "vagrant reload --provision exited with 1".into(),
                    stderr: "VM not created".into(),
                });
            }
            Ok(())
        }

        fn list(&self) -> vvv::Result<BTreeSet<String>> {
            self.calls.borrow_mut().push("list".to_string());
            Ok(self.registered.borrow().clone())
        }
    }

    /// Records commands; any command containing `fail_on` exits with 1.
    #[derive(Default)]
    struct MockExecutor {
        runs: RefCell<Vec<(String, PathBuf)>>,
        fail_on: Option<&'static str>,
    }

    impl MockExecutor {
        fn commands(&self) -> Vec<String> {
            self.runs.borrow().iter().map(|(c, _)| c.clone()).collect()
        }
    }

    impl Executor for MockExecutor {
        fn run(&self, command: &str, cwd: &Path) -> anyhow::Result<CommandOutput> {
            self.runs
                .borrow_mut()
                .push((command.to_string(), cwd.to_path_buf()));
            let failed = self.fail_on.is_some_and(|f| command.contains(f));
            Ok(CommandOutput {
                code: Some(i32::from(failed)),
                stdout: String::new(),
                stderr: if failed { "boom".into() } else { String::new() },
            })
        }
    }

    fn site(root: &Path, name: &str) -> Site {
        Site {
            name: name.to_string(),
            location: root.join("sites").join(name),
            dev_location: root.join("vagrant/www").join(format!("tj-{name}")),
            dev_url: format!("{name}.dev"),
            starter_theme: Some("ezekg/theme-juice-starter".to_string()),
            bare: false,
            repository: None,
            db: Database {
                host: "vvv".into(),
                name: format!("{name}_db"),
                user: format!("{name}_user"),
                pass: "secret".into(),
            },
        }
    }

    fn statuses(report: &LifecycleReport) -> Vec<(String, StepStatus)> {
        report
            .results()
            .iter()
            .map(|r| (r.step.to_string(), r.status))
            .collect()
    }

    #[test]
    fn test_create_runs_every_step() {
        let dir = tempfile::tempdir().unwrap();
        let backend = MockBackend::default();
        let executor = MockExecutor::default();
        let mut site = site(dir.path(), "blog");
        site.repository = Some("git@example.com:me/blog.git".into());

        let report = Orchestrator::new(&backend, &executor).create(&site).unwrap();

        assert!(report.is_success());
        assert_eq!(
            statuses(&report),
            vec![
                ("scaffold".into(), StepStatus::Ok),
                ("clone-theme".into(), StepStatus::Ok),
                ("init-repo".into(), StepStatus::Ok),
                ("register-vm".into(), StepStatus::Ok),
                ("reload-vm".into(), StepStatus::Ok),
            ]
        );
        assert!(site.location.is_dir());
        assert!(site.dev_location.is_dir());
        assert_eq!(
            executor.commands(),
            vec![
                "git clone --depth 1 https://github.com/ezekg/theme-juice-starter.git .",
                "git init",
                "git remote add origin git@example.com:me/blog.git",
            ]
        );
        assert!(executor.runs.borrow().iter().all(|(_, cwd)| cwd == &site.location));
        assert_eq!(*backend.calls.borrow(), vec!["register blog", "reload"]);
    }

    #[test]
    fn test_create_bare_skips_clone_and_repo() {
        let dir = tempfile::tempdir().unwrap();
        let backend = MockBackend::default();
        let executor = MockExecutor::default();
        let mut site = site(dir.path(), "blog");
        site.bare = true;
        site.starter_theme = None;

        let report = Orchestrator::new(&backend, &executor).create(&site).unwrap();

        assert!(report.is_success());
        assert_eq!(report.status_of(&Step::CloneTheme), Some(StepStatus::Skipped));
        assert_eq!(report.status_of(&Step::InitRepo), Some(StepStatus::Skipped));
        assert!(executor.commands().is_empty());
    }

    #[test]
    fn test_create_removes_starter_history() {
        let dir = tempfile::tempdir().unwrap();
        let backend = MockBackend::default();
        let executor = MockExecutor::default();
        let site = site(dir.path(), "blog");
        fs::create_dir_all(site.location.join(".git")).unwrap();

        let report = Orchestrator::new(&backend, &executor).create(&site).unwrap();

        assert!(report.is_success());
        assert!(!site.location.join(".git").exists());
    }

    #[test]
    fn test_create_invalid_url_never_registers() {
        let dir = tempfile::tempdir().unwrap();
        let backend = MockBackend::default();
        let executor = MockExecutor::default();
        let mut site = site(dir.path(), "blog");
        site.dev_url = "blog.com".into();

        let err = Orchestrator::new(&backend, &executor)
            .create(&site)
            .unwrap_err();

        assert_eq!(err, ValidationError::InvalidDevUrl("blog.com".into()));
        assert!(backend.calls.borrow().is_empty());
        assert!(executor.commands().is_empty());
        assert!(!site.location.exists());
    }

    #[test]
    fn test_create_invalid_name_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let backend = MockBackend::default();
        let executor = MockExecutor::default();
        let mut site = site(dir.path(), "blog");
        site.name = "my siteé".into();

        let err = Orchestrator::new(&backend, &executor)
            .create(&site)
            .unwrap_err();

        assert!(matches!(err, ValidationError::InvalidName(_)));
        assert!(!site.location.exists());
        assert!(!site.dev_location.exists());
        assert!(backend.calls.borrow().is_empty());
    }

    #[test]
    fn test_create_halts_on_first_failure() {
        let dir = tempfile::tempdir().unwrap();
        let backend = MockBackend::default();
        let executor = MockExecutor {
            fail_on: Some("git clone"),
            ..Default::default()
        };
        let site = site(dir.path(), "blog");

        let report = Orchestrator::new(&backend, &executor).create(&site).unwrap();

        assert!(!report.is_success());
        assert_eq!(
            statuses(&report),
            vec![
                ("scaffold".into(), StepStatus::Ok),
                ("clone-theme".into(), StepStatus::Failed),
            ]
        );
        let failure = report.first_failure().unwrap();
        assert!(failure.detail.contains("exited with status 1"));
        assert!(failure.detail.contains("boom"));
        // No rollback: the scaffold stays.
        assert!(site.location.is_dir());
        assert!(backend.calls.borrow().is_empty());
    }

    #[test]
    fn test_create_reload_failure_reported() {
        let dir = tempfile::tempdir().unwrap();
        let backend = MockBackend {
            fail_reload: true,
            ..Default::default()
        };
        let executor = MockExecutor::default();
        let site = site(dir.path(), "blog");

        let report = Orchestrator::new(&backend, &executor).create(&site).unwrap();

        let failure = report.first_failure().unwrap();
        assert_eq!(failure.step, Step::ReloadVm);
        assert!(failure.detail.contains("VM not created"));
        assert!(backend.registered.borrow().contains("blog"));
    }

    #[test]
    fn test_delete_deregisters_then_reloads() {
        let backend = MockBackend::default();
        backend.registered.borrow_mut().insert("site-x".into());
        let executor = MockExecutor::default();

        let report = Orchestrator::new(&backend, &executor).delete("site-x", true);

        assert!(report.is_success());
        assert_eq!(*backend.calls.borrow(), vec!["deregister site-x", "reload"]);
        assert!(executor.commands().is_empty());
    }

    #[test]
    fn test_delete_without_restart_skips_reload() {
        let backend = MockBackend::default();
        backend.registered.borrow_mut().insert("site-x".into());
        let executor = MockExecutor::default();

        let report = Orchestrator::new(&backend, &executor).delete("site-x", false);

        assert_eq!(*backend.calls.borrow(), vec!["deregister site-x"]);
        assert_eq!(report.status_of(&Step::ReloadVm), Some(StepStatus::Skipped));
    }

    #[test]
    fn test_delete_unknown_site_is_skipped() {
        let backend = MockBackend::default();
        let executor = MockExecutor::default();

        let report = Orchestrator::new(&backend, &executor).delete("ghost", true);

        assert!(report.is_success());
        assert_eq!(report.status_of(&Step::DeregisterVm), Some(StepStatus::Skipped));
        assert_eq!(*backend.calls.borrow(), vec!["deregister ghost", "reload"]);
    }

    #[test]
    fn test_list() {
        let backend = MockBackend::default();
        backend.registered.borrow_mut().insert("a".into());
        backend.registered.borrow_mut().insert("b".into());

        let sites = list(&backend).unwrap();
        assert_eq!(sites.into_iter().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(*backend.calls.borrow(), vec!["list"]);
    }

    #[test]
    fn test_run_command_in_order() {
        let store = TemplateStore::load(
            "vendor:\n  - echo 1:%arg1% 2:%arg2%\n  - echo 3:%arg3% 4:%arg4%\n",
            Format::Yaml,
        )
        .unwrap();
        let resolver = Resolver::new(store);
        let executor = MockExecutor::default();

        let report = Runner::new(&executor)
            .run_command(&resolver, "vendor", &["a", "b", "c", "d"], Path::new("/tmp"))
            .unwrap();

        assert!(report.is_success());
        assert_eq!(report.results().len(), 2);
        assert!(report
            .results()
            .iter()
            .all(|r| r.step.to_string() == "run-vendor-commands"));
        assert_eq!(executor.commands(), vec!["echo 1:a 2:b", "echo 3:c 4:d"]);
    }

    #[test]
    fn test_run_command_missing_argument_runs_nothing() {
        let store = TemplateStore::load("vendor: [\"echo %arg1%\", \"echo %arg3%\"]", Format::Yaml)
            .unwrap();
        let resolver = Resolver::new(store);
        let executor = MockExecutor::default();

        let err = Runner::new(&executor)
            .run_command(&resolver, "vendor", &["a", "b"], Path::new("/tmp"))
            .unwrap_err();

        assert!(matches!(err, juicefile::Error::MissingArgument { index: 3, .. }));
        assert!(executor.commands().is_empty());
    }

    #[test]
    fn test_run_command_stops_after_failure() {
        let store =
            TemplateStore::load("dist: [\"npm run build\", \"zip -r dist\"]", Format::Yaml)
                .unwrap();
        let resolver = Resolver::new(store);
        let executor = MockExecutor {
            fail_on: Some("npm"),
            ..Default::default()
        };

        let report = Runner::new(&executor)
            .run_command(&resolver, "dist", &[] as &[&str], Path::new("/tmp"))
            .unwrap();

        assert_eq!(report.results().len(), 1);
        assert_eq!(report.results()[0].status, StepStatus::Failed);
        assert_eq!(executor.commands(), vec!["npm run build"]);
    }

    #[test]
    fn test_install_discovers_juicefile() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Juicefile"), "install:\n  - echo %args%\n").unwrap();
        let nested = dir.path().join("wp-content/themes");
        fs::create_dir_all(&nested).unwrap();
        let executor = MockExecutor::default();

        let report = Runner::new(&executor)
            .install(None, &nested)
            .unwrap();

        assert!(report.is_success());
        assert_eq!(executor.commands(), vec!["echo "]);
        assert_eq!(executor.runs.borrow()[0].1, dir.path());
    }

    #[test]
    fn test_install_relative_config_runs_in_its_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Juicefile"), "install: [echo ran]\n").unwrap();
        let executor = MockExecutor::default();

        let report = Runner::new(&executor)
            .install(Some(Path::new("Juicefile")), dir.path())
            .unwrap();

        assert!(report.is_success());
        assert_eq!(executor.commands(), vec!["echo ran"]);
        assert_eq!(executor.runs.borrow()[0].1, dir.path());
    }

    #[cfg(unix)]
    #[test]
    fn test_install_relative_config_with_shell() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("juice.toml"), "install = \"touch installed\"\n").unwrap();
        let executor = crate::runner::ShellExecutor::capturing();

        let report = Runner::new(&executor)
            .install(Some(Path::new("juice.toml")), dir.path())
            .unwrap();

        assert!(report.is_success(), "{:?}", report.first_failure());
        assert!(dir.path().join("installed").exists());
    }

    #[test]
    fn test_install_without_install_command() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("juice.toml");
        fs::write(&path, "[commands]\nwatch = \"grunt watch\"\n").unwrap();
        let executor = MockExecutor::default();

        let err = Runner::new(&executor)
            .install(Some(&path), dir.path())
            .unwrap_err();

        assert!(err.is_not_implemented());
    }

    #[test]
    fn test_theme_url() {
        assert_eq!(theme_url("me/starter"), "https://github.com/me/starter.git");
        assert_eq!(
            theme_url("git@github.com:me/starter.git"),
            "git@github.com:me/starter.git"
        );
        assert_eq!(
            theme_url("https://example.com/starter.git"),
            "https://example.com/starter.git"
        );
    }

    #[test]
    fn test_step_names() {
        assert_eq!(Step::RegisterVm.to_string(), "register-vm");
        assert_eq!(Step::RunCommands("install".into()).to_string(), "run-install-commands");
    }
}
