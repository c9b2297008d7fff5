// Site lifecycle
pub mod create;
pub mod delete;
pub mod list;

// Juicefile commands
pub mod install;
pub mod juicefile;

// VM pass-through
pub mod vm;

use anyhow::{Result, bail};
use indicatif::ProgressBar;
use std::cell::RefCell;

use crate::orchestrator::{LifecycleReport, LifecycleResult, Step, StepObserver, StepStatus};
use crate::progress;
use crate::ui;

/// Prints each step as it finishes; shows a spinner while the VM reloads.
pub struct Reporter {
    quiet: bool,
    spinner: RefCell<Option<ProgressBar>>,
}

impl Reporter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            spinner: RefCell::new(None),
        }
    }
}

impl StepObserver for Reporter {
    fn started(&self, step: &Step) {
        if !self.quiet && *step == Step::ReloadVm {
            *self.spinner.borrow_mut() = Some(progress::spinner("Reloading the VM..."));
        }
    }

    fn finished(&self, result: &LifecycleResult) {
        if let Some(pb) = self.spinner.borrow_mut().take() {
            progress::finish_clear(&pb);
        }

        if !self.prints(result.status) {
            return;
        }
        let line = format!("{}: {}", result.step, result.detail);
        match result.status {
            StepStatus::Skipped => ui::skipped(&line),
            _ => ui::success(&line),
        }
    }
}

impl Reporter {
    /// Failed steps are left to [`finish`], which reports them as the command's error.
    fn prints(&self, status: StepStatus) -> bool {
        !self.quiet && status != StepStatus::Failed
    }
}

/// Turn the first failed step into the command's error.
pub fn finish(report: &LifecycleReport) -> Result<()> {
    match report.first_failure() {
        Some(failure) => bail!("{} failed: {}", failure.step, failure.detail),
        None => Ok(()),
    }
}
