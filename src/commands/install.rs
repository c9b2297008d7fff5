use anyhow::{Context as AnyhowContext, Result};
use std::env;
use std::path::Path;

use super::{Reporter, finish};
use crate::Context;
use crate::orchestrator::Runner;
use crate::runner::ShellExecutor;
use crate::ui;

/// Run the Juicefile's `install` command.
pub fn run(ctx: &Context, config: Option<&Path>) -> Result<()> {
    let cwd = env::current_dir().context("Could not determine current directory")?;
    let executor = ShellExecutor::streaming();
    let reporter = Reporter::new(ctx.quiet);

    let report = Runner::new(&executor)
        .with_observer(&reporter)
        .install(config, &cwd)?;
    finish(&report)?;

    ui::success("Install complete");
    Ok(())
}
