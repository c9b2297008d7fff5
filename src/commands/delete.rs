use anyhow::Result;
use colored::Colorize;

use super::{Reporter, finish};
use crate::Context;
use crate::orchestrator::Orchestrator;
use crate::prompt::{Interactive, Prompter};
use crate::runner::ShellExecutor;
use crate::ui;

/// Remove a site from the VM; the site's files stay where they are.
pub fn run(ctx: &Context, site: &str, restart: bool, yes: bool) -> Result<()> {
    if !yes && ctx.interactive() {
        let question = format!("Remove {site} from the VM? Local files are kept");
        if !Interactive.confirm(&question, false)? {
            ui::warn("Aborted, nothing was changed");
            return Ok(());
        }
    }

    let backend = ctx.backend()?;
    let executor = ShellExecutor::capturing();
    let reporter = Reporter::new(ctx.quiet);

    let report = Orchestrator::new(&backend, &executor)
        .with_observer(&reporter)
        .delete(site, restart);
    finish(&report)?;

    if !restart {
        ui::dim(&format!(
            "Run {} to apply the change",
            "tj vm reload --provision".bold()
        ));
    }
    Ok(())
}
