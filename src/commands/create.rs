use anyhow::{Context as AnyhowContext, Result};
use colored::Colorize;
use std::env;

use super::{Reporter, finish};
use crate::Context;
use crate::cli::{CreateArgs, SiteArgs};
use crate::orchestrator::Orchestrator;
use crate::prompt::{Defaults, Interactive, Prompter};
use crate::runner::ShellExecutor;
use crate::site::{Site, SiteDefaults, SiteOptions};
use crate::ui;

/// Create a site; `setup` arrives here with `bare` set.
pub fn run(ctx: &Context, args: CreateArgs) -> Result<()> {
    let interactive = !args.site.yes && ctx.interactive();
    let prompter: &dyn Prompter = if interactive { &Interactive } else { &Defaults };

    let defaults = SiteDefaults {
        cwd: env::current_dir().context("Could not determine current directory")?,
        vvv_dir: ctx.vvv_dir(),
        starter_theme: ctx.config.starter_theme.clone(),
        db_host: ctx.config.db_host.clone(),
    };

    let site = options_from(args).resolve(&defaults, prompter)?;

    print_summary(&site);
    if interactive && !confirm_site(prompter)? {
        ui::warn("Aborted, nothing was changed");
        return Ok(());
    }

    let backend = ctx.backend()?;
    let executor = if ctx.verbose > 0 {
        ShellExecutor::streaming()
    } else {
        ShellExecutor::capturing()
    };
    let reporter = Reporter::new(ctx.quiet);

    println!();
    let report = Orchestrator::new(&backend, &executor)
        .with_observer(&reporter)
        .create(&site)?;
    finish(&report)?;

    println!();
    ui::success(&format!(
        "{} is ready at {}",
        site.name.bold(),
        format!("http://{}", site.dev_url).cyan()
    ));
    Ok(())
}

/// Final go-ahead; anything but an explicit yes aborts.
fn confirm_site(prompter: &dyn Prompter) -> Result<bool> {
    prompter.confirm("Do the options above look correct?", false)
}

fn options_from(args: CreateArgs) -> SiteOptions {
    let SiteArgs {
        name,
        location,
        url,
        repository,
        db_host,
        db_name,
        db_user,
        db_pass,
        yes: _,
    } = args.site;

    SiteOptions {
        name,
        location,
        theme: args.theme,
        url,
        repository,
        db_host,
        db_name,
        db_user,
        db_pass,
        bare: args.bare,
    }
}

fn print_summary(site: &Site) {
    ui::header(&format!("Site {}", site.name));
    ui::kv("Location", &site.location.display().to_string());
    ui::kv("Dev location", &site.dev_location.display().to_string());
    ui::kv("Dev url", &site.dev_url);
    ui::kv(
        "Starter theme",
        site.starter_theme.as_deref().unwrap_or("none (bare)"),
    );
    ui::kv("Repository", site.repository.as_deref().unwrap_or("none"));
    ui::kv("DB host", &site.db.host);
    ui::kv("DB name", &site.db.name);
    ui::kv("DB user", &site.db.user);
    ui::kv("DB password", &site.db.pass);
}
