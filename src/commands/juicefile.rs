//! Commands defined by the project's Juicefile.

use anyhow::{Context as AnyhowContext, Result, bail};
use colored::Colorize;
use std::env;
use std::path::Path;

use super::{Reporter, finish};
use crate::Context;
use crate::orchestrator::Runner;
use crate::runner::{self, ShellExecutor};
use crate::ui;
use juicefile::CommandTemplate;

/// Run a Juicefile command: `args[0]` is the command name, the rest its arguments.
///
/// Arguments are shell-quoted before substitution so they reach the
/// resolved command as single words.
pub fn run(ctx: &Context, args: &[String]) -> Result<()> {
    let Some((name, rest)) = args.split_first() else {
        bail!("No command given");
    };

    let cwd = env::current_dir().context("Could not determine current directory")?;
    let (path, resolver) = juicefile::load(None, &cwd)?;
    log::debug!("Using Juicefile {}", path.display());

    if !resolver.store().contains(name) {
        bail!(
            "Unknown command '{}'. Run {} to see the commands in {}",
            name,
            "tj commands".bold(),
            path.display()
        );
    }

    let quoted: Vec<_> = rest.iter().map(|arg| runner::quote(arg)).collect();
    let dir = path.parent().unwrap_or(&cwd);
    let executor = ShellExecutor::streaming();
    let reporter = Reporter::new(ctx.quiet);

    let report = Runner::new(&executor)
        .with_observer(&reporter)
        .run_command(&resolver, name, &quoted, dir)?;
    finish(&report)
}

/// Print every configured command with the arguments it takes.
pub fn list(config: Option<&Path>) -> Result<()> {
    let cwd = env::current_dir().context("Could not determine current directory")?;
    let (path, resolver) = juicefile::load(config, &cwd)?;

    ui::header("Commands");
    if resolver.store().is_empty() {
        ui::dim("No commands defined");
    }
    for template in resolver.store().templates() {
        println!("  {} {}", template.name().bold(), usage(template).dimmed());
        for step in template.steps() {
            ui::dim(&format!("  $ {step}"));
        }
    }
    println!();
    ui::kv("Juicefile", &path.display().to_string());
    Ok(())
}

fn usage(template: &CommandTemplate) -> String {
    if template.takes_all_args() {
        return "[args...]".to_string();
    }
    (1..=template.required_args())
        .map(|i| format!("<arg{i}>"))
        .collect::<Vec<_>>()
        .join(" ")
}
