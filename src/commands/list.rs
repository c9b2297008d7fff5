use anyhow::Result;
use colored::Colorize;
use std::collections::BTreeMap;

use crate::Context;
use crate::orchestrator;
use crate::ui;

pub fn run(ctx: &Context, json: bool) -> Result<()> {
    let backend = ctx.backend()?;
    let names = orchestrator::list(&backend)?;

    let mut sites = BTreeMap::new();
    for name in &names {
        if let Some(site) = backend.registry().get(name)? {
            sites.insert(name.clone(), site);
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&sites)?);
        return Ok(());
    }

    ui::header("Sites");
    if names.is_empty() {
        ui::dim("No sites registered");
        ui::dim(&format!("Create one with {}", "tj create <name>".bold()));
        return Ok(());
    }

    for name in &names {
        let hosts = sites
            .get(name)
            .map(|site| site.hosts.join(", "))
            .unwrap_or_default();
        println!("  {} {}", name.bold(), hosts.dimmed());
    }
    println!();
    ui::kv("Registry", &backend.registry().path().display().to_string());
    Ok(())
}
