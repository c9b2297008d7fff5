mod cli;
mod commands;
mod config;
mod orchestrator;
mod paths;
mod progress;
mod prompt;
mod runner;
mod site;
mod ui;

use anyhow::{Context as AnyhowContext, Result};
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use cli::{Cli, Command, CreateArgs};
use config::JuiceConfig;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

/// Global context for the application
pub struct Context {
    pub verbose: u8,
    pub quiet: bool,
    pub vvv_path: Option<PathBuf>,
    pub config: JuiceConfig,
}

impl Context {
    /// Resolved VVV installation directory
    pub fn vvv_dir(&self) -> PathBuf {
        paths::vvv_dir(self.vvv_path.as_deref(), &self.config.vvv_path)
    }

    /// Backend for the configured VVV installation
    pub fn backend(&self) -> Result<vvv::VagrantBackend> {
        let dir = self.vvv_dir();
        vvv::VagrantBackend::new(&dir, &self.config.registry_file)
            .with_context(|| format!("Set --vvv-path or vvv_path in {}", config_hint()))
    }

    /// Whether questions can be asked on the terminal
    pub fn interactive(&self) -> bool {
        io::stdin().is_terminal()
    }
}

fn config_hint() -> String {
    JuiceConfig::path().map_or_else(|_| "config.toml".to_string(), |p| p.display().to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(if cli.quiet {
            log::LevelFilter::Error
        } else {
            log_level
        })
        .format_timestamp(None)
        .init();

    let ctx = Context {
        verbose: cli.verbose,
        quiet: cli.quiet,
        vvv_path: cli.vvv_path,
        config: JuiceConfig::load()?,
    };

    match cli.command {
        Command::Create(args) => commands::create::run(&ctx, args),
        Command::Setup(site) => commands::create::run(
            &ctx,
            CreateArgs {
                site,
                bare: true,
                theme: None,
            },
        ),
        Command::Delete { site, restart, yes } => commands::delete::run(&ctx, &site, restart, yes),
        Command::List { json } => commands::list::run(&ctx, json),
        Command::Install(args) => commands::install::run(&ctx, args.config.as_deref()),
        Command::Commands(args) => commands::juicefile::list(args.config.as_deref()),
        Command::Vm { args } => commands::vm::run(&ctx, &args),
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "tj", &mut io::stdout());
            Ok(())
        }
        Command::External(args) => commands::juicefile::run(&ctx, &args),
    }
}
