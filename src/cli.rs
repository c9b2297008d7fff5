use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::paths;

#[derive(Parser)]
#[command(name = "tj")]
#[command(version)]
#[command(about = "Scaffold and manage WordPress development sites on VVV", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// VVV installation directory
    #[arg(long, global = true, env = paths::ENV_VVV_PATH, value_name = "PATH")]
    pub vvv_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create a new site from a starter theme and register it with the VM
    Create(CreateArgs),

    /// Set up an existing site (create without a starter theme)
    Setup(SiteArgs),

    /// Remove a site from the VM (local files are kept)
    Delete {
        /// Site name
        site: String,

        /// Reload the VM after removing the site
        #[arg(short, long)]
        restart: bool,

        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// List sites registered with the VM
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the Juicefile's install command
    Install(JuicefileArgs),

    /// List commands defined in the Juicefile
    Commands(JuicefileArgs),

    /// Run vagrant inside the VVV directory
    Vm {
        /// Arguments passed to vagrant
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Any command defined in the Juicefile (watch, vendor, wp, ...)
    #[command(external_subcommand)]
    External(Vec<String>),
}

#[derive(Args, Clone, Default)]
pub struct CreateArgs {
    #[command(flatten)]
    pub site: SiteArgs,

    /// Create without cloning a starter theme
    #[arg(short, long)]
    pub bare: bool,

    /// Starter theme to clone (owner/repo, git URL or 'none')
    #[arg(short, long, conflicts_with = "bare")]
    pub theme: Option<String>,
}

/// Options shared by `create` and `setup`.
#[derive(Args, Clone, Default)]
pub struct SiteArgs {
    /// Site name (letters, digits, '.' and '-')
    pub name: Option<String>,

    /// Where to put the site's source
    #[arg(short, long)]
    pub location: Option<String>,

    /// Development URL (must end in .dev)
    #[arg(short, long)]
    pub url: Option<String>,

    /// Git remote to initialize the site's repository with
    #[arg(short, long)]
    pub repository: Option<String>,

    /// Database host
    #[arg(long)]
    pub db_host: Option<String>,

    /// Database name
    #[arg(long)]
    pub db_name: Option<String>,

    /// Database user
    #[arg(long)]
    pub db_user: Option<String>,

    /// Database password
    #[arg(long)]
    pub db_pass: Option<String>,

    /// Accept defaults without prompting
    #[arg(short, long)]
    pub yes: bool,
}

#[derive(Args, Clone, Default)]
pub struct JuicefileArgs {
    /// Juicefile to use instead of searching upward from the current directory
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
