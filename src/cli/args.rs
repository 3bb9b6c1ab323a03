//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all vpcheck
//! commands. It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `config-links`: Check sidebar/nav `link:` routes against the content root
//! - `links`: Check inline markdown links against the content root
//! - `unused-assets`: List public files no markdown refers to
//! - `init`: Initialize vpcheck configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::ConfigLinks(cmd)) => cmd.common.verbose,
            Some(Command::Links(cmd)) => cmd.common.verbose,
            Some(Command::UnusedAssets(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all check commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Markdown content root (overrides config file)
    #[arg(long, env = "VPCHECK_CONTENT_ROOT")]
    pub content_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ConfigLinksCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Sidebar config source (overrides config file)
    #[arg(long)]
    pub sidebar: Option<PathBuf>,

    /// Nav config source (overrides config file)
    #[arg(long)]
    pub nav: Option<PathBuf>,

    /// Where to write the JSON report
    #[arg(long, default_value = "config-broken-links.json")]
    pub out: PathBuf,
}

#[derive(Debug, Args)]
pub struct LinksCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Where to write the JSON report
    #[arg(long, default_value = "broken-links.json")]
    pub out: PathBuf,
}

#[derive(Debug, Args)]
pub struct UnusedAssetsCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Public/static asset root (overrides config file)
    #[arg(long)]
    pub public_root: Option<PathBuf>,

    /// Where to write the JSON report
    #[arg(long, default_value = "unused-assets.json")]
    pub out: PathBuf,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check that sidebar and nav links point at existing pages
    ConfigLinks(ConfigLinksCommand),
    /// Check that inline markdown links point at existing pages
    Links(LinksCommand),
    /// List public assets that no markdown file references
    UnusedAssets(UnusedAssetsCommand),
    /// Initialize a new .vpcheckrc.json configuration file
    Init,
}
